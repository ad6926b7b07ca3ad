//! Reflect derive macro implementation

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

use crate::parse::{parse_reflect, ReflectArgs, ReflectFieldArgs};

/// Generate the Reflect implementation
pub fn derive_reflect(input: DeriveInput) -> TokenStream {
    match parse_reflect(&input) {
        Ok(args) => generate_impl(args),
        Err(e) => e.write_errors(),
    }
}

fn generate_impl(args: ReflectArgs) -> TokenStream {
    let struct_name = &args.ident;
    let type_name = args
        .name
        .clone()
        .unwrap_or_else(|| struct_name.to_string());
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    let fields = match &args.data {
        darling::ast::Data::Struct(fields) => &fields.fields,
        _ => {
            return syn::Error::new_spanned(&args.ident, "Reflect can only be derived for structs")
                .to_compile_error()
        }
    };

    // One Member constant per reflected field
    let mut errors = darling::Error::accumulator();
    let mut taken = HashSet::new();
    let mut member_constants = Vec::new();

    for field in fields.iter().filter(|f| !f.skip) {
        let (Some(ident), Some(const_name)) = (&field.ident, field.const_name()) else {
            continue;
        };

        if !taken.insert(const_name.clone()) {
            errors.push(
                darling::Error::custom(format!(
                    "member constant `{}` is already generated for another field; \
                     rename or skip one of them",
                    const_name
                ))
                .with_span(ident),
            );
            continue;
        }

        member_constants.extend(generate_member_constant(field, &const_name));
    }

    if let Err(e) = errors.finish() {
        return e.write_errors();
    }

    quote! {
        impl #impl_generics ::dynreflect_core::traits::RawType for #struct_name #ty_generics #where_clause {
            type Raw = Self;
        }

        impl #impl_generics ::dynreflect_core::Reflect for #struct_name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
        }

        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#member_constants)*
        }
    }
}

fn generate_member_constant(field: &ReflectFieldArgs, const_name: &str) -> Option<TokenStream> {
    let member_name = field.member_name()?;
    let field_ty = &field.ty;
    let const_name = format_ident!("{}", const_name);

    let doc = format!("Member marker for field `{}`", member_name);

    Some(quote! {
        #[doc = #doc]
        pub const #const_name: ::dynreflect_core::traits::Member<Self, #field_ty> =
            ::dynreflect_core::traits::Member::new(#member_name);
    })
}
