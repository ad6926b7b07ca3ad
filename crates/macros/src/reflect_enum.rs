//! ReflectEnum derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::{parse_reflect_enum, ReflectEnumArgs};

/// Generate the ReflectEnum implementation
pub fn derive_reflect_enum(input: DeriveInput) -> TokenStream {
    match parse_reflect_enum(&input) {
        Ok(args) => generate_impl(args),
        Err(e) => e.write_errors(),
    }
}

fn generate_impl(args: ReflectEnumArgs) -> TokenStream {
    let enum_name = &args.ident;

    if !args.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &args.generics,
            "ReflectEnum cannot be derived for generic enums",
        )
        .to_compile_error();
    }

    let variants = match &args.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&args.ident, "ReflectEnum can only be derived for enums")
                .to_compile_error()
        }
    };

    let type_name = args.name.clone().unwrap_or_else(|| enum_name.to_string());

    // Entries in declaration order
    let entries = variants.iter().map(|v| {
        let ident = &v.ident;
        let entry_name = v.entry_name();
        quote! { (#entry_name, Self::#ident as u64) }
    });

    quote! {
        impl ::dynreflect_core::traits::RawType for #enum_name {
            type Raw = Self;
        }

        impl ::dynreflect_core::ReflectEnum for #enum_name {
            const TYPE_NAME: &'static str = #type_name;

            const ENTRIES: &'static [(&'static str, u64)] = &[#(#entries),*];
        }
    }
}
