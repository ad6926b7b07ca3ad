//! Attribute parsing for the Reflect and ReflectEnum derive macros

use darling::{FromDeriveInput, FromField, FromVariant};
use syn::{DeriveInput, Generics, Ident, Type};

/// Parsed #[reflect(...)] attributes on a struct
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(reflect), supports(struct_named))]
pub struct ReflectArgs {
    /// Struct identifier
    pub ident: Ident,

    /// Struct generics
    pub generics: Generics,

    /// Struct fields
    pub data: darling::ast::Data<(), ReflectFieldArgs>,

    /// Runtime type name (defaults to the struct identifier)
    #[darling(default)]
    pub name: Option<String>,
}

/// Parsed #[reflect(...)] attributes on a struct field
#[derive(Debug, FromField)]
#[darling(attributes(reflect))]
pub struct ReflectFieldArgs {
    /// Field identifier
    pub ident: Option<Ident>,

    /// Field type
    pub ty: Type,

    /// Member name override (defaults to the field identifier)
    #[darling(default)]
    pub rename: Option<String>,

    /// Don't generate a member constant for this field
    #[darling(default)]
    pub skip: bool,
}

impl ReflectFieldArgs {
    /// Field identifier without a raw-identifier prefix
    pub fn ident_str(&self) -> Option<String> {
        self.ident.as_ref().map(|ident| {
            let s = ident.to_string();
            s.strip_prefix("r#").map(str::to_string).unwrap_or(s)
        })
    }

    /// Name recorded in the generated `Member`
    pub fn member_name(&self) -> Option<String> {
        self.rename.clone().or_else(|| self.ident_str())
    }

    /// Name of the generated constant: upper case, leading underscore removed
    ///
    /// The underscore is kept when removing it would not leave an identifier
    /// (`_0` stays `_0`).
    pub fn const_name(&self) -> Option<String> {
        let ident_str = self.ident_str()?;
        let clean = match ident_str.strip_prefix('_') {
            Some(rest) if rest.starts_with(|c: char| c.is_alphabetic() || c == '_') => rest,
            _ => ident_str.as_str(),
        };
        Some(clean.to_uppercase())
    }
}

/// Parsed #[reflect(...)] attributes on an enum
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(reflect), supports(enum_unit))]
pub struct ReflectEnumArgs {
    /// Enum identifier
    pub ident: Ident,

    /// Enum generics (must be empty)
    pub generics: Generics,

    /// Enum variants
    pub data: darling::ast::Data<ReflectVariantArgs, ()>,

    /// Runtime type name (defaults to the enum identifier)
    #[darling(default)]
    pub name: Option<String>,
}

/// Parsed #[reflect(...)] attributes on an enum variant
#[derive(Debug, FromVariant)]
#[darling(attributes(reflect))]
pub struct ReflectVariantArgs {
    /// Variant identifier
    pub ident: Ident,

    /// Entry name override (defaults to the variant identifier)
    #[darling(default)]
    pub rename: Option<String>,
}

impl ReflectVariantArgs {
    /// Name recorded in the enum descriptor
    pub fn entry_name(&self) -> String {
        self.rename.clone().unwrap_or_else(|| {
            let s = self.ident.to_string();
            s.strip_prefix("r#").map(str::to_string).unwrap_or(s)
        })
    }
}

/// Parse a DeriveInput into ReflectArgs
pub fn parse_reflect(input: &DeriveInput) -> darling::Result<ReflectArgs> {
    ReflectArgs::from_derive_input(input)
}

/// Parse a DeriveInput into ReflectEnumArgs
pub fn parse_reflect_enum(input: &DeriveInput) -> darling::Result<ReflectEnumArgs> {
    ReflectEnumArgs::from_derive_input(input)
}
