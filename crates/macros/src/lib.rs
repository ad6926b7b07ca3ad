//! dynreflect Proc Macros
//!
//! This crate provides derive macros for the dynreflect framework:
//!
//! - `#[derive(Reflect)]` - Type name plus one `Member` constant per field
//! - `#[derive(ReflectEnum)]` - Enumeration entries for building descriptors
//!
//! # Reflect Example
//!
//! ```ignore
//! use dynreflect_core::Reflect;
//!
//! #[derive(Reflect)]
//! #[reflect(name = "CCSPlayerPawn")]
//! pub struct PlayerPawn {
//!     health: i32,
//!
//!     #[reflect(rename = "m_ArmorValue")]
//!     armor: &'static [i32; 2],
//!
//!     #[reflect(skip)]
//!     scratch: Vec<u8>,
//! }
//!
//! // Generated:
//! // - PlayerPawn::TYPE_NAME == "CCSPlayerPawn"
//! // - PlayerPawn::HEALTH: Member<PlayerPawn, i32>
//! // - PlayerPawn::ARMOR: Member<PlayerPawn, &'static [i32; 2]> named "m_ArmorValue"
//! ```
//!
//! # ReflectEnum Example
//!
//! ```ignore
//! use dynreflect_core::ReflectEnum;
//!
//! #[derive(ReflectEnum)]
//! enum Team {
//!     Spectator = 1,
//!     Terrorist = 2,
//!     #[reflect(rename = "CT")]
//!     CounterTerrorist = 3,
//! }
//!
//! // Generated:
//! // - Team::TYPE_NAME == "Team"
//! // - Team::ENTRIES == [("Spectator", 1), ("Terrorist", 2), ("CT", 3)]
//! ```
//!
//! # Attributes
//!
//! ## Container Attributes
//!
//! - `#[reflect(name = "TypeName")]` - Optional. Runtime type name (default: the identifier).
//!
//! ## Field / Variant Attributes
//!
//! - `#[reflect(rename = "name")]` - Name recorded for the member or entry.
//! - `#[reflect(skip)]` - Fields only. Don't generate a member constant.

mod parse;
mod reflect;
mod reflect_enum;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro for reflected structs
///
/// Supports named structs, including generic ones.
///
/// # Generated Code
///
/// - `impl RawType for T { type Raw = T; }`
/// - `impl Reflect for T { const TYPE_NAME: &str = ...; }`
/// - For each field (unless `skip`), an associated constant named after the
///   field in upper case, with any leading underscore removed:
///   `pub const HEALTH: Member<Self, i32> = Member::new("health");`
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::derive_reflect(input).into()
}

/// Derive macro for reflected fieldless enums
///
/// # Generated Code
///
/// - `impl RawType for E { type Raw = E; }`
/// - `impl ReflectEnum for E` with `TYPE_NAME` and `ENTRIES`, the latter
///   listing `(name, discriminant as u64)` in declaration order
#[proc_macro_derive(ReflectEnum, attributes(reflect))]
pub fn derive_reflect_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect_enum::derive_reflect_enum(input).into()
}
