//! Traits implemented by the derive macros
//!
//! - `#[derive(Reflect)]` implements [`Reflect`] on named structs and adds
//!   one [`Member`](crate::traits::Member) constant per field.
//! - `#[derive(ReflectEnum)]` implements [`ReflectEnum`] on fieldless enums.
//!
//! Both derives also mark the type as a [`RawType`] leaf so it can appear
//! behind references, pointers and arrays in member declarations.

use dynreflect_traits::RawType;

use crate::descriptor::EnumDescriptor;

/// A struct whose name and member markers were generated by `#[derive(Reflect)]`
pub trait Reflect: RawType {
    /// Name used when describing this type at runtime
    const TYPE_NAME: &'static str;
}

/// A fieldless enum whose variants were captured by `#[derive(ReflectEnum)]`
///
/// # Example
///
/// ```
/// use dynreflect_core::{ReflectEnum, Descriptor};
///
/// #[derive(ReflectEnum)]
/// enum Team {
///     Spectator = 1,
///     Terrorist = 2,
///     #[reflect(rename = "CT")]
///     CounterTerrorist = 3,
/// }
///
/// let descriptor = Team::descriptor();
/// assert_eq!(descriptor.name(), "Team");
/// assert_eq!(descriptor.value_by_name("CT"), Some(3));
/// ```
pub trait ReflectEnum: RawType {
    /// Name used when describing this type at runtime
    const TYPE_NAME: &'static str;

    /// `(name, value)` pairs in declaration order
    ///
    /// Values are the discriminants cast with `as u64`; negative
    /// discriminants wrap.
    const ENTRIES: &'static [(&'static str, u64)];

    /// Build an unregistered descriptor for this enum
    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::with_entries(Self::TYPE_NAME, Self::ENTRIES.iter().copied())
    }
}
