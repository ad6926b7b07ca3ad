//! Variable trait extraction
//!
//! [`VariableTraits`] computes the `(Raw, Value, Owner)` triple for a type:
//!
//! | Input             | `Owner`   | `Value` | `Raw`           |
//! |-------------------|-----------|---------|-----------------|
//! | `Member<C, V>`    | `C`       | `V`     | `V` stripped    |
//! | any other `T`     | `NoOwner` | `T`     | `T` stripped    |
//!
//! Stripping is done by [`RawType`].

use crate::member::{Member, NoOwner};
use crate::raw::RawType;

/// Compile-time extraction of a variable's owner, declared type and raw type
pub trait VariableTraits {
    /// Aggregate that declares the variable, or [`NoOwner`]
    type Owner;

    /// Declared type with every layer intact
    type Value: ?Sized;

    /// Declared type with references, pointers and arrays removed
    type Raw: ?Sized;

    /// `true` when `Owner` is a real aggregate
    const HAS_OWNER: bool;
}

impl<O, V: RawType + ?Sized> VariableTraits for Member<O, V> {
    type Owner = O;
    type Value = V;
    type Raw = V::Raw;
    const HAS_OWNER: bool = true;
}

impl<T: RawType + ?Sized> VariableTraits for T {
    type Owner = NoOwner;
    type Value = T;
    type Raw = T::Raw;
    const HAS_OWNER: bool = false;
}

/// Raw (fully stripped) type of `T`
pub type RawTypeOf<T> = <T as VariableTraits>::Raw;

/// Declared value type of `T`
pub type ValueTypeOf<T> = <T as VariableTraits>::Value;

/// Owning aggregate of `T`, or [`NoOwner`]
pub type OwnerTypeOf<T> = <T as VariableTraits>::Owner;

/// Check whether a member-like value has an owning aggregate
///
/// Value-level companion to [`VariableTraits::HAS_OWNER`], handy when the
/// type is only known through inference (e.g. `has_owner(&Player::HEALTH)`).
pub const fn has_owner<T: VariableTraits + ?Sized>(_value: &T) -> bool {
    T::HAS_OWNER
}
