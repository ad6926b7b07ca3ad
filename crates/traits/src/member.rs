//! Member-pointer analog
//!
//! A [`Member<O, V>`] names "a field of type `V` that belongs to aggregate
//! `O`". It carries no offset and cannot read or write the field; it exists
//! so the compiler can recover `O` and `V` through
//! [`VariableTraits`](crate::VariableTraits).

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

/// Owner marker for types that are not members of any aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoOwner;

/// A field of type `V` declared on aggregate `O`
///
/// `#[derive(Reflect)]` generates one associated constant per field:
///
/// ```ignore
/// #[derive(Reflect)]
/// struct Player {
///     health: i32,
/// }
///
/// // Generated:
/// // impl Player {
/// //     pub const HEALTH: Member<Player, i32> = Member::new("health");
/// // }
/// ```
pub struct Member<O, V: ?Sized> {
    name: &'static str,
    _marker: PhantomData<fn(&O) -> &V>,
}

impl<O, V: ?Sized> Member<O, V> {
    /// Create a member marker for the field called `name`
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Field name as declared on the owner
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Compiler-provided name of the owning type
    pub fn owner_type_name(&self) -> &'static str {
        type_name::<O>()
    }

    /// Compiler-provided name of the declared value type
    pub fn value_type_name(&self) -> &'static str {
        type_name::<V>()
    }
}

// Manual impls: derives would demand `O: Clone` / `V: Clone`.
impl<O, V: ?Sized> Clone for Member<O, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, V: ?Sized> Copy for Member<O, V> {}

impl<O, V: ?Sized> PartialEq for Member<O, V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<O, V: ?Sized> Eq for Member<O, V> {}

impl<O, V: ?Sized> fmt::Debug for Member<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("owner", &type_name::<O>())
            .field("name", &self.name)
            .field("value", &type_name::<V>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    const HEALTH: Member<Foo, i32> = Member::new("health");

    #[test]
    fn test_member_construction() {
        assert_eq!(HEALTH.name(), "health");
        assert!(HEALTH.owner_type_name().ends_with("Foo"));
        assert_eq!(HEALTH.value_type_name(), "i32");
    }

    #[test]
    fn test_member_is_copy_and_comparable() {
        let a = HEALTH;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, Member::<Foo, i32>::new("armor"));
    }

    #[test]
    fn test_member_is_zero_cost_marker() {
        assert_eq!(
            std::mem::size_of::<Member<Foo, [u8; 64]>>(),
            std::mem::size_of::<&'static str>()
        );
    }

    #[test]
    fn test_member_debug_output() {
        let debug = format!("{:?}", HEALTH);
        assert!(debug.contains("health"));
        assert!(debug.contains("i32"));
    }
}
