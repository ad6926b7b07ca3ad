//! dynreflect traits - Compile-time member type extraction
//!
//! This crate contains the type-level half of dynreflect. It has no
//! dependencies and no runtime state: everything here is resolved by the
//! compiler through associated types.
//!
//! # Modules
//!
//! - [`raw`] - [`RawType`], recursive stripping of references, pointers and arrays
//! - [`member`] - [`Member`], the member-pointer analog tying a value type to its owner
//! - [`variable`] - [`VariableTraits`], the `(Raw, Value, Owner)` extraction
//!
//! # Example
//!
//! ```
//! use dynreflect_traits::{Member, NoOwner, OwnerTypeOf, RawTypeOf, ValueTypeOf};
//!
//! struct Foo;
//!
//! type Health = Member<Foo, &'static i32>;
//!
//! let _raw: RawTypeOf<Health> = 5i32;
//! let _value: ValueTypeOf<Health> = &5;
//! let _owner: OwnerTypeOf<Health> = Foo;
//! let _none: OwnerTypeOf<&'static i32> = NoOwner;
//! ```

pub mod member;
pub mod raw;
pub mod variable;

pub use member::{Member, NoOwner};
pub use raw::RawType;
pub use variable::{has_owner, OwnerTypeOf, RawTypeOf, ValueTypeOf, VariableTraits};
