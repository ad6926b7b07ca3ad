//! Type descriptors - Runtime metadata describing value shapes
//!
//! Every descriptor carries a name. The concrete kinds add their own data:
//!
//! - [`NumericDescriptor`] - numeric category and signedness
//! - [`EnumDescriptor`] - ordered `(name, value)` entries
//! - [`AggregateDescriptor`] - placeholder for class-like aggregates
//!
//! The kinds form a closed set, so [`TypeDescriptor`] is a tagged sum over
//! them. Each arm holds an `Arc`, which makes cloning a `TypeDescriptor` a
//! reference-count bump and lets the catalog and its callers share one
//! descriptor.
//!
//! # Downcasting
//!
//! ```
//! use dynreflect_core::descriptor::{
//!     downcast, downcast_ref, EnumDescriptor, NumericCategory, NumericDescriptor, TypeDescriptor,
//! };
//!
//! let numeric = TypeDescriptor::from(NumericDescriptor::new(NumericCategory::Int32, true));
//!
//! assert!(downcast_ref::<EnumDescriptor>(&numeric).is_none());
//! let shared = downcast::<NumericDescriptor>(&numeric).unwrap();
//! assert_eq!(shared.category(), NumericCategory::Int32);
//! ```

pub mod aggregate;
pub mod downcast;
pub mod enumeration;
pub mod numeric;

use std::fmt;
use std::sync::Arc;

pub use aggregate::AggregateDescriptor;
pub use downcast::{downcast, downcast_mut, downcast_ref, DescriptorType};
pub use enumeration::{EnumDescriptor, EnumEntry};
pub use numeric::{NumericCategory, NumericDescriptor, ParseCategoryError};

/// Name reported for anything that could not be classified
pub const UNKNOWN_NAME: &str = "Unknown";

/// Common interface of every descriptor
pub trait Descriptor {
    /// Descriptor name, assigned at construction
    fn name(&self) -> &str;

    /// Which concrete kind this descriptor is
    fn kind(&self) -> DescriptorKind;
}

/// Tag identifying a concrete descriptor kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Numeric,
    Enum,
    Aggregate,
}

impl DescriptorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Enum => "enum",
            Self::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shared descriptor of any kind
///
/// This is what the catalog stores and hands out. Use [`downcast`] or
/// [`downcast_ref`] (or the methods of the same name) to get at the
/// kind-specific data.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Numeric(Arc<NumericDescriptor>),
    Enum(Arc<EnumDescriptor>),
    Aggregate(Arc<AggregateDescriptor>),
}

impl TypeDescriptor {
    /// Borrow the payload if it is of kind `K`
    pub fn downcast_ref<K: DescriptorType>(&self) -> Option<&K> {
        downcast_ref(self)
    }

    /// Share the payload if it is of kind `K`
    pub fn downcast<K: DescriptorType>(&self) -> Option<Arc<K>> {
        downcast(self)
    }

    /// Check whether two handles point at the same descriptor instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => Arc::ptr_eq(a, b),
            (Self::Enum(a), Self::Enum(b)) => Arc::ptr_eq(a, b),
            (Self::Aggregate(a), Self::Aggregate(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Descriptor for TypeDescriptor {
    fn name(&self) -> &str {
        match self {
            Self::Numeric(inner) => inner.name(),
            Self::Enum(inner) => inner.name(),
            Self::Aggregate(inner) => inner.name(),
        }
    }

    fn kind(&self) -> DescriptorKind {
        match self {
            Self::Numeric(_) => DescriptorKind::Numeric,
            Self::Enum(_) => DescriptorKind::Enum,
            Self::Aggregate(_) => DescriptorKind::Aggregate,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_name_dispatch() {
        let numeric = TypeDescriptor::from(NumericDescriptor::new(NumericCategory::Float, true));
        let enumeration = TypeDescriptor::from(EnumDescriptor::new("Color"));
        let aggregate = TypeDescriptor::from(AggregateDescriptor::new("Player"));

        assert_eq!(numeric.name(), "float");
        assert_eq!(numeric.kind(), DescriptorKind::Numeric);
        assert_eq!(enumeration.name(), "Color");
        assert_eq!(enumeration.kind(), DescriptorKind::Enum);
        assert_eq!(aggregate.name(), "Player");
        assert_eq!(aggregate.kind(), DescriptorKind::Aggregate);
    }

    #[test]
    fn test_clone_shares_instance() {
        let original = TypeDescriptor::from(EnumDescriptor::new("Team"));
        let copy = original.clone();
        assert!(original.ptr_eq(&copy));

        let other = TypeDescriptor::from(EnumDescriptor::new("Team"));
        assert!(!original.ptr_eq(&other));
        // Same content, different instance
        assert_eq!(original, other);
    }

    #[test]
    fn test_display() {
        let numeric = TypeDescriptor::from(NumericDescriptor::new(NumericCategory::Int64, true));
        assert_eq!(numeric.to_string(), "int64 (numeric)");
    }
}
