//! Aggregate (class-like) descriptors
//!
//! Only the name is recorded. Field-level structure is not described.

use super::{Descriptor, DescriptorKind};
use crate::reflect::Reflect;

/// Descriptor for a struct or class-like aggregate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateDescriptor {
    name: String,
}

impl AggregateDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a descriptor for a `#[derive(Reflect)]` type
    pub fn of<T: Reflect + ?Sized>() -> Self {
        Self::new(T::TYPE_NAME)
    }
}

impl Descriptor for AggregateDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_name() {
        let descriptor = AggregateDescriptor::new("CCSPlayerPawn");
        assert_eq!(descriptor.name(), "CCSPlayerPawn");
        assert_eq!(descriptor.kind(), DescriptorKind::Aggregate);
    }

    #[test]
    fn test_aggregate_of_reflected_type() {
        #[derive(crate::Reflect)]
        #[reflect(name = "Vector")]
        #[allow(dead_code)]
        struct Vec3 {
            x: f32,
            y: f32,
            z: f32,
        }

        assert_eq!(AggregateDescriptor::of::<Vec3>().name(), "Vector");
    }
}
