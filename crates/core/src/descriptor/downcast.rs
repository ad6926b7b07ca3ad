//! Checked downcasts from [`TypeDescriptor`] to a concrete kind
//!
//! All helpers return `None` when the descriptor is of a different kind.
//! None of them panic.

use std::sync::Arc;

use super::{
    AggregateDescriptor, Descriptor, DescriptorKind, EnumDescriptor, NumericDescriptor,
    TypeDescriptor,
};

/// Implemented by every concrete descriptor kind
pub trait DescriptorType: Descriptor + Sized {
    /// Kind tag matching this type
    const KIND: DescriptorKind;

    /// Borrow the shared payload if `descriptor` is of this kind
    fn from_descriptor(descriptor: &TypeDescriptor) -> Option<&Arc<Self>>;

    /// Mutable access to the shared payload if `descriptor` is of this kind
    fn from_descriptor_mut(descriptor: &mut TypeDescriptor) -> Option<&mut Arc<Self>>;

    /// Wrap a shared payload into a [`TypeDescriptor`]
    fn into_descriptor(shared: Arc<Self>) -> TypeDescriptor;
}

/// Borrow `descriptor` as kind `K`
pub fn downcast_ref<K: DescriptorType>(descriptor: &TypeDescriptor) -> Option<&K> {
    K::from_descriptor(descriptor).map(Arc::as_ref)
}

/// Share `descriptor` as kind `K`
///
/// The returned `Arc` points at the same instance the catalog holds.
pub fn downcast<K: DescriptorType>(descriptor: &TypeDescriptor) -> Option<Arc<K>> {
    K::from_descriptor(descriptor).cloned()
}

/// Exclusive access to `descriptor` as kind `K`
///
/// Succeeds only while this handle is the sole owner. Once a descriptor has
/// been registered (or cloned) this returns `None`, which is how shared
/// descriptors stay immutable.
pub fn downcast_mut<K: DescriptorType>(descriptor: &mut TypeDescriptor) -> Option<&mut K> {
    K::from_descriptor_mut(descriptor).and_then(Arc::get_mut)
}

macro_rules! impl_descriptor_type {
    ($ty:ty, $variant:ident) => {
        impl DescriptorType for $ty {
            const KIND: DescriptorKind = DescriptorKind::$variant;

            fn from_descriptor(descriptor: &TypeDescriptor) -> Option<&Arc<Self>> {
                match descriptor {
                    TypeDescriptor::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_descriptor_mut(descriptor: &mut TypeDescriptor) -> Option<&mut Arc<Self>> {
                match descriptor {
                    TypeDescriptor::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_descriptor(shared: Arc<Self>) -> TypeDescriptor {
                TypeDescriptor::$variant(shared)
            }
        }

        impl From<$ty> for TypeDescriptor {
            fn from(descriptor: $ty) -> Self {
                <$ty as DescriptorType>::into_descriptor(Arc::new(descriptor))
            }
        }

        impl From<Arc<$ty>> for TypeDescriptor {
            fn from(shared: Arc<$ty>) -> Self {
                <$ty as DescriptorType>::into_descriptor(shared)
            }
        }
    };
}

impl_descriptor_type!(NumericDescriptor, Numeric);
impl_descriptor_type!(EnumDescriptor, Enum);
impl_descriptor_type!(AggregateDescriptor, Aggregate);
