//! dynreflect - Runtime type descriptors
//!
//! This crate builds named descriptors of value shapes (numeric kinds,
//! enumerations, aggregates), stores them in a catalog and hands them back
//! by name.
//!
//! # Re-exports
//!
//! - [`traits`] - compile-time member/raw type extraction (`dynreflect-traits`)
//! - `Reflect` / `ReflectEnum` derives (`dynreflect-macros`)
//!
//! # Example
//!
//! ```
//! use dynreflect_core::catalog::Catalog;
//! use dynreflect_core::descriptor::{NumericCategory, NumericDescriptor};
//! use dynreflect_core::Descriptor;
//!
//! let catalog = Catalog::default();
//! catalog
//!     .register("health", NumericDescriptor::new(NumericCategory::Int32, true))
//!     .unwrap();
//!
//! let health = catalog.get_as::<NumericDescriptor>("health").unwrap();
//! assert_eq!(health.name(), "int32");
//! ```

// Allow the crate to refer to itself as `dynreflect_core` for proc macro compatibility
extern crate self as dynreflect_core;

// Re-export the type-level crate
pub use dynreflect_traits as traits;

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod logging;
pub mod reflect;

// Re-export commonly used items
pub use catalog::{
    catalog, get_type_info, init_catalog, register_enum_type_info, register_type_info,
    try_catalog, Catalog, CatalogError, RegistrationPolicy,
};
pub use descriptor::{
    downcast, downcast_mut, downcast_ref, AggregateDescriptor, Descriptor, DescriptorKind,
    DescriptorType, EnumDescriptor, EnumEntry, NumericCategory, NumericDescriptor,
    TypeDescriptor,
};
pub use reflect::{Reflect, ReflectEnum};

// Re-export config types
pub use config::{CatalogConfig, ConfigError, ConfigResult};
pub use logging::init_logging;

// Re-export the type-level API
pub use traits::{Member, NoOwner, OwnerTypeOf, RawType, RawTypeOf, ValueTypeOf, VariableTraits};

// Re-export macros
pub use dynreflect_macros::{Reflect, ReflectEnum};
