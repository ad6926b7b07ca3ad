//! Descriptor catalog - Name to descriptor mapping
//!
//! The catalog stores one [`TypeDescriptor`](crate::descriptor::TypeDescriptor)
//! per name and hands out shared handles to it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Catalog                              │
//! │   DashMap<String, TypeDescriptor>                           │
//! │   RwLock<RegistrationPolicy>                                │
//! └─────────────────────────────┬───────────────────────────────┘
//!            ▲ register / register_enum          │ get / get_as
//!            │                                   ▼
//! ┌──────────┴──────────┐             ┌──────────────────────────┐
//! │ Startup code        │             │ Inspectors, bindings     │
//! │ (derives, builders) │             │ (downcast by kind)       │
//! └─────────────────────┘             └──────────────────────────┘
//! ```
//!
//! # Registration policy
//!
//! [`Catalog::register`] follows the catalog's [`RegistrationPolicy`]. The
//! default, [`RegistrationPolicy::KeepExisting`], makes registration
//! idempotent: the first descriptor stored under a name stays there.
//! [`Catalog::register_replace`] always overwrites, and
//! [`Catalog::register_enum`] always keeps the existing entry.
//!
//! # Global instance
//!
//! Most programs only need one catalog. [`global`] holds a process-wide one
//! with an explicit [`init_catalog`] step and a lazily created default.
//!
//! ```ignore
//! use dynreflect_core::catalog::{init_catalog, register_enum_type_info, get_type_info};
//!
//! init_catalog(&CatalogConfig::load()?)?;
//!
//! register_enum_type_info("Team", [("T", 2), ("CT", 3)]);
//! let team = get_type_info("Team").and_then(|d| d.downcast::<EnumDescriptor>());
//! ```

pub mod global;
pub mod registry;

use serde::{Deserialize, Serialize};

pub use global::{
    catalog, get_type_info, init_catalog, is_catalog_initialized, register_enum_type_info,
    register_type_info, try_catalog,
};
pub use registry::{Catalog, CatalogError};

/// What [`Catalog::register`] does when the name is already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Keep the stored descriptor and return it
    #[default]
    KeepExisting,
    /// Replace the stored descriptor (last write wins)
    Overwrite,
    /// Fail with [`CatalogError::AlreadyRegistered`]
    Reject,
}
