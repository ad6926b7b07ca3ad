//! Process-wide catalog
//!
//! The global catalog is stored in a `OnceLock` and lives for the rest of the
//! process once created. Two ways to bring it up:
//!
//! - [`init_catalog`] - explicit, configured initialization. Call it once at
//!   startup, before anything registers or looks up descriptors.
//! - [`catalog`] - first access without a prior `init_catalog` creates a
//!   default-configured catalog.
//!
//! There is no teardown; [`Catalog::clear`] empties it when a reset is
//! needed (tests, hot reload).

use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use super::registry::{Catalog, CatalogError};
use crate::config::CatalogConfig;
use crate::descriptor::{EnumDescriptor, TypeDescriptor};

/// Global catalog storage
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Initialize the global catalog from `config`
///
/// # Errors
/// [`CatalogError::AlreadyInitialized`] if the catalog already exists, either
/// from an earlier `init_catalog` or from a lazy [`catalog`] access.
pub fn init_catalog(config: &CatalogConfig) -> Result<&'static Catalog, CatalogError> {
    CATALOG
        .set(Catalog::new(config))
        .map_err(|_| CatalogError::AlreadyInitialized)?;

    info!(
        "Type catalog initialized (policy={:?})",
        config.registration_policy
    );
    Ok(catalog())
}

/// Get the global catalog, creating a default one on first access
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        debug!("Type catalog created with default configuration");
        Catalog::default()
    })
}

/// Get the global catalog if it has been created
pub fn try_catalog() -> Option<&'static Catalog> {
    CATALOG.get()
}

/// Check if the global catalog exists
pub fn is_catalog_initialized() -> bool {
    CATALOG.get().is_some()
}

/// Look up a descriptor in the global catalog
pub fn get_type_info(name: &str) -> Option<TypeDescriptor> {
    catalog().get(name)
}

/// Register a descriptor in the global catalog
///
/// See [`Catalog::register`].
pub fn register_type_info(
    name: impl Into<String>,
    descriptor: impl Into<TypeDescriptor>,
) -> Result<TypeDescriptor, CatalogError> {
    catalog().register(name, descriptor)
}

/// Register an enumeration in the global catalog, or return the existing one
///
/// See [`Catalog::register_enum`].
pub fn register_enum_type_info<I, S>(name: &str, entries: I) -> Option<Arc<EnumDescriptor>>
where
    I: IntoIterator<Item = (S, u64)>,
    S: Into<String>,
{
    catalog().register_enum(name, entries)
}
