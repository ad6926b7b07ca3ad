//! Catalog storage and registration
//!
//! The map is a `DashMap`, so registration and lookup can happen from any
//! thread. Descriptors are immutable once stored; build them fully before
//! registering.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use super::RegistrationPolicy;
use crate::config::CatalogConfig;
use crate::descriptor::{Descriptor, DescriptorType, EnumDescriptor, TypeDescriptor};
use crate::reflect::ReflectEnum;

/// Error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Descriptor already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Descriptor names must not be empty")]
    InvalidName,

    #[error("Catalog already initialized")]
    AlreadyInitialized,
}

/// Name to descriptor mapping
#[derive(Debug, Default)]
pub struct Catalog {
    entries: DashMap<String, TypeDescriptor>,
    policy: RwLock<RegistrationPolicy>,
}

impl Catalog {
    /// Create an empty catalog configured from `config`
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_policy(config.registration_policy)
    }

    /// Create an empty catalog with an explicit registration policy
    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        Self {
            entries: DashMap::new(),
            policy: RwLock::new(policy),
        }
    }

    /// Look up the descriptor stored under `name`
    pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
        let found = self.entries.get(name).map(|entry| entry.value().clone());
        trace!("Catalog lookup {}: hit={}", name, found.is_some());
        found
    }

    /// Look up `name` and downcast it to kind `K`
    ///
    /// Returns `None` when the name is missing or holds another kind.
    pub fn get_as<K: DescriptorType>(&self, name: &str) -> Option<Arc<K>> {
        self.get(name)?.downcast::<K>()
    }

    /// Register `descriptor` under `name`, following the catalog policy
    ///
    /// # Returns
    /// The descriptor now stored under `name`. With
    /// [`RegistrationPolicy::KeepExisting`] this is the previously stored
    /// one when the name was taken, and `descriptor` is dropped. Compare
    /// with [`TypeDescriptor::ptr_eq`] to tell whether yours was stored:
    ///
    /// ```
    /// use dynreflect_core::{AggregateDescriptor, Catalog, TypeDescriptor};
    ///
    /// let catalog = Catalog::default();
    /// catalog.register("Player", AggregateDescriptor::new("first")).unwrap();
    ///
    /// let mine = TypeDescriptor::from(AggregateDescriptor::new("second"));
    /// let stored = catalog.register("Player", mine.clone()).unwrap();
    /// assert!(!stored.ptr_eq(&mine));
    /// ```
    ///
    /// # Errors
    /// - [`CatalogError::InvalidName`] if `name` is empty
    /// - [`CatalogError::AlreadyRegistered`] if the name is taken and the
    ///   policy is [`RegistrationPolicy::Reject`]
    pub fn register(
        &self,
        name: impl Into<String>,
        descriptor: impl Into<TypeDescriptor>,
    ) -> Result<TypeDescriptor, CatalogError> {
        let name = validate_name(name.into())?;
        let descriptor = descriptor.into();
        let policy = self.policy();

        match self.entries.entry(name) {
            Entry::Vacant(vacant) => {
                debug!("Registered {} as {}", vacant.key(), descriptor);
                vacant.insert(descriptor.clone());
                Ok(descriptor)
            }
            Entry::Occupied(mut occupied) => match policy {
                RegistrationPolicy::KeepExisting => {
                    debug!(
                        "{} already registered, keeping {}",
                        occupied.key(),
                        occupied.get()
                    );
                    Ok(occupied.get().clone())
                }
                RegistrationPolicy::Overwrite => {
                    let previous = occupied.insert(descriptor.clone());
                    debug!(
                        "Replaced {}: {} -> {}",
                        occupied.key(),
                        previous,
                        descriptor
                    );
                    Ok(descriptor)
                }
                RegistrationPolicy::Reject => {
                    warn!("Rejected duplicate registration of {}", occupied.key());
                    Err(CatalogError::AlreadyRegistered(occupied.key().clone()))
                }
            },
        }
    }

    /// Register `descriptor` under `name`, replacing any existing entry
    ///
    /// # Returns
    /// The previously stored descriptor, if any.
    pub fn register_replace(
        &self,
        name: impl Into<String>,
        descriptor: impl Into<TypeDescriptor>,
    ) -> Result<Option<TypeDescriptor>, CatalogError> {
        let name = validate_name(name.into())?;
        let descriptor = descriptor.into();
        debug!("Registered {} as {} (replace)", name, descriptor);
        Ok(self.entries.insert(name, descriptor))
    }

    /// Register an enumeration descriptor, or return the one already stored
    ///
    /// If `name` is free, a new [`EnumDescriptor`] is populated from
    /// `entries`, stored and returned. If `name` is taken, `entries` is
    /// ignored and the stored descriptor is returned; `None` when it is not
    /// an enumeration. The check and the insert happen under one shard lock.
    ///
    /// `entries` is consumed before that lock is taken, so it may look up
    /// other descriptors in this catalog.
    ///
    /// # Example
    /// ```
    /// use dynreflect_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::default();
    /// let first = catalog.register_enum("Team", [("T", 2), ("CT", 3)]).unwrap();
    /// let second = catalog.register_enum("Team", [("Spectator", 1)]).unwrap();
    ///
    /// assert_eq!(second.len(), 2);
    /// assert!(std::sync::Arc::ptr_eq(&first, &second));
    /// ```
    pub fn register_enum<I, S>(&self, name: &str, entries: I) -> Option<Arc<EnumDescriptor>>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        if name.is_empty() {
            warn!("Ignoring enum registration with an empty name");
            return None;
        }

        // `entries` may read the catalog, so drain it before taking the shard lock
        let candidate = TypeDescriptor::from(EnumDescriptor::with_entries(name, entries));

        let stored = match self.entries.entry(name.to_string()) {
            Entry::Occupied(occupied) => {
                trace!("Enum {} already registered", name);
                occupied.get().clone()
            }
            Entry::Vacant(vacant) => {
                vacant.insert(candidate.clone());
                debug!("Registered enum {}", name);
                candidate
            }
        };

        let result = stored.downcast::<EnumDescriptor>();
        if result.is_none() {
            warn!("{} is registered as {}, not an enum", name, stored.kind());
        }
        result
    }

    /// Register the descriptor of a `#[derive(ReflectEnum)]` type
    ///
    /// Same semantics as [`Self::register_enum`], keyed by `E::TYPE_NAME`.
    pub fn register_enum_type<E: ReflectEnum>(&self) -> Option<Arc<EnumDescriptor>> {
        self.register_enum(E::TYPE_NAME, E::ENTRIES.iter().copied())
    }

    /// Remove and return the descriptor stored under `name`
    pub fn unregister(&self, name: &str) -> Option<TypeDescriptor> {
        let removed = self.entries.remove(name).map(|(_, descriptor)| descriptor);
        if removed.is_some() {
            debug!("Unregistered {}", name);
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Remove every descriptor
    ///
    /// Handles obtained earlier stay valid; they just no longer appear in
    /// the catalog.
    pub fn clear(&self) {
        self.entries.clear();
        debug!("Catalog cleared");
    }

    pub fn policy(&self) -> RegistrationPolicy {
        *self.policy.read()
    }

    pub fn set_policy(&self, policy: RegistrationPolicy) {
        *self.policy.write() = policy;
        debug!("Registration policy set to {:?}", policy);
    }
}

fn validate_name(name: String) -> Result<String, CatalogError> {
    if name.is_empty() {
        Err(CatalogError::InvalidName)
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{AggregateDescriptor, NumericCategory, NumericDescriptor};

    fn int32() -> NumericDescriptor {
        NumericDescriptor::new(NumericCategory::Int32, true)
    }

    #[test]
    fn test_register_and_get_round_trip() {
        let catalog = Catalog::default();
        let stored = catalog.register("X", int32()).unwrap();

        let found = catalog.get("X").unwrap();
        assert!(found.ptr_eq(&stored));
        assert_eq!(found.downcast_ref::<NumericDescriptor>(), Some(&int32()));
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::default();
        assert!(catalog.get("missing").is_none());
        assert!(catalog.get_as::<EnumDescriptor>("missing").is_none());
    }

    #[test]
    fn test_get_as_checks_kind() {
        let catalog = Catalog::default();
        catalog.register("int", int32()).unwrap();

        assert!(catalog.get_as::<EnumDescriptor>("int").is_none());
        let numeric = catalog.get_as::<NumericDescriptor>("int").unwrap();
        assert_eq!(numeric.category(), NumericCategory::Int32);
    }

    #[test]
    fn test_keep_existing_policy() {
        let catalog = Catalog::default();
        assert_eq!(catalog.policy(), RegistrationPolicy::KeepExisting);

        let first = catalog.register("T", AggregateDescriptor::new("first")).unwrap();
        let second = catalog.register("T", AggregateDescriptor::new("second")).unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(catalog.get("T").unwrap().name(), "first");
    }

    #[test]
    fn test_keep_existing_result_identifies_stored_descriptor() {
        let catalog = Catalog::default();

        let first = TypeDescriptor::from(int32());
        let stored = catalog.register("T", first.clone()).unwrap();
        assert!(stored.ptr_eq(&first));

        let second = TypeDescriptor::from(AggregateDescriptor::new("second"));
        let stored = catalog.register("T", second.clone()).unwrap();
        assert!(!stored.ptr_eq(&second));
        assert!(stored.ptr_eq(&first));
    }

    #[test]
    fn test_overwrite_policy() {
        let catalog = Catalog::with_policy(RegistrationPolicy::Overwrite);

        catalog.register("T", AggregateDescriptor::new("first")).unwrap();
        let second = catalog.register("T", AggregateDescriptor::new("second")).unwrap();

        assert_eq!(second.name(), "second");
        assert_eq!(catalog.get("T").unwrap().name(), "second");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_reject_policy() {
        let catalog = Catalog::with_policy(RegistrationPolicy::Reject);

        catalog.register("T", AggregateDescriptor::new("first")).unwrap();
        let err = catalog
            .register("T", AggregateDescriptor::new("second"))
            .unwrap_err();

        assert_eq!(err, CatalogError::AlreadyRegistered("T".to_string()));
        assert_eq!(catalog.get("T").unwrap().name(), "first");
    }

    #[test]
    fn test_set_policy() {
        let catalog = Catalog::default();
        catalog.set_policy(RegistrationPolicy::Reject);
        assert_eq!(catalog.policy(), RegistrationPolicy::Reject);
    }

    #[test]
    fn test_register_replace() {
        let catalog = Catalog::default();

        assert_eq!(catalog.register_replace("T", int32()).unwrap(), None);
        let previous = catalog
            .register_replace("T", AggregateDescriptor::new("Player"))
            .unwrap()
            .unwrap();

        assert_eq!(previous.name(), "int32");
        assert_eq!(catalog.get("T").unwrap().name(), "Player");
    }

    #[test]
    fn test_empty_name_rejected() {
        let catalog = Catalog::default();

        assert_eq!(catalog.register("", int32()), Err(CatalogError::InvalidName));
        assert_eq!(
            catalog.register_replace("", int32()),
            Err(CatalogError::InvalidName)
        );
        assert!(catalog.register_enum("", [("A", 1)]).is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_register_enum_is_idempotent() {
        let catalog = Catalog::with_policy(RegistrationPolicy::Overwrite);

        let first = catalog.register_enum("E", [("A", 1), ("B", 2)]).unwrap();
        let second = catalog.register_enum("E", [("Z", 26)]).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
        assert_eq!(second.value_by_name("Z"), None);

        let stored = catalog.get_as::<EnumDescriptor>("E").unwrap();
        assert!(Arc::ptr_eq(&first, &stored));
    }

    #[test]
    fn test_register_enum_entries_may_read_catalog() {
        let catalog = Catalog::default();
        let base = catalog
            .register_enum("BaseSlot", [("Primary", 0), ("Secondary", 1)])
            .unwrap();

        // Extends the base enum lazily, looking it and the new name up mid-registration
        let extended = catalog
            .register_enum(
                "ExtendedSlot",
                base.entries()
                    .iter()
                    .map(|entry| {
                        assert!(!catalog.contains("ExtendedSlot"));
                        let base = catalog.get_as::<EnumDescriptor>("BaseSlot").unwrap();
                        (entry.name.clone(), base.value_by_name(&entry.name).unwrap())
                    })
                    .chain([("Knife".to_string(), 5)]),
            )
            .unwrap();

        assert_eq!(extended.len(), 3);
        assert_eq!(extended.value_by_name("Secondary"), Some(1));
        assert_eq!(extended.value_by_name("Knife"), Some(5));
    }

    #[test]
    fn test_register_enum_existing_entry_while_reading_catalog() {
        let catalog = Catalog::default();
        let first = catalog.register_enum("E", [("A", 1)]).unwrap();

        let second = catalog
            .register_enum(
                "E",
                [("B", 2u64)].into_iter().map(|entry| {
                    assert!(catalog.contains("E"));
                    entry
                }),
            )
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_register_enum_over_other_kind() {
        let catalog = Catalog::default();
        catalog.register("E", int32()).unwrap();

        assert!(catalog.register_enum("E", [("A", 1)]).is_none());
        // Existing entry untouched
        assert!(catalog.get_as::<NumericDescriptor>("E").is_some());
    }

    #[test]
    fn test_register_enum_type() {
        #[derive(crate::ReflectEnum)]
        #[allow(dead_code)]
        enum Hitgroup {
            Generic,
            Head,
            Chest,
        }

        let catalog = Catalog::default();
        let descriptor = catalog.register_enum_type::<Hitgroup>().unwrap();

        assert_eq!(descriptor.name(), "Hitgroup");
        assert_eq!(descriptor.value_by_name("Chest"), Some(2));
        assert!(catalog.contains("Hitgroup"));
    }

    #[test]
    fn test_unregister_and_clear() {
        let catalog = Catalog::default();
        catalog.register("b", int32()).unwrap();
        catalog.register("a", AggregateDescriptor::new("a")).unwrap();
        assert_eq!(catalog.names(), ["a", "b"]);

        let removed = catalog.unregister("b").unwrap();
        assert_eq!(removed.name(), "int32");
        assert!(catalog.unregister("b").is_none());
        assert!(!catalog.contains("b"));

        let held = catalog.get("a").unwrap();
        catalog.clear();
        assert!(catalog.is_empty());
        assert_eq!(held.name(), "a");
    }

    #[test]
    fn test_catalog_is_sync() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Catalog>();
    }

    #[test]
    fn test_concurrent_register_enum_single_winner() {
        let catalog = Arc::new(Catalog::default());

        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || catalog.register_enum("Shared", [("V", i)]).unwrap())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winner = catalog.get_as::<EnumDescriptor>("Shared").unwrap();
        assert!(results.iter().all(|r| Arc::ptr_eq(r, &winner)));
    }
}
