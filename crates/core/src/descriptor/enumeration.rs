//! Enumeration descriptors
//!
//! Entries keep insertion order. Duplicate names and duplicate values are
//! allowed; lookups return the first match.

use super::{Descriptor, DescriptorKind, UNKNOWN_NAME};

/// A single `(name, value)` pair of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumEntry {
    pub name: String,
    pub value: u64,
}

/// Descriptor for an enumeration type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumDescriptor {
    name: String,
    entries: Vec<EnumEntry>,
}

impl EnumDescriptor {
    /// Create an enumeration descriptor with no entries
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Create an enumeration descriptor populated from `(name, value)` pairs
    ///
    /// # Example
    /// ```
    /// use dynreflect_core::descriptor::EnumDescriptor;
    ///
    /// let team = EnumDescriptor::with_entries("Team", [("T", 2), ("CT", 3)]);
    /// assert_eq!(team.value_by_name("CT"), Some(3));
    /// ```
    pub fn with_entries<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut descriptor = Self::new(name);
        for (entry_name, value) in entries {
            descriptor.add_entry(entry_name, value);
        }
        descriptor
    }

    /// Append an entry
    ///
    /// No duplicate check is made on either the name or the value.
    pub fn add_entry(&mut self, name: impl Into<String>, value: u64) {
        self.entries.push(EnumEntry {
            name: name.into(),
            value,
        });
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// Value of the first entry called `name`
    ///
    /// Returns `None` when no entry matches, so a legitimate `u64::MAX`
    /// value is never mistaken for a miss.
    pub fn value_by_name(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }

    /// Name of the first entry with `value`
    pub fn name_by_value(&self, value: u64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.name.as_str())
    }

    /// Name of the first entry with `value`, or `"Unknown"`
    ///
    /// Presentation helper only. An entry that is really named `"Unknown"`
    /// is indistinguishable from a miss here; use [`Self::name_by_value`]
    /// when the difference matters.
    pub fn display_name(&self, value: u64) -> &str {
        self.name_by_value(value).unwrap_or(UNKNOWN_NAME)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.value_by_name(name).is_some()
    }

    pub fn contains_value(&self, value: u64) -> bool {
        self.name_by_value(value).is_some()
    }
}

impl Descriptor for EnumDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Enum
    }
}
