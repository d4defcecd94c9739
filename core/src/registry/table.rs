//! registry/table.rs
//! Registry construction and lookup.

use std::collections::hash_map::{Entry, HashMap};

use tracing::{debug, warn};

use crate::dts::Discriminator;
use crate::registry::entry::RegistryEntry;
use crate::registry::types::{
    DuplicatePolicy, EntryInfo, RegistryConfig, RegistryError, RegistrySnapshot,
};

/// Immutable tag -> entry table.
///
/// `Send + Sync`; share it behind an `Arc` between dispatchers.
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<Discriminator, RegistryEntry>,
    /// Registration order, first occurrence of each tag.
    order: Vec<Discriminator>,
    config: RegistryConfig,
}

impl Registry {
    /// Build with the default config (duplicate tags rejected).
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = RegistryEntry>,
    {
        Self::with_config(RegistryConfig::default(), entries)
    }

    pub fn with_config<I>(config: RegistryConfig, entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = RegistryEntry>,
    {
        let mut map: HashMap<Discriminator, RegistryEntry> = HashMap::new();
        let mut order = Vec::new();

        for entry in entries {
            let tag = entry.discriminator();
            match map.entry(tag) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                    order.push(tag);
                }
                Entry::Occupied(mut slot) => match config.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(RegistryError::DuplicateDiscriminator {
                            tag,
                            existing: slot.get().historical_type_name(),
                            incoming: entry.historical_type_name(),
                        });
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(
                            %tag,
                            replaced = slot.get().historical_type_name(),
                            by = entry.historical_type_name(),
                            "duplicate discriminator, keeping last registration"
                        );
                        slot.insert(entry);
                    }
                },
            }
        }

        debug!(entries = map.len(), policy = ?config.duplicates, "registry built");
        Ok(Self { entries: map, order, config })
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, tag: Discriminator) -> Option<&RegistryEntry> {
        self.entries.get(&tag)
    }

    pub fn contains(&self, tag: Discriminator) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Tags in registration order.
    pub fn discriminators(&self) -> impl Iterator<Item = Discriminator> + '_ {
        self.order.iter().copied()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> + '_ {
        self.order.iter().filter_map(|tag| self.entries.get(tag))
    }

    pub fn describe(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            entries: self
                .entries()
                .map(|e| EntryInfo {
                    discriminator: e.discriminator(),
                    canonical: e.canonical_type_name().to_string(),
                    historical: e.historical_type_name().to_string(),
                })
                .collect(),
        }
    }
}

/// Collects entries in order, then builds a `Registry`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    pub fn register(mut self, entry: impl Into<RegistryEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        Registry::with_config(self.config, self.entries)
    }
}
