//! registry/types.rs
//! Registry configuration, errors and descriptive snapshots.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dts::Discriminator;

/// What to do when two entries claim the same tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail construction with `RegistryError::DuplicateDiscriminator`.
    #[default]
    Reject,
    /// Keep the entry registered last.
    LastWins,
}

/// Registry construction settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub duplicates: DuplicatePolicy,
}

impl RegistryConfig {
    /// Parse from JSON, e.g. `{"duplicates": "last_wins"}`; missing fields keep defaults.
    pub fn from_json(s: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate discriminator {tag}: {existing} already registered, {incoming} rejected")]
    DuplicateDiscriminator {
        tag: Discriminator,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("invalid registry config: {0}")]
    Config(#[from] serde_json::Error),
}

/// One row of `RegistrySnapshot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    pub discriminator: Discriminator,
    pub canonical: String,
    pub historical: String,
}

/// Serializable description of a registry, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub entries: Vec<EntryInfo>,
}

impl RegistrySnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
