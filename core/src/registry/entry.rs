//! registry/entry.rs
//! Type-erased registry entry.
//!
//! The canonical type is fixed when the entry is built: its `TypeId` is
//! recorded next to the boxed `dyn MigrationVersion<V>`. Lookups by a
//! dispatcher compare that `TypeId` and then `downcast_ref` the box. This is
//! the one intentional dynamic check, needed because a registry is shared by
//! dispatchers for different canonical types.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::dts::Discriminator;
use crate::version::{MigrationVersion, Version};

pub struct RegistryEntry {
    tag: Discriminator,
    canonical: TypeId,
    canonical_name: &'static str,
    historical_name: &'static str,
    /// Holds a `Box<dyn MigrationVersion<V>>` for the recorded canonical `V`.
    version: Box<dyn Any + Send + Sync>,
}

impl RegistryEntry {
    pub fn new<T, V>(version: Version<T, V>) -> Self
    where
        T: 'static,
        V: 'static,
    {
        Self::from_migration::<V>(Box::new(version))
    }

    /// Erase any `MigrationVersion` implementation, not only `Version`.
    pub fn from_migration<V: 'static>(version: Box<dyn MigrationVersion<V>>) -> Self {
        Self {
            tag: version.discriminator(),
            canonical: TypeId::of::<V>(),
            canonical_name: type_name::<V>(),
            historical_name: version.historical_type_name(),
            version: Box::new(version),
        }
    }

    pub fn discriminator(&self) -> Discriminator {
        self.tag
    }

    pub fn canonical_type_id(&self) -> TypeId {
        self.canonical
    }

    pub fn canonical_type_name(&self) -> &'static str {
        self.canonical_name
    }

    pub fn historical_type_name(&self) -> &'static str {
        self.historical_name
    }

    /// True if this entry migrates to and from `V`.
    pub fn is_for<V: 'static>(&self) -> bool {
        self.canonical == TypeId::of::<V>()
    }

    /// The entry as seen by a dispatcher for `V`, or `None` on a canonical type mismatch.
    pub fn version<V: 'static>(&self) -> Option<&dyn MigrationVersion<V>> {
        if !self.is_for::<V>() {
            return None;
        }
        self.version
            .downcast_ref::<Box<dyn MigrationVersion<V>>>()
            .map(|b| b.as_ref())
    }
}

impl<T: 'static, V: 'static> From<Version<T, V>> for RegistryEntry {
    fn from(version: Version<T, V>) -> Self {
        RegistryEntry::new(version)
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("tag", &self.tag)
            .field("canonical", &self.canonical_name)
            .field("historical", &self.historical_name)
            .finish()
    }
}
