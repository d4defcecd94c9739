use std::fmt;
use std::io::{Read, Write};

use crate::dts::{Discriminator, Dts};
use crate::types::{DvsError, Fault};

/// Historical -> canonical migration, used when reading.
pub type Upgrade<T, V> = Box<dyn Fn(T) -> anyhow::Result<V> + Send + Sync>;

/// Canonical -> historical migration, used when writing.
pub type Downgrade<V, T> = Box<dyn Fn(&V) -> anyhow::Result<T> + Send + Sync>;

/// A wire version as seen by a dispatcher for canonical type `V`.
///
/// Object safe, so registries can hold versions of different historical
/// shapes side by side.
pub trait MigrationVersion<V>: Send + Sync {
    fn discriminator(&self) -> Discriminator;

    /// Type name of the historical shape (diagnostics only).
    fn historical_type_name(&self) -> &'static str;

    /// Downgrade `v`, then encode `[tag][historical value]`.
    ///
    /// A downgrade failure is returned with 0 bytes and the writer untouched.
    /// Codec counts and errors are returned unmodified.
    fn downgrade_and_encode(&self, v: &V, w: &mut dyn Write) -> Result<usize, Fault>;

    /// Decode the historical value (tag already consumed), then upgrade it.
    ///
    /// An upgrade failure is returned with the decode count; upgrading reads nothing.
    fn decode_and_upgrade(&self, r: &mut dyn Read) -> Result<(V, usize), Fault>;

    /// Encoded size of `[tag][historical value]` for `v`.
    fn downgrade_and_size(&self, v: &V) -> Result<usize, DvsError>;
}

/// Generic versioned entry: DTS for `T` plus both migrations.
pub struct Version<T, V> {
    pub(crate) dts: Dts<T>,
    pub(crate) upgrade: Upgrade<T, V>,
    pub(crate) downgrade: Downgrade<V, T>,
}

impl<T, V> Version<T, V> {
    pub fn new<U, D>(dts: Dts<T>, upgrade: U, downgrade: D) -> Self
    where
        U: Fn(T) -> anyhow::Result<V> + Send + Sync + 'static,
        D: Fn(&V) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self {
            dts,
            upgrade: Box::new(upgrade),
            downgrade: Box::new(downgrade),
        }
    }

    pub fn dts(&self) -> &Dts<T> {
        &self.dts
    }

    pub fn discriminator(&self) -> Discriminator {
        self.dts.discriminator()
    }

    pub fn upgrade(&self, t: T) -> anyhow::Result<V> {
        (self.upgrade)(t)
    }

    pub fn downgrade(&self, v: &V) -> anyhow::Result<T> {
        (self.downgrade)(v)
    }
}

impl<T: Clone + 'static> Version<T, T> {
    /// Version whose wire shape is the canonical shape itself.
    pub fn current(dts: Dts<T>) -> Self {
        Self::new(dts, |t| Ok(t), |v: &T| Ok(v.clone()))
    }
}

impl<T, V> fmt::Debug for Version<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("tag", &self.dts.discriminator())
            .field("historical", &std::any::type_name::<T>())
            .field("canonical", &std::any::type_name::<V>())
            .finish()
    }
}
