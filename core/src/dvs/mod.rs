//! dvs/mod.rs
//! Versioning dispatcher for one canonical type.
//!
//! Write path: resolve tag -> downgrade -> encode `[tag][historical value]`.
//! Read path: decode tag -> resolve tag -> decode historical value -> upgrade.
//!
//! Resolution is one registry lookup followed by the canonical type check.
//! An absent tag and a tag bound to another canonical type are different
//! failures, and existence is checked first.

use std::any::type_name;
use std::fmt;
use std::io::{Read, Write};
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dts::{decode_discriminator, Discriminator};
use crate::registry::Registry;
use crate::types::{DvsError, Fault};
use crate::version::MigrationVersion;

/// Dispatcher for canonical type `V`.
///
/// Holds nothing but the shared registry, so it is cheap to clone and safe to
/// use from several threads at once, each with its own stream.
pub struct Dvs<V> {
    registry: Arc<Registry>,
    _canonical: PhantomData<fn() -> V>,
}

impl<V: 'static> Dvs<V> {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry, _canonical: PhantomData }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Downgrade `v` to the shape registered under `tag` and write `[tag][data]`.
    ///
    /// # Errors
    /// - `UnknownDiscriminator` / `TypeMismatch` with 0 bytes, nothing written.
    /// - Migration and codec errors unchanged, with the bytes written so far.
    pub fn marshal<W: Write>(&self, tag: Discriminator, v: &V, w: &mut W) -> Result<usize, Fault> {
        let version = self.resolve(tag)?;
        let n = version.downgrade_and_encode(v, w)?;
        trace!(%tag, bytes = n, "marshaled");
        Ok(n)
    }

    /// Read `[tag][data]` and upgrade the data to `V`.
    ///
    /// Returns the tag, the canonical value and the bytes consumed.
    ///
    /// # Errors
    /// - Tag read failures with their own count.
    /// - `UnknownDiscriminator` / `TypeMismatch` with the tag bytes counted.
    /// - Codec and migration errors unchanged, tag bytes plus decoded bytes counted.
    pub fn unmarshal<R: Read>(&self, r: &mut R) -> Result<(Discriminator, V, usize), Fault> {
        let (tag, n) = decode_discriminator(r)?;
        let version = self.resolve(tag).map_err(|e| Fault::new(n, e))?;
        let (v, n1) = version.decode_and_upgrade(r).map_err(|f| f.after(n))?;
        trace!(%tag, bytes = n + n1, "unmarshaled");
        Ok((tag, v, n + n1))
    }

    /// Bytes `marshal` would write for `v` under `tag`.
    pub fn size(&self, tag: Discriminator, v: &V) -> Result<usize, DvsError> {
        self.resolve(tag)?.downgrade_and_size(v)
    }

    pub fn marshal_to_vec(&self, tag: Discriminator, v: &V) -> Result<Vec<u8>, Fault> {
        let mut out = Vec::new();
        self.marshal(tag, v, &mut out)?;
        Ok(out)
    }

    /// Unmarshal from the front of `bytes`; trailing bytes are left unread.
    pub fn unmarshal_from_slice(&self, bytes: &[u8]) -> Result<(Discriminator, V, usize), Fault> {
        let mut cursor = bytes;
        self.unmarshal(&mut cursor)
    }

    fn resolve(&self, tag: Discriminator) -> Result<&dyn MigrationVersion<V>, DvsError> {
        let Some(entry) = self.registry.get(tag) else {
            debug!(%tag, canonical = type_name::<V>(), "unknown discriminator");
            return Err(DvsError::UnknownDiscriminator(tag));
        };
        entry.version::<V>().ok_or_else(|| {
            debug!(
                %tag,
                expected = type_name::<V>(),
                found = entry.canonical_type_name(),
                "discriminator bound to another canonical type"
            );
            DvsError::TypeMismatch {
                tag,
                expected: type_name::<V>(),
                found: entry.canonical_type_name(),
            }
        })
    }
}

impl<V> Clone for Dvs<V> {
    fn clone(&self) -> Self {
        Self { registry: Arc::clone(&self.registry), _canonical: PhantomData }
    }
}

impl<V> fmt::Debug for Dvs<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dvs")
            .field("canonical", &type_name::<V>())
            .field("entries", &self.registry.len())
            .finish()
    }
}
