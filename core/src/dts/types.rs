use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::dts::encode::discriminator_size;

/// Tag identifying one (logical type, wire version) pair.
///
/// Written as a zigzag varint, so small tags take one byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discriminator(pub i64);

impl Discriminator {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Encoded length of this tag.
    pub fn encoded_len(self) -> usize {
        discriminator_size(self)
    }
}

impl From<i64> for Discriminator {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data type with a fixed discriminator: one wire shape `T` plus its codec.
pub struct Dts<T> {
    pub(crate) tag: Discriminator,
    pub(crate) codec: Arc<dyn Codec<T>>,
}

impl<T> Dts<T> {
    pub fn new<C>(tag: Discriminator, codec: C) -> Self
    where
        C: Codec<T> + 'static,
    {
        Self { tag, codec: Arc::new(codec) }
    }

    /// Share one codec between several tags.
    pub fn from_shared(tag: Discriminator, codec: Arc<dyn Codec<T>>) -> Self {
        Self { tag, codec }
    }

    pub fn discriminator(&self) -> Discriminator {
        self.tag
    }

    pub fn codec(&self) -> &dyn Codec<T> {
        self.codec.as_ref()
    }

    /// Full encoded size: tag plus data.
    pub fn size(&self, t: &T) -> usize {
        self.tag.encoded_len() + self.codec.size(t)
    }
}

impl<T> Clone for Dts<T> {
    fn clone(&self) -> Self {
        Self { tag: self.tag, codec: Arc::clone(&self.codec) }
    }
}

impl<T> fmt::Debug for Dts<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dts")
            .field("tag", &self.tag)
            .field("shape", &std::any::type_name::<T>())
            .finish()
    }
}
