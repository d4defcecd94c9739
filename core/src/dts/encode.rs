use std::io::Write;

use crate::codec::varint;
use crate::dts::types::{Discriminator, Dts};
use crate::types::Fault;

/// Write a tag as a zigzag varint.
#[inline]
pub fn encode_discriminator(tag: Discriminator, w: &mut dyn Write) -> Result<usize, Fault> {
    varint::encode_i64(tag.get(), w)
}

/// Bytes `encode_discriminator` writes for `tag`.
#[inline]
pub fn discriminator_size(tag: Discriminator) -> usize {
    varint::size_i64(tag.get())
}

impl<T> Dts<T> {
    /// Encode `[tag][data]`.
    ///
    /// The count covers both parts; a data failure is shifted past the tag bytes.
    pub fn marshal(&self, t: &T, w: &mut dyn Write) -> Result<usize, Fault> {
        let n = encode_discriminator(self.tag, w)?;
        let n1 = self.codec.encode(t, w).map_err(|f| f.after(n))?;
        Ok(n + n1)
    }

    /// Encode the data part only.
    pub fn marshal_data(&self, t: &T, w: &mut dyn Write) -> Result<usize, Fault> {
        self.codec.encode(t, w)
    }
}
