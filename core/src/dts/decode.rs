use std::io::Read;

use crate::codec::varint;
use crate::dts::types::{Discriminator, Dts};
use crate::types::{DvsError, Fault};

/// Read a zigzag varint tag.
#[inline]
pub fn decode_discriminator(r: &mut dyn Read) -> Result<(Discriminator, usize), Fault> {
    let (raw, n) = varint::decode_i64(r)?;
    Ok((Discriminator(raw), n))
}

impl<T> Dts<T> {
    /// Decode `[tag][data]`, rejecting any tag other than this DTS's own.
    ///
    /// A foreign tag fails with `WrongDiscriminator`; its bytes stay counted.
    pub fn unmarshal(&self, r: &mut dyn Read) -> Result<(T, usize), Fault> {
        let (tag, n) = decode_discriminator(r)?;
        if tag != self.tag {
            return Err(Fault::new(
                n,
                DvsError::WrongDiscriminator { expected: self.tag, actual: tag },
            ));
        }
        let (t, n1) = self.unmarshal_data(r).map_err(|f| f.after(n))?;
        Ok((t, n + n1))
    }

    /// Decode the data part only; the tag was consumed by the caller.
    pub fn unmarshal_data(&self, r: &mut dyn Read) -> Result<(T, usize), Fault> {
        self.codec.decode(r)
    }
}
