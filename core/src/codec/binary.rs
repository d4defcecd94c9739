//! codec/binary.rs
//! Codec backed by bincode's standard configuration.
//!
//! Lets historical shapes derive `bincode::Encode` / `bincode::Decode` instead
//! of carrying hand-written codec functions.
//!
//! Decoding runs with a byte limit (`LIMIT`), checked by bincode before it
//! allocates any `String` / `Vec` the stream announces. `new` uses
//! `BINCODE_DECODE_LIMIT`; `limited` picks another bound at the type level.

use std::fmt;
use std::io::{self, Read, Write};
use std::marker::PhantomData;
use bincode::{config, Decode, Encode};

use crate::codec::types::{Codec, CodecError, LengthLimit};
use crate::constants::BINCODE_DECODE_LIMIT;
use crate::io::{CountingReader, CountingWriter};
use crate::types::Fault;

pub struct BincodeCodec<T, const LIMIT: usize = BINCODE_DECODE_LIMIT> {
    _shape: PhantomData<fn() -> T>,
}

impl<T> BincodeCodec<T> {
    pub const fn new() -> Self {
        Self { _shape: PhantomData }
    }
}

impl<T, const LIMIT: usize> BincodeCodec<T, LIMIT> {
    /// Codec decoding at most `LIMIT` bytes of container payload per value.
    pub const fn limited() -> Self {
        Self { _shape: PhantomData }
    }

    /// The decode bound, in the form the ord decoders take.
    pub const fn limit(&self) -> LengthLimit {
        LengthLimit::Max(LIMIT)
    }
}

impl<T> Default for BincodeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const LIMIT: usize> Clone for BincodeCodec<T, LIMIT> {
    fn clone(&self) -> Self {
        Self::limited()
    }
}

impl<T, const LIMIT: usize> fmt::Debug for BincodeCodec<T, LIMIT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BincodeCodec<{}, {}>", std::any::type_name::<T>(), LIMIT)
    }
}

impl<T, const LIMIT: usize> Codec<T> for BincodeCodec<T, LIMIT>
where
    T: Encode + Decode<()>,
{
    fn encode(&self, value: &T, w: &mut dyn Write) -> Result<usize, Fault> {
        let mut cw = CountingWriter::new(w);
        match bincode::encode_into_std_write(value, &mut cw, config::standard()) {
            Ok(n) => Ok(n),
            Err(e) => Err(Fault::new(cw.count(), CodecError::from(e))),
        }
    }

    fn decode(&self, r: &mut dyn Read) -> Result<(T, usize), Fault> {
        let mut cr = CountingReader::new(r);
        let cfg = config::standard().with_limit::<LIMIT>();
        match bincode::decode_from_std_read::<T, _, _>(&mut cr, cfg) {
            Ok(v) => Ok((v, cr.count())),
            Err(e) => Err(Fault::new(cr.count(), CodecError::from(e))),
        }
    }

    fn size(&self, value: &T) -> usize {
        let mut sink = CountingWriter::new(io::sink());
        // sink never fails, so only a broken Encode impl can end up here
        match bincode::encode_into_std_write(value, &mut sink, config::standard()) {
            Ok(n) => n,
            Err(_) => sink.count(),
        }
    }
}
