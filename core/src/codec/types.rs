//! codec/types.rs
//! Codec trait, closure-backed codec, codec errors and decode limits.

use std::fmt;
use std::io::{Read, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Fault;

/// Malformed or unrepresentable encodings.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Varint longer than its target width allows.
    #[error("varint overflow")]
    VarintOverflow,

    /// Length prefix above the configured limit.
    #[error("length {len} exceeds limit {max}")]
    LengthExceeded { len: u64, max: usize },

    /// Boolean byte other than 0 or 1.
    #[error("invalid bool byte: 0x{0:02x}")]
    InvalidBool(u8),

    /// String payload is not UTF-8.
    #[error("invalid UTF-8 string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("bincode encode: {0}")]
    BincodeEncode(#[from] bincode::error::EncodeError),

    #[error("bincode decode: {0}")]
    BincodeDecode(#[from] bincode::error::DecodeError),
}

/// Upper bound for length-prefixed payloads accepted by decoders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthLimit {
    #[default]
    Unbounded,
    Max(usize),
}

impl LengthLimit {
    /// Validate a decoded length prefix and narrow it to `usize`.
    pub fn check(self, len: u64) -> Result<usize, CodecError> {
        let max = match self {
            LengthLimit::Unbounded => usize::MAX,
            LengthLimit::Max(max) => max,
        };
        match usize::try_from(len) {
            Ok(n) if n <= max => Ok(n),
            _ => Err(CodecError::LengthExceeded { len, max }),
        }
    }
}

/// Codec for one wire shape `T`.
///
/// Contract:
/// - `encode` and `decode` are deterministic.
/// - The returned count (or the count inside the `Fault`) is the exact
///   number of bytes written or consumed.
/// - `size` equals the count a successful `encode` of the same value returns.
pub trait Codec<T>: Send + Sync {
    fn encode(&self, value: &T, w: &mut dyn Write) -> Result<usize, Fault>;
    fn decode(&self, r: &mut dyn Read) -> Result<(T, usize), Fault>;
    fn size(&self, value: &T) -> usize;
}

type EncodeFn<T> = dyn Fn(&T, &mut dyn Write) -> Result<usize, Fault> + Send + Sync;
type DecodeFn<T> = dyn Fn(&mut dyn Read) -> Result<(T, usize), Fault> + Send + Sync;
type SizeFn<T> = dyn Fn(&T) -> usize + Send + Sync;

/// Codec assembled from plain functions or closures.
pub struct FnCodec<T> {
    encode: Box<EncodeFn<T>>,
    decode: Box<DecodeFn<T>>,
    size: Box<SizeFn<T>>,
}

impl<T> FnCodec<T> {
    pub fn new<E, D, S>(encode: E, decode: D, size: S) -> Self
    where
        E: Fn(&T, &mut dyn Write) -> Result<usize, Fault> + Send + Sync + 'static,
        D: Fn(&mut dyn Read) -> Result<(T, usize), Fault> + Send + Sync + 'static,
        S: Fn(&T) -> usize + Send + Sync + 'static,
    {
        Self {
            encode: Box::new(encode),
            decode: Box::new(decode),
            size: Box::new(size),
        }
    }
}

impl<T> Codec<T> for FnCodec<T> {
    fn encode(&self, value: &T, w: &mut dyn Write) -> Result<usize, Fault> {
        (self.encode)(value, w)
    }

    fn decode(&self, r: &mut dyn Read) -> Result<(T, usize), Fault> {
        (self.decode)(r)
    }

    fn size(&self, value: &T) -> usize {
        (self.size)(value)
    }
}

impl<T> fmt::Debug for FnCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnCodec<{}>", std::any::type_name::<T>())
    }
}
