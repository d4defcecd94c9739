use std::io;
use thiserror::Error;

use crate::codec::CodecError;
use crate::dts::Discriminator;

/// Unified error covering lookup, type binding, I/O, codec and migration failures.
/// - Lookup and type errors are terminal: the registry or the canonical type must change.
/// - I/O, codec and migration errors are carried unchanged as the inner value.
#[derive(Debug, Error)]
pub enum DvsError {
    /// No registry entry for the tag.
    #[error("unknown discriminator: {0}")]
    UnknownDiscriminator(Discriminator),

    /// The tag is registered for another canonical type.
    #[error("discriminator {tag} is bound to canonical type {found}, not {expected}")]
    TypeMismatch {
        tag: Discriminator,
        expected: &'static str,
        found: &'static str,
    },

    /// A tagged data type read a tag that belongs to someone else.
    #[error("wrong discriminator: expected {expected}, got {actual}")]
    WrongDiscriminator {
        expected: Discriminator,
        actual: Discriminator,
    },

    /// Reader or writer failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed encoding.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Downgrade or upgrade failure.
    #[error(transparent)]
    Migration(#[from] anyhow::Error),
}

impl DvsError {
    /// True for the two registry resolution failures.
    pub fn is_resolution(&self) -> bool {
        matches!(self, DvsError::UnknownDiscriminator(_) | DvsError::TypeMismatch { .. })
    }
}

/// A failed streaming operation together with the bytes it had already moved.
///
/// Counts only cover completed sub-steps, so callers can reason about the
/// stream position after a failure.
#[derive(Debug, Error)]
#[error("{source} (after {bytes} bytes)")]
pub struct Fault {
    pub bytes: usize,
    #[source]
    pub source: DvsError,
}

impl Fault {
    pub fn new(bytes: usize, source: impl Into<DvsError>) -> Self {
        Self { bytes, source: source.into() }
    }

    /// Shift the count by bytes processed before the failing step.
    pub fn after(mut self, prior: usize) -> Self {
        self.bytes += prior;
        self
    }

    pub fn kind(&self) -> &DvsError {
        &self.source
    }

    pub fn into_inner(self) -> DvsError {
        self.source
    }
}

/// Failures raised before any stream access carry zero bytes.
impl From<DvsError> for Fault {
    fn from(source: DvsError) -> Self {
        Fault { bytes: 0, source }
    }
}

impl From<io::Error> for Fault {
    fn from(e: io::Error) -> Self {
        Fault::new(0, e)
    }
}

impl From<CodecError> for Fault {
    fn from(e: CodecError) -> Self {
        Fault::new(0, e)
    }
}
