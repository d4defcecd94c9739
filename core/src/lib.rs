//! dvs-core
//!
//! Versioned binary codecs for streaming I/O.
//! Values are written with a discriminator tag naming their wire version and
//! read back through a registry that upgrades them to one canonical shape.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod io;

// Codec layers
pub mod codec;
pub mod dts;

// Versioning
pub mod version;
pub mod registry;
pub mod dvs;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{BincodeCodec, Codec, CodecError, FnCodec, LengthLimit};
    pub use crate::dts::{Discriminator, Dts};
    pub use crate::dvs::Dvs;
    pub use crate::registry::{DuplicatePolicy, Registry, RegistryConfig, RegistryEntry, RegistryError};
    pub use crate::types::{DvsError, Fault};
    pub use crate::version::{MigrationVersion, Version};
}
