//! registry/mod.rs
//! Immutable discriminator -> versioned entry table.
//!
//! Notes:
//! - Built once from an ordered list, then only read.
//! - Entries for different canonical types share one table; each dispatcher
//!   only resolves entries bound to its own canonical type.
//! - Duplicate tags are rejected unless the config opts into last-wins.

pub mod types;
pub mod entry;
pub mod table;

pub use types::*;
pub use entry::RegistryEntry;
pub use table::{Registry, RegistryBuilder};
