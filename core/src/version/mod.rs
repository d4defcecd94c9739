//! version/mod.rs
//! Versioned codec entries: one historical shape bound to the canonical one.
//!
//! Notes:
//! - Writing runs migrate-then-encode, reading runs decode-then-migrate.
//! - A single generic `Version<T, V>` covers every (historical, canonical) pair.
//! - Each version migrates directly to and from the canonical shape; there is no chaining.

pub mod types;
pub mod migrate;

pub use types::*;
