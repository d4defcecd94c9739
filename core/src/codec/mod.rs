//! codec/mod.rs
//! Streaming codecs for historical wire shapes.
//!
//! Notes:
//! - Every codec reports the exact number of bytes it moved, also on failure.
//! - `varint`, `ord` and `raw` are building blocks for hand-written codecs.
//! - `BincodeCodec` covers shapes that derive `bincode::Encode` / `bincode::Decode`.

pub mod types;
pub mod varint;
pub mod ord;
pub mod raw;
pub mod binary;

pub use types::*;
pub use binary::BincodeCodec;
