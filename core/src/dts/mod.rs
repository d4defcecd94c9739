//! Tagged data types.
//!
//! Responsibilities:
//! - Define the discriminator tag and its wire framing
//! - Bind one tag to one codec (`Dts<T>`)
//! - Encode `[tag][data]` and decode it with strict tag checks
//!
//! Non-responsibilities:
//! - Migration between shapes
//! - Registry lookup

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{Discriminator, Dts};
pub use encode::{discriminator_size, encode_discriminator};
pub use decode::decode_discriminator;
