//! Wire constants shared by the codec family.

/// Payload bits carried by one varint byte.
pub const VARINT_PAYLOAD_BITS: u32 = 7;
/// Continuation flag of a varint byte.
pub const VARINT_CONTINUATION: u8 = 0x80;
/// Mask selecting the payload bits of a varint byte.
pub const VARINT_PAYLOAD_MASK: u8 = 0x7F;

/// Longest valid varint for a 64-bit value.
pub const MAX_VARINT_LEN_64: usize = 10;
/// Longest valid varint for a 32-bit value.
pub const MAX_VARINT_LEN_32: usize = 5;

/// Largest final byte allowed at position `MAX_VARINT_LEN_64 - 1`.
pub const VARINT_LAST_BYTE_MAX_64: u8 = 0x01;
/// Largest final byte allowed at position `MAX_VARINT_LEN_32 - 1`.
pub const VARINT_LAST_BYTE_MAX_32: u8 = 0x0F;

/// Wire encoding of `false`.
pub const BOOL_FALSE: u8 = 0x00;
/// Wire encoding of `true`.
pub const BOOL_TRUE: u8 = 0x01;

/// Largest buffer step when reading a length-prefixed payload.
/// Memory grows with bytes actually received, not with the claimed length.
pub const PAYLOAD_READ_CHUNK: usize = 64 * 1024;

/// Decode byte limit applied by `BincodeCodec::new` (16 MiB).
pub const BINCODE_DECODE_LIMIT: usize = 16 * 1024 * 1024;
