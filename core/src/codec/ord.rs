//! codec/ord.rs
//!
//! Length-prefixed and single-byte primitives.
//!
//! Layout:
//! - strings and byte slices: `[len varint (unsigned)][payload]`
//! - bool: one byte, `0x00` or `0x01`

use std::io::{Read, Write};

use crate::codec::types::{CodecError, LengthLimit};
use crate::codec::varint;
use crate::constants::{BOOL_FALSE, BOOL_TRUE, PAYLOAD_READ_CHUNK};
use crate::io::{read_byte, read_counted, write_byte, write_counted};
use crate::types::Fault;

// ================= Strings =================

pub fn encode_string(s: &str, w: &mut dyn Write) -> Result<usize, Fault> {
    encode_bytes(s.as_bytes(), w)
}

pub fn decode_string(r: &mut dyn Read, limit: LengthLimit) -> Result<(String, usize), Fault> {
    let (raw, n) = decode_bytes(r, limit)?;
    let s = String::from_utf8(raw).map_err(|e| Fault::new(n, CodecError::from(e)))?;
    Ok((s, n))
}

pub fn size_string(s: &str) -> usize {
    size_bytes(s.as_bytes())
}

// ================= Byte slices =================

pub fn encode_bytes(b: &[u8], w: &mut dyn Write) -> Result<usize, Fault> {
    let n = varint::encode_u64(b.len() as u64, w)?;
    let n1 = write_counted(w, b).map_err(|f| f.after(n))?;
    Ok(n + n1)
}

/// The limit is enforced before any payload byte is read or allocated.
///
/// The payload is read in steps of at most `PAYLOAD_READ_CHUNK` bytes, so a
/// prefix claiming more than the stream holds ends in `UnexpectedEof`
/// without reserving the claimed length up front.
pub fn decode_bytes(r: &mut dyn Read, limit: LengthLimit) -> Result<(Vec<u8>, usize), Fault> {
    let (len, n) = varint::decode_u64(r)?;
    let len = limit.check(len).map_err(|e| Fault::new(n, e))?;
    let mut buf = Vec::with_capacity(len.min(PAYLOAD_READ_CHUNK));
    while buf.len() < len {
        let start = buf.len();
        let end = start + (len - start).min(PAYLOAD_READ_CHUNK);
        buf.resize(end, 0);
        read_counted(r, &mut buf[start..]).map_err(|f| f.after(n + start))?;
    }
    Ok((buf, n + len))
}

pub fn size_bytes(b: &[u8]) -> usize {
    varint::size_u64(b.len() as u64) + b.len()
}

// ================= Bool =================

pub fn encode_bool(v: bool, w: &mut dyn Write) -> Result<usize, Fault> {
    write_byte(w, if v { BOOL_TRUE } else { BOOL_FALSE })
}

pub fn decode_bool(r: &mut dyn Read) -> Result<(bool, usize), Fault> {
    match read_byte(r)? {
        BOOL_FALSE => Ok((false, 1)),
        BOOL_TRUE => Ok((true, 1)),
        other => Err(Fault::new(1, CodecError::InvalidBool(other))),
    }
}

pub const fn size_bool(_: bool) -> usize {
    1
}
