//! codec/varint.rs
//!
//! Little-endian base-128 variable-length integers.
//!
//! Layout:
//! - 7 payload bits per byte, lowest group first.
//! - High bit set on every byte except the last.
//! - Signed values are zigzag mapped first, so small magnitudes stay short
//!   (`0 -> 0x00`, `-1 -> 0x01`, `1 -> 0x02`).

use std::io::{Read, Write};

use crate::codec::types::CodecError;
use crate::constants::{
    MAX_VARINT_LEN_32, MAX_VARINT_LEN_64, VARINT_CONTINUATION, VARINT_LAST_BYTE_MAX_32,
    VARINT_LAST_BYTE_MAX_64, VARINT_PAYLOAD_BITS, VARINT_PAYLOAD_MASK,
};
use crate::io::{read_byte, write_counted};
use crate::types::Fault;

// ================= Unsigned =================

pub fn encode_u64(v: u64, w: &mut dyn Write) -> Result<usize, Fault> {
    let mut buf = [0u8; MAX_VARINT_LEN_64];
    let len = put_unsigned(v, &mut buf);
    write_counted(w, &buf[..len])
}

pub fn decode_u64(r: &mut dyn Read) -> Result<(u64, usize), Fault> {
    read_unsigned(r, MAX_VARINT_LEN_64, VARINT_LAST_BYTE_MAX_64)
}

pub fn size_u64(v: u64) -> usize {
    let bits = 64 - (v | 1).leading_zeros() as usize;
    bits.div_ceil(VARINT_PAYLOAD_BITS as usize)
}

pub fn encode_u32(v: u32, w: &mut dyn Write) -> Result<usize, Fault> {
    encode_u64(u64::from(v), w)
}

pub fn decode_u32(r: &mut dyn Read) -> Result<(u32, usize), Fault> {
    let (v, n) = read_unsigned(r, MAX_VARINT_LEN_32, VARINT_LAST_BYTE_MAX_32)?;
    // last-byte check above keeps the value within 32 bits
    let v = u32::try_from(v).map_err(|_| Fault::new(n, CodecError::VarintOverflow))?;
    Ok((v, n))
}

pub fn size_u32(v: u32) -> usize {
    size_u64(u64::from(v))
}

// ================= Signed (zigzag) =================

pub fn encode_i64(v: i64, w: &mut dyn Write) -> Result<usize, Fault> {
    encode_u64(zigzag_64(v), w)
}

pub fn decode_i64(r: &mut dyn Read) -> Result<(i64, usize), Fault> {
    let (u, n) = decode_u64(r)?;
    Ok((unzigzag_64(u), n))
}

pub fn size_i64(v: i64) -> usize {
    size_u64(zigzag_64(v))
}

pub fn encode_i32(v: i32, w: &mut dyn Write) -> Result<usize, Fault> {
    encode_u32(zigzag_32(v), w)
}

pub fn decode_i32(r: &mut dyn Read) -> Result<(i32, usize), Fault> {
    let (u, n) = decode_u32(r)?;
    Ok((unzigzag_32(u), n))
}

pub fn size_i32(v: i32) -> usize {
    size_u32(zigzag_32(v))
}

#[inline]
pub const fn zigzag_64(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline]
pub const fn unzigzag_64(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

#[inline]
pub const fn zigzag_32(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

#[inline]
pub const fn unzigzag_32(u: u32) -> i32 {
    ((u >> 1) as i32) ^ -((u & 1) as i32)
}

// ================= Internals =================

fn put_unsigned(mut v: u64, buf: &mut [u8; MAX_VARINT_LEN_64]) -> usize {
    let mut i = 0;
    while v >= u64::from(VARINT_CONTINUATION) {
        buf[i] = (v as u8 & VARINT_PAYLOAD_MASK) | VARINT_CONTINUATION;
        v >>= VARINT_PAYLOAD_BITS;
        i += 1;
    }
    buf[i] = v as u8;
    i + 1
}

/// Reads one byte at a time so a failure reports exactly what was consumed.
fn read_unsigned(r: &mut dyn Read, max_len: usize, last_max: u8) -> Result<(u64, usize), Fault> {
    let mut v: u64 = 0;
    let mut shift = 0u32;
    for i in 0..max_len {
        let b = read_byte(r).map_err(|f| f.after(i))?;
        if i == max_len - 1 && b > last_max {
            return Err(Fault::new(i + 1, CodecError::VarintOverflow));
        }
        v |= u64::from(b & VARINT_PAYLOAD_MASK) << shift;
        if b & VARINT_CONTINUATION == 0 {
            return Ok((v, i + 1));
        }
        shift += VARINT_PAYLOAD_BITS;
    }
    Err(Fault::new(max_len, CodecError::VarintOverflow))
}
