//! codec/raw.rs
//!
//! Fixed-width little-endian primitives.
//! Sizes are constant, which keeps these useful for shapes that must not
//! change length when values change.

use std::io::{Read, Write};
use byteorder::{ByteOrder, LittleEndian};

use crate::io::{read_counted, write_counted};
use crate::types::Fault;

pub const SIZE_U16: usize = 2;
pub const SIZE_U32: usize = 4;
pub const SIZE_U64: usize = 8;

pub fn encode_u16(v: u16, w: &mut dyn Write) -> Result<usize, Fault> {
    let mut buf = [0u8; SIZE_U16];
    LittleEndian::write_u16(&mut buf, v);
    write_counted(w, &buf)
}

pub fn decode_u16(r: &mut dyn Read) -> Result<(u16, usize), Fault> {
    let mut buf = [0u8; SIZE_U16];
    let n = read_counted(r, &mut buf)?;
    Ok((LittleEndian::read_u16(&buf), n))
}

pub fn encode_u32(v: u32, w: &mut dyn Write) -> Result<usize, Fault> {
    let mut buf = [0u8; SIZE_U32];
    LittleEndian::write_u32(&mut buf, v);
    write_counted(w, &buf)
}

pub fn decode_u32(r: &mut dyn Read) -> Result<(u32, usize), Fault> {
    let mut buf = [0u8; SIZE_U32];
    let n = read_counted(r, &mut buf)?;
    Ok((LittleEndian::read_u32(&buf), n))
}

pub fn encode_u64(v: u64, w: &mut dyn Write) -> Result<usize, Fault> {
    let mut buf = [0u8; SIZE_U64];
    LittleEndian::write_u64(&mut buf, v);
    write_counted(w, &buf)
}

pub fn decode_u64(r: &mut dyn Read) -> Result<(u64, usize), Fault> {
    let mut buf = [0u8; SIZE_U64];
    let n = read_counted(r, &mut buf)?;
    Ok((LittleEndian::read_u64(&buf), n))
}

pub fn encode_i64(v: i64, w: &mut dyn Write) -> Result<usize, Fault> {
    let mut buf = [0u8; SIZE_U64];
    LittleEndian::write_i64(&mut buf, v);
    write_counted(w, &buf)
}

pub fn decode_i64(r: &mut dyn Read) -> Result<(i64, usize), Fault> {
    let mut buf = [0u8; SIZE_U64];
    let n = read_counted(r, &mut buf)?;
    Ok((LittleEndian::read_i64(&buf), n))
}

pub fn encode_f64(v: f64, w: &mut dyn Write) -> Result<usize, Fault> {
    let mut buf = [0u8; SIZE_U64];
    LittleEndian::write_f64(&mut buf, v);
    write_counted(w, &buf)
}

pub fn decode_f64(r: &mut dyn Read) -> Result<(f64, usize), Fault> {
    let mut buf = [0u8; SIZE_U64];
    let n = read_counted(r, &mut buf)?;
    Ok((LittleEndian::read_f64(&buf), n))
}
