// Shared fixtures for the integration suites.
//
// Two logical types, each with two wire versions:
// * Foo: hand-written varint/ord codecs
// * Bar: bincode-derived codecs
//
// Version 1 of each shape carries only `num`; version 2 adds `text`.

#![allow(dead_code)]

use std::io::{self, ErrorKind, Read, Write};
use std::sync::Arc;

use bincode::{Decode, Encode};
use dvs_core::codec::{ord, varint, BincodeCodec, FnCodec, LengthLimit};
use dvs_core::dts::{Discriminator, Dts};
use dvs_core::registry::Registry;
use dvs_core::types::Fault;
use dvs_core::version::Version;

pub const FOO_V1: Discriminator = Discriminator(0);
pub const FOO_V2: Discriminator = Discriminator(1);
pub const BAR_V1: Discriminator = Discriminator(2);
pub const BAR_V2: Discriminator = Discriminator(3);
pub const UNKNOWN: Discriminator = Discriminator(5);

pub const UNDEFINED: &str = "undefined";
pub const WRITE_ERROR: &str = "Writer.write error";
pub const READ_ERROR: &str = "Reader.read error";

// ## Foo shapes

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooV1 {
    pub num: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooV2 {
    pub num: i64,
    pub text: String,
}

/// Canonical Foo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Foo {
    pub num: i64,
    pub text: String,
}

pub fn encode_foo_v1(foo: &FooV1, w: &mut dyn Write) -> Result<usize, Fault> {
    varint::encode_i64(foo.num, w)
}

pub fn decode_foo_v1(r: &mut dyn Read) -> Result<(FooV1, usize), Fault> {
    let (num, n) = varint::decode_i64(r)?;
    Ok((FooV1 { num }, n))
}

pub fn size_foo_v1(foo: &FooV1) -> usize {
    varint::size_i64(foo.num)
}

pub fn encode_foo_v2(foo: &FooV2, w: &mut dyn Write) -> Result<usize, Fault> {
    let n = varint::encode_i64(foo.num, w)?;
    let n1 = ord::encode_string(&foo.text, w).map_err(|f| f.after(n))?;
    Ok(n + n1)
}

pub fn decode_foo_v2(r: &mut dyn Read) -> Result<(FooV2, usize), Fault> {
    let (num, n) = varint::decode_i64(r)?;
    let (text, n1) = ord::decode_string(r, LengthLimit::Unbounded).map_err(|f| f.after(n))?;
    Ok((FooV2 { num, text }, n + n1))
}

pub fn size_foo_v2(foo: &FooV2) -> usize {
    varint::size_i64(foo.num) + ord::size_string(&foo.text)
}

pub fn foo_v1_dts() -> Dts<FooV1> {
    Dts::new(FOO_V1, FnCodec::new(encode_foo_v1, decode_foo_v1, size_foo_v1))
}

pub fn foo_v2_dts() -> Dts<FooV2> {
    Dts::new(FOO_V2, FnCodec::new(encode_foo_v2, decode_foo_v2, size_foo_v2))
}

pub fn foo_v1_version() -> Version<FooV1, Foo> {
    Version::new(
        foo_v1_dts(),
        |t: FooV1| Ok(Foo { num: t.num, text: UNDEFINED.to_string() }),
        |v: &Foo| Ok(FooV1 { num: v.num }),
    )
}

pub fn foo_v2_version() -> Version<FooV2, Foo> {
    Version::new(
        foo_v2_dts(),
        |t: FooV2| Ok(Foo { num: t.num, text: t.text }),
        |v: &Foo| Ok(FooV2 { num: v.num, text: v.text.clone() }),
    )
}

// ## Bar shapes

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode)]
pub struct BarV1 {
    pub num: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Encode, Decode)]
pub struct BarV2 {
    pub num: i64,
    pub text: String,
}

/// Canonical Bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bar {
    pub num: i64,
    pub text: String,
}

pub fn bar_v1_version() -> Version<BarV1, Bar> {
    Version::new(
        Dts::new(BAR_V1, BincodeCodec::<BarV1>::new()),
        |t: BarV1| Ok(Bar { num: t.num, text: UNDEFINED.to_string() }),
        |v: &Bar| Ok(BarV1 { num: v.num }),
    )
}

pub fn bar_v2_version() -> Version<BarV2, Bar> {
    Version::new(
        Dts::new(BAR_V2, BincodeCodec::<BarV2>::new()),
        |t: BarV2| Ok(Bar { num: t.num, text: t.text }),
        |v: &Bar| Ok(BarV2 { num: v.num, text: v.text.clone() }),
    )
}

/// Registry shared by Foo and Bar dispatchers.
pub fn shared_registry() -> Arc<Registry> {
    let registry = Registry::builder()
        .register(foo_v1_version())
        .register(foo_v2_version())
        .register(bar_v1_version())
        .register(bar_v2_version())
        .build()
        .unwrap();
    Arc::new(registry)
}

// ## Stream doubles

/// Accepts up to `capacity` bytes, then fails every write.
#[derive(Debug, Default)]
pub struct FailingWriter {
    pub written: Vec<u8>,
    pub calls: usize,
    capacity: usize,
}

impl FailingWriter {
    pub fn new(capacity: usize) -> Self {
        Self { written: Vec::new(), calls: 0, capacity }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        let room = self.capacity - self.written.len();
        if room == 0 {
            return Err(io::Error::new(ErrorKind::Other, WRITE_ERROR));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serves `data`, then fails every read (instead of reporting EOF).
#[derive(Debug, Default)]
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
}

impl FailingReader {
    pub fn new(data: &[u8]) -> Self {
        Self { data: data.to_vec(), pos: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::new(ErrorKind::Other, READ_ERROR));
        }
        let n = (self.data.len() - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Extract the message of an I/O fault.
pub fn io_message(fault: &Fault) -> Option<String> {
    match fault.kind() {
        dvs_core::types::DvsError::Io(e) => Some(e.to_string()),
        _ => None,
    }
}
