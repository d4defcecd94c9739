//! io.rs
//! Byte-counting stream helpers.
//!
//! Every codec reports how many bytes it moved, including on failure. These
//! helpers keep that count exact on top of plain `Read` / `Write`.

use std::io::{self, ErrorKind, Read, Write};

use crate::types::Fault;

/// Write all of `buf`, returning the number of bytes accepted by the writer.
///
/// On failure the fault carries the bytes written before the error.
pub fn write_counted(w: &mut dyn Write, buf: &[u8]) -> Result<usize, Fault> {
    let mut off = 0;
    while off < buf.len() {
        match w.write(&buf[off..]) {
            Ok(0) => {
                return Err(Fault::new(
                    off,
                    io::Error::new(ErrorKind::WriteZero, "writer accepted zero bytes"),
                ));
            }
            Ok(n) => off += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Fault::new(off, e)),
        }
    }
    Ok(off)
}

/// Fill `buf` completely, returning its length.
///
/// On failure the fault carries the bytes read before the error; a premature
/// end of stream is reported as `UnexpectedEof`.
pub fn read_counted(r: &mut dyn Read, buf: &mut [u8]) -> Result<usize, Fault> {
    let mut off = 0;
    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => {
                return Err(Fault::new(
                    off,
                    io::Error::new(ErrorKind::UnexpectedEof, "stream ended early"),
                ));
            }
            Ok(n) => off += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Fault::new(off, e)),
        }
    }
    Ok(off)
}

/// Write a single byte; returns 1.
#[inline]
pub fn write_byte(w: &mut dyn Write, b: u8) -> Result<usize, Fault> {
    write_counted(w, &[b])
}

/// Read a single byte. End of stream is `UnexpectedEof` with 0 bytes.
#[inline]
pub fn read_byte(r: &mut dyn Read) -> Result<u8, Fault> {
    let mut b = [0u8; 1];
    read_counted(r, &mut b)?;
    Ok(b[0])
}

/// Reader adapter that counts consumed bytes.
///
/// Used around codecs that do not report partial progress themselves.
#[derive(Debug)]
pub struct CountingReader<R> {
    inner: R,
    count: usize,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n;
        Ok(n)
    }
}

/// Writer adapter that counts accepted bytes.
#[derive(Debug)]
pub struct CountingWriter<W> {
    inner: W,
    count: usize,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
