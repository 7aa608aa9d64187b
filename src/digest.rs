// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! BLAKE3 digest of generated tables.
//!
//! Two passes over the same catalogue must produce byte-identical text, so
//! equal digests are the cheap way to compare generated headers across
//! machines and builds.

use core::fmt;
use std::io::{self, Write};

/// BLAKE3 hash of a rendered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableDigest(blake3::Hash);

impl TableDigest {
    pub fn of(bytes: &[u8]) -> Self {
        TableDigest(blake3::hash(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl fmt::Display for TableDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// `Write` adapter hashing every byte accepted by the inner writer.
pub struct DigestWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
    written: u64,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            written: 0,
        }
    }

    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Returns the inner writer and the digest of everything written so far.
    pub fn finish(self) -> (W, TableDigest) {
        (self.inner, TableDigest(self.hasher.finalize()))
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
