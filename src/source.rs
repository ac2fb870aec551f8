//! # Byte Sources
//!
//! A byte source is the only input to the decoder: a sequential reader that
//! hands out one byte at a time and fails once it runs dry. There is no seek
//! and no peek; the decoder reads exactly as many bytes as each instruction's
//! addressing mode demands.

use crate::memory::MemoryBus;
use thiserror::Error;

/// The source had no byte left to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("byte source exhausted after {offset} bytes")]
pub struct OutOfBounds {
    /// Number of bytes successfully read before the failed read.
    pub offset: usize,
}

/// Sequential, bounds-checked reader.
///
/// Each successful [`read_byte`](ByteSource::read_byte) advances the cursor by
/// one. A failed read leaves the cursor where it was.
pub trait ByteSource {
    /// Read the next byte.
    fn read_byte(&mut self) -> Result<u8, OutOfBounds>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<u8, OutOfBounds> {
        (**self).read_byte()
    }
}

/// Byte source over a borrowed buffer.
///
/// ```
/// use dis6502::{ByteSource, SliceSource};
///
/// let mut source = SliceSource::new(&[0xEA]);
/// assert_eq!(source.read_byte(), Ok(0xEA));
/// assert!(source.read_byte().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        &data[self.offset..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> Result<u8, OutOfBounds> {
        let byte = *self.data.get(self.offset).ok_or(OutOfBounds {
            offset: self.offset,
        })?;
        self.offset += 1;
        Ok(byte)
    }
}

/// Byte source reading through a [`MemoryBus`].
///
/// Starts at `start` and walks upward; the read past 0xFFFF fails instead of
/// wrapping, since a 6502 memory map ends there.
pub struct BusSource<'a, M: MemoryBus + ?Sized> {
    bus: &'a M,
    next: u32,
    offset: usize,
}

impl<'a, M: MemoryBus + ?Sized> BusSource<'a, M> {
    pub fn new(bus: &'a M, start: u16) -> Self {
        Self {
            bus,
            next: start as u32,
            offset: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }
}

impl<M: MemoryBus + ?Sized> ByteSource for BusSource<'_, M> {
    fn read_byte(&mut self) -> Result<u8, OutOfBounds> {
        let addr = u16::try_from(self.next).map_err(|_| OutOfBounds {
            offset: self.offset,
        })?;
        let byte = self.bus.read(addr);
        self.next += 1;
        self.offset += 1;
        Ok(byte)
    }
}
