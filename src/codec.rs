//! Cursor-based field readers for the F1 23 wire format.
//!
//! Every packet body is a fixed sequence of little-endian scalars and
//! fixed-length arrays. [`Cursor`] tracks the running byte offset while a
//! decoder reads that sequence; each read either returns the value and
//! advances the cursor, or fails with
//! [`TruncatedBuffer`](crate::TelemetryError::TruncatedBuffer) at the first
//! out-of-range access. Array reads preserve wire order exactly - slot `i`
//! of the decoded array is slot `i` on the wire.

use crate::{Result, TelemetryError};

/// Fixed width of the per-driver name slots in participants and lobby
/// entries. The slot is raw text bytes, not necessarily NUL-terminated.
pub const NAME_SLOT_LEN: usize = 48;

/// Sequential reader over an immutable byte buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

macro_rules! scalar_reader {
    ($name:ident, $ty:ty) => {
        #[doc = concat!("Read a little-endian `", stringify!($ty), "` and advance.")]
        pub fn $name(&mut self) -> Result<$ty> {
            let bytes = self.take(size_of::<$ty>())?;
            Ok(<$ty>::from_le_bytes(bytes.try_into().expect("take returned exact length")))
        }
    };
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Create a cursor positioned at `offset`, for decoding a packet body
    /// that starts after the fixed header.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Take the next `n` bytes, advancing the cursor.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or_else(|| {
            TelemetryError::truncated(self.pos, n, self.data.len())
        })?;
        if end > self.data.len() {
            return Err(TelemetryError::truncated(self.pos, n, self.data.len()));
        }
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Read one byte and advance.
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Read one byte, reinterpreted as signed, and advance.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    scalar_reader!(read_u16, u16);
    scalar_reader!(read_i16, i16);
    scalar_reader!(read_u32, u32);
    scalar_reader!(read_i32, i32);
    scalar_reader!(read_u64, u64);
    scalar_reader!(read_f32, f32);
    scalar_reader!(read_f64, f64);

    /// Decode a fixed-length array by applying `read` once per slot, in wire
    /// order. Used for the per-car, per-wheel, per-lap and per-stint blocks.
    pub fn read_array<T, const N: usize>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<[T; N]> {
        let mut slots = Vec::with_capacity(N);
        for _ in 0..N {
            slots.push(read(self)?);
        }
        Ok(slots.try_into().unwrap_or_else(|_| unreachable!("vec holds exactly N elements")))
    }

    /// Read `N` consecutive bytes as a fixed array.
    pub fn read_u8_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.read_array(Self::read_u8)
    }

    /// Read `N` consecutive little-endian `u16`s as a fixed array.
    pub fn read_u16_array<const N: usize>(&mut self) -> Result<[u16; N]> {
        self.read_array(Self::read_u16)
    }

    /// Read `N` consecutive little-endian `f32`s as a fixed array.
    pub fn read_f32_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        self.read_array(Self::read_f32)
    }

    /// Read a fixed 48-byte name slot.
    ///
    /// Convention: the slot holds raw text bytes from the buffer; the decoded
    /// name is the bytes up to the first NUL (or all 48 if none), interpreted
    /// as UTF-8 with invalid sequences replaced. The cursor always advances
    /// by the full slot width.
    pub fn read_name(&mut self) -> Result<String> {
        let bytes = self.take(NAME_SLOT_LEN)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }
}
