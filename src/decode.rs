use crate::blocks::{Block, BlockData};
use crate::parser::{Error, Result};
use byteorder::{BigEndian, ByteOrder};
use std::io::{Cursor, Read};

/// A fixed-width, big-endian packed payload layout.
///
/// Implementors declare their exact on-stream width and decode themselves
/// from a reader positioned at the start of the payload. Used with
/// [`Block::to_struct`], which width-checks the payload first.
pub trait Layout: Sized {
    /// Exact payload width in bytes.
    const WIDTH: usize;
    fn read_from<R: Read>(r: &mut R) -> std::io::Result<Self>;
}

impl Block {
    /// The raw payload bytes, or [`Error::NotRaw`] for a `LIST` block.
    pub fn raw(&self) -> Result<&[u8]> {
        match &self.data {
            BlockData::Raw(b) => Ok(b),
            BlockData::List(_) => Err(Error::NotRaw),
        }
    }

    /// The payload reinterpreted as text. Not required to be valid UTF-8;
    /// invalid sequences are replaced, as with any lossy display.
    pub fn to_text(&self) -> Result<String> {
        Ok(String::from_utf8_lossy(self.raw()?).into_owned())
    }

    /// Decode the payload as a fixed-width big-endian struct.
    pub fn to_struct<T: Layout>(&self) -> Result<T> {
        let raw = self.raw()?;
        if raw.len() != T::WIDTH {
            return Err(Error::Decode { expected: T::WIDTH, actual: raw.len() });
        }
        let mut cur = Cursor::new(raw);
        Ok(T::read_from(&mut cur)?)
    }

    pub fn to_u8(&self) -> Result<u8> {
        let raw = self.lead(1)?;
        Ok(raw[0])
    }

    pub fn to_u16(&self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.lead(2)?))
    }

    pub fn to_u32(&self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.lead(4)?))
    }

    pub fn to_u64(&self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.lead(8)?))
    }

    // First `n` payload bytes, width-checked.
    fn lead(&self, n: usize) -> Result<&[u8]> {
        let raw = self.raw()?;
        if raw.len() < n {
            return Err(Error::Decode { expected: n, actual: raw.len() });
        }
        Ok(&raw[..n])
    }
}
