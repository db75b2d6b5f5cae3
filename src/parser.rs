use crate::blocks::{ANON, Block, BlockData, FourCC, LIST, List};
use byteorder::{BigEndian, ReadBytesExt};
use std::io;
use std::io::Read;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("not a RIFX stream")]
    Format,
    #[error("truncated input after {consumed} bytes")]
    Truncated { consumed: u32 },
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("no block matched")]
    NotFound,
    #[error("payload is {actual} bytes, expected {expected}")]
    Decode { expected: usize, actual: usize },
    #[error("block holds a nested list, not raw bytes")]
    NotRaw,
}

pub type Result<T> = std::result::Result<T, Error>;

fn fill<R: Read>(r: &mut R, buf: &mut [u8], consumed: u32) -> Result<()> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated { consumed },
        _ => Error::Io(e),
    })
}

fn read_be_u32<R: Read>(r: &mut R, consumed: u32) -> Result<u32> {
    r.read_u32::<BigEndian>().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated { consumed },
        _ => Error::Io(e),
    })
}

/// Parse a whole RIFX stream from a forward-only reader.
///
/// Checks the 4-byte `RIFX` signature, reads the big-endian file size
/// (which excludes the signature and size fields themselves), and decodes
/// the root list with that size as its byte budget. The reader is consumed
/// sequentially; no seeking is required.
///
/// # Example
/// ```no_run
/// use std::fs::File;
///
/// let mut f = File::open("movie.dir")?;
/// let root = rifx::parse(&mut f)?;
/// for block in &root.blocks {
///     println!("{} {}", block.typ, block.size);
/// }
/// # Ok::<(), rifx::Error>(())
/// ```
pub fn parse<R: Read>(r: &mut R) -> Result<List> {
    let mut sig = [0u8; 4];
    fill(r, &mut sig, 0)?;
    if &sig != b"RIFX" {
        return Err(Error::Format);
    }
    let file_size = read_be_u32(r, 4)?;
    let (list, _) = read_list(r, file_size)?;
    Ok(list)
}

/// Read one list body: a 4-byte identifier, then blocks until `budget`
/// bytes have been consumed. Returns the list and its total on-stream
/// footprint (identifier included).
pub fn read_list<R: Read>(r: &mut R, budget: u32) -> Result<(List, u32)> {
    let mut consumed = 0u32;

    let mut id = [0u8; 4];
    fill(r, &mut id, consumed)?;
    consumed += 4;

    let mut blocks = Vec::new();
    while consumed < budget {
        let (block, n) = read_block(r, budget - consumed)?;
        consumed += n;
        blocks.push(block);
    }

    Ok((List { identifier: FourCC(id), blocks }, consumed))
}

/// Read one block: tag, big-endian size, payload, optional pad byte.
///
/// `budget` is the enclosing list's remaining byte budget and bounds the
/// read. A declared size larger than the remaining budget means the size
/// field cannot be trusted; the rest of the budget is absorbed into a
/// single [`ANON`] block whose payload keeps the misread tag and size
/// bytes in front of the remainder, and the caller's loop terminates
/// normally. This sacrifices the rest of one list level for forward
/// progress rather than aborting the whole parse; it does not try to
/// resynchronize at the true corruption point.
pub fn read_block<R: Read>(r: &mut R, budget: u32) -> Result<(Block, u32)> {
    let mut consumed = 0u32;

    let mut tag = [0u8; 4];
    fill(r, &mut tag, consumed)?;
    consumed += 4;
    let size = read_be_u32(r, consumed)?;
    consumed += 4;

    let remaining = budget.saturating_sub(consumed);
    if size > remaining {
        let mut rest = vec![0u8; remaining as usize];
        fill(r, &mut rest, consumed)?;
        consumed += remaining;

        let mut data = Vec::with_capacity(8 + rest.len());
        data.extend_from_slice(&tag);
        data.extend_from_slice(&size.to_be_bytes());
        data.extend_from_slice(&rest);
        // no pad byte here: the remainder already exhausts the budget
        return Ok((Block { typ: ANON, size, data: BlockData::Raw(data) }, consumed));
    }

    let data = if FourCC(tag) == LIST {
        let (nested, n) = read_list(r, size)?;
        consumed += n;
        BlockData::List(nested)
    } else {
        let mut payload = vec![0u8; size as usize];
        fill(r, &mut payload, consumed)?;
        consumed += size;
        BlockData::Raw(payload)
    };

    // chunks are word-aligned: odd payloads carry one pad byte
    if size % 2 != 0 {
        let mut pad = [0u8; 1];
        fill(r, &mut pad, consumed)?;
        consumed += 1;
    }

    Ok((Block { typ: FourCC(tag), size, data }, consumed))
}
