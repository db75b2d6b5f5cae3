use std::fmt;

/// Group-chunk tag: a block with this type holds a nested [`List`].
pub const LIST: FourCC = FourCC(*b"LIST");

/// Sentinel tag for a recovered region whose size field could not be
/// trusted. The payload of an `ANON` block is the original tag bytes,
/// the original size-field bytes, and the rest of the enclosing list.
pub const ANON: FourCC = FourCC(*b"ANON");

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub fn from_str(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() == 4 {
            Some(FourCC([b[0], b[1], b[2], b[3]]))
        } else { None }
    }
    pub fn as_str_lossy(&self) -> String {
        self.0.iter().map(|&c| if (32..=126).contains(&c) { c as char } else { '.' })
            .collect()
    }
}
impl fmt::Debug for FourCC { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str_lossy()) } }
impl fmt::Display for FourCC { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str_lossy()) } }

/// One chunk as read off the stream.
#[derive(Debug, Clone)]
pub struct Block {
    /// 4CC tag, or [`ANON`] for a recovered region
    pub typ: FourCC,
    /// declared payload length, as read from the size field
    pub size: u32,
    pub data: BlockData,
}

/// Block payload: raw bytes, or a nested list when the tag is `LIST`.
#[derive(Debug, Clone)]
pub enum BlockData {
    Raw(Vec<u8>),
    List(List),
}

impl Block {
    /// The nested list of a `LIST` block, if this is one.
    pub fn as_list(&self) -> Option<&List> {
        match &self.data {
            BlockData::List(l) => Some(l),
            BlockData::Raw(_) => None,
        }
    }
}

/// An ordered collection of blocks bounded by an enclosing byte budget.
///
/// Block order is stream order and is semantically significant; callers
/// rely on positional and typed lookup. A list is never mutated after the
/// decoder returns it.
#[derive(Debug, Clone)]
pub struct List {
    pub identifier: FourCC,
    pub blocks: Vec<Block>,
}

impl List {
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }
}
