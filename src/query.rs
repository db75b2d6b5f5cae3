use crate::blocks::{Block, BlockData, FourCC, List};
use crate::parser::{Error, Result};

impl List {
    /// Visit each direct child block in stream order.
    pub fn for_each<F: FnMut(&Block)>(&self, mut f: F) {
        for block in &self.blocks {
            f(block);
        }
    }

    /// Transform each direct child block, preserving order. The result
    /// always has exactly one element per child.
    pub fn map<T, F: FnMut(&Block) -> T>(&self, f: F) -> Vec<T> {
        self.blocks.iter().map(f).collect()
    }

    /// A new list (same identifier) holding clones of the children that
    /// satisfy the predicate, in their original order. The source is not
    /// touched.
    pub fn filter<F: FnMut(&Block) -> bool>(&self, mut pred: F) -> List {
        List {
            identifier: self.identifier,
            blocks: self.blocks.iter().filter(|b| pred(b)).cloned().collect(),
        }
    }

    /// First child block satisfying the predicate, in stream order.
    pub fn find<F: FnMut(&Block) -> bool>(&self, mut pred: F) -> Result<&Block> {
        self.blocks.iter().find(|b| pred(b)).ok_or(Error::NotFound)
    }

    /// Direct `LIST` children whose own identifier equals `identifier`.
    /// Does not descend below direct children.
    pub fn sublist_filter(&self, identifier: FourCC) -> Vec<&List> {
        self.blocks
            .iter()
            .filter_map(|b| match &b.data {
                BlockData::List(l) if l.identifier == identifier => Some(l),
                _ => None,
            })
            .collect()
    }

    /// Flatten one level of grouping: a new list tagged `identifier`
    /// whose blocks are the concatenated children of every matching
    /// sublist, in discovery order. Zero matches yields an empty list.
    pub fn sublist_merge(&self, identifier: FourCC) -> List {
        let mut blocks = Vec::new();
        for sublist in self.sublist_filter(identifier) {
            blocks.extend(sublist.blocks.iter().cloned());
        }
        List { identifier, blocks }
    }
}
