use crate::blocks::{Block, BlockData, List};
use serde::Serialize;

/// A JSON-serializable representation of a single block.
///
/// This is designed for JSON output in tools like `rifxdump` and for use
/// in UIs built on top of the parsed tree.
#[derive(Serialize)]
pub struct JsonBlock {
    /// Four-character block tag (lossy, e.g. "CASt" or "ANON")
    pub typ: String,
    /// Declared payload size from the stream
    pub size: u32,
    /// Block classification: "raw" or "list"
    pub kind: String,
    /// Hex preview of the first bytes of a raw payload
    pub preview: Option<String>,
    /// Nested list for "list" blocks
    pub list: Option<JsonList>,
}

/// A JSON-serializable representation of a list and its children.
#[derive(Serialize)]
pub struct JsonList {
    pub identifier: String,
    pub num_blocks: usize,
    pub blocks: Vec<JsonBlock>,
}

/// Build the JSON tree for a parsed list. Raw payloads carry a hex
/// preview of at most `preview_bytes` bytes (0 disables previews).
pub fn json_tree(list: &List, preview_bytes: usize) -> JsonList {
    JsonList {
        identifier: list.identifier.to_string(),
        num_blocks: list.num_blocks(),
        blocks: list.blocks.iter().map(|b| json_block(b, preview_bytes)).collect(),
    }
}

fn json_block(block: &Block, preview_bytes: usize) -> JsonBlock {
    let (kind, preview, list) = match &block.data {
        BlockData::Raw(bytes) => {
            let preview = if preview_bytes == 0 || bytes.is_empty() {
                None
            } else {
                let n = bytes.len().min(preview_bytes);
                Some(hex::encode(&bytes[..n]))
            };
            ("raw".to_string(), preview, None)
        }
        BlockData::List(nested) => {
            ("list".to_string(), None, Some(json_tree(nested, preview_bytes)))
        }
    };

    JsonBlock {
        typ: block.typ.to_string(),
        size: block.size,
        kind,
        preview,
        list,
    }
}
