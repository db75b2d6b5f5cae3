pub mod blocks;
pub mod decode;
pub mod json_api;
pub mod parser;
pub mod query;
pub mod util;

pub use blocks::{ANON, Block, BlockData, FourCC, LIST, List};
pub use decode::Layout;
pub use json_api::{JsonBlock, JsonList, json_tree};
pub use parser::{Error, Result, parse, read_block, read_list};
