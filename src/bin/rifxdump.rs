use clap::{ArgAction, Parser};
use rifx::{
    blocks::{Block, BlockData, FourCC, List},
    json_api::json_tree,
    util::hex_dump,
};
use std::fs::File;

#[derive(Parser, Debug)]
#[command(version, about = "Minimal RIFX chunk explorer")]
struct Args {
    /// RIFX file path
    path: String,

    /// Limit recursion depth (for text/tree output)
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Hex preview bytes per raw block in text and JSON output (0 disables)
    #[arg(long, default_value_t = 16)]
    preview: usize,

    /// Dump raw payload of the first block with this 4CC (e.g. --raw VWCF)
    #[arg(long = "raw")]
    raw: Option<String>,

    /// Show at most this many bytes when dumping raw (0 means entire payload)
    #[arg(long, default_value_t = 0)]
    bytes: usize,

    /// Emit JSON instead of human-readable tree
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut f = File::open(&args.path)?;
    let root = rifx::parse(&mut f)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_tree(&root, args.preview))?);
        return Ok(());
    }

    println!("{} ({} blocks)", root.identifier, root.num_blocks());
    for b in &root.blocks {
        print_block(b, 1, args.max_depth, args.preview);
    }

    if let Some(sel) = args.raw.as_ref() {
        dump_raw(&root, sel, args.bytes)?;
    }

    Ok(())
}

// ---------- Human-readable tree ----------

fn print_block(b: &Block, depth: usize, max_depth: usize, preview: usize) {
    let indent = "  ".repeat(depth);
    match &b.data {
        BlockData::List(nested) => {
            println!(
                "{indent}{} {:>10} [{}] ({} blocks)",
                b.typ,
                b.size,
                nested.identifier,
                nested.num_blocks()
            );
            if depth < max_depth {
                for child in &nested.blocks {
                    print_block(child, depth + 1, max_depth, preview);
                }
            }
        }
        BlockData::Raw(bytes) => {
            let n = bytes.len().min(preview);
            if n == 0 {
                println!("{indent}{} {:>10}", b.typ, b.size);
            } else {
                println!("{indent}{} {:>10}  {}", b.typ, b.size, hex::encode(&bytes[..n]));
            }
        }
    }
}

// ---------- Raw payload dump ----------

fn dump_raw(root: &List, sel: &str, max_bytes: usize) -> anyhow::Result<()> {
    let tag = FourCC::from_str(sel)
        .ok_or_else(|| anyhow::anyhow!("tag must be exactly 4 characters: {sel}"))?;
    let Some(block) = find_block(root, tag) else {
        anyhow::bail!("no block with tag {tag}");
    };
    let bytes = block.raw()?;
    let n = if max_bytes == 0 { bytes.len() } else { bytes.len().min(max_bytes) };
    println!("-- {} ({} of {} bytes) --", tag, n, bytes.len());
    print!("{}", hex_dump(&bytes[..n], 0));
    Ok(())
}

// Depth-first, stream order.
fn find_block(list: &List, tag: FourCC) -> Option<&Block> {
    for b in &list.blocks {
        if b.typ == tag {
            return Some(b);
        }
        if let BlockData::List(nested) = &b.data {
            if let Some(found) = find_block(nested, tag) {
                return Some(found);
            }
        }
    }
    None
}
