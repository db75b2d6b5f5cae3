use clap::{ArgAction, Parser};
use rifx::blocks::{ANON, Block, BlockData, List};
use std::collections::BTreeMap;
use std::fs::File;

#[derive(Parser, Debug)]
#[command(version, about = "Summarize the chunk structure of a RIFX file")]
struct Args {
    /// RIFX file path
    path: String,

    /// Also print a per-tag block histogram
    #[arg(long, action = ArgAction::SetTrue)]
    tags: bool,
}

#[derive(Default)]
struct Stats {
    blocks: usize,
    lists: usize,
    recovered: usize,
    raw_bytes: u64,
    max_depth: usize,
    per_tag: BTreeMap<String, usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut f = File::open(&args.path)?;
    let root = rifx::parse(&mut f)?;

    let mut stats = Stats::default();
    collect(&root, 1, &mut stats);

    println!("root identifier : {}", root.identifier);
    println!("top-level blocks: {}", root.num_blocks());
    println!("total blocks    : {}", stats.blocks);
    println!("nested lists    : {}", stats.lists);
    println!("raw payload     : {} bytes", stats.raw_bytes);
    println!("max depth       : {}", stats.max_depth);
    if stats.recovered > 0 {
        println!("recovered ANON  : {}", stats.recovered);
    }

    if args.tags {
        println!();
        for (tag, count) in &stats.per_tag {
            println!("{tag}  {count}");
        }
    }

    Ok(())
}

fn collect(list: &List, depth: usize, stats: &mut Stats) {
    stats.max_depth = stats.max_depth.max(depth);
    list.for_each(|b: &Block| {
        stats.blocks += 1;
        *stats.per_tag.entry(b.typ.to_string()).or_default() += 1;
        if b.typ == ANON {
            stats.recovered += 1;
        }
        match &b.data {
            BlockData::Raw(bytes) => stats.raw_bytes += bytes.len() as u64,
            BlockData::List(nested) => {
                stats.lists += 1;
                collect(nested, depth + 1, stats);
            }
        }
    });
}
