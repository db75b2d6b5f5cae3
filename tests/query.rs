use rifx::{Block, BlockData, FourCC, List};

fn raw_block(tag: &[u8; 4], payload: &[u8]) -> Block {
    Block {
        typ: FourCC(*tag),
        size: payload.len() as u32,
        data: BlockData::Raw(payload.to_vec()),
    }
}

fn list_block(identifier: &[u8; 4], blocks: Vec<Block>) -> Block {
    let list = List { identifier: FourCC(*identifier), blocks };
    Block {
        typ: FourCC(*b"LIST"),
        size: 0, // not exercised by the query layer
        data: BlockData::List(list),
    }
}

fn sample() -> List {
    List {
        identifier: FourCC(*b"MV93"),
        blocks: vec![
            raw_block(b"aaaa", &[1]),
            raw_block(b"bbbb", &[2, 3]),
            raw_block(b"aaaa", &[4]),
            raw_block(b"cccc", &[5, 6, 7]),
        ],
    }
}

#[test]
fn for_each_visits_in_order() {
    let list = sample();
    let mut seen = Vec::new();
    list.for_each(|b| seen.push(b.typ.to_string()));
    assert_eq!(seen, ["aaaa", "bbbb", "aaaa", "cccc"]);
}

#[test]
fn map_preserves_length_and_order() {
    let list = sample();
    let sizes = list.map(|b| b.size);
    assert_eq!(sizes.len(), list.num_blocks());
    assert_eq!(sizes, [1, 2, 1, 3]);
}

#[test]
fn filter_keeps_order_and_identifier() {
    let list = sample();
    let filtered = list.filter(|b| b.typ == FourCC(*b"aaaa"));

    assert_eq!(filtered.identifier, list.identifier);
    assert_eq!(filtered.num_blocks(), 2);
    assert_eq!(filtered.blocks[0].raw().unwrap(), &[1]);
    assert_eq!(filtered.blocks[1].raw().unwrap(), &[4]);
    // source untouched
    assert_eq!(list.num_blocks(), 4);
}

#[test]
fn filter_never_grows() {
    let list = sample();
    assert_eq!(list.filter(|_| true).num_blocks(), list.num_blocks());
    assert_eq!(list.filter(|_| false).num_blocks(), 0);
}

#[test]
fn find_is_first_match() {
    let list = sample();
    let hit = list.find(|b| b.typ == FourCC(*b"aaaa")).expect("find failed");
    assert_eq!(hit.raw().unwrap(), &[1]);
}

#[test]
fn find_miss_is_not_found() {
    let list = sample();
    assert!(matches!(
        list.find(|b| b.typ == FourCC(*b"zzzz")),
        Err(rifx::Error::NotFound)
    ));
}

#[test]
fn sublist_filter_matches_identifier_only() {
    let list = List {
        identifier: FourCC(*b"MV93"),
        blocks: vec![
            list_block(b"CAS*", vec![raw_block(b"memb", &[1])]),
            raw_block(b"free", b"xx"),
            list_block(b"SND*", vec![raw_block(b"samp", &[2])]),
            list_block(b"CAS*", vec![raw_block(b"memb", &[3]), raw_block(b"memb", &[4])]),
        ],
    };

    let subs = list.sublist_filter(FourCC(*b"CAS*"));
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].num_blocks(), 1);
    assert_eq!(subs[1].num_blocks(), 2);
}

#[test]
fn sublist_merge_flattens_one_level() {
    let list = List {
        identifier: FourCC(*b"MV93"),
        blocks: vec![
            list_block(b"CAS*", vec![raw_block(b"memb", &[1])]),
            list_block(b"SND*", vec![raw_block(b"samp", &[9])]),
            list_block(b"CAS*", vec![raw_block(b"memb", &[2]), raw_block(b"memb", &[3])]),
        ],
    };

    let merged = list.sublist_merge(FourCC(*b"CAS*"));
    assert_eq!(merged.identifier, FourCC(*b"CAS*"));
    assert_eq!(merged.num_blocks(), 3);
    let payloads: Vec<u8> = merged.blocks.iter().map(|b| b.raw().unwrap()[0]).collect();
    assert_eq!(payloads, [1, 2, 3]);
    // source untouched
    assert_eq!(list.num_blocks(), 3);
}

#[test]
fn sublist_merge_with_no_matches_is_empty() {
    let list = sample();
    let merged = list.sublist_merge(FourCC(*b"none"));
    assert_eq!(merged.identifier, FourCC(*b"none"));
    assert_eq!(merged.num_blocks(), 0);
}
