use std::fmt::Write;

/// Offset-addressed hex + ASCII dump, 16 bytes per row.
pub fn hex_dump(bytes: &[u8], start_offset: u64) -> String {
    let mut out = String::new();
    for (row, line) in bytes.chunks(16).enumerate() {
        let offs = start_offset + (row as u64) * 16;
        let hexs: String = line.iter().map(|b| format!("{:02x} ", b)).collect();
        let ascii: String = line
            .iter()
            .map(|&c| if (32..=126).contains(&c) { c as char } else { '.' })
            .collect();
        let _ = writeln!(out, "{:08x}  {:<48}  |{}|", offs, hexs, ascii);
    }
    out
}
