use std::fs;
use std::io::{self, Read};

use crate::error::Result;

const BYTES_PER_LINE: usize = 16;

/// Reads all of `file`, or stdin when no file is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Renders `data` like `xxd`: offset, 16 hex bytes split in two groups of
/// eight, then the printable ASCII. Offsets start at `base`.
pub(crate) fn format_hex_dump(data: &[u8], base: usize) -> String {
    let mut output = String::new();

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        output.push_str(&format!("{:08x}  ", base + line * BYTES_PER_LINE));

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => output.push_str(&format!("{:02x} ", byte)),
                None => output.push_str("   "),
            }
            if i == 7 {
                output.push(' ');
            }
        }

        output.push_str(" |");
        output.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        output.push_str("|\n");
    }

    output
}

/// Space separated hex, cut after `limit` bytes.
pub(crate) fn format_hex_preview(data: &[u8], limit: usize) -> String {
    let mut preview = data
        .iter()
        .take(limit)
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    if data.len() > limit {
        preview.push_str(" ...");
    }
    preview
}
