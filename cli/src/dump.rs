use ber::{BerDecoder, Cursor};
use clap::Args;

use crate::error::{Error, Result};
use crate::input::InputFormat;
use crate::utils::{format_hex_dump, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Input encoding
    #[arg(short = 'f', long, value_enum, default_value = "auto")]
    input: InputFormat,

    /// Only dump the TLV unit starting at this offset
    #[arg(long)]
    at: Option<usize>,
}

/// The bytes of the TLV unit at `offset`, header included.
pub(crate) fn node_bytes(data: &[u8], offset: usize) -> Result<&[u8]> {
    if offset > data.len() {
        return Err(Error::OffsetOutOfRange {
            offset,
            len: data.len(),
        });
    }
    let node = BerDecoder::default().decode(&mut Cursor::with_position(data, offset))?;
    Ok(&data[offset..node.end_position()])
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let data = config.input.extract(&input)?;

    let dump = match config.at {
        Some(offset) => format_hex_dump(node_bytes(&data, offset)?, offset),
        None => format_hex_dump(&data, 0),
    };
    print!("{dump}");

    Ok(())
}
