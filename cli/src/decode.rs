use ber::{BerDecoder, Cursor, DEFAULT_MAX_DEPTH, DecoderConfig, Node};
use clap::Args;
use log::debug;

use crate::error::{Error, Result};
use crate::format::{NodeView, RenderOptions, format_tree};
use crate::input::InputFormat;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Input encoding
    #[arg(short = 'f', long, value_enum, default_value = "auto")]
    input: InputFormat,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Byte offset of the first TLV unit within the decoded payload
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// Keep decoding consecutive TLV units until the input is exhausted
    #[arg(long)]
    all: bool,

    /// Maximum nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not look for TLV data inside BIT STRING and OCTET STRING values
    #[arg(long)]
    no_encapsulation: bool,

    /// Show the first bytes of every leaf value
    #[arg(long)]
    content: bool,
}

impl Config {
    fn decoder(&self) -> BerDecoder {
        BerDecoder::new(
            DecoderConfig::default()
                .max_depth(self.max_depth)
                .encapsulation(!self.no_encapsulation),
        )
    }
}

/// Decodes one unit at `offset`, or every unit from there on when `all`.
pub(crate) fn decode_nodes(
    decoder: &BerDecoder,
    data: &[u8],
    offset: usize,
    all: bool,
) -> Result<Vec<Node>> {
    if offset > data.len() {
        return Err(Error::OffsetOutOfRange {
            offset,
            len: data.len(),
        });
    }

    let mut cursor = Cursor::with_position(data, offset);
    let mut nodes = vec![decoder.decode(&mut cursor)?];
    while all && !cursor.is_empty() {
        nodes.push(decoder.decode(&mut cursor)?);
    }
    debug!(
        "decoded {} top-level node(s), {} of {} bytes",
        nodes.len(),
        cursor.position() - offset,
        data.len()
    );
    Ok(nodes)
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let data = config.input.extract(&input)?;
    let nodes = decode_nodes(&config.decoder(), &data, config.offset, config.all)?;

    let options = RenderOptions {
        content: config.content,
    };
    match config.output {
        OutputFormat::Text => print!("{}", format_tree(&nodes, &data, options)),
        OutputFormat::Json | OutputFormat::Yaml => {
            let views: Vec<NodeView> = nodes
                .iter()
                .map(|node| NodeView::new(node, &data, options))
                .collect();
            if config.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                print!("{}", serde_yml::to_string(&views)?);
            }
        }
    }

    Ok(())
}
