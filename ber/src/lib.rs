//! Schema-less BER/DER decoding.
//!
//! Bytes are decoded into a tree of [`Node`]s that records, for every TLV
//! unit, its tag, where it starts, how long its header and content are, and
//! its children. Values are never interpreted; use [`Node::content`] to get
//! at the raw bytes of a leaf.
//!
//! ```
//! let data = [0x30, 0x06, 0x02, 0x01, 0x2a, 0x04, 0x01, 0xff];
//! let node = ber::decode(&data).unwrap();
//!
//! assert_eq!(node.tag().to_string(), "SEQUENCE");
//! let children = node.children().unwrap();
//! assert_eq!(children.len(), 2);
//! assert_eq!(children[0].content(&data), Some(&[0x2a][..]));
//! ```

use armor::Pem;
use tlvscope::decoder::{DecodableFrom, Decoder};

pub mod cursor;
mod decoder;
pub mod error;
mod length;
mod node;
pub mod tag;

pub use cursor::Cursor;
pub use decoder::{BerDecoder, DEFAULT_MAX_DEPTH, DecoderConfig, has_encapsulated_content};
pub use error::{Error, Result};
pub use length::{Length, MAX_LENGTH_OCTETS, decode_length};
pub use node::{Node, NodeLength};
pub use tag::{Class, Tag, UniversalType};

/// Decodes the TLV unit at the start of `data`.
pub fn decode(data: &[u8]) -> Result<Node> {
    decode_at(data, 0)
}

/// Decodes the TLV unit starting at `offset`.
pub fn decode_at(data: &[u8], offset: usize) -> Result<Node> {
    let mut cursor = Cursor::with_position(data, offset);
    BerDecoder::default().decode(&mut cursor)
}

/// Decodes every consecutive TLV unit in `data`.
pub fn decode_all(data: &[u8]) -> Result<Vec<Node>> {
    BerDecoder::default().decode_all(data)
}

/// All top-level units of an input, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Document { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl DecodableFrom<Vec<u8>> for Node {}

impl Decoder<Vec<u8>, Node> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Node> {
        decode(self)
    }
}

impl<'a> DecodableFrom<&'a [u8]> for Node {}

impl<'a> Decoder<&'a [u8], Node> for &'a [u8] {
    type Error = Error;

    fn decode(&self) -> Result<Node> {
        decode(self)
    }
}

impl DecodableFrom<Vec<u8>> for Document {}

impl Decoder<Vec<u8>, Document> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Document> {
        decode_all(self).map(Document::new)
    }
}

impl DecodableFrom<Pem> for Document {}

impl Decoder<Pem, Document> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Document> {
        let bytes: Vec<u8> = self.decode()?;
        bytes.decode()
    }
}
