use log::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::length::{Length, decode_length};
use crate::node::{Node, NodeLength};
use crate::tag::{Class, Tag};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for [`BerDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    max_depth: usize,
    encapsulation: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            encapsulation: true,
        }
    }
}

impl DecoderConfig {
    /// Deepest nesting level accepted below the top-level node.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether BIT STRING / OCTET STRING payloads are probed for nested TLV.
    pub fn encapsulation(mut self, enabled: bool) -> Self {
        self.encapsulation = enabled;
        self
    }
}

/// Recursive TLV decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct BerDecoder {
    config: DecoderConfig,
}

impl BerDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        BerDecoder { config }
    }

    pub fn decode_length(&self, cursor: &mut Cursor<'_>) -> Result<Length> {
        decode_length(cursor)
    }

    /// Decodes one TLV unit starting at the cursor and leaves the cursor
    /// just past it.
    pub fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Node> {
        self.decode_node(cursor, 0).inspect_err(|e| {
            debug!("decode failed: {e}");
        })
    }

    /// Decodes consecutive top-level units until the input is exhausted.
    pub fn decode_all(&self, data: &[u8]) -> Result<Vec<Node>> {
        let mut cursor = Cursor::new(data);
        let mut nodes = Vec::new();
        while !cursor.is_empty() {
            nodes.push(self.decode(&mut cursor)?);
        }
        Ok(nodes)
    }

    /// Like [`has_encapsulated_content`], honoring the configured switch.
    pub fn has_encapsulated_content(
        &self,
        tag: Tag,
        length: Length,
        cursor: &Cursor<'_>,
    ) -> bool {
        if tag.is_constructed() {
            return true;
        }
        self.config.encapsulation && has_encapsulated_content(tag, length, cursor)
    }

    fn decode_node(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Node> {
        let start_position = cursor.position();
        if depth > self.config.max_depth {
            return Err(Error::DepthExceeded {
                position: start_position,
                limit: self.config.max_depth,
            });
        }

        let tag = Tag::from(cursor.get_byte()?);
        let length = decode_length(cursor)?;
        let header_length = cursor.position() - start_position;

        if !self.has_encapsulated_content(tag, length, cursor) {
            let Length::Definite(length) = length else {
                return Err(Error::IndefinitePrimitive {
                    position: start_position,
                });
            };
            cursor.skip(length)?;
            trace!("{tag} @{start_position}+{length}");
            return Ok(Node::new(
                tag,
                header_length,
                NodeLength::Definite(length),
                start_position,
                None,
            ));
        }

        let content_start = cursor.position();
        if tag == Tag::BIT_STRING {
            // unused bits, should be in [0, 7]
            cursor.get_byte()?;
        }

        let mut children = Vec::new();
        let length = match length {
            Length::Definite(length) => {
                let end = content_start + length;
                let complete = end <= cursor.data().len();
                while cursor.position() < end {
                    let child = self.decode_node(cursor, depth + 1).map_err(|e| match e {
                        // the container is whole, so the child ran past it
                        Error::OutOfBounds { position } if complete && position >= end => {
                            Error::ContentOverflow {
                                position,
                                expected: end,
                            }
                        }
                        e => e,
                    })?;
                    children.push(child);
                }
                if cursor.position() != end {
                    return Err(Error::ContentOverflow {
                        position: cursor.position(),
                        expected: end,
                    });
                }
                NodeLength::Definite(length)
            }
            Length::Indefinite => {
                loop {
                    // the terminator sits at the container's own level
                    let next = Tag::from(cursor.duplicate().get_byte()?);
                    let child_depth = if next.is_end_of_contents() {
                        depth
                    } else {
                        depth + 1
                    };
                    let child = self.decode_node(cursor, child_depth)?;
                    if child.tag().is_end_of_contents() {
                        break;
                    }
                    children.push(child);
                }
                NodeLength::Indefinite {
                    consumed: cursor.position() - content_start,
                }
            }
        };

        trace!(
            "{tag} @{start_position}+{} ({} children)",
            length.span(),
            children.len()
        );
        Ok(Node::new(
            tag,
            header_length,
            length,
            start_position,
            Some(children),
        ))
    }
}

/// Decides whether a value's content should be decoded as nested TLV.
///
/// Constructed values always are. Primitive BIT STRING and OCTET STRING
/// values are when their payload (after the unused-bits byte for BIT
/// STRING) starts with a universal or context-specific tag whose header and
/// length exactly fill the declared length. The cursor must sit at the first
/// content byte and is not moved.
pub fn has_encapsulated_content(tag: Tag, length: Length, cursor: &Cursor<'_>) -> bool {
    if tag.is_constructed() {
        return true;
    }
    if tag != Tag::BIT_STRING && tag != Tag::OCTET_STRING {
        return false;
    }
    let Length::Definite(length) = length else {
        return false;
    };

    match peek_inner_span(tag, cursor) {
        Ok(Some(span)) => span == length,
        Ok(None) => false,
        Err(e) => {
            debug!("{tag} @{}: not encapsulating: {e}", cursor.position());
            false
        }
    }
}

/// Bytes covered by the inner TLV that would start at the cursor, counting
/// the BIT STRING unused-bits byte. `None` when the inner tag is implausible
/// or its length is indefinite.
fn peek_inner_span(tag: Tag, cursor: &Cursor<'_>) -> Result<Option<usize>> {
    let mut peek = cursor.duplicate();
    if tag == Tag::BIT_STRING {
        peek.get_byte()?;
    }
    let inner = Tag::from(peek.get_byte()?);
    if matches!(inner.class(), Class::Application | Class::Private) {
        return Ok(None);
    }
    match decode_length(&mut peek)? {
        Length::Definite(length) => Ok(Some(peek.position() - cursor.position() + length)),
        Length::Indefinite => Ok(None),
    }
}
