use crate::tag::Tag;

/// Length of a decoded node's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLength {
    /// Length declared in the header.
    Definite(usize),
    /// Indefinite-length encoding. `consumed` counts the content bytes up to
    /// and including the end-of-contents marker.
    Indefinite { consumed: usize },
}

impl NodeLength {
    /// Number of content bytes the node occupies in the input.
    pub fn span(&self) -> usize {
        match self {
            NodeLength::Definite(n) => *n,
            NodeLength::Indefinite { consumed } => *consumed,
        }
    }

    pub fn is_indefinite(&self) -> bool {
        matches!(self, NodeLength::Indefinite { .. })
    }
}

/// One decoded TLV unit.
///
/// `children` is `None` for opaque values and `Some` for constructed values
/// and for BIT STRING / OCTET STRING values recognized as wrapping nested
/// TLV content. An empty `Some` is a constructed value with no children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    tag: Tag,
    header_length: usize,
    length: NodeLength,
    start_position: usize,
    children: Option<Vec<Node>>,
}

impl Node {
    pub(crate) fn new(
        tag: Tag,
        header_length: usize,
        length: NodeLength,
        start_position: usize,
        children: Option<Vec<Node>>,
    ) -> Self {
        Node {
            tag,
            header_length,
            length,
            start_position,
            children,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn header_length(&self) -> usize {
        self.header_length
    }

    pub fn length(&self) -> NodeLength {
        self.length
    }

    /// Declared content length; `None` for indefinite-length nodes.
    pub fn content_length(&self) -> Option<usize> {
        match self.length {
            NodeLength::Definite(n) => Some(n),
            NodeLength::Indefinite { .. } => None,
        }
    }

    pub fn start_position(&self) -> usize {
        self.start_position
    }

    pub fn content_start(&self) -> usize {
        self.start_position + self.header_length
    }

    /// Header plus content, in bytes.
    pub fn total_length(&self) -> usize {
        self.header_length + self.length.span()
    }

    /// Offset one past the last byte of this node.
    pub fn end_position(&self) -> usize {
        self.start_position + self.total_length()
    }

    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    /// A primitive value whose bytes were decoded as nested TLV.
    pub fn is_encapsulating(&self) -> bool {
        !self.tag.is_constructed() && self.children.is_some()
    }

    /// Raw content bytes of a definite-length node, sliced from the buffer
    /// the node was decoded from.
    pub fn content<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        let length = self.content_length()?;
        let start = self.content_start();
        data.get(start..start.checked_add(length)?)
    }
}
