use thiserror::Error;

/// Errors raised while decoding a TLV tree.
///
/// Every variant records the byte offset at which the problem was found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of input at offset {position}")]
    OutOfBounds { position: usize },

    #[error("length over 24 bits not supported at offset {position} ({octets} length octets)")]
    UnsupportedLength { position: usize, octets: u8 },

    #[error("content overflowed the constructed container: ended at offset {position}, expected {expected}")]
    ContentOverflow { position: usize, expected: usize },

    #[error("indefinite length on a primitive value at offset {position}")]
    IndefinitePrimitive { position: usize },

    #[error("nesting deeper than {limit} levels at offset {position}")]
    DepthExceeded { position: usize, limit: usize },

    #[error("armor: {0}")]
    Armor(#[from] armor::error::Error),
}

impl Error {
    /// Byte offset where decoding stopped, if the error came from the decoder.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::OutOfBounds { position }
            | Error::UnsupportedLength { position, .. }
            | Error::ContentOverflow { position, .. }
            | Error::IndefinitePrimitive { position }
            | Error::DepthExceeded { position, .. } => Some(*position),
            Error::Armor(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
