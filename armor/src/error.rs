use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when unwrapping a text envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing the opening boundary marker (e.g., `-----BEGIN CERTIFICATE-----`)
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// Missing the closing boundary marker (e.g., `-----END CERTIFICATE-----`)
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// No data found between boundary markers
    #[error("missing PEM data")]
    MissingData,

    /// The BEGIN and END labels do not match
    #[error("label doesn't match: BEGIN {begin}, END {end}")]
    LabelMissMatch { begin: String, end: String },

    /// Malformed boundary marker
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Invalid character or format in a base64 data line
    #[error("invalid base64line")]
    InvalidBase64Line,

    /// Invalid final base64 line (the line containing padding characters)
    #[error("invalid base64finl")]
    InvalidBase64Finl,

    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),

    #[error("invalid hex digit at offset {position}")]
    InvalidHex { position: usize },

    #[error("input is empty")]
    Empty,

    #[error("input is not valid UTF-8 text")]
    NotText,
}
