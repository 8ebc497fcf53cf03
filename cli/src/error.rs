use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input error: {0}")]
    Armor(#[from] armor::error::Error),

    #[error("decode error: {0}")]
    Decode(#[from] ber::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("offset {offset} is past the end of the {len}-byte input")]
    OffsetOutOfRange { offset: usize, len: usize },
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
