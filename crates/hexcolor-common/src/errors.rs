use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color format: {0}")]
    InvalidFormat(String),

    #[error("invalid hex digit in group {group:?} at position {position}")]
    InvalidDigit { position: usize, group: String },

    #[error("component of length {length} at {start} is out of bounds for length {len}")]
    OutOfRange {
        start: usize,
        length: usize,
        len: usize,
    },

    #[error("alpha {0} is out of range [0, 1]")]
    AlphaOutOfRange(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HexColorError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
