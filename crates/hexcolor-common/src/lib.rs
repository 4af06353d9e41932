pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, HexColorError};
pub use types::{Color, FromChannels};

pub type Result<T> = std::result::Result<T, HexColorError>;
