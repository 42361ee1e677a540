use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("bucket count must be positive, got {size}")]
    InvalidSize { size: usize },

    #[error("bucket count must be between {min} and {max}, got {size}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("key is required")]
    EmptyKey,

    #[error("value is required")]
    EmptyValue,

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}
