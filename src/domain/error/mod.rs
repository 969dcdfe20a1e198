use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid header")]
    InvalidHeader,
    #[error("invalid amount format: {0}")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, Error>;
