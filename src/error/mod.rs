use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read the ledger")]
    FileError(#[from] std::io::Error),
    #[error("could not parse CSV record")]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    LedgerError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
