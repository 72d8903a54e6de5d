use thiserror::Error;

/// Failure modes of a card operation. The dispatcher translates these into
/// fixed response strings; they never reach a caller directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("card is not active or has expired")]
    InvalidState,
    #[error("insufficient funds")]
    InsufficientFunds,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
