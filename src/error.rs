
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, ReferentError>;
