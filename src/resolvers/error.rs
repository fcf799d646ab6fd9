use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal resolver error: {0}")]
    Internal(String),
}
