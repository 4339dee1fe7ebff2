use thiserror::Error;

use super::validation::ValidationError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
    #[error("Internal error: {0}")]
    Internal(String),
}
