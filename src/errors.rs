use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Body returned for any failure the caller cannot fix.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(v) => AppError::BadRequest(v.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(msg),
            AppError::Internal(_) => {
                HttpResponse::InternalServerError().json(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
