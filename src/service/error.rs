use thiserror::Error;

use crate::error::HttpError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("You are not allowed to perform this action")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("File storage is unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<crate::storage::StorageError> for ServiceError {
    fn from(error: crate::storage::StorageError) -> Self {
        ServiceError::StorageUnavailable(error.to_string())
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::NotFound(_) => HttpError::not_found(error.to_string()),
            ServiceError::Validation(_) => HttpError::bad_request(error.to_string()),
            ServiceError::Unauthorized => HttpError::unauthorized(error.to_string()),
            ServiceError::StorageUnavailable(_) => {
                HttpError::service_unavailable(error.to_string())
            }
            ServiceError::Database(_) => HttpError::server_error(error.to_string()),
        }
    }
}
