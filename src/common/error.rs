//! Application error type and its mapping onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::common::response::ApiError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Movie with ID {0} not found")]
    MovieNotFound(i32),

    #[error("Genre with ID {0} not found")]
    GenreNotFound(i32),

    /// Genre names are the join key between movies and genres, so they must stay unique.
    #[error("Genre '{0}' already exists")]
    GenreConflict(String),

    #[error("Id can't be negative")]
    NegativeId,

    #[error("Invalid pagination parameters")]
    InvalidPagination,

    #[error("Invalid data: {0}")]
    Validation(String),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid query parameters: {}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    #[error("Invalid path parameter: {}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MovieNotFound(_) | Self::GenreNotFound(_) => StatusCode::NOT_FOUND,
            Self::GenreConflict(_) => StatusCode::CONFLICT,
            Self::NegativeId
            | Self::InvalidPagination
            | Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::InvalidQuery(_)
            | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect();
        fields.sort();
        Self::Validation(fields.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Database(e) => {
                error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        ApiError(message, status).into_response()
    }
}

/// Rejects negative path ids before they reach a repository.
pub fn ensure_valid_id(id: i32) -> AppResult<i32> {
    if id < 0 {
        return Err(AppError::NegativeId);
    }
    Ok(id)
}
