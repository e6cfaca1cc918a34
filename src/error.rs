use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("forbidden")]
    Forbidden,

    #[error("cafe not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            CatalogError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CatalogError::Database(e) => {
                error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
                    .into_response()
            }
        }
    }
}
