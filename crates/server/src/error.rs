use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mate_core::model::PayloadError;
use storage::StorageError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not enough images. Correct: {correct}, wrong: {wrong}, ending: {ending}")]
    NotEnoughImages {
        correct: usize,
        wrong: usize,
        ending: usize,
    },

    #[error("Could not read images: {0}")]
    Catalog(#[from] StorageError),

    #[error("Generated an invalid quiz: {0}")]
    Payload(#[from] PayloadError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::NotEnoughImages { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Not enough images to create questions",
            ),
            AppError::Catalog(_) | AppError::Payload(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Could not read images")
            }
        };

        if status.is_server_error() {
            error!("{self}");
        }
        (status, body).into_response()
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("Could not bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
