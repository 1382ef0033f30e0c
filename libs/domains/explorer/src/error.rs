use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Failed to read schema document {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema document {path} is not valid JSON: {source}")]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize schema document: {0}")]
    SchemaSerialize(String),

    #[error("Viewer asset not found: {0}")]
    AssetNotFound(String),

    #[error("Failed to load viewer asset {path}: {reason}")]
    Asset { path: String, reason: String },
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Convert ExplorerError to AppError for standardized error responses
impl From<ExplorerError> for AppError {
    fn from(err: ExplorerError) -> Self {
        match err {
            ExplorerError::AssetNotFound(path) => {
                AppError::NotFound(format!("Viewer asset '{}' not found", path))
            }
            ExplorerError::Asset { .. } => AppError::AssetUnavailable(err.to_string()),
            ExplorerError::SchemaRead { .. }
            | ExplorerError::SchemaParse { .. }
            | ExplorerError::SchemaSerialize(_) => AppError::SchemaUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
