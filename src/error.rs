use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load recipes from {path}: {source}")]
    DataLoad {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a load failure with the path of the data source it came from
    pub fn data_load(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::DataLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Get a sanitized error message safe for logging
    pub fn log_safe(&self) -> String {
        match self {
            Error::DataLoad { path, .. } => format!("Recipe data load failed: {}", path.display()),
            Error::Json(_) => "JSON processing failed".to_string(),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Template(_) => "Template rendering failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
            Error::Internal(msg) => format!("Internal error: {msg}"),
        }
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to clients; internal details stay in the log
    pub fn public_message(&self) -> String {
        match self {
            Error::NotFound(msg) | Error::Validation(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

// JSON error body, used by the API routes
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!("Request error: {}", self.log_safe());
        } else {
            tracing::debug!("Request error: {}", self.log_safe());
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::NotFound("recipe 3".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_not_public() {
        let err = Error::Internal("secret path /etc/x".to_string());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_data_load_message_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::data_load("data/recipes.json", Error::Io(io));
        let msg = err.to_string();
        assert!(msg.contains("data/recipes.json"));
        assert!(msg.contains("no such file"));
    }
}
