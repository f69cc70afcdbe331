//! Unified error types for the CinHub API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found with id {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String, dependents: u64 },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

// Extractor rejections are reported in the same JSON shape as domain errors.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependents: Option<u64>,
}

impl ErrorResponse {
    fn new(error: &str, details: Option<String>) -> Self {
        Self {
            error: error.to_string(),
            details,
            field: None,
            dependents: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Domain(e @ DomainError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Not found", Some(e.to_string())),
            ),
            AppError::Domain(DomainError::Conflict(msg)) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("Conflict", Some(msg.clone())),
            ),
            AppError::Domain(DomainError::Validation { field, message }) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    field: Some(field),
                    ..ErrorResponse::new("Validation error", Some(message.clone()))
                },
            ),
            AppError::Domain(DomainError::BusinessRule {
                message,
                dependents,
            }) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    dependents: Some(*dependents),
                    ..ErrorResponse::new("Business rule violation", Some(message.clone()))
                },
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error", None),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Bad request", Some(msg.clone())),
            ),
        };

        (status, Json(body)).into_response()
    }
}
