//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Handlers are generic over
//! the repository types so the router runs unchanged against any storage.

pub mod categories;
pub mod directors;
pub mod films;

use serde::Serialize;

/// Body returned by successful deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
