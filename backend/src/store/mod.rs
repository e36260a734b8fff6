//! The `documents` collection.
//!
//! Documents live in a single SQLite table. The extraction data is kept as
//! its JSON wire form in a text column, so the nested customer/field/value
//! structure is stored exactly as the client sends it.

mod document_store;

pub use document_store::DocumentStore;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("could not encode document data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document {0} not found")]
    NotFound(String),

    #[error("store task failed: {0}")]
    Task(String),
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if !matches!(self, StoreError::NotFound(_)) {
            error!("document store failure: {}", self);
        }
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

impl From<actix_web::error::BlockingError> for StoreError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        StoreError::Task(err.to_string())
    }
}
