//! Seams to the two remote collaborators: the document store and the
//! extraction service.
//!
//! Both are consumed from a single cooperative task (the browser event loop
//! in the client), so the traits use plain `async fn` without `Send` bounds.

use crate::model::document::{DocumentPatch, DocumentRecord, NewDocument};
use crate::model::extraction::ExtractionData;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("subscription failed: {0}")]
    Subscription(String),
}

/// Callback receiving a full snapshot of the document collection.
pub type SnapshotCallback = Box<dyn Fn(Vec<DocumentRecord>)>;

#[allow(async_fn_in_trait)]
pub trait DocumentStoreGateway {
    /// Handle returned by [`subscribe`](Self::subscribe); dropping it
    /// unsubscribes.
    type Subscription;

    async fn list_all(&self) -> Result<Vec<DocumentRecord>, GatewayError>;

    /// Stores a new document and returns the id the store assigned.
    async fn create(&self, document: &NewDocument) -> Result<String, GatewayError>;

    async fn update(&self, id: &str, patch: &DocumentPatch) -> Result<(), GatewayError>;

    async fn delete(&self, id: &str) -> Result<(), GatewayError>;

    /// Delivers collection snapshots to `on_change` until the returned handle
    /// is dropped. Snapshots are not ordered against local writes.
    fn subscribe(&self, on_change: SnapshotCallback) -> Result<Self::Subscription, GatewayError>;
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[allow(async_fn_in_trait)]
pub trait ExtractionGateway {
    async fn extract(&self, file: &UploadFile) -> Result<ExtractionData, GatewayError>;
}
