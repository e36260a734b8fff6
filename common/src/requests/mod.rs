use crate::model::document::DocumentRecord;
use serde::{Deserialize, Serialize};

/// Response body of `POST /api/documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub id: String,
}

/// Name of the server-sent event carrying a collection snapshot on
/// `GET /api/documents/subscribe`.
pub const SNAPSHOT_EVENT: &str = "snapshot";

/// Payload of a snapshot event: the whole collection in upload order.
pub type Snapshot = Vec<DocumentRecord>;
