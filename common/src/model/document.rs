use crate::model::extraction::ExtractionData;
use serde::{Deserialize, Serialize};

/// One uploaded file and its extracted data, as held by the document store.
///
/// The store assigns `id`; `upload_date` is a display string set by the
/// client at upload time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub name: String,
    pub upload_date: String,
    #[serde(default)]
    pub data: ExtractionData,
}

/// A document record before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    pub upload_date: String,
    #[serde(default)]
    pub data: ExtractionData,
}

/// Partial update of a stored document. Absent fields are left as they are.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractionData>,
}

impl NewDocument {
    pub fn with_id(self, id: String) -> DocumentRecord {
        DocumentRecord {
            id,
            name: self.name,
            upload_date: self.upload_date,
            data: self.data,
        }
    }
}

impl DocumentRecord {
    /// Label shown in the document selector and list.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.upload_date)
    }

    pub fn apply_patch(&mut self, patch: DocumentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(data) = patch.data {
            self.data = data;
        }
    }
}
