use serde::{Deserialize, Serialize};

/// Extraction endpoint used when the backend does not provide one.
pub const DEFAULT_EXTRACTION_URL: &str =
    "https://document-extractor-web-application.onrender.com/process-document";

/// File types offered by the upload picker. The filter is client side only.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = [".pdf", ".xlsx", ".xls", ".jpg", ".jpeg"];

/// Settings the backend hands to the single-page client
/// (`GET /api/settings`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    pub extraction_url: String,
    pub accepted_extensions: Vec<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            extraction_url: DEFAULT_EXTRACTION_URL.to_string(),
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ClientSettings {
    /// Value for the `accept` attribute of the file input.
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions.join(",")
    }

    pub fn is_accepted_file(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.accepted_extensions
            .iter()
            .any(|ext| lower.ends_with(&ext.to_lowercase()))
    }
}
