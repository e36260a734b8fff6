//! User-facing operations composed from the gateways.
//!
//! Gateway errors stop here: callers decide whether to alert or log, and the
//! projections and the reconciler only ever see well-formed documents.

use crate::edit::{apply_product_edit, ProductEdit};
use crate::gateway::{DocumentStoreGateway, ExtractionGateway, GatewayError, UploadFile};
use crate::model::document::{DocumentPatch, DocumentRecord, NewDocument};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    /// The extraction service failed; nothing was stored.
    #[error("extraction failed: {0}")]
    Extraction(GatewayError),
    /// Extraction succeeded but the document could not be stored.
    #[error("could not store document: {0}")]
    Store(GatewayError),
}

/// Extracts `file` and stores the result as a new document named after it.
pub async fn upload_document<E, S>(
    extractor: &E,
    store: &S,
    file: &UploadFile,
    upload_date: String,
) -> Result<DocumentRecord, UploadError>
where
    E: ExtractionGateway,
    S: DocumentStoreGateway,
{
    let data = extractor
        .extract(file)
        .await
        .map_err(UploadError::Extraction)?;

    let document = NewDocument {
        name: file.name.clone(),
        upload_date,
        data,
    };
    let id = store.create(&document).await.map_err(UploadError::Store)?;
    Ok(document.with_id(id))
}

/// Applies a broadcast product edit to `document` and persists the new data.
/// Returns the updated record for the local cache.
pub async fn save_product_edit<S: DocumentStoreGateway>(
    store: &S,
    document: &DocumentRecord,
    product_name: &str,
    edit: &ProductEdit,
) -> Result<DocumentRecord, GatewayError> {
    let data = apply_product_edit(&document.data, product_name, edit);
    let patch = DocumentPatch {
        name: None,
        data: Some(data.clone()),
    };
    store.update(&document.id, &patch).await?;

    let mut updated = document.clone();
    updated.data = data;
    Ok(updated)
}

pub async fn delete_document<S: DocumentStoreGateway>(
    store: &S,
    id: &str,
) -> Result<(), GatewayError> {
    store.delete(id).await
}

pub async fn load_documents<S: DocumentStoreGateway>(
    store: &S,
) -> Result<Vec<DocumentRecord>, GatewayError> {
    store.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SnapshotCallback;
    use crate::model::extraction::ExtractionData;
    use crate::views::numeric::coerce;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        documents: RefCell<Vec<DocumentRecord>>,
        fail_writes: bool,
    }

    impl DocumentStoreGateway for MemoryStore {
        type Subscription = ();

        async fn list_all(&self) -> Result<Vec<DocumentRecord>, GatewayError> {
            Ok(self.documents.borrow().clone())
        }

        async fn create(&self, document: &NewDocument) -> Result<String, GatewayError> {
            if self.fail_writes {
                return Err(GatewayError::Network("offline".to_string()));
            }
            let id = format!("doc-{}", self.documents.borrow().len() + 1);
            self.documents
                .borrow_mut()
                .push(document.clone().with_id(id.clone()));
            Ok(id)
        }

        async fn update(&self, id: &str, patch: &DocumentPatch) -> Result<(), GatewayError> {
            let mut documents = self.documents.borrow_mut();
            let record = documents
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| GatewayError::Status {
                    status: 404,
                    message: id.to_string(),
                })?;
            record.apply_patch(patch.clone());
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), GatewayError> {
            self.documents.borrow_mut().retain(|d| d.id != id);
            Ok(())
        }

        fn subscribe(
            &self,
            _on_change: SnapshotCallback,
        ) -> Result<Self::Subscription, GatewayError> {
            Ok(())
        }
    }

    struct FixedExtractor(Result<ExtractionData, GatewayError>);

    impl ExtractionGateway for FixedExtractor {
        async fn extract(&self, _file: &UploadFile) -> Result<ExtractionData, GatewayError> {
            self.0.clone()
        }
    }

    fn widget_data() -> ExtractionData {
        serde_json::from_value(json!({
            "A": { "Product Name": ["Widget"], "Quantity": [2], "Tax": [1], "Total Amount": [20] },
            "B": { "Product Name": ["Widget"], "Quantity": [3], "Tax": [1.5], "Total Amount": [30] },
        }))
        .unwrap()
    }

    fn upload_file() -> UploadFile {
        UploadFile {
            name: "march.pdf".to_string(),
            mime_type: Some("application/pdf".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn upload_stores_extracted_document() {
        let store = MemoryStore::default();
        let extractor = FixedExtractor(Ok(widget_data()));

        let record = upload_document(&extractor, &store, &upload_file(), "today".to_string())
            .await
            .unwrap();

        assert_eq!(record.id, "doc-1");
        assert_eq!(record.name, "march.pdf");
        assert_eq!(load_documents(&store).await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn failed_extraction_creates_nothing() {
        let store = MemoryStore::default();
        let extractor = FixedExtractor(Err(GatewayError::Network("timeout".to_string())));

        let result = upload_document(&extractor, &store, &upload_file(), "today".to_string()).await;

        assert!(matches!(result, Err(UploadError::Extraction(_))));
        assert!(store.documents.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_store_write_is_reported() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let extractor = FixedExtractor(Ok(widget_data()));

        let result = upload_document(&extractor, &store, &upload_file(), "today".to_string()).await;

        assert!(matches!(result, Err(UploadError::Store(_))));
    }

    #[tokio::test]
    async fn saved_edit_is_persisted_for_all_customers() {
        let store = MemoryStore::default();
        let extractor = FixedExtractor(Ok(widget_data()));
        let record = upload_document(&extractor, &store, &upload_file(), "today".to_string())
            .await
            .unwrap();
        let edit = ProductEdit { total_quantity: 5.0, unit_price: 10.0, total_tax: 2.0 };

        let updated = save_product_edit(&store, &record, "Widget", &edit).await.unwrap();

        let documents = store.documents.borrow();
        let stored = &documents[0];
        assert_eq!(stored, &updated);
        for customer in &stored.data.customers {
            assert_eq!(coerce(customer.details.line_items[0].quantity.as_ref()), 5.0);
            assert_eq!(coerce(customer.details.total_amounts.first()), 50.0);
        }
    }

    #[tokio::test]
    async fn stored_payload_keeps_cells_past_the_product_names() {
        let store = MemoryStore::default();
        let extracted = json!({
            "A": {
                "Product Name": ["Widget"],
                "Quantity": [2, 7],
                "Tax": [1, "3 USD"],
                "Total Amount": "20",
            },
        });
        let extractor = FixedExtractor(Ok(serde_json::from_value(extracted.clone()).unwrap()));

        let record = upload_document(&extractor, &store, &upload_file(), "today".to_string())
            .await
            .unwrap();
        let stored = serde_json::to_value(&store.documents.borrow()[0].data).unwrap();
        assert_eq!(stored, extracted);

        let edit = ProductEdit { total_quantity: 4.0, unit_price: 5.0, total_tax: 2.0 };
        save_product_edit(&store, &record, "Widget", &edit).await.unwrap();

        let stored = serde_json::to_value(&store.documents.borrow()[0].data).unwrap();
        assert_eq!(
            stored,
            json!({
                "A": {
                    "Product Name": ["Widget"],
                    "Quantity": [4, 7],
                    "Tax": [2, "3 USD"],
                    "Total Amount": "20",
                },
            })
        );
    }

    #[tokio::test]
    async fn delete_removes_document() {
        let store = MemoryStore::default();
        let extractor = FixedExtractor(Ok(widget_data()));
        let record = upload_document(&extractor, &store, &upload_file(), "today".to_string())
            .await
            .unwrap();

        delete_document(&store, &record.id).await.unwrap();

        assert!(load_documents(&store).await.unwrap().is_empty());
    }
}
