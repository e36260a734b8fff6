use crate::model::document::DocumentRecord;

/// Client-side copy of the document collection plus the current selection.
///
/// Fed by the initial load, by change snapshots and by the results of local
/// writes. Whatever arrives last wins; there is no version check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentCache {
    documents: Vec<DocumentRecord>,
    current: Option<DocumentRecord>,
}

impl DocumentCache {
    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn current(&self) -> Option<&DocumentRecord> {
        self.current.as_ref()
    }

    /// Replaces the cached list. The current document is refreshed from the
    /// snapshot, or cleared when the snapshot no longer contains it.
    pub fn apply_snapshot(&mut self, documents: Vec<DocumentRecord>) {
        self.documents = documents;
        self.current = self
            .current
            .take()
            .and_then(|current| self.find(&current.id).cloned());
    }

    /// Selects a cached document by id. Unknown ids and `None` clear the
    /// selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.current = id.and_then(|id| self.find(id).cloned());
    }

    /// Sets the current document directly, e.g. right after an upload when
    /// no snapshot has delivered it yet.
    pub fn set_current(&mut self, document: DocumentRecord) {
        self.upsert(document.clone());
        self.current = Some(document);
    }

    /// Inserts or replaces a document, keeping the current selection in step.
    pub fn upsert(&mut self, document: DocumentRecord) {
        if let Some(current) = self.current.as_mut() {
            if current.id == document.id {
                *current = document.clone();
            }
        }
        match self.documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.documents.retain(|d| d.id != id);
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
        }
    }

    fn find(&self, id: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extraction::ExtractionData;

    fn record(id: &str, name: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            name: name.to_string(),
            upload_date: "now".to_string(),
            data: ExtractionData::default(),
        }
    }

    #[test]
    fn snapshot_refreshes_current_document() {
        let mut cache = DocumentCache::default();
        cache.apply_snapshot(vec![record("1", "old.pdf")]);
        cache.select(Some("1"));

        cache.apply_snapshot(vec![record("1", "renamed.pdf"), record("2", "b.pdf")]);

        assert_eq!(cache.current().unwrap().name, "renamed.pdf");
        assert_eq!(cache.documents().len(), 2);
    }

    #[test]
    fn snapshot_without_current_clears_selection() {
        let mut cache = DocumentCache::default();
        cache.apply_snapshot(vec![record("1", "a.pdf")]);
        cache.select(Some("1"));

        cache.apply_snapshot(vec![record("2", "b.pdf")]);

        assert!(cache.current().is_none());
    }

    #[test]
    fn selecting_unknown_id_clears_selection() {
        let mut cache = DocumentCache::default();
        cache.apply_snapshot(vec![record("1", "a.pdf")]);
        cache.select(Some("1"));
        cache.select(Some("missing"));
        assert!(cache.current().is_none());
    }

    #[test]
    fn upsert_and_remove_track_current() {
        let mut cache = DocumentCache::default();
        cache.set_current(record("1", "a.pdf"));
        assert_eq!(cache.documents().len(), 1);

        cache.upsert(record("1", "a2.pdf"));
        assert_eq!(cache.current().unwrap().name, "a2.pdf");
        assert_eq!(cache.documents()[0].name, "a2.pdf");

        cache.remove("1");
        assert!(cache.current().is_none());
        assert!(cache.documents().is_empty());
    }
}
