use super::StoreError;
use common::model::document::{DocumentPatch, DocumentRecord, NewDocument};
use common::model::extraction::ExtractionData;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handle on the SQLite file holding the `documents` collection.
///
/// Cheap to clone. Every operation opens its own connection, so handles can
/// be moved into blocking tasks freely.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    path: Arc<PathBuf>,
}

impl DocumentStore {
    /// Opens the store at `path`, creating the file and table when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: Arc::new(path.as_ref().to_path_buf()),
        };
        store.connection()?.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                upload_date TEXT NOT NULL,
                data TEXT NOT NULL
            );
            ",
        )?;
        Ok(store)
    }

    fn connection(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(self.path.as_ref())?)
    }

    /// All documents in upload order.
    pub fn list_all(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        let conn = self.connection()?;
        let mut stmt =
            conn.prepare("SELECT id, name, upload_date, data FROM documents ORDER BY seq")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut documents = Vec::new();
        for row in rows {
            let (id, name, upload_date, data) = row?;
            documents.push(DocumentRecord {
                id,
                name,
                upload_date,
                data: decode_data(&data)?,
            });
        }
        Ok(documents)
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Result<DocumentRecord, StoreError> {
        let conn = self.connection()?;
        let row = conn
            .query_row(
                "SELECT name, upload_date, data FROM documents WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let (name, upload_date, data) = row.ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(DocumentRecord {
            id: id.to_string(),
            name,
            upload_date,
            data: decode_data(&data)?,
        })
    }

    /// Inserts `document` under a fresh UUID and returns that id.
    pub fn create(&self, document: &NewDocument) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        let data = serde_json::to_string(&document.data)?;
        self.connection()?.execute(
            "INSERT INTO documents (id, name, upload_date, data) VALUES (?1, ?2, ?3, ?4)",
            params![id, document.name, document.upload_date, data],
        )?;
        Ok(id)
    }

    /// Applies the present fields of `patch`. Unknown ids are `NotFound`,
    /// also for an empty patch.
    pub fn update(&self, id: &str, patch: &DocumentPatch) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let exists = tx
            .query_row("SELECT 1 FROM documents WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            return Err(StoreError::NotFound(id.to_string()));
        }

        if let Some(name) = &patch.name {
            tx.execute("UPDATE documents SET name = ?1 WHERE id = ?2", params![name, id])?;
        }
        if let Some(data) = &patch.data {
            let data = serde_json::to_string(data)?;
            tx.execute("UPDATE documents SET data = ?1 WHERE id = ?2", params![data, id])?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let removed = self
            .connection()?
            .execute("DELETE FROM documents WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn decode_data(text: &str) -> Result<ExtractionData, StoreError> {
    Ok(serde_json::from_str(text)?)
}
