//! Notes table operations

use rusqlite::params;

use super::super::{Database, StorageError};
use crate::models::Note;

impl Database {
    /// Insert a note and return it with its storage-assigned id.
    ///
    /// The insert is a single statement, so it either fully commits or
    /// leaves the table untouched — readers never see a partial row.
    pub fn create_note(&self, subject: &str, description: &str) -> Result<Note, StorageError> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO notes (subject, description) VALUES (?1, ?2)",
            params![subject, description],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Note {
            id,
            subject: subject.to_string(),
            description: description.to_string(),
        })
    }

    /// Read every stored note in primary-key order.
    pub fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        let conn = self.conn()?;

        let mut stmt =
            conn.prepare("SELECT id, subject, description FROM notes ORDER BY id ASC")?;

        let notes = stmt
            .query_map([], |row| {
                Ok(Note {
                    id: row.get(0)?,
                    subject: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<Note>, _>>()?;

        Ok(notes)
    }
}
