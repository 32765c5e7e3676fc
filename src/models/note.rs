use serde::{Deserialize, Serialize};

/// A note as stored in the `notes` table, including its assigned row id.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: i64,
    pub subject: String,
    pub description: String,
}

/// Request body for creating a note.
///
/// Both fields are required; a body missing either (or carrying the wrong
/// type) is rejected at the JSON boundary before any handler runs. Empty
/// strings are accepted.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub subject: String,
    pub description: String,
}
