pub mod note;

pub use note::{CreateNoteRequest, Note};
