use async_trait::async_trait;

use super::notes_model::{NewNote, Note, NoteUpdate};
use crate::errors::Result;
use crate::store::SessionContext;

#[async_trait]
pub trait NoteRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Note>>;

    async fn create(&self, session: &SessionContext, new_note: NewNote) -> Result<Note>;

    async fn update(&self, session: &SessionContext, update: NoteUpdate) -> Result<Note>;

    async fn delete(&self, session: &SessionContext, note_id: &str) -> Result<()>;
}

#[async_trait]
pub trait NotesServiceTrait: Send + Sync {
    async fn list_notes(&self, session: &SessionContext) -> Result<Vec<Note>>;

    async fn create_note(&self, session: &SessionContext, new_note: NewNote) -> Result<Note>;

    async fn update_note(&self, session: &SessionContext, update: NoteUpdate) -> Result<Note>;

    async fn delete_note(&self, session: &SessionContext, note_id: &str) -> Result<()>;
}
