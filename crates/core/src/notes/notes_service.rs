use async_trait::async_trait;
use std::sync::Arc;

use super::notes_model::{NewNote, Note, NoteUpdate};
use super::notes_traits::{NoteRepositoryTrait, NotesServiceTrait};
use crate::errors::Result;
use crate::store::SessionContext;

pub struct NotesService {
    repository: Arc<dyn NoteRepositoryTrait>,
}

impl NotesService {
    pub fn new(repository: Arc<dyn NoteRepositoryTrait>) -> Self {
        NotesService { repository }
    }
}

#[async_trait]
impl NotesServiceTrait for NotesService {
    async fn list_notes(&self, session: &SessionContext) -> Result<Vec<Note>> {
        self.repository.list(session).await
    }

    async fn create_note(&self, session: &SessionContext, new_note: NewNote) -> Result<Note> {
        new_note.validate()?;
        self.repository.create(session, new_note).await
    }

    async fn update_note(&self, session: &SessionContext, update: NoteUpdate) -> Result<Note> {
        update.validate()?;
        self.repository.update(session, update).await
    }

    async fn delete_note(&self, session: &SessionContext, note_id: &str) -> Result<()> {
        self.repository.delete(session, note_id).await
    }
}
