use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::notes_model::{NewNote, Note, NoteUpdate};
use super::notes_traits::NoteRepositoryTrait;
use crate::errors::{RemoteError, Result};
use crate::store::{eq, SessionContext, StoreClient};

const NOTES_TABLE: &str = "notes";

pub struct NoteRepository {
    client: Arc<StoreClient>,
}

impl NoteRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        NoteRepository { client }
    }
}

#[async_trait]
impl NoteRepositoryTrait for NoteRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Note>> {
        self.client
            .select(
                session,
                NOTES_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("order", "updatedAt.desc".to_string()),
                ],
            )
            .await
    }

    async fn create(&self, session: &SessionContext, new_note: NewNote) -> Result<Note> {
        let mut row = serde_json::to_value(&new_note)?;
        row["id"] = json!(new_note
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["userId"] = json!(session.user_id);
        self.client.insert(session, NOTES_TABLE, &row).await
    }

    async fn update(&self, session: &SessionContext, update: NoteUpdate) -> Result<Note> {
        let mut patch = serde_json::to_value(&update)?;
        if let Some(body) = patch.as_object_mut() {
            body.remove("id");
        }
        let rows: Vec<Note> = self
            .client
            .update(
                session,
                NOTES_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(&update.id))],
                &patch,
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(format!("note '{}'", update.id)).into())
    }

    async fn delete(&self, session: &SessionContext, note_id: &str) -> Result<()> {
        self.client
            .delete(
                session,
                NOTES_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(note_id))],
            )
            .await
    }
}
