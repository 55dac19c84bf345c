use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::documents_model::StudentDocument;
use super::documents_traits::{BlobStoreTrait, DocumentRepositoryTrait};
use crate::errors::Result;
use crate::store::{eq, SessionContext, StoreClient};

const DOCUMENTS_TABLE: &str = "student_documents";
const DOCUMENTS_BUCKET: &str = "documents";

/// Blob uploads through the backend's storage endpoint. Object paths are
/// namespaced per user and salted with a UUID so re-uploads of the same
/// file name never collide.
pub struct RemoteBlobStore {
    client: Arc<StoreClient>,
}

impl RemoteBlobStore {
    pub fn new(client: Arc<StoreClient>) -> Self {
        RemoteBlobStore { client }
    }
}

#[async_trait]
impl BlobStoreTrait for RemoteBlobStore {
    async fn upload_pdf(
        &self,
        session: &SessionContext,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let path = format!("{}/{}-{}", session.user_id, Uuid::new_v4(), file_name);
        self.client
            .upload_object(session, DOCUMENTS_BUCKET, &path, bytes, "application/pdf")
            .await
    }
}

pub struct DocumentRepository {
    client: Arc<StoreClient>,
}

impl DocumentRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        DocumentRepository { client }
    }
}

#[async_trait]
impl DocumentRepositoryTrait for DocumentRepository {
    async fn insert(
        &self,
        session: &SessionContext,
        student_id: &str,
        file_name: &str,
        url: &str,
    ) -> Result<StudentDocument> {
        let row = json!({
            "id": Uuid::new_v4().to_string(),
            "studentId": student_id,
            "fileName": file_name,
            "url": url,
            "userId": session.user_id,
        });
        self.client.insert(session, DOCUMENTS_TABLE, &row).await
    }

    async fn list_for_student(
        &self,
        session: &SessionContext,
        student_id: &str,
    ) -> Result<Vec<StudentDocument>> {
        self.client
            .select(
                session,
                DOCUMENTS_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("studentId", eq(student_id)),
                    ("order", "uploadedAt.desc".to_string()),
                ],
            )
            .await
    }
}
