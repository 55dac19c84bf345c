//! Document repository, blob store, and service traits.

use async_trait::async_trait;

use super::documents_model::StudentDocument;
use crate::errors::Result;
use crate::store::SessionContext;

/// Contract for the file-blob collaborator: upload returns a public URL.
#[async_trait]
pub trait BlobStoreTrait: Send + Sync {
    async fn upload_pdf(
        &self,
        session: &SessionContext,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String>;
}

#[async_trait]
pub trait DocumentRepositoryTrait: Send + Sync {
    async fn insert(
        &self,
        session: &SessionContext,
        student_id: &str,
        file_name: &str,
        url: &str,
    ) -> Result<StudentDocument>;

    async fn list_for_student(
        &self,
        session: &SessionContext,
        student_id: &str,
    ) -> Result<Vec<StudentDocument>>;
}

#[async_trait]
pub trait DocumentsServiceTrait: Send + Sync {
    /// Uploads a PDF and stores its URL as a document row.
    async fn upload_document(
        &self,
        session: &SessionContext,
        student_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StudentDocument>;

    async fn list_documents(
        &self,
        session: &SessionContext,
        student_id: &str,
    ) -> Result<Vec<StudentDocument>>;
}
