use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::documents_model::StudentDocument;
use super::documents_traits::{BlobStoreTrait, DocumentRepositoryTrait, DocumentsServiceTrait};
use crate::constants::MAX_PDF_BYTES;
use crate::errors::{Result, ValidationError};
use crate::store::SessionContext;

pub struct DocumentsService {
    repository: Arc<dyn DocumentRepositoryTrait>,
    blob_store: Arc<dyn BlobStoreTrait>,
}

impl DocumentsService {
    pub fn new(
        repository: Arc<dyn DocumentRepositoryTrait>,
        blob_store: Arc<dyn BlobStoreTrait>,
    ) -> Self {
        DocumentsService {
            repository,
            blob_store,
        }
    }

    fn validate_pdf(file_name: &str, bytes: &[u8]) -> Result<()> {
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(
                ValidationError::InvalidInput("only PDF uploads are supported".to_string()).into(),
            );
        }
        if bytes.is_empty() {
            return Err(ValidationError::InvalidInput("file is empty".to_string()).into());
        }
        if bytes.len() > MAX_PDF_BYTES {
            return Err(ValidationError::InvalidInput(format!(
                "file exceeds {} bytes",
                MAX_PDF_BYTES
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentsServiceTrait for DocumentsService {
    async fn upload_document(
        &self,
        session: &SessionContext,
        student_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StudentDocument> {
        Self::validate_pdf(file_name, &bytes)?;
        debug!(
            "uploading '{}' ({} bytes) for student '{}'",
            file_name,
            bytes.len(),
            student_id
        );
        let url = self
            .blob_store
            .upload_pdf(session, file_name, bytes)
            .await?;
        self.repository
            .insert(session, student_id, file_name, &url)
            .await
    }

    async fn list_documents(
        &self,
        session: &SessionContext,
        student_id: &str,
    ) -> Result<Vec<StudentDocument>> {
        self.repository.list_for_student(session, student_id).await
    }
}
