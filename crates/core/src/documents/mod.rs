// Module declarations
pub mod documents_model;
pub mod documents_repository;
pub mod documents_service;
pub mod documents_traits;

// Re-export the public interface
pub use documents_model::StudentDocument;
pub use documents_repository::{DocumentRepository, RemoteBlobStore};
pub use documents_service::DocumentsService;
pub use documents_traits::{BlobStoreTrait, DocumentRepositoryTrait, DocumentsServiceTrait};
