// Module declarations
pub mod calls_model;
pub mod calls_repository;
pub mod calls_service;
pub mod calls_traits;

// Re-export the public interface
pub use calls_model::{Call, NewCall};
pub use calls_repository::CallRepository;
pub use calls_service::CallsService;
pub use calls_traits::{CallRepositoryTrait, CallsServiceTrait};
