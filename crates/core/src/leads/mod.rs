// Module declarations
pub mod leads_board;
pub mod leads_model;
pub mod leads_repository;
pub mod leads_service;
pub mod leads_traits;

// Re-export the public interface
pub use leads_board::{LeadBoard, MoveState, PendingMove};
pub use leads_model::{Lead, LeadStatus, LeadUpdate, NewLead};
pub use leads_repository::LeadRepository;
pub use leads_service::LeadsService;
pub use leads_traits::{LeadRepositoryTrait, LeadsServiceTrait};
