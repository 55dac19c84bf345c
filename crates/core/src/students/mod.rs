// Module declarations
pub mod students_model;
pub mod students_repository;
pub mod students_service;
pub mod students_traits;

// Re-export the public interface
pub use students_model::{NewPayment, NewStudent, Payment, Student, StudentUpdate};
pub use students_repository::StudentRepository;
pub use students_service::StudentService;
pub use students_traits::{StudentRepositoryTrait, StudentServiceTrait};
