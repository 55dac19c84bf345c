// Module declarations
pub mod tasks_model;
pub mod tasks_repository;
pub mod tasks_service;
pub mod tasks_traits;

// Re-export the public interface
pub use tasks_model::{NewTask, Task};
pub use tasks_repository::TaskRepository;
pub use tasks_service::TasksService;
pub use tasks_traits::{TaskRepositoryTrait, TasksServiceTrait};
