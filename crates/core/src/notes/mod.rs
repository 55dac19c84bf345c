// Module declarations
pub mod notes_model;
pub mod notes_repository;
pub mod notes_service;
pub mod notes_traits;

// Re-export the public interface
pub use notes_model::{NewNote, Note, NoteUpdate};
pub use notes_repository::NoteRepository;
pub use notes_service::NotesService;
pub use notes_traits::{NoteRepositoryTrait, NotesServiceTrait};
