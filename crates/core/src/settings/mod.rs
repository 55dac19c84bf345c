pub mod settings_model;
pub mod settings_repository;
pub mod settings_service;
pub mod settings_traits;
pub use settings_model::*;
pub use settings_repository::SettingsRepository;
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
