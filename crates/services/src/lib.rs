#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod marketing_service;
pub mod practice_service;
pub mod progress_service;
pub mod settings_service;

pub use mastery_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ContentError};
pub use marketing_service::MarketingService;
pub use practice_service::{PracticeService, PracticeSession};
pub use progress_service::{DashboardSnapshot, ProgressService};
pub use settings_service::SettingsService;
