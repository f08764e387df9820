use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::marketing_service::MarketingService;
use crate::practice_service::PracticeService;
use crate::progress_service::ProgressService;
use crate::settings_service::SettingsService;

/// Assembles the app-facing services over one content provider.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    practice: Arc<PracticeService>,
    progress: Arc<ProgressService>,
    marketing: Arc<MarketingService>,
    settings: Arc<SettingsService>,
}

impl AppServices {
    /// Build services backed by the seeded in-memory provider.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the demo content cannot be built.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::in_memory()?;
        Ok(Self::from_storage(clock, &storage))
    }

    #[must_use]
    pub fn from_storage(clock: Clock, storage: &Storage) -> Self {
        Self {
            clock,
            practice: Arc::new(PracticeService::new(Arc::clone(&storage.practice))),
            progress: Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress))),
            marketing: Arc::new(MarketingService::new(Arc::clone(&storage.marketing))),
            settings: Arc::new(SettingsService::new(Arc::clone(&storage.settings))),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn marketing(&self) -> Arc<MarketingService> {
        Arc::clone(&self.marketing)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }
}
