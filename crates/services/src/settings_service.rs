use std::sync::Arc;

use mastery_core::model::SettingsSnapshot;
use storage::repository::SettingsRepository;

use crate::error::ContentError;

#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Initial values for the three settings panels.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Storage` on provider failures.
    pub async fn load(&self) -> Result<SettingsSnapshot, ContentError> {
        Ok(self.repo.settings_snapshot().await?)
    }
}
