use std::sync::Arc;

use chrono::{DateTime, Utc};
use mastery_core::model::ProgressReport;
use storage::repository::ProgressRepository;

use crate::Clock;
use crate::error::ContentError;

/// Dashboard data stamped with the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub report: ProgressReport,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    /// # Errors
    ///
    /// Returns `ContentError::Storage` if the report cannot be fetched.
    pub async fn dashboard(&self) -> Result<DashboardSnapshot, ContentError> {
        let report = self.progress.progress_report().await?;
        tracing::debug!(points = report.series.len(), "progress report loaded");
        Ok(DashboardSnapshot {
            report,
            fetched_at: self.clock.now(),
        })
    }
}
