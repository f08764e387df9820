use std::sync::Arc;

use mastery_core::model::{Percent, PracticeCategory, ProblemItem};
use storage::repository::PracticeRepository;

use crate::error::ContentError;

/// Everything the practice view needs on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    pub problem: ProblemItem,
    pub categories: Vec<PracticeCategory>,
    pub progress: Percent,
}

#[derive(Clone)]
pub struct PracticeService {
    practice: Arc<dyn PracticeRepository>,
}

impl PracticeService {
    #[must_use]
    pub fn new(practice: Arc<dyn PracticeRepository>) -> Self {
        Self { practice }
    }

    /// Load the current problem together with the sidebar categories and progress.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Storage` if any repository call fails.
    pub async fn load_session(&self) -> Result<PracticeSession, ContentError> {
        let problem = self.practice.current_problem().await?;
        let categories = self.practice.categories().await?;
        let progress = self.practice.session_progress().await?;
        tracing::debug!(
            options = problem.options().len(),
            categories = categories.len(),
            progress = progress.value(),
            "practice session loaded"
        );
        Ok(PracticeSession {
            problem,
            categories,
            progress,
        })
    }
}
