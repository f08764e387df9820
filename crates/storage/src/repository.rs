use async_trait::async_trait;
use mastery_core::model::{
    AboutContent, Feature, Percent, PracticeCategory, ProblemItem, ProgressReport,
    SettingsSnapshot,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::seed::{MockContent, mock_content};

/// Errors surfaced by content providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid seed data: {0}")]
    Seed(#[from] mastery_core::Error),
}

/// Content behind the practice session view.
#[async_trait]
pub trait PracticeRepository: Send + Sync {
    /// The problem shown when the practice view mounts.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no problem is available.
    async fn current_problem(&self) -> Result<ProblemItem, StorageError>;

    /// Session groups listed in the practice sidebar.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be reached.
    async fn categories(&self) -> Result<Vec<PracticeCategory>, StorageError>;

    /// Completion of the current session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be reached.
    async fn session_progress(&self) -> Result<Percent, StorageError>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be reached.
    async fn progress_report(&self) -> Result<ProgressReport, StorageError>;
}

#[async_trait]
pub trait MarketingRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be reached.
    async fn features(&self) -> Result<Vec<Feature>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be reached.
    async fn about(&self) -> Result<AboutContent, StorageError>;
}

/// Initial values for the settings panels. Saves are never sent back.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be reached.
    async fn settings_snapshot(&self) -> Result<SettingsSnapshot, StorageError>;
}

/// In-memory provider over a `MockContent` snapshot.
#[derive(Clone)]
pub struct InMemoryRepository {
    content: Arc<Mutex<MockContent>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(content: MockContent) -> Self {
        Self {
            content: Arc::new(Mutex::new(content)),
        }
    }

    /// Repository filled with the demo data set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the fixtures fail domain validation.
    pub fn seeded() -> Result<Self, StorageError> {
        Ok(Self::new(mock_content()?))
    }

    /// Swap the problem served to the practice view.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn replace_problem(&self, problem: ProblemItem) -> Result<(), StorageError> {
        self.with_content(|content| content.problem = problem)
    }

    fn with_content<T>(&self, f: impl FnOnce(&mut MockContent) -> T) -> Result<T, StorageError> {
        let mut guard = self
            .content
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl PracticeRepository for InMemoryRepository {
    async fn current_problem(&self) -> Result<ProblemItem, StorageError> {
        self.with_content(|content| content.problem.clone())
    }

    async fn categories(&self) -> Result<Vec<PracticeCategory>, StorageError> {
        self.with_content(|content| content.categories.clone())
    }

    async fn session_progress(&self) -> Result<Percent, StorageError> {
        self.with_content(|content| content.session_progress)
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn progress_report(&self) -> Result<ProgressReport, StorageError> {
        self.with_content(|content| content.progress.clone())
    }
}

#[async_trait]
impl MarketingRepository for InMemoryRepository {
    async fn features(&self) -> Result<Vec<Feature>, StorageError> {
        self.with_content(|content| content.features.clone())
    }

    async fn about(&self) -> Result<AboutContent, StorageError> {
        self.with_content(|content| content.about.clone())
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn settings_snapshot(&self) -> Result<SettingsSnapshot, StorageError> {
        self.with_content(|content| content.settings.clone())
    }
}

/// Aggregates the content repositories behind trait objects so a live provider can be swapped in.
#[derive(Clone)]
pub struct Storage {
    pub practice: Arc<dyn PracticeRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub marketing: Arc<dyn MarketingRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Storage {
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the demo data set is invalid.
    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(Self::from_repository(InMemoryRepository::seeded()?))
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let practice: Arc<dyn PracticeRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let marketing: Arc<dyn MarketingRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self {
            practice,
            progress,
            marketing,
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastery_core::model::ProblemOption;

    #[tokio::test]
    async fn replaced_problem_is_visible_through_every_handle() {
        let repo = InMemoryRepository::seeded().unwrap();
        let storage = Storage::from_repository(repo.clone());

        let problem = ProblemItem::new(
            "2 + 2?",
            vec![ProblemOption::new('a', "4").unwrap()],
            "It is **4**.",
            Vec::new(),
        )
        .unwrap();
        repo.replace_problem(problem.clone()).unwrap();

        let fetched = storage.practice.current_problem().await.unwrap();
        assert_eq!(fetched, problem);
    }
}
