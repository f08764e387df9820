use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChapterError {
    #[error("chapter {0} is outside 1..={max}", max = Chapter::COUNT)]
    OutOfRange(u8),
}

/// Content tabs of the practice session view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PracticeTab {
    #[default]
    Problem,
    Solution,
    Quotes,
}

impl PracticeTab {
    pub const ALL: [PracticeTab; 3] = [PracticeTab::Problem, PracticeTab::Solution, PracticeTab::Quotes];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            PracticeTab::Problem => "problem",
            PracticeTab::Solution => "solution",
            PracticeTab::Quotes => "quotes",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PracticeTab::Problem => "Problem",
            PracticeTab::Solution => "Solution",
            PracticeTab::Quotes => "Quotes",
        }
    }
}

/// Pacing modes offered by the header's practice-mode dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PracticeMode {
    #[default]
    Timer,
    Pomodoro,
    Level,
    Exam,
    Manual,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 5] = [
        PracticeMode::Timer,
        PracticeMode::Pomodoro,
        PracticeMode::Level,
        PracticeMode::Exam,
        PracticeMode::Manual,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PracticeMode::Timer => "Timer Mode",
            PracticeMode::Pomodoro => "Pomodoro Mode",
            PracticeMode::Level => "Level Mode",
            PracticeMode::Exam => "Exam Mode",
            PracticeMode::Manual => "Manual Mode",
        }
    }
}

/// A chapter number in `1..=Chapter::COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chapter(u8);

impl Chapter {
    pub const COUNT: u8 = 5;

    /// # Errors
    ///
    /// Returns `ChapterError::OutOfRange` for 0 or anything above `COUNT`.
    pub fn new(number: u8) -> Result<Self, ChapterError> {
        if (1..=Self::COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ChapterError::OutOfRange(number))
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("Chapter {}", self.0)
    }

    pub fn all() -> impl Iterator<Item = Chapter> {
        (1..=Self::COUNT).map(Chapter)
    }
}

impl Default for Chapter {
    fn default() -> Self {
        Self(1)
    }
}

/// A single startable session inside a practice category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSessionTemplate {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub duration: String,
}

/// Group of session templates shown in the practice sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sessions: Vec<PracticeSessionTemplate>,
}
