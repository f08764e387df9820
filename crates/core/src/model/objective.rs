use serde::{Deserialize, Serialize};

use crate::model::Notification;

/// Which target the objective form is expressing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveMode {
    #[default]
    Questions,
    Time,
}

impl ObjectiveMode {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ObjectiveMode::Questions => "questions",
            ObjectiveMode::Time => "time",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ObjectiveMode::Questions => "Questions",
            ObjectiveMode::Time => "Time",
        }
    }
}

/// A practice target. Only the field matching `mode` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveConfig {
    pub mode: ObjectiveMode,
    pub question_count: i64,
    pub minutes_target: Option<f64>,
}

impl ObjectiveConfig {
    pub const DEFAULT_QUESTION_COUNT: i64 = 20;
    pub const DEFAULT_MINUTES: f64 = 30.0;

    /// Human summary of the active target, e.g. `"45 questions"`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.mode {
            ObjectiveMode::Questions => format!("{} questions", self.question_count),
            ObjectiveMode::Time => match self.minutes_target {
                Some(minutes) => format!("{minutes} minutes"),
                None => "no time limit".to_string(),
            },
        }
    }

    /// Toast payload emitted when the objective is confirmed.
    #[must_use]
    pub fn notification(&self) -> Notification {
        Notification::new("Objective set", format!("Goal: {}", self.summary()))
    }
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            mode: ObjectiveMode::Questions,
            question_count: Self::DEFAULT_QUESTION_COUNT,
            minutes_target: Some(Self::DEFAULT_MINUTES),
        }
    }
}
