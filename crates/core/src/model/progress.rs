use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("percentage must be within 0..=100, got {0}")]
    PercentOutOfRange(u32),

    #[error("label is empty")]
    EmptyLabel,
}

/// A whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Percent(u8);

impl Percent {
    /// # Errors
    ///
    /// Returns `ProgressError::PercentOutOfRange` above 100.
    pub fn new(value: u32) -> Result<Self, ProgressError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(ProgressError::PercentOutOfRange(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Week/month toggle on the dashboard chart card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardPeriod {
    #[default]
    Week,
    Month,
}

impl DashboardPeriod {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DashboardPeriod::Week => "Week",
            DashboardPeriod::Month => "Month",
        }
    }
}

/// One day of the progress series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub day: String,
    pub score: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMastery {
    name: String,
    mastery: Percent,
}

impl SkillMastery {
    /// # Errors
    ///
    /// Returns `ProgressError` for an empty name or a mastery above 100.
    pub fn new(name: impl Into<String>, mastery: u32) -> Result<Self, ProgressError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProgressError::EmptyLabel);
        }
        Ok(Self {
            name,
            mastery: Percent::new(mastery)?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mastery(&self) -> Percent {
        self.mastery
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A row of the recent-activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub ordinal: u32,
    pub when: String,
    pub problems: u32,
    pub minutes: u32,
    pub score: Percent,
    pub difficulty: Difficulty,
}

/// Headline numbers for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_practice_minutes: u32,
    pub practice_change_pct: i32,
    pub streak_days: u32,
    pub streak_gain_days: u32,
    pub achievements_completed: u32,
    pub achievements_total: u32,
}

impl ProgressStats {
    #[must_use]
    pub fn achievements_remaining(&self) -> u32 {
        self.achievements_total
            .saturating_sub(self.achievements_completed)
    }
}

/// Everything the dashboard renders, fetched in one piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub stats: ProgressStats,
    pub series: Vec<ProgressPoint>,
    pub skills: Vec<SkillMastery>,
    pub activity: Vec<ActivityEntry>,
    pub achievements: Vec<Achievement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds() {
        assert_eq!(Percent::new(0).unwrap().value(), 0);
        assert_eq!(Percent::new(100).unwrap().value(), 100);
        assert_eq!(
            Percent::new(101).unwrap_err(),
            ProgressError::PercentOutOfRange(101)
        );
        assert_eq!(
            Percent::new(70_000).unwrap_err(),
            ProgressError::PercentOutOfRange(70_000)
        );
    }

    #[test]
    fn skill_requires_name() {
        assert_eq!(SkillMastery::new(" ", 10).unwrap_err(), ProgressError::EmptyLabel);
        let skill = SkillMastery::new("Speed", 60).unwrap();
        assert_eq!(skill.mastery().value(), 60);
    }

    #[test]
    fn remaining_achievements_never_underflow() {
        let stats = ProgressStats {
            total_practice_minutes: 0,
            practice_change_pct: 0,
            streak_days: 0,
            streak_gain_days: 0,
            achievements_completed: 12,
            achievements_total: 10,
        };
        assert_eq!(stats.achievements_remaining(), 0);
    }
}
