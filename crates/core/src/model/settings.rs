use serde::{Deserialize, Serialize};

/// The three independent panels of the settings page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Preferences,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Preferences,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Preferences => "Preferences",
        }
    }

    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            SettingsTab::Profile => 0,
            SettingsTab::Notifications => 1,
            SettingsTab::Preferences => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub full_name: String,
    pub email: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationPrefs {
    pub email: bool,
    pub practice_reminders: bool,
    pub progress_updates: bool,
    pub new_features: bool,
    pub marketing: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionLength {
    #[default]
    Minutes15,
    Minutes30,
    Minutes45,
    Minutes60,
}

impl SessionLength {
    pub const ALL: [SessionLength; 4] = [
        SessionLength::Minutes15,
        SessionLength::Minutes30,
        SessionLength::Minutes45,
        SessionLength::Minutes60,
    ];

    #[must_use]
    pub fn minutes(self) -> u32 {
        match self {
            SessionLength::Minutes15 => 15,
            SessionLength::Minutes30 => 30,
            SessionLength::Minutes45 => 45,
            SessionLength::Minutes60 => 60,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{} minutes", self.minutes())
    }

    /// Select option values come back as the minute count; unknown values fall back to the default.
    #[must_use]
    pub fn from_minutes(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|len| value.trim() == len.minutes().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    #[must_use]
    pub fn from_label(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == value.trim())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPreferences {
    pub dark_mode: bool,
    pub session_length: SessionLength,
    pub default_difficulty: SkillLevel,
    pub sound_effects: bool,
    pub animations: bool,
}

/// Initial values for every settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub profile: ProfileFields,
    pub notifications: NotificationPrefs,
    pub preferences: AppPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_fall_back_to_defaults() {
        assert_eq!(SessionLength::from_minutes("45"), SessionLength::Minutes45);
        assert_eq!(SessionLength::from_minutes("90"), SessionLength::Minutes15);
        assert_eq!(SkillLevel::from_label("Expert"), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_label("Wizard"), SkillLevel::Beginner);
    }
}
