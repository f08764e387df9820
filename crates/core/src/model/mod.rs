mod marketing;
mod notification;
mod objective;
mod practice;
mod problem;
mod progress;
mod settings;

pub use marketing::{AboutContent, Feature, FeatureIcon, PhilosophyPoint, TeamMember, TeamRole};
pub use notification::Notification;
pub use objective::{ObjectiveConfig, ObjectiveMode};
pub use practice::{
    Chapter, ChapterError, PracticeCategory, PracticeMode, PracticeSessionTemplate, PracticeTab,
};
pub use problem::{ProblemError, ProblemItem, ProblemOption};
pub use progress::{
    Achievement, ActivityEntry, DashboardPeriod, Difficulty, Percent, ProgressError,
    ProgressPoint, ProgressReport, ProgressStats, SkillMastery,
};
pub use settings::{
    AppPreferences, NotificationPrefs, ProfileFields, SessionLength, SettingsSnapshot,
    SettingsTab, SkillLevel,
};
