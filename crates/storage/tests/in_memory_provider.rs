use mastery_core::model::{PracticeTab, SessionLength, SkillLevel, TeamRole};
use storage::repository::{
    MarketingRepository, PracticeRepository, ProgressRepository, SettingsRepository, Storage,
};

#[tokio::test]
async fn practice_content_is_served() {
    let storage = Storage::in_memory().expect("seed");

    let problem = storage.practice.current_problem().await.expect("problem");
    let ids: Vec<char> = problem.options().iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec!['A', 'B', 'C', 'D']);
    assert!(!problem.solution().is_empty());
    assert_eq!(problem.quotes().len(), 3);

    let progress = storage.practice.session_progress().await.expect("progress");
    assert_eq!(progress.value(), 30);

    let categories = storage.practice.categories().await.expect("categories");
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Adaptive Practice", "Timed Sessions", "Focused Practice"]
    );
    assert!(categories.iter().all(|c| c.sessions.len() == 3));
    assert_eq!(PracticeTab::ALL.len(), 3);
}

#[tokio::test]
async fn progress_report_matches_dashboard_fixtures() {
    let storage = Storage::in_memory().expect("seed");
    let report = storage.progress.progress_report().await.expect("report");

    let days: Vec<&str> = report.series.iter().map(|p| p.day.as_str()).collect();
    assert_eq!(days, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(report.series[6].score, 90);
    assert_eq!(report.series[6].minutes, 60);

    assert_eq!(report.skills.len(), 5);
    assert_eq!(report.skills[4].name(), "Accuracy");
    assert_eq!(report.skills[4].mastery().value(), 85);

    let completed = report.achievements.iter().filter(|a| a.completed).count();
    assert_eq!(completed, 2);
    assert_eq!(report.stats.achievements_remaining(), 8);
    assert_eq!(report.stats.total_practice_minutes, 1475);
}

#[tokio::test]
async fn marketing_and_settings_fixtures() {
    let storage = Storage::in_memory().expect("seed");

    let features = storage.marketing.features().await.expect("features");
    assert_eq!(features[0].title, "Deliberate Practice");

    let about = storage.marketing.about().await.expect("about");
    assert_eq!(about.story.len(), 3);
    assert_eq!(about.philosophy.len(), 3);
    assert_eq!(about.team[1].role, TeamRole::LearningScientist);

    let settings = storage.settings.settings_snapshot().await.expect("settings");
    assert_eq!(settings.profile.full_name, "John Doe");
    assert!(settings.notifications.email);
    assert!(!settings.notifications.marketing);
    assert_eq!(settings.preferences.session_length, SessionLength::Minutes15);
    assert_eq!(settings.preferences.default_difficulty, SkillLevel::Beginner);
    assert!(!settings.preferences.dark_mode);
}
