use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::WritableExt;

use mastery_core::model::{PracticeTab, ProgressReport, SettingsTab};
use mastery_core::state::SaveState;
use storage::repository::{ProgressRepository, Storage, StorageError};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_storage, test_config,
};
use crate::config::UiConfig;
use crate::routes::Route;
use crate::vm::PracticeIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_features() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Transform Your Learning Journey"), "missing hero in {html}");
    assert!(html.contains("Master Your Skills Faster"), "missing features heading in {html}");
    assert_eq!(html.matches("feature-card").count(), 4, "feature grid in {html}");
    assert!(html.contains("Create Free Account"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_smoke_renders_team_roles() {
    let mut harness = setup_view_harness(ViewKind::About);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Our Mission"), "missing mission in {html}");
    assert!(html.contains("Our Philosophy"), "missing philosophy in {html}");
    assert!(html.contains("Team Member 6"), "missing last member in {html}");
    assert!(html.contains("Learning Scientist"), "missing role in {html}");
    assert!(html.contains("Software Engineer"), "missing role in {html}");
    assert!(html.contains("Product Designer"), "missing role in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_stats_and_lists() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.settle().await;
    let html = harness.render();
    for expected in [
        "24h 35m",
        "7 Days",
        "2/10",
        "2 completed, 8 remaining",
        "Practice Session #1",
        "Completed 25 problems in 25 minutes",
        "In progress",
        "Updated Nov 14, 2023 22:13 UTC",
        "Start New Session",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("polyline"), "missing line chart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_switches_tabs_and_counts_ticks() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("What is the next number"), "missing question in {html}");
    assert!(!html.contains("<table"), "solution should be hidden in {html}");
    assert!(html.contains("30%"), "missing progress in {html}");
    assert!(html.contains("00:00"), "missing timer in {html}");

    let dispatch = harness.handles.practice.dispatch();
    dispatch.call(PracticeIntent::SelectTab(PracticeTab::Solution));
    dispatch.call(PracticeIntent::SelectTab(PracticeTab::Solution));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("<table"), "missing solution table in {html}");
    assert!(!html.contains("What is the next number"), "question still visible in {html}");

    for _ in 0..3 {
        dispatch.call(PracticeIntent::Tick);
    }
    harness.drive_async().await;
    assert_eq!(harness.handles.practice.timer().elapsed_seconds(), 3);
    assert!(harness.render().contains("00:03"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_sidebar_closes_on_outside_pointer_only_when_open() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.settle().await;
    let dispatch = harness.handles.practice.dispatch();

    dispatch.call(PracticeIntent::OutsidePointer);
    assert!(!harness.handles.practice.state().sidebar_open());

    dispatch.call(PracticeIntent::ToggleSidebar);
    harness.drive_async().await;
    assert!(harness.render().contains("practice-sidebar is-open"));

    dispatch.call(PracticeIntent::OutsidePointer);
    harness.drive_async().await;
    assert!(!harness.handles.practice.state().sidebar_open());
    assert!(!harness.render().contains("practice-sidebar is-open"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_objective_dialog_opens_and_closes() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.settle().await;
    let dispatch = harness.handles.practice.dispatch();

    dispatch.call(PracticeIntent::OpenObjective);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Number of questions"), "missing dialog in {html}");
    assert!(html.contains("value=\"20\""), "missing default count in {html}");

    let mut form = harness.handles.objective.form();
    harness
        .dom
        .in_runtime(|| form.write().set_question_count("45"));
    dispatch.call(PracticeIntent::CloseObjective);
    harness.drive_async().await;
    assert!(!harness.render().contains("Number of questions"));

    dispatch.call(PracticeIntent::OpenObjective);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("value=\"20\""), "edits survived cancel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_save_is_busy_then_idle() {
    let mut harness = setup_view_harness(ViewKind::Settings);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Profile Information"), "missing profile panel in {html}");
    assert!(html.contains("John Doe"), "missing seeded name in {html}");

    let save = harness.handles.settings.save();
    save.call(SettingsTab::Profile);
    save.call(SettingsTab::Profile);
    harness.dom.render_immediate(&mut dioxus::core::NoOpMutations);
    assert_eq!(
        harness.handles.settings.state().save_state(SettingsTab::Profile),
        SaveState::Saving
    );
    assert_eq!(
        harness.handles.settings.state().save_state(SettingsTab::Preferences),
        SaveState::Idle
    );
    assert!(harness.render().contains("Saving..."));

    for _ in 0..4 {
        harness.drive_async().await;
    }
    assert_eq!(
        harness.handles.settings.state().save_state(SettingsTab::Profile),
        SaveState::Idle
    );
    assert!(harness.render().contains("Save Changes"));
}

#[tokio::test(flavor = "current_thread")]
async fn auth_and_not_found_render_placeholders() {
    let mut harness = setup_view_harness(ViewKind::Auth);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Sign In"), "missing submit in {html}");
    assert!(html.contains("auth-password"), "missing password field in {html}");

    let mut harness = setup_view_harness(ViewKind::NotFound);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("404"), "missing code in {html}");
    assert!(html.contains("/missing"), "missing path in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_renders_header_nav_and_footer() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.settle().await;
    let html = harness.render();
    for expected in [
        "app-header",
        "Chapter 1",
        "Set Objective",
        "Timer Mode",
        "Sign In",
        "Progress",
        "© 2023 Mastery. All rights reserved.",
        "Transform Your Learning Journey",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn shell_opens_the_configured_initial_route() {
    let storage = Storage::in_memory().expect("seeded storage");
    let config = test_config().with_initial_route(Some("/dashboard".to_string()));
    let mut harness = setup_view_harness_with_storage(ViewKind::Shell, &storage, config);
    harness.settle().await;
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Your Progress"), "dashboard not shown in {html}");
}

fn shell_harness_at(path: &str, config: UiConfig) -> ViewHarness {
    let storage = Storage::in_memory().expect("seeded storage");
    let config = config.with_initial_route(Some(path.to_string()));
    setup_view_harness_with_storage(ViewKind::Shell, &storage, config)
}

fn push_route(harness: &mut ViewHarness, route: Route) {
    let navigator = harness.handles.shell.navigator();
    harness.dom.in_scope(dioxus::prelude::ScopeId::ROOT, || {
        let _ = navigator.push(route);
    });
}

#[tokio::test(flavor = "current_thread")]
async fn launch_route_is_applied_once_even_after_a_404() {
    let mut harness = shell_harness_at("/dashboard", test_config());
    harness.settle().await;
    assert!(harness.render().contains("Your Progress"));

    push_route(
        &mut harness,
        Route::NotFound {
            segments: vec!["nope".to_string()],
        },
    );
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("404"), "missing not-found page in {html}");

    push_route(&mut harness, Route::About {});
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Our Mission"), "about page not shown in {html}");
    assert!(!html.contains("Your Progress"), "redirected to launch route in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_timer_ticks_while_mounted_and_stops_after_leaving() {
    let config = UiConfig {
        tick_period: Duration::from_millis(5),
        ..test_config()
    };
    let mut harness = shell_harness_at("/practice", config);
    harness.settle().await;
    for _ in 0..6 {
        harness.drive_async().await;
    }
    let timer = harness.handles.practice.timer();
    assert!(timer.is_running());
    assert!(timer.elapsed_seconds() >= 1, "timer never ticked");
    assert!(harness.render().contains(&timer.label()));

    push_route(&mut harness, Route::About {});
    harness.drive_async().await;
    assert!(!harness.render().contains("practice-root"));
    let left_at = harness.handles.practice.try_timer();
    if let Some(timer) = left_at {
        assert!(!timer.is_running(), "timer still running after teardown");
    }

    for _ in 0..6 {
        harness.drive_async().await;
    }
    let later = harness.handles.practice.try_timer();
    if let (Some(before), Some(after)) = (left_at, later) {
        assert_eq!(before.elapsed_seconds(), after.elapsed_seconds());
    }
}

#[tokio::test(flavor = "current_thread")]
async fn objective_confirm_closes_dialog_with_one_toast() {
    let storage = Storage::in_memory().expect("seeded storage");
    let config = UiConfig {
        toast_ttl: Duration::from_secs(60),
        ..test_config()
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Practice, &storage, config);
    harness.settle().await;
    harness
        .handles
        .practice
        .dispatch()
        .call(PracticeIntent::OpenObjective);
    harness.drive_async().await;
    assert!(harness.render().contains("Number of questions"));

    let mut form = harness.handles.objective.form();
    harness
        .dom
        .in_runtime(|| form.write().set_question_count("45"));
    harness.handles.objective.confirm().call(());
    harness.dom.render_immediate(&mut dioxus::core::NoOpMutations);

    let html = harness.render();
    assert!(!html.contains("Number of questions"), "dialog still open in {html}");
    assert!(!harness.handles.practice.state().objective_modal_open());
    assert_eq!(html.matches("class=\"toast\"").count(), 1, "toasts in {html}");
    assert!(html.contains("Goal: 45 questions"), "missing summary in {html}");
}

struct FailingProgressRepo;

#[async_trait::async_trait]
impl ProgressRepository for FailingProgressRepo {
    async fn progress_report(&self) -> Result<ProgressReport, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_error_state() {
    let mut storage = Storage::in_memory().expect("seeded storage");
    storage.progress = Arc::new(FailingProgressRepo);
    let mut harness = setup_view_harness_with_storage(ViewKind::Dashboard, &storage, test_config());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Content is unavailable"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
