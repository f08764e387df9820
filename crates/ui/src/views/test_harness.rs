use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mastery_core::time::fixed_clock;
use services::AppServices;
use storage::repository::Storage;

use crate::components::{ObjectiveTestHandles, Toaster, use_toast_provider};
use crate::config::UiConfig;
use crate::context::{UiApp, build_app_context};
use crate::routes::{Route, ShellTestHandles};
use crate::views::practice::PracticeTestHandles;
use crate::views::settings::SettingsTestHandles;
use crate::views::{AboutView, AuthView, DashboardView, HomeView, NotFound, PracticeView, SettingsView};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    About,
    Practice,
    Dashboard,
    Settings,
    Auth,
    NotFound,
    /// The real router with header, footer and layout.
    Shell,
}

/// Timings short enough for tests; the tick is long so the practice timer only moves on demand.
pub fn test_config() -> UiConfig {
    UiConfig {
        save_delay: Duration::from_millis(10),
        toast_ttl: Duration::from_millis(10),
        tick_period: Duration::from_secs(3600),
        ..UiConfig::default()
    }
}

#[derive(Clone, Default)]
pub(crate) struct TestHandles {
    pub practice: PracticeTestHandles,
    pub settings: SettingsTestHandles,
    pub objective: ObjectiveTestHandles,
    pub shell: ShellTestHandles,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    config: UiConfig,
    view: ViewKind,
    handles: TestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let config = props.config.clone();
    use_context_provider(|| build_app_context(&app, config));
    use_toast_provider(props.config.toast_ttl);
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.practice.clone());
    use_context_provider(|| props.handles.settings.clone());
    use_context_provider(|| props.handles.objective.clone());
    use_context_provider(|| props.handles.shell.clone());

    rsx! {
        if props.view == ViewKind::Shell {
            Router::<Route> {}
        } else {
            Router::<TestRoute> {}
        }
        Toaster {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home | ViewKind::Shell => rsx! { HomeView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::NotFound => rsx! {
            NotFound { segments: vec!["missing".to_string()] }
        },
    }
}

pub(crate) struct ViewHarness {
    pub dom: VirtualDom,
    pub(crate) handles: TestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuilds and lets spawned loads and effects finish.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory().expect("seeded storage");
    setup_view_harness_with_storage(view, &storage, test_config())
}

pub(crate) fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: &Storage,
    config: UiConfig,
) -> ViewHarness {
    let app = Arc::new(AppServices::from_storage(fixed_clock(), storage));
    let handles = TestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            config,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
