#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::str::FromStr;

use dioxus::document::eval;
use dioxus::prelude::*;
#[cfg(test)]
use dioxus_router::Navigator;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};
use mastery_core::state::ShellState;

use crate::components::{Footer, Header};
use crate::context::AppContext;
use crate::platform::scripts;
use crate::views::{
    AboutView, AuthView, DashboardView, HomeView, NotFound, PracticeView, SettingsView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/auth", AuthView)] Auth {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/settings", SettingsView)] Settings {},
        #[route("/about", AboutView)] About {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Parses a launch path such as `/dashboard`. Unknown paths resolve to `NotFound`.
///
/// # Errors
///
/// Returns the router's parse error as text when `path` is not a route at all.
pub fn parse_route(path: &str) -> Result<Route, String> {
    Route::from_str(path).map_err(|err| err.to_string())
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    use_context_provider(|| Signal::new(ShellState::new()));

    use_effect(move || {
        let Some(path) = ctx.take_initial_route() else {
            return;
        };
        match parse_route(&path) {
            Ok(target) => {
                tracing::info!(%path, "opening initial route");
                navigator.replace(target);
            }
            Err(err) => tracing::warn!(%path, %err, "ignoring invalid initial route"),
        }
    });

    #[cfg(test)]
    if let Some(handles) = try_consume_context::<ShellTestHandles>() {
        handles.register(navigator);
    }

    rsx! {
        div { class: "app-shell",
            Header {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
            ScrollReset { key: "{route}" }
        }
    }
}

/// Remounted on every route change; scrolls the window back to the top.
#[component]
fn ScrollReset() -> Element {
    use_effect(|| {
        let _ = eval(scripts::SCROLL_TO_TOP);
    });
    rsx! {}
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShellTestHandles {
    navigator: Rc<RefCell<Option<Navigator>>>,
}

#[cfg(test)]
impl ShellTestHandles {
    pub(crate) fn register(&self, navigator: Navigator) {
        *self.navigator.borrow_mut() = Some(navigator);
    }

    pub(crate) fn navigator(&self) -> Navigator {
        (*self.navigator.borrow()).expect("shell navigator registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse_to_their_routes() {
        assert_eq!(parse_route("/dashboard"), Ok(Route::Dashboard {}));
        assert_eq!(parse_route("/"), Ok(Route::Home {}));
        assert_eq!(Route::Practice {}.to_string(), "/practice");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            parse_route("/missing/page"),
            Ok(Route::NotFound {
                segments: vec!["missing".to_string(), "page".to_string()],
            })
        );
    }
}
