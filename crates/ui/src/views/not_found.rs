use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[must_use]
pub fn attempted_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = attempted_path(&segments);
    let logged = path.clone();
    use_hook(move || tracing::warn!(path = %logged, "no route matches path"));

    rsx! {
        div { class: "page page--not-found",
            h1 { class: "not-found-code", "404" }
            p { "Oops! Page not found" }
            p { class: "not-found-path", "{path}" }
            Link { class: "button button--primary", to: Route::Home {}, "Return to Home" }
        }
    }
}
