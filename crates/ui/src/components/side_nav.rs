use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::icons::{Icon, IconKind};
use crate::routes::Route;

#[derive(Clone, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
    pub icon: IconKind,
}

#[must_use]
pub fn nav_entries() -> [NavEntry; 5] {
    [
        NavEntry { label: "Home", route: Route::Home {}, icon: IconKind::Home },
        NavEntry { label: "Practice", route: Route::Practice {}, icon: IconKind::Target },
        NavEntry { label: "Progress", route: Route::Dashboard {}, icon: IconKind::BarChart },
        NavEntry { label: "Settings", route: Route::Settings {}, icon: IconKind::Settings },
        NavEntry { label: "About", route: Route::About {}, icon: IconKind::FileText },
    ]
}

/// Circular menu opened from the header. Following a link closes it.
#[component]
pub fn SideNav(open: bool, on_navigate: Callback<()>) -> Element {
    let class = if open { "side-nav is-open" } else { "side-nav" };
    rsx! {
        nav { id: "side-nav", class: class, "aria-hidden": !open,
            ul { class: "side-nav-ring",
                for (index, entry) in nav_entries().into_iter().enumerate() {
                    li { key: "{entry.label}", class: "side-nav-item", style: "--slot: {index};",
                        Link {
                            class: "side-nav-link",
                            active_class: "is-active",
                            to: entry.route,
                            onclick: move |_| on_navigate.call(()),
                            Icon { kind: entry.icon }
                            span { class: "side-nav-label", "{entry.label}" }
                        }
                    }
                }
            }
        }
    }
}
