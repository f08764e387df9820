use dioxus::prelude::*;
use dioxus_router::Link;
use mastery_core::model::Chapter;
use mastery_core::state::{ModalKind, ShellState};

use crate::components::icons::{Icon, IconKind};
use crate::components::modals::{ObjectiveModal, PracticeModeModal};
use crate::components::side_nav::SideNav;
use crate::context::AppContext;
use crate::hooks::use_dom_listener;
use crate::platform::scripts;
use crate::routes::Route;

pub const HEADER_ID: &str = "app-header";
const SCROLL_KEY: &str = "header-scroll";

/// Top bar plus the menu it toggles. Reads and writes the `ShellState` provided by the
/// layout.
#[component]
pub fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<Signal<ShellState>>();
    let threshold = ctx.config().scroll_threshold_px;

    use_dom_listener(
        SCROLL_KEY.to_string(),
        || scripts::scroll_listener(SCROLL_KEY, HEADER_ID),
        use_callback(move |offset: f64| {
            let was = shell.peek().is_scrolled();
            shell.write().set_scroll_offset(offset, threshold);
            if was != shell.peek().is_scrolled() {
                tracing::debug!(offset, "header scroll state changed");
            }
        }),
    );

    let state = *shell.read();
    let header_class = if state.is_scrolled() {
        "site-header is-scrolled"
    } else {
        "site-header"
    };

    rsx! {
        header { id: HEADER_ID, class: header_class,
            div { class: "header-inner",
                div { class: "header-left",
                    button {
                        id: "nav-toggle",
                        class: "icon-button",
                        r#type: "button",
                        "aria-label": "Toggle navigation",
                        "aria-expanded": state.sidebar_open(),
                        onclick: move |_| shell.write().toggle_sidebar(),
                        if state.sidebar_open() {
                            Icon { kind: IconKind::Close }
                        } else {
                            Icon { kind: IconKind::Menu }
                        }
                    }
                    Link { class: "brand", to: Route::Home {}, "Mastery" }
                }

                div { class: "header-controls",
                    ChapterPicker {
                        chapter: state.chapter(),
                        open: state.chapter_menu_open(),
                        on_toggle: move |_| shell.write().toggle_chapter_menu(),
                        on_choose: move |chapter| shell.write().choose_chapter(chapter),
                    }
                    button {
                        class: "header-button",
                        r#type: "button",
                        onclick: move |_| shell.write().open_modal(ModalKind::Objective),
                        Icon { kind: IconKind::Target }
                        span { "Set Objective" }
                    }
                    button {
                        class: "header-button",
                        r#type: "button",
                        onclick: move |_| shell.write().open_modal(ModalKind::PracticeMode),
                        Icon { kind: IconKind::Timer }
                        span { "{state.practice_mode().label()}" }
                    }
                    button { class: "header-button", r#type: "button",
                        Icon { kind: IconKind::Award }
                        span { "Rank" }
                    }
                }

                div { class: "header-right",
                    Link { class: "button button--primary", to: Route::Auth {}, "Sign In" }
                }
            }
        }

        SideNav {
            open: state.sidebar_open(),
            on_navigate: move |_| shell.write().navigate(),
        }

        if state.is_open(ModalKind::Objective) {
            ObjectiveModal { on_close: move |_| shell.write().close_modal(ModalKind::Objective) }
        }
        if state.is_open(ModalKind::PracticeMode) {
            PracticeModeModal {
                selected: state.practice_mode(),
                on_select: move |mode| shell.write().choose_practice_mode(mode),
                on_close: move |_| shell.write().close_modal(ModalKind::PracticeMode),
            }
        }
    }
}

#[component]
fn ChapterPicker(
    chapter: Chapter,
    open: bool,
    on_toggle: Callback<()>,
    on_choose: Callback<Chapter>,
) -> Element {
    rsx! {
        div { class: "popover",
            button {
                class: "header-button",
                r#type: "button",
                "aria-expanded": open,
                onclick: move |_| on_toggle.call(()),
                Icon { kind: IconKind::Book }
                span { "{chapter.label()}" }
            }
            if open {
                ul { class: "popover-menu glass glass--strong", role: "menu",
                    for option in Chapter::all() {
                        li { key: "{option.number()}",
                            button {
                                class: if option == chapter { "popover-item is-active" } else { "popover-item" },
                                r#type: "button",
                                role: "menuitem",
                                onclick: move |_| on_choose.call(option),
                                "{option.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
