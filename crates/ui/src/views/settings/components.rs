use dioxus::prelude::*;
use mastery_core::state::SaveState;
use mastery_core::model::SettingsTab;

#[component]
pub(super) fn SettingsNavItem(
    tab: SettingsTab,
    active: SettingsTab,
    on_select: Callback<SettingsTab>,
) -> Element {
    let is_active = active == tab;
    rsx! {
        button {
            class: if is_active {
                "settings-nav-item settings-nav-item--active"
            } else {
                "settings-nav-item"
            },
            r#type: "button",
            role: "tab",
            aria_selected: "{is_active}",
            onclick: move |_| on_select.call(tab),
            span { class: "settings-nav-icon",
                SettingsNavIcon { tab }
            }
            span { class: "settings-nav-label", "{tab.label()}" }
        }
    }
}

#[component]
pub(super) fn SettingsNavIcon(tab: SettingsTab) -> Element {
    let path = match tab {
        SettingsTab::Profile => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM4 21a8 8 0 0 1 16 0",
        SettingsTab::Notifications => "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9M10 21h4",
        SettingsTab::Preferences => "M4 6h10M18 6h2M4 12h4M12 12h8M4 18h12M20 18h0",
    };
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.7",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: path }
        }
    }
}

#[component]
pub(super) fn SettingsCard(
    title: &'static str,
    description: &'static str,
    save_state: SaveState,
    on_save: Callback<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "settings-card glass glass--medium glass--border",
            div { class: "settings-card__header",
                h2 { "{title}" }
                p { "{description}" }
            }
            div { class: "settings-card__body", {children} }
            div { class: "settings-card__footer",
                button {
                    class: "button button--primary",
                    r#type: "button",
                    disabled: save_state.is_busy(),
                    onclick: move |_| on_save.call(()),
                    "{save_state.button_label()}"
                }
            }
        }
    }
}

#[component]
pub(super) fn ToggleRow(
    label: &'static str,
    help: &'static str,
    checked: bool,
    on_toggle: Callback<bool>,
) -> Element {
    rsx! {
        div { class: "settings-row",
            div { class: "settings-row__label",
                label { "{label}" }
                span { class: "settings-row__help", "{help}" }
            }
            div { class: "settings-row__field settings-row__field--toggle",
                button {
                    class: if checked { "settings-toggle settings-toggle--on" } else { "settings-toggle" },
                    r#type: "button",
                    role: "switch",
                    aria_checked: "{checked}",
                    "aria-label": label,
                    onclick: move |_| on_toggle.call(!checked),
                }
            }
        }
    }
}
