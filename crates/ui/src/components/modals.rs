#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use mastery_core::model::{ObjectiveMode, PracticeMode};
use mastery_core::state::ObjectiveForm;

use crate::components::icons::{Icon, IconKind};
use crate::components::toast::ToastQueue;
use crate::context::AppContext;

const OBJECTIVE_TABS: [ObjectiveMode; 2] = [ObjectiveMode::Questions, ObjectiveMode::Time];

#[component]
fn ModalFrame(title: &'static str, on_close: Callback<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal glass glass--strong",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { kind: IconKind::Close }
                    }
                }
                {children}
            }
        }
    }
}

/// Question-count or time target dialog. Only mounted while open, so every opening
/// starts from the configured default.
#[component]
pub fn ObjectiveModal(on_close: Callback<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut toasts = use_context::<ToastQueue>();
    let default_count = ctx.config().default_question_count;
    let mut form = use_signal(move || ObjectiveForm::with_question_count(default_count));

    let active = form.read().mode();
    let question_input = form.read().question_input().to_string();
    let minutes_input = form.read().minutes_input().to_string();

    let confirm = use_callback(move |()| {
        let (config, notification) = form.read().confirm();
        tracing::debug!(mode = config.mode.key(), "objective confirmed");
        toasts.notify(notification);
        on_close.call(());
    });

    #[cfg(test)]
    if let Some(handles) = try_consume_context::<ObjectiveTestHandles>() {
        handles.register(confirm, form);
    }

    rsx! {
        ModalFrame { title: "Set Objective", on_close,
            div { class: "tab-list", role: "tablist",
                for mode in OBJECTIVE_TABS {
                    button {
                        key: "{mode.key()}",
                        class: if mode == active { "tab-trigger is-active" } else { "tab-trigger" },
                        r#type: "button",
                        role: "tab",
                        "aria-selected": mode == active,
                        onclick: move |_| form.write().select_tab(mode),
                        "{mode.label()}"
                    }
                }
            }
            match active {
                ObjectiveMode::Questions => rsx! {
                    label { class: "field",
                        span { class: "field-label", "Number of questions" }
                        input {
                            r#type: "number",
                            value: "{question_input}",
                            oninput: move |evt| form.write().set_question_count(&evt.value()),
                        }
                    }
                },
                ObjectiveMode::Time => rsx! {
                    label { class: "field",
                        span { class: "field-label", "Minutes" }
                        input {
                            r#type: "number",
                            value: "{minutes_input}",
                            oninput: move |evt| form.write().set_minutes(&evt.value()),
                        }
                    }
                },
            }
            div { class: "modal-actions",
                button {
                    class: "button button--ghost",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "button button--primary",
                    r#type: "button",
                    onclick: move |_| confirm.call(()),
                    "Confirm"
                }
            }
        }
    }
}

#[component]
pub fn PracticeModeModal(
    selected: PracticeMode,
    on_select: Callback<PracticeMode>,
    on_close: Callback<()>,
) -> Element {
    rsx! {
        ModalFrame { title: "Timer Mode", on_close,
            ul { class: "mode-list",
                for mode in PracticeMode::ALL {
                    li { key: "{mode.label()}",
                        button {
                            class: if mode == selected { "mode-option is-active" } else { "mode-option" },
                            r#type: "button",
                            onclick: move |_| on_select.call(mode),
                            Icon { kind: IconKind::Timer }
                            span { "{mode.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ObjectiveTestHandles {
    confirm: Rc<RefCell<Option<Callback<()>>>>,
    form: Rc<RefCell<Option<Signal<ObjectiveForm>>>>,
}

#[cfg(test)]
impl ObjectiveTestHandles {
    pub(crate) fn register(&self, confirm: Callback<()>, form: Signal<ObjectiveForm>) {
        *self.confirm.borrow_mut() = Some(confirm);
        *self.form.borrow_mut() = Some(form);
    }

    pub(crate) fn confirm(&self) -> Callback<()> {
        (*self.confirm.borrow()).expect("objective confirm registered")
    }

    pub(crate) fn form(&self) -> Signal<ObjectiveForm> {
        (*self.form.borrow()).expect("objective form registered")
    }
}
