#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use mastery_core::model::PracticeTab;
use mastery_core::state::{PracticeState, SessionTimer};

use crate::components::{GlassPanel, Icon, IconKind, ObjectiveModal};
use crate::context::AppContext;
use crate::hooks::{use_dom_listener, use_interval};
use crate::platform::scripts;
use crate::views::{ErrorState, LoadingState, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    PracticeCategoryVm, PracticeIntent, PracticeVm, apply_practice_intent, map_practice_session,
};

const ROOT_ID: &str = "practice-root";
const SIDEBAR_ID: &str = "practice-sidebar";
const SIDEBAR_TOGGLE_ID: &str = "practice-sidebar-toggle";
const OUTSIDE_KEY: &str = "practice-sidebar";

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();
    let tick_period = ctx.config().tick_period;

    let mut state = use_signal(PracticeState::new);
    let mut timer = use_signal(SessionTimer::started);

    let mut resource = use_resource(move || {
        let practice = practice.clone();
        async move {
            let session = practice.load_session().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_practice_session(&session))
        }
    });

    let dispatch = use_callback(move |intent: PracticeIntent| {
        let mut state = state.write();
        let mut timer = timer.write();
        apply_practice_intent(&mut state, &mut timer, intent);
    });

    use_interval(
        tick_period,
        use_callback(move |()| dispatch.call(PracticeIntent::Tick)),
    );
    use_drop(move || {
        if let Ok(mut timer) = timer.try_write() {
            timer.stop();
        }
    });

    use_dom_listener(
        OUTSIDE_KEY.to_string(),
        || scripts::outside_pointer_listener(OUTSIDE_KEY, ROOT_ID, &[SIDEBAR_ID, SIDEBAR_TOGGLE_ID]),
        use_callback(move |_: bool| dispatch.call(PracticeIntent::OutsidePointer)),
    );

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch, state, timer);
            }
        }
    }

    let snapshot = *state.read();
    let timer_label = timer.read().label();

    rsx! {
        div { id: ROOT_ID, class: "page page--practice",
            div { class: "practice-toolbar",
                button {
                    id: SIDEBAR_TOGGLE_ID,
                    class: "icon-button",
                    r#type: "button",
                    "aria-label": "Toggle sessions",
                    "aria-expanded": snapshot.sidebar_open(),
                    onclick: move |_| dispatch.call(PracticeIntent::ToggleSidebar),
                    Icon { kind: IconKind::Menu }
                }
                div { class: "practice-timer", "aria-label": "Elapsed time",
                    Icon { kind: IconKind::Clock }
                    span { class: "timer-value", "{timer_label}" }
                }
                button {
                    class: "button button--ghost",
                    r#type: "button",
                    onclick: move |_| dispatch.call(PracticeIntent::OpenObjective),
                    Icon { kind: IconKind::Target }
                    span { "Set Objective" }
                }
            }

            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(error) => rsx! {
                    ErrorState { error, on_retry: move |_| resource.restart() }
                },
                ViewState::Ready(vm) => rsx! {
                    PracticeSidebar { open: snapshot.sidebar_open(), vm: vm.clone() }
                    PracticeContent {
                        vm,
                        active: snapshot.active_tab(),
                        on_select: move |tab| dispatch.call(PracticeIntent::SelectTab(tab)),
                    }
                },
            }

            if snapshot.objective_modal_open() {
                ObjectiveModal { on_close: move |_| dispatch.call(PracticeIntent::CloseObjective) }
            }
        }
    }
}

#[component]
fn PracticeSidebar(open: bool, vm: PracticeVm) -> Element {
    rsx! {
        aside { id: SIDEBAR_ID, class: if open { "practice-sidebar is-open" } else { "practice-sidebar" },
            GlassPanel { class: "resume-panel",
                h3 { "Resume Your Last Session" }
                p { "Progress in current session" }
                ProgressBar { percent: vm.progress_pct, label: vm.progress_label.clone() }
                button { class: "button button--primary", r#type: "button", "Continue Practice" }
            }
            span { class: "badge", "CHOOSE YOUR SESSION" }
            h2 { "Practice Dashboard" }
            for category in vm.categories.iter().cloned() {
                CategoryCard { key: "{category.id}", category }
            }
        }
    }
}

#[component]
fn CategoryCard(category: PracticeCategoryVm) -> Element {
    rsx! {
        GlassPanel { class: "category-card",
            h3 { "{category.name}" }
            p { class: "category-description", "{category.description}" }
            ul { class: "session-list",
                for session in category.sessions.iter() {
                    li { key: "{session.id}", class: "session-card",
                        div {
                            h4 { "{session.name}" }
                            p { class: "session-meta", "{session.difficulty_label}" }
                            p { class: "session-meta", "{session.duration}" }
                        }
                        button { class: "button button--small", r#type: "button", "Start Session" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressBar(percent: u8, label: String) -> Element {
    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
            div { class: "progress-fill", style: "width: {percent}%;" }
        }
        span { class: "progress-label", "{label}" }
    }
}

#[component]
fn PracticeContent(vm: PracticeVm, active: PracticeTab, on_select: Callback<PracticeTab>) -> Element {
    rsx! {
        section { class: "practice-main",
            ProgressBar { percent: vm.progress_pct, label: vm.progress_label.clone() }
            div { class: "tab-list", role: "tablist",
                for tab in PracticeTab::ALL {
                    button {
                        key: "{tab.key()}",
                        class: if tab == active { "tab-trigger is-active" } else { "tab-trigger" },
                        r#type: "button",
                        role: "tab",
                        "aria-selected": tab == active,
                        onclick: move |_| on_select.call(tab),
                        "{tab.label()}"
                    }
                }
            }
            GlassPanel { class: "tab-panel",
                match active {
                    PracticeTab::Problem => rsx! {
                        div { class: "problem",
                            h2 { class: "problem-question", "{vm.question}" }
                            ul { class: "problem-options",
                                for option in vm.options.iter() {
                                    li { key: "{option.id}",
                                        button { class: "option", r#type: "button",
                                            span { class: "option-id", "{option.id}" }
                                            span { class: "option-text", "{option.text}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    PracticeTab::Solution => rsx! {
                        div { class: "solution markdown", dangerous_inner_html: "{vm.solution_html}" }
                    },
                    PracticeTab::Quotes => rsx! {
                        div { class: "quotes",
                            for (index, quote) in vm.quotes.iter().enumerate() {
                                blockquote { key: "{index}", "{quote}" }
                            }
                        }
                    },
                }
            }
            div { class: "question-nav",
                button { class: "button button--ghost", r#type: "button",
                    Icon { kind: IconKind::ArrowLeft }
                    span { "Previous" }
                }
                button { class: "button button--ghost", r#type: "button", "Go to question" }
                button { class: "button button--ghost", r#type: "button",
                    span { "Next" }
                    Icon { kind: IconKind::ArrowRight }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    state: Rc<RefCell<Option<Signal<PracticeState>>>>,
    timer: Rc<RefCell<Option<Signal<SessionTimer>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PracticeIntent>,
        state: Signal<PracticeState>,
        timer: Signal<SessionTimer>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
        *self.timer.borrow_mut() = Some(timer);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn state(&self) -> PracticeState {
        let signal = (*self.state.borrow()).expect("practice state registered");
        *signal.peek()
    }

    pub(crate) fn timer(&self) -> SessionTimer {
        let signal = (*self.timer.borrow()).expect("practice timer registered");
        *signal.peek()
    }

    /// `None` once the view that owned the timer has been torn down.
    pub(crate) fn try_timer(&self) -> Option<SessionTimer> {
        let signal = (*self.timer.borrow())?;
        signal.try_peek().ok().map(|timer| *timer)
    }
}
