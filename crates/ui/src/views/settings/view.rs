#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use mastery_core::model::{SettingsSnapshot, SettingsTab};
use mastery_core::state::SettingsState;

use super::components::SettingsNavItem;
use super::sections::{notifications_section, preferences_section, profile_section};
use crate::context::AppContext;
use crate::platform;
use crate::views::{ErrorState, LoadingState, ViewError, ViewState, view_state_from_resource};

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();

    let mut resource = use_resource(move || {
        let settings = settings.clone();
        async move { settings.load().await.map_err(ViewError::from) }
    });

    rsx! {
        div { class: "page page--settings",
            div { class: "page-header",
                div {
                    h1 { "Settings" }
                    p { class: "section-copy", "Manage your account preferences and app settings" }
                }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(error) => rsx! {
                    ErrorState { error, on_retry: move |_| resource.restart() }
                },
                ViewState::Ready(snapshot) => rsx! { SettingsPanels { snapshot } },
            }
        }
    }
}

#[component]
fn SettingsPanels(snapshot: SettingsSnapshot) -> Element {
    let ctx = use_context::<AppContext>();
    let save_delay = ctx.config().save_delay;

    let mut state = use_signal(SettingsState::new);
    let SettingsSnapshot {
        profile: initial_profile,
        notifications: initial_notifications,
        preferences: initial_preferences,
    } = snapshot;
    let profile = use_signal(move || initial_profile);
    let notifications = use_signal(move || initial_notifications);
    let preferences = use_signal(move || initial_preferences);

    // Simulated save: busy for `save_delay`, then idle again. Never fails.
    let save = use_callback(move |tab: SettingsTab| {
        if !state.write().begin_save(tab) {
            return;
        }
        tracing::debug!(tab = tab.label(), "settings save started");
        spawn(async move {
            platform::sleep(save_delay).await;
            state.write().finish_save(tab);
            tracing::debug!(tab = tab.label(), "settings save finished");
        });
    });

    let save_profile = use_callback(move |()| save.call(SettingsTab::Profile));
    let save_notifications = use_callback(move |()| save.call(SettingsTab::Notifications));
    let save_preferences = use_callback(move |()| save.call(SettingsTab::Preferences));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SettingsTestHandles>() {
                handles.register(save, state);
            }
        }
    }

    let current = *state.read();
    let active = current.active_tab();

    rsx! {
        div { class: "settings-layout",
            nav { class: "settings-nav", role: "tablist",
                for tab in SettingsTab::ALL {
                    SettingsNavItem {
                        key: "{tab.label()}",
                        tab,
                        active,
                        on_select: move |tab| state.write().select_tab(tab),
                    }
                }
            }
            div { class: "settings-panel",
                match active {
                    SettingsTab::Profile => profile_section(
                        profile,
                        current.save_state(SettingsTab::Profile),
                        save_profile,
                    ),
                    SettingsTab::Notifications => notifications_section(
                        notifications,
                        current.save_state(SettingsTab::Notifications),
                        save_notifications,
                    ),
                    SettingsTab::Preferences => preferences_section(
                        preferences,
                        current.save_state(SettingsTab::Preferences),
                        save_preferences,
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SettingsTestHandles {
    save: Rc<RefCell<Option<Callback<SettingsTab>>>>,
    state: Rc<RefCell<Option<Signal<SettingsState>>>>,
}

#[cfg(test)]
impl SettingsTestHandles {
    pub(crate) fn register(&self, save: Callback<SettingsTab>, state: Signal<SettingsState>) {
        *self.save.borrow_mut() = Some(save);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn save(&self) -> Callback<SettingsTab> {
        (*self.save.borrow()).expect("settings save registered")
    }

    pub(crate) fn state(&self) -> SettingsState {
        let signal = (*self.state.borrow()).expect("settings state registered");
        *signal.peek()
    }
}
