use dioxus::prelude::*;
use mastery_core::model::{AppPreferences, NotificationPrefs, ProfileFields, SessionLength, SkillLevel};
use mastery_core::state::SaveState;

use super::components::{SettingsCard, ToggleRow};

pub(super) fn profile_section(
    mut profile: Signal<ProfileFields>,
    save_state: SaveState,
    on_save: Callback<()>,
) -> Element {
    let fields = profile.read().clone();
    rsx! {
        SettingsCard {
            title: "Profile Information",
            description: "Update your personal details",
            save_state,
            on_save,
            div { class: "settings-row settings-row--stacked",
                label { r#for: "full-name", "Full Name" }
                input {
                    id: "full-name",
                    class: "settings-input",
                    r#type: "text",
                    value: "{fields.full_name}",
                    oninput: move |evt| profile.write().full_name = evt.value(),
                }
            }
            div { class: "settings-row settings-row--stacked",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "settings-input",
                    r#type: "email",
                    value: "{fields.email}",
                    oninput: move |evt| profile.write().email = evt.value(),
                }
            }
            div { class: "settings-row settings-row--stacked",
                label { r#for: "bio", "Bio" }
                textarea {
                    id: "bio",
                    class: "settings-input",
                    rows: "4",
                    value: "{fields.bio}",
                    oninput: move |evt| profile.write().bio = evt.value(),
                }
            }
            {password_fields()}
        }
    }
}

// Inputs are never read; nothing is validated or sent.
fn password_fields() -> Element {
    let fields = [
        ("current-password", "Current Password"),
        ("new-password", "New Password"),
        ("confirm-password", "Confirm Password"),
    ];
    rsx! {
        div { class: "settings-subsection",
            h3 { "Change Password" }
            for (id, caption) in fields {
                div { key: "{id}", class: "settings-row settings-row--stacked",
                    label { r#for: id, "{caption}" }
                    input {
                        id: id,
                        class: "settings-input",
                        r#type: "password",
                        placeholder: "********",
                    }
                }
            }
        }
    }
}

pub(super) fn notifications_section(
    mut prefs: Signal<NotificationPrefs>,
    save_state: SaveState,
    on_save: Callback<()>,
) -> Element {
    let current = *prefs.read();
    rsx! {
        SettingsCard {
            title: "Notification Settings",
            description: "Manage how you receive notifications and updates",
            save_state,
            on_save,
            ToggleRow {
                label: "Email Notifications",
                help: "Receive emails about your account activity",
                checked: current.email,
                on_toggle: move |value| prefs.write().email = value,
            }
            ToggleRow {
                label: "Practice Reminders",
                help: "Daily reminders to maintain your practice streak",
                checked: current.practice_reminders,
                on_toggle: move |value| prefs.write().practice_reminders = value,
            }
            ToggleRow {
                label: "Progress Updates",
                help: "Weekly summary of your learning progress",
                checked: current.progress_updates,
                on_toggle: move |value| prefs.write().progress_updates = value,
            }
            ToggleRow {
                label: "New Features",
                help: "Updates about new features and improvements",
                checked: current.new_features,
                on_toggle: move |value| prefs.write().new_features = value,
            }
            ToggleRow {
                label: "Marketing Communications",
                help: "Promotional emails and special offers",
                checked: current.marketing,
                on_toggle: move |value| prefs.write().marketing = value,
            }
        }
    }
}

pub(super) fn preferences_section(
    mut prefs: Signal<AppPreferences>,
    save_state: SaveState,
    on_save: Callback<()>,
) -> Element {
    let current = *prefs.read();
    let selected_minutes = current.session_length.minutes().to_string();
    rsx! {
        SettingsCard {
            title: "App Preferences",
            description: "Customize your learning experience and app behavior",
            save_state,
            on_save,
            ToggleRow {
                label: "Dark Mode",
                help: "Toggle between light and dark themes",
                checked: current.dark_mode,
                on_toggle: move |value| prefs.write().dark_mode = value,
            }
            div { class: "settings-row",
                div { class: "settings-row__label",
                    label { r#for: "session-length", "Session Duration" }
                    span { class: "settings-row__help", "Default length for practice sessions" }
                }
                div { class: "settings-row__field",
                    select {
                        id: "session-length",
                        class: "settings-input",
                        value: "{selected_minutes}",
                        onchange: move |evt| {
                            prefs.write().session_length = SessionLength::from_minutes(&evt.value());
                        },
                        for length in SessionLength::ALL {
                            option {
                                key: "{length.minutes()}",
                                value: "{length.minutes()}",
                                selected: length == current.session_length,
                                "{length.label()}"
                            }
                        }
                    }
                }
            }
            div { class: "settings-row",
                div { class: "settings-row__label",
                    label { r#for: "default-difficulty", "Default Difficulty" }
                    span { class: "settings-row__help", "Starting difficulty level for new sessions" }
                }
                div { class: "settings-row__field",
                    select {
                        id: "default-difficulty",
                        class: "settings-input",
                        value: "{current.default_difficulty.label()}",
                        onchange: move |evt| {
                            prefs.write().default_difficulty = SkillLevel::from_label(&evt.value());
                        },
                        for level in SkillLevel::ALL {
                            option {
                                key: "{level.label()}",
                                value: "{level.label()}",
                                selected: level == current.default_difficulty,
                                "{level.label()}"
                            }
                        }
                    }
                }
            }
            ToggleRow {
                label: "Sound Effects",
                help: "Play sounds for interface interactions",
                checked: current.sound_effects,
                on_toggle: move |value| prefs.write().sound_effects = value,
            }
            ToggleRow {
                label: "Animation Effects",
                help: "Enable smooth transitions and animations",
                checked: current.animations,
                on_toggle: move |value| prefs.write().animations = value,
            }
        }
    }
}
