use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::{Animation, GlassIntensity, GlassPanel, TransitionWrapper};
use crate::routes::Route;

/// Sign-in placeholder. The form submits nowhere.
#[component]
pub fn AuthView() -> Element {
    rsx! {
        div { class: "page page--auth",
            TransitionWrapper { animation: Animation::ScaleUp,
                GlassPanel { intensity: GlassIntensity::Strong, class: "auth-card",
                    h1 { "Welcome Back" }
                    p { class: "section-copy", "Sign in to continue your practice" }
                    form {
                        class: "auth-form",
                        onsubmit: move |evt| evt.prevent_default(),
                        label { r#for: "auth-email", "Email" }
                        input {
                            id: "auth-email",
                            class: "settings-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                        }
                        label { r#for: "auth-password", "Password" }
                        input {
                            id: "auth-password",
                            class: "settings-input",
                            r#type: "password",
                            placeholder: "********",
                        }
                        button { class: "button button--primary", r#type: "submit", "Sign In" }
                    }
                    Link { class: "auth-back", to: Route::Home {}, "Back to home" }
                }
            }
        }
    }
}
