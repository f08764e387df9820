use dioxus::prelude::*;

use crate::hooks::{use_dom_listener, use_unique_id};
use crate::platform::scripts;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    FadeIn,
    SlideUp,
    SlideDown,
    ScaleUp,
}

impl Animation {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Animation::FadeIn => "anim-fade-in",
            Animation::SlideUp => "anim-slide-up",
            Animation::SlideDown => "anim-slide-down",
            Animation::ScaleUp => "anim-scale-up",
        }
    }
}

#[must_use]
pub fn transition_style(delay_ms: u32, duration_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms; transition-duration: {duration_ms}ms;")
}

/// Reveals its children with `animation` once they scroll into view.
#[component]
pub fn TransitionWrapper(
    #[props(default)] animation: Animation,
    #[props(default = 0)] delay: u32,
    #[props(default = 700)] duration: u32,
    #[props(default = true)] once: bool,
    #[props(default = 0.1)] threshold: f64,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let id = use_unique_id("transition");
    let mut visible = use_signal(|| false);

    let element_id = id.clone();
    use_dom_listener(
        id.clone(),
        move || scripts::visibility_observer(&element_id, &element_id, once, threshold),
        use_callback(move |shown: bool| visible.set(shown)),
    );

    let state = if visible() { "is-visible" } else { "is-hidden" };
    let style = transition_style(delay, duration);

    rsx! {
        div {
            id: "{id}",
            class: "transition {animation.class()} {state} {class}",
            style: "{style}",
            {children}
        }
    }
}
