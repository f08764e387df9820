use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlassIntensity {
    Light,
    #[default]
    Medium,
    Strong,
}

impl GlassIntensity {
    fn class(self) -> &'static str {
        match self {
            GlassIntensity::Light => "glass--light",
            GlassIntensity::Medium => "glass--medium",
            GlassIntensity::Strong => "glass--strong",
        }
    }
}

#[must_use]
pub fn glass_classes(intensity: GlassIntensity, border: bool, hover_effect: bool) -> String {
    let mut classes = vec!["glass", intensity.class()];
    if border {
        classes.push("glass--border");
    }
    if hover_effect {
        classes.push("glass--hover");
    }
    classes.join(" ")
}

/// Frosted container used for cards and call-outs.
#[component]
pub fn GlassPanel(
    #[props(default)] intensity: GlassIntensity,
    #[props(default = true)] border: bool,
    #[props(default)] hover_effect: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let base = glass_classes(intensity, border, hover_effect);
    rsx! {
        div { class: "{base} {class}", {children} }
    }
}
