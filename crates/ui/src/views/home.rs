use dioxus::prelude::*;
use dioxus_router::Link;
use mastery_core::model::Feature;

use crate::components::{
    Animation, GlassIntensity, GlassPanel, Icon, IconKind, TransitionWrapper,
};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorState, LoadingState, ViewError, ViewState, view_state_from_resource};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let marketing = ctx.marketing();

    let mut resource = use_resource(move || {
        let marketing = marketing.clone();
        async move { marketing.features().await.map_err(ViewError::from) }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page page--home",
            section { class: "hero",
                TransitionWrapper { animation: Animation::SlideDown,
                    span { class: "badge", "MASTER ANY SKILL WITH DELIBERATE PRACTICE" }
                }
                TransitionWrapper { animation: Animation::SlideUp, delay: 100,
                    h1 { class: "hero-title", "Transform Your Learning Journey" }
                }
                TransitionWrapper { animation: Animation::SlideUp, delay: 200,
                    p { class: "hero-copy",
                        "Mastery is a beautifully designed platform that helps you practice deliberately, track your progress, and achieve expertise in any field through science-backed methods."
                    }
                }
                TransitionWrapper { animation: Animation::SlideUp, delay: 300,
                    div { class: "hero-actions",
                        Link { class: "button button--primary", to: Route::Practice {},
                            "Start Practicing"
                            Icon { kind: IconKind::ArrowRight }
                        }
                        Link { class: "button button--ghost", to: Route::About {}, "Learn More" }
                    }
                }
                TransitionWrapper { animation: Animation::ScaleUp, delay: 400,
                    GlassPanel { class: "hero-mockup",
                        h3 { "Practice Interface" }
                        p { "Beautiful, intuitive practice environment coming soon" }
                    }
                }
            }

            section { class: "features",
                TransitionWrapper {
                    h2 { "Master Your Skills Faster" }
                    p { class: "section-copy",
                        "Our platform combines cutting-edge learning science with intuitive design to help you achieve mastery through deliberate practice."
                    }
                }
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                    ViewState::Ready(features) => rsx! {
                        div { class: "feature-grid",
                            for (index, feature) in features.into_iter().enumerate() {
                                FeatureCard { key: "{feature.title}", feature, index }
                            }
                        }
                    },
                    ViewState::Error(error) => rsx! {
                        ErrorState { error, on_retry: move |_| resource.restart() }
                    },
                }
            }

            section { class: "cta",
                TransitionWrapper { animation: Animation::ScaleUp,
                    GlassPanel { intensity: GlassIntensity::Strong, class: "cta-panel",
                        h2 { "Start Your Mastery Journey Today" }
                        p {
                            "Join thousands of learners who have accelerated their skill development through our specialized practice platform."
                        }
                        Link { class: "button button--primary", to: Route::Auth {}, "Create Free Account" }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> Element {
    let delay = u32::try_from(index).unwrap_or(0) * 100;
    rsx! {
        TransitionWrapper { animation: Animation::SlideUp, delay,
            GlassPanel { hover_effect: true, class: "feature-card",
                div { class: "feature-icon", Icon { kind: IconKind::from(feature.icon) } }
                h3 { "{feature.title}" }
                p { "{feature.body}" }
            }
        }
    }
}
