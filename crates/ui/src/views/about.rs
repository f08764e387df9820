use dioxus::prelude::*;
use dioxus_router::Link;
use mastery_core::model::{AboutContent, TeamMember};

use crate::components::{Animation, GlassIntensity, GlassPanel, TransitionWrapper};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorState, LoadingState, ViewError, ViewState, view_state_from_resource};

#[component]
pub fn AboutView() -> Element {
    let ctx = use_context::<AppContext>();
    let marketing = ctx.marketing();

    let mut resource = use_resource(move || {
        let marketing = marketing.clone();
        async move { marketing.about().await.map_err(ViewError::from) }
    });

    rsx! {
        div { class: "page page--about",
            section { class: "hero hero--compact",
                TransitionWrapper { animation: Animation::SlideDown,
                    span { class: "badge", "ABOUT US" }
                }
                TransitionWrapper { animation: Animation::SlideUp, delay: 100,
                    h1 { class: "hero-title", "Our Mission" }
                }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Ready(content) => rsx! { AboutBody { content } },
                ViewState::Error(error) => rsx! {
                    ErrorState { error, on_retry: move |_| resource.restart() }
                },
            }
            section { class: "cta",
                TransitionWrapper { animation: Animation::ScaleUp,
                    GlassPanel { intensity: GlassIntensity::Strong, class: "cta-panel",
                        h2 { "Ready to Begin Your Journey?" }
                        p {
                            "Join thousands of learners who are already on their path to mastery. Start your practice journey today."
                        }
                        div { class: "hero-actions",
                            Link { class: "button button--primary", to: Route::Auth {}, "Get Started" }
                            Link { class: "button button--ghost", to: Route::Practice {}, "Explore Practice Modes" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AboutBody(content: AboutContent) -> Element {
    rsx! {
        TransitionWrapper { animation: Animation::SlideUp, delay: 200,
            p { class: "hero-copy", "{content.mission}" }
        }
        section { class: "story",
            div { class: "story-text",
                TransitionWrapper {
                    h2 { "Our Story" }
                    for paragraph in content.story.iter() {
                        p { "{paragraph}" }
                    }
                }
            }
            TransitionWrapper { animation: Animation::ScaleUp, delay: 200,
                GlassPanel { class: "photo-placeholder", "Team Photo" }
            }
        }
        section { class: "philosophy",
            TransitionWrapper { h2 { "Our Philosophy" } }
            div { class: "philosophy-grid",
                for (index, point) in content.philosophy.iter().enumerate() {
                    TransitionWrapper {
                        key: "{point.title}",
                        animation: Animation::SlideUp,
                        delay: u32::try_from(index).unwrap_or(0) * 100,
                        GlassPanel { hover_effect: true, class: "philosophy-card",
                            h3 { "{point.title}" }
                            p { "{point.body}" }
                        }
                    }
                }
            }
        }
        section { class: "team",
            TransitionWrapper { h2 { "Our Team" } }
            div { class: "team-grid",
                for member in content.team.iter().cloned() {
                    TeamCard { key: "{member.name}", member }
                }
            }
        }
    }
}

#[component]
fn TeamCard(member: TeamMember) -> Element {
    let initials: String = member
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    rsx! {
        TransitionWrapper { animation: Animation::ScaleUp,
            GlassPanel { hover_effect: true, class: "team-card",
                div { class: "team-avatar", "{initials}" }
                h3 { "{member.name}" }
                p { class: "team-role", "{member.role.label()}" }
            }
        }
    }
}
