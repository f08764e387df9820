use dioxus::prelude::*;
use dioxus_router::Link;
use mastery_core::model::DashboardPeriod;

use crate::components::{BarChart, GlassPanel, Icon, IconKind, LineChart, TransitionWrapper};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorState, LoadingState, ViewError, ViewState, view_state_from_resource};
use crate::vm::{AchievementVm, ActivityVm, DashboardVm, StatCardVm, format_updated_at, map_dashboard};

const PERIODS: [DashboardPeriod; 2] = [DashboardPeriod::Week, DashboardPeriod::Month];

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    vm: DashboardVm,
    updated: String,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    // Only highlights the button; the chart keeps its data.
    let period = use_signal(DashboardPeriod::default);

    let mut resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let snapshot = progress.dashboard().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(DashboardData {
                vm: map_dashboard(&snapshot.report),
                updated: format_updated_at(snapshot.fetched_at),
            })
        }
    });

    rsx! {
        div { class: "page page--dashboard",
            div { class: "page-header",
                div {
                    h1 { "Your Progress" }
                    p { class: "section-copy", "Track your learning journey and achievements" }
                }
                Link { class: "button button--primary", to: Route::Practice {},
                    Icon { kind: IconKind::Dumbbell }
                    span { "Start New Session" }
                }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(error) => rsx! {
                    ErrorState { error, on_retry: move |_| resource.restart() }
                },
                ViewState::Ready(data) => rsx! {
                    DashboardBody { data, period }
                },
            }
        }
    }
}

#[component]
fn DashboardBody(data: DashboardData, period: Signal<DashboardPeriod>) -> Element {
    let DashboardData { vm, updated } = data;
    let selected = period();

    rsx! {
        p { class: "updated-at", "{updated}" }
        div { class: "stat-grid",
            for (index, card) in vm.stats.into_iter().enumerate() {
                StatCard { key: "{card.title}", card, index }
            }
        }
        div { class: "chart-grid",
            GlassPanel { class: "chart-card",
                div { class: "card-header",
                    div {
                        h3 { "Progress Over Time" }
                        p { "Your performance trends" }
                    }
                    div { class: "segmented",
                        for option in PERIODS {
                            button {
                                key: "{option.label()}",
                                class: if option == selected { "segment is-active" } else { "segment" },
                                r#type: "button",
                                onclick: move |_| {
                                    let mut period = period;
                                    period.set(option);
                                },
                                "{option.label()}"
                            }
                        }
                    }
                }
                LineChart { chart: vm.line_chart }
            }
            GlassPanel { class: "chart-card",
                div { class: "card-header",
                    div {
                        h3 { "Skill Mastery" }
                        p { "Breakdown of your skills" }
                    }
                }
                BarChart { chart: vm.bar_chart }
            }
        }
        div { class: "list-grid",
            GlassPanel { class: "list-card",
                h3 { "Recent Activity" }
                p { "Your latest practice sessions" }
                ul { class: "activity-list",
                    for row in vm.activity {
                        ActivityRow { key: "{row.title}", row }
                    }
                }
            }
            GlassPanel { class: "list-card",
                h3 { "Achievements" }
                p { "Your learning milestones" }
                ul { class: "achievement-list",
                    for achievement in vm.achievements {
                        AchievementRow { key: "{achievement.id}", achievement }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(card: StatCardVm, index: usize) -> Element {
    rsx! {
        TransitionWrapper { delay: u32::try_from(index).unwrap_or(0) * 100,
            GlassPanel { class: "stat-card",
                div { class: "stat-icon", Icon { kind: card.icon } }
                p { class: "stat-title", "{card.title}" }
                p { class: "stat-value", "{card.value}" }
                p { class: "stat-detail", "{card.detail}" }
            }
        }
    }
}

#[component]
fn ActivityRow(row: ActivityVm) -> Element {
    rsx! {
        li { class: "activity-row",
            div { class: "activity-icon", Icon { kind: IconKind::Activity } }
            div { class: "activity-body",
                div { class: "activity-head",
                    span { class: "activity-title", "{row.title}" }
                    span { class: "activity-when", "{row.when}" }
                }
                p { "{row.summary}" }
                p { class: "activity-meta", "{row.score} • {row.difficulty}" }
            }
        }
    }
}

#[component]
fn AchievementRow(achievement: AchievementVm) -> Element {
    let class = if achievement.completed {
        "achievement is-complete"
    } else {
        "achievement"
    };
    rsx! {
        li { class: class,
            div { class: "achievement-icon",
                if achievement.completed {
                    Icon { kind: IconKind::Check }
                } else {
                    Icon { kind: IconKind::Award }
                }
            }
            div {
                p { class: "achievement-name", "{achievement.name}" }
                p { class: "achievement-description", "{achievement.description}" }
            }
            span { class: "achievement-status", "{achievement.status}" }
        }
    }
}
