use dioxus::prelude::*;

use crate::vm::{BarChartVm, LineChartVm};

#[component]
pub fn LineChart(chart: LineChartVm) -> Element {
    rsx! {
        figure { class: "chart chart--line",
            svg {
                view_box: "0 0 {chart.width} {chart.height}",
                preserve_aspect_ratio: "none",
                role: "img",
                for tick in chart.y_ticks.iter().cloned() {
                    g { key: "y-{tick.label}", class: "chart-grid",
                        line { x1: "{chart.left}", x2: "{chart.width}", y1: "{tick.y}", y2: "{tick.y}" }
                        text { x: "0", y: "{tick.y}", "{tick.label}" }
                    }
                }
                for series in chart.series.iter().cloned() {
                    g { key: "{series.name}", class: "chart-series {series.class}",
                        polyline { points: "{series.points}", fill: "none" }
                        for (index, dot) in series.dots.iter().enumerate() {
                            circle { key: "{index}", cx: "{dot.x}", cy: "{dot.y}", r: "3" }
                        }
                    }
                }
                for label in chart.x_labels.iter().cloned() {
                    text { key: "x-{label.text}", class: "chart-axis", x: "{label.x}", y: "{chart.height}", "{label.text}" }
                }
            }
            figcaption { class: "chart-legend",
                for series in chart.series.iter() {
                    span { key: "{series.name}", class: "legend-item {series.class}", "{series.name}" }
                }
            }
        }
    }
}

#[component]
pub fn BarChart(chart: BarChartVm) -> Element {
    rsx! {
        div { class: "chart chart--bars",
            for bar in chart.bars.iter() {
                div { key: "{bar.label}", class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div { class: "bar-fill", style: "width: {bar.percent}%;" }
                    }
                    span { class: "bar-value", "{bar.percent}%" }
                }
            }
        }
    }
}
