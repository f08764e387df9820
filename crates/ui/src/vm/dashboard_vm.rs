use mastery_core::model::{
    Achievement, ActivityEntry, ProgressPoint, ProgressReport, ProgressStats, SkillMastery,
};
use mastery_core::time::format_practice_minutes;

use crate::components::IconKind;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_LEFT: f64 = 36.0;
const CHART_RIGHT_PAD: f64 = 12.0;
const CHART_TOP: f64 = 12.0;
const CHART_BOTTOM: f64 = 24.0;
const Y_STEP: u32 = 20;
const Y_TICKS: u32 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct StatCardVm {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDot {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesVm {
    pub name: &'static str,
    pub class: &'static str,
    /// SVG `points` attribute value.
    pub points: String,
    pub dots: Vec<ChartDot>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartVm {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub y_ticks: Vec<AxisTick>,
    pub x_labels: Vec<AxisLabel>,
    pub series: Vec<SeriesVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: String,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarChartVm {
    pub bars: Vec<BarVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub title: String,
    pub when: String,
    pub summary: String,
    pub score: String,
    pub difficulty: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub stats: Vec<StatCardVm>,
    pub line_chart: LineChartVm,
    pub bar_chart: BarChartVm,
    pub activity: Vec<ActivityVm>,
    pub achievements: Vec<AchievementVm>,
}

#[must_use]
pub fn map_dashboard(report: &ProgressReport) -> DashboardVm {
    DashboardVm {
        stats: stat_cards(&report.stats),
        line_chart: line_chart(&report.series),
        bar_chart: bar_chart(&report.skills),
        activity: report.activity.iter().map(activity_row).collect(),
        achievements: report.achievements.iter().map(achievement_row).collect(),
    }
}

#[must_use]
pub fn stat_cards(stats: &ProgressStats) -> Vec<StatCardVm> {
    let change = if stats.practice_change_pct >= 0 {
        format!("↑ {}% from last week", stats.practice_change_pct)
    } else {
        format!("↓ {}% from last week", stats.practice_change_pct.unsigned_abs())
    };
    vec![
        StatCardVm {
            title: "Total Practice Time",
            value: format_practice_minutes(stats.total_practice_minutes),
            detail: change,
            icon: IconKind::Clock,
        },
        StatCardVm {
            title: "Streak",
            value: format!("{} Days", stats.streak_days),
            detail: format!("↑ {} days from previous best", stats.streak_gain_days),
            icon: IconKind::Calendar,
        },
        StatCardVm {
            title: "Achievements",
            value: format!(
                "{}/{}",
                stats.achievements_completed, stats.achievements_total
            ),
            detail: format!(
                "{} completed, {} remaining",
                stats.achievements_completed,
                stats.achievements_remaining()
            ),
            icon: IconKind::Trophy,
        },
    ]
}

/// Smallest multiple of the axis step that fits every plotted value, never zero.
fn axis_max(points: &[ProgressPoint]) -> u32 {
    let peak = points
        .iter()
        .flat_map(|point| [point.score, point.minutes])
        .max()
        .unwrap_or(0);
    peak.div_ceil(Y_STEP).max(1) * Y_STEP
}

fn x_positions(count: usize) -> Vec<f64> {
    let span = CHART_WIDTH - CHART_LEFT - CHART_RIGHT_PAD;
    match count {
        0 => Vec::new(),
        1 => vec![CHART_LEFT + span / 2.0],
        n => (0..n)
            .map(|i| CHART_LEFT + span * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

fn scale_y(value: u32, max: u32) -> f64 {
    let plot = CHART_HEIGHT - CHART_TOP - CHART_BOTTOM;
    CHART_TOP + plot * (1.0 - f64::from(value) / f64::from(max))
}

fn series(
    name: &'static str,
    class: &'static str,
    xs: &[f64],
    values: impl Iterator<Item = u32>,
    max: u32,
) -> SeriesVm {
    let dots: Vec<ChartDot> = xs
        .iter()
        .zip(values)
        .map(|(&x, value)| ChartDot {
            x,
            y: scale_y(value, max),
        })
        .collect();
    let points = dots
        .iter()
        .map(|dot| format!("{:.1},{:.1}", dot.x, dot.y))
        .collect::<Vec<_>>()
        .join(" ");
    SeriesVm {
        name,
        class,
        points,
        dots,
    }
}

#[must_use]
pub fn line_chart(points: &[ProgressPoint]) -> LineChartVm {
    let max = axis_max(points);
    let xs = x_positions(points.len());
    let y_ticks = (0..=Y_TICKS)
        .map(|i| {
            let label = max * i / Y_TICKS;
            AxisTick {
                y: scale_y(label, max),
                label,
            }
        })
        .collect();
    let x_labels = xs
        .iter()
        .zip(points)
        .map(|(&x, point)| AxisLabel {
            x,
            text: point.day.clone(),
        })
        .collect();

    LineChartVm {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        left: CHART_LEFT,
        y_ticks,
        x_labels,
        series: vec![
            series(
                "Score",
                "series-score",
                &xs,
                points.iter().map(|p| p.score),
                max,
            ),
            series(
                "Time (mins)",
                "series-time",
                &xs,
                points.iter().map(|p| p.minutes),
                max,
            ),
        ],
    }
}

#[must_use]
pub fn bar_chart(skills: &[SkillMastery]) -> BarChartVm {
    BarChartVm {
        bars: skills
            .iter()
            .map(|skill| BarVm {
                label: skill.name().to_string(),
                percent: skill.mastery().value(),
            })
            .collect(),
    }
}

fn activity_row(entry: &ActivityEntry) -> ActivityVm {
    ActivityVm {
        title: format!("Practice Session #{}", entry.ordinal),
        when: entry.when.clone(),
        summary: format!(
            "Completed {} problems in {} minutes",
            entry.problems, entry.minutes
        ),
        score: format!("Score: {}%", entry.score.value()),
        difficulty: format!("Difficulty: {}", entry.difficulty.label()),
    }
}

fn achievement_row(achievement: &Achievement) -> AchievementVm {
    AchievementVm {
        id: achievement.id,
        name: achievement.name.clone(),
        description: achievement.description.clone(),
        completed: achievement.completed,
        status: if achievement.completed {
            "Completed"
        } else {
            "In progress"
        },
    }
}
