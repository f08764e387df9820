mod dashboard_vm;
mod markdown_vm;
mod practice_vm;
mod time_fmt;

pub use dashboard_vm::{
    AchievementVm, ActivityVm, AxisLabel, AxisTick, BarChartVm, BarVm, ChartDot, DashboardVm,
    LineChartVm, SeriesVm, StatCardVm, map_dashboard,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use practice_vm::{
    PracticeCategoryVm, PracticeIntent, PracticeVm, ProblemOptionVm, SessionCardVm,
    apply_practice_intent, map_practice_session,
};
pub use time_fmt::format_updated_at;
