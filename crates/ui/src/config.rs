use std::time::Duration;

use mastery_core::model::ObjectiveConfig;

/// Tunables shared by every view. Provided as context by the root component.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub title: String,
    pub scroll_threshold_px: f64,
    pub save_delay: Duration,
    pub toast_ttl: Duration,
    pub tick_period: Duration,
    pub default_question_count: i64,
    /// Path to open instead of `/` on launch.
    pub initial_route: Option<String>,
}

impl UiConfig {
    pub const DEFAULT_TITLE: &'static str = "Mastery";

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_initial_route(mut self, path: Option<String>) -> Self {
        self.initial_route = path;
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            scroll_threshold_px: 10.0,
            save_delay: Duration::from_millis(1000),
            toast_ttl: Duration::from_millis(4000),
            tick_period: Duration::from_secs(1),
            default_question_count: ObjectiveConfig::DEFAULT_QUESTION_COUNT,
            initial_route: None,
        }
    }
}
