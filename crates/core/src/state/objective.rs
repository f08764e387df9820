use crate::model::{Notification, ObjectiveConfig, ObjectiveMode};

/// Draft state behind the objective dialog.
///
/// Inputs are kept as typed text; parsing is lenient and never rejects a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveForm {
    draft: ObjectiveConfig,
    question_input: String,
    minutes_input: String,
}

impl ObjectiveForm {
    #[must_use]
    pub fn new() -> Self {
        Self::with_question_count(ObjectiveConfig::DEFAULT_QUESTION_COUNT)
    }

    #[must_use]
    pub fn with_question_count(count: i64) -> Self {
        let draft = ObjectiveConfig {
            question_count: count,
            ..ObjectiveConfig::default()
        };
        Self {
            question_input: count.to_string(),
            minutes_input: draft
                .minutes_target
                .map(|m| m.to_string())
                .unwrap_or_default(),
            draft,
        }
    }

    pub fn select_tab(&mut self, mode: ObjectiveMode) {
        self.draft.mode = mode;
    }

    /// Non-numeric input becomes 0.
    pub fn set_question_count(&mut self, input: &str) {
        self.question_input = input.to_string();
        self.draft.question_count = parse_question_count(input);
    }

    /// Anything that is not a positive number clears the time target.
    pub fn set_minutes(&mut self, input: &str) {
        self.minutes_input = input.to_string();
        self.draft.minutes_target = parse_minutes(input);
    }

    /// Drops the draft and goes back to the defaults.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn mode(&self) -> ObjectiveMode {
        self.draft.mode
    }

    #[must_use]
    pub fn config(&self) -> ObjectiveConfig {
        self.draft
    }

    #[must_use]
    pub fn question_input(&self) -> &str {
        &self.question_input
    }

    #[must_use]
    pub fn minutes_input(&self) -> &str {
        &self.minutes_input
    }

    /// Commits the draft. No validation: zero and negative counts pass through.
    #[must_use]
    pub fn confirm(&self) -> (ObjectiveConfig, Notification) {
        (self.draft, self.draft.notification())
    }
}

impl Default for ObjectiveForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the leading integer of `input` (`"45"` → 45, `"12abc"` → 12), 0 when there is none.
/// Digit runs too long for `i64` saturate at the bound.
#[must_use]
pub fn parse_question_count(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(value) => value * sign,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[must_use]
pub fn parse_minutes(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_count_parsing_is_lenient() {
        assert_eq!(parse_question_count("45"), 45);
        assert_eq!(parse_question_count("abc"), 0);
        assert_eq!(parse_question_count(""), 0);
        assert_eq!(parse_question_count("12abc"), 12);
        assert_eq!(parse_question_count("  7"), 7);
        assert_eq!(parse_question_count("-3"), -3);
        assert_eq!(parse_question_count("-"), 0);
        assert_eq!(parse_question_count("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_question_count("-99999999999999999999999"), i64::MIN);
        assert_eq!(parse_question_count("99999999999999999999999x"), i64::MAX);
    }

    #[test]
    fn minutes_must_be_positive() {
        assert_eq!(parse_minutes("25"), Some(25.0));
        assert_eq!(parse_minutes("2.5"), Some(2.5));
        assert_eq!(parse_minutes("0"), None);
        assert_eq!(parse_minutes("-4"), None);
        assert_eq!(parse_minutes("soon"), None);
    }

    #[test]
    fn form_defaults_to_twenty_questions() {
        let form = ObjectiveForm::new();
        assert_eq!(form.mode(), ObjectiveMode::Questions);
        assert_eq!(form.config().question_count, 20);
        assert_eq!(form.question_input(), "20");
    }

    #[test]
    fn confirm_reports_current_count_without_validation() {
        let mut form = ObjectiveForm::new();
        form.set_question_count("not a number");
        let (config, note) = form.confirm();
        assert_eq!(config.question_count, 0);
        assert!(note.description().contains('0'));

        form.set_question_count("45");
        let (config, note) = form.confirm();
        assert_eq!(config.question_count, 45);
        assert!(note.description().contains("45"));
    }

    #[test]
    fn cancel_restores_defaults() {
        let mut form = ObjectiveForm::new();
        form.select_tab(ObjectiveMode::Time);
        form.set_question_count("3");
        form.cancel();
        assert_eq!(form, ObjectiveForm::new());
    }

    #[test]
    fn only_active_tab_drives_the_summary() {
        let mut form = ObjectiveForm::new();
        form.set_question_count("12");
        form.set_minutes("40");
        form.select_tab(ObjectiveMode::Time);
        let (_, note) = form.confirm();
        assert_eq!(note.description(), "Goal: 40 minutes");
        form.select_tab(ObjectiveMode::Questions);
        let (_, note) = form.confirm();
        assert_eq!(note.description(), "Goal: 12 questions");
    }
}
