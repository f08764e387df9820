use chrono::{DateTime, Datelike, Duration, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Calendar year of `now()`, used by the footer copyright line.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.now().year()
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Formats elapsed seconds as `MM:SS`.
///
/// Minutes wrap at 100 so the label never grows past five characters.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    let minutes = (seconds / 60) % 100;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}

/// Formats a minute total as hours and minutes, e.g. `1475` → `"24h 35m"`.
#[must_use]
pub fn format_practice_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_both_fields() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(75), "01:15");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn format_time_matches_minute_second_split_for_first_hour() {
        for s in 0..3600_u32 {
            let label = format_time(s);
            assert_eq!(label.len(), 5, "{s} -> {label}");
            let (mm, ss) = label.split_once(':').unwrap();
            assert_eq!(mm.parse::<u32>().unwrap(), (s / 60) % 100);
            assert_eq!(ss.parse::<u32>().unwrap(), s % 60);
        }
    }

    #[test]
    fn format_time_wraps_minutes_at_one_hundred() {
        assert_eq!(format_time(100 * 60 + 5), "00:05");
    }

    #[test]
    fn practice_minutes_split_into_hours() {
        assert_eq!(format_practice_minutes(1475), "24h 35m");
        assert_eq!(format_practice_minutes(59), "0h 59m");
        assert_eq!(format_practice_minutes(120), "2h 0m");
    }

    #[test]
    fn fixed_clock_advances_and_reports_year() {
        let mut clock = fixed_clock();
        assert_eq!(clock.current_year(), 2023);
        clock.advance(Duration::days(60));
        assert_eq!(clock.current_year(), 2024);
        assert!(clock.is_fixed());
    }
}
