use crate::time::format_time;

/// Elapsed-time counter for a mounted practice session.
///
/// The view calls `tick` once per second while mounted and `stop` on teardown;
/// ticks after `stop` are ignored so a late callback cannot move the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimer {
    elapsed_seconds: u32,
    running: bool,
}

impl SessionTimer {
    #[must_use]
    pub fn started() -> Self {
        Self {
            elapsed_seconds: 0,
            running: true,
        }
    }

    /// Resumes counting from the current value.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Adds one second. Returns whether the tick was applied.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn label(&self) -> String {
        format_time(self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_ticks_add_exactly_n_seconds() {
        let mut timer = SessionTimer::started();
        for _ in 0..75 {
            assert!(timer.tick());
        }
        assert_eq!(timer.elapsed_seconds(), 75);
        assert_eq!(timer.label(), "01:15");
    }

    #[test]
    fn ticks_after_stop_are_ignored() {
        let mut timer = SessionTimer::started();
        timer.tick();
        timer.tick();
        timer.stop();
        assert!(!timer.tick());
        assert_eq!(timer.elapsed_seconds(), 2);
        assert!(!timer.is_running());
    }

    #[test]
    fn default_timer_is_not_running() {
        let mut timer = SessionTimer::default();
        assert!(!timer.tick());
        assert_eq!(timer.label(), "00:00");
        timer.start();
        assert!(timer.tick());
        assert_eq!(timer.label(), "00:01");
    }
}
