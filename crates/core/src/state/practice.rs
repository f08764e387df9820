use crate::model::PracticeTab;

/// View state of the practice session page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PracticeState {
    active_tab: PracticeTab,
    sidebar_open: bool,
    objective_modal_open: bool,
}

impl PracticeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: PracticeTab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn active_tab(&self) -> PracticeTab {
        self.active_tab
    }

    /// Exactly one content panel is visible at a time.
    #[must_use]
    pub fn is_visible(&self, tab: PracticeTab) -> bool {
        self.active_tab == tab
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// A pointer-down outside the sidebar and its toggle button.
    /// Returns whether anything changed.
    pub fn outside_pointer(&mut self) -> bool {
        if self.sidebar_open {
            self.sidebar_open = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_objective(&mut self) {
        self.objective_modal_open = true;
    }

    pub fn close_objective(&mut self) {
        self.objective_modal_open = false;
    }

    #[must_use]
    pub fn objective_modal_open(&self) -> bool {
        self.objective_modal_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_problem_tab_with_everything_closed() {
        let state = PracticeState::new();
        assert_eq!(state.active_tab(), PracticeTab::Problem);
        assert!(!state.sidebar_open());
        assert!(!state.objective_modal_open());
    }

    #[test]
    fn selecting_a_tab_is_idempotent_and_exclusive() {
        let mut state = PracticeState::new();
        state.select_tab(PracticeTab::Quotes);
        let once = state;
        state.select_tab(PracticeTab::Quotes);
        assert_eq!(state, once);
        let visible: Vec<PracticeTab> = PracticeTab::ALL
            .into_iter()
            .filter(|tab| state.is_visible(*tab))
            .collect();
        assert_eq!(visible, vec![PracticeTab::Quotes]);
    }

    #[test]
    fn toggling_twice_restores_sidebar() {
        let mut state = PracticeState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_open());
        state.toggle_sidebar();
        assert!(!state.sidebar_open());
    }

    #[test]
    fn outside_pointer_only_closes() {
        let mut state = PracticeState::new();
        assert!(!state.outside_pointer());
        assert!(!state.sidebar_open());

        state.toggle_sidebar();
        assert!(state.outside_pointer());
        assert!(!state.sidebar_open());
    }

    #[test]
    fn objective_modal_opens_and_closes() {
        let mut state = PracticeState::new();
        state.open_objective();
        assert!(state.objective_modal_open());
        state.close_objective();
        assert!(!state.objective_modal_open());
    }
}
