use crate::model::{Chapter, PracticeMode};

/// Dialogs owned by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Objective,
    PracticeMode,
}

/// Header and mobile-menu state shared by every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    is_scrolled: bool,
    sidebar_open: bool,
    objective_open: bool,
    practice_mode_open: bool,
    chapter_menu_open: bool,
    chapter: Chapter,
    practice_mode: PracticeMode,
}

impl ShellState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scrolled means strictly past `threshold`.
    pub fn set_scroll_offset(&mut self, offset_px: f64, threshold_px: f64) {
        self.is_scrolled = offset_px > threshold_px;
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Following any link in the mobile menu closes it.
    pub fn navigate(&mut self) {
        self.sidebar_open = false;
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        *self.modal_flag(kind) = true;
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        *self.modal_flag(kind) = false;
    }

    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Objective => self.objective_open,
            ModalKind::PracticeMode => self.practice_mode_open,
        }
    }

    fn modal_flag(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Objective => &mut self.objective_open,
            ModalKind::PracticeMode => &mut self.practice_mode_open,
        }
    }

    pub fn toggle_chapter_menu(&mut self) {
        self.chapter_menu_open = !self.chapter_menu_open;
    }

    #[must_use]
    pub fn chapter_menu_open(&self) -> bool {
        self.chapter_menu_open
    }

    pub fn choose_chapter(&mut self, chapter: Chapter) {
        self.chapter = chapter;
        self.chapter_menu_open = false;
    }

    #[must_use]
    pub fn chapter(&self) -> Chapter {
        self.chapter
    }

    pub fn choose_practice_mode(&mut self, mode: PracticeMode) {
        self.practice_mode = mode;
        self.practice_mode_open = false;
    }

    #[must_use]
    pub fn practice_mode(&self) -> PracticeMode {
        self.practice_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut shell = ShellState::new();
        shell.set_scroll_offset(10.0, 10.0);
        assert!(!shell.is_scrolled());
        shell.set_scroll_offset(11.0, 10.0);
        assert!(shell.is_scrolled());
        shell.set_scroll_offset(0.0, 10.0);
        assert!(!shell.is_scrolled());
    }

    #[test]
    fn modals_open_independently() {
        let mut shell = ShellState::new();
        shell.open_modal(ModalKind::Objective);
        shell.open_modal(ModalKind::PracticeMode);
        assert!(shell.is_open(ModalKind::Objective));
        assert!(shell.is_open(ModalKind::PracticeMode));
        shell.close_modal(ModalKind::Objective);
        assert!(!shell.is_open(ModalKind::Objective));
        assert!(shell.is_open(ModalKind::PracticeMode));
    }

    #[test]
    fn choosing_a_mode_closes_its_dialog() {
        let mut shell = ShellState::new();
        shell.open_modal(ModalKind::PracticeMode);
        shell.choose_practice_mode(PracticeMode::Exam);
        assert_eq!(shell.practice_mode(), PracticeMode::Exam);
        assert!(!shell.is_open(ModalKind::PracticeMode));
    }

    #[test]
    fn choosing_a_chapter_closes_the_menu() {
        let mut shell = ShellState::new();
        shell.toggle_chapter_menu();
        assert!(shell.chapter_menu_open());
        shell.choose_chapter(Chapter::new(3).unwrap());
        assert_eq!(shell.chapter().label(), "Chapter 3");
        assert!(!shell.chapter_menu_open());
    }

    #[test]
    fn navigation_closes_mobile_menu() {
        let mut shell = ShellState::new();
        shell.toggle_sidebar();
        assert!(shell.sidebar_open());
        shell.navigate();
        assert!(!shell.sidebar_open());
        shell.navigate();
        assert!(!shell.sidebar_open());
    }
}
