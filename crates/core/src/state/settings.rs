use crate::model::SettingsTab;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
}

impl SaveState {
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, SaveState::Saving)
    }

    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            SaveState::Idle => "Save Changes",
            SaveState::Saving => "Saving...",
        }
    }
}

/// Active panel plus one save flag per panel. Panels never share a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsState {
    active_tab: SettingsTab,
    saves: [SaveState; 3],
}

impl SettingsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn active_tab(&self) -> SettingsTab {
        self.active_tab
    }

    /// Returns `false` when that panel is already saving.
    pub fn begin_save(&mut self, tab: SettingsTab) -> bool {
        let slot = &mut self.saves[tab.index()];
        if slot.is_busy() {
            return false;
        }
        *slot = SaveState::Saving;
        true
    }

    pub fn finish_save(&mut self, tab: SettingsTab) {
        self.saves[tab.index()] = SaveState::Idle;
    }

    #[must_use]
    pub fn save_state(&self, tab: SettingsTab) -> SaveState {
        self.saves[tab.index()]
    }
}
