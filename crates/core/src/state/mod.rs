//! Plain state machines driven by the UI. No rendering or async here.

mod objective;
mod practice;
mod settings;
mod shell;
mod timer;

pub use objective::{ObjectiveForm, parse_minutes, parse_question_count};
pub use practice::PracticeState;
pub use settings::{SaveState, SettingsState};
pub use shell::{ModalKind, ShellState};
pub use timer::SessionTimer;
