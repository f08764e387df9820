use mastery_core::model::{PracticeCategory, PracticeSessionTemplate, PracticeTab, ProblemItem};
use mastery_core::state::{PracticeState, SessionTimer};
use services::PracticeSession;

use crate::vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemOptionVm {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCardVm {
    pub id: String,
    pub name: String,
    pub difficulty_label: String,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeCategoryVm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sessions: Vec<SessionCardVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub question: String,
    pub options: Vec<ProblemOptionVm>,
    /// Sanitized HTML rendered from the markdown solution.
    pub solution_html: String,
    pub quotes: Vec<String>,
    pub progress_pct: u8,
    pub progress_label: String,
    pub categories: Vec<PracticeCategoryVm>,
}

#[must_use]
pub fn map_practice_session(session: &PracticeSession) -> PracticeVm {
    let progress_pct = session.progress.value();
    PracticeVm {
        question: session.problem.question().to_string(),
        options: map_options(&session.problem),
        solution_html: markdown_to_html(session.problem.solution()),
        quotes: session.problem.quotes().to_vec(),
        progress_pct,
        progress_label: format!("{progress_pct}%"),
        categories: session.categories.iter().map(map_category).collect(),
    }
}

fn map_options(problem: &ProblemItem) -> Vec<ProblemOptionVm> {
    problem
        .options()
        .iter()
        .map(|option| ProblemOptionVm {
            id: option.id().to_string(),
            text: option.text().to_string(),
        })
        .collect()
}

fn map_category(category: &PracticeCategory) -> PracticeCategoryVm {
    PracticeCategoryVm {
        id: category.id.clone(),
        name: category.name.clone(),
        description: category.description.clone(),
        sessions: category.sessions.iter().map(map_session_card).collect(),
    }
}

fn map_session_card(session: &PracticeSessionTemplate) -> SessionCardVm {
    SessionCardVm {
        id: session.id.clone(),
        name: session.name.clone(),
        difficulty_label: format!("Difficulty: {}", session.difficulty),
        duration: session.duration.clone(),
    }
}

/// Everything the practice view can be asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    SelectTab(PracticeTab),
    ToggleSidebar,
    OutsidePointer,
    OpenObjective,
    CloseObjective,
    Tick,
}

pub fn apply_practice_intent(
    state: &mut PracticeState,
    timer: &mut SessionTimer,
    intent: PracticeIntent,
) {
    match intent {
        PracticeIntent::SelectTab(tab) => state.select_tab(tab),
        PracticeIntent::ToggleSidebar => state.toggle_sidebar(),
        PracticeIntent::OutsidePointer => {
            if state.outside_pointer() {
                tracing::debug!("practice sidebar closed by outside pointer");
            }
        }
        PracticeIntent::OpenObjective => state.open_objective(),
        PracticeIntent::CloseObjective => state.close_objective(),
        PracticeIntent::Tick => {
            timer.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use mastery_core::model::{Percent, ProblemOption};

    use super::*;

    fn session() -> PracticeSession {
        let options = vec![
            ProblemOption::new('a', "36").unwrap(),
            ProblemOption::new('b', "42").unwrap(),
        ];
        let problem = ProblemItem::new(
            "Next number?",
            options,
            "**42**",
            vec!["Keep going.".to_string()],
        )
        .unwrap();
        PracticeSession {
            problem,
            categories: vec![PracticeCategory {
                id: "timed".to_string(),
                name: "Timed Sessions".to_string(),
                description: "Practice with time constraints".to_string(),
                sessions: vec![PracticeSessionTemplate {
                    id: "quick".to_string(),
                    name: "Quick Session".to_string(),
                    difficulty: "Various".to_string(),
                    duration: "5 min".to_string(),
                }],
            }],
            progress: Percent::new(30).unwrap(),
        }
    }

    #[test]
    fn maps_problem_and_progress() {
        let vm = map_practice_session(&session());
        assert_eq!(vm.question, "Next number?");
        assert_eq!(vm.options[0].id, "A");
        assert_eq!(vm.options[1].text, "42");
        assert!(vm.solution_html.contains("<strong>42</strong>"));
        assert_eq!(vm.progress_label, "30%");
        assert_eq!(vm.quotes.len(), 1);
    }

    #[test]
    fn intents_drive_state_and_timer() {
        let mut state = PracticeState::new();
        let mut timer = SessionTimer::started();

        apply_practice_intent(&mut state, &mut timer, PracticeIntent::SelectTab(PracticeTab::Quotes));
        apply_practice_intent(&mut state, &mut timer, PracticeIntent::SelectTab(PracticeTab::Quotes));
        assert_eq!(state.active_tab(), PracticeTab::Quotes);

        apply_practice_intent(&mut state, &mut timer, PracticeIntent::OutsidePointer);
        assert!(!state.sidebar_open());
        apply_practice_intent(&mut state, &mut timer, PracticeIntent::ToggleSidebar);
        apply_practice_intent(&mut state, &mut timer, PracticeIntent::OutsidePointer);
        assert!(!state.sidebar_open());

        for _ in 0..3 {
            apply_practice_intent(&mut state, &mut timer, PracticeIntent::Tick);
        }
        assert_eq!(timer.label(), "00:03");

        timer.stop();
        apply_practice_intent(&mut state, &mut timer, PracticeIntent::Tick);
        assert_eq!(timer.elapsed_seconds(), 3);
    }

    #[test]
    fn session_cards_carry_difficulty_labels() {
        let vm = map_practice_session(&session());
        let card = &vm.categories[0].sessions[0];
        assert_eq!(card.difficulty_label, "Difficulty: Various");
        assert_eq!(card.duration, "5 min");
    }
}
