use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("question text is empty")]
    EmptyQuestion,

    #[error("option id must be a single ASCII letter, got {0:?}")]
    InvalidOptionId(char),

    #[error("duplicate option id {0:?}")]
    DuplicateOptionId(char),
}

/// One answer choice, labelled by a single letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemOption {
    id: char,
    text: String,
}

impl ProblemOption {
    /// # Errors
    ///
    /// Returns `ProblemError::InvalidOptionId` unless `id` is an ASCII letter.
    pub fn new(id: char, text: impl Into<String>) -> Result<Self, ProblemError> {
        if !id.is_ascii_alphabetic() {
            return Err(ProblemError::InvalidOptionId(id));
        }
        Ok(Self {
            id: id.to_ascii_uppercase(),
            text: text.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> char {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The practice item shown by the session view.
///
/// `solution` is markdown; `quotes` are shown verbatim in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemItem {
    question: String,
    options: Vec<ProblemOption>,
    solution: String,
    quotes: Vec<String>,
}

impl ProblemItem {
    /// # Errors
    ///
    /// Returns `ProblemError::EmptyQuestion` for a blank question and
    /// `ProblemError::DuplicateOptionId` when two options share a letter.
    pub fn new(
        question: impl Into<String>,
        options: Vec<ProblemOption>,
        solution: impl Into<String>,
        quotes: Vec<String>,
    ) -> Result<Self, ProblemError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ProblemError::EmptyQuestion);
        }
        for (idx, option) in options.iter().enumerate() {
            if options[..idx].iter().any(|prev| prev.id == option.id) {
                return Err(ProblemError::DuplicateOptionId(option.id));
            }
        }
        Ok(Self {
            question,
            options,
            solution: solution.into(),
            quotes,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[ProblemOption] {
        &self.options
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[must_use]
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_ids_are_normalized_to_uppercase() {
        let option = ProblemOption::new('b', "Two").unwrap();
        assert_eq!(option.id(), 'B');
        assert_eq!(
            ProblemOption::new('1', "One").unwrap_err(),
            ProblemError::InvalidOptionId('1')
        );
    }

    #[test]
    fn problem_rejects_blank_question_and_duplicate_ids() {
        let options = vec![
            ProblemOption::new('A', "x").unwrap(),
            ProblemOption::new('a', "y").unwrap(),
        ];
        assert_eq!(
            ProblemItem::new("Q", options, "", Vec::new()).unwrap_err(),
            ProblemError::DuplicateOptionId('A')
        );
        assert_eq!(
            ProblemItem::new("  ", Vec::new(), "", Vec::new()).unwrap_err(),
            ProblemError::EmptyQuestion
        );
    }

    #[test]
    fn problem_keeps_option_and_quote_order() {
        let options = vec![
            ProblemOption::new('A', "first").unwrap(),
            ProblemOption::new('B', "second").unwrap(),
        ];
        let quotes = vec!["one".to_string(), "two".to_string()];
        let item = ProblemItem::new("Q", options, "**S**", quotes).unwrap();
        let ids: Vec<char> = item.options().iter().map(ProblemOption::id).collect();
        assert_eq!(ids, vec!['A', 'B']);
        assert_eq!(item.quotes(), ["one", "two"]);
        assert_eq!(item.solution(), "**S**");
    }
}
