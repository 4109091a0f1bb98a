use std::collections::HashSet;
use std::num::NonZeroUsize;

use serde::Deserialize;
use thiserror::Error;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// One selectable answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
}

impl Question {
    /// Look up one of this question's options by identifier.
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.option(&self.correct_answer)
    }

    /// Zero-based position of the option with the given identifier.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.id == id)
    }

    pub fn is_correct_answer(&self, id: &str) -> bool {
        self.correct_answer == id
    }

    fn validate(&self) -> Result<(), QuestionSetError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionSetError::TooFewOptions {
                question_id: self.id,
                count: self.options.len(),
                min: MIN_OPTIONS,
            });
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(QuestionSetError::DuplicateOption {
                    question_id: self.id,
                    option_id: option.id.clone(),
                });
            }
        }

        if self.correct_option().is_none() {
            return Err(QuestionSetError::UnknownCorrectAnswer {
                question_id: self.id,
                correct_answer: self.correct_answer.clone(),
            });
        }

        Ok(())
    }
}

/// Reasons a question set is refused at construction.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set must contain at least one question")]
    Empty,
    #[error("question {question_id} has {count} options, at least {min} are required")]
    TooFewOptions {
        question_id: u32,
        count: usize,
        min: usize,
    },
    #[error("question {question_id} lists option {option_id:?} more than once")]
    DuplicateOption { question_id: u32, option_id: String },
    #[error("question id {0} is used more than once")]
    DuplicateQuestion(u32),
    #[error(
        "question {question_id} marks {correct_answer:?} as correct but has no such option"
    )]
    UnknownCorrectAnswer {
        question_id: u32,
        correct_answer: String,
    },
}

/// A validated, non-empty, ordered list of questions.
///
/// Every question has at least two options with distinct identifiers, and its
/// correct answer names exactly one of them. Question identifiers are unique.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Vec<Question>,
    len: NonZeroUsize,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        let len = NonZeroUsize::new(questions.len()).ok_or(QuestionSetError::Empty)?;

        let mut ids = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !ids.insert(question.id) {
                return Err(QuestionSetError::DuplicateQuestion(question.id));
            }
            question.validate()?;
        }

        Ok(Self { questions, len })
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    pub fn last_index(&self) -> usize {
        self.len.get() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn option(id: &str, text: &str) -> QuizOption {
        QuizOption {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    pub fn question(id: u32, options: &[(&str, &str)], correct: &str) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: options.iter().map(|(id, text)| option(id, text)).collect(),
            correct_answer: correct.to_string(),
        }
    }

    /// Three questions whose correct answers are "2", "1" and "3".
    pub fn three_questions() -> QuestionSet {
        let opts = [("1", "one"), ("2", "two"), ("3", "three"), ("4", "four")];
        QuestionSet::new(vec![
            question(1, &opts, "2"),
            question(2, &opts, "1"),
            question(3, &opts, "3"),
        ])
        .unwrap()
    }
}
