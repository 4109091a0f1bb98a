//! Mutable progress of a single quiz attempt.

use std::collections::BTreeMap;

/// Where the attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Picking an option for the current question; nothing locked in yet.
    Answering,
    /// Answer locked in and recorded, correctness is shown.
    Reviewing,
    /// Advanced past the last question.
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    pub(crate) current_index: usize,
    pub(crate) selected_answer: Option<String>,
    pub(crate) submitted: bool,
    /// Question id to chosen option id, one entry per submitted question.
    pub(crate) answers: BTreeMap<u32, String>,
    pub(crate) finished: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.submitted {
            Phase::Reviewing
        } else {
            Phase::Answering
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answers(&self) -> &BTreeMap<u32, String> {
        &self.answers
    }

    pub fn answer_for(&self, question_id: u32) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    /// Back to question 0 with nothing answered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
