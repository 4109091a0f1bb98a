mod question;

pub use question::{Question, QuestionSet, QuestionSetError, QuizOption};

#[cfg(test)]
pub(crate) use question::fixtures;
