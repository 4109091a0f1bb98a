use thiserror::Error;

use crate::models::{Question, QuestionSet, QuestionSetError};

/// English to Thai vocabulary questions compiled into the binary.
const BUILTIN_QUESTIONS: &str = include_str!("questions.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed question data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid question set: {0}")]
    Invalid(#[from] QuestionSetError),
}

/// The question set shipped with the quiz.
pub fn builtin_questions() -> Result<QuestionSet, LoadError> {
    parse_questions(BUILTIN_QUESTIONS)
}

pub fn parse_questions(json: &str) -> Result<QuestionSet, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    let set = QuestionSet::new(questions)?;
    tracing::debug!(count = set.len().get(), "question set loaded");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_questions_are_valid() {
        let set = builtin_questions().unwrap();
        assert_eq!(set.len().get(), 3);

        let correct: Vec<&str> = set
            .iter()
            .filter_map(|q| q.correct_option())
            .map(|o| o.text.as_str())
            .collect();
        assert_eq!(correct, vec!["โรงเรียน", "หนังสือ", "ครู"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse_questions("[{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_empty_set() {
        assert!(matches!(
            parse_questions("[]"),
            Err(LoadError::Invalid(QuestionSetError::Empty))
        ));
    }

    #[test]
    fn test_parse_rejects_dangling_correct_answer() {
        let json = r#"[{
            "id": 1,
            "text": "pick one",
            "options": [{ "id": "a", "text": "A" }, { "id": "b", "text": "B" }],
            "correctAnswer": "c"
        }]"#;
        assert!(matches!(
            parse_questions(json),
            Err(LoadError::Invalid(QuestionSetError::UnknownCorrectAnswer { .. }))
        ));
    }
}
