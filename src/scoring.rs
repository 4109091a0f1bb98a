//! Score, grade band and per-question review for a finished attempt.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use crate::models::{Question, QuestionSet};

/// Whether `selected` is the question's correct option.
pub fn is_correct(selected: Option<&str>, question: &Question) -> bool {
    selected.is_some_and(|id| question.is_correct_answer(id))
}

/// Number of questions whose recorded answer is the correct one.
pub fn score(answers: &BTreeMap<u32, String>, questions: &QuestionSet) -> usize {
    questions
        .iter()
        .filter(|q| is_correct(answers.get(&q.id).map(String::as_str), q))
        .count()
}

pub fn percentage(score: usize, total: NonZeroUsize) -> f64 {
    100.0 * score as f64 / total.get() as f64
}

/// Percentage rounded to the nearest whole number for display.
pub fn rounded_percentage(percentage: f64) -> u32 {
    percentage.round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl GradeBand {
    /// Lower bounds are inclusive: exactly 80 is excellent, exactly 60 is good.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            GradeBand::Excellent
        } else if percentage >= 60.0 {
            GradeBand::Good
        } else {
            GradeBand::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Excellent => "excellent",
            GradeBand::Good => "good",
            GradeBand::NeedsImprovement => "needs improvement",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            GradeBand::Excellent => "🎉",
            GradeBand::Good => "👍",
            GradeBand::NeedsImprovement => "💪",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GradeBand::Excellent => "ยอดเยี่ยม! คุณทำได้ดีมาก",
            GradeBand::Good => "ดีมาก! แต่ยังสามารถพัฒนาได้อีก",
            GradeBand::NeedsImprovement => "พยายามอีกนิดนะ ลองทำใหม่ดูไหม?",
        }
    }
}

/// The user's answer to one question set against the correct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question_text: String,
    /// `None` if the question was never answered.
    pub user_option_text: Option<String>,
    pub correct_option_text: String,
    pub is_correct: bool,
}

pub fn review_entry(question: &Question, answers: &BTreeMap<u32, String>) -> ReviewEntry {
    let user_answer = answers.get(&question.id).map(String::as_str);

    ReviewEntry {
        question_text: question.text.clone(),
        user_option_text: user_answer
            .and_then(|id| question.option(id))
            .map(|option| option.text.clone()),
        correct_option_text: question
            .correct_option()
            .map(|option| option.text.clone())
            .unwrap_or_default(),
        is_correct: is_correct(user_answer, question),
    }
}

pub fn review(answers: &BTreeMap<u32, String>, questions: &QuestionSet) -> Vec<ReviewEntry> {
    questions
        .iter()
        .map(|question| review_entry(question, answers))
        .collect()
}

/// Everything the results screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub score: usize,
    pub total: NonZeroUsize,
    pub percentage: f64,
    pub grade: GradeBand,
    pub entries: Vec<ReviewEntry>,
}

impl Results {
    pub fn compute(answers: &BTreeMap<u32, String>, questions: &QuestionSet) -> Self {
        let score = score(answers, questions);
        let total = questions.len();
        let percentage = percentage(score, total);

        Self {
            score,
            total,
            percentage,
            grade: GradeBand::from_percentage(percentage),
            entries: review(answers, questions),
        }
    }

    pub fn rounded_percentage(&self) -> u32 {
        rounded_percentage(self.percentage)
    }
}
