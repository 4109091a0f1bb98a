use crate::models::{Question, QuestionSet, QuizOption};
use crate::scoring::{self, Results};
use crate::session::{Phase, QuizSession};

/// Rows each review entry takes up on the results screen.
pub(crate) const REVIEW_LINES_PER_ENTRY: usize = 3;

/// How an option should be drawn given the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionHighlight {
    Neutral,
    /// Chosen but not yet submitted.
    Selected,
    Correct,
    /// Submitted and wrong.
    Incorrect,
}

/// Owns the question set and the session; every user intent goes through here.
pub struct App {
    questions: QuestionSet,
    session: QuizSession,
    result_scroll: usize,
}

impl App {
    pub fn new(questions: QuestionSet) -> Self {
        tracing::info!(questions = questions.len().get(), "quiz started");

        Self {
            questions,
            session: QuizSession::new(),
            result_scroll: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        &self.questions.as_slice()[self.session.current_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len().get()
    }

    pub fn is_last_question(&self) -> bool {
        self.session.current_index == self.questions.last_index()
    }

    /// Completion of the progress bar, `(index + 1) / N`.
    pub fn progress_fraction(&self) -> f64 {
        self.current_question_number() as f64 / self.total_questions() as f64
    }

    pub fn can_select(&self) -> bool {
        self.phase() == Phase::Answering
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::Answering && self.session.selected_answer.is_some()
    }

    pub fn current_is_correct(&self) -> bool {
        scoring::is_correct(self.session.selected_answer(), self.current_question())
    }

    pub fn option_highlight(&self, option: &QuizOption) -> OptionHighlight {
        let question = self.current_question();
        let selected = self.session.selected_answer() == Some(option.id.as_str());

        if !self.session.submitted {
            return if selected {
                OptionHighlight::Selected
            } else {
                OptionHighlight::Neutral
            };
        }

        if question.is_correct_answer(&option.id) {
            OptionHighlight::Correct
        } else if selected {
            OptionHighlight::Incorrect
        } else {
            OptionHighlight::Neutral
        }
    }

    /// Final results, available once the last question has been advanced past.
    pub fn results(&self) -> Option<Results> {
        self.session
            .finished
            .then(|| Results::compute(&self.session.answers, &self.questions))
    }

    pub fn select_option(&mut self, option_id: &str) {
        if !self.can_select() {
            return;
        }
        if self.current_question().option(option_id).is_none() {
            tracing::warn!(
                question = self.current_question().id,
                option = option_id,
                "ignoring selection of unknown option"
            );
            return;
        }

        tracing::debug!(option = option_id, "option selected");
        self.session.selected_answer = Some(option_id.to_string());
    }

    /// Select the option at a zero-based position in the current question.
    pub fn select_option_at(&mut self, position: usize) {
        let Some(id) = self
            .current_question()
            .options
            .get(position)
            .map(|option| option.id.clone())
        else {
            return;
        };
        self.select_option(&id);
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_question().options.len();
        let next = match self.selected_position() {
            Some(position) => (position + 1) % count,
            None => 0,
        };
        self.select_option_at(next);
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_question().options.len();
        let previous = match self.selected_position() {
            Some(position) => (position + count - 1) % count,
            None => count - 1,
        };
        self.select_option_at(previous);
    }

    fn selected_position(&self) -> Option<usize> {
        self.session
            .selected_answer()
            .and_then(|id| self.current_question().position_of(id))
    }

    pub fn submit_answer(&mut self) {
        if !self.can_submit() {
            return;
        }
        let Some(selected) = self.session.selected_answer.clone() else {
            return;
        };

        let question_id = self.current_question().id;
        self.session.submitted = true;
        self.session.answers.insert(question_id, selected);

        tracing::debug!(
            question = question_id,
            correct = self.current_is_correct(),
            "answer submitted"
        );
    }

    pub fn advance(&mut self) {
        if self.phase() != Phase::Reviewing {
            return;
        }

        if self.is_last_question() {
            self.session.finished = true;
            if let Some(results) = self.results() {
                tracing::info!(
                    score = results.score,
                    total = results.total.get(),
                    grade = results.grade.label(),
                    "quiz finished"
                );
            }
            return;
        }

        self.session.current_index += 1;
        self.session.selected_answer = None;
        self.session.submitted = false;
        tracing::debug!(index = self.session.current_index, "advanced to next question");
    }

    /// Primary action: submit while answering, advance while reviewing.
    pub fn confirm(&mut self) {
        match self.phase() {
            Phase::Answering => self.submit_answer(),
            Phase::Reviewing => self.advance(),
            Phase::Finished => {}
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.result_scroll = 0;
        tracing::debug!("quiz reset");
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let last_line = self.total_questions() * REVIEW_LINES_PER_ENTRY - 1;
        self.result_scroll = (self.result_scroll + 1).min(last_line);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
