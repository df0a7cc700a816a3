//! Linear quiz state machine.
//!
//! ```text
//! NotStarted -> InProgress(i) -> Graded(i) -> InProgress(i + 1) | Finished
//! ```
//!
//! Every operation is a no-op when called from a phase it does not apply
//! to. `Finished` is terminal.

use crate::config::TimerConfig;
use crate::data::QuestionStore;
use crate::models::{AnswerRecord, OptionId, Question};

use super::results::{finalize, QuizSummary};
use super::selection::{SelectionBuffer, BLANK_COUNT};
use super::timer::{Countdown, Tick};
use super::view::{project, QuizView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Graded,
    Finished,
}

/// What a timer tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is not running in the current phase.
    Idle,
    /// Seconds left on the current question.
    Counting(u32),
    /// Time ran out: the question was graded and the quiz moved on.
    AutoSubmitted { correct: bool },
}

/// Flat snapshot of the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSession {
    pub current_index: usize,
    pub started: bool,
    pub submitted_current: bool,
    pub finished: bool,
    pub score: usize,
    pub seconds_remaining: u32,
}

pub struct QuizMachine {
    store: QuestionStore,
    selections: SelectionBuffer,
    answers: Vec<Option<AnswerRecord>>,
    countdown: Countdown,
    phase: Phase,
    current_index: usize,
    score: usize,
}

impl QuizMachine {
    pub fn new(store: QuestionStore, timer: TimerConfig) -> Self {
        let count = store.count();
        Self {
            store,
            selections: SelectionBuffer::new(count),
            answers: vec![None; count],
            countdown: Countdown::new(timer),
            phase: Phase::NotStarted,
            current_index: 0,
            score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn total_questions(&self) -> usize {
        self.store.count()
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn current_question(&self) -> &Question {
        &self.store.questions()[self.current_index]
    }

    pub fn current_selection(&self) -> &[OptionId] {
        self.selections.current(self.current_index)
    }

    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    pub fn answers(&self) -> &[Option<AnswerRecord>] {
        &self.answers
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index == self.store.last_index()
    }

    pub fn session(&self) -> QuizSession {
        QuizSession {
            current_index: self.current_index,
            started: self.phase != Phase::NotStarted,
            submitted_current: matches!(self.phase, Phase::Graded | Phase::Finished),
            finished: self.phase == Phase::Finished,
            score: self.score,
            seconds_remaining: self.countdown.remaining(),
        }
    }

    /// The countdown only runs while the current question is open.
    pub fn timer_running(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::InProgress && self.selections.is_full(self.current_index)
    }

    pub fn can_advance(&self) -> bool {
        self.phase == Phase::Graded
    }

    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::InProgress;
        self.countdown.reset();
        tracing::info!(questions = self.store.count(), "quiz started");
        true
    }

    pub fn select(&mut self, option: OptionId) -> bool {
        if self.phase != Phase::InProgress || self.current_question().option(option).is_none() {
            return false;
        }
        self.selections.select(self.current_index, option)
    }

    pub fn unselect(&mut self, slot: usize) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.selections.unselect(self.current_index, slot).is_some()
    }

    /// Manual submission. Requires every blank to be filled; returns the
    /// verdict, or `None` if nothing was graded.
    pub fn submit(&mut self) -> Option<bool> {
        if !self.can_submit() {
            return None;
        }
        Some(self.grade())
    }

    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Graded {
            return false;
        }

        if self.is_last_question() {
            self.phase = Phase::Finished;
            tracing::info!(
                score = self.score,
                total = self.store.count(),
                "quiz finished"
            );
        } else {
            self.current_index += 1;
            self.countdown.reset();
            self.phase = Phase::InProgress;
            tracing::debug!(index = self.current_index, "advanced to next question");
        }
        true
    }

    /// Grade whatever is buffered (if still open) and move on.
    ///
    /// Returns the verdict of the grading that happened here, if any.
    pub fn auto_submit_on_expire(&mut self) -> Option<bool> {
        let verdict = match self.phase {
            Phase::InProgress => {
                let correct = self.grade();
                tracing::info!(
                    index = self.current_index,
                    correct,
                    "time expired, answer submitted automatically"
                );
                Some(correct)
            }
            Phase::Graded => None,
            Phase::NotStarted | Phase::Finished => return None,
        };
        self.advance();
        verdict
    }

    /// One second of the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.timer_running() {
            return TickOutcome::Idle;
        }
        match self.countdown.tick() {
            Tick::Running(remaining) => TickOutcome::Counting(remaining),
            Tick::Expired => TickOutcome::AutoSubmitted {
                correct: self.auto_submit_on_expire().unwrap_or(false),
            },
        }
    }

    /// Score summary, available once the quiz is finished.
    pub fn finalize(&self) -> Option<QuizSummary> {
        (self.phase == Phase::Finished).then(|| finalize(&self.store, &self.answers))
    }

    pub fn view(&self) -> QuizView {
        project(self)
    }

    fn grade(&mut self) -> bool {
        let index = self.current_index;
        let question = &self.store.questions()[index];
        let record = AnswerRecord {
            user: question.words_for(self.selections.current(index)),
            correct: question.correct_answer.clone(),
        };
        let correct = record.is_correct();

        if correct {
            self.score += 1;
        }
        self.selections.freeze(index);
        self.answers[index] = Some(record);
        self.phase = Phase::Graded;

        tracing::info!(index, correct, score = self.score, "question graded");
        correct
    }
}
