use crossterm::event::Event as CrosstermEvent;

use crate::data::{LoadError, QuestionStore};

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The question feed resolved
    Loaded(Result<QuestionStore, LoadError>),

    /// One second of the countdown, tagged with the ticker generation
    /// that produced it
    Tick(u64),
}
