//! # cloze-quiz
//!
//! A terminal fill-in-the-blank quiz. Questions are fetched once from a JSON
//! feed, each one is answered by placing four words into four blanks under
//! a per-question countdown, and a score summary closes the session.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloze_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     Quiz::new(QuizConfig::default()).run().await
//! }
//! ```
//!
//! The core ([`QuizMachine`]) is synchronous and usable without a terminal.

mod app;
pub mod config;
mod data;
mod event;
mod models;
pub mod quiz;
pub mod terminal;
mod ticker;
mod ui;

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;

pub use app::{App, LoadState, Screen};
pub use config::{QuestionSource, QuizConfig, TimerConfig};
pub use data::{
    fetch_questions, load, load_questions_from_json, parse_questions, DataShapeError, LoadError,
    QuestionStore,
};
pub use event::AppEvent;
pub use models::{AnswerRecord, OptionId, Question, QuestionId};
pub use quiz::{Phase, QuizMachine, QuizSummary, QuizView};
pub use ticker::{Ticker, TICK_PERIOD};
pub use ui::Theme;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    config: QuizConfig,
    app: App,
}

impl Quiz {
    /// Create a quiz that loads its questions from `config.source` once
    /// the terminal is up.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            app: App::new(&config),
            config,
        }
    }

    /// Create a quiz over questions that are already loaded.
    pub fn with_store(store: QuestionStore, timer: TimerConfig) -> Self {
        Self {
            config: QuizConfig {
                timer,
                ..QuizConfig::default()
            },
            app: App::with_store(store, timer),
        }
    }

    /// Load a quiz from a JSON file before taking over the terminal.
    pub fn from_json<P: AsRef<std::path::Path>>(path: P, timer: TimerConfig) -> Result<Self, QuizError> {
        let store = load_questions_from_json(path)?;
        Ok(Self::with_store(store, timer))
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.config).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    config: &QuizConfig,
) -> Result<(), QuizError> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    if matches!(app.load_state(), LoadState::Loading) {
        let source = config.source.clone();
        let load_tx = event_tx.clone();
        tokio::spawn(async move {
            let _ = load_tx.send(AppEvent::Loaded(load(&source).await));
        });
    }

    let mut ticker = Ticker::new(event_tx, TICK_PERIOD);
    let mut input = EventStream::new();

    loop {
        ticker.sync(app.timer_target());
        terminal.draw(|frame| ui::render(frame, app))?;

        let event = tokio::select! {
            maybe = input.next() => match maybe {
                Some(Ok(event)) => AppEvent::Terminal(event),
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(event) = event_rx.recv() => event,
        };

        match event {
            AppEvent::Terminal(Event::Key(key)) => {
                if key.kind == KeyEventKind::Press && handle_input(app, key) {
                    break;
                }
            }
            AppEvent::Terminal(_) => {}
            AppEvent::Loaded(result) => app.on_loaded(result),
            AppEvent::Tick(generation) => {
                if ticker.accepts(generation) {
                    app.on_tick();
                }
            }
        }
    }

    ticker.cancel();
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.screen() {
        Screen::Loading | Screen::LoadFailed => {}
        Screen::Welcome => handle_welcome_input(app, key.code),
        Screen::Exam => handle_exam_input(app, key.code),
        Screen::Results => handle_result_input(app, key.code),
    }
    false
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start_quiz();
    }
}

fn handle_exam_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.select_previous_option()
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.select_next_option()
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Char(c @ '1'..='4') => app.clear_blank(c as usize - '1' as usize),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit_answer(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.next_question(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_theme(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_theme(),
        _ => {}
    }
}
