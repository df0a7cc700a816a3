use crate::config::{QuizConfig, TimerConfig};
use crate::data::{LoadError, QuestionStore};
use crate::models::OptionId;
use crate::quiz::{Phase, QuizMachine, TickOutcome, BLANK_COUNT};
use crate::ui::Theme;

/// Progress of the initial question fetch.
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(QuizMachine),
}

/// Which screen the terminal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    LoadFailed,
    Welcome,
    Exam,
    Results,
}

pub struct App {
    load: LoadState,
    timer: TimerConfig,
    source: String,
    cursor: usize,
    theme: Theme,
    result_scroll: usize,
}

impl App {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            load: LoadState::Loading,
            timer: config.timer,
            source: config.source.to_string(),
            cursor: 0,
            theme: Theme::default(),
            result_scroll: 0,
        }
    }

    /// Start directly from an already loaded store.
    pub fn with_store(store: QuestionStore, timer: TimerConfig) -> Self {
        let mut app = Self::new(&QuizConfig {
            timer,
            ..QuizConfig::default()
        });
        app.load = LoadState::Ready(QuizMachine::new(store, timer));
        app
    }

    pub fn on_loaded(&mut self, result: Result<QuestionStore, LoadError>) {
        if !matches!(self.load, LoadState::Loading) {
            return;
        }
        self.load = match result {
            Ok(store) => LoadState::Ready(QuizMachine::new(store, self.timer)),
            Err(err) => {
                tracing::error!(error = %err, "cannot load quiz");
                LoadState::Failed(err.to_string())
            }
        };
    }

    pub fn screen(&self) -> Screen {
        match &self.load {
            LoadState::Loading => Screen::Loading,
            LoadState::Failed(_) => Screen::LoadFailed,
            LoadState::Ready(machine) => match machine.phase() {
                Phase::NotStarted => Screen::Welcome,
                Phase::InProgress | Phase::Graded => Screen::Exam,
                Phase::Finished => Screen::Results,
            },
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn machine(&self) -> Option<&QuizMachine> {
        match &self.load {
            LoadState::Ready(machine) => Some(machine),
            _ => None,
        }
    }

    fn machine_mut(&mut self) -> Option<&mut QuizMachine> {
        match &mut self.load {
            LoadState::Ready(machine) => Some(machine),
            _ => None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Question index the ticker should be running for, if any.
    pub fn timer_target(&self) -> Option<usize> {
        self.machine()
            .filter(|machine| machine.timer_running())
            .map(QuizMachine::current_index)
    }

    pub fn start_quiz(&mut self) {
        if let Some(machine) = self.machine_mut() {
            machine.start();
        }
        self.cursor = 0;
    }

    fn option_count(&self) -> usize {
        self.machine()
            .map(|machine| machine.current_question().options.len())
            .unwrap_or(0)
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Place the option under the cursor into the next blank, then move the
    /// cursor to the next option that is still available.
    pub fn choose_option(&mut self) {
        let cursor = self.cursor;
        let Some(machine) = self.machine_mut() else {
            return;
        };
        if !machine.select(OptionId(cursor)) {
            return;
        }

        let count = machine.current_question().options.len();
        let selection = machine.current_selection();
        let next = (1..count)
            .map(|step| (cursor + step) % count)
            .find(|i| !selection.contains(&OptionId(*i)));
        if let Some(next) = next {
            self.cursor = next;
        }
    }

    pub fn clear_blank(&mut self, slot: usize) {
        if slot >= BLANK_COUNT {
            return;
        }
        if let Some(machine) = self.machine_mut() {
            machine.unselect(slot);
        }
    }

    pub fn submit_answer(&mut self) {
        if let Some(machine) = self.machine_mut() {
            machine.submit();
        }
    }

    pub fn next_question(&mut self) {
        if let Some(machine) = self.machine_mut() {
            if machine.advance() {
                self.cursor = 0;
            }
        }
    }

    pub fn on_tick(&mut self) {
        let Some(machine) = self.machine_mut() else {
            return;
        };
        if let TickOutcome::AutoSubmitted { .. } = machine.tick() {
            self.cursor = 0;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .machine()
            .map(|machine| machine.total_questions().saturating_sub(1))
            .unwrap_or(0);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
