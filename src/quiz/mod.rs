//! The quiz core: selection buffer, countdown, state machine, grading.

mod machine;
mod results;
mod selection;
mod timer;
mod view;

pub use machine::{Phase, QuizMachine, QuizSession, TickOutcome};
pub use results::{finalize, QuestionResult, QuizSummary};
pub use selection::{SelectionBuffer, BLANK_COUNT};
pub use timer::{Countdown, Tick};
pub use view::{OptionView, QuizView};
