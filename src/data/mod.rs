//! Question Store and the ways of filling it.

mod error;
mod fetch;
mod loader;
mod store;

pub use error::{DataShapeError, LoadError};
pub use fetch::fetch_questions;
pub use loader::{load, load_questions_from_json, parse_questions};
pub use store::QuestionStore;
