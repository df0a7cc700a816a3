//! Runtime configuration for a quiz session.

use std::fmt;
use std::path::PathBuf;

/// Feed used when no other source is given.
pub const DEFAULT_QUESTIONS_URL: &str =
    "https://raw.githubusercontent.com/yghugardare/Sample/main/sample.json";

/// Seconds allowed per question.
pub const DEFAULT_TIMER_SECONDS: u32 = 30;

/// Where the question list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// Fetched over HTTP(S).
    Url(String),
    /// Read from a local JSON file.
    File(PathBuf),
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::Url(DEFAULT_QUESTIONS_URL.to_string())
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Url(url) => f.write_str(url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Per-question countdown settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub duration_seconds: u32,
}

impl TimerConfig {
    /// A zero-length countdown would expire before the user sees the
    /// question, so the duration is clamped to at least one second.
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration_seconds: duration_seconds.max(1),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMER_SECONDS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizConfig {
    pub source: QuestionSource,
    pub timer: TimerConfig,
}
