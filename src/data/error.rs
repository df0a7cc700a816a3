use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The feed did not carry a usable question list.
#[derive(Debug, Error)]
pub enum DataShapeError {
    #[error("question feed is not valid JSON for the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("question feed has no question list")]
    MissingQuestions,
    #[error("question feed contains no questions")]
    NoQuestions,
}

/// Failure to obtain the question list from its source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch questions: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error(transparent)]
    Shape(#[from] DataShapeError),
}
