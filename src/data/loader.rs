use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::config::QuestionSource;
use crate::models::Question;

use super::{fetch_questions, DataShapeError, LoadError, QuestionStore};

/// Extract the question list from a feed body.
///
/// Accepts the `{"data": {"questions": [...]}}` envelope served by the
/// remote endpoint, a `{"questions": [...]}` object, or a bare list.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, DataShapeError> {
    let value: Value = serde_json::from_str(raw)?;

    let list = match &value {
        Value::Array(_) => &value,
        Value::Object(_) => value
            .pointer("/data/questions")
            .or_else(|| value.get("questions"))
            .ok_or(DataShapeError::MissingQuestions)?,
        _ => return Err(DataShapeError::MissingQuestions),
    };

    if !list.is_array() {
        return Err(DataShapeError::MissingQuestions);
    }

    let questions = Vec::<Question>::deserialize(list)?;
    if questions.is_empty() {
        return Err(DataShapeError::NoQuestions);
    }

    Ok(questions)
}

/// Load a question store from a JSON file on disk.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionStore, LoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(QuestionStore::load(&raw)?)
}

/// Load the store from whichever source the session is configured with.
pub async fn load(source: &QuestionSource) -> Result<QuestionStore, LoadError> {
    let store = match source {
        QuestionSource::Url(url) => fetch_questions(url).await?,
        QuestionSource::File(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
            QuestionStore::load(&raw)?
        }
    };

    tracing::info!(%source, questions = store.count(), "question list loaded");
    Ok(store)
}
