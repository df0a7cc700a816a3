use super::{LoadError, QuestionStore};

/// Fetch the question feed over HTTP and parse it into a store.
///
/// Non-success status codes are reported as fetch errors; no retries.
pub async fn fetch_questions(url: &str) -> Result<QuestionStore, LoadError> {
    tracing::debug!(url, "fetching question feed");

    let body = reqwest::get(url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(QuestionStore::load(&body)?)
}
