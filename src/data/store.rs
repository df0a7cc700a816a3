use crate::models::Question;

use super::DataShapeError;

/// Immutable list of the session's questions.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Parse the raw feed body into a store.
    pub fn load(raw: &str) -> Result<Self, DataShapeError> {
        super::parse_questions(raw).map(|questions| Self { questions })
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, DataShapeError> {
        if questions.is_empty() {
            return Err(DataShapeError::NoQuestions);
        }
        Ok(Self { questions })
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}
