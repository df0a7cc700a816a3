use crate::data::QuestionStore;
use crate::models::{AnswerRecord, Question};

/// One line of the final breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub question: Question,
    pub user_answer: Vec<String>,
    pub correct_answer: Vec<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub per_question: Vec<QuestionResult>,
}

impl QuizSummary {
    pub fn incorrect(&self) -> usize {
        self.total - self.score
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Build the summary from the store and the recorded answers.
///
/// A question without a record counts as answered with nothing.
pub fn finalize(store: &QuestionStore, answers: &[Option<AnswerRecord>]) -> QuizSummary {
    let per_question: Vec<QuestionResult> = store
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers
                .get(index)
                .and_then(Option::as_ref)
                .map(|record| record.user.clone())
                .unwrap_or_default();
            let is_correct = user_answer == question.correct_answer;

            QuestionResult {
                question: question.clone(),
                user_answer,
                correct_answer: question.correct_answer.clone(),
                is_correct,
            }
        })
        .collect();

    QuizSummary {
        score: per_question.iter().filter(|r| r.is_correct).count(),
        total: store.count(),
        per_question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| w.to_string()).collect()
    }

    fn store() -> QuestionStore {
        let questions = (0..3)
            .map(|i| Question {
                id: QuestionId::new(i.to_string()),
                prompt: format!("q{i}"),
                options: words(&["a", "b", "c", "d"]),
                correct_answer: words(&["a", "b", "c", "d"]),
            })
            .collect();
        QuestionStore::from_questions(questions).unwrap()
    }

    #[test]
    fn test_finalize_counts_exact_matches() {
        let answers = vec![
            Some(AnswerRecord {
                user: words(&["a", "b", "c", "d"]),
                correct: words(&["a", "b", "c", "d"]),
            }),
            Some(AnswerRecord {
                user: words(&["b", "a", "c", "d"]),
                correct: words(&["a", "b", "c", "d"]),
            }),
            None,
        ];

        let summary = finalize(&store(), &answers);

        assert_eq!(summary.score, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.incorrect(), 2);
        assert!(summary.per_question[0].is_correct);
        assert!(!summary.per_question[1].is_correct);
        assert!(summary.per_question[2].user_answer.is_empty());
        assert_eq!(summary.per_question[2].correct_answer.len(), 4);
    }

    #[test]
    fn test_percentage() {
        let summary = finalize(&store(), &[]);
        assert_eq!(summary.percentage(), 0.0);
        assert_eq!(summary.total, 3);
    }
}
