/// Snapshot of one graded question, frozen at submission time.
///
/// `user` may hold fewer than four words when the timer ran out first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub user: Vec<String>,
    pub correct: Vec<String>,
}

impl AnswerRecord {
    pub fn is_correct(&self) -> bool {
        self.user == self.correct
    }
}
