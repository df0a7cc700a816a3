mod answer;
mod question;

pub use answer::AnswerRecord;
pub use question::{OptionId, Question, QuestionId};
