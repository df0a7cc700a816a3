//! Read-only projection of the machine for the rendering layer.

use crate::models::OptionId;

use super::machine::{Phase, QuizMachine};
use super::results::QuizSummary;
use super::selection::BLANK_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: OptionId,
    pub text: String,
    /// Already placed in a blank, or the question is no longer open.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub phase: Phase,
    pub current_index: usize,
    pub total_questions: usize,
    pub seconds_remaining: u32,
    pub prompt: String,
    pub blanks: [Option<String>; BLANK_COUNT],
    /// Positional verdict per blank, filled in once the question is graded.
    pub blank_marks: [Option<bool>; BLANK_COUNT],
    pub options: Vec<OptionView>,
    pub score: usize,
    pub can_submit: bool,
    pub can_advance: bool,
    pub is_last_question: bool,
    /// Fraction of the quiz reached, counting the current question.
    pub progress: f64,
    pub summary: Option<QuizSummary>,
}

pub(super) fn project(machine: &QuizMachine) -> QuizView {
    let phase = machine.phase();
    let index = machine.current_index();
    let question = machine.current_question();
    let selection = machine.current_selection();
    let open = phase == Phase::InProgress;

    let mut blanks: [Option<String>; BLANK_COUNT] = Default::default();
    for (blank, id) in blanks.iter_mut().zip(selection) {
        *blank = question.option(*id).map(str::to_owned);
    }

    let mut blank_marks = [None; BLANK_COUNT];
    if phase == Phase::Graded {
        for (slot, mark) in blank_marks.iter_mut().enumerate() {
            let placed = blanks[slot].as_deref();
            let expected = question.correct_answer.get(slot).map(String::as_str);
            *mark = Some(placed.is_some() && placed == expected);
        }
    }

    let options = question
        .option_ids()
        .map(|id| OptionView {
            id,
            text: question.options[id.0].clone(),
            disabled: !open || selection.contains(&id),
        })
        .collect();

    let total = machine.total_questions();

    QuizView {
        phase,
        current_index: index,
        total_questions: total,
        seconds_remaining: machine.seconds_remaining(),
        prompt: question.prompt.clone(),
        blanks,
        blank_marks,
        options,
        score: machine.score(),
        can_submit: machine.can_submit(),
        can_advance: machine.can_advance(),
        is_last_question: machine.is_last_question(),
        progress: (index + 1) as f64 / total as f64,
        summary: machine.finalize(),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TimerConfig;
    use crate::data::QuestionStore;
    use crate::models::{OptionId, Question, QuestionId};
    use crate::quiz::{Phase, QuizMachine};

    fn machine() -> QuizMachine {
        let questions = (0..2)
            .map(|i| Question {
                id: QuestionId::new(i.to_string()),
                prompt: format!("question {i}"),
                options: ["a", "b", "c", "d", "a"].map(String::from).to_vec(),
                correct_answer: ["a", "b", "c", "d"].map(String::from).to_vec(),
            })
            .collect();
        QuizMachine::new(QuestionStore::from_questions(questions).unwrap(), TimerConfig::default())
    }

    #[test]
    fn test_view_before_start() {
        let view = machine().view();

        assert_eq!(view.phase, Phase::NotStarted);
        assert_eq!(view.total_questions, 2);
        assert!(view.options.iter().all(|o| o.disabled));
        assert!(!view.can_submit);
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_view_tracks_blanks_and_disabled_options() {
        let mut m = machine();
        m.start();
        m.select(OptionId(4));
        m.select(OptionId(1));

        let view = m.view();
        assert_eq!(view.blanks[0].as_deref(), Some("a"));
        assert_eq!(view.blanks[1].as_deref(), Some("b"));
        assert_eq!(view.blanks[2], None);
        assert!(view.options[4].disabled);
        assert!(!view.options[0].disabled);
        assert!(view.blank_marks.iter().all(Option::is_none));
        assert_eq!(view.progress, 0.5);
    }

    #[test]
    fn test_view_marks_blanks_after_grading() {
        let mut m = machine();
        m.start();
        for option in [0, 2, 1, 3] {
            m.select(OptionId(option));
        }
        assert!(m.view().can_submit);
        m.submit();

        let view = m.view();
        assert_eq!(view.phase, Phase::Graded);
        assert_eq!(
            view.blank_marks,
            [Some(true), Some(false), Some(false), Some(true)]
        );
        assert!(view.can_advance);
        assert!(!view.is_last_question);
        assert!(view.options.iter().all(|o| o.disabled));
    }

    #[test]
    fn test_view_carries_summary_when_finished() {
        let mut m = machine();
        m.start();
        m.auto_submit_on_expire();
        m.auto_submit_on_expire();

        let view = m.view();
        assert_eq!(view.phase, Phase::Finished);
        let summary = view.summary.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.score, 0);
    }
}
