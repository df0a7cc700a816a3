use cloze_quiz::quiz::TickOutcome;
use cloze_quiz::{OptionId, Phase, QuestionStore, QuizMachine, TimerConfig};

const FEED: &str = r#"{
    "status": "SUCCESS",
    "data": {
        "questions": [
            {
                "questionId": "q-1",
                "question": "___ ___ ___ ___",
                "options": ["a", "b", "c", "d", "e"],
                "correctAnswer": ["a", "b", "c", "d"]
            },
            {
                "questionId": "q-2",
                "question": "___ ___ ___ ___",
                "options": ["a", "b", "c", "d", "e"],
                "correctAnswer": ["a", "b", "c", "d"]
            },
            {
                "questionId": "q-3",
                "question": "___ ___ ___ ___",
                "options": ["a", "b", "c", "d", "e"],
                "correctAnswer": ["a", "b", "c", "d"]
            }
        ]
    }
}"#;

fn machine(seconds: u32) -> QuizMachine {
    QuizMachine::new(QuestionStore::load(FEED).unwrap(), TimerConfig::new(seconds))
}

fn pick(machine: &mut QuizMachine, options: &[usize]) {
    for option in options {
        machine.select(OptionId(*option));
    }
}

#[test]
fn ordered_answer_is_correct() {
    let mut m = machine(30);
    m.start();
    pick(&mut m, &[0, 1, 2, 3]);

    assert_eq!(m.submit(), Some(true));
    assert_eq!(m.score(), 1);
}

#[test]
fn same_words_wrong_order_is_incorrect() {
    let mut m = machine(30);
    m.start();
    pick(&mut m, &[1, 0, 2, 3]);

    assert_eq!(m.submit(), Some(false));
    assert_eq!(m.score(), 0);
}

#[test]
fn timeout_with_partial_buffer_grades_incorrect_and_advances() {
    let mut m = machine(30);
    m.start();
    pick(&mut m, &[0, 1]);

    let mut outcomes = Vec::new();
    for _ in 0..30 {
        outcomes.push(m.tick());
    }

    let expired: Vec<_> = outcomes
        .iter()
        .filter(|o| matches!(o, TickOutcome::AutoSubmitted { .. }))
        .collect();
    assert_eq!(expired, vec![&TickOutcome::AutoSubmitted { correct: false }]);

    let record = m.answer(0).unwrap();
    assert_eq!(record.user, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(record.correct.len(), 4);
    assert_eq!(m.current_index(), 1);
    assert_eq!(m.seconds_remaining(), 30);
}

#[test]
fn fifth_selection_leaves_buffer_unchanged() {
    let mut m = machine(30);
    m.start();
    pick(&mut m, &[0, 1, 2, 3]);
    let before = m.current_selection().to_vec();

    assert!(!m.select(OptionId(4)));
    assert_eq!(m.current_selection(), before.as_slice());
}

#[test]
fn last_question_advances_to_finished_with_full_summary() {
    let mut m = machine(30);
    m.start();

    let mut indices = vec![m.current_index()];
    for answer in [[0, 1, 2, 3], [3, 2, 1, 0], [0, 1, 2, 3]] {
        pick(&mut m, &answer);
        m.submit();
        assert!(m.advance());
        indices.push(m.current_index());
    }

    assert_eq!(m.phase(), Phase::Finished);
    assert_eq!(indices, vec![0, 1, 2, 2]);

    let summary = m.finalize().unwrap();
    assert_eq!(summary.total, m.store().count());
    assert_eq!(summary.score, 2);
    assert_eq!(
        summary.score,
        m.answers()
            .iter()
            .flatten()
            .filter(|record| record.user == record.correct)
            .count()
    );
    assert!(!summary.per_question[1].is_correct);
}

#[test]
fn finished_session_ignores_ticks() {
    let mut m = machine(1);
    m.start();
    for _ in 0..3 {
        m.tick();
    }

    assert_eq!(m.phase(), Phase::Finished);
    assert_eq!(m.tick(), TickOutcome::Idle);
    assert_eq!(m.finalize().unwrap().score, 0);
}
