use fsmaster::quiz::{Question, QuizError, catalog};
use fsmaster::{QuizEngine, QuizStatus, Score};
use pretty_assertions::assert_eq;

fn answer_all(engine: &mut QuizEngine, answers: &[usize]) {
    for &answer in answers {
        engine.record_answer(answer);
        engine.advance();
    }
}

#[test]
fn perfect_run() {
    let mut engine = QuizEngine::builtin();
    answer_all(&mut engine, &[1, 1, 1, 2, 1]);

    assert_eq!(engine.status(), QuizStatus::Completed);
    let score = engine.score();
    assert_eq!(score, Score { correct: 5, total: 5 });
    assert_eq!(format!("{:.1}%", score.percentage()), "100.0%");
    assert!(engine.breakdown().iter().all(|r| r.is_correct));
}

#[test]
fn all_wrong_run() {
    let mut engine = QuizEngine::builtin();
    answer_all(&mut engine, &[0, 0, 0, 0, 0]);

    let score = engine.score();
    assert_eq!(score, Score { correct: 0, total: 5 });
    assert_eq!(format!("{:.1}%", score.percentage()), "0.0%");
}

#[test]
fn progress_midway() {
    let mut engine = QuizEngine::builtin();
    engine.advance();
    engine.advance();
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.progress(), 0.5);
}

#[test]
fn completed_session_is_frozen_until_reset() {
    let mut engine = QuizEngine::builtin();
    answer_all(&mut engine, &[1, 0, 1, 2, 1]);
    let before = engine.score();

    engine.record_answer(1);
    engine.retreat();
    assert_eq!(engine.advance(), QuizStatus::Completed);
    assert_eq!(engine.score(), before);
    assert_eq!(engine.current_index(), 4);

    engine.reset();
    assert_eq!(engine.status(), QuizStatus::InProgress);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.score().correct, 0);
}

#[test]
fn navigating_back_keeps_answers() {
    let mut engine = QuizEngine::builtin();
    engine.record_answer(3);
    engine.advance();
    engine.retreat();
    engine.retreat();
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.answer(0), Some(3));

    engine.record_answer(1);
    assert_eq!(engine.answer(0), Some(1));
}

#[test]
fn custom_catalog_from_json() {
    let json = r#"[
        {
            "prompt": "What does this print?",
            "code": "printfn \"%d\" (1 + 1)",
            "options": ["1", "2"],
            "correct_index": 1,
            "explanation": "1 + 1 is 2"
        }
    ]"#;
    let questions = catalog::from_json_str(json).unwrap();
    let mut engine = QuizEngine::new(questions).unwrap();

    assert_eq!(engine.progress(), 1.0);
    engine.record_answer(1);
    assert_eq!(engine.advance(), QuizStatus::Completed);
    assert!(engine.score().is_perfect());
}

#[test]
fn invalid_catalog_is_rejected() {
    let question = Question::new("?", "", ["only one"], 0, "");
    assert!(matches!(
        QuizEngine::new(vec![question]),
        Err(QuizError::TooFewOptions { index: 0, count: 1 })
    ));
}
