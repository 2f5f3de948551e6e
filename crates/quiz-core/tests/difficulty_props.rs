use proptest::prelude::*;
use quiz_core::model::{QuizDocument, RawQuiz, DEFAULT_DIFFICULTY};
use serde_json::{json, Value};

fn single_quiz(quiz: Value) -> RawQuiz {
    let bytes = serde_json::to_vec(&json!({ "quizzes": [quiz] })).expect("json");
    let (mut records, skipped) = QuizDocument::from_slice(&bytes)
        .expect("document")
        .into_records();
    assert_eq!(skipped, 0);
    records.remove(0)
}

proptest! {
    #[test]
    fn integer_difficulty_is_its_own_level(level in any::<i64>()) {
        let quiz = single_quiz(json!({ "difficulty": level }));
        prop_assert_eq!(quiz.level(), Some(level));
        prop_assert_eq!(quiz.effective_level(), Some(level));
        prop_assert_eq!(quiz.difficulty_value(), json!(level));
    }

    #[test]
    fn integral_float_difficulty_reads_as_level(level in -1_000_000i64..1_000_000) {
        let quiz = single_quiz(json!({ "difficulty": level as f64 }));
        prop_assert_eq!(quiz.level(), Some(level));
        prop_assert_eq!(quiz.difficulty_value(), json!(level as f64));
    }

    #[test]
    fn text_difficulty_has_no_level_and_survives(text in "[0-9a-z ]{0,8}") {
        let quiz = single_quiz(json!({ "difficulty": text.clone() }));
        prop_assert_eq!(quiz.level(), None);
        prop_assert_eq!(quiz.effective_level(), None);
        prop_assert_eq!(quiz.difficulty_value(), json!(text));
    }

    #[test]
    fn answer_entries_are_never_dropped(
        entries in proptest::collection::vec(
            prop_oneof![
                Just(json!(null)),
                Just(json!("stray")),
                Just(json!(7)),
                "[a-z]{1,6}".prop_map(|name| json!({ "name": name })),
            ],
            0..12,
        ),
    ) {
        let quiz = single_quiz(json!({ "answers": entries.clone() }));
        prop_assert_eq!(quiz.answers.len(), entries.len());
        prop_assert_eq!(quiz.effective_level(), Some(DEFAULT_DIFFICULTY));
    }
}
