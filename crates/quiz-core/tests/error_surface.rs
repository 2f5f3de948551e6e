use quiz_core::errors::{ErrorInfo, FileFailure, QuizError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "data/v3/a.json")
        .with_context("reason", "example")
}

#[test]
fn corpus_error_surface() {
    let err = QuizError::Corpus(sample_info("quiz_corpus.read", "permission denied"));
    assert_eq!(err.info().code, "quiz_corpus.read");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn output_error_surface() {
    let err = QuizError::Output(sample_info("quiz_convert.write", "disk full"));
    assert_eq!(err.info().code, "quiz_convert.write");
}

#[test]
fn display_renders_context_and_hint() {
    let err = QuizError::Config(
        ErrorInfo::new("quiz_core.config_parse", "bad key")
            .with_context("path", "quizkit.toml")
            .with_hint("remove the key"),
    );
    assert_eq!(
        err.to_string(),
        "config error: bad key (code: quiz_core.config_parse) | context: [path=quizkit.toml] | hint: remove the key"
    );
}

#[test]
fn file_failure_names_the_file() {
    let failure = FileFailure::new(
        "broken.json",
        QuizError::Serde(ErrorInfo::new("quiz_core.parse", "EOF while parsing")),
    );
    assert!(failure.to_string().starts_with("broken.json: serde error: EOF"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = QuizError::Serde(ErrorInfo::new("S001", "schema mismatch"));
    let value = serde_json::to_value(&err).expect("json");
    assert_eq!(value["family"], "Serde");
    assert_eq!(value["detail"]["code"], "S001");
    let restored: QuizError = serde_json::from_value(value).expect("restore");
    assert_eq!(restored, err);
}
