use std::fs;
use std::path::Path;

use quiz_convert::{convert_corpus, output_file_name, ConvertOptions};
use quiz_core::model::{Tier, TierDocument};
use quiz_core::provenance::RunStamp;
use serde_json::{json, Value};
use tempfile::tempdir;

fn stamp() -> RunStamp {
    RunStamp::fixed("20240131_174502", "2024-01-31T17:45:02+01:00")
}

fn options(source: &Path, output: &Path) -> ConvertOptions {
    ConvertOptions {
        source_dir: source.to_path_buf(),
        source_pattern: "*.json".to_string(),
        output_dir: output.to_path_buf(),
        output_prefix: "CONVERTED_V3".to_string(),
    }
}

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec(value).expect("json")).expect("write");
}

fn read_tier(output: &Path, tier: Tier) -> TierDocument {
    let path = output.join(output_file_name("CONVERTED_V3", &stamp(), tier));
    serde_json::from_slice(&fs::read(path).expect("read tier")).expect("tier json")
}

fn quiz(id: &str, difficulty: i64) -> Value {
    json!({
        "id": id,
        "title": format!("quiz {id}"),
        "theme": "Ligue 1",
        "difficulty": difficulty,
        "answers": [{"name": "Zidane", "nationality": "FR", "hint": "Madrid"}]
    })
}

#[test]
fn one_file_is_partitioned_by_tier() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(
        source.path(),
        "v3.json",
        &json!({"quizzes": [quiz("a", 1), quiz("b", 3), quiz("c", 3), quiz("d", 6)]}),
    );

    let summary = convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    assert_eq!(summary.quizzes_loaded, 4);
    assert_eq!(summary.quizzes_written(), 4);
    let tiers: Vec<_> = summary.written.iter().map(|w| (w.tier, w.count)).collect();
    assert_eq!(
        tiers,
        vec![(Tier::VeryEasy, 1), (Tier::Easy, 2), (Tier::VeryHard, 1)]
    );
    assert_eq!(fs::read_dir(output.path()).expect("ls").count(), 3);

    let easy = read_tier(output.path(), Tier::Easy);
    assert_eq!(easy.total_quizzes, 2);
    assert_eq!(easy.generated_at, "2024-01-31T17:45:02+01:00");
    let ids: Vec<_> = easy.quizzes.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2]);
    let titles: Vec<_> = easy.quizzes.iter().map(|q| q.title.as_deref()).collect();
    assert_eq!(titles, vec![Some("quiz b"), Some("quiz c")]);
    assert!(easy.quizzes.iter().all(|q| q.difficulty == json!(3)));
}

#[test]
fn malformed_file_contributes_nothing() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(source.path(), "good.json", &json!({"quizzes": [quiz("a", 4), quiz("b", 5)]}));
    fs::write(source.path().join("broken.json"), b"{ not json").expect("write");

    let summary = convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    assert_eq!(summary.files_loaded, 1);
    assert_eq!(summary.load_failures.len(), 1);
    assert_eq!(summary.load_failures[0].file_name, "broken.json");
    assert_eq!(summary.quizzes_written(), 2);
    assert!(summary.write_failures.is_empty());
}

#[test]
fn answers_are_normalized_in_output() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(
        source.path(),
        "answers.json",
        &json!({"quizzes": [{
            "id": 7,
            "title": "Bleus 98",
            "difficulty": 2,
            "answers": [{"name": "A", "nationality": "FR"}, {"name": "B"}],
            "source": "dropped"
        }]}),
    );

    convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    let path = output
        .path()
        .join(output_file_name("CONVERTED_V3", &stamp(), Tier::Easy));
    let raw: Value = serde_json::from_slice(&fs::read(path).expect("read")).expect("json");
    assert_eq!(
        raw["quizzes"][0],
        json!({
            "id": 1,
            "title": "Bleus 98",
            "theme": null,
            "difficulty": 2,
            "answers": [
                {"name": "A", "nationality": "FR", "hint": ""},
                {"name": "B", "nationality": null, "hint": ""}
            ]
        })
    );
    assert_eq!(raw["total_quizzes"], json!(1));
}

#[test]
fn empty_source_writes_nothing() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");

    let summary = convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    assert!(summary.written.is_empty());
    assert!(summary.load_failures.is_empty());
    assert_eq!(fs::read_dir(output.path()).expect("ls").count(), 0);
}

#[test]
fn missing_source_directory_is_reported() {
    let root = tempdir().expect("root");
    let err = convert_corpus(
        &options(&root.path().join("v3"), root.path()),
        &stamp(),
    )
    .unwrap_err();
    assert_eq!(err.info().code, "quiz_corpus.missing_dir");
}

#[test]
fn identifiers_restart_per_tier_across_files() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(source.path(), "a.json", &json!({"quizzes": [quiz("x", 5), quiz("y", 2)]}));
    write_json(source.path(), "b.json", &json!({"quizzes": [quiz("x", 5), {"title": "bare"}]}));

    convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    let hard = read_tier(output.path(), Tier::Hard);
    assert_eq!(hard.quizzes.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2]);
    let easy = read_tier(output.path(), Tier::Easy);
    assert_eq!(easy.quizzes.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(easy.quizzes[1].title.as_deref(), Some("bare"));
    assert_eq!(easy.quizzes[1].difficulty, json!(3));
    assert!(easy.quizzes[1].answers.is_empty());
}

#[test]
fn one_failed_tier_does_not_block_the_others() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(source.path(), "v3.json", &json!({"quizzes": [quiz("a", 1), quiz("b", 5)]}));
    let blocked = output
        .path()
        .join(output_file_name("CONVERTED_V3", &stamp(), Tier::VeryEasy));
    fs::create_dir(&blocked).expect("block very-easy path");

    let summary = convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    assert_eq!(summary.write_failures.len(), 1);
    assert_eq!(summary.write_failures[0].error.info().code, "quiz_convert.write");
    assert_eq!(summary.written.len(), 1);
    assert_eq!(summary.written[0].tier, Tier::Hard);
    assert_eq!(read_tier(output.path(), Tier::Hard).total_quizzes, 1);
}

#[test]
fn output_directory_is_created_on_demand() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    let nested = output.path().join("converted").join("v3");
    write_json(source.path(), "v3.json", &json!({"quizzes": [quiz("a", 4)]}));

    let summary = convert_corpus(&options(source.path(), &nested), &stamp()).expect("convert");
    assert_eq!(summary.written.len(), 1);
    assert!(nested
        .join(output_file_name("CONVERTED_V3", &stamp(), Tier::Medium))
        .is_file());
}

#[test]
fn present_non_integral_difficulty_goes_to_medium_verbatim() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(
        source.path(),
        "odd.json",
        &json!({"quizzes": [
            {"title": "float", "difficulty": 4.0},
            {"title": "text", "difficulty": "5"},
            {"title": "null", "difficulty": null},
            {"title": "huge", "difficulty": 18446744073709551615u64},
            {"title": "absent"}
        ]}),
    );

    convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    let medium = read_tier(output.path(), Tier::Medium);
    let written: Vec<_> = medium
        .quizzes
        .iter()
        .map(|q| (q.title.as_deref(), q.difficulty.clone()))
        .collect();
    assert_eq!(
        written,
        vec![
            (Some("float"), json!(4.0)),
            (Some("text"), json!("5")),
            (Some("null"), json!(null)),
            (Some("huge"), json!(18446744073709551615u64)),
        ]
    );
    let easy = read_tier(output.path(), Tier::Easy);
    assert_eq!(easy.quizzes.len(), 1);
    assert_eq!(easy.quizzes[0].difficulty, json!(3));
}

#[test]
fn non_object_answers_are_written_as_blank_answers() {
    let source = tempdir().expect("source");
    let output = tempdir().expect("output");
    write_json(
        source.path(),
        "answers.json",
        &json!({"quizzes": [{"difficulty": 1, "answers": [{"name": "A"}, "B", null]}]}),
    );

    let summary = convert_corpus(&options(source.path(), output.path()), &stamp()).expect("convert");
    assert!(summary.load_failures.is_empty());
    let doc: Value = serde_json::from_slice(
        &fs::read(output.path().join(output_file_name("CONVERTED_V3", &stamp(), Tier::VeryEasy)))
            .expect("read tier"),
    )
    .expect("tier json");
    assert_eq!(
        doc["quizzes"][0]["answers"],
        json!([
            {"name": "A", "nationality": null, "hint": ""},
            {"name": null, "nationality": null, "hint": ""},
            {"name": null, "nationality": null, "hint": ""}
        ])
    );
}
