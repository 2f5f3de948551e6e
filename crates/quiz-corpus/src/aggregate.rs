use quiz_core::model::RawQuiz;

use crate::load::LoadedDocument;

/// Flattens the quizzes of every document into one sequence ordered by file
/// and then by position within the file. Duplicate identifiers are kept.
pub fn aggregate(documents: &[LoadedDocument]) -> Vec<&RawQuiz> {
    documents
        .iter()
        .flat_map(|document| document.quizzes.iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use serde_json::json;

    fn document(name: &str, ids: &[i64]) -> LoadedDocument {
        LoadedDocument {
            file_name: name.to_string(),
            path: PathBuf::from(name),
            declared_total: None,
            quizzes: ids
                .iter()
                .map(|id| RawQuiz {
                    id: Some(json!(id)),
                    ..RawQuiz::default()
                })
                .collect(),
            skipped_entries: 0,
        }
    }

    #[test]
    fn preserves_file_then_record_order_without_dedup() {
        let docs = vec![document("a.json", &[1, 2]), document("b.json", &[1, 3])];
        let ids: Vec<_> = aggregate(&docs)
            .into_iter()
            .map(|quiz| quiz.id.clone().expect("id"))
            .collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(1), json!(3)]);
    }

    #[test]
    fn empty_corpus_aggregates_to_nothing() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[document("empty.json", &[])]).is_empty());
    }
}
