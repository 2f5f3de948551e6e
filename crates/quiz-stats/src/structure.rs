use quiz_corpus::{aggregate, LoadedDocument};
use serde::Serialize;

use crate::frequency::FrequencyTable;
use crate::report::UNKNOWN_THEME;

/// Level recorded for quizzes without an integer difficulty.
pub const UNLEVELLED: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub file_name: String,
    pub quizzes: usize,
}

/// Shape of a conversion corpus before it is converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSummary {
    pub files: Vec<FileCount>,
    pub total_quizzes: usize,
    /// Raw integer difficulty counts; read with `sorted_by_key`.
    pub by_difficulty: FrequencyTable<i64>,
    pub by_theme: FrequencyTable<String>,
}

pub fn inspect_structure(documents: &[LoadedDocument]) -> StructureSummary {
    let quizzes = aggregate(documents);
    StructureSummary {
        files: documents
            .iter()
            .map(|document| FileCount {
                file_name: document.file_name.clone(),
                quizzes: document.quizzes.len(),
            })
            .collect(),
        total_quizzes: quizzes.len(),
        by_difficulty: quizzes
            .iter()
            .map(|quiz| quiz.level().unwrap_or(UNLEVELLED))
            .collect(),
        by_theme: quizzes
            .iter()
            .map(|quiz| {
                quiz.theme
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_THEME.to_string())
            })
            .collect(),
    }
}
