use std::fs;
use std::path::{Path, PathBuf};

use quiz_core::errors::{ErrorInfo, FileFailure, QuizError};
use quiz_core::model::{QuizDocument, RawQuiz};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::discover::{discover, FileFilter};

/// A source file that parsed successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub file_name: String,
    pub path: PathBuf,
    /// `total_quizzes` as declared inside the file, if any.
    pub declared_total: Option<u64>,
    pub quizzes: Vec<RawQuiz>,
    /// Entries of the `quizzes` list that were not objects.
    pub skipped_entries: usize,
}

impl LoadedDocument {
    /// Declared and parsed counts when the file declares a total that
    /// disagrees with what was parsed.
    pub fn count_mismatch(&self) -> Option<CountMismatch> {
        let declared = self.declared_total?;
        let parsed = self.quizzes.len();
        if declared == parsed as u64 {
            None
        } else {
            Some(CountMismatch { declared, parsed })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    pub declared: u64,
    pub parsed: usize,
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads and parses one source file. Either every quiz entry of the file is
/// returned or the file fails as a whole.
pub fn load_document(path: &Path) -> Result<LoadedDocument, QuizError> {
    let bytes = fs::read(path).map_err(|err| {
        QuizError::Corpus(
            ErrorInfo::new("quiz_corpus.read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let document = QuizDocument::from_slice(&bytes).map_err(|err| match err {
        QuizError::Serde(info) => {
            QuizError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })?;
    let declared_total = document.total_quizzes;
    let (quizzes, skipped_entries) = document.into_records();
    Ok(LoadedDocument {
        file_name: file_name_of(path),
        path: path.to_path_buf(),
        declared_total,
        quizzes,
        skipped_entries,
    })
}

/// Outcome of loading every matching file of a corpus directory.
#[derive(Debug, Default)]
pub struct CorpusLoad {
    pub documents: Vec<LoadedDocument>,
    pub failures: Vec<FileFailure>,
}

impl CorpusLoad {
    /// Folds per-file outcomes, keeping file order: successes become
    /// documents and errors become failures.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<LoadedDocument, QuizError>)>,
    {
        let mut load = CorpusLoad::default();
        for (file_name, outcome) in outcomes {
            match outcome {
                Ok(document) => load.documents.push(document),
                Err(error) => load.failures.push(FileFailure::new(file_name, error)),
            }
        }
        load
    }

    /// Number of quiz records across all loaded documents.
    pub fn total_quizzes(&self) -> usize {
        self.documents.iter().map(|doc| doc.quizzes.len()).sum()
    }
}

/// Discovers the files of `dir` matching `filter` and loads each one.
///
/// Only a missing directory (or an invalid filter upstream) is an error here.
/// A file that cannot be read or parsed is logged, recorded in
/// [`CorpusLoad::failures`], and the batch continues.
pub fn load_corpus(dir: &Path, filter: &FileFilter) -> Result<CorpusLoad, QuizError> {
    let discovery = discover(dir, filter)?;
    info!(
        dir = %dir.display(),
        pattern = filter.pattern(),
        files = discovery.files.len(),
        "discovered corpus files"
    );
    let outcomes = discovery
        .files
        .iter()
        .map(|path| (file_name_of(path), load_document(path)));
    let mut load = CorpusLoad::from_outcomes(outcomes);
    for failure in &load.failures {
        warn!(file = %failure.file_name, error = %failure.error, "failed to load quiz file");
    }
    for document in &load.documents {
        info!(
            file = %document.file_name,
            declared = ?document.declared_total,
            parsed = document.quizzes.len(),
            "loaded quiz file"
        );
        if document.skipped_entries > 0 {
            debug!(
                file = %document.file_name,
                skipped = document.skipped_entries,
                "skipped non-object quiz entries"
            );
        }
        if let Some(mismatch) = document.count_mismatch() {
            warn!(
                file = %document.file_name,
                declared = mismatch.declared,
                parsed = mismatch.parsed,
                "declared quiz count differs from parsed count"
            );
        }
    }
    load.failures.splice(0..0, discovery.failures);
    Ok(load)
}
