use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use quiz_core::errors::{ErrorInfo, FileFailure, QuizError};
use tracing::warn;
use walkdir::WalkDir;

fn corpus_error(code: &str, message: impl std::fmt::Display) -> QuizError {
    QuizError::Corpus(ErrorInfo::new(code, message.to_string()))
}

/// File-name glob selecting which files of a directory belong to a corpus.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pattern: String,
    matcher: GlobMatcher,
}

impl FileFilter {
    /// Compiles a glob such as `*.json` or `REBALANCED_*.json`.
    pub fn new(pattern: &str) -> Result<Self, QuizError> {
        let glob = Glob::new(pattern).map_err(|err| {
            QuizError::Corpus(
                ErrorInfo::new("quiz_corpus.glob", err.to_string()).with_context("pattern", pattern),
            )
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

/// Files of one directory matching a filter, plus entries that could not be
/// inspected.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Lists the regular files directly inside `dir` whose names match `filter`,
/// sorted by file name. A missing or non-directory `dir` is an error; an
/// unreadable entry is recorded and skipped.
pub fn discover(dir: &Path, filter: &FileFilter) -> Result<Discovery, QuizError> {
    if !dir.is_dir() {
        return Err(QuizError::Corpus(
            ErrorInfo::new("quiz_corpus.missing_dir", "source directory not found")
                .with_context("path", dir.display().to_string()),
        ));
    }
    let mut discovery = Discovery::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let name = err
                    .path()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.display().to_string());
                let error = corpus_error("quiz_corpus.walk", err);
                warn!(file = %name, error = %error, "failed to inspect entry");
                discovery.failures.push(FileFailure::new(name, error));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if filter.matches(&entry.file_name().to_string_lossy()) {
            discovery.files.push(entry.into_path());
        }
    }
    Ok(discovery)
}
