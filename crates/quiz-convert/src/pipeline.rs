use std::path::PathBuf;

use quiz_core::config::PipelineConfig;
use quiz_core::errors::{FileFailure, QuizError};
use quiz_core::provenance::RunStamp;
use quiz_corpus::{aggregate, load_corpus, FileFilter};
use serde::Serialize;
use tracing::info;

use crate::transform::TierGroups;
use crate::write::{TierWriter, WrittenTier};

/// Inputs of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub source_dir: PathBuf,
    pub source_pattern: String,
    pub output_dir: PathBuf,
    pub output_prefix: String,
}

impl From<&PipelineConfig> for ConvertOptions {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            source_dir: config.source_dir.clone(),
            source_pattern: config.source_pattern.clone(),
            output_dir: config.output_dir.clone(),
            output_prefix: config.output_prefix.clone(),
        }
    }
}

/// What one conversion run read and wrote.
#[derive(Debug, Default, Serialize)]
pub struct ConversionSummary {
    pub files_loaded: usize,
    pub quizzes_loaded: usize,
    pub load_failures: Vec<FileFailure>,
    pub written: Vec<WrittenTier>,
    pub write_failures: Vec<FileFailure>,
}

impl ConversionSummary {
    pub fn quizzes_written(&self) -> usize {
        self.written.iter().map(|tier| tier.count).sum()
    }
}

/// Loads the source corpus, routes every quiz to its tier, renumbers each
/// tier, and writes one file per non-empty tier stamped with `stamp`.
///
/// Fails only when the source directory is missing or the pattern is not a
/// valid glob; per-file problems are reported in the summary.
pub fn convert_corpus(
    opts: &ConvertOptions,
    stamp: &RunStamp,
) -> Result<ConversionSummary, QuizError> {
    let filter = FileFilter::new(&opts.source_pattern)?;
    let load = load_corpus(&opts.source_dir, &filter)?;
    let groups = TierGroups::from_quizzes(aggregate(&load.documents));
    info!(
        quizzes = groups.total(),
        tiers = groups.counts().len(),
        "grouped quizzes by tier"
    );
    let writer = TierWriter::new(&opts.output_dir, &opts.output_prefix, stamp);
    let report = writer.write_all(groups.into_sequenced());
    Ok(ConversionSummary {
        files_loaded: load.documents.len(),
        quizzes_loaded: load.total_quizzes(),
        load_failures: load.failures,
        written: report.written,
        write_failures: report.failures,
    })
}
