use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use quiz_core::errors::{ErrorInfo, FileFailure, QuizError};
use quiz_core::model::{NormalizedQuiz, Tier, TierDocument};
use quiz_core::provenance::RunStamp;
use quiz_core::serde::to_pretty_json_bytes;
use serde::Serialize;
use tracing::{info, warn};

fn output_error(code: &str, path: &Path, err: impl ToString) -> QuizError {
    QuizError::Output(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// `<prefix>_<token>_<tier>.json`, identical token for every tier of a run.
pub fn output_file_name(prefix: &str, stamp: &RunStamp, tier: Tier) -> String {
    format!("{prefix}_{}_{}.json", stamp.token, tier.as_str())
}

pub fn tier_document(stamp: &RunStamp, quizzes: Vec<NormalizedQuiz>) -> TierDocument {
    TierDocument {
        generated_at: stamp.generated_at.clone(),
        total_quizzes: quizzes.len(),
        quizzes,
    }
}

/// A tier file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenTier {
    pub tier: Tier,
    pub path: PathBuf,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenTier>,
    pub failures: Vec<FileFailure>,
}

/// Destination of the tier files of one run.
#[derive(Debug, Clone)]
pub struct TierWriter<'a> {
    out_dir: &'a Path,
    prefix: &'a str,
    stamp: &'a RunStamp,
}

impl<'a> TierWriter<'a> {
    pub fn new(out_dir: &'a Path, prefix: &'a str, stamp: &'a RunStamp) -> Self {
        Self {
            out_dir,
            prefix,
            stamp,
        }
    }

    pub fn path_for(&self, tier: Tier) -> PathBuf {
        self.out_dir
            .join(output_file_name(self.prefix, self.stamp, tier))
    }

    /// Serialises one tier's finalized group to its own file.
    pub fn write_tier(
        &self,
        tier: Tier,
        quizzes: Vec<NormalizedQuiz>,
    ) -> Result<WrittenTier, QuizError> {
        fs::create_dir_all(self.out_dir)
            .map_err(|err| output_error("quiz_convert.output_dir", self.out_dir, err))?;
        let path = self.path_for(tier);
        let document = tier_document(self.stamp, quizzes);
        let bytes = to_pretty_json_bytes(&document)?;
        fs::write(&path, bytes).map_err(|err| output_error("quiz_convert.write", &path, err))?;
        Ok(WrittenTier {
            tier,
            path,
            count: document.total_quizzes,
        })
    }

    /// Writes every non-empty tier. A failed tier is recorded and the
    /// remaining tiers are still attempted.
    pub fn write_all(&self, tiers: BTreeMap<Tier, Vec<NormalizedQuiz>>) -> WriteReport {
        let mut report = WriteReport::default();
        for (tier, quizzes) in tiers {
            if quizzes.is_empty() {
                continue;
            }
            let file_name = output_file_name(self.prefix, self.stamp, tier);
            match self.write_tier(tier, quizzes) {
                Ok(written) => {
                    info!(
                        tier = %written.tier,
                        path = %written.path.display(),
                        count = written.count,
                        "wrote tier file"
                    );
                    report.written.push(written);
                }
                Err(error) => {
                    warn!(tier = %tier, error = %error, "failed to write tier file");
                    report.failures.push(FileFailure::new(file_name, error));
                }
            }
        }
        report
    }
}
