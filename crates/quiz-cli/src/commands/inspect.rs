use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use quiz_core::config::PipelineConfig;
use quiz_core::errors::FileFailure;
use quiz_corpus::{load_corpus, FileFilter};
use quiz_stats::{inspect_structure, StructureSummary};
use serde::Serialize;

use super::{print_json, render_failures};

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Corpus directory, overriding `source_dir`.
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// File-name glob, overriding `source_pattern`.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectOutput<'a> {
    summary: &'a StructureSummary,
    failures: &'a [FileFailure],
}

pub fn run(args: &InspectArgs, config: &PipelineConfig) -> Result<(), Box<dyn Error>> {
    let dir = args.source.as_ref().unwrap_or(&config.source_dir);
    let pattern = args.pattern.as_deref().unwrap_or(&config.source_pattern);
    let filter = FileFilter::new(pattern)?;
    let load = load_corpus(dir, &filter)?;
    let summary = inspect_structure(&load.documents);
    if args.json {
        print_json(&InspectOutput {
            summary: &summary,
            failures: &load.failures,
        })
    } else {
        print!("{}", render_structure(dir, &summary, &load.failures));
        Ok(())
    }
}

pub fn render_structure(dir: &Path, summary: &StructureSummary, failures: &[FileFailure]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} file(s) loaded from {}",
        summary.files.len(),
        dir.display()
    );
    for file in &summary.files {
        let _ = writeln!(out, "  {}: {} quizzes", file.file_name, file.quizzes);
    }
    let _ = writeln!(out, "\nTotal quizzes: {}", summary.total_quizzes);
    let _ = writeln!(out, "\nBy difficulty:");
    for (level, count) in summary.by_difficulty.sorted_by_key() {
        let _ = writeln!(out, "  level {level}: {count} quizzes");
    }
    let _ = writeln!(out, "\nBy theme:");
    for (theme, count) in summary.by_theme.most_common(None) {
        let _ = writeln!(out, "  {theme}: {count} quizzes");
    }
    render_failures(&mut out, failures);
    out
}
