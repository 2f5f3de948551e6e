use std::error::Error;
use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use quiz_convert::{convert_corpus, ConversionSummary, ConvertOptions};
use quiz_core::config::PipelineConfig;
use quiz_core::provenance::RunStamp;

use super::{print_json, render_failures};

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Corpus directory, overriding `source_dir`.
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// File-name glob, overriding `source_pattern`.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Directory receiving the tier files, overriding `output_dir`.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Leading component of tier file names, overriding `output_prefix`.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Emit the run summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl ConvertArgs {
    fn options(&self, config: &PipelineConfig) -> ConvertOptions {
        let mut opts = ConvertOptions::from(config);
        if let Some(source) = &self.source {
            opts.source_dir = source.clone();
        }
        if let Some(pattern) = &self.pattern {
            opts.source_pattern = pattern.clone();
        }
        if let Some(output) = &self.output {
            opts.output_dir = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            opts.output_prefix = prefix.clone();
        }
        opts
    }
}

pub fn run(
    args: &ConvertArgs,
    config: &PipelineConfig,
    stamp: &RunStamp,
) -> Result<(), Box<dyn Error>> {
    let summary = convert_corpus(&args.options(config), stamp)?;
    if args.json {
        print_json(&summary)
    } else {
        print!("{}", render_summary(&summary));
        Ok(())
    }
}

pub fn render_summary(summary: &ConversionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Converted {} quizzes from {} file(s)",
        summary.quizzes_loaded, summary.files_loaded
    );
    for written in &summary.written {
        let _ = writeln!(
            out,
            "  {:<10} {:>5} quizzes -> {}",
            written.tier.as_str(),
            written.count,
            written.path.display()
        );
    }
    if summary.written.is_empty() {
        let _ = writeln!(out, "  no tier files written");
    }
    render_failures(&mut out, &summary.load_failures);
    render_failures(&mut out, &summary.write_failures);
    out
}
