use std::error::Error;
use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use quiz_core::config::PipelineConfig;
use quiz_core::errors::FileFailure;
use quiz_corpus::{load_corpus, FileFilter};
use quiz_stats::{build_report, percentage, CorpusReport, FrequencyTable};
use serde::Serialize;

use super::{print_json, render_failures};

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Directory holding the reporting corpus, overriding `report_dir`.
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// File-name glob, overriding `report_pattern`.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Rows kept for ranked years, nationalities, and players.
    #[arg(long)]
    pub top: Option<usize>,
    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    report: &'a CorpusReport,
    failures: &'a [FileFailure],
}

pub fn run(args: &ReportArgs, config: &PipelineConfig) -> Result<(), Box<dyn Error>> {
    let dir = args.dir.as_ref().unwrap_or(&config.report_dir);
    let pattern = args.pattern.as_deref().unwrap_or(&config.report_pattern);
    let top_n = args.top.unwrap_or(config.top_n);
    let filter = FileFilter::new(pattern)?;
    let load = load_corpus(dir, &filter)?;
    let report = build_report(&load.documents);
    if args.json {
        print_json(&ReportOutput {
            report: &report,
            failures: &load.failures,
        })
    } else {
        let mut out = render_report(&report, top_n);
        render_failures(&mut out, &load.failures);
        print!("{out}");
        Ok(())
    }
}

fn render_table(
    out: &mut String,
    title: &str,
    table: &FrequencyTable<String>,
    limit: Option<usize>,
    total: usize,
) {
    let _ = writeln!(out, "\n{title}");
    for (key, count) in table.most_common(limit) {
        let _ = writeln!(
            out,
            "  {key:<25} {count:>4} ({:5.1}%)",
            percentage(count, total)
        );
    }
}

pub fn render_report(report: &CorpusReport, top_n: usize) -> String {
    let total = report.total_quizzes;
    let mut out = String::new();
    let _ = writeln!(out, "Files analysed: {}", report.files.len());
    for file in &report.files {
        let declared = file
            .declared_total
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {}: {} quizzes (declared {declared})",
            file.file_name, file.parsed
        );
    }
    let _ = writeln!(out, "Total quizzes: {total}");

    render_table(&mut out, "Themes", &report.themes, None, total);
    render_table(&mut out, "Competitions", &report.competitions, None, total);
    render_table(&mut out, "Question types", &report.question_types, None, total);
    render_table(&mut out, "Temporal spans", &report.temporal.spans, None, total);

    let temporal = &report.temporal;
    if let (Some(earliest), Some(latest), Some(median)) =
        (temporal.earliest, temporal.latest, temporal.median)
    {
        let dated = temporal.dated_quizzes();
        let _ = writeln!(out, "\nReference years (top {top_n})");
        for (year, count) in temporal.years.most_common(Some(top_n)) {
            let _ = writeln!(
                out,
                "  {year} {count:>4} ({:5.1}%)",
                percentage(count, dated)
            );
        }
        let _ = writeln!(out, "  range: {earliest} - {latest}, median: {median}");
    }

    render_table(&mut out, "Difficulty levels", &report.difficulty.levels, None, total);
    let _ = writeln!(out, "\nDifficulty scores");
    for (score, count) in report.difficulty.scores.sorted_by_key() {
        let _ = writeln!(
            out,
            "  score {score:>2} {count:>4} ({:5.1}%)",
            percentage(count, total)
        );
    }

    let answers = &report.answers;
    let _ = writeln!(
        out,
        "\nDistinct nationalities: {}",
        answers.nationalities.distinct()
    );
    for (nationality, count) in answers.nationalities.most_common(Some(top_n)) {
        let _ = writeln!(out, "  {nationality:<15} {count:>4}");
    }
    let _ = writeln!(out, "\nDistinct players: {}", answers.players.distinct());
    for (player, count) in answers.players.most_common(Some(top_n)) {
        let _ = writeln!(out, "  {player:<25} {count:>4}");
    }

    let variety = &report.variety;
    let _ = writeln!(
        out,
        "\nVariety: {} themes + {} competitions + {} question types = {} ({})",
        variety.themes, variety.competitions, variety.question_types, variety.score, variety.band
    );
    out
}
