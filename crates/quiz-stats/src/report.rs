use std::fmt;

use quiz_core::model::RawQuiz;
use quiz_corpus::{aggregate, LoadedDocument};
use serde::Serialize;

use crate::frequency::FrequencyTable;

/// Theme recorded for quizzes that carry none.
pub const UNKNOWN_THEME: &str = "Unknown";

/// Qualitative reading of the variety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarietyBand {
    Low,
    Medium,
    Good,
}

impl VarietyBand {
    /// `low` below 30, `medium` below 60, `good` from 60 up.
    pub fn from_score(score: usize) -> Self {
        if score < 30 {
            VarietyBand::Low
        } else if score < 60 {
            VarietyBand::Medium
        } else {
            VarietyBand::Good
        }
    }
}

impl fmt::Display for VarietyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VarietyBand::Low => "low",
            VarietyBand::Medium => "medium",
            VarietyBand::Good => "good",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub file_name: String,
    pub declared_total: Option<u64>,
    pub parsed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalSummary {
    pub spans: FrequencyTable<String>,
    pub years: FrequencyTable<i64>,
    pub earliest: Option<i64>,
    pub latest: Option<i64>,
    /// Element at index `len / 2` of the sorted reference years.
    pub median: Option<i64>,
}

impl TemporalSummary {
    /// Number of quizzes carrying a reference year.
    pub fn dated_quizzes(&self) -> usize {
        self.years.total()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultySummary {
    pub levels: FrequencyTable<String>,
    pub scores: FrequencyTable<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerVariety {
    pub nationalities: FrequencyTable<String>,
    pub players: FrequencyTable<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarietySummary {
    pub themes: usize,
    pub competitions: usize,
    pub question_types: usize,
    pub score: usize,
    pub band: VarietyBand,
}

impl VarietySummary {
    pub fn new(themes: usize, competitions: usize, question_types: usize) -> Self {
        let score = themes + competitions + question_types;
        Self {
            themes,
            competitions,
            question_types,
            score,
            band: VarietyBand::from_score(score),
        }
    }
}

/// Descriptive statistics over a loaded reporting corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusReport {
    pub files: Vec<FileEntry>,
    pub total_quizzes: usize,
    pub themes: FrequencyTable<String>,
    pub competitions: FrequencyTable<String>,
    pub question_types: FrequencyTable<String>,
    pub temporal: TemporalSummary,
    pub difficulty: DifficultySummary,
    pub answers: AnswerVariety,
    pub variety: VarietySummary,
}

/// Text that carries a value; empty strings count as missing.
fn filled(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|text| !text.is_empty()).cloned()
}

/// Numbers that carry a value; zero counts as missing.
fn nonzero(value: Option<i64>) -> Option<i64> {
    value.filter(|number| *number != 0)
}

pub fn theme_distribution(quizzes: &[&RawQuiz]) -> FrequencyTable<String> {
    quizzes
        .iter()
        .map(|quiz| {
            quiz.theme
                .clone()
                .unwrap_or_else(|| UNKNOWN_THEME.to_string())
        })
        .collect()
}

pub fn competition_distribution(quizzes: &[&RawQuiz]) -> FrequencyTable<String> {
    quizzes
        .iter()
        .filter_map(|quiz| filled(&quiz.context()?.competition))
        .collect()
}

pub fn question_type_distribution(quizzes: &[&RawQuiz]) -> FrequencyTable<String> {
    quizzes
        .iter()
        .filter_map(|quiz| filled(&quiz.context()?.question_type))
        .collect()
}

pub fn temporal_summary(quizzes: &[&RawQuiz]) -> TemporalSummary {
    let spans = quizzes
        .iter()
        .filter_map(|quiz| filled(&quiz.context()?.temporal_span))
        .collect();
    let mut sorted: Vec<i64> = quizzes
        .iter()
        .filter_map(|quiz| nonzero(quiz.context()?.reference_year))
        .collect();
    let years = sorted.iter().copied().collect();
    sorted.sort_unstable();
    TemporalSummary {
        spans,
        years,
        earliest: sorted.first().copied(),
        latest: sorted.last().copied(),
        median: sorted.get(sorted.len() / 2).copied(),
    }
}

pub fn difficulty_summary(quizzes: &[&RawQuiz]) -> DifficultySummary {
    let details = || quizzes.iter().filter_map(|quiz| quiz.detail());
    DifficultySummary {
        levels: details().filter_map(|detail| filled(&detail.level)).collect(),
        scores: details().filter_map(|detail| nonzero(detail.score)).collect(),
    }
}

pub fn answer_variety(quizzes: &[&RawQuiz]) -> AnswerVariety {
    let answers = || quizzes.iter().flat_map(|quiz| quiz.answers.iter());
    AnswerVariety {
        nationalities: answers()
            .filter_map(|answer| filled(&answer.nationality))
            .collect(),
        players: answers().filter_map(|answer| filled(&answer.name)).collect(),
    }
}

/// Builds the full report over every quiz of the loaded documents.
pub fn build_report(documents: &[LoadedDocument]) -> CorpusReport {
    let quizzes = aggregate(documents);
    let files = documents
        .iter()
        .map(|document| FileEntry {
            file_name: document.file_name.clone(),
            declared_total: document.declared_total,
            parsed: document.quizzes.len(),
        })
        .collect();
    let themes = theme_distribution(&quizzes);
    let competitions = competition_distribution(&quizzes);
    let question_types = question_type_distribution(&quizzes);
    let variety = VarietySummary::new(
        themes.distinct(),
        competitions.distinct(),
        question_types.distinct(),
    );
    CorpusReport {
        files,
        total_quizzes: quizzes.len(),
        temporal: temporal_summary(&quizzes),
        difficulty: difficulty_summary(&quizzes),
        answers: answer_variety(&quizzes),
        themes,
        competitions,
        question_types,
        variety,
    }
}
