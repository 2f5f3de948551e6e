//! Frequency tables, variety scoring, and structure summaries over quiz
//! corpora. Reporting only: nothing here writes files.

pub mod frequency;
pub mod report;
pub mod structure;

pub use frequency::{percentage, FrequencyTable};
pub use report::{
    answer_variety, build_report, competition_distribution, difficulty_summary,
    question_type_distribution, temporal_summary, theme_distribution, AnswerVariety,
    CorpusReport, DifficultySummary, FileEntry, TemporalSummary, VarietyBand, VarietySummary,
    UNKNOWN_THEME,
};
pub use structure::{inspect_structure, FileCount, StructureSummary, UNLEVELLED};
