//! Difficulty tiering and normalized export of quiz corpora.

pub mod classify;
pub mod pipeline;
pub mod sequence;
pub mod transform;
pub mod write;

pub use classify::{classify, classify_quiz};
pub use pipeline::{convert_corpus, ConversionSummary, ConvertOptions};
pub use sequence::sequence;
pub use transform::{normalize, normalize_answer, PendingQuiz, TierGroups};
pub use write::{output_file_name, tier_document, TierWriter, WriteReport, WrittenTier};
