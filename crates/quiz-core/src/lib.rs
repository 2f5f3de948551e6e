#![doc = "Core record types, errors, and configuration shared by the quizkit crates."]

pub mod config;
pub mod errors;
mod lenient;
pub mod model;
pub mod provenance;
pub mod serde;

pub use config::PipelineConfig;
pub use errors::{ErrorInfo, FileFailure, QuizError};
pub use model::{
    DifficultyContext, DifficultyDetail, NormalizedAnswer, NormalizedQuiz, QuizDocument,
    RawAnswer, RawDifficulty, RawQuiz, Tier, TierDocument, DEFAULT_DIFFICULTY,
};
pub use provenance::RunStamp;
pub use crate::serde::{to_canonical_json_bytes, to_pretty_json_bytes};
