//! Raw quiz documents as found on disk and the normalized records written
//! back out.
//!
//! Field defaults, stated once:
//! - a quiz without a `difficulty` key has level [`DEFAULT_DIFFICULTY`];
//!   a `difficulty` that is present is kept verbatim whatever its shape;
//! - a non-object answer entry reads as an answer with every field absent;
//! - an answer without `hint` is normalized to an empty hint;
//! - every other missing or mistyped field stays absent (`null` on output).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ErrorInfo, QuizError};
use crate::lenient;

/// Level assumed for a quiz without a `difficulty` key.
pub const DEFAULT_DIFFICULTY: i64 = 3;

/// Top-level shape of a quiz source file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuizDocument {
    /// Count declared by the producer of the file, used for cross-checks only.
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_quizzes: Option<u64>,
    /// Quiz entries exactly as stored; see [`QuizDocument::into_records`].
    #[serde(default, deserialize_with = "lenient::list")]
    pub quizzes: Vec<Value>,
}

impl QuizDocument {
    /// Parses a document from raw bytes. The root must be a JSON object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, QuizError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| QuizError::Serde(ErrorInfo::new("quiz_core.parse", err.to_string())))?;
        if !value.is_object() {
            return Err(QuizError::Serde(
                ErrorInfo::new("quiz_core.document_root", "document root is not an object")
                    .with_hint("expected an object with a `quizzes` list"),
            ));
        }
        Self::deserialize(value)
            .map_err(|err| QuizError::Serde(ErrorInfo::new("quiz_core.parse", err.to_string())))
    }

    /// Splits the entries into quiz records, returning them with the number
    /// of entries that were not objects and therefore skipped.
    pub fn into_records(self) -> (Vec<RawQuiz>, usize) {
        let total = self.quizzes.len();
        let records: Vec<RawQuiz> = self
            .quizzes
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|entry| RawQuiz::deserialize(entry).ok())
            .collect();
        let skipped = total - records.len();
        (records, skipped)
    }
}

/// A quiz record as read from a source file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawQuiz {
    /// Source identifier, kept opaque.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "lenient::difficulty")]
    pub difficulty: Option<RawDifficulty>,
    #[serde(default, deserialize_with = "lenient::answers")]
    pub answers: Vec<RawAnswer>,
}

impl RawQuiz {
    /// Integral difficulty level when the record carries one.
    pub fn level(&self) -> Option<i64> {
        self.difficulty.as_ref()?.level()
    }

    /// Level used for tiering: [`DEFAULT_DIFFICULTY`] when the key is absent,
    /// `None` when the stored value is not an integral number.
    pub fn effective_level(&self) -> Option<i64> {
        match &self.difficulty {
            None => Some(DEFAULT_DIFFICULTY),
            Some(difficulty) => difficulty.level(),
        }
    }

    /// Difficulty as it should be written back out.
    pub fn difficulty_value(&self) -> Value {
        match &self.difficulty {
            Some(difficulty) => difficulty.raw().clone(),
            None => Value::from(DEFAULT_DIFFICULTY),
        }
    }

    /// Structured difficulty block, present on reporting corpora.
    pub fn detail(&self) -> Option<&DifficultyDetail> {
        self.difficulty.as_ref()?.detail()
    }

    /// Competition/question metadata nested under the difficulty block.
    pub fn context(&self) -> Option<&DifficultyContext> {
        self.detail().map(|detail| &detail.details)
    }
}

/// A `difficulty` value exactly as stored, with the two readings corpora use:
/// a plain level (normally 1 through 6) or a scored block with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDifficulty {
    raw: Value,
    level: Option<i64>,
    detail: Option<DifficultyDetail>,
}

impl RawDifficulty {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The value as a level when it is an integral number in `i64` range,
    /// including floats such as `4.0`.
    pub fn level(&self) -> Option<i64> {
        self.level
    }

    pub fn detail(&self) -> Option<&DifficultyDetail> {
        self.detail.as_ref()
    }
}

fn integral_level(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|float| {
                float.fract() == 0.0 && *float >= i64::MIN as f64 && *float < i64::MAX as f64
            })
            .map(|float| float as i64)
    })
}

impl From<Value> for RawDifficulty {
    fn from(raw: Value) -> Self {
        let level = integral_level(&raw);
        let detail = if raw.is_object() {
            DifficultyDetail::deserialize(raw.clone()).ok()
        } else {
            None
        };
        Self { raw, level, detail }
    }
}

impl From<i64> for RawDifficulty {
    fn from(level: i64) -> Self {
        Self::from(Value::from(level))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DifficultyDetail {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub score: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient::context")]
    pub details: DifficultyContext,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DifficultyContext {
    #[serde(default, deserialize_with = "lenient::text")]
    pub competition: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub question_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub temporal_span: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub reference_year: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAnswer {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hint: Option<String>,
}

/// Named difficulty bucket used to partition converted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Tier {
    /// Every tier, easiest first.
    pub const ALL: [Tier; 5] = [
        Tier::VeryEasy,
        Tier::Easy,
        Tier::Medium,
        Tier::Hard,
        Tier::VeryHard,
    ];

    /// Name used in file names and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::VeryEasy => "very-easy",
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
            Tier::VeryHard => "very-hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer as written to converted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAnswer {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub hint: String,
}

/// Quiz as written to converted output. `id` is tier-local and 1-based;
/// `difficulty` is the source value, never the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuiz {
    pub id: u64,
    pub title: Option<String>,
    pub theme: Option<String>,
    pub difficulty: Value,
    pub answers: Vec<NormalizedAnswer>,
}

/// One converted output file: every quiz of a single tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDocument {
    pub generated_at: String,
    pub total_quizzes: usize,
    pub quizzes: Vec<NormalizedQuiz>,
}
