//! Run-wide timestamp shared by every artifact of one execution.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Format of the file-name token, e.g. `20240131_174502`.
pub const TOKEN_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp captured once at run start and threaded into every writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStamp {
    /// Compact token embedded in output file names.
    pub token: String,
    /// RFC 3339 instant recorded inside output documents.
    pub generated_at: String,
}

impl RunStamp {
    /// Captures the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// Builds a stamp from an explicit instant.
    pub fn at<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            token: instant.format(TOKEN_FORMAT).to_string(),
            generated_at: instant.to_rfc3339(),
        }
    }

    /// Builds a stamp from literal parts, mainly for deterministic tests.
    pub fn fixed(token: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            generated_at: generated_at.into(),
        }
    }
}
