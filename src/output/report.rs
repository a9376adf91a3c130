//! Match report handed to the formatters

use crate::matching::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub result: MatchResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Uploaded file path or "pasted text"
    pub job_post_source: String,
    /// Profile file path or remote user id
    pub profile_source: String,
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
}

impl MatchReport {
    pub fn new(result: MatchResult, job_post_source: impl Into<String>, profile_source: impl Into<String>) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                job_post_source: job_post_source.into(),
                profile_source: profile_source.into(),
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn coverage_percentage(&self) -> u8 {
        (self.result.coverage() * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
