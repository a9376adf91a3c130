//! Error handling for the portfolio matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("No job post provided")]
    NoJobPost,

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Profile parse error: {0}")]
    ProfileParse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl MatcherError {
    /// True for failures raised while turning a document into text
    pub fn is_extraction(&self) -> bool {
        matches!(self, MatcherError::Extraction(_))
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;

/// Convert anyhow errors raised by the REST client
impl From<anyhow::Error> for MatcherError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the whole context chain on one line
        MatcherError::Network(format!("{:#}", err))
    }
}
