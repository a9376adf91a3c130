//! Job-post acquisition from an uploaded file or pasted text

use crate::error::{Result, MatcherError};
use crate::input::manager::InputManager;
use log::debug;
use std::path::PathBuf;

/// Where the job posting comes from. A file wins over pasted text.
#[derive(Debug, Clone, Default)]
pub struct JobPostSource {
    pub file: Option<PathBuf>,
    pub pasted: Option<String>,
}

impl JobPostSource {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self { file: Some(path.into()), pasted: None }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { file: None, pasted: Some(text.into()) }
    }

    /// Whitespace-only pasted text counts as absent.
    fn pasted_text(&self) -> Option<&str> {
        self.pasted.as_deref().filter(|text| !text.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.pasted_text().is_none()
    }

    /// Fail fast with [`MatcherError::NoJobPost`] when nothing was supplied.
    pub fn ensure_present(&self) -> Result<()> {
        if self.is_empty() {
            return Err(MatcherError::NoJobPost);
        }
        Ok(())
    }

    /// Resolve the job-post text.
    ///
    /// Fails with [`MatcherError::NoJobPost`] before touching the filesystem
    /// when nothing was supplied, and with [`MatcherError::Extraction`] when
    /// a supplied file cannot be turned into text.
    pub async fn acquire(&self, manager: &mut InputManager) -> Result<String> {
        if let Some(path) = &self.file {
            debug!("Acquiring job post from file {}", path.display());
            return manager.extract_text(path).await;
        }

        match self.pasted_text() {
            Some(text) => {
                debug!("Using pasted job post ({} characters)", text.len());
                Ok(text.to_string())
            }
            None => Err(MatcherError::NoJobPost),
        }
    }

    /// Short label for reports
    pub fn describe(&self) -> String {
        match (&self.file, self.pasted_text()) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(_)) => "pasted text".to_string(),
            (None, None) => "none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_input_reports_no_job_post() {
        let mut manager = InputManager::new();
        let source = JobPostSource::default();

        assert!(source.is_empty());
        let err = source.acquire(&mut manager).await.unwrap_err();
        assert!(matches!(err, MatcherError::NoJobPost));
        assert_eq!(err.to_string(), "No job post provided");
    }

    #[test]
    fn test_ensure_present() {
        assert!(matches!(JobPostSource::default().ensure_present(), Err(MatcherError::NoJobPost)));
        assert!(matches!(JobPostSource::from_text(" ").ensure_present(), Err(MatcherError::NoJobPost)));
        assert!(JobPostSource::from_text("Go").ensure_present().is_ok());
        // existence of the file is checked later, during extraction
        assert!(JobPostSource::from_file("nowhere.docx").ensure_present().is_ok());
    }

    #[tokio::test]
    async fn test_unknown_file_type_is_extraction_error() {
        let mut manager = InputManager::new();
        let source = JobPostSource::from_file("tests/fixtures/unsupported.xyz");

        let err = source.acquire(&mut manager).await.unwrap_err();
        assert!(err.is_extraction());
    }

    #[tokio::test]
    async fn test_blank_pasted_text_is_absent() {
        let mut manager = InputManager::new();
        let source = JobPostSource::from_text("  \n\t ");

        let err = source.acquire(&mut manager).await.unwrap_err();
        assert!(matches!(err, MatcherError::NoJobPost));
    }

    #[tokio::test]
    async fn test_pasted_text_used_verbatim() {
        let mut manager = InputManager::new();
        let source = JobPostSource::from_text("Rust & Go engineer");

        let text = source.acquire(&mut manager).await.unwrap();
        assert_eq!(text, "Rust & Go engineer");
        assert_eq!(source.describe(), "pasted text");
    }

    #[tokio::test]
    async fn test_missing_file_is_extraction_not_no_input() {
        let mut manager = InputManager::new();
        let source = JobPostSource {
            file: Some(PathBuf::from("tests/fixtures/missing_job.txt")),
            pasted: Some("fallback text".to_string()),
        };

        let err = source.acquire(&mut manager).await.unwrap_err();
        assert!(err.is_extraction());
    }
}
