//! Comparison session: one job post against one profile, on demand
//!
//! Each run starts by dropping the previous result. A failed run leaves the
//! session with no result at all; there is never a partial one.

use crate::error::{Result, MatcherError};
use crate::input::{InputManager, JobPostSource};
use crate::matching::matcher::{KeywordMatcher, MatchMode, MatchResult};
use crate::matching::profile::Profile;
use log::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonStatus {
    Idle,
    Matched,
    NoJobPost,
    ExtractionFailed(String),
}

#[derive(Debug)]
pub struct ComparisonSession {
    matcher: KeywordMatcher,
    status: ComparisonStatus,
    last_result: Option<MatchResult>,
}

impl ComparisonSession {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            matcher: KeywordMatcher::new(mode),
            status: ComparisonStatus::Idle,
            last_result: None,
        }
    }

    pub fn set_mode(&mut self, mode: MatchMode) {
        self.matcher = KeywordMatcher::new(mode);
    }

    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    pub fn status(&self) -> &ComparisonStatus {
        &self.status
    }

    pub fn last_result(&self) -> Option<&MatchResult> {
        self.last_result.as_ref()
    }

    /// Matched words of the last successful run; empty otherwise.
    pub fn matches(&self) -> &[String] {
        self.last_result
            .as_ref()
            .map(|result| result.matched.as_slice())
            .unwrap_or(&[])
    }

    pub async fn run(
        &mut self,
        source: &JobPostSource,
        profile: &Profile,
        manager: &mut InputManager,
    ) -> Result<MatchResult> {
        self.last_result = None;
        self.status = ComparisonStatus::Idle;

        let text = match source.acquire(manager).await {
            Ok(text) => text,
            Err(MatcherError::NoJobPost) => {
                warn!("Comparison skipped: no job post provided");
                self.status = ComparisonStatus::NoJobPost;
                return Err(MatcherError::NoJobPost);
            }
            Err(e) => {
                warn!("Comparison aborted: {}", e);
                self.status = ComparisonStatus::ExtractionFailed(e.to_string());
                return Err(e);
            }
        };

        let result = self.matcher.match_text(&text, profile);
        info!(
            "Matched {} keywords from {} ({} mode)",
            result.matched.len(),
            source.describe(),
            result.mode
        );

        self.status = ComparisonStatus::Matched;
        self.last_result = Some(result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> Profile {
        Profile::from_json(json!({
            "summary": "Experienced Go developer",
            "skills": ["Go", "SQL"],
        }))
    }

    #[tokio::test]
    async fn test_successful_run_stores_result() {
        let mut session = ComparisonSession::new(MatchMode::FullText);
        let mut manager = InputManager::new();
        let source = JobPostSource::from_text("Looking for a Go developer with SQL and Python skills");

        let result = session.run(&source, &profile(), &mut manager).await.unwrap();

        assert_eq!(result.matched, vec!["developer", "go", "sql"]);
        assert_eq!(session.status(), &ComparisonStatus::Matched);
        assert_eq!(session.matches(), result.matched.as_slice());
    }

    #[tokio::test]
    async fn test_no_job_post_clears_previous_result() {
        let mut session = ComparisonSession::new(MatchMode::SkillsOnly);
        let mut manager = InputManager::new();

        session
            .run(&JobPostSource::from_text("Go and SQL"), &profile(), &mut manager)
            .await
            .unwrap();
        assert_eq!(session.matches().len(), 2);

        let err = session
            .run(&JobPostSource::from_text(""), &profile(), &mut manager)
            .await
            .unwrap_err();

        assert!(matches!(err, MatcherError::NoJobPost));
        assert_eq!(session.status(), &ComparisonStatus::NoJobPost);
        assert!(session.matches().is_empty());
        assert!(session.last_result().is_none());
    }

    #[tokio::test]
    async fn test_extraction_failure_clears_previous_result() {
        let mut session = ComparisonSession::new(MatchMode::FullText);
        let mut manager = InputManager::new();

        session
            .run(&JobPostSource::from_text("Go developer"), &profile(), &mut manager)
            .await
            .unwrap();

        let err = session
            .run(&JobPostSource::from_file("tests/fixtures/absent.pdf"), &profile(), &mut manager)
            .await
            .unwrap_err();

        assert!(err.is_extraction());
        assert!(matches!(session.status(), ComparisonStatus::ExtractionFailed(_)));
        assert!(session.matches().is_empty());
    }

    #[test]
    fn test_mode_switch() {
        let mut session = ComparisonSession::new(MatchMode::FullText);
        session.set_mode(MatchMode::SkillsOnly);
        assert_eq!(session.mode(), MatchMode::SkillsOnly);
        assert_eq!(session.status(), &ComparisonStatus::Idle);
    }
}
