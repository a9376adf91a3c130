//! Keyword matching between a job post and a profile

use crate::matching::profile::Profile;
use crate::matching::vocabulary::{self, Vocabulary};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which part of the profile the job post is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Every word of the profile, stop words removed
    #[default]
    FullText,
    /// The `skills` list, one lowercased label per skill
    SkillsOnly,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::FullText => write!(f, "full-text"),
            MatchMode::SkillsOnly => write!(f, "skills-only"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full-text" | "full" | "text" => Ok(MatchMode::FullText),
            "skills-only" | "skills" => Ok(MatchMode::SkillsOnly),
            _ => Err(format!("Invalid match mode: {}. Supported: full-text, skills-only", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub mode: MatchMode,
    /// Job-post words found in the profile vocabulary, sorted
    pub matched: Vec<String>,
    /// Job-post words absent from the profile vocabulary, sorted
    pub missing: Vec<String>,
    pub job_token_count: usize,
    pub profile_vocabulary_size: usize,
}

impl MatchResult {
    pub fn empty(mode: MatchMode) -> Self {
        Self {
            mode,
            matched: Vec::new(),
            missing: Vec::new(),
            job_token_count: 0,
            profile_vocabulary_size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.matched.iter().any(|m| m == word)
    }

    /// Share of distinct job-post words found in the profile (0.0 - 1.0)
    pub fn coverage(&self) -> f32 {
        if self.job_token_count == 0 {
            0.0
        } else {
            self.matched.len() as f32 / self.job_token_count as f32
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher {
    mode: MatchMode,
}

impl KeywordMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn profile_vocabulary(&self, profile: &Profile) -> Vocabulary {
        match self.mode {
            MatchMode::FullText => vocabulary::full_text_vocabulary(profile),
            MatchMode::SkillsOnly => vocabulary::skills_vocabulary(profile),
        }
    }

    /// Filter the job-post words by membership in the profile vocabulary.
    pub fn compare(&self, job_post: &Vocabulary, profile: &Vocabulary) -> MatchResult {
        let matched = job_post.intersection(profile);
        let missing = job_post.difference(profile);

        debug!(
            "{} mode: {} of {} job-post words matched a vocabulary of {}",
            self.mode,
            matched.len(),
            job_post.len(),
            profile.len()
        );

        MatchResult {
            mode: self.mode,
            matched: matched.sorted(),
            missing: missing.sorted(),
            job_token_count: job_post.len(),
            profile_vocabulary_size: profile.len(),
        }
    }

    pub fn match_text(&self, job_post_text: &str, profile: &Profile) -> MatchResult {
        let job_post = vocabulary::job_post_vocabulary(job_post_text);
        let profile_vocab = self.profile_vocabulary(profile);
        self.compare(&job_post, &profile_vocab)
    }
}
