//! Vocabulary sets for job posts and profiles

use crate::matching::profile::{Profile, ProfileVisitor};
use crate::matching::tokenizer;
use std::collections::HashSet;

/// A set of normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words of `self` that also appear in `other`.
    pub fn intersection(&self, other: &Vocabulary) -> Vocabulary {
        self.iter().filter(|word| other.contains(word)).collect()
    }

    /// Words of `self` absent from `other`.
    pub fn difference(&self, other: &Vocabulary) -> Vocabulary {
        self.iter().filter(|word| !other.contains(word)).collect()
    }

    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Vocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

/// Job-post words. Stop words are kept.
pub fn job_post_vocabulary(text: &str) -> Vocabulary {
    tokenizer::tokenize(text).into_iter().collect()
}

struct FullTextCollector {
    vocabulary: Vocabulary,
}

impl ProfileVisitor for FullTextCollector {
    fn visit_text(&mut self, text: &str) {
        self.vocabulary.extend(tokenizer::content_tokens(text));
    }
}

/// Every word in every string of the profile, minus stop words.
pub fn full_text_vocabulary(profile: &Profile) -> Vocabulary {
    let mut collector = FullTextCollector { vocabulary: Vocabulary::new() };
    profile.walk(&mut collector);
    collector.vocabulary
}

/// Lowercased skill labels, one member per skill, multi-word labels intact.
pub fn skills_vocabulary(profile: &Profile) -> Vocabulary {
    profile
        .skills()
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::tokenizer::STOP_WORDS;
    use serde_json::json;

    #[test]
    fn test_job_post_keeps_stop_words() {
        let vocab = job_post_vocabulary("Looking for a Go developer with SQL and Python skills");
        let expected: Vocabulary = [
            "looking", "for", "a", "go", "developer", "with", "sql", "and", "python", "skills",
        ]
        .into_iter()
        .collect();
        assert_eq!(vocab, expected);
    }

    #[test]
    fn test_full_text_excludes_every_stop_word() {
        let profile = Profile::from_json(json!({
            "summary": STOP_WORDS.join(" "),
            "projects": [{"description": "The app is built with Rust and is using Tokio"}],
        }));

        let vocab = full_text_vocabulary(&profile);
        for stop_word in STOP_WORDS {
            assert!(!vocab.contains(stop_word), "{} leaked into vocabulary", stop_word);
        }
        assert!(vocab.contains("app"));
        assert!(vocab.contains("built"));
        assert!(vocab.contains("tokio"));
    }

    #[test]
    fn test_full_text_walks_nested_values() {
        let profile = Profile::from_json(json!({
            "summary": "Experienced Go developer",
            "skills": ["Go", "SQL"],
            "education": [{"school": "State University", "year": 2012}],
        }));

        let vocab = full_text_vocabulary(&profile);
        let expected: Vocabulary = ["experienced", "go", "developer", "sql", "state", "university"]
            .into_iter()
            .collect();
        assert_eq!(vocab, expected);
    }

    #[test]
    fn test_skills_are_not_split() {
        let profile = Profile::from_json(json!({"skills": ["Project Management", "C++", "Go"]}));
        let vocab = skills_vocabulary(&profile);

        assert!(vocab.contains("project management"));
        assert!(!vocab.contains("project"));
        assert!(!vocab.contains("management"));
        // no punctuation stripping either
        assert!(vocab.contains("c++"));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_skills_keep_stop_words() {
        let profile = Profile::from_json(json!({"skills": ["A", "Using"]}));
        let vocab = skills_vocabulary(&profile);
        assert!(vocab.contains("a"));
        assert!(vocab.contains("using"));
    }

    #[test]
    fn test_intersection_is_commutative() {
        let left: Vocabulary = ["go", "rust", "sql", "docker"].into_iter().collect();
        let right: Vocabulary = ["sql", "go", "python"].into_iter().collect();

        assert_eq!(left.intersection(&right), right.intersection(&left));
        assert_eq!(left.intersection(&right).sorted(), vec!["go", "sql"]);
    }

    #[test]
    fn test_difference() {
        let job: Vocabulary = ["go", "python"].into_iter().collect();
        let profile: Vocabulary = ["go"].into_iter().collect();
        assert_eq!(job.difference(&profile).sorted(), vec!["python"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(job_post_vocabulary("").is_empty());
        assert!(full_text_vocabulary(&Profile::from_json(json!({}))).is_empty());
        assert!(skills_vocabulary(&Profile::from_json(json!(null))).is_empty());
    }
}
