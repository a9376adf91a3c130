//! Keyword matching module

pub mod tokenizer;
pub mod profile;
pub mod vocabulary;
pub mod matcher;
pub mod session;

pub use matcher::{KeywordMatcher, MatchMode, MatchResult};
pub use profile::{Profile, ProfileValue, ProfileVisitor};
pub use session::{ComparisonSession, ComparisonStatus};
pub use vocabulary::Vocabulary;
