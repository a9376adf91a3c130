//! Portfolio matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod remote;

pub use error::{Result, MatcherError};
pub use config::Config;
pub use matching::{KeywordMatcher, MatchMode, MatchResult, Profile};
