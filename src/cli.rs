//! CLI interface for the portfolio matcher

use crate::input::JobPostSource;
use crate::matching::MatchMode;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "portfolio-matcher")]
#[command(about = "Match portfolio and resume profiles against job postings")]
#[command(long_about = "Compare a job posting (pasted, text, markdown or PDF) with a portfolio profile and list the keywords they share")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Where the job post comes from
#[derive(Args, Debug, Clone)]
pub struct JobPostArgs {
    /// Job post file (PDF, TXT, MD); wins over --text
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Pasted job post text
    #[arg(short, long)]
    pub text: Option<String>,
}

impl From<JobPostArgs> for JobPostSource {
    fn from(args: JobPostArgs) -> Self {
        JobPostSource { file: args.job, pasted: args.text }
    }
}

/// Where the profile comes from
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Profile file (JSON, TOML)
    #[arg(short, long, conflicts_with = "user")]
    pub profile: Option<PathBuf>,

    /// Fetch the profile of this user from the profile store
    #[arg(short, long)]
    pub user: Option<String>,

    /// Bearer token for the profile store
    #[arg(long, env = "PORTFOLIO_MATCHER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a job post with a profile
    Compare {
        #[command(flatten)]
        job_post: JobPostArgs,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Match mode: full-text, skills-only
        #[arg(short, long)]
        mode: Option<MatchMode>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// List job-post words missing from the profile
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file (a directory gets a suggested file name)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print the vocabulary extracted from a profile
    Vocab {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Match mode: full-text, skills-only
        #[arg(short, long)]
        mode: Option<MatchMode>,
    },

    /// Print the words extracted from a job post
    Tokens {
        #[command(flatten)]
        job_post: JobPostArgs,
    },

    /// Profile store commands
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Download a profile
    Fetch {
        /// User id in the profile store
        user: String,

        /// Bearer token for the profile store
        #[arg(long, env = "PORTFOLIO_MATCHER_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Write the profile here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Upload a local profile file
    Save {
        /// User id in the profile store
        user: String,

        /// Profile file (JSON, TOML)
        #[arg(short, long)]
        profile: PathBuf,

        /// Bearer token for the profile store
        #[arg(long, env = "PORTFOLIO_MATCHER_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.JSON"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.yaml"), &["json", "toml"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["json"]).is_err());
    }

    #[test]
    fn test_compare_arguments() {
        let cli = Cli::try_parse_from([
            "portfolio-matcher",
            "compare",
            "--profile",
            "me.json",
            "--text",
            "Rust developer",
            "--mode",
            "skills-only",
        ])
        .unwrap();

        match cli.command {
            Commands::Compare { job_post, profile, mode, .. } => {
                assert_eq!(job_post.text.as_deref(), Some("Rust developer"));
                assert_eq!(profile.profile, Some(PathBuf::from("me.json")));
                assert_eq!(mode, Some(MatchMode::SkillsOnly));
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_any_job_file_extension_accepted() {
        let cli = Cli::try_parse_from(["portfolio-matcher", "tokens", "--job", "posting.docx"]).unwrap();

        match cli.command {
            Commands::Tokens { job_post } => {
                let source = JobPostSource::from(job_post);
                assert_eq!(source.file, Some(PathBuf::from("posting.docx")));
                assert!(source.pasted.is_none());
            }
            _ => panic!("expected tokens"),
        }
    }

    #[tokio::test]
    async fn test_unsupported_job_file_reports_extraction() {
        let cli = Cli::try_parse_from([
            "portfolio-matcher",
            "compare",
            "--profile",
            "me.json",
            "--job",
            "tests/fixtures/unsupported.xyz",
        ])
        .unwrap();

        let Commands::Compare { job_post, .. } = cli.command else {
            panic!("expected compare");
        };
        let mut manager = crate::input::InputManager::new();
        let err = JobPostSource::from(job_post).acquire(&mut manager).await.unwrap_err();
        assert!(err.is_extraction());
    }

    #[test]
    fn test_compare_without_job_post_fails_fast() {
        let cli = Cli::try_parse_from(["portfolio-matcher", "compare", "--user", "ada"]).unwrap();

        let Commands::Compare { job_post, .. } = cli.command else {
            panic!("expected compare");
        };
        let err = JobPostSource::from(job_post).ensure_present().unwrap_err();
        assert!(matches!(err, crate::error::MatcherError::NoJobPost));
    }

    #[test]
    fn test_profile_sources_conflict() {
        let parsed = Cli::try_parse_from([
            "portfolio-matcher",
            "vocab",
            "--profile",
            "me.json",
            "--user",
            "ada",
        ]);
        assert!(parsed.is_err());
    }
}
