//! Portfolio matcher: compare portfolio profiles with job postings

use clap::Parser;
use log::{debug, error, info};
use portfolio_matcher::cli::{self, Cli, Commands, ConfigAction, ProfileAction, ProfileArgs};
use portfolio_matcher::config::Config;
use portfolio_matcher::error::{MatcherError, Result};
use portfolio_matcher::input::{InputManager, JobPostSource};
use portfolio_matcher::matching::{vocabulary, ComparisonSession, KeywordMatcher, Profile};
use portfolio_matcher::output::{save_report_to_file, suggest_filename, MatchReport, ReportGenerator};
use portfolio_matcher::remote::{Credentials, ProfileClient};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn credentials(token: Option<String>) -> Result<Option<Credentials>> {
    token.map(Credentials::bearer).transpose()
}

fn profile_client(config: &Config) -> Result<ProfileClient> {
    ProfileClient::new(config.remote.base_url.clone(), config.remote.timeout_secs)
}

/// Load the profile from a file or the profile store; also returns a label for reports.
async fn load_profile(args: ProfileArgs, config: &Config) -> Result<(Profile, String)> {
    if let Some(path) = args.profile {
        cli::validate_file_extension(&path, &["json", "toml"])
            .map_err(|e| MatcherError::InvalidInput(format!("Profile file: {}", e)))?;
        let profile = Profile::load(&path).await?;
        return Ok((profile, path.display().to_string()));
    }

    if let Some(user) = args.user {
        let credentials = credentials(args.token)?;
        let profile = profile_client(config)?
            .fetch_profile(&user, credentials.as_ref())
            .await?;
        return Ok((profile, format!("profile store user '{}'", user)));
    }

    Err(MatcherError::InvalidInput("Provide --profile <file> or --user <id>".to_string()))
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Compare {
            job_post,
            profile,
            mode,
            output,
            detailed,
            save,
        } => {
            let mode = mode.unwrap_or(config.matching.default_mode);
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(MatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let source = JobPostSource::from(job_post);
            source.ensure_present()?;
            let (profile, profile_label) = load_profile(profile, &config).await?;

            info!("Comparing {} with {} ({} mode)", source.describe(), profile_label, mode);

            let mut manager = InputManager::new().with_cache(config.input.enable_caching);
            let mut session = ComparisonSession::new(mode);
            let result = session.run(&source, &profile, &mut manager).await?;

            let report = MatchReport::new(result, source.describe(), profile_label);
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                config.output.pretty_json,
                true,
            );
            let content = generator.generate_report(&report, &output_format)?;
            println!("{}", content);

            if let Some(save_path) = save {
                let target = if save_path.is_dir() {
                    save_path.join(suggest_filename(
                        &output_format,
                        &source.describe(),
                        config.output.timestamp_filenames,
                    ))
                } else {
                    save_path
                };
                // Console output is saved without escape codes
                let plain = if matches!(output_format, portfolio_matcher::config::OutputFormat::Console) {
                    ReportGenerator::with_options(false, detailed || config.output.detailed, true, true)
                        .generate_report(&report, &output_format)?
                } else {
                    content
                };
                save_report_to_file(&plain, &target)?;
                println!("💾 Report saved to {}", target.display());
            }
        }

        Commands::Vocab { profile, mode } => {
            let mode = mode.unwrap_or(config.matching.default_mode);
            let (profile, label) = load_profile(profile, &config).await?;
            let vocab = KeywordMatcher::new(mode).profile_vocabulary(&profile);

            println!("📚 {} vocabulary of {} ({} words)", mode, label, vocab.len());
            for word in vocab.sorted() {
                println!("  {}", word);
            }
        }

        Commands::Tokens { job_post } => {
            let source = JobPostSource::from(job_post);
            let mut manager = InputManager::new().with_cache(config.input.enable_caching);
            let text = source.acquire(&mut manager).await?;
            debug!("Job post text: {} characters", text.len());

            let vocab = vocabulary::job_post_vocabulary(&text);
            println!("🔤 {} words in {}", vocab.len(), source.describe());
            for word in vocab.sorted() {
                println!("  {}", word);
            }
        }

        Commands::Profile { action } => match action {
            ProfileAction::Fetch { user, token, out } => {
                let credentials = credentials(token)?;
                let profile = profile_client(&config)?
                    .fetch_profile(&user, credentials.as_ref())
                    .await?;
                let content = serde_json::to_string_pretty(&profile.to_json())?;

                match out {
                    Some(path) => {
                        save_report_to_file(&content, &path)?;
                        println!("✅ Profile of '{}' written to {}", user, path.display());
                    }
                    None => println!("{}", content),
                }
            }

            ProfileAction::Save { user, profile, token } => {
                cli::validate_file_extension(&profile, &["json", "toml"])
                    .map_err(|e| MatcherError::InvalidInput(format!("Profile file: {}", e)))?;
                let credentials = credentials(token)?;
                let loaded = Profile::load(&profile).await?;

                profile_client(&config)?
                    .save_profile(&user, &loaded, credentials.as_ref())
                    .await?;
                println!("✅ Profile of '{}' saved", user);
            }
        },

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Default match mode: {}", config.matching.default_mode);
                    println!("Input caching: {}", config.input.enable_caching);
                    println!("Profile store: {} (timeout {}s)", config.remote.base_url, config.remote.timeout_secs);
                    println!("Output format: {:?}", config.output.format);
                    println!("Detailed output: {}", config.output.detailed);
                    println!("Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
