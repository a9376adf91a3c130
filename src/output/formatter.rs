//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::{Result, MatcherError};
use crate::output::report::MatchReport;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn fmt_error(err: std::fmt::Error) -> MatcherError {
    MatcherError::OutputFormatting(err.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_coverage_badge(&self, coverage: u8) -> String {
        let (badge, color) = match coverage {
            75..=100 => ("STRONG", Color::Green),
            50..=74 => ("GOOD", Color::Yellow),
            25..=49 => ("PARTIAL", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        out.push_str(&self.format_header("Keyword Match"));
        writeln!(out, "Job post: {}", report.metadata.job_post_source).map_err(fmt_error)?;
        writeln!(out, "Profile:  {}", report.metadata.profile_source).map_err(fmt_error)?;
        writeln!(out, "Mode:     {}", result.mode).map_err(fmt_error)?;
        writeln!(
            out,
            "Coverage: {}% {} ({} of {} job-post words)",
            report.coverage_percentage(),
            self.format_coverage_badge(report.coverage_percentage()),
            result.matched.len(),
            result.job_token_count
        )
        .map_err(fmt_error)?;

        out.push_str(&self.format_header("Matched Keywords"));
        if result.matched.is_empty() {
            writeln!(out, "  {}", self.colorize("(none)", Color::Red)).map_err(fmt_error)?;
        } else {
            for word in &result.matched {
                writeln!(out, "  ✓ {}", self.colorize(word, Color::Green)).map_err(fmt_error)?;
            }
        }

        if self.detailed {
            out.push_str(&self.format_header("Not In Profile"));
            if result.missing.is_empty() {
                writeln!(out, "  (none)").map_err(fmt_error)?;
            } else {
                writeln!(out, "  {}", result.missing.join(", ")).map_err(fmt_error)?;
            }
            writeln!(out, "\nProfile vocabulary: {} words", result.profile_vocabulary_size).map_err(fmt_error)?;
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        writeln!(out, "# Keyword Match Report\n").map_err(fmt_error)?;
        writeln!(
            out,
            "**Coverage:** {}% ({} of {} job-post words, {} mode)\n",
            report.coverage_percentage(),
            result.matched.len(),
            result.job_token_count,
            result.mode
        )
        .map_err(fmt_error)?;

        writeln!(out, "## Matched Keywords\n").map_err(fmt_error)?;
        if result.matched.is_empty() {
            writeln!(out, "_No shared keywords._").map_err(fmt_error)?;
        }
        for word in &result.matched {
            writeln!(out, "- `{}`", word).map_err(fmt_error)?;
        }

        writeln!(out, "\n## Not In Profile\n").map_err(fmt_error)?;
        if result.missing.is_empty() {
            writeln!(out, "_Every job-post word is covered._").map_err(fmt_error)?;
        } else {
            writeln!(out, "{}", result.missing.join(", ")).map_err(fmt_error)?;
        }

        if self.include_metadata {
            writeln!(out, "\n---\n").map_err(fmt_error)?;
            writeln!(out, "| Field | Value |").map_err(fmt_error)?;
            writeln!(out, "|-------|-------|").map_err(fmt_error)?;
            writeln!(out, "| Job post | {} |", report.metadata.job_post_source).map_err(fmt_error)?;
            writeln!(out, "| Profile | {} |", report.metadata.profile_source).map_err(fmt_error)?;
            writeln!(
                out,
                "| Generated | {} |",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
            .map_err(fmt_error)?;
            writeln!(out, "| Version | {} |", report.metadata.tool_version).map_err(fmt_error)?;
        }

        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, job_post_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(job_post_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "job_post".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{MatchMode, MatchResult};

    fn report() -> MatchReport {
        let result = MatchResult {
            mode: MatchMode::FullText,
            matched: vec!["developer".to_string(), "go".to_string(), "sql".to_string()],
            missing: vec!["python".to_string()],
            job_token_count: 4,
            profile_vocabulary_size: 5,
        };
        MatchReport::new(result, "job.txt", "profile.json")
    }

    #[test]
    fn test_console_plain() {
        let out = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();

        assert!(out.contains("Coverage: 75% [STRONG]"));
        assert!(out.contains("✓ go"));
        assert!(out.contains("Not In Profile"));
        assert!(out.contains("python"));
    }

    #[test]
    fn test_console_hides_missing_unless_detailed() {
        let out = ConsoleFormatter::new(false, false).format_report(&report()).unwrap();
        assert!(!out.contains("python"));
    }

    #[test]
    fn test_json_contains_result() {
        let out = JsonFormatter::new(false).format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["result"]["mode"], "full-text");
        assert_eq!(value["result"]["matched"][1], "go");
        assert_eq!(value["metadata"]["profile_source"], "profile.json");
    }

    #[test]
    fn test_markdown_lists_keywords() {
        let out = MarkdownFormatter::new(false).format_report(&report()).unwrap();
        assert!(out.starts_with("# Keyword Match Report"));
        assert!(out.contains("- `sql`"));
        assert!(!out.contains("| Profile |"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, true);
        let out = generator.generate_report(&report(), &OutputFormat::Markdown).unwrap();
        assert!(out.contains("| Profile | profile.json |"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "posts/backend.pdf", false), "backend_match.json");
        assert_eq!(suggest_filename(&OutputFormat::Console, "", false), "job_post_match.txt");
        assert!(suggest_filename(&OutputFormat::Markdown, "a.txt", true).starts_with("a_match_"));
    }
}
