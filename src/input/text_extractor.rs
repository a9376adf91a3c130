//! Text extraction from job-post documents

use crate::error::{Result, MatcherError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

fn read_failure(path: &Path, err: std::io::Error) -> MatcherError {
    MatcherError::Extraction(format!("Failed to read '{}': {}", path.display(), err))
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(|e| read_failure(path, e))?;

        // pdf-extract panics on some well-formed but unusual documents
        let parsed = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| {
            MatcherError::Extraction(format!("PDF parser crashed on '{}': {}", path.display(), e))
        })?;

        parsed.map_err(|e| {
            MatcherError::Extraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(|e| read_failure(path, e))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(|e| read_failure(path, e))?;
        markdown_to_text(&markdown_content)
    }
}

/// Render markdown to HTML, then drop the markup.
pub fn markdown_to_text(markdown: &str) -> Result<String> {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n");

    let tag_regex = Regex::new(r"<[^>]*>")
        .map_err(|e| MatcherError::Extraction(format!("Invalid tag pattern: {}", e)))?;
    let stripped = tag_regex.replace_all(&text, "");

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let lines: Vec<&str> = decoded
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    Ok(lines.join("\n"))
}
