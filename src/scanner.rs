use crate::config::Config;
use crate::models::Marker;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Scan a directory for tag markers in tracked and untracked files
///
/// The walk respects .gitignore, so generated and vendored trees stay out of
/// the results while files not yet committed are still picked up.
pub fn scan_repository(root: &Path, config: &Config) -> Result<Vec<Marker>> {
    let pattern = build_tag_regex(&config.tags)?;
    let mut markers = Vec::new();

    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(true); // Respect .gitignore
    walker.hidden(false); // Dotfiles like .github/workflows can carry markers
    walker.filter_entry(|entry| entry.file_name().to_str() != Some(".git"));

    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(_) => continue, // Unreadable directory entries are not matches
        };

        if entry.file_type().is_none_or(|ft| !ft.is_file()) {
            continue;
        }

        if let Ok(metadata) = entry.metadata() {
            if metadata.len() > MAX_FILE_SIZE {
                continue;
            }
        }

        let rel_path = relative_path(entry.path(), root);
        if config.ignored_files.iter().any(|f| f == &rel_path) {
            continue;
        }

        // Binary files cannot contain a marker; anything else that fails to
        // read contradicts the walk having just listed it, so fail the run.
        let content = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::InvalidData => continue,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read file: {}", entry.path().display()));
            }
        };

        markers.extend(scan_content(&rel_path, &content, &pattern, config.context_lines));
    }

    Ok(markers)
}

/// Build the tag-matching regex with the word-boundary guard
///
/// A keyword only counts when immediately followed by a colon or a space, so
/// `TODOLIST` never matches while `TODO: x` and `TODO x` both do. Tags are
/// already uppercased by the config layer and matched case-sensitively.
fn build_tag_regex(tags: &[String]) -> Result<Regex> {
    let alternation = tags
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!("({alternation})(:| )");
    Regex::new(&pattern).context("Failed to compile tag regex")
}

/// Extract markers from a single file's content
fn scan_content(rel_path: &str, content: &str, pattern: &Regex, window: usize) -> Vec<Marker> {
    let lines: Vec<&str> = content.trim_end().split('\n').collect();
    let code_language = rel_path
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
        .to_string();

    let mut markers = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let Some(m) = pattern.find(line) else {
            continue;
        };

        let tag_text = line[m.start()..].replacen("-->", "", 1).trim().to_string();

        let before = index.saturating_sub(window);
        let after = (index + window).min(lines.len() - 1);
        // Trailing whitespace (including the \r of CRLF files) would leak
        // into the fenced excerpt otherwise.
        let context = lines[before..=after]
            .iter()
            .map(|l| l.trim_end().to_string())
            .collect();

        markers.push(Marker {
            path: rel_path.to_string(),
            line: index + 1,
            tag_text,
            code_language: code_language.clone(),
            context,
        });
    }

    markers
}

fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
