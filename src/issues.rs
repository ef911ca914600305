use crate::config::Config;
use crate::models::{Finding, Marker};

/// Render a marker into the issue the tracker should hold for it
///
/// Pure transformation. The title format is the identity key used by the
/// reconciler and must stay byte-stable across runs: `[<path> L<line>] <tag>`.
pub fn synthesize(marker: &Marker, config: &Config) -> Finding {
    let title = format!("[{} L{}] {}", marker.path, marker.line, marker.tag_text);

    let code_block = marker.context.join("\n").trim().to_string();
    let description = format!(
        "Probably appeared with commit {}.\n\n```{}\n{}\n```\n\n[Line in Code]({}/-/blob/main/{}#L{})",
        config.commit_sha,
        marker.code_language,
        code_block,
        config.project_url,
        marker.path,
        marker.line,
    );

    Finding { title, description }
}

/// Comment posted on an issue just before it is closed
pub fn close_comment(config: &Config) -> String {
    format!("Probably closed with commit {}", config.commit_sha)
}
