use anyhow::{Result, anyhow};

const DEFAULT_TAGS: &str = "TODO|FIXME|BUG|HACK";
const DEFAULT_LABEL_NAME: &str = "Todo Bot";
const DEFAULT_LABEL_COLOR: &str = "#bada55";
const DEFAULT_API_URL: &str = "https://gitlab.com/api/v4";

/// Immutable process configuration, loaded once at startup
///
/// Everything comes from the environment so the tool works unchanged inside a
/// CI job (`CI_*` variables are provided by the runner).
#[derive(Debug, Clone)]
pub struct Config {
    /// Tag keywords to search for, uppercased
    pub tags: Vec<String>,

    /// Name of the label the bot owns in the tracker
    pub label_name: String,

    /// Hex color used when the label has to be created
    pub label_color: String,

    /// Tracker API token
    pub token: String,

    /// Tracker host, derived by stripping the `/api/v4` suffix from the API URL
    pub host: String,

    /// Project identifier in the tracker
    pub project_id: String,

    /// Commit that triggered this run, embedded in issue descriptions
    pub commit_sha: String,

    /// Base URL for deep links to source lines
    pub project_url: String,

    /// Repository-relative paths excluded from scanning
    pub ignored_files: Vec<String>,

    /// Context lines captured before and after a marker
    pub context_lines: usize,
}

/// Load configuration from the process environment
pub fn load_config() -> Result<Config> {
    from_vars(|key| std::env::var(key).ok())
}

/// Build a [`Config`] from an arbitrary variable lookup
///
/// Missing required values (`TODO_BOT_TOKEN`, `CI_PROJECT_ID`) fail here,
/// before any tracker call is made.
pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let tags = get("TODO_BOT_TAGS")
        .unwrap_or_else(|| DEFAULT_TAGS.to_string())
        .to_uppercase()
        .split('|')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if tags.is_empty() {
        return Err(anyhow!("TODO_BOT_TAGS contains no usable tag keywords"));
    }

    let token = get("TODO_BOT_TOKEN")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("TODO_BOT_TOKEN is not set (tracker API token is required)"))?;

    let project_id = get("CI_PROJECT_ID")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("CI_PROJECT_ID is not set (target project is required)"))?;

    let api_url = get("CI_API_V4_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let host = api_url
        .trim_end_matches('/')
        .trim_end_matches("/api/v4")
        .to_string();

    Ok(Config {
        tags,
        label_name: get("TODO_BOT_NAME").unwrap_or_else(|| DEFAULT_LABEL_NAME.to_string()),
        label_color: get("TODO_BOT_COLOR").unwrap_or_else(|| DEFAULT_LABEL_COLOR.to_string()),
        token,
        host,
        project_id,
        commit_sha: get("CI_COMMIT_SHA").unwrap_or_default(),
        project_url: get("CI_PROJECT_URL").unwrap_or_default(),
        ignored_files: vec!["README.md".to_string()],
        context_lines: 3,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = from_vars(env(&[("TODO_BOT_TOKEN", "t"), ("CI_PROJECT_ID", "1")])).unwrap();
        assert_eq!(config.tags, vec!["TODO", "FIXME", "BUG", "HACK"]);
        assert_eq!(config.label_name, "Todo Bot");
        assert_eq!(config.label_color, "#bada55");
        assert_eq!(config.host, "https://gitlab.com");
        assert_eq!(config.context_lines, 3);
        assert_eq!(config.ignored_files, vec!["README.md"]);
    }

    #[test]
    fn test_custom_tags_are_uppercased() {
        let config = from_vars(env(&[
            ("TODO_BOT_TOKEN", "t"),
            ("CI_PROJECT_ID", "1"),
            ("TODO_BOT_TAGS", "todo|Xxx"),
        ]))
        .unwrap();
        assert_eq!(config.tags, vec!["TODO", "XXX"]);
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = from_vars(env(&[("CI_PROJECT_ID", "1")])).unwrap_err();
        assert!(err.to_string().contains("TODO_BOT_TOKEN"));
    }

    #[test]
    fn test_missing_project_id_is_fatal() {
        let err = from_vars(env(&[("TODO_BOT_TOKEN", "t")])).unwrap_err();
        assert!(err.to_string().contains("CI_PROJECT_ID"));
    }

    #[test]
    fn test_host_strips_api_suffix() {
        let config = from_vars(env(&[
            ("TODO_BOT_TOKEN", "t"),
            ("CI_PROJECT_ID", "1"),
            ("CI_API_V4_URL", "https://git.example.com/api/v4"),
        ]))
        .unwrap();
        assert_eq!(config.host, "https://git.example.com");
    }
}
