use crate::config::Config;
use crate::models::TrackedIssue;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use ureq::Agent;
use url::Url;

/// Global timeout for all tracker API calls (30 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size for list endpoints (GitLab's maximum).
const PER_PAGE: usize = 100;

/// Operations the sync pipeline needs from the issue tracker
///
/// Implemented by [`GitLabClient`] for real runs and by in-memory fakes in
/// tests, which keeps the pipeline testable without a network.
pub trait TrackerGateway {
    /// Look up a label by exact name, creating it with the given color if absent
    fn ensure_label(&self, name: &str, color: &str) -> Result<()>;

    /// List open issues carrying the given label
    fn list_open_issues(&self, label: &str) -> Result<Vec<TrackedIssue>>;

    fn create_issue(&self, title: &str, description: &str, labels: &[String]) -> Result<TrackedIssue>;

    fn add_comment(&self, issue_id: u64, body: &str) -> Result<()>;

    fn close_issue(&self, issue_id: u64) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct Label {
    name: String,
}

/// Fetch numbered pages until a short page signals the end, aggregating results
///
/// List endpoints cap responses at [`PER_PAGE`] items; stopping at the first
/// page would hand the reconciler a truncated issue list and make it re-file
/// issues that are already open.
fn collect_pages<T>(mut fetch_page: impl FnMut(usize) -> Result<Vec<T>>) -> Result<Vec<T>> {
    let mut all = Vec::new();
    let mut page = 1;
    loop {
        let batch = fetch_page(page)?;
        let last_page = batch.len() < PER_PAGE;
        all.extend(batch);
        if last_page {
            return Ok(all);
        }
        page += 1;
    }
}

/// GitLab REST adapter over the v4 API
pub struct GitLabClient {
    agent: Agent,
    host: String,
    project_id: String,
    token: String,
}

impl GitLabClient {
    pub fn new(config: &Config) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build()
            .into();

        Self {
            agent,
            host: config.host.clone(),
            project_id: config.project_id.clone(),
            token: config.token.clone(),
        }
    }

    fn endpoint(&self, tail: &str) -> String {
        format!("{}/api/v4/projects/{}/{}", self.host, self.project_id, tail)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.agent
            .get(url)
            .header("PRIVATE-TOKEN", &self.token)
            .call()
            .with_context(|| format!("GET {url} failed"))?
            .body_mut()
            .read_json()
            .with_context(|| format!("GET {url} returned an unexpected body"))
    }

    fn list_labels(&self) -> Result<Vec<Label>> {
        collect_pages(|page| {
            let mut url = Url::parse(&self.endpoint("labels")).context("Invalid tracker URL")?;
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());
            self.get_json(url.as_str())
        })
    }

    fn create_label(&self, name: &str, color: &str) -> Result<()> {
        let url = self.endpoint("labels");
        self.agent
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send_json(json!({ "name": name, "color": color }))
            .with_context(|| format!("Failed to create label '{name}'"))?;
        Ok(())
    }
}

impl TrackerGateway for GitLabClient {
    fn ensure_label(&self, name: &str, color: &str) -> Result<()> {
        let labels = self.list_labels().context("Failed to list project labels")?;
        if labels.iter().any(|l| l.name == name) {
            // An existing label is left alone, even if its color differs.
            return Ok(());
        }
        self.create_label(name, color)
    }

    fn list_open_issues(&self, label: &str) -> Result<Vec<TrackedIssue>> {
        collect_pages(|page| {
            let mut url = Url::parse(&self.endpoint("issues")).context("Invalid tracker URL")?;
            url.query_pairs_mut()
                .append_pair("labels", label)
                .append_pair("state", "opened")
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());
            self.get_json(url.as_str())
        })
        .context("Failed to list open issues")
    }

    fn create_issue(&self, title: &str, description: &str, labels: &[String]) -> Result<TrackedIssue> {
        let url = self.endpoint("issues");
        self.agent
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send_json(json!({
                "title": title,
                "description": description,
                "labels": labels.join(","),
            }))
            .with_context(|| format!("Failed to create issue '{title}'"))?
            .body_mut()
            .read_json()
            .context("Issue creation returned an unexpected body")
    }

    fn add_comment(&self, issue_id: u64, body: &str) -> Result<()> {
        let url = self.endpoint(&format!("issues/{issue_id}/notes"));
        self.agent
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send_json(json!({ "body": body }))
            .with_context(|| format!("Failed to comment on issue {issue_id}"))?;
        Ok(())
    }

    fn close_issue(&self, issue_id: u64) -> Result<()> {
        let url = self.endpoint(&format!("issues/{issue_id}"));
        self.agent
            .put(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send_json(json!({ "state_event": "close" }))
            .with_context(|| format!("Failed to close issue {issue_id}"))?;
        Ok(())
    }
}
