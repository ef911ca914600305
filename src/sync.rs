use crate::config::Config;
use crate::gitlab::TrackerGateway;
use crate::models::{Finding, SyncPlan};
use crate::{issues, reconciler, reporter, scanner};
use anyhow::{Context, Result};
use std::path::Path;

/// What one run did, including tracker operations that failed
#[derive(Debug)]
pub struct SyncOutcome {
    pub plan: SyncPlan,

    /// Per-item tracker failures; one entry per failed create/comment/close.
    /// A failed item never aborts processing of the remaining items.
    pub failures: Vec<String>,
}

/// Run the full pipeline: scan, reconcile, report, then apply tracker mutations
///
/// All mutations complete (or fail and get recorded) before this returns, so
/// nothing is lost when the process exits right after.
pub fn run(
    root: &Path,
    config: &Config,
    gateway: &dyn TrackerGateway,
    verbose: bool,
) -> Result<SyncOutcome> {
    let findings = collect_findings(root, config, verbose)?;
    let total = findings.len();

    gateway
        .ensure_label(&config.label_name, &config.label_color)
        .context("Failed to ensure the bot label exists")?;

    let tracked = gateway
        .list_open_issues(&config.label_name)
        .context("Failed to fetch open tracked issues")?;

    if verbose {
        println!("Tracker has {} open issue(s) under '{}'", tracked.len(), config.label_name);
    }

    let plan = reconciler::reconcile(findings, tracked);
    print!("{}", reporter::render(&plan, total));

    let failures = apply(&plan, config, gateway);
    Ok(SyncOutcome { plan, failures })
}

/// Scan and report only; the tracker is never contacted
pub fn run_dry(root: &Path, config: &Config, verbose: bool) -> Result<SyncPlan> {
    let findings = collect_findings(root, config, verbose)?;
    let total = findings.len();

    let plan = reconciler::reconcile(findings, Vec::new());
    print!("{}", reporter::render(&plan, total));
    Ok(plan)
}

fn collect_findings(root: &Path, config: &Config, verbose: bool) -> Result<Vec<Finding>> {
    if verbose {
        println!("Scanning: {}", root.display());
        println!("Using tags: {:?}", config.tags);
    }

    let markers = scanner::scan_repository(root, config).context("Failed to scan repository")?;

    if verbose {
        println!("Found {} marker(s) in code", markers.len());
    }

    Ok(markers.iter().map(|m| issues::synthesize(m, config)).collect())
}

fn apply(plan: &SyncPlan, config: &Config, gateway: &dyn TrackerGateway) -> Vec<String> {
    let mut failures = Vec::new();
    let labels = [config.label_name.clone()];

    for finding in &plan.to_create {
        if let Err(e) = gateway.create_issue(&finding.title, &finding.description, &labels) {
            failures.push(format!("create '{}': {:#}", finding.title, e));
        }
    }

    let comment = issues::close_comment(config);
    for issue in &plan.to_close {
        // Comment and close are independent; a failed comment still closes.
        if let Err(e) = gateway.add_comment(issue.id, &comment) {
            failures.push(format!("comment on '{}': {:#}", issue.title, e));
        }
        if let Err(e) = gateway.close_issue(issue.id) {
            failures.push(format!("close '{}': {:#}", issue.title, e));
        }
    }

    failures
}
