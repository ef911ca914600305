use crate::models::{Finding, SyncPlan, TrackedIssue};
use std::collections::HashSet;

/// Partition findings and open tracked issues by exact title equality
///
/// Every finding lands in exactly one of `to_create` / `still_open`, every
/// tracked issue in exactly one of `still_open` / `to_close`. Relative order
/// within each group follows the input order.
pub fn reconcile(findings: Vec<Finding>, tracked: Vec<TrackedIssue>) -> SyncPlan {
    let finding_titles: HashSet<&str> = findings.iter().map(|f| f.title.as_str()).collect();
    let tracked_titles: HashSet<String> = tracked.iter().map(|t| t.title.clone()).collect();

    let to_close = tracked
        .iter()
        .filter(|t| !finding_titles.contains(t.title.as_str()))
        .cloned()
        .collect();

    let mut to_create = Vec::new();
    let mut still_open = Vec::new();
    for finding in findings {
        if tracked_titles.contains(&finding.title) {
            still_open.push(finding.title);
        } else {
            to_create.push(finding);
        }
    }

    SyncPlan {
        to_create,
        still_open,
        to_close,
    }
}
