//! todo-sync - Keep tracker issues in step with TODO comments
//!
//! A CI bot that scans a repository for tagged comments (TODO, FIXME, BUG,
//! HACK), mirrors each one as an issue in a GitLab-style tracker, and closes
//! issues whose marker has disappeared from the code.
//!
//! # How a run works
//!
//! - Scan tracked and untracked files for configured tag keywords
//! - Turn each match into a finding with a deterministic title
//! - Fetch open issues carrying the bot's label
//! - Diff the two sets by title: create the new, keep the unchanged, close
//!   the resolved (with a comment naming the commit)
//! - Print a tree summary of all three groups
//!
//! The tracker is the only persistent state; every run recomputes findings
//! from scratch, so a failed run is simply retried by the next CI job.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use todo_sync::{config, scanner};
//!
//! let config = config::load_config().unwrap();
//! let markers = scanner::scan_repository(Path::new("."), &config).unwrap();
//! println!("{} markers in code", markers.len());
//! ```

pub mod cli;
pub mod config;
pub mod gitlab;
pub mod issues;
pub mod models;
pub mod reconciler;
pub mod reporter;
pub mod scanner;
pub mod sync;

// Re-export commonly used types
pub use config::Config;
pub use gitlab::{GitLabClient, TrackerGateway};
pub use models::{Finding, Marker, SyncPlan, TrackedIssue};
