use serde::Deserialize;

/// A single tag occurrence found in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Repository-relative path of the file containing the tag
    pub path: String,

    /// Line number of the match (1-indexed)
    pub line: usize,

    /// The tag keyword plus trailing comment text, trimmed
    pub tag_text: String,

    /// Language inferred from the file extension (empty if none)
    pub code_language: String,

    /// Source lines surrounding the match, clamped to file bounds
    pub context: Vec<String>,
}

/// The unit the tracker knows about, derived from a [`Marker`]
///
/// The title is the sole identity key: two findings are the same iff their
/// titles are byte-equal. A marker that shifts to a different line produces a
/// new title, so the old issue closes and a new one opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub title: String,
    pub description: String,
}

/// An issue as it currently exists in the tracker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackedIssue {
    /// Project-scoped issue identifier assigned by the tracker
    #[serde(rename = "iid")]
    pub id: u64,

    pub title: String,

    /// Tracker state string ("opened" or "closed")
    pub state: String,
}

/// Result of comparing current findings against open tracked issues
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// Findings with no matching open issue
    pub to_create: Vec<Finding>,

    /// Titles present both in code and in the tracker
    pub still_open: Vec<String>,

    /// Open issues whose marker is gone from the code
    pub to_close: Vec<TrackedIssue>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.still_open.is_empty() && self.to_close.is_empty()
    }
}
