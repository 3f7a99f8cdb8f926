//! Rule-based activity classification from window/tab titles.
//!
//! Case-insensitive substring matching against an ordered rule table, first
//! match wins. Deliberately coarse: the output only modulates reminder
//! cadence and dashboard grouping, so a wrong guess is low-stakes.

use serde::{Deserialize, Serialize};

/// What the user appears to be doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Coding,
    Writing,
    Communication,
    Meetings,
    Research,
    Entertainment,
    Unknown,
}

/// Productivity grouping of an activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productive,
    Neutral,
    Distracting,
}

impl ActivityKind {
    /// The productivity category this kind rolls up to.
    pub fn category(self) -> Category {
        match self {
            ActivityKind::Coding | ActivityKind::Writing | ActivityKind::Meetings => {
                Category::Productive
            }
            ActivityKind::Communication | ActivityKind::Research | ActivityKind::Unknown => {
                Category::Neutral
            }
            ActivityKind::Entertainment => Category::Distracting,
        }
    }

    /// Stable string form used in the activity log.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Coding => "coding",
            ActivityKind::Writing => "writing",
            ActivityKind::Communication => "communication",
            ActivityKind::Meetings => "meetings",
            ActivityKind::Research => "research",
            ActivityKind::Entertainment => "entertainment",
            ActivityKind::Unknown => "unknown",
        }
    }

    /// Inverse of [`as_str`](Self::as_str); unrecognized strings map to
    /// `Unknown` so old log rows never fail to load.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "coding" => ActivityKind::Coding,
            "writing" => ActivityKind::Writing,
            "communication" => ActivityKind::Communication,
            "meetings" => ActivityKind::Meetings,
            "research" => ActivityKind::Research,
            "entertainment" => ActivityKind::Entertainment,
            _ => ActivityKind::Unknown,
        }
    }
}

/// Result of classifying a single title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: ActivityKind,
    pub category: Category,
    /// The keyword that matched, for explainability in the CLI output.
    pub matched_keyword: Option<String>,
}

/// Ordered rule table; earlier entries win. Meetings outrank coding so a
/// "Standup - Zoom" title with a repo name still counts as a meeting.
const RULES: &[(&str, ActivityKind)] = &[
    ("zoom", ActivityKind::Meetings),
    ("meet.google", ActivityKind::Meetings),
    ("google meet", ActivityKind::Meetings),
    ("microsoft teams", ActivityKind::Meetings),
    ("webex", ActivityKind::Meetings),
    ("standup", ActivityKind::Meetings),
    ("github", ActivityKind::Coding),
    ("gitlab", ActivityKind::Coding),
    ("pull request", ActivityKind::Coding),
    ("merge request", ActivityKind::Coding),
    ("stack overflow", ActivityKind::Coding),
    ("localhost", ActivityKind::Coding),
    ("visual studio code", ActivityKind::Coding),
    ("terminal", ActivityKind::Coding),
    ("jupyter", ActivityKind::Coding),
    ("docs.google", ActivityKind::Writing),
    ("google docs", ActivityKind::Writing),
    ("notion", ActivityKind::Writing),
    ("overleaf", ActivityKind::Writing),
    ("obsidian", ActivityKind::Writing),
    ("- draft", ActivityKind::Writing),
    ("gmail", ActivityKind::Communication),
    ("outlook", ActivityKind::Communication),
    ("inbox", ActivityKind::Communication),
    ("slack", ActivityKind::Communication),
    ("discord", ActivityKind::Communication),
    ("wikipedia", ActivityKind::Research),
    ("arxiv", ActivityKind::Research),
    ("scholar.google", ActivityKind::Research),
    ("documentation", ActivityKind::Research),
    ("mdn web docs", ActivityKind::Research),
    ("youtube", ActivityKind::Entertainment),
    ("netflix", ActivityKind::Entertainment),
    ("twitch", ActivityKind::Entertainment),
    ("reddit", ActivityKind::Entertainment),
    ("tiktok", ActivityKind::Entertainment),
    ("instagram", ActivityKind::Entertainment),
    ("spotify", ActivityKind::Entertainment),
];

/// Classify a window/tab title.
///
/// Unmatched titles fall back to `Unknown`/`Neutral`.
pub fn classify(title: &str) -> Classification {
    let haystack = title.to_lowercase();
    for (keyword, kind) in RULES {
        if haystack.contains(keyword) {
            return Classification {
                kind: *kind,
                category: kind.category(),
                matched_keyword: Some((*keyword).to_string()),
            };
        }
    }
    Classification {
        kind: ActivityKind::Unknown,
        category: Category::Neutral,
        matched_keyword: None,
    }
}
