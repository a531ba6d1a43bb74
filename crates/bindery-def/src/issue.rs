//! Compatibility issues: the diagnostics validators hand back.

use serde::{Deserialize, Serialize};

/// Severity class of a single issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warn,
}

/// One diagnostic produced by comparing two artifacts.
///
/// The message is opaque downstream: the check engine counts and renders
/// issues, it never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    /// Creates an error issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::Error,
            message: message.into(),
        }
    }

    /// Creates a warning issue.
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::Warn,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_wire_shape_is_stable() {
        let issue = Issue::error("first-error");
        let encoded = serde_json::to_string(&issue).expect("issue should serialize");
        assert_eq!(encoded, r#"{"kind":"error","message":"first-error"}"#);

        let issue = Issue::warn("first-warn");
        let encoded = serde_json::to_string(&issue).expect("issue should serialize");
        assert_eq!(encoded, r#"{"kind":"warn","message":"first-warn"}"#);
    }

    #[test]
    fn issue_round_trips() {
        let issue = Issue::warn("map implements extra use case");
        let encoded = serde_json::to_string(&issue).expect("issue should serialize");
        let decoded: Issue = serde_json::from_str(&encoded).expect("issue should deserialize");
        assert_eq!(decoded, issue);
    }
}
