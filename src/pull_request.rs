//! The pull request record returned by `gh pr list`.

use crate::errors::PoResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An open pull request, as reported by the collaborator.
///
/// Records are read-only once decoded. Unknown fields are rejected, as are missing ones, so a
/// change in `gh`'s output surfaces as a parse error instead of silently defaulted values.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PullRequest {
    /// The PR number, unique within the repository.
    pub number: u64,
    /// The PR title.
    pub title: String,
    /// The name of the head branch.
    pub head_ref_name: String,
    /// Whether the PR is a draft. Only affects coloring.
    pub is_draft: bool,
    /// When the PR was opened.
    pub created_at: DateTime<Utc>,
}

impl PullRequest {
    /// The `#<number>` identifier shown in the ID column.
    pub fn id_label(&self) -> String {
        format!("#{}", self.number)
    }
}

/// Decodes the JSON array printed by `gh pr list --json ...`, preserving its order.
pub fn parse_pull_requests(json: &[u8]) -> PoResult<Vec<PullRequest>> {
    Ok(serde_json::from_slice(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PoError;
    use chrono::TimeZone;

    #[test]
    fn test_parse_preserves_order() {
        let json = br#"[
            {"number": 7, "title": "Second", "headRefName": "b", "isDraft": true, "createdAt": "2024-05-01T10:00:00Z"},
            {"number": 3, "title": "First", "headRefName": "a", "isDraft": false, "createdAt": "2024-04-01T10:00:00Z"}
        ]"#;
        let prs = parse_pull_requests(json).unwrap();

        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].number, 7);
        assert_eq!(prs[1].number, 3);
        assert!(prs[0].is_draft);
        assert_eq!(prs[1].head_ref_name, "a");
        assert_eq!(
            prs[1].created_at,
            Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_pull_requests(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let json = br#"[{"number": 1, "title": "t", "isDraft": false, "createdAt": "2024-05-01T10:00:00Z"}]"#;
        assert!(matches!(
            parse_pull_requests(json),
            Err(PoError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let json = br#"[{"number": 1, "title": "t", "headRefName": "b", "isDraft": false,
            "createdAt": "2024-05-01T10:00:00Z", "author": "octocat"}]"#;
        assert!(parse_pull_requests(json).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_pull_requests(b"no pull requests match your search"),
            Err(PoError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_id_label() {
        let pr = PullRequest {
            number: 1234,
            title: String::new(),
            head_ref_name: String::new(),
            is_draft: false,
            created_at: Utc::now(),
        };
        assert_eq!(pr.id_label(), "#1234");
    }
}
