//! src/branch.rs

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // ASCII digits only: `\d` would also accept other Unicode digit classes.
    static ref BRANCH_PATTERN: Regex =
        Regex::new(r"^(feature|bugfix)/([a-zA-Z]+-[0-9]+)-(.*)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCategory {
    Feature,
    Bugfix,
}

impl BranchCategory {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "feature" => Some(Self::Feature),
            "bugfix" => Some(Self::Bugfix),
            _ => None,
        }
    }
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchCategory::Feature => f.write_str("feature"),
            BranchCategory::Bugfix => f.write_str("bugfix"),
        }
    }
}

/// An issue-tracker key such as `ABC-123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueKey(String);

impl IssueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A branch name that follows the `<category>/<KEY>-<summary>` convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    pub category: BranchCategory,
    pub key: IssueKey,
    pub summary: String,
}

/// 解析分支名，不符合约定时返回 None
pub fn parse_branch_name(branch: &str) -> Option<BranchRef> {
    let caps = BRANCH_PATTERN.captures(branch)?;
    let category = BranchCategory::from_prefix(caps.get(1)?.as_str())?;

    Some(BranchRef {
        category,
        key: IssueKey(caps.get(2)?.as_str().to_string()),
        summary: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_branch_yields_key() {
        let branch = parse_branch_name("feature/ABC-123-add-thing").unwrap();
        assert_eq!(branch.category, BranchCategory::Feature);
        assert_eq!(branch.key.as_str(), "ABC-123");
        assert_eq!(branch.summary, "add-thing");
    }

    #[test]
    fn test_bugfix_branch_yields_key() {
        let branch = parse_branch_name("bugfix/JIRA-7-fix-thing").unwrap();
        assert_eq!(branch.category, BranchCategory::Bugfix);
        assert_eq!(branch.key.to_string(), "JIRA-7");
    }

    #[test]
    fn test_empty_summary_still_matches() {
        let branch = parse_branch_name("feature/ab-1-").unwrap();
        assert_eq!(branch.key.as_str(), "ab-1");
        assert!(branch.summary.is_empty());
    }

    #[test]
    fn test_non_conforming_branches_are_rejected() {
        for name in [
            "main",
            "HEAD",
            "feature/ABC-123",
            "feature/ABC123-thing",
            "feature/123-thing",
            "hotfix/ABC-1-thing",
            "feat/ABC-1-thing",
            "Feature/ABC-1-thing",
            "xfeature/ABC-1-thing",
            "feature/ABC-١٢-thing",
            "feature/ABC-1-thing\nmore",
        ] {
            assert!(parse_branch_name(name).is_none(), "{name} should not match");
        }
    }
}
