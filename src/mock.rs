// SPDX-License-Identifier: MPL-2.0
//! Hardcoded sample data shown by the console screens.
//!
//! Nothing here talks to a tracker: issues, documents, statistics and the
//! activity feed are fixed tables, and "conversion" renders an issue into a
//! markdown string locally.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Workflow state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    Open,
    InProgress,
    Closed,
    Merged,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Closed,
        IssueStatus::Merged,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            IssueStatus::Open => "issue-status-open",
            IssueStatus::InProgress => "issue-status-in-progress",
            IssueStatus::Closed => "issue-status-closed",
            IssueStatus::Merged => "issue-status-merged",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            IssueStatus::Open => palette::NEON_CYAN,
            IssueStatus::InProgress => palette::NEON_AMBER,
            IssueStatus::Closed => palette::GRAY_400,
            IssueStatus::Merged => palette::NEON_GREEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u32,
    pub title: &'static str,
    pub status: IssueStatus,
    pub author: &'static str,
    pub labels: &'static [&'static str],
    pub created: &'static str,
    pub comments: u32,
    pub body: &'static str,
}

const DEFAULT_BODY: &str = "No description provided.";

const CONVERSION_BODY: &str = "\
## Description

Convert GitHub issues into markdown documents automatically.

## Requirements

1. **Basic conversion**
   - Issue title becomes the document title
   - Issue body becomes the document body
   - Comments become an optional appendix

2. **Metadata**
   - Creation and update timestamps
   - Labels and milestone
   - Assignees";

pub const ISSUES: &[Issue] = &[
    Issue {
        number: 1847,
        title: "Implement issue conversion",
        status: IssueStatus::Open,
        author: "mervyn",
        labels: &["feature", "high-priority"],
        created: "2025-01-06",
        comments: 5,
        body: CONVERSION_BODY,
    },
    Issue {
        number: 1846,
        title: "Fix formatting issues in generated documents",
        status: IssueStatus::InProgress,
        author: "dev-team",
        labels: &["bug", "docs"],
        created: "2025-01-05",
        comments: 12,
        body: "Nested lists lose their indentation after conversion.",
    },
    Issue {
        number: 1845,
        title: "Add batch export",
        status: IssueStatus::Open,
        author: "contributor",
        labels: &["enhancement"],
        created: "2025-01-05",
        comments: 3,
        body: "Allow exporting every selected issue as a single archive.",
    },
    Issue {
        number: 1844,
        title: "Optimize markdown rendering performance",
        status: IssueStatus::Closed,
        author: "mervyn",
        labels: &["performance"],
        created: "2025-01-04",
        comments: 8,
        body: DEFAULT_BODY,
    },
    Issue {
        number: 1843,
        title: "Integrate GitHub API v4",
        status: IssueStatus::Merged,
        author: "dev-team",
        labels: &["api", "backend"],
        created: "2025-01-04",
        comments: 15,
        body: "Switch issue fetching to the GraphQL endpoint.",
    },
    Issue {
        number: 1842,
        title: "Add user authentication",
        status: IssueStatus::Open,
        author: "security",
        labels: &["security", "feature"],
        created: "2025-01-03",
        comments: 20,
        body: DEFAULT_BODY,
    },
    Issue {
        number: 1841,
        title: "Implement search",
        status: IssueStatus::InProgress,
        author: "frontend",
        labels: &["feature", "ui"],
        created: "2025-01-03",
        comments: 7,
        body: "Full-text search over titles and issue numbers.",
    },
    Issue {
        number: 1840,
        title: "Improve error handling",
        status: IssueStatus::Closed,
        author: "mervyn",
        labels: &["bug-fix"],
        created: "2025-01-02",
        comments: 4,
        body: DEFAULT_BODY,
    },
];

#[must_use]
pub fn find_issue(number: u32) -> Option<&'static Issue> {
    ISSUES.iter().find(|issue| issue.number == number)
}

/// Issues whose title or number contains `query` (case-insensitive) and whose
/// status matches `status` when given.
pub fn filter_issues<'a>(
    query: &'a str,
    status: Option<IssueStatus>,
) -> impl Iterator<Item = &'static Issue> + 'a {
    let query = query.trim().to_lowercase();
    ISSUES.iter().filter(move |issue| {
        let matches_query = query.is_empty()
            || issue.title.to_lowercase().contains(&query)
            || issue.number.to_string().contains(&query);
        matches_query && status.is_none_or(|wanted| issue.status == wanted)
    })
}

/// Renders an issue as the markdown document the converter would produce.
#[must_use]
pub fn issue_markdown(issue: &Issue) -> String {
    let labels = issue
        .labels
        .iter()
        .map(|label| format!("`{label}`"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "# {title}\n\n> Issue #{number} opened by @{author} on {created}\n\n**Labels:** {labels}\n\n{body}\n",
        title = issue.title,
        number = issue.number,
        author = issue.author,
        created = issue.created,
        body = issue.body,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Folder { items: u32 },
    Markdown { size_bytes: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: u32,
    pub name: &'static str,
    pub kind: DocumentKind,
    pub modified: &'static str,
}

impl Document {
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, DocumentKind::Folder { .. })
    }
}

pub const DOCUMENTS: &[Document] = &[
    Document {
        id: 1,
        name: "API documentation",
        kind: DocumentKind::Folder { items: 24 },
        modified: "2025-01-06",
    },
    Document {
        id: 2,
        name: "development-guide.md",
        kind: DocumentKind::Markdown { size_bytes: 46_080 },
        modified: "2025-01-05",
    },
    Document {
        id: 3,
        name: "System architecture",
        kind: DocumentKind::Folder { items: 12 },
        modified: "2025-01-05",
    },
    Document {
        id: 4,
        name: "deployment.md",
        kind: DocumentKind::Markdown {
            size_bytes: 131_072,
        },
        modified: "2025-01-04",
    },
    Document {
        id: 5,
        name: "User manual",
        kind: DocumentKind::Folder { items: 8 },
        modified: "2025-01-04",
    },
    Document {
        id: 6,
        name: "CHANGELOG.md",
        kind: DocumentKind::Markdown { size_bytes: 12_288 },
        modified: "2025-01-03",
    },
    Document {
        id: 7,
        name: "contributing.md",
        kind: DocumentKind::Markdown { size_bytes: 34_816 },
        modified: "2025-01-03",
    },
    Document {
        id: 8,
        name: "api-reference.md",
        kind: DocumentKind::Markdown {
            size_bytes: 262_144,
        },
        modified: "2025-01-02",
    },
];

#[must_use]
pub fn find_document(id: u32) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|doc| doc.id == id)
}

/// Markdown body shown in the document preview.
#[must_use]
pub fn document_markdown(doc: &Document) -> String {
    format!(
        "# {name}\n\n\
         Generated by Issue2MD.\n\n\
         ## Overview\n\n\
         This document was converted from tracked issues and keeps their\n\
         labels, authors and discussion history.\n\n\
         ## Usage\n\n\
         ```bash\n\
         issue2md convert --repo owner/project --issue 1847\n\
         ```\n\n\
         | Field | Value |\n\
         |-------|-------|\n\
         | Modified | {modified} |\n",
        name = doc.name,
        modified = doc.modified,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A dashboard statistic tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label_key: &'static str,
    pub value: u64,
    pub change: &'static str,
    pub trend: Trend,
    pub color: Color,
}

pub static STATS: [Stat; 4] = [
    Stat {
        label_key: "stat-total-issues",
        value: 2847,
        change: "+12.5%",
        trend: Trend::Up,
        color: palette::NEON_CYAN,
    },
    Stat {
        label_key: "stat-converted",
        value: 2341,
        change: "+8.3%",
        trend: Trend::Up,
        color: palette::NEON_GREEN,
    },
    Stat {
        label_key: "stat-processing",
        value: 428,
        change: "-2.1%",
        trend: Trend::Down,
        color: palette::NEON_AMBER,
    },
    Stat {
        label_key: "stat-failed",
        value: 78,
        change: "+5.7%",
        trend: Trend::Up,
        color: palette::NEON_PINK,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Convert,
    Sync,
    Error,
}

impl ActivityKind {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ActivityKind::Convert => "activity-convert",
            ActivityKind::Sync => "activity-sync",
            ActivityKind::Error => "activity-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Processing,
    Failed,
}

impl ActivityStatus {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ActivityStatus::Success => palette::NEON_GREEN,
            ActivityStatus::Processing => palette::NEON_AMBER,
            ActivityStatus::Failed => palette::NEON_PINK,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ActivityStatus::Success => "✓",
            ActivityStatus::Processing => "…",
            ActivityStatus::Failed => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub issue: u32,
    pub status: ActivityStatus,
    pub minutes_ago: i64,
}

pub static RECENT_ACTIVITY: [Activity; 5] = [
    Activity {
        id: 1,
        kind: ActivityKind::Convert,
        issue: 1842,
        status: ActivityStatus::Success,
        minutes_ago: 2,
    },
    Activity {
        id: 2,
        kind: ActivityKind::Sync,
        issue: 1841,
        status: ActivityStatus::Processing,
        minutes_ago: 5,
    },
    Activity {
        id: 3,
        kind: ActivityKind::Convert,
        issue: 1840,
        status: ActivityStatus::Success,
        minutes_ago: 8,
    },
    Activity {
        id: 4,
        kind: ActivityKind::Error,
        issue: 1839,
        status: ActivityStatus::Failed,
        minutes_ago: 12,
    },
    Activity {
        id: 5,
        kind: ActivityKind::Convert,
        issue: 1838,
        status: ActivityStatus::Success,
        minutes_ago: 15,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_numbers_are_unique() {
        let mut numbers: Vec<u32> = ISSUES.iter().map(|i| i.number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), ISSUES.len());
    }

    #[test]
    fn filter_matches_title_and_number() {
        assert_eq!(filter_issues("SEARCH", None).count(), 1);
        assert_eq!(
            filter_issues("1843", None).map(|i| i.number).collect::<Vec<_>>(),
            [1843]
        );
        assert_eq!(filter_issues("", None).count(), ISSUES.len());
    }

    #[test]
    fn filter_by_status() {
        assert!(filter_issues("", Some(IssueStatus::Closed)).all(|i| i.status == IssueStatus::Closed));
        assert_eq!(filter_issues("", Some(IssueStatus::Merged)).count(), 1);
    }

    #[test]
    fn markdown_contains_metadata() {
        let issue = find_issue(1847).unwrap();
        let markdown = issue_markdown(issue);
        assert!(markdown.starts_with("# Implement issue conversion"));
        assert!(markdown.contains("#1847"));
        assert!(markdown.contains("`high-priority`"));
    }

    #[test]
    fn documents_lookup() {
        assert!(find_document(1).is_some_and(Document::is_folder));
        assert!(find_document(2).is_some_and(|d| !d.is_folder()));
        assert!(find_document(99).is_none());
    }
}
