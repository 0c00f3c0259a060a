//! Column widths for the pull request table.

use super::{created_label, rendered_width};
use crate::{
    constants::{
        BRANCH_LABEL, CREATED_LABEL, ID_LABEL, MAX_BRANCH_WIDTH, MAX_TITLE_WIDTH, TITLE_LABEL,
    },
    pull_request::PullRequest,
};
use chrono::{DateTime, Utc};

/// The width, in terminal columns, of each column in the table.
///
/// Computed once over the full PR list so the header and every row line up.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ColumnWidths {
    pub id: usize,
    pub title: usize,
    pub branch: usize,
    pub created: usize,
}

impl Default for ColumnWidths {
    /// The header label widths, which act as floors.
    fn default() -> Self {
        Self {
            id: rendered_width(ID_LABEL),
            title: rendered_width(TITLE_LABEL),
            branch: rendered_width(BRANCH_LABEL),
            created: rendered_width(CREATED_LABEL),
        }
    }
}

impl ColumnWidths {
    /// Computes the widths needed to display `prs` without truncation, then caps the title and
    /// branch columns.
    ///
    /// ## Takes
    /// - `prs` - Every pull request that will be rendered.
    /// - `now` - The instant relative creation times are measured against.
    pub fn compute(prs: &[PullRequest], now: DateTime<Utc>) -> Self {
        let mut widths = prs.iter().fold(Self::default(), |w, pr| Self {
            id: w.id.max(rendered_width(&pr.id_label())),
            title: w.title.max(rendered_width(&pr.title)),
            branch: w.branch.max(rendered_width(&pr.head_ref_name)),
            created: w
                .created
                .max(rendered_width(&created_label(pr.created_at, now))),
        });

        widths.title = widths.title.min(MAX_TITLE_WIDTH);
        widths.branch = widths.branch.min(MAX_BRANCH_WIDTH);

        tracing::debug!(?widths, "Computed column widths");
        widths
    }
}
