//! Rendering of the table header and the selectable PR rows.

use super::{created_label, fit, pad_right, ColumnWidths};
use crate::{
    constants::{
        BRANCH_LABEL, COLUMN_GUTTER, CREATED_LABEL, CURSOR_GUTTER, ID_LABEL, TITLE_LABEL,
    },
    pull_request::PullRequest,
};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use nu_ansi_term::{Color, Style};
use std::fmt::Display;

/// The styles used by the table. Built once at startup and handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Ready-for-review PR identifiers.
    pub open: Style,
    /// Draft PR identifiers.
    pub draft: Style,
    /// Branch names.
    pub branch: Style,
    /// Relative creation times.
    pub created: Style,
    /// Header labels.
    pub header: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            open: Color::Green.normal(),
            draft: Color::Yellow.normal(),
            branch: Color::Cyan.normal(),
            created: Color::Fixed(8).normal(),
            header: Color::White.underline(),
        }
    }
}

impl Palette {
    /// A palette that emits no escape codes.
    pub fn plain() -> Self {
        Self {
            open: Style::new(),
            draft: Style::new(),
            branch: Style::new(),
            created: Style::new(),
            header: Style::new(),
        }
    }

    /// The default palette, or [Palette::plain] when `NO_COLOR` is set.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            Self::plain()
        } else {
            Self::default()
        }
    }

    /// The style for a PR's identifier, which depends on its draft state.
    pub fn id_style(&self, pr: &PullRequest) -> Style {
        if pr.is_draft {
            self.draft
        } else {
            self.open
        }
    }
}

/// Renders the header and rows of the PR table against a fixed set of [ColumnWidths].
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    widths: ColumnWidths,
    palette: Palette,
    now: DateTime<Utc>,
}

impl TableRenderer {
    /// Creates a renderer for the given layout.
    ///
    /// `now` must be the same instant the widths were computed against, so the created column
    /// lines up.
    pub fn new(widths: ColumnWidths, palette: Palette, now: DateTime<Utc>) -> Self {
        Self {
            widths,
            palette,
            now,
        }
    }

    /// Renders the header line.
    ///
    /// Each label is padded then underlined, and the whole line is indented to leave room for the
    /// selection cursor.
    pub fn header(&self) -> String {
        let labels = [
            (ID_LABEL, self.widths.id),
            (TITLE_LABEL, self.widths.title),
            (BRANCH_LABEL, self.widths.branch),
            (CREATED_LABEL, self.widths.created),
        ]
        .into_iter()
        .map(|(label, width)| self.palette.header.paint(pad_right(label, width)))
        .join(COLUMN_GUTTER);

        format!("{CURSOR_GUTTER}{labels}")
    }

    /// Renders the label for a single PR row.
    pub fn row(&self, pr: &PullRequest) -> String {
        let id = self
            .palette
            .id_style(pr)
            .paint(pad_right(&pr.id_label(), self.widths.id));
        let title = fit(&pr.title, self.widths.title);
        let branch = self
            .palette
            .branch
            .paint(fit(&pr.head_ref_name, self.widths.branch));
        let created = self.palette.created.paint(pad_right(
            &created_label(pr.created_at, self.now),
            self.widths.created,
        ));

        format!("{id}{COLUMN_GUTTER}{title}{COLUMN_GUTTER}{branch}{COLUMN_GUTTER}{created}")
    }

    /// Pairs every PR with its rendered row, preserving order.
    pub fn rows(&self, prs: Vec<PullRequest>) -> Vec<DisplayPullRequest> {
        prs.into_iter()
            .map(|pr| DisplayPullRequest {
                line: self.row(&pr),
                pr,
            })
            .collect()
    }
}

/// A pair of a rendered table row and the PR it represents, which implements [Display].
///
/// This is the option type handed to the selection menu.
#[derive(Debug, Clone)]
pub struct DisplayPullRequest {
    /// The rendered row.
    pub(crate) line: String,
    /// The PR behind the row.
    pub(crate) pr: PullRequest,
}

impl DisplayPullRequest {
    /// Returns the underlying [PullRequest].
    pub fn into_inner(self) -> PullRequest {
        self.pr
    }
}

impl Display for DisplayPullRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.line)
    }
}

/// Renders the one-line summary printed before checking out `pr`.
pub fn summary_line(pr: &PullRequest, palette: &Palette) -> String {
    format!(
        "{}{COLUMN_GUTTER}{}{COLUMN_GUTTER}{}",
        palette.id_style(pr).paint(pr.id_label()),
        pr.title,
        palette.branch.paint(&pr.head_ref_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::rendered_width;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn pr(number: u64, title: &str, branch: &str, is_draft: bool) -> PullRequest {
        PullRequest {
            number,
            title: title.to_string(),
            head_ref_name: branch.to_string(),
            is_draft,
            created_at: now() - Duration::hours(2),
        }
    }

    fn renderer(prs: &[PullRequest], palette: Palette) -> TableRenderer {
        TableRenderer::new(ColumnWidths::compute(prs, now()), palette, now())
    }

    #[test]
    fn test_plain_header_and_row_scenario() {
        let prs = [pr(42, "Fix bug", "fix/bug", false)];
        let r = renderer(&prs, Palette::plain());

        assert_eq!(
            r.header(),
            "  ID   TITLE    BRANCH   CREATED AT       "
        );
        assert_eq!(r.row(&prs[0]), "#42  Fix bug  fix/bug  about 2 hours ago");
    }

    #[test]
    fn test_header_and_rows_align() {
        let prs = [
            pr(1, "日本語のタイトル", "main", false),
            pr(1024, "Short", "feature/a-rather-long-branch-name-here", true),
            pr(7, &"long ".repeat(30), "x", false),
        ];
        let r = renderer(&prs, Palette::plain());
        let header_width = rendered_width(&r.header()) - CURSOR_GUTTER.len();

        for p in &prs {
            assert_eq!(rendered_width(&r.row(p)), header_width, "row for #{}", p.number);
        }
    }

    #[test]
    fn test_emoji_sequence_in_truncated_title_keeps_rows_aligned() {
        let prs = [
            pr(1, &format!("{}⚠️ and more", "x".repeat(98)), "b", false),
            pr(2, &"z".repeat(120), "b", false),
        ];
        let r = renderer(&prs, Palette::plain());
        let header_width = rendered_width(&r.header()) - CURSOR_GUTTER.len();

        for p in &prs {
            assert_eq!(rendered_width(&r.row(p)), header_width, "row for #{}", p.number);
        }
    }

    #[test]
    fn test_long_title_is_truncated_then_padded() {
        let prs = [pr(1, &"y".repeat(150), "b", false)];
        let r = renderer(&prs, Palette::plain());
        let row = r.row(&prs[0]);

        assert!(row.contains(&format!("{}…", "y".repeat(99))));
        assert!(!row.contains(&"y".repeat(100)));
    }

    #[test]
    fn test_colored_row() {
        let palette = Palette::default();
        let prs = [pr(42, "Fix bug", "fix/bug", false)];
        let r = renderer(&prs, palette);
        let row = r.row(&prs[0]);

        assert!(row.starts_with(&Color::Green.paint("#42").to_string()));
        assert!(row.contains(&Color::Cyan.paint("fix/bug").to_string()));
        assert!(row.contains(&Color::Fixed(8).paint("about 2 hours ago").to_string()));
    }

    #[test]
    fn test_draft_id_is_yellow() {
        let palette = Palette::default();
        let draft = pr(9, "WIP", "wip", true);
        let r = renderer(std::slice::from_ref(&draft), palette);

        assert!(r
            .row(&draft)
            .starts_with(&Color::Yellow.paint("#9").to_string()));
    }

    #[test]
    fn test_header_labels_are_underlined() {
        let r = renderer(&[], Palette::default());
        let header = r.header();
        assert!(header.starts_with("  "));
        assert!(header.contains(&Color::White.underline().paint("ID").to_string()));
        assert!(header.contains(&Color::White.underline().paint("CREATED AT").to_string()));
    }

    #[test]
    fn test_rows_preserve_order() {
        let prs = vec![pr(3, "c", "c", false), pr(1, "a", "a", false)];
        let r = renderer(&prs, Palette::plain());
        let rows = r.rows(prs);
        assert_eq!(rows[0].pr.number, 3);
        assert_eq!(rows[1].to_string(), rows[1].line);
        assert_eq!(rows[1].clone().into_inner().number, 1);
    }

    #[test]
    fn test_summary_line() {
        let p = pr(42, "Fix bug", "fix/bug", false);
        assert_eq!(summary_line(&p, &Palette::plain()), "#42  Fix bug  fix/bug");
    }
}
