//! The interactive PR selection menu.

use crate::{
    display::DisplayPullRequest,
    errors::PoResult,
    pull_request::PullRequest,
};
use inquire::{list_option::ListOption, InquireError, Select};
use std::io::{self, Write};

/// The result of presenting the selection menu.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SelectionOutcome {
    /// The user confirmed a PR.
    Selected(PullRequest),
    /// The user aborted the menu.
    Cancelled,
}

/// Presents rendered PR rows and blocks until the user picks one or backs out.
pub trait PrSelector {
    /// Shows `header` as a non-selectable description above one selectable entry per row.
    fn select(
        &self,
        prompt: &str,
        header: &str,
        rows: Vec<DisplayPullRequest>,
    ) -> PoResult<SelectionOutcome>;
}

/// A [PrSelector] backed by an [inquire::Select] prompt.
#[derive(Debug, Clone, Copy)]
pub struct InquireSelector {
    page_size: usize,
}

impl InquireSelector {
    /// Creates a selector showing at most `page_size` rows at once.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }
}

impl PrSelector for InquireSelector {
    fn select(
        &self,
        prompt: &str,
        header: &str,
        rows: Vec<DisplayPullRequest>,
    ) -> PoResult<SelectionOutcome> {
        // inquire draws on stderr. The header sits above the prompt line.
        write_header(&mut io::stderr(), header)?;

        let answer = Select::new(prompt, rows)
            .with_page_size(self.page_size)
            .with_formatter(&format_answer)
            .with_scorer(&|input, row, _, _| filter_score(input, row))
            .prompt();

        match answer {
            Ok(row) => Ok(SelectionOutcome::Selected(row.into_inner())),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(SelectionOutcome::Cancelled)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes the column header on its own line.
fn write_header<W: Write>(w: &mut W, header: &str) -> io::Result<()> {
    writeln!(w, "{header}")?;
    w.flush()
}

/// The line left on screen once a PR is chosen.
fn format_answer(choice: ListOption<&DisplayPullRequest>) -> String {
    let pr = &choice.value.pr;
    format!("{} {}", pr.id_label(), pr.title)
}

/// Matches the filter input against the plain PR fields, ignoring case and escape codes.
fn filter_score(input: &str, row: &DisplayPullRequest) -> Option<i64> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Some(0);
    }

    let pr = &row.pr;
    let haystack = format!("{} {} {}", pr.id_label(), pr.title, pr.head_ref_name).to_lowercase();
    haystack.contains(&needle).then_some(0)
}
