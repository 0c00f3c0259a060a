//! The selection and dispatch flow of the `gh-po` application.

use crate::{
    constants::{CHECKOUT_MESSAGE, LOADING_MESSAGE, SELECT_PROMPT},
    display::{summary_line, ColumnWidths, Palette, TableRenderer},
    errors::{PoError, PoResult},
    gh::GhClient,
    pull_request::PullRequest,
    select::{PrSelector, SelectionOutcome},
    spinner::spin_while,
};
use chrono::Utc;
use std::io::Write;

/// What to do with the chosen pull request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    /// Open the PR in the browser without checking it out.
    Browse,
    /// Check out the PR's branch.
    Checkout,
    /// Check out the PR's branch, then open it in the browser if that succeeded.
    CheckoutThenBrowse,
}

impl Action {
    /// Resolves the action from the `--web` and `--view` flags. `view` wins when both are set.
    pub fn from_flags(web: bool, view: bool) -> Self {
        match (web, view) {
            (_, true) => Self::Browse,
            (false, false) => Self::Checkout,
            (true, false) => Self::CheckoutThenBrowse,
        }
    }
}

/// Drives one run: list, select, then check out and/or browse.
pub struct Dispatcher<'a, G, S> {
    gh: &'a G,
    selector: &'a S,
    palette: Palette,
    spinner: bool,
}

impl<'a, G: GhClient, S: PrSelector> Dispatcher<'a, G, S> {
    /// Creates a new [Dispatcher].
    ///
    /// ## Takes
    /// - `gh` - The collaborator that lists, checks out, and browses PRs.
    /// - `selector` - The menu used to pick a PR.
    /// - `palette` - Styles for the table and summary line.
    /// - `spinner` - Whether to animate a spinner while waiting on `gh`.
    pub fn new(gh: &'a G, selector: &'a S, palette: Palette, spinner: bool) -> Self {
        Self {
            gh,
            selector,
            palette,
            spinner,
        }
    }

    /// Runs the flow, writing this tool's own messages and relayed checkout output to `out`.
    ///
    /// An empty PR list is a successful run. Every other early exit is an error.
    pub async fn run<W: Write>(&self, action: Action, out: &mut W) -> PoResult<()> {
        let prs = spin_while(LOADING_MESSAGE, self.spinner, self.gh.list_pull_requests()).await?;
        tracing::info!(count = prs.len(), "Listed open pull requests");

        if prs.is_empty() {
            return self.report_empty(out).await;
        }

        let pr = match self.choose(prs)? {
            SelectionOutcome::Selected(pr) => pr,
            SelectionOutcome::Cancelled => return Err(PoError::SelectionCancelled),
        };
        tracing::info!(number = pr.number, ?action, "Selected pull request");

        match action {
            Action::Browse => self.browse(&pr).await,
            Action::Checkout => self.checkout(&pr, out).await,
            Action::CheckoutThenBrowse => {
                self.checkout(&pr, out).await?;
                writeln!(out)?;
                out.flush()?;
                self.browse(&pr).await
            }
        }
    }

    /// Prints the no-PRs notice, naming the repository when `gh` can tell us which it is.
    async fn report_empty<W: Write>(&self, out: &mut W) -> PoResult<()> {
        match self.gh.resolve_repository_name().await {
            Some(repo) => writeln!(out, "no open pull requests in {repo}")?,
            None => {
                tracing::debug!("Could not resolve repository name");
                writeln!(out, "no open pull requests")?
            }
        }
        Ok(())
    }

    /// Lays out the table over every PR and hands the rows to the selector.
    fn choose(&self, prs: Vec<PullRequest>) -> PoResult<SelectionOutcome> {
        let now = Utc::now();
        let widths = ColumnWidths::compute(&prs, now);
        let renderer = TableRenderer::new(widths, self.palette, now);

        self.selector
            .select(SELECT_PROMPT, &renderer.header(), renderer.rows(prs))
    }

    /// Checks out `pr`, relaying `gh`'s output before reporting the result.
    async fn checkout<W: Write>(&self, pr: &PullRequest, out: &mut W) -> PoResult<()> {
        writeln!(out, "{}\n", summary_line(pr, &self.palette))?;
        out.flush()?;

        let output = spin_while(CHECKOUT_MESSAGE, self.spinner, self.gh.checkout(pr.number)).await?;
        write!(out, "{}", output.stdout)?;
        write!(out, "{}", output.stderr)?;
        out.flush()?;

        if !output.success() {
            return Err(PoError::CheckoutFailed {
                number: pr.number,
                reason: output.status_description(),
            });
        }
        Ok(())
    }

    async fn browse(&self, pr: &PullRequest) -> PoResult<()> {
        self.gh.open_in_browser(pr.number).await
    }
}
