//! The `gh` CLI collaborator.
//!
//! Every piece of GitHub data and every state change goes through `gh`, which owns
//! authentication, host resolution and networking. [GhClient] is the seam: [GhCli] shells out,
//! tests substitute canned responses.

use crate::{
    constants::PR_LIST_FIELDS,
    errors::{PoError, PoResult},
    pull_request::{parse_pull_requests, PullRequest},
};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    process::{Output, Stdio},
};
use tokio::process::Command;

/// The captured result of a collaborator call whose output is relayed after it finishes.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CommandOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// The exit code, or [None] if the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Returns `true` if the process exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// A short description of how the process exited.
    pub fn status_description(&self) -> String {
        describe_exit(self.exit_code)
    }
}

/// Describes a collaborator's exit, given its exit code or [None] when killed by a signal.
fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }
}

/// Operations delegated to the GitHub CLI.
#[async_trait]
pub trait GhClient: Send + Sync {
    /// Lists the open pull requests of the current repository, in `gh`'s order.
    ///
    /// ## Returns
    /// - `Ok(Vec<PullRequest>)` - The open PRs, possibly empty.
    /// - `Err(PoError::ListFailed)` - `gh` failed; carries its stderr.
    /// - `Err(PoError::ParseFailed)` - `gh` printed something that isn't a PR list.
    async fn list_pull_requests(&self) -> PoResult<Vec<PullRequest>>;

    /// Resolves the `owner/name` of the current repository. Best-effort.
    async fn resolve_repository_name(&self) -> Option<String>;

    /// Checks out the given PR's branch, capturing its output.
    ///
    /// A non-zero exit is reported through [CommandOutput::success], not as an `Err`, so the
    /// caller can relay the output before failing.
    async fn checkout(&self, number: u64) -> PoResult<CommandOutput>;

    /// Opens the given PR in the browser, with output going straight to the terminal.
    async fn open_in_browser(&self, number: u64) -> PoResult<()>;
}

/// A [GhClient] that runs the `gh` binary.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
}

impl GhCli {
    /// Creates a client that invokes `program` as the `gh` binary.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    /// Builds a [Command] for `gh` with the given arguments.
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }

    /// Renders `gh <args>` for error messages.
    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program.display(), args.join(" "))
    }

    /// Runs `gh` with the given arguments and captures its output.
    async fn output(&self, args: &[&str]) -> PoResult<CommandOutput> {
        tracing::debug!(command = %self.describe(args), "Running collaborator");
        let output = self
            .command(args)
            .output()
            .await
            .map_err(|source| PoError::Spawn {
                command: self.describe(args),
                source,
            })?;
        let output = CommandOutput::from(output);
        tracing::trace!(exit_code = ?output.exit_code, "Collaborator finished");
        Ok(output)
    }
}

#[async_trait]
impl GhClient for GhCli {
    async fn list_pull_requests(&self) -> PoResult<Vec<PullRequest>> {
        let output = self
            .output(&["pr", "list", "--json", PR_LIST_FIELDS])
            .await?;

        if !output.success() {
            return Err(PoError::ListFailed {
                stderr: output.stderr,
            });
        }

        parse_pull_requests(output.stdout.as_bytes())
    }

    async fn resolve_repository_name(&self) -> Option<String> {
        let output = self
            .output(&[
                "repo",
                "view",
                "--json",
                "nameWithOwner",
                "-q",
                ".nameWithOwner",
            ])
            .await
            .ok()?;

        let name = output.stdout.trim();
        (output.success() && !name.is_empty()).then(|| name.to_string())
    }

    async fn checkout(&self, number: u64) -> PoResult<CommandOutput> {
        self.output(&["pr", "checkout", &number.to_string()]).await
    }

    async fn open_in_browser(&self, number: u64) -> PoResult<()> {
        let number_arg = number.to_string();
        let args = ["browse", number_arg.as_str()];
        tracing::debug!(command = %self.describe(&args), "Running collaborator");

        let status = self
            .command(&args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| PoError::Spawn {
                command: self.describe(&args),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PoError::BrowseFailed {
                number,
                reason: describe_exit(status.code()),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success() {
        let ok = CommandOutput {
            exit_code: Some(0),
            ..Default::default()
        };
        let failed = CommandOutput {
            exit_code: Some(1),
            ..Default::default()
        };
        let killed = CommandOutput::default();

        assert!(ok.success());
        assert!(!failed.success());
        assert_eq!(failed.status_description(), "exit status 1");
        assert!(!killed.success());
        assert_eq!(killed.status_description(), "terminated by signal");
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let gh = GhCli::new("/nonexistent/gh-po-test-binary");
        let err = gh.checkout(1).await.unwrap_err();
        assert!(matches!(err, PoError::Spawn { .. }));
        assert!(err.to_string().contains("pr checkout 1"));
    }

    #[tokio::test]
    async fn test_repository_name_is_best_effort() {
        let gh = GhCli::new("/nonexistent/gh-po-test-binary");
        assert_eq!(gh.resolve_repository_name().await, None);
    }

    #[tokio::test]
    async fn test_failed_listing_carries_stderr() {
        // `false` ignores its arguments and exits 1.
        let gh = GhCli::new("false");
        assert!(matches!(
            gh.list_pull_requests().await,
            Err(PoError::ListFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_browse_reports_exit_like_checkout() {
        let gh = GhCli::new("false");
        match gh.open_in_browser(42).await {
            Err(PoError::BrowseFailed { number, reason }) => {
                assert_eq!(number, 42);
                assert_eq!(reason, "exit status 1");
            }
            other => panic!("expected BrowseFailed, got {other:?}"),
        }

        let checkout = gh.checkout(42).await.unwrap();
        assert_eq!(checkout.status_description(), "exit status 1");
    }

    #[tokio::test]
    async fn test_listing_non_json_is_parse_error() {
        // `echo` prints its arguments, which is not a JSON array.
        let gh = GhCli::new("echo");
        assert!(matches!(
            gh.list_pull_requests().await,
            Err(PoError::ParseFailed(_))
        ));
    }
}
