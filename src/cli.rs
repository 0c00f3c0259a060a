//! The CLI for `gh-po`.

use crate::{
    actions::{Action, Dispatcher},
    config::PoConfig,
    display::Palette,
    errors::PoResult,
    gh::GhCli,
    select::InquireSelector,
};
use anyhow::{anyhow, Result};
use clap::{
    builder::styling::{AnsiColor, Color, Style},
    ArgAction, Parser,
};
use std::{io, path::PathBuf};
use tracing::Level;

const ABOUT: &str = "Interactively select and checkout a pull request.
Optionally open the PR in the browser.";

const EXAMPLES: &str = "Examples:
  $ gh po              # Checkout only
  $ gh po --web        # Checkout and open in browser
  $ gh po --view       # Open in browser without checkout";

/// The CLI application for `gh-po`.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    name = "gh po",
    bin_name = "gh po",
    about = ABOUT,
    version,
    styles = cli_styles(),
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Open the PR in browser after checkout
    #[arg(short, long)]
    pub web: bool,
    /// Open the PR in browser without checkout
    #[arg(short = 'v', long)]
    pub view: bool,
    /// The `gh` binary to invoke
    #[arg(long, env = "GH_PO_GH", value_name = "PATH")]
    pub gh: Option<PathBuf>,
    /// Path to the configuration file
    #[arg(long, env = "GH_PO_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Don't animate a spinner while waiting on `gh`
    #[arg(long)]
    pub no_spinner: bool,
    /// Verbosity level (0-4)
    #[arg(long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Run the CLI application with the given arguments.
    pub async fn run(self) -> PoResult<()> {
        let config = PoConfig::load(self.config.as_deref())?;

        let gh = GhCli::new(self.gh.as_deref().unwrap_or(config.gh_path.as_path()));
        let selector = InquireSelector::new(config.page_size);
        let spinner = config.spinner && !self.no_spinner;
        let action = Action::from_flags(self.web, self.view);

        Dispatcher::new(&gh, &selector, Palette::from_env(), spinner)
            .run(action, &mut io::stdout())
            .await
    }

    /// Initializes the tracing subscriber
    ///
    /// # Returns
    /// - `Result<Self>` - Ok if successful, Err otherwise.
    pub(crate) fn init_tracing_subscriber(self) -> Result<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(match self.verbosity {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .finish();

        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;

        Ok(self)
    }
}

/// Styles for the CLI application.
const fn cli_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}
