//! Constants for the `gh-po` application.

pub(crate) const CONFIG_DIR_NAME: &str = "gh-po";
pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

pub(crate) const DEFAULT_GH_PATH: &str = "gh";
pub(crate) const DEFAULT_PAGE_SIZE: usize = 15;

pub(crate) const SELECT_PROMPT: &str = "Select a PR to checkout";
pub(crate) const LOADING_MESSAGE: &str = "Loading pull requests...";
pub(crate) const CHECKOUT_MESSAGE: &str = "Checking out PR...";

pub(crate) const ID_LABEL: &str = "ID";
pub(crate) const TITLE_LABEL: &str = "TITLE";
pub(crate) const BRANCH_LABEL: &str = "BRANCH";
pub(crate) const CREATED_LABEL: &str = "CREATED AT";

pub(crate) const MAX_TITLE_WIDTH: usize = 100;
pub(crate) const MAX_BRANCH_WIDTH: usize = 30;

pub(crate) const COLUMN_GUTTER: &str = "  ";
pub(crate) const CURSOR_GUTTER: &str = "  ";
pub(crate) const ELLIPSIS: char = '…';
pub(crate) const CREATED_PREFIX: &str = "about ";

pub(crate) const SPINNER_FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];
pub(crate) const SPINNER_TICK_MS: u64 = 100;
/// 128 + SIGINT.
pub(crate) const INTERRUPTED_EXIT_CODE: i32 = 130;

/// The JSON fields requested from `gh pr list`.
pub(crate) const PR_LIST_FIELDS: &str = "number,title,headRefName,isDraft,createdAt";
