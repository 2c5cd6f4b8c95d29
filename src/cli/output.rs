//! Diagnostics on stderr.
//!
//! Stdout carries the credential protocol, so everything meant for a human
//! goes to stderr. Colors are dropped when stderr is not a terminal or
//! NO_COLOR is set.

use clap::CommandFactory;
use console::style;

use super::Cli;
use crate::error::{Error, StoreError};

const INSTALL_URL: &str = "https://developer.1password.com/docs/cli/get-started/";

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print an error message.
///
/// Example: `✗ unknown action: frobnicate`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message.
///
/// Example: `→ run: eval $(op signin)`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print `git-credential-1password <version>`.
pub fn version() {
    eprintln!("git-credential-1password {}", env!("CARGO_PKG_VERSION"));
}

/// Print the version line followed by the full help text.
pub fn usage() {
    version();
    eprintln!("{}", Cli::command().render_help());
}

/// Suggested next step for an error, if there is an obvious one.
pub fn suggestion(err: &Error) -> Option<String> {
    match err {
        Error::Store(StoreError::Unavailable { .. }) => Some(format!(
            "install the 1Password CLI ({}) or pass --op-path",
            INSTALL_URL
        )),
        Error::Store(StoreError::CommandFailed { output, .. })
            if output.contains("signed in") || output.contains("signin") =>
        {
            Some("run: eval $(op signin)".to_string())
        }
        Error::IncompleteCredential { .. } => {
            Some("the item needs non-empty username and password fields (see --prefix)".to_string())
        }
        _ => None,
    }
}
