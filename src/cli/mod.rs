//! Command-line interface.

pub mod output;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::config::Config;
use crate::core::dispatch::{Action, Dispatcher};
use crate::core::naming::ItemNamer;
use crate::core::store::OnePassword;
use crate::error::Result;

const ACTIONS_HELP: &str = "\
Actions:
  get            Generate credential [called by Git]
  store          Store credential [called by Git]
  erase          Erase credential [called by Git]";

/// Git credential helper backed by the 1Password CLI.
#[derive(Parser, Debug)]
#[command(
    name = "git-credential-1password",
    about = "Git credential helper backed by the 1Password CLI",
    override_usage = "git credential-1password [<options>] <action>",
    after_help = ACTIONS_HELP,
    disable_version_flag = true
)]
pub struct Cli {
    /// Action requested by git (get, store or erase)
    pub action: Option<String>,

    /// 1Password account
    #[arg(long, env = "GIT_CREDENTIAL_1PASSWORD_ACCOUNT", hide_env_values = true)]
    pub account: Option<String>,

    /// 1Password vault
    #[arg(long, env = "GIT_CREDENTIAL_1PASSWORD_VAULT", hide_env_values = true)]
    pub vault: Option<String>,

    /// 1Password item name prefix
    #[arg(long, env = "GIT_CREDENTIAL_1PASSWORD_PREFIX", hide_env_values = true)]
    pub prefix: Option<String>,

    /// Path to the 1Password CLI executable
    #[arg(long, value_name = "PATH", env = "GIT_CREDENTIAL_1PASSWORD_OP")]
    pub op_path: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print version
    #[arg(long)]
    pub version: bool,
}

impl Cli {
    /// Configuration for this run.
    pub fn config(&self) -> Config {
        Config::new(
            self.prefix.clone(),
            self.account.clone(),
            self.vault.clone(),
            self.op_path.clone(),
        )
    }
}

/// Run one credential helper action against stdin and stdout.
///
/// # Errors
///
/// Returns `Error::UnknownAction` for anything but `get`, `store` or
/// `erase`, and any failure of the action itself.
pub fn execute(action: &str, config: Config) -> Result<()> {
    let action: Action = action.parse()?;
    debug!(%action, "starting");

    let dispatcher = Dispatcher::new(OnePassword::new(&config), ItemNamer::new(config.prefix));
    dispatcher.run(action, io::stdin().lock(), io::stdout().lock())
}
