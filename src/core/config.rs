//! Runtime configuration.
//!
//! Fixed once at startup from command-line flags (or their environment
//! fallbacks) and handed to the item namer and the store client.

use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;

/// Settings shared by every `op` invocation of one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prepended to the host to form the item name.
    pub prefix: String,
    /// Value for `op --account`.
    pub account: Option<String>,
    /// Value for `op --vault`.
    pub vault: Option<String>,
    /// The `op` executable, either a bare name looked up in `PATH` or a path.
    pub op_path: PathBuf,
}

impl Config {
    /// Build a configuration, treating empty selectors as unset.
    pub fn new(
        prefix: Option<String>,
        account: Option<String>,
        vault: Option<String>,
        op_path: Option<PathBuf>,
    ) -> Self {
        let config = Self {
            prefix: prefix.unwrap_or_default(),
            account: account.filter(|a| !a.is_empty()),
            vault: vault.filter(|v| !v.is_empty()),
            op_path: op_path
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(constants::OP_PROGRAM)),
        };

        debug!(
            prefix = %config.prefix,
            account = ?config.account,
            vault = ?config.vault,
            op = %config.op_path.display(),
            "configuration"
        );
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}
