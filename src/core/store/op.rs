//! 1Password CLI backend.
//!
//! Every operation is one `op item <verb>` invocation:
//!
//! ```text
//! op item get    [--account A] [--vault V] --format json --fields username,password <item>
//! op item create [--account A] [--vault V] --category=Login --title=<item> --url=<url> username=<u> password=<p>
//! op item edit   [--account A] [--vault V] <item> --url=<url> username=<u> password=<p>
//! op item delete [--account A] [--vault V] <item>
//! ```
//!
//! ## Requirements
//!
//! - `op` must be installed (<https://developer.1password.com/docs/cli>)
//! - the user must be signed in, or have desktop app integration enabled

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{Login, SecretStore};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::item::SecretItem;
use crate::error::{Result, StoreError};

/// Store client driving the `op` executable.
#[derive(Debug, Clone)]
pub struct OnePassword {
    program: PathBuf,
    selectors: Vec<String>,
}

impl OnePassword {
    pub fn new(config: &Config) -> Self {
        let mut selectors = Vec::new();
        if let Some(account) = &config.account {
            selectors.push("--account".to_string());
            selectors.push(account.clone());
        }
        if let Some(vault) = &config.vault {
            selectors.push("--vault".to_string());
            selectors.push(vault.clone());
        }

        Self {
            program: config.op_path.clone(),
            selectors,
        }
    }

    /// Arguments for `op item <verb>`, selectors first.
    fn item_args(&self, verb: &str, args: Vec<String>) -> Vec<String> {
        let mut full = Vec::with_capacity(2 + self.selectors.len() + args.len());
        full.push("item".to_string());
        full.push(verb.to_string());
        full.extend(self.selectors.iter().cloned());
        full.extend(args);
        full
    }

    /// Run `op item <verb>` and return its stdout.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if `op` cannot be found or started,
    /// and `StoreError::CommandFailed` with stdout and stderr when it exits
    /// non-zero.
    fn run(&self, verb: &'static str, args: Vec<String>) -> Result<Zeroizing<String>> {
        let program = which::which(&self.program).map_err(|e| StoreError::Unavailable {
            program: self.program.display().to_string(),
            reason: e.to_string(),
        })?;

        let args = Zeroizing::new(self.item_args(verb, args));
        trace!(
            program = %program.display(),
            args = %redact(&args).join(" "),
            "running op"
        );

        let output = Command::new(&program)
            .args(args.iter())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| StoreError::Unavailable {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        let stdout = Zeroizing::new(String::from_utf8_lossy(&output.stdout).into_owned());
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(verb, status = %output.status, "op failed");
            return Err(StoreError::CommandFailed {
                verb,
                status: output.status,
                output: format!("{}{}", stdout.as_str(), stderr),
            }
            .into());
        }

        trace!(verb, stdout_len = stdout.len(), "op succeeded");
        Ok(stdout)
    }
}

/// Assignment arguments for the login fields.
fn login_args(login: Login<'_>) -> Vec<String> {
    vec![
        format!("--url={}", login.url),
        format!("{}={}", constants::USERNAME_FIELD, login.username),
        format!("{}={}", constants::PASSWORD_FIELD, login.password),
    ]
}

/// Copy of `args` with the value of every `field=value` assignment hidden.
fn redact(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((field, _)) if !arg.starts_with("--") => format!("{}=<redacted>", field),
            _ => arg.clone(),
        })
        .collect()
}

impl SecretStore for OnePassword {
    fn fetch(&self, item: &str) -> Result<SecretItem> {
        let raw = self.run(
            "get",
            vec![
                "--format".to_string(),
                "json".to_string(),
                "--fields".to_string(),
                constants::CREDENTIAL_FIELDS.to_string(),
                item.to_string(),
            ],
        )?;
        let secret = SecretItem::from_json(&raw)?;
        debug!(item, fields = secret.len(), "fetched item");
        Ok(secret)
    }

    fn create(&self, item: &str, login: Login<'_>) -> Result<()> {
        let mut args = vec![
            format!("--category={}", constants::LOGIN_CATEGORY),
            format!("--title={}", item),
        ];
        args.extend(login_args(login));
        self.run("create", args)?;
        debug!(item, "created item");
        Ok(())
    }

    fn update(&self, item: &str, login: Login<'_>) -> Result<()> {
        let mut args = vec![item.to_string()];
        args.extend(login_args(login));
        self.run("edit", args)?;
        debug!(item, "updated item");
        Ok(())
    }

    fn delete(&self, item: &str) -> Result<()> {
        self.run("delete", vec![item.to_string()])?;
        debug!(item, "deleted item");
        Ok(())
    }
}
