//! Credential helper actions.
//!
//! Git invokes the helper once per action with the request on stdin:
//!
//! - `get`: look the item up and answer with `username=` / `password=`
//! - `store`: create the item, or edit it when it already exists
//! - `erase`: delete the item, ignoring the outcome

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::core::constants;
use crate::core::naming::ItemNamer;
use crate::core::protocol::{self, CredentialRequest};
use crate::core::store::{Login, SecretStore};
use crate::error::{Error, Result};

/// Action requested by git.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Store,
    Erase,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Get => "get",
            Action::Store => "store",
            Action::Erase => "erase",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "get" => Ok(Action::Get),
            "store" => Ok(Action::Store),
            "erase" => Ok(Action::Erase),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs one action against a secret store.
pub struct Dispatcher<S> {
    store: S,
    namer: ItemNamer,
}

impl<S: SecretStore> Dispatcher<S> {
    pub fn new(store: S, namer: ItemNamer) -> Self {
        Self { store, namer }
    }

    /// Read the request from `input` and perform `action`.
    ///
    /// Only `get` writes to `output`, and only once both fields are known.
    pub fn run(&self, action: Action, input: impl BufRead, output: impl Write) -> Result<()> {
        let request = protocol::read_request(input)?;
        debug!(%action, fields = request.len(), "dispatching");

        match action {
            Action::Get => self.get(&request, output),
            Action::Store => self.store(&request),
            Action::Erase => {
                self.erase(&request);
                Ok(())
            }
        }
    }

    fn get(&self, request: &CredentialRequest, output: impl Write) -> Result<()> {
        let item = self.namer.name(request.require("host")?);
        let secret = self.store.fetch(&item)?;

        let username = secret.get_field(constants::USERNAME_FIELD);
        let password = secret.get_field(constants::PASSWORD_FIELD);
        if username.is_empty() || password.is_empty() {
            return Err(Error::IncompleteCredential { item });
        }

        protocol::write_credential(output, username, password)
    }

    fn store(&self, request: &CredentialRequest) -> Result<()> {
        let host = request.require("host")?;
        let item = self.namer.name(host);
        let url = format!("{}://{}", request.get("protocol").unwrap_or_default(), host);
        let login = Login {
            url: &url,
            username: request.require("username")?,
            password: request.require("password")?,
        };

        // Any fetch failure counts as a missing item, so a transient error
        // leads to a create that op may reject as a duplicate.
        match self.store.fetch(&item) {
            Ok(_) => self.store.update(&item, login),
            Err(err) => {
                match &err {
                    Error::Store(store_err) if store_err.is_not_found() => {
                        debug!(item = %item, "item not found, creating")
                    }
                    _ => warn!(item = %item, error = %err, "lookup failed, creating item"),
                }
                self.store.create(&item, login)
            }
        }
    }

    fn erase(&self, request: &CredentialRequest) {
        let Ok(host) = request.require("host") else {
            debug!("erase without host, nothing to delete");
            return;
        };

        let item = self.namer.name(host);
        if let Err(err) = self.store.delete(&item) {
            debug!(item = %item, error = %err, "delete failed, ignoring");
        }
    }
}
