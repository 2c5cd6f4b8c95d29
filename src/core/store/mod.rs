//! Secret store abstraction.
//!
//! The dispatcher only talks to a [`SecretStore`]; [`OnePassword`] is the
//! implementation backed by the `op` command-line tool.

mod op;

pub use op::OnePassword;

use crate::core::item::SecretItem;
use crate::error::Result;

/// Login fields written by `create` and `update`.
#[derive(Debug, Clone, Copy)]
pub struct Login<'a> {
    pub url: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Operations the credential helper needs from a secret store.
pub trait SecretStore {
    /// Read the username and password fields of `item`.
    ///
    /// # Errors
    ///
    /// Fails when the store cannot be queried or its answer cannot be
    /// decoded. A missing item is reported as an error as well.
    fn fetch(&self, item: &str) -> Result<SecretItem>;

    /// Create a new login item titled `item`.
    fn create(&self, item: &str, login: Login<'_>) -> Result<()>;

    /// Overwrite the url, username and password of an existing item.
    fn update(&self, item: &str, login: Login<'_>) -> Result<()>;

    /// Delete `item`.
    fn delete(&self, item: &str) -> Result<()>;
}
