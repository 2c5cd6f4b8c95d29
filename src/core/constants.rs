//! Constants used throughout the helper.

/// Default name of the 1Password CLI executable.
pub const OP_PROGRAM: &str = "op";

/// Item category used for newly created credentials.
pub const LOGIN_CATEGORY: &str = "Login";

/// Fields requested from `op item get`.
pub const CREDENTIAL_FIELDS: &str = "username,password";

/// Label of the username field.
pub const USERNAME_FIELD: &str = "username";

/// Label of the password field.
pub const PASSWORD_FIELD: &str = "password";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GIT_CREDENTIAL_1PASSWORD_LOG";
