//! Error types.
//!
//! Every failure is fatal except the outcome of `erase`, which the
//! dispatcher discards.

use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("username or password is empty for item '{item}', is the item named correctly?")]
    IncompleteCredential { item: String },

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading the credential helper protocol from stdin.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("invalid input: {line:?}")]
    Malformed { line: String },

    #[error("{0} is missing in the input")]
    MissingField(&'static str),
}

/// Errors talking to the `op` command-line tool.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot run {program}: {reason}")]
    Unavailable { program: String, reason: String },

    #[error("op item {verb} failed with {status}\n{output}")]
    CommandFailed {
        verb: &'static str,
        status: ExitStatus,
        output: String,
    },

    #[error("cannot decode op item get output: {source}\n{raw}")]
    Decode {
        #[source]
        source: serde_json::Error,
        raw: String,
    },
}

impl StoreError {
    /// Whether `op` reported that the requested item does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::CommandFailed { output, .. } => output.contains("isn't an item"),
            _ => false,
        }
    }
}

impl Error {
    /// Process exit code for this error.
    ///
    /// An unrecognised action is a usage error and shares clap's status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnknownAction(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
