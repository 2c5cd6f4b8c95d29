//! Git credential helper protocol.
//!
//! Git writes a request as `key=value` lines terminated by a blank line or
//! end of stream, and reads the answer to `get` in the same format.
//! See <https://git-scm.com/docs/git-credential#IOFMT>.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use tracing::trace;
use zeroize::Zeroize;

use crate::error::{ProtocolError, Result};

/// One credential request as sent by git.
#[derive(Debug, Default)]
pub struct CredentialRequest {
    fields: HashMap<String, String>,
}

impl CredentialRequest {
    /// Value of `key`, if git sent it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value of `key`, failing when it is absent or empty.
    pub fn require(&self, key: &'static str) -> Result<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ProtocolError::MissingField(key).into()),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Drop for CredentialRequest {
    fn drop(&mut self) {
        for value in self.fields.values_mut() {
            value.zeroize();
        }
    }
}

/// Read a request until a blank line or end of stream.
///
/// Each line is split on its first `=`; key and value are trimmed and a
/// repeated key overwrites the earlier value.
///
/// # Errors
///
/// Returns `ProtocolError::Malformed` for a line without `=`.
pub fn read_request(mut reader: impl BufRead) -> Result<CredentialRequest> {
    let mut request = CredentialRequest::default();
    let mut line = String::new();

    loop {
        line.zeroize();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let content = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if content.is_empty() {
            break;
        }

        let Some((key, value)) = content.split_once('=') else {
            return Err(ProtocolError::Malformed {
                line: content.to_string(),
            }
            .into());
        };

        request
            .fields
            .insert(key.trim().to_string(), value.trim().to_string());
    }
    line.zeroize();

    trace!(fields = request.len(), "read credential request");
    Ok(request)
}

/// Write the answer to a `get` request.
pub fn write_credential(mut writer: impl Write, username: &str, password: &str) -> Result<()> {
    write!(writer, "username={}\npassword={}\n", username, password)?;
    writer.flush()?;
    Ok(())
}
