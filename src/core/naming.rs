//! 1Password item naming.

/// Name of the item holding the credential for `host`.
///
/// The prefix is prepended verbatim; the host is neither normalized nor
/// escaped, so the same inputs always map to the same item.
pub fn item_name(host: &str, prefix: &str) -> String {
    format!("{}{}", prefix, host)
}

/// Derives item names using the prefix configured at startup.
#[derive(Debug, Clone, Default)]
pub struct ItemNamer {
    prefix: String,
}

impl ItemNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn name(&self, host: &str) -> String {
        item_name(host, &self.prefix)
    }
}
