//! Decoded `op item get` output.

use serde::Deserialize;
use zeroize::Zeroize;

use crate::error::{Result, StoreError};

/// A single labelled field of a 1Password item.
///
/// `op` emits more attributes (`id`, `type`, `purpose`, `reference`); only
/// the label and value are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

impl Drop for Field {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// `op` prints an array when several fields match `--fields` and a bare
/// object when only one does.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldList {
    Many(Vec<Field>),
    One(Field),
}

/// The fields returned for one item, in the order `op` printed them.
#[derive(Debug, Clone, Default)]
pub struct SecretItem {
    fields: Vec<Field>,
}

impl SecretItem {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Decode the JSON printed by `op item get --format json`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` with the raw output when it is not a
    /// field or a list of fields.
    pub fn from_json(raw: &str) -> Result<Self> {
        let fields = match serde_json::from_str(raw) {
            Ok(FieldList::Many(fields)) => fields,
            Ok(FieldList::One(field)) => vec![field],
            Err(source) => {
                return Err(StoreError::Decode {
                    source,
                    raw: raw.to_string(),
                }
                .into())
            }
        };
        Ok(Self { fields })
    }

    /// Value of the first field labelled `label`, or `""` when there is none.
    pub fn get_field(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
