//! Stock keeping unit identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Characters that end the family prefix of a SKU (`ABC-001` → `ABC`).
const PREFIX_SEPARATORS: &[char] = &['-', '_', '.', ' ', '/'];

/// Identifier of an inventory record.
///
/// Always trimmed and never empty. Ordering is lexicographic on the text,
/// which is what "sort by item name" means on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Family prefix used by the prefix filter.
    ///
    /// Text before the first separator; without a separator, the leading
    /// non-digit run; if the SKU starts with a digit, the whole SKU.
    pub fn prefix(&self) -> &str {
        if let Some(idx) = self.0.find(PREFIX_SEPARATORS) {
            if idx > 0 {
                return &self.0[..idx];
            }
        }
        let end = self
            .0
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        if end == 0 { &self.0 } else { &self.0[..end] }
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0
    }
}
