use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single label in bytes (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Canonical text form of the empty (root) name.
const ROOT_TEXT: &str = "ROOT";

/// An ordered sequence of ASCII labels. The empty sequence is the DNS root.
///
/// Labels are compared byte-exact; no case folding is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Builds a name from decoded labels, validating each one.
    pub fn from_labels(labels: Vec<String>) -> Result<Self, DomainError> {
        for label in &labels {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is {} bytes (must be 1-{})",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            if !label.is_ascii() {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' contains non-ASCII bytes",
                    label
                )));
            }
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(ROOT_TEXT);
        }
        f.write_str(&self.labels.join("."))
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    /// Parses the canonical text form. A single trailing dot is accepted
    /// and ignored (`"example.com."` == `"example.com"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ROOT_TEXT || s == "." || s.is_empty() {
            return Ok(Self::root());
        }
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        let labels = trimmed.split('.').map(str::to_string).collect();
        Self::from_labels(labels)
    }
}
