//! Newtype IDs for type-safe entity references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Catalog product identifier, e.g. `muse-bfs-pink`.
///
/// Product IDs are URL slugs chosen by the catalog, so any string is accepted.
/// The newtype keeps them from being confused with names or image references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = ProductId::new("crystal-minnow");
        assert_eq!(id.to_string(), "crystal-minnow");
        assert_eq!(id.as_str(), "crystal-minnow");
    }

    #[test]
    fn test_compares_with_str() {
        let id = ProductId::from("mermaid-tears");
        assert!(id == *"mermaid-tears");
        assert!(id != *"candy-box-set");
    }

    #[test]
    fn test_serializes_transparently() {
        let id = ProductId::from("candy-box-set");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"candy-box-set\"");
    }
}
