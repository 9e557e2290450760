//! Auction UI Style
//!
//! Scoped style class mapping.
//!
//! The CSS build emits one class per logical name, suffixed so that
//! independently authored fragments cannot collide. This crate holds the
//! resulting mapping and answers lookups; it does not generate names and it
//! does not fall back when a name is missing.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Mapping from logical class names to build-generated scoped identifiers
///
/// Read-only from the renderer's point of view: fragments borrow the mapping
/// and call [`resolve`](ScopedClasses::resolve) per logical name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ScopedClasses {
    classes: HashMap<String, String>,
}

impl ScopedClasses {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from (logical, scoped) pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            classes: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a class manifest: a flat JSON object of logical name to
    /// scoped identifier, exactly as the CSS build wrote it
    pub fn from_json(input: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a class manifest from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let classes = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            count = classes.len(),
            "loaded scoped class manifest"
        );
        Ok(classes)
    }

    /// Add a single mapping entry
    pub fn insert(&mut self, logical: impl Into<String>, scoped: impl Into<String>) {
        self.classes.insert(logical.into(), scoped.into());
    }

    /// Look up the scoped identifier for a logical class name
    ///
    /// A missing name yields `None`; callers propagate the absence rather
    /// than substituting a default class.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.classes.get(name).map(String::as_str)
    }

    /// Number of mapped names
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScopedClasses {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Style mapping error
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("failed to read class manifest {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed class manifest")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_name() {
        let classes = ScopedClasses::from_entries([("welcome", "welcome_a1b2")]);
        assert_eq!(classes.resolve("welcome"), Some("welcome_a1b2"));
    }

    #[test]
    fn test_resolve_missing_name() {
        let classes = ScopedClasses::new();
        assert_eq!(classes.resolve("welcome"), None);
    }

    #[test]
    fn test_from_json_manifest() {
        let manifest = r#"{ "welcome": "welcome_a1b2", "lot-card": "lot-card_9f3e" }"#;
        let classes = ScopedClasses::from_json(manifest).unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.resolve("lot-card"), Some("lot-card_9f3e"));
    }

    #[test]
    fn test_from_json_rejects_malformed_manifest() {
        let err = ScopedClasses::from_json("{ \"welcome\": 33 }").unwrap_err();
        assert!(matches!(err, StyleError::Malformed(_)));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.json");
        std::fs::write(&path, r#"{ "welcome": "welcome_a1b2" }"#).unwrap();

        let classes = ScopedClasses::load(&path).unwrap();
        assert_eq!(classes.resolve("welcome"), Some("welcome_a1b2"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScopedClasses::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }
}
