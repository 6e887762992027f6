use crate::domain::common::ValidationError;
use serde::{Deserialize, Serialize};

/// Ordered set of known category names.
///
/// Names are unique (case-sensitive) and keep insertion order. Categories are
/// never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    names: Vec<String>,
}

impl CategoryCatalog {
    /// Build from a list, dropping blanks and duplicates
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for name in names {
            let _ = catalog.add(&name.into());
        }
        catalog
    }

    /// Append `name` (trimmed) unless it is already known.
    ///
    /// Returns `Ok(true)` when appended, `Ok(false)` when already present.
    pub fn add(&mut self, name: &str) -> Result<bool, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = CategoryCatalog::new(["Books", "Toys"]);
        assert_eq!(catalog.add("Garden"), Ok(true));
        assert_eq!(catalog.as_slice(), ["Books", "Toys", "Garden"]);
    }

    #[test]
    fn test_add_is_case_sensitive_noop_on_exact_match() {
        let mut catalog = CategoryCatalog::new(["Books"]);
        assert_eq!(catalog.add("Books"), Ok(false));
        assert_eq!(catalog.add(" Books "), Ok(false));
        assert_eq!(catalog.add("books"), Ok(true));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut catalog = CategoryCatalog::default();
        assert_eq!(catalog.add("   "), Err(ValidationError::EmptyCategoryName));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_new_dedupes() {
        let catalog = CategoryCatalog::new(["A", "B", "A", ""]);
        assert_eq!(catalog.as_slice(), ["A", "B"]);
        assert_eq!(catalog.first(), Some("A"));
    }
}
