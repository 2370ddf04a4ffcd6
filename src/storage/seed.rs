//! Seed data loaded into the library at startup

use crate::core::entity::{Author, Book};
use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Initial contents of the library
///
/// The default seed is the built-in catalogue. A seed can also be read from a
/// YAML document:
///
/// ```yaml
/// authors:
///   - { id: 1, name: "Ursula K. Le Guin" }
/// books:
///   - { id: 1, name: "A Wizard of Earthsea", author_id: 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl Seed {
    /// Load a seed from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load a seed from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// An empty library
    pub fn empty() -> Self {
        Self {
            authors: Vec::new(),
            books: Vec::new(),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            authors: vec![
                Author::new(1, "J. K. Rowling"),
                Author::new(2, "J. R. R. Tolkien"),
                Author::new(3, "Brent Weeks"),
            ],
            books: vec![
                Book::new(1, "Harry Potter and the Chamber of Secrets", 1),
                Book::new(2, "Harry Potter and the Prisoner of Azkaban", 1),
                Book::new(3, "Harry Potter and the Goblet of Fire", 1),
                Book::new(4, "The Fellowship of the Ring", 2),
                Book::new(5, "The Two Towers", 2),
                Book::new(6, "The Return of the King", 2),
                Book::new(7, "The Way of Shadows", 3),
                Book::new(8, "Beyond the Shadows", 3),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let seed = Seed::default();
        assert_eq!(seed.authors.len(), 3);
        assert_eq!(seed.books.len(), 8);

        let ids: Vec<_> = seed.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_from_yaml() {
        let yaml = r#"
authors:
  - { id: 10, name: "Ursula K. Le Guin" }
books:
  - { id: 1, name: "A Wizard of Earthsea", author_id: 10 }
  - { id: 2, name: "The Lathe of Heaven", author_id: 10 }
"#;
        let seed = Seed::from_yaml_str(yaml).unwrap();
        assert_eq!(seed.authors, vec![Author::new(10, "Ursula K. Le Guin")]);
        assert_eq!(seed.books.len(), 2);
        assert_eq!(seed.books[1].author_id, 10);
    }

    #[test]
    fn test_seed_missing_sections_default_to_empty() {
        let seed = Seed::from_yaml_str("authors: []").unwrap();
        assert_eq!(seed, Seed::empty());
    }

    #[test]
    fn test_seed_file_not_found() {
        let err = Seed::from_yaml_file("/nonexistent/seed.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
