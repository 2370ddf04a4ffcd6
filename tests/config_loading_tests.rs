//! Tests for loading server configuration and seed data from YAML files

use bookshelf::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

#[test]
fn test_config_from_yaml_file() {
    let file = write_temp(
        r#"
host: 0.0.0.0
port: 4000
graphql_path: /api/graphql
allowed_origin: https://books.example.com
playground: false
log_filter: bookshelf=debug
"#,
    );

    let config = ServerConfig::from_yaml_file(&path_of(&file)).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:4000");
    assert_eq!(config.graphql_path, "/api/graphql");
    assert_eq!(config.allowed_origin, "https://books.example.com");
    assert!(!config.playground);
    assert_eq!(config.log_filter, "bookshelf=debug");
    assert!(config.seed_file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file() {
    let err = ServerConfig::from_yaml_file("/nonexistent/bookshelf.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/bookshelf.yaml"));
}

#[test]
fn test_config_with_seed_file_builds_library() {
    let seed = write_temp(
        r#"
authors:
  - { id: 1, name: "Octavia E. Butler" }
  - { id: 2, name: "N. K. Jemisin" }
books:
  - { id: 1, name: "Kindred", author_id: 1 }
  - { id: 2, name: "The Fifth Season", author_id: 2 }
  - { id: 3, name: "Parable of the Sower", author_id: 1 }
"#,
    );
    let config = write_temp(&format!("seed_file: {}\n", path_of(&seed)));

    let config = ServerConfig::from_yaml_file(&path_of(&config)).unwrap();
    let host = ServerBuilder::new().with_config(config).build_host().unwrap();

    let butler = host.library.find_author(1).unwrap().unwrap();
    let books = host.library.books_of(&butler).unwrap();
    let names: Vec<_> = books.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Kindred", "Parable of the Sower"]);

    let added = host.library.append_book(NewBook::new("Dawn", 1)).unwrap();
    assert_eq!(added.id, 4);
}

#[test]
fn test_malformed_seed_file() {
    let seed = write_temp("authors: [ { id: one } ]");
    let err = Seed::from_yaml_file(&path_of(&seed)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
