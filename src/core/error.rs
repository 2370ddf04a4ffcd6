//! Typed error handling for the bookshelf server
//!
//! Errors are grouped by category so callers can match on them instead of
//! dealing with a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`StorageError`]: the library store could not be read or written
//! - [`ValidationError`]: input rejected before it reached the store
//! - [`ConfigError`]: configuration could not be loaded or is invalid; raised
//!   at startup only, so it never reaches a GraphQL response
//!
//! There is no not-found error: a lookup without a match is an absent value,
//! rendered as `null` by the GraphQL layer.
//!
//! # Example
//!
//! ```rust,ignore
//! match library.append_book(draft) {
//!     Ok(book) => println!("Added {}", book.id),
//!     Err(BookshelfError::Validation(e)) => eprintln!("Rejected: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The main error type for the bookshelf server
#[derive(Debug)]
pub enum BookshelfError {
    /// Storage errors
    Storage(StorageError),

    /// Validation errors
    Validation(ValidationError),
}

impl fmt::Display for BookshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookshelfError::Storage(e) => write!(f, "{}", e),
            BookshelfError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BookshelfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookshelfError::Storage(e) => Some(e),
            BookshelfError::Validation(e) => Some(e),
        }
    }
}

impl BookshelfError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BookshelfError::Storage(_) => "STORAGE_ERROR",
            BookshelfError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BookshelfError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl ErrorExtensions for BookshelfError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            if let Some(details) = self.details() {
                let details = async_graphql::Value::from_json(details).unwrap_or_default();
                e.set("details", details);
            }
        })
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a library store
#[derive(Debug, Error)]
pub enum StorageError {
    /// A previous writer panicked while holding the collection lock
    #[error("Failed to acquire {mode} lock on {collection}")]
    LockPoisoned {
        collection: &'static str,
        mode: &'static str,
    },

    /// The next id would not fit the id type
    #[error("No id left for a new record in {collection} (holding {len})")]
    IdSpaceExhausted {
        collection: &'static str,
        len: usize,
    },
}

impl From<StorageError> for BookshelfError {
    fn from(err: StorageError) -> Self {
        BookshelfError::Storage(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more fields failed validation
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldValidationError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

impl From<ValidationError> for BookshelfError {
    fn from(err: ValidationError) -> Self {
        BookshelfError::Validation(err)
    }
}

impl From<validator::ValidationErrors> for BookshelfError {
    fn from(errors: validator::ValidationErrors) -> Self {
        BookshelfError::Validation(errors.into())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, message = "required"))]
        name: String,
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::LockPoisoned {
            collection: "books",
            mode: "write",
        };
        assert_eq!(err.to_string(), "Failed to acquire write lock on books");
    }

    #[test]
    fn test_storage_error_code() {
        let err: BookshelfError = StorageError::IdSpaceExhausted {
            collection: "books",
            len: 7,
        }
        .into();
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert_eq!(
            err.to_string(),
            "No id left for a new record in books (holding 7)"
        );
    }

    #[test]
    fn test_validation_error_from_validator() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let err: BookshelfError = errors.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("name: required"));
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = BookshelfError::Validation(ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "name".to_string(),
                message: "required".to_string(),
            },
        ]));

        let gql = err.extend();
        let extensions = gql.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
        assert!(extensions.get("details").is_some());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            value: "0".to_string(),
            message: "must be non-zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for field 'port': must be non-zero"
        );
    }
}
