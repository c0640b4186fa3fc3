//! Error types for donorbank.
//!
//! This module defines all error types used throughout the donorbank crate.
//! Registry failures (duplicate contact, unknown contact) and form failures
//! are ordinary values the presentation layer reports to the user; the
//! remaining variants are ambient I/O and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for donorbank operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// A donor with this contact number is already registered.
    #[error("a donor with contact number {contact} already exists")]
    DuplicateContact {
        /// The contact number that collided.
        contact: String,
    },

    /// No donor is registered under this contact number.
    #[error("donor not found: no donor with contact number {contact}")]
    DonorNotFound {
        /// The contact number that was looked up.
        contact: String,
    },

    // === Input Errors ===
    /// A required form field was left empty.
    #[error("{field} is required")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A form field holds a value the registry cannot accept.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    // === Storage Errors ===
    /// The donor file exists but does not hold a valid donor list.
    #[error("donor file {path} is corrupt: {reason}")]
    CorruptStore {
        /// Path to the donor file.
        path: PathBuf,
        /// Parser message describing the failure.
        reason: String,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for donorbank operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a duplicate contact error.
    #[must_use]
    pub fn duplicate_contact(contact: impl Into<String>) -> Self {
        Self::DuplicateContact {
            contact: contact.into(),
        }
    }

    /// Create a donor not found error.
    #[must_use]
    pub fn donor_not_found(contact: impl Into<String>) -> Self {
        Self::DonorNotFound {
            contact: contact.into(),
        }
    }

    /// Create an invalid field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this error is a duplicate contact rejection.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateContact { .. })
    }

    /// Check if this error reports an unknown contact.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DonorNotFound { .. })
    }

    /// Check if this error came from form validation.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_contact_display() {
        let err = Error::duplicate_contact("9998887777");
        assert_eq!(
            err.to_string(),
            "a donor with contact number 9998887777 already exists"
        );
        assert!(err.is_duplicate());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_donor_not_found_display() {
        let err = Error::donor_not_found("123");
        assert!(err.to_string().contains("123"));
        assert!(err.is_not_found());
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_input_errors() {
        let missing = Error::MissingField { field: "name" };
        assert_eq!(missing.to_string(), "name is required");
        assert!(missing.is_input_error());

        let invalid = Error::invalid_field("age", "must be between 18 and 60");
        assert_eq!(invalid.to_string(), "invalid age: must be between 18 and 60");
        assert!(invalid.is_input_error());

        assert!(!Error::donor_not_found("1").is_input_error());
    }

    #[test]
    fn test_corrupt_store_display() {
        let err = Error::CorruptStore {
            path: PathBuf::from("/tmp/donors.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/donors.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "data_file must not be empty".to_string(),
        };
        assert!(err.to_string().contains("data_file"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
