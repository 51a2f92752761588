//! Unified error types for the catalog backend.

use thiserror::Error;

/// Unified error type for the catalog backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Service-account credential error.
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Firestore client construction error.
    #[error("firestore error: {0}")]
    Firestore(#[from] firestore::errors::FirestoreError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Service-account credential loading errors.
///
/// A missing credential file is not an error anywhere in this crate; the
/// backend degrades to no-database mode instead. These variants cover files
/// that exist but cannot be used, which abort startup.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Credential file exists but could not be read.
    #[error("failed to read credential file {path}: {source}")]
    Unreadable {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Credential file is not valid service-account JSON.
    #[error("failed to parse credential file {path}: {source}")]
    Malformed {
        /// Path that failed to parse.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Credential file parsed but a required field is empty.
    #[error("credential file {path} has an empty {field}")]
    MissingField {
        /// Path of the offending file.
        path: String,
        /// Name of the empty field.
        field: &'static str,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, BackendError>;
