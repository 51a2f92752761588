//! Service-account credential loading.

use std::path::Path;

use serde::Deserialize;

use crate::error::CredentialError;

/// The subset of a Firebase service-account key file the backend reads.
///
/// The full key file also carries the private key material; that part is
/// consumed directly by the Firestore client and never held here.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountCredentials {
    /// GCP project the service account belongs to.
    pub project_id: String,

    /// Service-account identity.
    pub client_email: String,

    /// Key identifier within the service account.
    #[serde(default)]
    pub private_key_id: Option<String>,
}

impl ServiceAccountCredentials {
    /// Parse a credential file from disk.
    pub fn from_file(path: &Path) -> Result<Self, CredentialError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let credentials: Self =
            serde_json::from_str(&raw).map_err(|source| CredentialError::Malformed {
                path: path.display().to_string(),
                source,
            })?;

        if credentials.project_id.is_empty() {
            return Err(CredentialError::MissingField {
                path: path.display().to_string(),
                field: "project_id",
            });
        }

        if credentials.client_email.is_empty() {
            return Err(CredentialError::MissingField {
                path: path.display().to_string(),
                field: "client_email",
            });
        }

        Ok(credentials)
    }
}
