//! Firebase admin context and Firestore client construction.

use std::path::{Path, PathBuf};

use firestore::{FirestoreDb, FirestoreDbOptions};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CredentialError, Result};

use super::credentials::ServiceAccountCredentials;

/// Process-wide admin context, initialized at most once.
static FIREBASE_APP: OnceCell<FirebaseApp> = OnceCell::const_new();

/// Admin context bound to one service-account identity.
///
/// Obtained via [`initialize_app`]; lives for the rest of the process.
#[derive(Debug, Clone)]
pub struct FirebaseApp {
    credentials: ServiceAccountCredentials,
    key_path: PathBuf,
}

impl FirebaseApp {
    /// The GCP project this context authenticates against.
    pub fn project_id(&self) -> &str {
        &self.credentials.project_id
    }

    /// Service-account identity.
    pub fn client_email(&self) -> &str {
        &self.credentials.client_email
    }

    /// Construct a Firestore client bound to the given named database.
    ///
    /// No retries and no check that the database exists; construction
    /// failures propagate to the caller and abort startup.
    pub async fn firestore(&self, database_id: &str) -> Result<FirestoreHandle> {
        let options = FirestoreDbOptions::new(self.credentials.project_id.clone())
            .with_database_id(database_id.to_string());

        let db =
            FirestoreDb::with_options_service_account_key_file(options, self.key_path.clone())
                .await?;

        Ok(FirestoreHandle {
            db,
            database_id: database_id.to_string(),
        })
    }
}

/// A live Firestore client plus the named database it is bound to.
#[derive(Clone)]
pub struct FirestoreHandle {
    db: FirestoreDb,
    database_id: String,
}

impl FirestoreHandle {
    /// The underlying Firestore client.
    pub fn db(&self) -> &FirestoreDb {
        &self.db
    }

    /// The named logical database the client is bound to.
    pub fn database_id(&self) -> &str {
        &self.database_id
    }
}

/// Initialize the process-wide admin context from a credential file.
///
/// Idempotent: a second call in the same process returns the existing
/// context instead of erroring, regardless of the path it is given.
pub async fn initialize_app(key_path: &Path) -> Result<&'static FirebaseApp> {
    let app = FIREBASE_APP
        .get_or_try_init(|| async {
            let credentials = ServiceAccountCredentials::from_file(key_path)?;
            info!(
                project_id = %credentials.project_id,
                client_email = %credentials.client_email,
                "Firebase admin context initialized"
            );

            Ok::<_, CredentialError>(FirebaseApp {
                credentials,
                key_path: key_path.to_path_buf(),
            })
        })
        .await?;

    Ok(app)
}

/// Best-effort Firestore setup, gated on the credential file being present.
///
/// A missing file degrades to no-database mode (`Ok(None)`); any other
/// failure propagates and aborts startup.
pub async fn connect_firestore(config: &Config) -> Result<Option<FirestoreHandle>> {
    let key_path = Path::new(&config.credentials_path);

    if !key_path.exists() {
        warn!(
            path = %key_path.display(),
            "credential file not found, starting without Firestore"
        );
        return Ok(None);
    }

    let app = initialize_app(key_path).await?;
    let handle = app.firestore(&config.firestore_database).await?;

    info!(
        project_id = %app.project_id(),
        database = %handle.database_id(),
        "Firestore client connected"
    );

    Ok(Some(handle))
}
