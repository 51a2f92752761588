//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Host address the HTTP listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Firebase Configuration ===
    /// Path to the service-account credential JSON file.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,

    /// Named logical Firestore database to bind the client to.
    #[serde(default = "default_firestore_database")]
    pub firestore_database: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_credentials_path() -> String {
    "serviceAccountKey.json".to_string()
}

fn default_firestore_database() -> String {
    "catalog".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.credentials_path.is_empty() {
            return Err("CREDENTIALS_PATH must not be empty".to_string());
        }

        if self.firestore_database.is_empty() {
            return Err("FIRESTORE_DATABASE must not be empty".to_string());
        }

        Ok(())
    }

    /// Address string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
