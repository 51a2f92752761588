//! Minimal HTTP backend for the catalog frontend.
//!
//! Exposes two routes (`/` and `/api/health`) with permissive CORS. At
//! startup the process looks for a service-account credential file; when
//! present it initializes a Firebase admin context and opens a Firestore
//! client bound to a named logical database, and when absent it starts in a
//! degraded no-database mode.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`firebase`]: Credential loading and Firestore client setup
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod firebase;
pub mod utils;

pub use config::Config;
pub use error::{BackendError, Result};
