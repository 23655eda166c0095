//! # sevadash-client
//!
//! REST client for the sevadash department backend, plus the fenced
//! store-refresh glue the admin screens drive.
//!
//! The client implements [`sevadash_core::RecordService`] over the backend's
//! endpoint shapes (`GET /{entity}`, `POST /{entity}`, `POST
//! /{entity}/bulk_csv`, ...). No operation retries automatically; every
//! failure is surfaced for a human to act on.

pub mod api;
pub mod auth;
pub mod config;
pub mod refresh;

pub use api::ApiClient;
pub use auth::{handle_auth_failure, login_route, CredentialStore, Role};
pub use config::ClientConfig;
pub use refresh::{bulk_import_and_refresh, refresh_store, submit_and_refresh};
