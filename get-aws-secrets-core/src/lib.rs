//! Core pipeline for get-aws-secrets
//!
//! Builds one merged key/value mapping out of up to three layers, in
//! increasing precedence:
//! - default values seeded for every filtered key
//! - preset key/value pairs supplied as a JSON object
//! - secret bundles fetched from AWS Secrets Manager
//!
//! and publishes the result as GitHub Actions step outputs.

pub mod error;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod store;

pub use error::FetchError;
pub use fetch::fetch_secrets;
pub use filter::KeyFilter;
pub use pipeline::SecretMap;
pub use store::{EphemeralSecretStore, SecretStore, StoreError};
