//! Secret store trait

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a secret store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Secret '{0}' has no string payload")]
    NoStringPayload(String),

    #[error("Secret store error for '{secret_id}': {message}")]
    Service { secret_id: String, message: String },
}

/// A store holding named secret bundles, each a JSON object payload.
///
/// The only operation the pipeline needs is "retrieve the current string
/// payload of one bundle"; everything else Secrets Manager offers is out of
/// scope here.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Region the store resolves secrets in, for diagnostics
    fn region(&self) -> &str;

    /// Retrieve the current string payload of a secret bundle
    async fn get_secret_string(&self, secret_id: &str) -> Result<String, StoreError>;
}
