//! In-memory ephemeral secret store

use async_trait::async_trait;
use dashmap::DashMap;

use super::traits::{SecretStore, StoreError};

/// In-memory store used by tests and local dry runs. Bundles are plain
/// strings keyed by identifier; nothing survives the process.
#[derive(Debug)]
pub struct EphemeralSecretStore {
    secrets: DashMap<String, String>,
    region: String,
}

impl Default for EphemeralSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemeralSecretStore {
    pub fn new() -> Self {
        Self {
            secrets: DashMap::new(),
            region: "local".to_string(),
        }
    }

    /// Store a bundle payload under an identifier, replacing any existing one
    pub fn put_secret(&self, secret_id: impl Into<String>, payload: impl Into<String>) {
        self.secrets.insert(secret_id.into(), payload.into());
    }
}

#[async_trait]
impl SecretStore for EphemeralSecretStore {
    fn region(&self) -> &str {
        &self.region
    }

    async fn get_secret_string(&self, secret_id: &str) -> Result<String, StoreError> {
        self.secrets
            .get(secret_id)
            .map(|payload| payload.clone())
            .ok_or_else(|| StoreError::NotFound(secret_id.to_string()))
    }
}
