//! Fetch-stage error types

use thiserror::Error;

use crate::store::StoreError;

/// Errors that abort the fetch stage, and with it the whole run.
///
/// The merge stages before the fetch degrade to empty contributions on bad
/// input; anything that goes wrong while talking to the secret store is
/// fatal and must leave no outputs published.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Secret '{secret_id}' not found in region '{region}'")]
    NotFound { secret_id: String, region: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Secret '{secret_id}' payload is not a JSON object: {reason}")]
    InvalidPayload { secret_id: String, reason: String },
}
