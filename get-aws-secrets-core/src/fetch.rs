//! Secret fetch stage
//!
//! Retrieves each requested bundle from the store, in the order given, and
//! layers its filtered keys over the accumulating mapping. Any store or
//! payload failure here is fatal: there is no partial-success mode.

use serde_json::Value;
use tracing::{error, info};

use crate::error::FetchError;
use crate::filter::{split_list, KeyFilter};
use crate::pipeline::SecretMap;
use crate::store::{SecretStore, StoreError};

/// Fetch every bundle named in `spec` and merge their filtered keys.
///
/// Later-listed bundles overwrite earlier ones for overlapping keys, so the
/// caller's bundle order is load-bearing and is never reordered.
pub async fn fetch_secrets(
    store: &dyn SecretStore,
    spec: &str,
    filter: &KeyFilter,
) -> Result<SecretMap, FetchError> {
    let secret_ids = split_list(spec);
    info!("Fetching secrets from {:?}", secret_ids);

    let mut all_secrets = SecretMap::new();
    for secret_id in &secret_ids {
        info!(secret_id = %secret_id, "Retrieving secret");

        let payload = store
            .get_secret_string(secret_id)
            .await
            .map_err(|err| match err {
                StoreError::NotFound(_) => {
                    error!(
                        "Secret '{}' not found in region '{}'",
                        secret_id,
                        store.region()
                    );
                    FetchError::NotFound {
                        secret_id: secret_id.clone(),
                        region: store.region().to_string(),
                    }
                }
                other => {
                    error!("Error fetching secrets: {}", other);
                    FetchError::Store(other)
                }
            })?;

        let bundle = parse_bundle(secret_id, &payload)?;
        for (key, value) in bundle {
            if !filter.permits(&key) {
                continue;
            }
            info!(key = %key, "Retrieved secret");
            all_secrets.insert(key, value);
        }
    }

    Ok(all_secrets)
}

/// Parse one bundle payload as a JSON object. Anything else is fatal.
fn parse_bundle(
    secret_id: &str,
    payload: &str,
) -> Result<serde_json::Map<String, Value>, FetchError> {
    let parsed: Value = serde_json::from_str(payload).map_err(|err| {
        error!("Error fetching secrets: invalid JSON in '{}': {}", secret_id, err);
        FetchError::InvalidPayload {
            secret_id: secret_id.to_string(),
            reason: err.to_string(),
        }
    })?;

    match parsed {
        Value::Object(object) => Ok(object),
        other => {
            error!("Error fetching secrets: '{}' payload is not an object", secret_id);
            Err(FetchError::InvalidPayload {
                secret_id: secret_id.to_string(),
                reason: format!("expected object, got {}", json_type(&other)),
            })
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
