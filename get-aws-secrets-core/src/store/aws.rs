//! AWS Secrets Manager backend

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;

use super::traits::{SecretStore, StoreError};

/// Region used when neither `AWS_REGION` nor `AWS_DEFAULT_REGION` is set
pub const FALLBACK_REGION: &str = "us-east-1";

/// Resolve the target region: explicit region, else default region, else
/// [`FALLBACK_REGION`]. An empty-string value counts as unset.
pub fn resolve_region(explicit: Option<&str>, default: Option<&str>) -> String {
    explicit
        .filter(|r| !r.is_empty())
        .or_else(|| default.filter(|r| !r.is_empty()))
        .unwrap_or(FALLBACK_REGION)
        .to_string()
}

/// Secrets Manager client bound to one region
pub struct AwsSecretStore {
    client: Client,
    region: String,
}

impl AwsSecretStore {
    /// Build a client against the given region, with credentials from the
    /// ambient AWS environment.
    pub async fn connect(region: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&config),
            region,
        }
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    fn region(&self) -> &str {
        &self.region
    }

    async fn get_secret_string(&self, secret_id: &str) -> Result<String, StoreError> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception())
                {
                    StoreError::NotFound(secret_id.to_string())
                } else {
                    StoreError::Service {
                        secret_id: secret_id.to_string(),
                        message: DisplayErrorContext(&err).to_string(),
                    }
                }
            })?;

        response
            .secret_string()
            .map(str::to_owned)
            .ok_or_else(|| StoreError::NoStringPayload(secret_id.to_string()))
    }
}
