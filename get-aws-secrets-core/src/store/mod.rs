//! Secret store backends

mod aws;
mod ephemeral;
mod traits;


pub use aws::{resolve_region, AwsSecretStore, FALLBACK_REGION};
pub use ephemeral::EphemeralSecretStore;
pub use traits::{SecretStore, StoreError};
