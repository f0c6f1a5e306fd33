//! Default and preset merge stages
//!
//! Both stages are infallible: bad input is logged and contributes an empty
//! layer, so a broken `PRESET_SECRETS` never aborts a fetch.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::filter::KeyFilter;

/// The accumulating secret mapping. A `BTreeMap` keeps it sorted by key at
/// all times, which makes the published output deterministic.
pub type SecretMap = BTreeMap<String, Value>;

/// Seed the mapping with a default value for every filtered key.
///
/// Only runs when the filter is non-empty AND a default value is explicitly
/// present. `Some("")` seeds the empty string; `None` (the `DEFAULT_VALUE`
/// variable being unset) disables the stage even with a filter in place.
pub fn seed_defaults(filter: &KeyFilter, default_value: Option<&str>) -> SecretMap {
    let mut secrets = SecretMap::new();
    if let Some(default) = default_value {
        for key in filter.keys() {
            secrets.insert(key.clone(), Value::String(default.to_string()));
        }
    }
    secrets
}

/// Parse the raw `PRESET_SECRETS` JSON object, restricted by the filter.
///
/// Empty input is silently empty; invalid JSON or a non-object value is
/// logged and degrades to an empty layer.
pub fn parse_presets(raw: &str, filter: &KeyFilter) -> SecretMap {
    if raw.trim().is_empty() {
        return SecretMap::new();
    }

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            error!("Invalid JSON in preset-secrets: {}", err);
            return SecretMap::new();
        }
    };

    let Value::Object(object) = parsed else {
        warn!("Preset secrets is not a JSON object, ignoring");
        return SecretMap::new();
    };

    let preset: SecretMap = object
        .into_iter()
        .filter(|(key, _)| filter.permits(key))
        .collect();

    info!("Loaded {} preset secrets", preset.len());
    preset
}
