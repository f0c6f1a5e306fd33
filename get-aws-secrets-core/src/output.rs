//! GitHub Actions output publishing
//!
//! Appends the three step outputs to the `GITHUB_OUTPUT` file, or logs them
//! when no output file is configured (local runs outside CI).

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::pipeline::SecretMap;

pub const OUTPUT_SECRETS: &str = "secrets";
pub const OUTPUT_SECRETS_FILTER: &str = "secrets-filter";
pub const OUTPUT_SECRETS_COUNT: &str = "secrets-count";

/// Resolve the raw `GITHUB_OUTPUT` value into an output path. An
/// empty-string value counts as unset and selects the console fallback,
/// the same rule the region resolution applies.
pub fn resolve_output_path(raw: Option<&str>) -> Option<PathBuf> {
    raw.filter(|p| !p.is_empty()).map(PathBuf::from)
}

/// Publish the merged mapping as step outputs.
///
/// `secrets` carries the mapping as compact JSON, `secrets-filter` the
/// space-joined sorted key list, `secrets-count` the key count. All three
/// lines are appended and flushed before returning; an I/O failure here is
/// fatal so a partially written output file never looks like success.
pub fn publish(secrets: &SecretMap, github_output: Option<&Path>) -> io::Result<()> {
    let keys: Vec<&str> = secrets.keys().map(String::as_str).collect();
    let filter_value = keys.join(" ");
    let count = keys.len();

    match github_output {
        Some(path) => {
            let compact = serde_json::to_string(secrets)?;

            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", OUTPUT_SECRETS, compact)?;
            writeln!(file, "{}={}", OUTPUT_SECRETS_FILTER, filter_value)?;
            writeln!(file, "{}={}", OUTPUT_SECRETS_COUNT, count)?;
            file.flush()?;
        }
        None => {
            let pretty = serde_json::to_string_pretty(secrets)?;
            info!("{}: {}", OUTPUT_SECRETS, pretty);
            info!("{}: {}", OUTPUT_SECRETS_FILTER, filter_value);
            info!("{}: {}", OUTPUT_SECRETS_COUNT, count);
        }
    }

    Ok(())
}
