//! get-aws-secrets - AWS Secrets Manager to GitHub Actions outputs
//!
//! Merges default values, preset key/value pairs, and fetched Secrets
//! Manager bundles into one sorted mapping and publishes it as the
//! `secrets`, `secrets-filter`, and `secrets-count` step outputs.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use get_aws_secrets_core::store::{resolve_region, AwsSecretStore};
use get_aws_secrets_core::{fetch_secrets, output, pipeline, KeyFilter};

#[derive(Parser, Debug)]
#[command(name = "get-aws-secrets")]
#[command(about = "Fetch AWS secrets into GitHub Actions outputs", long_about = None)]
struct Args {
    /// Secret bundle identifiers to fetch (comma- or space-separated)
    #[arg(long, default_value = "", env = "SECRETS")]
    secrets: String,

    /// Keys to restrict the output to (comma- or space-separated)
    #[arg(long, default_value = "", env = "SECRETS_FILTER")]
    secrets_filter: String,

    /// Value assigned to every filtered key before overrides; the defaults
    /// stage only runs when this is explicitly set
    #[arg(long, env = "DEFAULT_VALUE")]
    default_value: Option<String>,

    /// JSON object of preset key/value pairs layered under fetched secrets
    #[arg(long, default_value = "", env = "PRESET_SECRETS")]
    preset_secrets: String,

    /// AWS region to fetch secrets from
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Region used when --region is not set
    #[arg(long, env = "AWS_DEFAULT_REGION")]
    default_region: Option<String>,

    /// GitHub Actions output file; unset or empty logs the outputs instead
    #[arg(long, env = "GITHUB_OUTPUT")]
    github_output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "GAS_LOG_LEVEL")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "get_aws_secrets={0},get_aws_secrets_core={0}",
                    args.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let filter = KeyFilter::parse(&args.secrets_filter);
    if !filter.is_empty() {
        info!("Filtering to keys: {:?}", filter.keys());
    }

    // Defaults, then presets over them, then fetched secrets over both.
    let mut all_secrets = pipeline::seed_defaults(&filter, args.default_value.as_deref());
    all_secrets.extend(pipeline::parse_presets(&args.preset_secrets, &filter));

    if args.secrets.trim().is_empty() {
        warn!("SECRETS not set. Skipping AWS secret fetch.");
    } else {
        let region = resolve_region(args.region.as_deref(), args.default_region.as_deref());
        let store = AwsSecretStore::connect(region).await;
        all_secrets.extend(fetch_secrets(&store, &args.secrets, &filter).await?);
    }

    let output_path = output::resolve_output_path(args.github_output.as_deref());
    output::publish(&all_secrets, output_path.as_deref())
        .context("Failed to publish outputs")?;

    Ok(())
}
