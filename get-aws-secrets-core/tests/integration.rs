//! Integration tests for the full merge-and-publish pipeline
//!
//! These compose the stages exactly like the binary does, against the
//! ephemeral store, and check the published output file byte for byte.

use get_aws_secrets_core::{
    fetch_secrets, output, pipeline, EphemeralSecretStore, FetchError, KeyFilter,
};

/// Run the whole pipeline and return the merged mapping.
async fn run_pipeline(
    store: &EphemeralSecretStore,
    secrets_spec: &str,
    filter_spec: &str,
    default_value: Option<&str>,
    preset_json: &str,
) -> Result<pipeline::SecretMap, FetchError> {
    let filter = KeyFilter::parse(filter_spec);

    let mut all_secrets = pipeline::seed_defaults(&filter, default_value);
    all_secrets.extend(pipeline::parse_presets(preset_json, &filter));
    if !secrets_spec.trim().is_empty() {
        all_secrets.extend(fetch_secrets(store, secrets_spec, &filter).await?);
    }

    Ok(all_secrets)
}

#[tokio::test]
async fn test_defaults_and_presets_without_fetch() {
    // Worked example: filter "A B", DEFAULT_VALUE present as "x", presets
    // cover A and the unfiltered C, no SECRETS configured.
    let store = EphemeralSecretStore::new();
    let secrets = run_pipeline(&store, "", "A B", Some("x"), r#"{"A":"p1","C":"p2"}"#)
        .await
        .unwrap();

    assert_eq!(secrets.len(), 2);
    assert_eq!(secrets["A"], "p1");
    assert_eq!(secrets["B"], "x");

    let file = tempfile::NamedTempFile::new().unwrap();
    output::publish(&secrets, Some(file.path())).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        contents,
        "secrets={\"A\":\"p1\",\"B\":\"x\"}\nsecrets-filter=A B\nsecrets-count=2\n"
    );
}

#[tokio::test]
async fn test_fetched_secrets_take_precedence() {
    let store = EphemeralSecretStore::new();
    store.put_secret("db", r#"{"A":"s1"}"#);

    let secrets = run_pipeline(&store, "db", "A B", Some("x"), r#"{"A":"p1","B":"p2"}"#)
        .await
        .unwrap();

    // Fetch beats preset beats default.
    assert_eq!(secrets["A"], "s1");
    assert_eq!(secrets["B"], "p2");
}

#[tokio::test]
async fn test_filter_bounds_the_final_key_set() {
    let store = EphemeralSecretStore::new();
    store.put_secret("db", r#"{"A":"s1","D":"s2"}"#);

    let secrets = run_pipeline(&store, "db", "A", None, r#"{"C":"p1"}"#)
        .await
        .unwrap();

    assert_eq!(secrets.keys().collect::<Vec<_>>(), vec!["A"]);
}

#[tokio::test]
async fn test_no_filter_takes_union_of_all_stages() {
    let store = EphemeralSecretStore::new();
    store.put_secret("db", r#"{"A":"s1"}"#);

    let secrets = run_pipeline(&store, "db", "", None, r#"{"B":"p1"}"#)
        .await
        .unwrap();

    assert_eq!(secrets.keys().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[tokio::test]
async fn test_malformed_presets_never_abort() {
    let store = EphemeralSecretStore::new();
    store.put_secret("db", r#"{"A":"s1"}"#);

    let secrets = run_pipeline(&store, "db", "", None, "{not json")
        .await
        .unwrap();

    assert_eq!(secrets.len(), 1);
    assert_eq!(secrets["A"], "s1");
}

#[tokio::test]
async fn test_array_presets_degrade_to_nothing() {
    let store = EphemeralSecretStore::new();

    let secrets = run_pipeline(&store, "", "", None, "[1,2]").await.unwrap();
    assert!(secrets.is_empty());
}

#[tokio::test]
async fn test_missing_bundle_aborts_before_publish() {
    let store = EphemeralSecretStore::new();

    let result = run_pipeline(&store, "nonexistent", "", None, "").await;
    let err = result.unwrap_err();
    assert!(
        matches!(err, FetchError::NotFound { ref secret_id, .. } if secret_id == "nonexistent")
    );
    assert!(err.to_string().contains("region 'local'"));
}

#[tokio::test]
async fn test_pipeline_is_idempotent() {
    let store = EphemeralSecretStore::new();
    store.put_secret("db", r#"{"Z":"s1","A":"s2"}"#);
    store.put_secret("cache", r#"{"M":"s3"}"#);

    let first = run_pipeline(&store, "db cache", "", None, r#"{"B":"p1"}"#)
        .await
        .unwrap();
    let second = run_pipeline(&store, "db cache", "", None, r#"{"B":"p1"}"#)
        .await
        .unwrap();

    let file_a = tempfile::NamedTempFile::new().unwrap();
    let file_b = tempfile::NamedTempFile::new().unwrap();
    output::publish(&first, Some(file_a.path())).unwrap();
    output::publish(&second, Some(file_b.path())).unwrap();

    let bytes_a = std::fs::read(file_a.path()).unwrap();
    let bytes_b = std::fs::read(file_b.path()).unwrap();
    assert_eq!(bytes_a, bytes_b);
}

#[tokio::test]
async fn test_bundle_order_decides_overlapping_keys() {
    let store = EphemeralSecretStore::new();
    store.put_secret("zeta", r#"{"A":"from-zeta"}"#);
    store.put_secret("alpha", r#"{"A":"from-alpha"}"#);

    // Listed order wins, not alphabetical order.
    let secrets = run_pipeline(&store, "zeta,alpha", "", None, "").await.unwrap();
    assert_eq!(secrets["A"], "from-alpha");

    let secrets = run_pipeline(&store, "alpha,zeta", "", None, "").await.unwrap();
    assert_eq!(secrets["A"], "from-zeta");
}
