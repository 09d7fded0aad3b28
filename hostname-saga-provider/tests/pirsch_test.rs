//! Pirsch live tests
//!
//! Run with:
//! ```bash
//! PIRSCH_CLIENT_ID=xxx PIRSCH_CLIENT_SECRET=xxx \
//!     cargo test -p hostname-saga-provider --test pirsch_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use hostname_saga_provider::ProviderError;

#[tokio::test]
#[ignore]
async fn test_pirsch_list_domains() {
    skip_if_no_credentials!("PIRSCH_CLIENT_ID", "PIRSCH_CLIENT_SECRET");

    let provider = common::pirsch().expect("failed to build provider");
    let result = provider.list_domains("").await;
    assert!(result.is_ok(), "list_domains failed: {result:?}");
}

#[tokio::test]
#[ignore]
async fn test_pirsch_delete_unknown_domain() {
    skip_if_no_credentials!("PIRSCH_CLIENT_ID", "PIRSCH_CLIENT_SECRET");

    let provider = common::pirsch().expect("failed to build provider");
    let result = provider.delete_domain("does-not-exist").await;
    assert!(
        matches!(
            result,
            Err(ProviderError::NotFound { .. } | ProviderError::InvalidParameter { .. })
        ),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn test_pirsch_bad_credentials_fail_authentication() {
    // Nothing listens on port 9: the token exchange fails and surfaces as an error
    let provider = hostname_saga_provider::PirschProvider::new("id".into(), "secret".into())
        .unwrap()
        .with_base_url("http://127.0.0.1:9")
        .with_retry_policy(hostname_saga_provider::RetryPolicy::none());
    let result = hostname_saga_provider::AnalyticsProvider::list_domains(&provider, "").await;
    assert!(result.is_err());
}
