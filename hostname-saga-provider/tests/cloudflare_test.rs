//! Cloudflare live tests
//!
//! Run with:
//! ```bash
//! CLOUDFLARE_API_TOKEN=xxx TEST_ZONE_ID=xxx \
//!     cargo test -p hostname-saga-provider --test cloudflare_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{EdgeContext, generate_test_label};
use hostname_saga_provider::{DnsRecordType, NewDnsRecord, ProviderError, RecordQuery};

#[tokio::test]
#[ignore]
async fn test_cloudflare_get_zone() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID");

    let ctx = EdgeContext::cloudflare().expect("failed to build test context");
    let zone = ctx.provider.get_zone(&ctx.zone_id).await;
    assert!(zone.is_ok(), "get_zone failed: {zone:?}");
    let zone = zone.unwrap();
    assert_eq!(zone.id, ctx.zone_id);
    assert!(!zone.name.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_txt_record_lifecycle() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID");

    let ctx = EdgeContext::cloudflare().expect("failed to build test context");
    let zone = ctx.provider.get_zone(&ctx.zone_id).await.unwrap();
    let name = format!("{}.{}", generate_test_label(), zone.name);

    let created = ctx
        .provider
        .create_record(
            &ctx.zone_id,
            &NewDnsRecord {
                record_type: DnsRecordType::Txt,
                name: name.clone(),
                content: "\"value-1\"".to_string(),
                ttl: 1,
                proxied: None,
            },
        )
        .await;
    assert!(created.is_ok(), "create_record failed: {created:?}");
    let created = created.unwrap();

    let listed = ctx
        .provider
        .list_records(&ctx.zone_id, &RecordQuery::exact(&name, DnsRecordType::Txt))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    let updated = ctx
        .provider
        .update_record(
            &ctx.zone_id,
            &created.id,
            &NewDnsRecord {
                record_type: DnsRecordType::Txt,
                name: name.clone(),
                content: "\"value-2\"".to_string(),
                ttl: 1,
                proxied: None,
            },
        )
        .await;
    assert!(updated.is_ok(), "update_record failed: {updated:?}");

    let deleted = ctx.provider.delete_record(&ctx.zone_id, &created.id).await;
    assert!(deleted.is_ok(), "delete_record failed: {deleted:?}");

    // Second delete reports NotFound, which callers treat as success
    let again = ctx.provider.delete_record(&ctx.zone_id, &created.id).await;
    assert!(
        matches!(again, Err(ProviderError::NotFound { .. })),
        "expected NotFound, got {again:?}"
    );
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_missing_hostname_is_not_found() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID");

    let ctx = EdgeContext::cloudflare().expect("failed to build test context");
    let result = ctx
        .provider
        .get_hostname(&ctx.zone_id, "00000000000000000000000000000000")
        .await;
    assert!(
        matches!(result, Err(ref e) if e.is_not_found()),
        "expected NotFound, got {result:?}"
    );
}
