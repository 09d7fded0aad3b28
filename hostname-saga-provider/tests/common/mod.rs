//! Shared helpers for live provider tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use hostname_saga_provider::{
    AnalyticsProvider, CloudflareProvider, EdgeHostnameProvider, PirschProvider,
};

/// Return early when a required environment variable is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Unique, clearly-marked label for records created by tests
pub fn generate_test_label() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Edge provider plus the zone the tests may write to
pub struct EdgeContext {
    pub provider: Arc<dyn EdgeHostnameProvider>,
    pub zone_id: String,
}

impl EdgeContext {
    pub fn cloudflare() -> Option<Self> {
        let api_token = env::var("CLOUDFLARE_API_TOKEN").ok()?;
        let zone_id = env::var("TEST_ZONE_ID").ok()?;
        let provider = CloudflareProvider::new(api_token).ok()?;
        Some(Self {
            provider: Arc::new(provider),
            zone_id,
        })
    }
}

pub fn pirsch() -> Option<Arc<dyn AnalyticsProvider>> {
    let client_id = env::var("PIRSCH_CLIENT_ID").ok()?;
    let client_secret = env::var("PIRSCH_CLIENT_SECRET").ok()?;
    let provider = PirschProvider::new(client_id, client_secret).ok()?;
    Some(Arc::new(provider))
}
