//! Pirsch `AnalyticsProvider` implementation

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::traits::{AnalyticsProvider, ErrorContext};
use crate::types::{AnalyticsDomain, CreateDomainRequest};

use super::PirschProvider;
use super::types::{UpdateHostnameBody, UpdateSubdomainBody};

/// Placeholder body type for requests without one
type NoBody = ();

#[async_trait]
impl AnalyticsProvider for PirschProvider {
    fn id(&self) -> &'static str {
        "pirsch"
    }

    async fn list_domains(&self, search: &str) -> Result<Vec<AnalyticsDomain>> {
        let path = if search.is_empty() {
            "/domain".to_string()
        } else {
            format!("/domain?search={}", urlencoding::encode(search))
        };
        self.send_json::<_, NoBody>(Method::GET, &path, None, &[200], ErrorContext::default())
            .await
    }

    async fn get_domain(&self, domain_id: &str) -> Result<AnalyticsDomain> {
        self.send_json::<_, NoBody>(
            Method::GET,
            &format!("/domain?id={}", urlencoding::encode(domain_id)),
            None,
            &[200],
            ErrorContext::resource(domain_id),
        )
        .await
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<AnalyticsDomain> {
        let domain: AnalyticsDomain = self
            .send_json(
                Method::POST,
                "/domain",
                Some(req),
                &[200, 201],
                ErrorContext::resource(format!("{}.{}", req.subdomain, req.hostname)),
            )
            .await?;
        log::info!(
            "[pirsch] Created domain {} for {}.{}",
            domain.id,
            req.subdomain,
            req.hostname
        );
        Ok(domain)
    }

    async fn update_hostname(&self, domain_id: &str, hostname: &str) -> Result<()> {
        self.send_empty(
            Method::POST,
            "/domain/hostname",
            Some(&UpdateHostnameBody {
                id: domain_id,
                hostname,
            }),
            &[200],
            ErrorContext::resource(domain_id),
        )
        .await
    }

    async fn update_subdomain(&self, domain_id: &str, subdomain: &str) -> Result<()> {
        self.send_empty(
            Method::POST,
            "/domain/subdomain",
            Some(&UpdateSubdomainBody {
                id: domain_id,
                subdomain,
            }),
            &[200],
            ErrorContext::resource(domain_id),
        )
        .await
    }

    async fn delete_domain(&self, domain_id: &str) -> Result<()> {
        self.send_empty::<NoBody>(
            Method::DELETE,
            &format!("/domain?id={}", urlencoding::encode(domain_id)),
            None,
            &[200, 204],
            ErrorContext::resource(domain_id),
        )
        .await?;
        log::info!("[pirsch] Deleted domain {domain_id}");
        Ok(())
    }
}
