//! Test helpers
//!
//! In-memory fakes of the four seams plus factory methods.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hostname_saga_provider::{
    AnalyticsDomain, AnalyticsProvider, CreateDomainRequest, CreateHostnameRequest,
    CustomHostname, DnsRecord, DnsRecordType, EdgeHostnameProvider, HostnameSsl, NewDnsRecord,
    OwnershipVerification, ProviderError, RecordQuery, Zone,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{JobQueue, JobRequest, PlatformApi};
use crate::types::{
    CreateCustomDomainInput, CreateDnsVerificationInput, CustomDomain, DnsVerification,
    DnsVerificationStatus, MappableDomain, Organization, Page, PageRequest, SslVerificationStatus,
    TrustCenter, UpdateCustomDomainInput, UpdateDnsVerificationInput, UpdateTrustCenterInput,
};
use crate::workers::WorkerContext;

fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

// ===== MockPlatformApi =====

#[derive(Default)]
pub struct MockPlatformApi {
    custom_domains: RwLock<HashMap<String, CustomDomain>>,
    verifications: RwLock<HashMap<String, DnsVerification>>,
    mappable_domains: RwLock<HashMap<String, MappableDomain>>,
    trust_centers: RwLock<HashMap<String, TrustCenter>>,
    organizations: RwLock<HashMap<String, Organization>>,
    /// Every `update_dns_verification` call, in order
    verification_updates: RwLock<Vec<(String, UpdateDnsVerificationInput)>>,
    /// Every `update_trust_center` call, in order
    trust_center_updates: RwLock<Vec<(String, UpdateTrustCenterInput)>>,
    /// Operation name → error message returned instead of running it
    errors: RwLock<HashMap<&'static str, String>>,
}

impl MockPlatformApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `op` fail with `CoreError::Platform(msg)`, or succeed again with `None`.
    pub async fn set_error(&self, op: &'static str, msg: Option<&str>) {
        let mut errors = self.errors.write().await;
        match msg {
            Some(msg) => errors.insert(op, msg.to_string()),
            None => errors.remove(op),
        };
    }

    async fn check(&self, op: &'static str) -> CoreResult<()> {
        match self.errors.read().await.get(op) {
            Some(msg) => Err(CoreError::Platform(msg.clone())),
            None => Ok(()),
        }
    }

    pub async fn insert_custom_domain(&self, domain: CustomDomain) {
        if let Some(v) = domain.dns_verification.clone() {
            self.verifications.write().await.insert(v.id.clone(), v);
        }
        self.custom_domains
            .write()
            .await
            .insert(domain.id.clone(), domain);
    }

    pub async fn insert_verification(&self, verification: DnsVerification) {
        self.verifications
            .write()
            .await
            .insert(verification.id.clone(), verification);
    }

    pub async fn insert_mappable_domain(&self, domain: MappableDomain) {
        self.mappable_domains
            .write()
            .await
            .insert(domain.id.clone(), domain);
    }

    pub async fn insert_trust_center(&self, trust_center: TrustCenter) {
        self.trust_centers
            .write()
            .await
            .insert(trust_center.id.clone(), trust_center);
    }

    pub async fn insert_organization(&self, org: Organization) {
        self.organizations.write().await.insert(org.id.clone(), org);
    }

    /// Stored custom domain, without the embedded verification view
    pub async fn custom_domain(&self, id: &str) -> Option<CustomDomain> {
        self.custom_domains.read().await.get(id).cloned()
    }

    pub async fn custom_domains(&self) -> Vec<CustomDomain> {
        self.custom_domains.read().await.values().cloned().collect()
    }

    pub async fn verification(&self, id: &str) -> Option<DnsVerification> {
        self.verifications.read().await.get(id).cloned()
    }

    pub async fn verifications(&self) -> Vec<DnsVerification> {
        self.verifications.read().await.values().cloned().collect()
    }

    pub async fn trust_center(&self, id: &str) -> Option<TrustCenter> {
        self.trust_centers.read().await.get(id).cloned()
    }

    pub async fn verification_updates(&self) -> Vec<(String, UpdateDnsVerificationInput)> {
        self.verification_updates.read().await.clone()
    }

    pub async fn trust_center_updates(&self) -> Vec<(String, UpdateTrustCenterInput)> {
        self.trust_center_updates.read().await.clone()
    }

    async fn with_verification(&self, mut domain: CustomDomain) -> CustomDomain {
        domain.dns_verification = match domain.verification_id() {
            Some(id) => self.verifications.read().await.get(id).cloned(),
            None => None,
        };
        domain
    }
}

#[async_trait]
impl PlatformApi for MockPlatformApi {
    async fn get_custom_domain(&self, id: &str) -> CoreResult<CustomDomain> {
        self.check("get_custom_domain").await?;
        let domain = self
            .custom_domains
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("CustomDomain", id))?;
        Ok(self.with_verification(domain).await)
    }

    async fn list_custom_domains_with_verification(
        &self,
        page: PageRequest,
    ) -> CoreResult<Page<CustomDomain>> {
        self.check("list_custom_domains_with_verification").await?;
        let mut domains: Vec<CustomDomain> = self
            .custom_domains
            .read()
            .await
            .values()
            .filter(|d| d.verification_id().is_some())
            .cloned()
            .collect();
        domains.sort_by(|a, b| a.id.cmp(&b.id));

        let start = page
            .after
            .as_deref()
            .map_or(0, |after| domains.iter().take_while(|d| d.id.as_str() <= after).count());
        let end = (start + page.first as usize).min(domains.len());
        let next_cursor = (end > start && end < domains.len()).then(|| domains[end - 1].id.clone());

        let mut items = Vec::with_capacity(end - start);
        for domain in &domains[start..end] {
            items.push(self.with_verification(domain.clone()).await);
        }
        Ok(Page { items, next_cursor })
    }

    async fn create_custom_domain(
        &self,
        input: CreateCustomDomainInput,
    ) -> CoreResult<CustomDomain> {
        self.check("create_custom_domain").await?;
        let domain = CustomDomain {
            id: new_id("cd"),
            cname_record: input.cname_record,
            mappable_domain_id: input.mappable_domain_id,
            owner_id: input.owner_id,
            dns_verification_id: None,
            dns_verification: None,
        };
        self.custom_domains
            .write()
            .await
            .insert(domain.id.clone(), domain.clone());
        Ok(domain)
    }

    async fn update_custom_domain(
        &self,
        id: &str,
        input: UpdateCustomDomainInput,
    ) -> CoreResult<CustomDomain> {
        self.check("update_custom_domain").await?;
        let updated = {
            let mut store = self.custom_domains.write().await;
            let domain = store
                .get_mut(id)
                .ok_or_else(|| CoreError::not_found("CustomDomain", id))?;
            if let Some(verification_id) = input.dns_verification_id {
                domain.dns_verification_id = Some(verification_id);
            }
            domain.clone()
        };
        Ok(self.with_verification(updated).await)
    }

    async fn delete_custom_domain(&self, id: &str) -> CoreResult<()> {
        self.check("delete_custom_domain").await?;
        self.custom_domains
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::not_found("CustomDomain", id))
    }

    async fn get_mappable_domain(&self, id: &str) -> CoreResult<MappableDomain> {
        self.check("get_mappable_domain").await?;
        self.mappable_domains
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("MappableDomain", id))
    }

    async fn find_mappable_domain_by_name(
        &self,
        name: &str,
    ) -> CoreResult<Option<MappableDomain>> {
        self.check("find_mappable_domain_by_name").await?;
        Ok(self
            .mappable_domains
            .read()
            .await
            .values()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn create_dns_verification(
        &self,
        input: CreateDnsVerificationInput,
    ) -> CoreResult<DnsVerification> {
        self.check("create_dns_verification").await?;
        let verification = DnsVerification {
            id: new_id("dv"),
            owner_id: input.owner_id,
            provider_hostname_id: input.provider_hostname_id,
            dns_txt_record: input.dns_txt_record,
            dns_txt_value: input.dns_txt_value,
            dns_verification_status: DnsVerificationStatus::Pending,
            dns_verification_status_reason: None,
            acme_challenge_path: None,
            expected_acme_challenge_value: None,
            acme_challenge_status: SslVerificationStatus::Initializing,
            acme_challenge_status_reason: None,
        };
        self.verifications
            .write()
            .await
            .insert(verification.id.clone(), verification.clone());
        Ok(verification)
    }

    async fn update_dns_verification(
        &self,
        id: &str,
        input: UpdateDnsVerificationInput,
    ) -> CoreResult<DnsVerification> {
        self.check("update_dns_verification").await?;
        self.verification_updates
            .write()
            .await
            .push((id.to_string(), input.clone()));

        let mut store = self.verifications.write().await;
        let v = store
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("DnsVerification", id))?;
        if let Some(path) = input.acme_challenge_path {
            v.acme_challenge_path = Some(path);
        }
        if let Some(value) = input.expected_acme_challenge_value {
            v.expected_acme_challenge_value = Some(value);
        }
        if let Some(status) = input.acme_challenge_status {
            v.acme_challenge_status = status;
        }
        if let Some(reason) = input.acme_challenge_status_reason {
            v.acme_challenge_status_reason = Some(reason);
        }
        if let Some(status) = input.dns_verification_status {
            v.dns_verification_status = status;
        }
        if let Some(reason) = input.dns_verification_status_reason {
            v.dns_verification_status_reason = Some(reason);
        }
        Ok(v.clone())
    }

    async fn delete_dns_verification(&self, id: &str) -> CoreResult<()> {
        self.check("delete_dns_verification").await?;
        self.verifications
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::not_found("DnsVerification", id))
    }

    async fn get_trust_center(&self, id: &str) -> CoreResult<TrustCenter> {
        self.check("get_trust_center").await?;
        self.trust_centers
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("TrustCenter", id))
    }

    async fn update_trust_center(
        &self,
        id: &str,
        input: UpdateTrustCenterInput,
    ) -> CoreResult<TrustCenter> {
        self.check("update_trust_center").await?;
        self.trust_center_updates
            .write()
            .await
            .push((id.to_string(), input.clone()));

        let mut store = self.trust_centers.write().await;
        let tc = store
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("TrustCenter", id))?;
        if let Some(preview_domain_id) = input.preview_domain_id {
            tc.preview_domain_id = Some(preview_domain_id);
        }
        if let Some(status) = input.preview_status {
            tc.preview_status = status;
        }
        if input.clear_analytics {
            tc.analytics_domain_id = None;
            tc.analytics_identification_code = None;
        } else {
            if let Some(analytics_id) = input.analytics_domain_id {
                tc.analytics_domain_id = Some(analytics_id);
            }
            if let Some(code) = input.analytics_identification_code {
                tc.analytics_identification_code = Some(code);
            }
        }
        Ok(tc.clone())
    }

    async fn get_organization(&self, id: &str) -> CoreResult<Organization> {
        self.check("get_organization").await?;
        self.organizations
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Organization", id))
    }
}

// ===== MockEdgeProvider =====

#[derive(Default)]
pub struct MockEdgeProvider {
    zones: RwLock<HashMap<String, Zone>>,
    hostnames: RwLock<HashMap<String, CustomHostname>>,
    records: RwLock<Vec<DnsRecord>>,
    /// Returned by the next `create_hostname` instead of a generated hostname
    next_hostname: RwLock<Option<CustomHostname>>,
    /// Every trait call, by method name
    calls: RwLock<Vec<&'static str>>,
    errors: RwLock<HashMap<&'static str, ProviderError>>,
}

impl MockEdgeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_error(&self, op: &'static str, err: Option<ProviderError>) {
        let mut errors = self.errors.write().await;
        match err {
            Some(err) => errors.insert(op, err),
            None => errors.remove(op),
        };
    }

    async fn enter(&self, op: &'static str) -> hostname_saga_provider::Result<()> {
        self.calls.write().await.push(op);
        match self.errors.read().await.get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub async fn insert_zone(&self, id: &str, name: &str) {
        self.zones.write().await.insert(
            id.to_string(),
            Zone {
                id: id.to_string(),
                name: name.to_string(),
                status: "active".to_string(),
            },
        );
    }

    pub async fn insert_hostname(&self, hostname: CustomHostname) {
        self.hostnames
            .write()
            .await
            .insert(hostname.id.clone(), hostname);
    }

    pub async fn set_next_hostname(&self, hostname: CustomHostname) {
        *self.next_hostname.write().await = Some(hostname);
    }

    pub async fn insert_record(&self, record: DnsRecord) {
        self.records.write().await.push(record);
    }

    pub async fn hostname(&self, id: &str) -> Option<CustomHostname> {
        self.hostnames.read().await.get(id).cloned()
    }

    pub async fn records(&self) -> Vec<DnsRecord> {
        self.records.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl EdgeHostnameProvider for MockEdgeProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_hostname(
        &self,
        _zone_id: &str,
        req: &CreateHostnameRequest,
    ) -> hostname_saga_provider::Result<CustomHostname> {
        self.enter("create_hostname").await?;
        let hostname = match self.next_hostname.write().await.take() {
            Some(hostname) => hostname,
            None => CustomHostname {
                id: new_id("cf"),
                hostname: req.hostname.clone(),
                status: "pending".to_string(),
                ssl: HostnameSsl {
                    status: "initializing".to_string(),
                    ..Default::default()
                },
                ownership_verification: Some(OwnershipVerification {
                    name: format!("_cf-custom-hostname.{}", req.hostname),
                    value: uuid::Uuid::new_v4().to_string(),
                }),
                verification_errors: Vec::new(),
            },
        };
        self.hostnames
            .write()
            .await
            .insert(hostname.id.clone(), hostname.clone());
        Ok(hostname)
    }

    async fn get_hostname(
        &self,
        _zone_id: &str,
        hostname_id: &str,
    ) -> hostname_saga_provider::Result<CustomHostname> {
        self.enter("get_hostname").await?;
        self.hostnames
            .read()
            .await
            .get(hostname_id)
            .cloned()
            .ok_or_else(|| not_found(hostname_id))
    }

    async fn delete_hostname(
        &self,
        _zone_id: &str,
        hostname_id: &str,
    ) -> hostname_saga_provider::Result<()> {
        self.enter("delete_hostname").await?;
        self.hostnames
            .write()
            .await
            .remove(hostname_id)
            .map(|_| ())
            .ok_or_else(|| not_found(hostname_id))
    }

    async fn get_zone(&self, zone_id: &str) -> hostname_saga_provider::Result<Zone> {
        self.enter("get_zone").await?;
        self.zones
            .read()
            .await
            .get(zone_id)
            .cloned()
            .ok_or_else(|| not_found(zone_id))
    }

    async fn list_records(
        &self,
        zone_id: &str,
        query: &RecordQuery,
    ) -> hostname_saga_provider::Result<Vec<DnsRecord>> {
        self.enter("list_records").await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.zone_id == zone_id)
            .filter(|r| query.name.as_ref().is_none_or(|n| &r.name == n))
            .filter(|r| query.record_type.is_none_or(|t| r.record_type == t))
            .cloned()
            .collect())
    }

    async fn create_record(
        &self,
        zone_id: &str,
        record: &NewDnsRecord,
    ) -> hostname_saga_provider::Result<DnsRecord> {
        self.enter("create_record").await?;
        let record = DnsRecord {
            id: new_id("rec"),
            zone_id: zone_id.to_string(),
            record_type: record.record_type,
            name: record.name.clone(),
            content: record.content.clone(),
            ttl: record.ttl,
            proxied: record.proxied,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        _zone_id: &str,
        record_id: &str,
        record: &NewDnsRecord,
    ) -> hostname_saga_provider::Result<DnsRecord> {
        self.enter("update_record").await?;
        let mut records = self.records.write().await;
        let existing = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| not_found(record_id))?;
        existing.record_type = record.record_type;
        existing.name.clone_from(&record.name);
        existing.content.clone_from(&record.content);
        existing.ttl = record.ttl;
        existing.proxied = record.proxied;
        Ok(existing.clone())
    }

    async fn delete_record(&self, _zone_id: &str, record_id: &str) -> hostname_saga_provider::Result<()> {
        self.enter("delete_record").await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(not_found(record_id));
        }
        Ok(())
    }
}

// ===== MockAnalyticsProvider =====

#[derive(Default)]
pub struct MockAnalyticsProvider {
    domains: RwLock<HashMap<String, AnalyticsDomain>>,
    calls: RwLock<Vec<&'static str>>,
    errors: RwLock<HashMap<&'static str, ProviderError>>,
}

impl MockAnalyticsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_error(&self, op: &'static str, err: Option<ProviderError>) {
        let mut errors = self.errors.write().await;
        match err {
            Some(err) => errors.insert(op, err),
            None => errors.remove(op),
        };
    }

    async fn enter(&self, op: &'static str) -> hostname_saga_provider::Result<()> {
        self.calls.write().await.push(op);
        match self.errors.read().await.get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub async fn insert_domain(&self, domain: AnalyticsDomain) {
        self.domains.write().await.insert(domain.id.clone(), domain);
    }

    pub async fn domain(&self, id: &str) -> Option<AnalyticsDomain> {
        self.domains.read().await.get(id).cloned()
    }

    pub async fn domains(&self) -> Vec<AnalyticsDomain> {
        self.domains.read().await.values().cloned().collect()
    }

    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl AnalyticsProvider for MockAnalyticsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_domains(&self, search: &str) -> hostname_saga_provider::Result<Vec<AnalyticsDomain>> {
        self.enter("list_domains").await?;
        Ok(self
            .domains
            .read()
            .await
            .values()
            .filter(|d| d.hostname.contains(search) || d.subdomain.contains(search))
            .cloned()
            .collect())
    }

    async fn get_domain(&self, domain_id: &str) -> hostname_saga_provider::Result<AnalyticsDomain> {
        self.enter("get_domain").await?;
        self.domains
            .read()
            .await
            .get(domain_id)
            .cloned()
            .ok_or_else(|| not_found(domain_id))
    }

    async fn create_domain(
        &self,
        req: &CreateDomainRequest,
    ) -> hostname_saga_provider::Result<AnalyticsDomain> {
        self.enter("create_domain").await?;
        let domain = AnalyticsDomain {
            id: new_id("pd"),
            def_time: None,
            mod_time: None,
            organization_id: req.organization_id.clone(),
            hostname: req.hostname.clone(),
            subdomain: req.subdomain.clone(),
            identification_code: new_id("code"),
            public: req.public,
            timezone: Some(req.timezone.clone()),
            active_visitors_seconds: Some(i64::from(req.active_visitors_seconds)),
            display_name: Some(req.display_name.clone()),
        };
        self.domains
            .write()
            .await
            .insert(domain.id.clone(), domain.clone());
        Ok(domain)
    }

    async fn update_hostname(&self, domain_id: &str, hostname: &str) -> hostname_saga_provider::Result<()> {
        self.enter("update_hostname").await?;
        let mut domains = self.domains.write().await;
        let domain = domains
            .get_mut(domain_id)
            .ok_or_else(|| not_found(domain_id))?;
        domain.hostname = hostname.to_string();
        Ok(())
    }

    async fn update_subdomain(&self, domain_id: &str, subdomain: &str) -> hostname_saga_provider::Result<()> {
        self.enter("update_subdomain").await?;
        let mut domains = self.domains.write().await;
        let domain = domains
            .get_mut(domain_id)
            .ok_or_else(|| not_found(domain_id))?;
        domain.subdomain = subdomain.to_string();
        Ok(())
    }

    async fn delete_domain(&self, domain_id: &str) -> hostname_saga_provider::Result<()> {
        self.enter("delete_domain").await?;
        self.domains
            .write()
            .await
            .remove(domain_id)
            .map(|_| ())
            .ok_or_else(|| not_found(domain_id))
    }
}

// ===== MockJobQueue =====

#[derive(Default)]
pub struct MockJobQueue {
    jobs: RwLock<Vec<JobRequest>>,
    insert_error: RwLock<Option<String>>,
}

impl MockJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_insert_error(&self, err: Option<String>) {
        *self.insert_error.write().await = err;
    }

    /// Inserted jobs, in order
    pub async fn jobs(&self) -> Vec<JobRequest> {
        self.jobs.read().await.clone()
    }
}

#[async_trait]
impl JobQueue for MockJobQueue {
    async fn insert(&self, request: JobRequest) -> CoreResult<String> {
        if let Some(ref msg) = *self.insert_error.read().await {
            return Err(CoreError::Queue(msg.clone()));
        }
        self.jobs.write().await.push(request);
        Ok(new_id("job"))
    }
}

// ===== Factory methods =====

/// Worker context wired to fresh fakes, with handles to each fake
pub struct TestContext {
    pub ctx: Arc<WorkerContext>,
    pub platform: Arc<MockPlatformApi>,
    pub edge: Arc<MockEdgeProvider>,
    pub analytics: Arc<MockAnalyticsProvider>,
    pub queue: Arc<MockJobQueue>,
}

pub fn create_test_context() -> TestContext {
    let platform = Arc::new(MockPlatformApi::new());
    let edge = Arc::new(MockEdgeProvider::new());
    let analytics = Arc::new(MockAnalyticsProvider::new());
    let queue = Arc::new(MockJobQueue::new());

    let ctx = Arc::new(WorkerContext::new(
        platform.clone(),
        edge.clone(),
        analytics.clone(),
        queue.clone(),
    ));

    TestContext {
        ctx,
        platform,
        edge,
        analytics,
        queue,
    }
}

/// A custom domain with no verification linked
pub fn custom_domain(id: &str, cname_record: &str, mappable_domain_id: &str) -> CustomDomain {
    CustomDomain {
        id: id.to_string(),
        cname_record: cname_record.to_string(),
        mappable_domain_id: mappable_domain_id.to_string(),
        owner_id: Some("org-1".to_string()),
        dns_verification_id: None,
        dns_verification: None,
    }
}

/// A pending verification for `provider_hostname_id`
pub fn verification(id: &str, provider_hostname_id: &str) -> DnsVerification {
    DnsVerification {
        id: id.to_string(),
        owner_id: Some("org-1".to_string()),
        provider_hostname_id: provider_hostname_id.to_string(),
        dns_txt_record: "_cf-custom-hostname.trust.example.com".to_string(),
        dns_txt_value: "txt-value".to_string(),
        dns_verification_status: DnsVerificationStatus::Pending,
        dns_verification_status_reason: None,
        acme_challenge_path: None,
        expected_acme_challenge_value: None,
        acme_challenge_status: SslVerificationStatus::Initializing,
        acme_challenge_status_reason: None,
    }
}

pub fn not_found(resource: &str) -> ProviderError {
    ProviderError::NotFound {
        provider: "mock".to_string(),
        resource: resource.to_string(),
        raw_message: None,
    }
}

pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection reset".to_string(),
    }
}

/// A TXT record in `zone_id`
pub fn txt_record(zone_id: &str, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: new_id("rec"),
        zone_id: zone_id.to_string(),
        record_type: DnsRecordType::Txt,
        name: name.to_string(),
        content: content.to_string(),
        ttl: 1,
        proxied: None,
    }
}
