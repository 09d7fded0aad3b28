//! Tenant custom hostnames: create, validate, delete

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryFutureExt;
use hostname_saga_provider::{
    CertificateType, CreateHostnameRequest, CustomHostname, DcvMethod, SslSettings,
};

use crate::config::CustomDomainConfig;
use crate::error::{CoreError, CoreResult};
use crate::jobs::{
    CreateCustomDomainArgs, DeleteCustomDomainArgs, Job, JobArgs, JobOutcome, PartialState, Saga,
    ValidateCustomDomainArgs, Worker, require,
};
use crate::types::{
    CreateDnsVerificationInput, CustomDomain, DnsVerification, DnsVerificationStatus, PageRequest,
    SslVerificationStatus, UpdateCustomDomainInput, UpdateDnsVerificationInput, non_empty,
};

use super::{Cleanup, WorkerContext};

/// ACME token of a validation URL: its last non-empty path segment.
///
/// `http://trust.example.com/.well-known/acme-challenge/abc123` → `abc123`.
/// Returns `None` when the URL has no path.
pub fn acme_challenge_token(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next()?;
    let (_, path) = rest.split_once('/')?;
    path.rsplit('/').find(|segment| !segment.is_empty())
}

// ===== create_custom_domain =====

/// Identifiers created so far by `create_custom_domain`
#[derive(Debug, Default)]
struct CreatedHostname {
    hostname_id: Option<String>,
    zone_id: Option<String>,
    verification_id: Option<String>,
}

impl PartialState for CreatedHostname {
    type Rollback = DeleteCustomDomainArgs;

    fn rollback(&self) -> Option<DeleteCustomDomainArgs> {
        // The custom domain belongs to the tenant and is never rolled back
        self.hostname_id.as_ref()?;
        Some(DeleteCustomDomainArgs {
            custom_domain_id: None,
            dns_verification_id: self.verification_id.clone(),
            provider_hostname_id: self.hostname_id.clone(),
            zone_id: self.zone_id.clone(),
        })
    }
}

/// Registers the hostname at the edge and links a DNS verification to it
pub struct CreateCustomDomainWorker {
    ctx: Arc<WorkerContext>,
    config: CustomDomainConfig,
}

impl CreateCustomDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>, config: CustomDomainConfig) -> Self {
        Self { ctx, config }
    }
}

#[async_trait]
impl Worker for CreateCustomDomainWorker {
    type Args = CreateCustomDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = CreateCustomDomainArgs::KIND;
        let id = require(&job.args.custom_domain_id, "custom_domain_id", JOB)?;
        let platform = self.ctx.platform.as_ref();

        let domain = platform.get_custom_domain(id).await?;
        if let Some(existing) = domain.verification_id() {
            log::warn!("[{JOB}] Custom domain {id} already has DNS verification {existing}");
            return Err(CoreError::AlreadyProvisioned(format!(
                "custom domain {id} already has DNS verification {existing}"
            )));
        }
        let mappable = platform.get_mappable_domain(&domain.mappable_domain_id).await?;

        let request = CreateHostnameRequest {
            hostname: domain.cname_record.clone(),
            ssl: SslSettings {
                method: DcvMethod::Http,
                certificate_type: CertificateType::Dv,
                min_tls_version: self.config.min_tls_version,
            },
        };

        let compensator = self.ctx.compensator();
        let mut saga = Saga::new(JOB, CreatedHostname::default(), &compensator);

        let hostname = saga
            .step(
                "create_hostname",
                self.ctx
                    .edge
                    .create_hostname(&mappable.zone_id, &request)
                    .map_err(CoreError::from),
            )
            .await?;
        saga.state_mut().hostname_id = Some(hostname.id.clone());
        saga.state_mut().zone_id = Some(mappable.zone_id.clone());
        log::info!(
            "[{JOB}] Created hostname {} for {}",
            hostname.id,
            domain.cname_record
        );

        let ownership = saga
            .step("read_ownership_verification", async {
                hostname.ownership_verification.clone().ok_or_else(|| {
                    CoreError::MissingLinkage(format!(
                        "hostname {} has no ownership verification record",
                        hostname.id
                    ))
                })
            })
            .await?;

        let verification = saga
            .step(
                "create_dns_verification",
                platform.create_dns_verification(CreateDnsVerificationInput {
                    provider_hostname_id: hostname.id.clone(),
                    dns_txt_record: ownership.name,
                    dns_txt_value: ownership.value,
                    owner_id: domain.owner_id.clone(),
                }),
            )
            .await?;
        saga.state_mut().verification_id = Some(verification.id.clone());

        saga.step(
            "link_dns_verification",
            platform.update_custom_domain(
                id,
                UpdateCustomDomainInput {
                    dns_verification_id: Some(verification.id.clone()),
                },
            ),
        )
        .await?;

        log::info!(
            "[{JOB}] Linked DNS verification {} to custom domain {id}",
            verification.id
        );
        Ok(JobOutcome::Completed)
    }
}

// ===== validate_custom_domain =====

/// Fields of `verification` that differ from the provider's view of the hostname.
///
/// The ACME challenge path and expected value are only filled while unset.
pub fn verification_update(
    verification: &DnsVerification,
    hostname: &CustomHostname,
) -> UpdateDnsVerificationInput {
    let mut update = UpdateDnsVerificationInput::default();

    if non_empty(verification.acme_challenge_path.as_deref()).is_none() {
        let challenge = hostname.ssl.validation_records.iter().find_map(|record| {
            let token = acme_challenge_token(record.http_url.as_deref()?)?;
            Some((token, record.http_body.as_deref()))
        });
        if let Some((token, body)) = challenge {
            update.acme_challenge_path = Some(token.to_string());
            if non_empty(verification.expected_acme_challenge_value.as_deref()).is_none() {
                update.expected_acme_challenge_value = body.map(str::to_string);
            }
        }
    }

    let acme_status = SslVerificationStatus::from_provider(&hostname.ssl.status);
    if acme_status != verification.acme_challenge_status {
        update.acme_challenge_status = Some(acme_status);
    }
    let acme_reason = hostname.ssl.validation_errors.join(", ");
    if acme_reason != verification.acme_challenge_status_reason.as_deref().unwrap_or_default() {
        update.acme_challenge_status_reason = Some(acme_reason);
    }

    let dns_status = DnsVerificationStatus::from_provider(&hostname.status);
    if dns_status != verification.dns_verification_status {
        update.dns_verification_status = Some(dns_status);
    }
    let dns_reason = hostname.verification_errors.join(", ");
    if dns_reason != verification.dns_verification_status_reason.as_deref().unwrap_or_default() {
        update.dns_verification_status_reason = Some(dns_reason);
    }

    update
}

/// Mirrors the edge provider's hostname and certificate state onto the
/// stored DNS verification
pub struct ValidateCustomDomainWorker {
    ctx: Arc<WorkerContext>,
    config: CustomDomainConfig,
}

impl ValidateCustomDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>, config: CustomDomainConfig) -> Self {
        Self { ctx, config }
    }

    /// Mappable domain id → zone id, shared across one sweep
    async fn zone_id(
        &self,
        mappable_domain_id: &str,
        zones: &mut HashMap<String, String>,
    ) -> CoreResult<String> {
        if let Some(zone_id) = zones.get(mappable_domain_id) {
            return Ok(zone_id.clone());
        }
        let mappable = self
            .ctx
            .platform
            .get_mappable_domain(mappable_domain_id)
            .await?;
        zones.insert(mappable_domain_id.to_string(), mappable.zone_id.clone());
        Ok(mappable.zone_id)
    }

    async fn validate_domain(
        &self,
        domain: &CustomDomain,
        zones: &mut HashMap<String, String>,
    ) -> CoreResult<()> {
        const JOB: &str = ValidateCustomDomainArgs::KIND;
        let Some(verification) = domain.dns_verification.as_ref() else {
            log::debug!("[{JOB}] Custom domain {} has no DNS verification, skipping", domain.id);
            return Ok(());
        };

        let zone_id = self.zone_id(&domain.mappable_domain_id, zones).await?;
        let hostname = self
            .ctx
            .edge
            .get_hostname(&zone_id, &verification.provider_hostname_id)
            .await?;

        let update = verification_update(verification, &hostname);
        if update.is_empty() {
            log::debug!("[{JOB}] Custom domain {} unchanged", domain.id);
            return Ok(());
        }

        log::info!(
            "[{JOB}] Updating DNS verification {} of {}: hostname {}, certificate {}",
            verification.id,
            domain.cname_record,
            hostname.status,
            hostname.ssl.status
        );
        self.ctx
            .platform
            .update_dns_verification(&verification.id, update)
            .await?;
        Ok(())
    }

    async fn sweep(&self) -> CoreResult<JobOutcome> {
        const JOB: &str = ValidateCustomDomainArgs::KIND;
        let mut zones = HashMap::new();
        let mut first_error: Option<CoreError> = None;
        let (mut checked, mut failed) = (0usize, 0usize);
        let mut page = PageRequest::first(self.config.sweep_page_size);

        loop {
            let result = self
                .ctx
                .platform
                .list_custom_domains_with_verification(page.clone())
                .await?;

            for domain in &result.items {
                checked += 1;
                if let Err(e) = self.validate_domain(domain, &mut zones).await {
                    failed += 1;
                    if e.is_expected() {
                        log::warn!("[{JOB}] Failed to validate {}: {e}", domain.cname_record);
                    } else {
                        log::error!("[{JOB}] Failed to validate {}: {e}", domain.cname_record);
                    }
                    first_error.get_or_insert(e);
                }
            }

            match result.next_cursor {
                Some(cursor) if !result.items.is_empty() => page.after = Some(cursor),
                _ => break,
            }
        }

        log::info!("[{JOB}] Sweep checked {checked} custom domains, {failed} failed");
        first_error.map_or(Ok(JobOutcome::Completed), Err)
    }
}

#[async_trait]
impl Worker for ValidateCustomDomainWorker {
    type Args = ValidateCustomDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        match non_empty(job.args.custom_domain_id.as_deref()) {
            Some(id) => {
                let domain = self.ctx.platform.get_custom_domain(id).await?;
                self.validate_domain(&domain, &mut HashMap::new()).await?;
                Ok(JobOutcome::Completed)
            }
            None => self.sweep().await,
        }
    }
}

// ===== delete_custom_domain =====

/// Removes whichever of hostname, verification and custom domain it is given
pub struct DeleteCustomDomainWorker {
    ctx: Arc<WorkerContext>,
}

impl DeleteCustomDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Worker for DeleteCustomDomainWorker {
    type Args = DeleteCustomDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        let args = &job.args;
        let mut cleanup = Cleanup::new(DeleteCustomDomainArgs::KIND);

        if let Some((hostname_id, zone_id)) = args.provider_hostname() {
            let result = self.ctx.edge.delete_hostname(zone_id, hostname_id).await;
            cleanup.record("provider hostname", hostname_id, result.map_err(CoreError::from));
        }
        if let Some(id) = args.dns_verification_id() {
            let result = self.ctx.platform.delete_dns_verification(id).await;
            cleanup.record("DNS verification", id, result);
        }
        if let Some(id) = args.custom_domain_id() {
            let result = self.ctx.platform.delete_custom_domain(id).await;
            cleanup.record("custom domain", id, result);
        }

        cleanup.finish()
    }
}
