//! Preview hostnames under the shared preview zone
//!
//! A preview hostname is `<slug>-<random suffix>.<preview zone>`, CNAMEd to a
//! mappable domain. Ownership is proven by a TXT record this module publishes
//! itself once the DNS verification shows up on the preview custom domain.

use std::sync::Arc;

use async_trait::async_trait;
use futures::TryFutureExt;
use futures::future::join_all;
use hostname_saga_provider::{DnsRecord, DnsRecordType, NewDnsRecord, RecordQuery};
use rand::Rng;

use crate::config::PreviewDomainConfig;
use crate::error::{CoreError, CoreResult};
use crate::jobs::{
    CreatePreviewDomainArgs, DeletePreviewDomainArgs, Job, JobArgs, JobOutcome, PartialState,
    Saga, ValidatePreviewDomainArgs, Worker, require,
};
use crate::types::{
    CreateCustomDomainInput, DnsVerification, PreviewStatus, TrustCenter, UpdateTrustCenterInput,
    non_empty,
};

use super::{Cleanup, WorkerContext};

const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| char::from(SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())]))
        .collect()
}

/// `<slug lowercased>-<9 random [a-z0-9]>.<zone name>`
pub fn preview_hostname(slug: &str, zone_name: &str) -> String {
    format!("{}-{}.{zone_name}", slug.to_lowercase(), random_suffix())
}

fn preview_domain_id<'a>(job: &str, tc: &'a TrustCenter) -> CoreResult<&'a str> {
    non_empty(tc.preview_domain_id.as_deref()).ok_or_else(|| {
        log::warn!("[{job}] Trust center {} has no preview domain", tc.id);
        CoreError::MissingLinkage(format!("trust center {} has no preview domain", tc.id))
    })
}

// ===== create_preview_domain =====

#[derive(Debug)]
struct CreatedPreview {
    zone_id: String,
    custom_domain_id: Option<String>,
}

impl PartialState for CreatedPreview {
    type Rollback = DeletePreviewDomainArgs;

    fn rollback(&self) -> Option<DeletePreviewDomainArgs> {
        Some(DeletePreviewDomainArgs {
            custom_domain_id: self.custom_domain_id.clone()?,
            preview_zone_id: self.zone_id.clone(),
        })
    }
}

/// Allocates a preview hostname for a trust center and points it at the
/// mappable domain
pub struct CreatePreviewDomainWorker {
    ctx: Arc<WorkerContext>,
    config: PreviewDomainConfig,
}

impl CreatePreviewDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>, config: PreviewDomainConfig) -> Self {
        Self { ctx, config }
    }
}

#[async_trait]
impl Worker for CreatePreviewDomainWorker {
    type Args = CreatePreviewDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = CreatePreviewDomainArgs::KIND;
        let args = &job.args;
        let tc_id = require(&args.trust_center_id, "trust_center_id", JOB)?;
        let zone_id = require(&args.preview_zone_id, "preview_zone_id", JOB)?;
        let target = require(&args.cname_target, "cname_target", JOB)?;
        let platform = self.ctx.platform.as_ref();

        let tc = platform.get_trust_center(tc_id).await?;
        if let Some(existing) = non_empty(tc.preview_domain_id.as_deref()) {
            return Err(CoreError::AlreadyProvisioned(format!(
                "trust center {tc_id} already has preview domain {existing}"
            )));
        }
        let slug = non_empty(tc.slug.as_deref())
            .ok_or_else(|| CoreError::MissingLinkage(format!("trust center {tc_id} has no slug")))?;
        let zone = self.ctx.edge.get_zone(zone_id).await?;
        let mappable = platform
            .find_mappable_domain_by_name(target)
            .await?
            .ok_or_else(|| CoreError::MissingLinkage(format!("no mappable domain named {target}")))?;

        let hostname = preview_hostname(slug, &zone.name);
        let compensator = self.ctx.compensator();
        let mut saga = Saga::new(
            JOB,
            CreatedPreview {
                zone_id: zone_id.to_string(),
                custom_domain_id: None,
            },
            &compensator,
        );

        let domain = saga
            .step(
                "create_custom_domain",
                platform.create_custom_domain(CreateCustomDomainInput {
                    cname_record: hostname.clone(),
                    mappable_domain_id: mappable.id.clone(),
                    owner_id: tc.owner_id.clone(),
                }),
            )
            .await?;
        saga.state_mut().custom_domain_id = Some(domain.id.clone());
        log::info!("[{JOB}] Created preview domain {} ({hostname})", domain.id);

        let mut update = UpdateTrustCenterInput {
            preview_domain_id: Some(domain.id.clone()),
            ..Default::default()
        };
        if tc.preview_status.can_transition_to(PreviewStatus::Provisioning) {
            update.preview_status = Some(PreviewStatus::Provisioning);
        } else {
            log::warn!(
                "[{JOB}] Trust center {tc_id} is {:?}, keeping preview status",
                tc.preview_status
            );
        }
        saga.step("update_trust_center", platform.update_trust_center(tc_id, update))
            .await?;

        let record = NewDnsRecord {
            record_type: DnsRecordType::Cname,
            name: hostname.clone(),
            content: target.to_string(),
            ttl: self.config.record_ttl,
            proxied: None,
        };
        saga.step(
            "create_cname_record",
            self.ctx
                .edge
                .create_record(zone_id, &record)
                .map_err(CoreError::from),
        )
        .await?;

        log::info!("[{JOB}] {hostname} → {target} in zone {}", zone.name);
        Ok(JobOutcome::Completed)
    }
}

// ===== validate_preview_domain =====

fn txt_matches(record: &DnsRecord, value: &str) -> bool {
    record.content.trim_matches('"') == value
}

/// Publishes the ownership TXT record and waits for the preview hostname and
/// its certificate to become active
pub struct ValidatePreviewDomainWorker {
    ctx: Arc<WorkerContext>,
    config: PreviewDomainConfig,
}

impl ValidatePreviewDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>, config: PreviewDomainConfig) -> Self {
        Self { ctx, config }
    }

    /// Make sure the ownership TXT record exists with the expected value.
    ///
    /// Returns `false` when the record had to be created.
    async fn ensure_txt_record(&self, zone_id: &str, v: &DnsVerification) -> CoreResult<bool> {
        const JOB: &str = ValidatePreviewDomainArgs::KIND;
        let edge = self.ctx.edge.as_ref();
        let records = edge
            .list_records(zone_id, &RecordQuery::exact(&v.dns_txt_record, DnsRecordType::Txt))
            .await?;
        let record = NewDnsRecord {
            record_type: DnsRecordType::Txt,
            name: v.dns_txt_record.clone(),
            content: v.dns_txt_value.clone(),
            ttl: self.config.record_ttl,
            proxied: None,
        };

        if records.iter().any(|r| txt_matches(r, &v.dns_txt_value)) {
            return Ok(true);
        }
        match records.first() {
            None => {
                edge.create_record(zone_id, &record).await?;
                log::info!("[{JOB}] Created TXT record {}", v.dns_txt_record);
                Ok(false)
            }
            Some(stale) => {
                edge.update_record(zone_id, &stale.id, &record).await?;
                log::info!("[{JOB}] Replaced stale TXT record {}", v.dns_txt_record);
                Ok(true)
            }
        }
    }
}

#[async_trait]
impl Worker for ValidatePreviewDomainWorker {
    type Args = ValidatePreviewDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = ValidatePreviewDomainArgs::KIND;
        let args = &job.args;
        let tc_id = require(&args.trust_center_id, "trust_center_id", JOB)?;
        let zone_id = require(&args.preview_zone_id, "preview_zone_id", JOB)?;
        let platform = self.ctx.platform.as_ref();

        let tc = platform.get_trust_center(tc_id).await?;
        let domain = platform
            .get_custom_domain(preview_domain_id(JOB, &tc)?)
            .await?;

        let Some(verification) = domain.dns_verification.as_ref() else {
            log::info!(
                "[{JOB}] Waiting for DNS verification of {}",
                domain.cname_record
            );
            return self.config.snooze.snooze(JOB, job.continuation);
        };

        if !self.ensure_txt_record(zone_id, verification).await? {
            // The next scheduled validation picks up the published record
            return Ok(JobOutcome::Completed);
        }

        if !verification.is_fully_active() {
            log::debug!(
                "[{JOB}] {} not active yet: hostname {:?}, certificate {:?}",
                domain.cname_record,
                verification.dns_verification_status,
                verification.acme_challenge_status
            );
            return self.config.snooze.snooze(JOB, job.continuation);
        }

        if tc.preview_status == PreviewStatus::Ready {
            log::debug!("[{JOB}] Trust center {tc_id} preview already ready");
        } else if tc.preview_status.can_transition_to(PreviewStatus::Ready) {
            platform
                .update_trust_center(
                    tc_id,
                    UpdateTrustCenterInput {
                        preview_status: Some(PreviewStatus::Ready),
                        ..Default::default()
                    },
                )
                .await?;
            log::info!("[{JOB}] Preview domain {} is ready", domain.cname_record);
        } else {
            log::warn!(
                "[{JOB}] Trust center {tc_id} is {:?}, not marking preview ready",
                tc.preview_status
            );
        }
        Ok(JobOutcome::Completed)
    }
}

// ===== delete_preview_domain =====

/// Removes the preview CNAME records and the preview custom domain
pub struct DeletePreviewDomainWorker {
    ctx: Arc<WorkerContext>,
}

impl DeletePreviewDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Worker for DeletePreviewDomainWorker {
    type Args = DeletePreviewDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = DeletePreviewDomainArgs::KIND;
        let args = &job.args;
        let id = require(&args.custom_domain_id, "custom_domain_id", JOB)?;
        let zone_id = require(&args.preview_zone_id, "preview_zone_id", JOB)?;
        let edge = self.ctx.edge.as_ref();

        let domain = match self.ctx.platform.get_custom_domain(id).await {
            Ok(domain) => domain,
            Err(e) if e.is_not_found() => {
                log::info!("[{JOB}] Preview domain {id} already gone");
                return Ok(JobOutcome::Completed);
            }
            Err(e) => return Err(e),
        };

        let records = edge
            .list_records(
                zone_id,
                &RecordQuery::exact(&domain.cname_record, DnsRecordType::Cname),
            )
            .await?;
        let results = join_all(records.iter().map(|r| edge.delete_record(zone_id, &r.id))).await;

        let mut cleanup = Cleanup::new(JOB);
        for (record, result) in records.iter().zip(results) {
            cleanup.record("CNAME record", &record.id, result.map_err(CoreError::from));
        }
        // Keep the custom domain while records remain, so a retry can find them
        if cleanup.has_failed() {
            return cleanup.finish();
        }

        let result = self.ctx.platform.delete_custom_domain(id).await;
        cleanup.record("preview domain", id, result);
        cleanup.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::Continuation;
    use crate::test_utils::{
        TestContext, create_test_context, custom_domain, network_error, txt_record, verification,
    };
    use crate::types::{DnsVerificationStatus, MappableDomain, SslVerificationStatus};
    use std::time::Duration;

    const ZONE: &str = "preview-zone";
    const ZONE_NAME: &str = "preview.example.io";
    const TARGET: &str = "cname.example.io";

    async fn seed_trust_center(t: &TestContext, preview_domain_id: Option<&str>) {
        t.edge.insert_zone(ZONE, ZONE_NAME).await;
        t.platform
            .insert_mappable_domain(MappableDomain {
                id: "md-1".into(),
                name: TARGET.into(),
                zone_id: "zone-1".into(),
            })
            .await;
        t.platform
            .insert_trust_center(TrustCenter {
                id: "tc-1".into(),
                owner_id: Some("org-1".into()),
                slug: Some("Acme".into()),
                preview_domain_id: preview_domain_id.map(str::to_string),
                ..Default::default()
            })
            .await;
    }

    fn create_job() -> Job<CreatePreviewDomainArgs> {
        Job::new(CreatePreviewDomainArgs {
            trust_center_id: "tc-1".into(),
            preview_zone_id: ZONE.into(),
            cname_target: TARGET.into(),
        })
    }

    fn validate_job(snoozes: u32) -> Job<ValidatePreviewDomainArgs> {
        Job::new(ValidatePreviewDomainArgs {
            trust_center_id: "tc-1".into(),
            preview_zone_id: ZONE.into(),
        })
        .with_continuation(Continuation { attempts: snoozes })
    }

    fn config(max_snoozes: u32) -> PreviewDomainConfig {
        let mut config = PreviewDomainConfig::default();
        config.snooze.max_snoozes = max_snoozes;
        config.snooze.delay = Duration::from_secs(5);
        config
    }

    #[test]
    fn hostname_shape() {
        let hostname = preview_hostname("Acme-Corp", ZONE_NAME);
        let (label, zone) = hostname.split_once('.').unwrap();
        assert_eq!(zone, ZONE_NAME);
        let suffix = label.strip_prefix("acme-corp-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    // ===== create =====

    #[tokio::test]
    async fn create_allocates_hostname_and_cname() {
        let t = create_test_context();
        seed_trust_center(&t, None).await;
        let worker = CreatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        worker.work(&create_job()).await.unwrap();

        let domains = t.platform.custom_domains().await;
        assert_eq!(domains.len(), 1);
        let domain = &domains[0];
        assert!(domain.cname_record.starts_with("acme-"));
        assert!(domain.cname_record.ends_with(ZONE_NAME));
        assert_eq!(domain.mappable_domain_id, "md-1");

        let tc = t.platform.trust_center("tc-1").await.unwrap();
        assert_eq!(tc.preview_domain_id.as_deref(), Some(domain.id.as_str()));
        assert_eq!(tc.preview_status, PreviewStatus::Provisioning);

        let records = t.edge.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_type, DnsRecordType::Cname);
        assert_eq!(records[0].name, domain.cname_record);
        assert_eq!(records[0].content, TARGET);
        assert!(t.queue.jobs().await.is_empty());
    }

    #[tokio::test]
    async fn create_requires_every_arg() {
        let t = create_test_context();
        let worker = CreatePreviewDomainWorker::new(t.ctx.clone(), config(30));
        let mut job = create_job();
        job.args.cname_target.clear();

        let err = worker.work(&job).await.unwrap_err();
        assert!(matches!(err, CoreError::MissingRequiredArg { ref field, .. } if field == "cname_target"));
    }

    #[tokio::test]
    async fn create_without_mappable_target_is_missing_linkage() {
        let t = create_test_context();
        seed_trust_center(&t, None).await;
        let worker = CreatePreviewDomainWorker::new(t.ctx.clone(), config(30));
        let mut job = create_job();
        job.args.cname_target = "unknown.example.io".into();

        let err = worker.work(&job).await.unwrap_err();
        assert!(matches!(err, CoreError::MissingLinkage(_)));
        assert!(t.platform.custom_domains().await.is_empty());
    }

    #[tokio::test]
    async fn create_record_failure_enqueues_delete() {
        let t = create_test_context();
        seed_trust_center(&t, None).await;
        t.edge.set_error("create_record", Some(network_error())).await;
        let worker = CreatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        assert!(worker.work(&create_job()).await.is_err());

        let domain_id = t.platform.custom_domains().await[0].id.clone();
        let jobs = t.queue.jobs().await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].kind, DeletePreviewDomainArgs::KIND);
        let args: DeletePreviewDomainArgs = serde_json::from_value(jobs[0].args.clone()).unwrap();
        assert_eq!(args.custom_domain_id, domain_id);
        assert_eq!(args.preview_zone_id, ZONE);
    }

    #[tokio::test]
    async fn create_twice_is_already_provisioned() {
        let t = create_test_context();
        seed_trust_center(&t, Some("cd-preview")).await;
        let worker = CreatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        let err = worker.work(&create_job()).await.unwrap_err();
        assert!(matches!(err, CoreError::AlreadyProvisioned(_)));
        assert!(t.platform.custom_domains().await.is_empty());
    }

    // ===== validate =====

    async fn seed_preview(t: &TestContext, v: Option<DnsVerification>) {
        seed_trust_center(t, Some("cd-preview")).await;
        let mut domain = custom_domain("cd-preview", "acme-abc123xyz.preview.example.io", "md-1");
        domain.dns_verification_id = v.as_ref().map(|v| v.id.clone());
        domain.dns_verification = v;
        t.platform.insert_custom_domain(domain).await;
    }

    fn active_verification() -> DnsVerification {
        let mut v = verification("dv-1", "cf-preview");
        v.dns_verification_status = DnsVerificationStatus::Active;
        v.acme_challenge_status = SslVerificationStatus::Active;
        v
    }

    #[tokio::test]
    async fn validate_snoozes_without_verification() {
        let t = create_test_context();
        seed_preview(&t, None).await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        let outcome = worker.work(&validate_job(0)).await.unwrap();
        assert_eq!(
            outcome,
            JobOutcome::Snooze {
                delay: Duration::from_secs(5),
                continuation: Continuation { attempts: 1 },
            }
        );
        assert!(t.edge.calls().await.is_empty());
    }

    #[tokio::test]
    async fn validate_gives_up_at_snooze_ceiling() {
        let t = create_test_context();
        seed_preview(&t, None).await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        let err = worker.work(&validate_job(30)).await.unwrap_err();
        assert!(matches!(err, CoreError::MaxSnoozesReached { attempts: 30, .. }));
    }

    #[tokio::test]
    async fn validate_without_preview_domain_is_missing_linkage() {
        let t = create_test_context();
        seed_trust_center(&t, None).await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        let err = worker.work(&validate_job(0)).await.unwrap_err();
        assert!(matches!(err, CoreError::MissingLinkage(_)));
    }

    #[tokio::test]
    async fn validate_creates_missing_txt_record_and_completes() {
        let t = create_test_context();
        seed_preview(&t, Some(active_verification())).await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        let outcome = worker.work(&validate_job(2)).await.unwrap();
        assert_eq!(outcome, JobOutcome::Completed);

        let records = t.edge.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_type, DnsRecordType::Txt);
        assert_eq!(records[0].name, "_cf-custom-hostname.trust.example.com");
        assert_eq!(records[0].content, "txt-value");
        assert!(t.platform.trust_center_updates().await.is_empty());
    }

    #[tokio::test]
    async fn creating_txt_record_at_snooze_ceiling_is_not_an_error() {
        let t = create_test_context();
        seed_preview(&t, Some(active_verification())).await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        assert_eq!(worker.work(&validate_job(30)).await.unwrap(), JobOutcome::Completed);
        assert_eq!(t.edge.records().await.len(), 1);

        // Record is in place now, so the follow-up run marks the preview ready
        assert_eq!(worker.work(&validate_job(0)).await.unwrap(), JobOutcome::Completed);
        assert_eq!(
            t.platform.trust_center("tc-1").await.unwrap().preview_status,
            PreviewStatus::Ready
        );
    }

    #[tokio::test]
    async fn validate_marks_ready_exactly_once() {
        let t = create_test_context();
        seed_preview(&t, Some(active_verification())).await;
        t.edge
            .insert_record(txt_record(
                ZONE,
                "_cf-custom-hostname.trust.example.com",
                "\"txt-value\"",
            ))
            .await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        assert_eq!(worker.work(&validate_job(0)).await.unwrap(), JobOutcome::Completed);
        assert_eq!(worker.work(&validate_job(0)).await.unwrap(), JobOutcome::Completed);

        let updates = t.platform.trust_center_updates().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1.preview_status, Some(PreviewStatus::Ready));
        assert_eq!(
            t.platform.trust_center("tc-1").await.unwrap().preview_status,
            PreviewStatus::Ready
        );
    }

    #[tokio::test]
    async fn validate_rewrites_stale_txt_record() {
        let t = create_test_context();
        seed_preview(&t, Some(active_verification())).await;
        t.edge
            .insert_record(txt_record(
                ZONE,
                "_cf-custom-hostname.trust.example.com",
                "old-value",
            ))
            .await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        worker.work(&validate_job(0)).await.unwrap();

        let records = t.edge.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "txt-value");
    }

    #[tokio::test]
    async fn validate_snoozes_until_active() {
        let t = create_test_context();
        let mut v = active_verification();
        v.acme_challenge_status = SslVerificationStatus::PendingValidation;
        seed_preview(&t, Some(v)).await;
        t.edge
            .insert_record(txt_record(ZONE, "_cf-custom-hostname.trust.example.com", "txt-value"))
            .await;
        let worker = ValidatePreviewDomainWorker::new(t.ctx.clone(), config(30));

        let outcome = worker.work(&validate_job(0)).await.unwrap();
        assert!(matches!(outcome, JobOutcome::Snooze { .. }));
        assert!(t.platform.trust_center_updates().await.is_empty());
    }

    // ===== delete =====

    fn delete_job() -> Job<DeletePreviewDomainArgs> {
        Job::new(DeletePreviewDomainArgs {
            custom_domain_id: "cd-preview".into(),
            preview_zone_id: ZONE.into(),
        })
    }

    fn cname(name: &str) -> DnsRecord {
        DnsRecord {
            record_type: DnsRecordType::Cname,
            content: TARGET.into(),
            ..txt_record(ZONE, name, "")
        }
    }

    #[tokio::test]
    async fn delete_removes_cnames_and_domain() {
        let t = create_test_context();
        seed_preview(&t, None).await;
        let name = "acme-abc123xyz.preview.example.io";
        t.edge.insert_record(cname(name)).await;
        t.edge.insert_record(cname(name)).await;
        t.edge.insert_record(cname("other.preview.example.io")).await;
        let worker = DeletePreviewDomainWorker::new(t.ctx.clone());

        worker.work(&delete_job()).await.unwrap();

        let remaining = t.edge.records().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "other.preview.example.io");
        assert!(t.platform.custom_domain("cd-preview").await.is_none());

        // Second run: the custom domain is gone, nothing to do
        worker.work(&delete_job()).await.unwrap();
    }

    #[tokio::test]
    async fn delete_keeps_domain_when_record_delete_fails() {
        let t = create_test_context();
        seed_preview(&t, None).await;
        t.edge
            .insert_record(cname("acme-abc123xyz.preview.example.io"))
            .await;
        t.edge.set_error("delete_record", Some(network_error())).await;
        let worker = DeletePreviewDomainWorker::new(t.ctx.clone());

        assert!(worker.work(&delete_job()).await.is_err());
        assert!(t.platform.custom_domain("cd-preview").await.is_some());
    }
}
