//! Analytics domain tracking a trust center's custom hostname

use std::sync::Arc;

use async_trait::async_trait;
use futures::TryFutureExt;
use hostname_saga_provider::CreateDomainRequest;

use crate::config::AnalyticsDomainConfig;
use crate::error::{CoreError, CoreResult};
use crate::jobs::{
    CreateAnalyticsDomainArgs, DeleteAnalyticsDomainArgs, Job, JobArgs, JobOutcome, PartialState,
    Saga, UpdateAnalyticsDomainArgs, Worker, require,
};
use crate::types::{CustomDomain, TrustCenter, UpdateTrustCenterInput, non_empty};

use super::{Cleanup, WorkerContext};

/// Split a hostname at its first dot into (subdomain, domain).
///
/// `trust.example.com` → `("trust", "example.com")`. Everything after the
/// first label is taken as the registrable domain, so nested subdomains are
/// not recognised. No dot, or an empty side, is `InvalidHostnameFormat`.
pub fn parse_hostname(hostname: &str) -> CoreResult<(&str, &str)> {
    match hostname.split_once('.') {
        Some((subdomain, domain)) if !subdomain.is_empty() && !domain.is_empty() => {
            Ok((subdomain, domain))
        }
        _ => Err(CoreError::InvalidHostnameFormat(hostname.to_string())),
    }
}

/// Custom domain linked to `tc`, or `MissingLinkage`.
async fn linked_custom_domain(ctx: &WorkerContext, tc: &TrustCenter) -> CoreResult<CustomDomain> {
    let id = non_empty(tc.custom_domain_id.as_deref()).ok_or_else(|| {
        CoreError::MissingLinkage(format!("trust center {} has no custom domain", tc.id))
    })?;
    ctx.platform.get_custom_domain(id).await
}

// ===== create_analytics_domain =====

#[derive(Debug, Default)]
struct CreatedAnalyticsDomain {
    domain_id: Option<String>,
}

impl PartialState for CreatedAnalyticsDomain {
    type Rollback = DeleteAnalyticsDomainArgs;

    fn rollback(&self) -> Option<DeleteAnalyticsDomainArgs> {
        Some(DeleteAnalyticsDomainArgs {
            analytics_domain_id: self.domain_id.clone()?,
            trust_center_id: None,
        })
    }
}

/// Registers the trust center's custom hostname with the analytics provider
pub struct CreateAnalyticsDomainWorker {
    ctx: Arc<WorkerContext>,
    config: AnalyticsDomainConfig,
}

impl CreateAnalyticsDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>, config: AnalyticsDomainConfig) -> Self {
        Self { ctx, config }
    }
}

#[async_trait]
impl Worker for CreateAnalyticsDomainWorker {
    type Args = CreateAnalyticsDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = CreateAnalyticsDomainArgs::KIND;
        let tc_id = require(&job.args.trust_center_id, "trust_center_id", JOB)?;
        let platform = self.ctx.platform.as_ref();

        let tc = platform.get_trust_center(tc_id).await?;
        if let Some(existing) = non_empty(tc.analytics_domain_id.as_deref()) {
            log::warn!("[{JOB}] Trust center {tc_id} already has analytics domain {existing}");
            return Err(CoreError::AlreadyProvisioned(format!(
                "trust center {tc_id} already has analytics domain {existing}"
            )));
        }
        let domain = linked_custom_domain(&self.ctx, &tc).await?;
        let (subdomain, hostname) = parse_hostname(&domain.cname_record)?;
        let owner_id = non_empty(tc.owner_id.as_deref()).ok_or_else(|| {
            CoreError::MissingLinkage(format!("trust center {tc_id} has no owner organization"))
        })?;
        let org = platform.get_organization(owner_id).await?;

        let request = CreateDomainRequest::new(
            hostname,
            subdomain,
            &self.config.timezone,
            self.config.active_visitors_seconds,
        )
        .with_display_name(&org.display_name);

        let compensator = self.ctx.compensator();
        let mut saga = Saga::new(JOB, CreatedAnalyticsDomain::default(), &compensator);

        let created = saga
            .step(
                "create_domain",
                self.ctx
                    .analytics
                    .create_domain(&request)
                    .map_err(CoreError::from),
            )
            .await?;
        saga.state_mut().domain_id = Some(created.id.clone());
        log::info!(
            "[{JOB}] Created analytics domain {} for {}",
            created.id,
            domain.cname_record
        );

        saga.step(
            "write_back",
            platform.update_trust_center(
                tc_id,
                UpdateTrustCenterInput {
                    analytics_domain_id: Some(created.id.clone()),
                    analytics_identification_code: Some(created.identification_code.clone()),
                    ..Default::default()
                },
            ),
        )
        .await?;

        Ok(JobOutcome::Completed)
    }
}

// ===== update_analytics_domain =====

/// Pushes the current custom hostname to an existing analytics domain
pub struct UpdateAnalyticsDomainWorker {
    ctx: Arc<WorkerContext>,
}

impl UpdateAnalyticsDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Worker for UpdateAnalyticsDomainWorker {
    type Args = UpdateAnalyticsDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = UpdateAnalyticsDomainArgs::KIND;
        let tc_id = require(&job.args.trust_center_id, "trust_center_id", JOB)?;
        let analytics = self.ctx.analytics.as_ref();

        let tc = self.ctx.platform.get_trust_center(tc_id).await?;
        let analytics_id = non_empty(tc.analytics_domain_id.as_deref()).ok_or_else(|| {
            CoreError::MissingLinkage(format!("trust center {tc_id} has no analytics domain"))
        })?;
        let domain = linked_custom_domain(&self.ctx, &tc).await?;
        let (subdomain, hostname) = parse_hostname(&domain.cname_record)?;

        let current = analytics.get_domain(analytics_id).await?;
        if current.hostname != hostname {
            analytics.update_hostname(analytics_id, hostname).await?;
        }
        if current.subdomain != subdomain {
            analytics.update_subdomain(analytics_id, subdomain).await?;
        }

        log::info!(
            "[{JOB}] Analytics domain {analytics_id} tracks {}",
            domain.cname_record
        );
        Ok(JobOutcome::Completed)
    }
}

// ===== delete_analytics_domain =====

/// Removes an analytics domain and unlinks it from its trust center
pub struct DeleteAnalyticsDomainWorker {
    ctx: Arc<WorkerContext>,
}

impl DeleteAnalyticsDomainWorker {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Worker for DeleteAnalyticsDomainWorker {
    type Args = DeleteAnalyticsDomainArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome> {
        const JOB: &str = DeleteAnalyticsDomainArgs::KIND;
        let id = require(&job.args.analytics_domain_id, "analytics_domain_id", JOB)?;
        let mut cleanup = Cleanup::new(JOB);

        let result = self.ctx.analytics.delete_domain(id).await;
        cleanup.record("analytics domain", id, result.map_err(CoreError::from));

        if let Some(tc_id) = non_empty(job.args.trust_center_id.as_deref()) {
            let result = self
                .ctx
                .platform
                .update_trust_center(
                    tc_id,
                    UpdateTrustCenterInput {
                        clear_analytics: true,
                        ..Default::default()
                    },
                )
                .await;
            cleanup.record("analytics link of trust center", tc_id, result);
        }

        cleanup.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestContext, create_test_context, custom_domain, network_error};
    use crate::types::Organization;
    use hostname_saga_provider::{AnalyticsDomain, ProviderError};

    #[test]
    fn parse_hostname_splits_first_label() {
        assert_eq!(
            parse_hostname("trust.example.com").unwrap(),
            ("trust", "example.com")
        );
        assert_eq!(parse_hostname("a.b.c.d").unwrap(), ("a", "b.c.d"));
    }

    #[test]
    fn parse_hostname_rejects_malformed() {
        for bad in ["invalidhostname", ".example.com", "trust.", ""] {
            let err = parse_hostname(bad).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidHostnameFormat(ref h) if h == bad),
                "{bad}"
            );
            assert!(err.is_permanent());
        }
    }

    async fn seed(t: &TestContext, analytics_domain_id: Option<&str>, cname: &str) {
        t.platform
            .insert_custom_domain(custom_domain("cd-1", cname, "md-1"))
            .await;
        t.platform
            .insert_organization(Organization {
                id: "org-1".into(),
                display_name: "Acme Corp".into(),
            })
            .await;
        t.platform
            .insert_trust_center(TrustCenter {
                id: "tc-1".into(),
                owner_id: Some("org-1".into()),
                custom_domain_id: Some("cd-1".into()),
                analytics_domain_id: analytics_domain_id.map(str::to_string),
                ..Default::default()
            })
            .await;
    }

    fn create_job() -> Job<CreateAnalyticsDomainArgs> {
        Job::new(CreateAnalyticsDomainArgs {
            trust_center_id: "tc-1".into(),
        })
    }

    #[tokio::test]
    async fn create_registers_domain_and_writes_back() {
        let t = create_test_context();
        seed(&t, None, "trust.example.com").await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        worker.work(&create_job()).await.unwrap();

        let domains = t.analytics.domains().await;
        assert_eq!(domains.len(), 1);
        let created = &domains[0];
        assert_eq!(created.hostname, "example.com");
        assert_eq!(created.subdomain, "trust");
        assert_eq!(created.display_name.as_deref(), Some("Acme Corp"));
        assert_eq!(created.timezone.as_deref(), Some("UTC"));
        assert_eq!(created.active_visitors_seconds, Some(300));

        let tc = t.platform.trust_center("tc-1").await.unwrap();
        assert_eq!(tc.analytics_domain_id.as_deref(), Some(created.id.as_str()));
        assert_eq!(
            tc.analytics_identification_code.as_deref(),
            Some(created.identification_code.as_str())
        );
        assert!(t.queue.jobs().await.is_empty());
    }

    #[tokio::test]
    async fn create_already_provisioned() {
        let t = create_test_context();
        seed(&t, Some("pd-existing"), "trust.example.com").await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        let err = worker.work(&create_job()).await.unwrap_err();
        assert!(matches!(err, CoreError::AlreadyProvisioned(_)));
        assert!(t.analytics.calls().await.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_hostname_without_subdomain() {
        let t = create_test_context();
        seed(&t, None, "localhost").await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        let err = worker.work(&create_job()).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidHostnameFormat(_)));
        assert!(t.analytics.calls().await.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_hostname_before_organization_lookup() {
        let t = create_test_context();
        t.platform
            .insert_custom_domain(custom_domain("cd-1", "invalidhostname", "md-1"))
            .await;
        t.platform
            .insert_trust_center(TrustCenter {
                id: "tc-1".into(),
                owner_id: Some("org-missing".into()),
                custom_domain_id: Some("cd-1".into()),
                ..Default::default()
            })
            .await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        let err = worker.work(&create_job()).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidHostnameFormat(ref h) if h == "invalidhostname"));
    }

    #[tokio::test]
    async fn create_without_custom_domain_is_missing_linkage() {
        let t = create_test_context();
        t.platform
            .insert_trust_center(TrustCenter {
                id: "tc-1".into(),
                owner_id: Some("org-1".into()),
                ..Default::default()
            })
            .await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        let err = worker.work(&create_job()).await.unwrap_err();
        assert!(matches!(err, CoreError::MissingLinkage(_)));
    }

    #[tokio::test]
    async fn write_back_failure_enqueues_delete() {
        let t = create_test_context();
        seed(&t, None, "trust.example.com").await;
        t.platform
            .set_error("update_trust_center", Some("platform down"))
            .await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        assert!(worker.work(&create_job()).await.is_err());

        let created = t.analytics.domains().await;
        let jobs = t.queue.jobs().await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].kind, DeleteAnalyticsDomainArgs::KIND);
        let args: DeleteAnalyticsDomainArgs =
            serde_json::from_value(jobs[0].args.clone()).unwrap();
        assert_eq!(args.analytics_domain_id, created[0].id);
        assert_eq!(args.trust_center_id, None);
    }

    #[tokio::test]
    async fn create_failure_at_provider_enqueues_nothing() {
        let t = create_test_context();
        seed(&t, None, "trust.example.com").await;
        t.analytics
            .set_error(
                "create_domain",
                Some(ProviderError::RateLimited {
                    provider: "mock".into(),
                    retry_after: Some(5),
                    raw_message: None,
                }),
            )
            .await;
        let worker =
            CreateAnalyticsDomainWorker::new(t.ctx.clone(), AnalyticsDomainConfig::default());

        assert!(worker.work(&create_job()).await.is_err());
        assert!(t.queue.jobs().await.is_empty());
    }

    fn tracked(id: &str, hostname: &str, subdomain: &str) -> AnalyticsDomain {
        AnalyticsDomain {
            id: id.into(),
            def_time: None,
            mod_time: None,
            organization_id: None,
            hostname: hostname.into(),
            subdomain: subdomain.into(),
            identification_code: "code-1".into(),
            public: false,
            timezone: None,
            active_visitors_seconds: None,
            display_name: None,
        }
    }

    #[tokio::test]
    async fn update_pushes_changed_parts_only() {
        let t = create_test_context();
        seed(&t, Some("pd-1"), "status.example.com").await;
        t.analytics
            .insert_domain(tracked("pd-1", "example.com", "trust"))
            .await;
        let worker = UpdateAnalyticsDomainWorker::new(t.ctx.clone());

        worker
            .work(&Job::new(UpdateAnalyticsDomainArgs {
                trust_center_id: "tc-1".into(),
            }))
            .await
            .unwrap();

        let domain = t.analytics.domain("pd-1").await.unwrap();
        assert_eq!(domain.subdomain, "status");
        assert_eq!(domain.hostname, "example.com");
        let calls = t.analytics.calls().await;
        assert!(calls.contains(&"update_subdomain"));
        assert!(!calls.contains(&"update_hostname"));
    }

    #[tokio::test]
    async fn delete_clears_trust_center_link() {
        let t = create_test_context();
        seed(&t, Some("pd-1"), "trust.example.com").await;
        t.analytics
            .insert_domain(tracked("pd-1", "example.com", "trust"))
            .await;
        let worker = DeleteAnalyticsDomainWorker::new(t.ctx.clone());
        let job = Job::new(DeleteAnalyticsDomainArgs {
            analytics_domain_id: "pd-1".into(),
            trust_center_id: Some("tc-1".into()),
        });

        worker.work(&job).await.unwrap();
        assert!(t.analytics.domain("pd-1").await.is_none());
        let tc = t.platform.trust_center("tc-1").await.unwrap();
        assert_eq!(tc.analytics_domain_id, None);
        assert_eq!(tc.analytics_identification_code, None);

        // Repeating is harmless
        worker.work(&job).await.unwrap();
    }

    #[tokio::test]
    async fn delete_tolerates_missing_trust_center() {
        let t = create_test_context();
        let worker = DeleteAnalyticsDomainWorker::new(t.ctx.clone());
        let job = Job::new(DeleteAnalyticsDomainArgs {
            analytics_domain_id: "pd-gone".into(),
            trust_center_id: Some("tc-gone".into()),
        });

        worker.work(&job).await.unwrap();
    }

    #[tokio::test]
    async fn delete_surfaces_provider_failure() {
        let t = create_test_context();
        t.analytics
            .set_error("delete_domain", Some(network_error()))
            .await;
        let worker = DeleteAnalyticsDomainWorker::new(t.ctx.clone());

        let err = worker
            .work(&Job::new(DeleteAnalyticsDomainArgs {
                analytics_domain_id: "pd-1".into(),
                trust_center_id: None,
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Provider(_)));
    }
}
