//! Process wiring for the hostname lifecycle workers.
//!
//! Provides `AppConfig` (environment configuration), `AppState` (worker
//! context and dispatcher), `AppStateBuilder` (adapter injection) and
//! `JobDispatcher` (job kind → worker routing).
//!
//! The platform record store and the job queue belong to the host process and
//! must be injected. The edge and analytics providers default to Cloudflare
//! and Pirsch clients built from the configuration.

pub mod config;
pub mod dispatcher;
pub mod error;

use std::sync::Arc;

use hostname_saga_core::{JobOutcome, JobQueue, PlatformApi, WorkerContext};
use hostname_saga_provider::{
    AnalyticsProvider, CloudflareProvider, EdgeHostnameProvider, PirschProvider,
};
use serde_json::Value;

pub use config::{AppConfig, ConfigError};
pub use dispatcher::{JobDispatcher, ALL_JOB_KINDS};
pub use error::{AppError, AppResult};

/// Application state.
///
/// Built once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Collaborators shared by every worker
    pub ctx: Arc<WorkerContext>,
    /// Routes queue jobs to workers
    pub dispatcher: JobDispatcher,
    pub config: AppConfig,
}

impl AppState {
    /// Run one delivery of a job. See [`JobDispatcher::dispatch`].
    pub async fn handle_job(
        &self,
        kind: &str,
        args: Value,
        attempt: u32,
        metadata: &Value,
    ) -> AppResult<JobOutcome> {
        self.dispatcher.dispatch(kind, args, attempt, metadata).await
    }
}

/// Builder for constructing `AppState` with host-specific adapters.
///
/// # Required adapters
/// - `platform`: the platform record store
/// - `queue`: the durable job queue
///
/// # Optional
/// - `edge`: defaults to `CloudflareProvider`
/// - `analytics`: defaults to `PirschProvider`
pub struct AppStateBuilder {
    config: AppConfig,
    platform: Option<Arc<dyn PlatformApi>>,
    queue: Option<Arc<dyn JobQueue>>,
    edge: Option<Arc<dyn EdgeHostnameProvider>>,
    analytics: Option<Arc<dyn AnalyticsProvider>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            platform: None,
            queue: None,
            edge: None,
            analytics: None,
        }
    }

    #[must_use]
    pub fn platform(mut self, platform: Arc<dyn PlatformApi>) -> Self {
        self.platform = Some(platform);
        self
    }

    #[must_use]
    pub fn queue(mut self, queue: Arc<dyn JobQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    #[must_use]
    pub fn edge(mut self, edge: Arc<dyn EdgeHostnameProvider>) -> Self {
        self.edge = Some(edge);
        self
    }

    #[must_use]
    pub fn analytics(mut self, analytics: Arc<dyn AnalyticsProvider>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    fn default_edge(config: &AppConfig) -> AppResult<Arc<dyn EdgeHostnameProvider>> {
        let mut edge = CloudflareProvider::new(config.cloudflare.api_token.clone())?
            .with_retry_policy(config.retry.clone());
        if let Some(ref base_url) = config.cloudflare.base_url {
            edge = edge.with_base_url(base_url.as_str());
        }
        Ok(Arc::new(edge))
    }

    fn default_analytics(config: &AppConfig) -> AppResult<Arc<dyn AnalyticsProvider>> {
        let mut analytics = PirschProvider::new(
            config.pirsch.client_id.clone(),
            config.pirsch.client_secret.clone(),
        )?
        .with_retry_policy(config.retry.clone());
        if let Some(ref base_url) = config.pirsch.base_url {
            analytics = analytics.with_base_url(base_url.as_str());
        }
        Ok(Arc::new(analytics))
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `AppError::MissingComponent` if a required adapter is missing,
    /// or `AppError::Provider` if a default provider client cannot be built.
    pub fn build(self) -> AppResult<AppState> {
        let platform = self
            .platform
            .ok_or(AppError::MissingComponent("platform"))?;
        let queue = self.queue.ok_or(AppError::MissingComponent("queue"))?;
        let edge = match self.edge {
            Some(edge) => edge,
            None => Self::default_edge(&self.config)?,
        };
        let analytics = match self.analytics {
            Some(analytics) => analytics,
            None => Self::default_analytics(&self.config)?,
        };

        log::info!(
            "Wiring workers with edge provider {} and analytics provider {}",
            edge.id(),
            analytics.id()
        );
        let ctx = Arc::new(WorkerContext::new(platform, edge, analytics, queue));
        let dispatcher = JobDispatcher::with_all_workers(&ctx, &self.config.workers);

        Ok(AppState {
            ctx,
            dispatcher,
            config: self.config,
        })
    }
}
