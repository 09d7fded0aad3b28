//! Platform record store abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{
    CreateCustomDomainInput, CreateDnsVerificationInput, CustomDomain, DnsVerification,
    MappableDomain, Organization, Page, PageRequest, TrustCenter, UpdateCustomDomainInput,
    UpdateDnsVerificationInput, UpdateTrustCenterInput,
};

/// Platform API Trait
///
/// CRUD on the platform's own records. Entities that do not exist surface as
/// [`CoreError::NotFound`](crate::CoreError::NotFound); delete-class callers
/// treat that as success.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Get a custom domain, with its verification embedded when linked
    async fn get_custom_domain(&self, id: &str) -> CoreResult<CustomDomain>;

    /// List custom domains that carry a DNS verification
    ///
    /// # Arguments
    /// * `page` - Page size and cursor from the previous page
    async fn list_custom_domains_with_verification(
        &self,
        page: PageRequest,
    ) -> CoreResult<Page<CustomDomain>>;

    async fn create_custom_domain(&self, input: CreateCustomDomainInput)
    -> CoreResult<CustomDomain>;

    async fn update_custom_domain(
        &self,
        id: &str,
        input: UpdateCustomDomainInput,
    ) -> CoreResult<CustomDomain>;

    async fn delete_custom_domain(&self, id: &str) -> CoreResult<()>;

    async fn get_mappable_domain(&self, id: &str) -> CoreResult<MappableDomain>;

    /// Find a mappable domain by exact name
    ///
    /// Returns `None` instead of `NotFound` when no domain has that name.
    async fn find_mappable_domain_by_name(&self, name: &str)
    -> CoreResult<Option<MappableDomain>>;

    async fn create_dns_verification(
        &self,
        input: CreateDnsVerificationInput,
    ) -> CoreResult<DnsVerification>;

    /// Apply the non-`None` fields of `input`
    async fn update_dns_verification(
        &self,
        id: &str,
        input: UpdateDnsVerificationInput,
    ) -> CoreResult<DnsVerification>;

    async fn delete_dns_verification(&self, id: &str) -> CoreResult<()>;

    async fn get_trust_center(&self, id: &str) -> CoreResult<TrustCenter>;

    /// Apply the non-`None` fields of `input`
    async fn update_trust_center(
        &self,
        id: &str,
        input: UpdateTrustCenterInput,
    ) -> CoreResult<TrustCenter>;

    async fn get_organization(&self, id: &str) -> CoreResult<Organization>;
}
