//! Data model shared by the platform API and the workers

mod custom_domain;
mod inputs;
mod page;
mod trust_center;

pub use custom_domain::{
    CustomDomain, DnsVerification, DnsVerificationStatus, MappableDomain, SslVerificationStatus,
};
pub(crate) use custom_domain::non_empty;
pub use inputs::{
    CreateCustomDomainInput, CreateDnsVerificationInput, UpdateCustomDomainInput,
    UpdateDnsVerificationInput, UpdateTrustCenterInput,
};
pub use page::{Page, PageRequest};
pub use trust_center::{Organization, PreviewStatus, TrustCenter};
