//! Cloudflare `EdgeHostnameProvider` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::{normalize_domain_name, parse_record_type, record_type_to_string};
use crate::traits::{EdgeHostnameProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CreateHostnameRequest, CustomHostname, DnsRecord, NewDnsRecord, RecordQuery, Zone,
};

use super::{
    CloudflareCreateHostnameBody, CloudflareCustomHostname, CloudflareDnsRecord,
    CloudflareDnsRecordBody, CloudflareProvider, CloudflareZone, MAX_PAGE_SIZE_RECORDS,
};

impl CloudflareProvider {
    /// Convert a Cloudflare record to `DnsRecord`
    pub(crate) fn cf_record_to_dns_record(
        &self,
        cf_record: CloudflareDnsRecord,
        zone_id: &str,
    ) -> Result<DnsRecord> {
        Ok(DnsRecord {
            id: cf_record.id,
            zone_id: zone_id.to_string(),
            record_type: parse_record_type(&cf_record.record_type, self.provider_name())?,
            name: normalize_domain_name(&cf_record.name),
            content: cf_record.content,
            ttl: cf_record.ttl,
            proxied: cf_record.proxied,
        })
    }

    fn record_body(record: &NewDnsRecord) -> CloudflareDnsRecordBody<'_> {
        CloudflareDnsRecordBody {
            record_type: record_type_to_string(record.record_type),
            name: &record.name,
            content: &record.content,
            ttl: record.ttl,
            proxied: record.proxied,
        }
    }

    fn records_query(query: &RecordQuery, page: u32) -> String {
        let mut url = format!("?page={page}&per_page={MAX_PAGE_SIZE_RECORDS}");
        if let Some(ref name) = query.name
            && !name.is_empty()
        {
            url.push_str(&format!("&name={}", urlencoding::encode(name)));
        }
        if let Some(record_type) = query.record_type {
            url.push_str(&format!("&type={}", record_type_to_string(record_type)));
        }
        url
    }
}

#[async_trait]
impl EdgeHostnameProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn create_hostname(
        &self,
        zone_id: &str,
        req: &CreateHostnameRequest,
    ) -> Result<CustomHostname> {
        let body = CloudflareCreateHostnameBody {
            hostname: &req.hostname,
            ssl: req.ssl.into(),
        };
        let created: CloudflareCustomHostname = self
            .post(
                &format!("/zones/{zone_id}/custom_hostnames"),
                &body,
                ErrorContext::resource(&req.hostname),
            )
            .await?;
        log::info!(
            "[cloudflare] Created custom hostname {} ({})",
            req.hostname,
            created.id
        );
        Ok(created.into())
    }

    async fn get_hostname(&self, zone_id: &str, hostname_id: &str) -> Result<CustomHostname> {
        let hostname: CloudflareCustomHostname = self
            .get(
                &format!("/zones/{zone_id}/custom_hostnames/{hostname_id}"),
                ErrorContext::resource(hostname_id),
            )
            .await?;
        Ok(hostname.into())
    }

    async fn delete_hostname(&self, zone_id: &str, hostname_id: &str) -> Result<()> {
        self.delete(
            &format!("/zones/{zone_id}/custom_hostnames/{hostname_id}"),
            ErrorContext::resource(hostname_id),
        )
        .await
    }

    async fn get_zone(&self, zone_id: &str) -> Result<Zone> {
        let zone: CloudflareZone = self
            .get(&format!("/zones/{zone_id}"), ErrorContext::resource(zone_id))
            .await?;
        Ok(zone.into())
    }

    async fn list_records(&self, zone_id: &str, query: &RecordQuery) -> Result<Vec<DnsRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let path = format!(
                "/zones/{zone_id}/dns_records{}",
                Self::records_query(query, page)
            );
            let (cf_records, total_pages): (Vec<CloudflareDnsRecord>, u32) =
                self.get_page(&path, ErrorContext::resource(zone_id)).await?;

            for r in cf_records {
                records.push(self.cf_record_to_dns_record(r, zone_id)?);
            }

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(records)
    }

    async fn create_record(&self, zone_id: &str, record: &NewDnsRecord) -> Result<DnsRecord> {
        let cf_record: CloudflareDnsRecord = self
            .post(
                &format!("/zones/{zone_id}/dns_records"),
                &Self::record_body(record),
                ErrorContext::record_name(&record.name),
            )
            .await?;
        self.cf_record_to_dns_record(cf_record, zone_id)
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &NewDnsRecord,
    ) -> Result<DnsRecord> {
        let cf_record: CloudflareDnsRecord = self
            .put(
                &format!("/zones/{zone_id}/dns_records/{record_id}"),
                &Self::record_body(record),
                ErrorContext::resource(record_id),
            )
            .await?;
        self.cf_record_to_dns_record(cf_record, zone_id)
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        self.delete(
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            ErrorContext::resource(record_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DnsRecordType;

    #[test]
    fn records_query_encodes_name_and_type() {
        let q = RecordQuery::exact("_cf-custom-hostname.a b.example.com", DnsRecordType::Txt);
        let url = CloudflareProvider::records_query(&q, 2);
        assert_eq!(
            url,
            "?page=2&per_page=100&name=_cf-custom-hostname.a%20b.example.com&type=TXT"
        );
    }

    #[test]
    fn records_query_without_filters() {
        let url = CloudflareProvider::records_query(&RecordQuery::default(), 1);
        assert_eq!(url, "?page=1&per_page=100");
    }

    #[test]
    fn record_conversion_strips_trailing_dot() {
        let p = CloudflareProvider::new(String::new()).unwrap();
        let record = p
            .cf_record_to_dns_record(
                CloudflareDnsRecord {
                    id: "rec-1".into(),
                    record_type: "CNAME".into(),
                    name: "acme-x1.preview.example.io.".into(),
                    content: "cname.example.io".into(),
                    ttl: 1,
                    proxied: Some(false),
                },
                "zone-1",
            )
            .unwrap();
        assert_eq!(record.name, "acme-x1.preview.example.io");
        assert_eq!(record.record_type, DnsRecordType::Cname);
        assert_eq!(record.zone_id, "zone-1");
    }
}
