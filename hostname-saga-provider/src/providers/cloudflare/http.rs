//! Cloudflare HTTP request methods

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{Exchange, Reply};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::redact_for_log;

use super::types::CloudflareResultInfo;
use super::{CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.base_url))
            .bearer_auth(&self.api_token)
    }

    /// Send a request and unwrap the Cloudflare envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
        context: ErrorContext,
    ) -> Result<(Option<T>, Option<CloudflareResultInfo>)> {
        let Reply {
            status,
            body: response_text,
        } = Exchange::new(self.provider_name(), &self.retry)
            .send(request, &format!("{method} {path}"))
            .await?;

        let resource = context
            .resource
            .clone()
            .unwrap_or_else(|| path.to_string());

        let cf_response: CloudflareResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(_) if status == 404 => {
                return Err(ProviderError::NotFound {
                    provider: self.provider_name().to_string(),
                    resource,
                    raw_message: Some(redact_for_log(&response_text)),
                });
            }
            Err(e) => {
                log::error!("[cloudflare] JSON parse failed: {e}");
                log::error!(
                    "[cloudflare] Raw response: {}",
                    redact_for_log(&response_text)
                );
                return Err(self.parse_error(e));
            }
        };

        if !cf_response.success {
            let (code, message) = cf_response
                .errors
                .and_then(|errors| {
                    errors
                        .first()
                        .map(|e| (e.code.to_string(), e.message.clone()))
                })
                .unwrap_or_else(|| (String::new(), "Unknown error".to_string()));
            let err = self.map_error(RawApiError::with_code(code, message), context);

            // Unmapped codes on a 404 still mean the resource is gone
            let err = match err {
                ProviderError::Unknown { raw_message, .. } if status == 404 => {
                    ProviderError::NotFound {
                        provider: self.provider_name().to_string(),
                        resource,
                        raw_message: Some(raw_message),
                    }
                }
                other => other,
            };

            if err.is_expected() {
                log::warn!("[cloudflare] API error: {err}");
            } else {
                log::error!("[cloudflare] API error: {err}");
            }
            return Err(err);
        }

        Ok((cf_response.result, cf_response.result_info))
    }

    /// GET a single object
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let (result, _) = self
            .send(self.request(Method::GET, path), "GET", path, context)
            .await?;
        result.ok_or_else(|| self.parse_error("Missing result field in response"))
    }

    /// GET one page of a list; returns the items and the total page count
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<(Vec<T>, u32)> {
        let (result, info) = self
            .send::<Vec<T>>(self.request(Method::GET, path), "GET", path, context)
            .await?;
        let total_pages = info.map_or(1, |i| i.total_pages.max(i.page));
        Ok((result.unwrap_or_default(), total_pages))
    }

    /// POST a JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        self.send_json(Method::POST, path, body, context).await
    }

    /// PUT (overwrite) with a JSON body
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        self.send_json(Method::PUT, path, body, context).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let body_json = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        log::debug!(
            "[cloudflare] Request Body: {}",
            redact_for_log(&body_json)
        );

        let request = self
            .request(method.clone(), path)
            .header("Content-Type", "application/json")
            .body(body_json);
        let (result, _) = self.send(request, method.as_str(), path, context).await?;
        result.ok_or_else(|| self.parse_error("Missing result field in response"))
    }

    /// DELETE a resource
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        self.send::<serde_json::Value>(self.request(Method::DELETE, path), "DELETE", path, context)
            .await?;
        Ok(())
    }
}
