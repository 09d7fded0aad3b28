//! Pirsch HTTP request methods and token cache

use chrono::Utc;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{Exchange, Reply};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PirschProvider;
use super::types::{AccessToken, PirschErrorBody, TokenRequest, TokenResponse};

impl PirschProvider {
    /// Cached token, or a fresh one when missing or expired.
    pub(crate) async fn access_token(&self) -> Result<String> {
        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref()
                && token.is_valid_at(Utc::now())
            {
                return Ok(token.token.clone());
            }
        }

        let mut guard = self.token.write().await;
        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = guard.as_ref()
            && token.is_valid_at(Utc::now())
        {
            return Ok(token.token.clone());
        }

        let token = self.authenticate().await?;
        let value = token.token.clone();
        *guard = Some(token);
        Ok(value)
    }

    /// Drop the cached token so the next call re-authenticates.
    pub(crate) async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    async fn authenticate(&self) -> Result<AccessToken> {
        let body = serde_json::to_string(&TokenRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
        })
        .map_err(|e| self.serialization_error(e))?;

        let request = self
            .client
            .post(format!("{}/token", self.base_url))
            .header("Content-Type", "application/json")
            .body(body);

        let exchange = Exchange::new(self.provider_name(), &self.retry);
        let Reply {
            status,
            body: response_text,
        } = exchange.send(request, "POST /token").await?;

        if status != 200 {
            log::error!("[pirsch] Token exchange failed with status {status}");
            return Err(ProviderError::AuthFailed {
                provider: self.provider_name().to_string(),
                status,
                raw_message: PirschErrorBody::message(&response_text),
            });
        }

        let token: TokenResponse = exchange.decode(&response_text)?;
        log::debug!("[pirsch] Obtained access token valid until {}", token.expires_at);
        Ok(token.into())
    }

    /// Authenticated request with retries. A 401 drops the cached token and
    /// replays the request once with a fresh one.
    pub(crate) async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(u16, String)> {
        let body_json = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| self.serialization_error(e))?;

        let mut reauthenticated = false;
        loop {
            let token = self.access_token().await?;
            let mut request = self
                .client
                .request(method.clone(), format!("{}{path}", self.base_url))
                .bearer_auth(token)
                .header("Content-Type", "application/json");
            if let Some(ref json) = body_json {
                request = request.body(json.clone());
            }

            let Reply {
                status,
                body: response_text,
            } = Exchange::new(self.provider_name(), &self.retry)
                .send(request, &format!("{method} {path}"))
                .await?;

            if status == 401 && !reauthenticated {
                log::warn!("[pirsch] Access token rejected, re-authenticating");
                self.invalidate_token().await;
                reauthenticated = true;
                continue;
            }

            return Ok((status, response_text));
        }
    }

    /// Map a non-success response to a `ProviderError`.
    pub(crate) fn status_error(
        &self,
        status: u16,
        response_text: &str,
        context: ErrorContext,
    ) -> ProviderError {
        let err = self.map_error(
            RawApiError::with_code(status.to_string(), PirschErrorBody::message(response_text)),
            context,
        );
        if err.is_expected() {
            log::warn!("[pirsch] API error: {err}");
        } else {
            log::error!("[pirsch] API error: {err}");
        }
        err
    }

    /// Send and decode a JSON response, accepting any status in `ok`.
    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        ok: &[u16],
        context: ErrorContext,
    ) -> Result<T> {
        let (status, response_text) = self.send(method, path, body).await?;
        if !ok.contains(&status) {
            return Err(self.status_error(status, &response_text, context));
        }
        Exchange::new(self.provider_name(), &self.retry).decode(&response_text)
    }

    /// Send and discard the response body, accepting any status in `ok`.
    pub(crate) async fn send_empty<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        ok: &[u16],
        context: ErrorContext,
    ) -> Result<()> {
        let (status, response_text) = self.send(method, path, body).await?;
        if !ok.contains(&status) {
            return Err(self.status_error(status, &response_text, context));
        }
        Ok(())
    }
}
