// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the product service.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Product service client.
///
/// Cheap to clone; every spawned part-pipeline holds its own copy, so no
/// state is shared between concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl Client {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL of the product service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one GET and return the body as UTF-8 text.
    ///
    /// Non-2xx statuses are fetch errors; no retry, no backoff.
    pub(crate) async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.send_get(url).await?;
        resp.text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }

    /// Issue one GET and return the raw body bytes.
    pub(crate) async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self.send_get(url).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        Ok(bytes.to_vec())
    }

    async fn send_get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        tracing::debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(resp)
    }
}
