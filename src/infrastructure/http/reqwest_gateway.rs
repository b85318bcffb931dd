//! reqwest-backed [`HttpGateway`].

use crate::domain::entities::MemoizedResponse;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::gateways::HttpGateway;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::debug;

/// JSON GET client over a shared reqwest connection pool.
///
/// No timeouts and no retries are configured: a hung upstream stalls the caller.
#[derive(Clone)]
pub struct ReqwestGateway {
    client: Client,
}

impl ReqwestGateway {
    /// Builds a gateway that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpGateway for ReqwestGateway {
    async fn get_json(&self, url: &str) -> ApiResult<MemoizedResponse> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::network(url, e))?;

        let link_header = response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::network(url, format!("invalid JSON body: {}", e)))?;

        Ok(MemoizedResponse::new(body, link_header))
    }
}
