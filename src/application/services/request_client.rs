//! Memoizing request client.

use std::sync::Arc;

use crate::domain::entities::MemoizedResponse;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::gateways::HttpGateway;
use crate::infrastructure::cache::ResponseCache;
use crate::utils::url_builder::parse_absolute_url;
use tracing::{debug, warn};

/// Fetch-once HTTP client.
///
/// The first request for a URL goes to the network and its decoded body plus `Link`
/// header are stored under the exact URL string. Every later request for that URL is
/// answered from the cache without network access.
///
/// Concurrent first requests for the same URL may both reach the network; the cache
/// performs no in-flight deduplication.
pub struct RequestClient {
    gateway: Arc<dyn HttpGateway>,
    cache: Arc<dyn ResponseCache>,
}

impl RequestClient {
    pub fn new(gateway: Arc<dyn HttpGateway>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { gateway, cache }
    }

    /// Returns the memoized response for `url`, fetching it on first use.
    ///
    /// Cache backend failures are logged and treated as misses (reads) or skipped
    /// writes; they never fail the request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `url` is empty or not absolute.
    /// Propagates [`ApiError::Network`] from the gateway unmodified.
    pub async fn fetch_and_cache(&self, url: &str) -> ApiResult<MemoizedResponse> {
        parse_absolute_url(url).map_err(|e| ApiError::invalid_url(url, e.to_string()))?;

        match self.cache.get(url).await {
            Ok(Some(cached)) => {
                debug!("Cache HIT: {}", url);
                return Ok(cached);
            }
            Ok(None) => debug!("Cache MISS: {}", url),
            Err(e) => warn!("Cache read failed for {}: {}", url, e),
        }

        let response = self.gateway.get_json(url).await?;

        if let Err(e) = self.cache.put(url, response.clone()).await {
            warn!("Cache write failed for {}: {}", url, e);
        }

        Ok(response)
    }
}
