//! Gateway trait for issuing JSON GET requests.

use crate::domain::entities::MemoizedResponse;
use crate::domain::error::ApiResult;
use async_trait::async_trait;

/// Performs a single network GET and decodes the body as JSON.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestGateway`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// Fetches `url`, returning the decoded body and the `Link` response header.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError::Network`] on transport failure or when the
    /// body is not valid JSON. Never retries.
    async fn get_json(&self, url: &str) -> ApiResult<MemoizedResponse>;
}
