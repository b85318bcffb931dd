//! First-name based age estimation.

use std::sync::Arc;

use super::request_client::RequestClient;
use crate::domain::entities::AgeEstimate;
use crate::domain::error::{ApiError, ApiResult};
use crate::utils::url_builder::age_lookup_url;
use serde::Deserialize;
use tracing::debug;

/// Estimates a character's age from the first word of their name.
pub struct AgeEstimator {
    client: Arc<RequestClient>,
    base_url: String,
}

impl AgeEstimator {
    pub fn new(client: Arc<RequestClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns the estimated age for `full_name` as a string.
    ///
    /// The first name is everything before the first space. A blank first name
    /// short-circuits to `""` without a request. Responses without a numeric `age`
    /// also yield `""`.
    ///
    /// # Errors
    ///
    /// Propagates network failures from the request client.
    pub async fn estimate_age(&self, full_name: &str) -> ApiResult<String> {
        let first_name = first_name(full_name);
        if first_name.is_empty() {
            return Ok(String::new());
        }

        let url = age_lookup_url(&self.base_url, first_name)
            .map_err(|e| ApiError::invalid_url(&self.base_url, e.to_string()))?;

        let response = self.client.fetch_and_cache(&url).await?;

        match AgeEstimate::deserialize(&response.body) {
            Ok(estimate) => Ok(estimate.age_string()),
            Err(e) => {
                debug!("No age estimate for {}: {}", first_name, e);
                Ok(String::new())
            }
        }
    }
}

/// Substring before the first space.
fn first_name(full_name: &str) -> &str {
    full_name.split(' ').next().unwrap_or_default()
}
