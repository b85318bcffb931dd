//! Resolution of entity reference URLs into display names.

use std::sync::Arc;

use super::request_client::RequestClient;
use crate::domain::entities::NamedEntity;
use crate::domain::error::{ApiError, ApiResult};
use crate::utils::url_builder::parse_absolute_url;
use futures::future::join_all;
use serde::Deserialize;
use serde_json::Value;

/// Turns reference URLs (parents, spouses, houses, books) into names.
pub struct ReferenceResolver {
    client: Arc<RequestClient>,
}

impl ReferenceResolver {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self { client }
    }

    /// Resolves one reference URL to the referenced entity's `name`.
    ///
    /// An empty URL resolves to `""` without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ElementParse`] if `url` is not an absolute HTTP(S) URL or
    /// the referenced body has no string `name`. Propagates network failures.
    pub async fn resolve_name(&self, url: &str) -> ApiResult<String> {
        if url.is_empty() {
            return Ok(String::new());
        }

        parse_absolute_url(url)
            .map_err(|e| ApiError::element_parse(Value::String(url.to_string()), e))?;

        let response = self.client.fetch_and_cache(url).await?;

        NamedEntity::deserialize(&response.body)
            .map(|entity| entity.name)
            .map_err(|e| ApiError::element_parse(response.body.clone(), e))
    }

    /// Resolves a list of reference URLs concurrently.
    ///
    /// Returns an empty vector without any request when every entry is empty.
    /// Otherwise the output has the input's length and order regardless of which
    /// request finishes first, with empty entries mapped to `""`.
    pub async fn resolve_names(&self, urls: &[String]) -> ApiResult<Vec<String>> {
        if urls.iter().all(|url| url.is_empty()) {
            return Ok(Vec::new());
        }

        join_all(urls.iter().map(|url| self.resolve_name(url)))
            .await
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MemoizedResponse;
    use crate::domain::gateways::MockHttpGateway;
    use crate::infrastructure::cache::InMemoryCache;
    use serde_json::json;
    use std::time::Duration;

    const HOUSES: &str = "https://www.anapioficeandfire.com/api/houses";

    fn resolver(gateway: MockHttpGateway) -> ReferenceResolver {
        let client = RequestClient::new(Arc::new(gateway), Arc::new(InMemoryCache::new()));
        ReferenceResolver::new(Arc::new(client))
    }

    fn house_gateway(times: usize) -> MockHttpGateway {
        let mut gateway = MockHttpGateway::new();
        gateway.expect_get_json().times(times).returning(|url| {
            let id = url.rsplit('/').next().unwrap_or_default();
            Ok(MemoizedResponse::new(
                json!({ "url": url, "name": format!("House {id}") }),
                None,
            ))
        });
        gateway
    }

    #[tokio::test]
    async fn test_empty_url_resolves_without_fetch() {
        let resolver = resolver(house_gateway(0));
        assert_eq!(resolver.resolve_name("").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_resolve_name() {
        let resolver = resolver(house_gateway(1));
        assert_eq!(
            resolver.resolve_name(&format!("{HOUSES}/362")).await.unwrap(),
            "House 362"
        );
    }

    #[tokio::test]
    async fn test_missing_name_is_parse_failure() {
        let mut gateway = MockHttpGateway::new();
        gateway
            .expect_get_json()
            .times(1)
            .returning(|_| Ok(MemoizedResponse::new(json!({ "title": "nope" }), None)));

        let err = resolver(gateway)
            .resolve_name(&format!("{HOUSES}/1"))
            .await
            .unwrap_err();

        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_relative_reference_is_parse_failure_without_fetch() {
        let resolver = resolver(house_gateway(0));

        let err = resolver.resolve_name("not-a-url").await.unwrap_err();

        assert!(err.is_recoverable());
        match err {
            ApiError::ElementParse { value, .. } => assert_eq!(value, json!("not-a-url")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_all_empty_batch_returns_empty_without_fetch() {
        let resolver = resolver(house_gateway(0));

        assert!(resolver.resolve_names(&[]).await.unwrap().is_empty());
        assert!(
            resolver
                .resolve_names(&[String::new(), String::new()])
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_batch_preserves_length_and_order() {
        let resolver = resolver(house_gateway(2));

        let urls = vec![
            format!("{HOUSES}/7"),
            String::new(),
            format!("{HOUSES}/3"),
        ];

        assert_eq!(
            resolver.resolve_names(&urls).await.unwrap(),
            vec!["House 7", "", "House 3"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_order_independent_of_completion_order() {
        struct SlowFirstGateway;

        #[async_trait::async_trait]
        impl crate::domain::gateways::HttpGateway for SlowFirstGateway {
            async fn get_json(&self, url: &str) -> ApiResult<MemoizedResponse> {
                let delay = if url.ends_with("/1") { 50 } else { 1 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(MemoizedResponse::new(json!({ "name": url }), None))
            }
        }

        let client = RequestClient::new(Arc::new(SlowFirstGateway), Arc::new(InMemoryCache::new()));
        let resolver = ReferenceResolver::new(Arc::new(client));

        let urls = vec![format!("{HOUSES}/1"), format!("{HOUSES}/2")];
        let names = resolver.resolve_names(&urls).await.unwrap();

        assert_eq!(names, urls);
    }
}
