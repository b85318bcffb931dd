//! Page request orchestration.

use std::sync::Arc;

use super::character_service::CharacterAggregator;
use super::request_client::RequestClient;
use crate::domain::entities::{CharacterPage, FilterSet};
use crate::domain::error::{ApiError, ApiResult};
use crate::utils::link_header::parse_total_pages;
use crate::utils::url_builder::character_page_url;
use tracing::info;

/// Requests one page of characters and resolves it.
pub struct PageService {
    client: Arc<RequestClient>,
    aggregator: CharacterAggregator,
    characters_url: String,
}

impl PageService {
    pub fn new(
        client: Arc<RequestClient>,
        aggregator: CharacterAggregator,
        characters_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            aggregator,
            characters_url: characters_url.into(),
        }
    }

    /// Builds the full pipeline (resolver, age estimator, aggregator) on one client.
    pub fn from_client(
        client: Arc<RequestClient>,
        characters_url: impl Into<String>,
        age_api_url: impl Into<String>,
    ) -> Self {
        let aggregator = CharacterAggregator::from_client(client.clone(), age_api_url);
        Self::new(client, aggregator, characters_url)
    }

    /// Fetches and resolves page `page` (1-indexed) under `filters`.
    ///
    /// Only non-empty filters reach the query string. The total page count comes from
    /// the response's `Link` header and is `-1` when it cannot be determined; callers
    /// bounds-check adjacent pages against it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedResponse`] if the page body is not an array.
    /// Propagates network failures from the page request and every lookup.
    pub async fn request_page(&self, page: u32, filters: &FilterSet) -> ApiResult<CharacterPage> {
        let url = character_page_url(&self.characters_url, page, filters)
            .map_err(|e| ApiError::invalid_url(&self.characters_url, e.to_string()))?;

        let response = self.client.fetch_and_cache(&url).await?;

        let total_pages = parse_total_pages(response.link_header_or_empty());
        let characters = self.aggregator.to_characters(&response.body).await?;

        info!(
            "Page {} resolved: {} characters, total pages {}",
            page,
            characters.len(),
            total_pages
        );

        Ok(CharacterPage::new(characters, total_pages))
    }

    /// Requests the first page with no filters.
    pub async fn request_first_page(&self) -> ApiResult<CharacterPage> {
        self.request_page(1, &FilterSet::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MemoizedResponse;
    use crate::domain::gateways::MockHttpGateway;
    use crate::infrastructure::cache::InMemoryCache;
    use serde_json::json;

    const CHARACTERS: &str = "https://www.anapioficeandfire.com/api/characters";
    const LINK: &str = concat!(
        r#"<https://www.anapioficeandfire.com/api/characters?page=2&pageSize=10>; rel="next", "#,
        r#"<https://www.anapioficeandfire.com/api/characters?page=1&pageSize=10>; rel="first", "#,
        r#"<https://www.anapioficeandfire.com/api/characters?page=43&pageSize=10>; rel="last""#
    );

    fn service(gateway: MockHttpGateway) -> PageService {
        let client = RequestClient::new(Arc::new(gateway), Arc::new(InMemoryCache::new()));
        PageService::from_client(Arc::new(client), CHARACTERS, "https://api.agify.io/")
    }

    #[tokio::test]
    async fn test_request_page_with_filter() {
        let mut gateway = MockHttpGateway::new();
        gateway
            .expect_get_json()
            .withf(|url| url == format!("{CHARACTERS}?page=1&pageSize=10&gender=Female"))
            .times(1)
            .returning(|_| {
                Ok(MemoizedResponse::new(
                    json!([{ "name": "", "gender": "Female", "aliases": ["The Waif"] }]),
                    Some(LINK.to_string()),
                ))
            });

        let filters = FilterSet {
            gender: "Female".to_string(),
            born: String::new(),
            ..Default::default()
        };

        let page = service(gateway).request_page(1, &filters).await.unwrap();

        assert_eq!(page.total_pages, 43);
        assert_eq!(page.characters.len(), 1);
        assert_eq!(page.characters[0].aliases, vec!["The Waif"]);
        assert_eq!(page.characters[0].age, "");
    }

    #[tokio::test]
    async fn test_missing_link_header_gives_unknown_page_count() {
        let mut gateway = MockHttpGateway::new();
        gateway
            .expect_get_json()
            .times(1)
            .returning(|_| Ok(MemoizedResponse::new(json!([]), None)));

        let page = service(gateway).request_first_page().await.unwrap();

        assert_eq!(page.total_pages, -1);
        assert!(!page.is_page_count_known());
        assert!(page.characters.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_page_request_hits_cache() {
        let mut gateway = MockHttpGateway::new();
        gateway
            .expect_get_json()
            .times(1)
            .returning(|_| Ok(MemoizedResponse::new(json!([]), Some(LINK.to_string()))));

        let service = service(gateway);
        let first = service.request_page(2, &FilterSet::default()).await.unwrap();
        let second = service.request_page(2, &FilterSet::default()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_page_body_is_fatal() {
        let mut gateway = MockHttpGateway::new();
        gateway.expect_get_json().times(1).returning(|_| {
            Ok(MemoizedResponse::new(
                json!({ "error": "boom" }),
                Some(LINK.to_string()),
            ))
        });

        let err = service(gateway).request_first_page().await.unwrap_err();

        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }
}
