#![allow(dead_code)]

use async_trait::async_trait;
use got_tables::application::services::{PageService, RequestClient};
use got_tables::domain::entities::MemoizedResponse;
use got_tables::domain::gateways::HttpGateway;
use got_tables::domain::{ApiError, ApiResult};
use got_tables::infrastructure::cache::{InMemoryCache, ResponseCache};
use got_tables::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const CHARACTERS_URL: &str = "https://www.anapioficeandfire.com/api/characters";
pub const AGE_URL: &str = "https://api.agify.io/";
pub const API: &str = "https://www.anapioficeandfire.com/api";

/// Gateway answering from a fixed URL → response table and recording every call.
///
/// Unknown URLs fail with a network error, like an unreachable upstream.
#[derive(Default)]
pub struct ScriptedGateway {
    responses: HashMap<String, MemoizedResponse>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses
            .insert(url.into(), MemoizedResponse::new(body, None));
        self
    }

    pub fn with_link(mut self, url: impl Into<String>, body: Value, link: &str) -> Self {
        self.responses.insert(
            url.into(),
            MemoizedResponse::new(body, Some(link.to_string())),
        );
        self
    }

    /// All requested URLs in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls().iter().filter(|called| called.as_str() == url).count()
    }
}

#[async_trait]
impl HttpGateway for ScriptedGateway {
    async fn get_json(&self, url: &str) -> ApiResult<MemoizedResponse> {
        self.calls.lock().unwrap().push(url.to_string());

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::network(url, "no scripted response"))
    }
}

/// Link header advertising `last` as the final page.
pub fn link_header(last: u32) -> String {
    format!(
        r#"<{CHARACTERS_URL}?page=2&pageSize=10>; rel="next", <{CHARACTERS_URL}?page=1&pageSize=10>; rel="first", <{CHARACTERS_URL}?page={last}&pageSize=10>; rel="last""#
    )
}

pub fn page_url(query: &str) -> String {
    format!("{CHARACTERS_URL}?{query}")
}

pub fn age_url(first_name: &str) -> String {
    format!("{AGE_URL}?name={first_name}")
}

pub fn raw_character(name: &str, father: &str, allegiances: &[&str]) -> Value {
    json!({
        "url": format!("{API}/characters/{name}"),
        "name": name,
        "gender": "Male",
        "culture": "Northmen",
        "born": "",
        "died": "",
        "titles": [""],
        "aliases": [],
        "father": father,
        "mother": "",
        "spouse": "",
        "allegiances": allegiances,
        "books": [],
        "povBooks": [],
        "tvSeries": [""],
        "playedBy": [""]
    })
}

pub fn page_service(gateway: Arc<ScriptedGateway>) -> (PageService, Arc<InMemoryCache>) {
    let cache = Arc::new(InMemoryCache::new());
    let client = Arc::new(RequestClient::new(gateway, cache.clone()));
    (
        PageService::from_client(client, CHARACTERS_URL, AGE_URL),
        cache,
    )
}

pub fn create_test_state(gateway: Arc<ScriptedGateway>) -> AppState {
    create_test_state_with_cache(gateway, Arc::new(InMemoryCache::new()))
}

pub fn create_test_state_with_cache(
    gateway: Arc<ScriptedGateway>,
    cache: Arc<dyn ResponseCache>,
) -> AppState {
    let client = Arc::new(RequestClient::new(gateway, cache.clone()));
    let page_service = Arc::new(PageService::from_client(client, CHARACTERS_URL, AGE_URL));
    AppState::new(page_service, cache)
}
