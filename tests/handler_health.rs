mod common;

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use common::ScriptedGateway;
use got_tables::api::handlers::health_handler;
use got_tables::domain::entities::MemoizedResponse;
use got_tables::infrastructure::cache::{CacheError, CacheResult, ResponseCache};
use got_tables::state::AppState;
use std::sync::Arc;

/// Store whose backend is always unreachable.
struct DownCache;

#[async_trait]
impl ResponseCache for DownCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<MemoizedResponse>> {
        Err(CacheError::ConnectionError("down".to_string()))
    }

    async fn put(&self, _key: &str, _value: MemoizedResponse) -> CacheResult<()> {
        Err(CacheError::ConnectionError("down".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(Arc::new(ScriptedGateway::new()));
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "memory store ready");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_cache() {
    let state =
        common::create_test_state_with_cache(Arc::new(ScriptedGateway::new()), Arc::new(DownCache));
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "error");
}

#[tokio::test]
async fn test_failing_cache_does_not_break_page_loads() {
    let gateway = Arc::new(ScriptedGateway::new().with(
        common::page_url("page=1&pageSize=10"),
        serde_json::json!([]),
    ));
    let state = common::create_test_state_with_cache(gateway.clone(), Arc::new(DownCache));

    let first = state.page_service.request_first_page().await.unwrap();
    let second = state.page_service.request_first_page().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(gateway.calls().len(), 2);
}
