use amend::config::AmendConfig;
use amend::drafter::{draft_amendments, WordPair};
use amend::runtime::fetcher::HttpFetcher;
use amend::runtime::law_api::LawApi;
use amend::runtime::orchestrator::run_amendment;
use amend::types::{AmendRequest, AmendResponse, DraftRequest};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

struct AppState {
    api: LawApi,
}

fn bad_request(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn results_response(results: Vec<String>) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!(AmendResponse { results })))
}

async fn handle_amend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AmendRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let find = request.find_word.trim();
    let replace = request.replace_word.trim();
    if find.is_empty() {
        return bad_request("findWord must not be empty");
    }

    match run_amendment(&state.api, find, replace).await {
        Ok(results) => results_response(results),
        Err(err) => {
            tracing::error!("[Amend] Amendment run failed: {}", err);
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": err })))
        }
    }
}

async fn handle_draft(Json(request): Json<DraftRequest>) -> (StatusCode, Json<serde_json::Value>) {
    let find = request.find_word.trim();
    if find.is_empty() {
        return bad_request("findWord must not be empty");
    }
    let words = WordPair::new(find, request.replace_word.trim());
    results_response(draft_amendments(&request.laws, words))
}

async fn handle_health() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AmendConfig::load_default().unwrap_or_else(|err| {
        tracing::warn!("[Amend] {}; falling back to defaults", err);
        let mut config = AmendConfig::default();
        config.apply_env_overrides();
        config
    });

    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(config.timeout_secs))
        .expect("Failed to build HTTP client");
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState {
        api: LawApi::new(Arc::new(fetcher), config),
    });

    let app = Router::new()
        .route("/amend", post(handle_amend))
        .route("/draft", post(handle_draft))
        .fallback(handle_health)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {bind_addr}: {e}"));

    tracing::info!("[Amend] Listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server failed");
}
