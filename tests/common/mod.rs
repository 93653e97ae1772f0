// Shared test helpers: record/snapshot builders and an in-process upstream server

#![allow(dead_code)]

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use cameras_mcp::fetcher::SnapshotFetcher;
use cameras_mcp::models::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn week(n: u8) -> WeekNumber {
    WeekNumber::new(n).unwrap()
}

pub fn counts(pairs: &[(&str, u64)]) -> DailyCounts {
    pairs.iter().map(|(d, c)| (d.to_string(), *c)).collect()
}

pub fn record(name: &str, infractions: &[(&str, u64)], frames: &[(&str, u64)]) -> CameraRecord {
    let infractions = counts(infractions);
    CameraRecord {
        name: name.to_string(),
        uptime: "5 days, 2:00:00".to_string(),
        used_storage: "40%".to_string(),
        total: infractions.values().sum(),
        infractions,
        frames: counts(frames),
    }
}

pub fn snapshot(cameras: Vec<(CameraId, CameraRecord)>) -> WeeklySnapshot {
    cameras.into_iter().collect()
}

/// Camera 1 in week 1 with the worked example: infractions {20, 30}, frames {150, 156}.
pub fn example_camera() -> CameraRecord {
    record(
        "Av. Belgrano",
        &[("2025-09-01", 20), ("2025-09-02", 30)],
        &[("2025-09-01", 150), ("2025-09-02", 156)],
    )
}

/// Upstream JSON for a weekly document, keyed the way the repository publishes it.
pub fn week_json(snapshot: &WeeklySnapshot) -> String {
    serde_json::to_string(snapshot).unwrap()
}

#[derive(Clone, Default)]
pub struct Upstream {
    /// "<segment>/<file>" -> (status, body)
    routes: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    /// Authorization header of every request received, in arrival order.
    pub auth: Arc<Mutex<Vec<Option<String>>>>,
}

impl Upstream {
    pub fn serve_week(&self, month: Month, week: u8, body: impl Into<String>) {
        self.serve(month, week, StatusCode::OK, body);
    }

    pub fn serve(&self, month: Month, week: u8, status: StatusCode, body: impl Into<String>) {
        let key = format!("{}/semana{}.json", month.path_segment(), week);
        self.routes.lock().unwrap().insert(key, (status, body.into()));
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.auth.lock().unwrap().clone()
    }
}

async fn serve_document(
    State(upstream): State<Upstream>,
    Path((segment, file)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    upstream.auth.lock().unwrap().push(
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    let key = format!("{}/{}", segment, file);
    match upstream.routes.lock().unwrap().get(&key) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Same documents, answered only after two seconds.
async fn serve_document_slowly(
    state: State<Upstream>,
    path: Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    tokio::time::sleep(Duration::from_secs(2)).await;
    serve_document(state, path, headers).await
}

/// Start a mock upstream on an ephemeral port; returns its state and base URL.
/// `<base>/slow` serves the same documents behind a delay.
pub async fn spawn_upstream() -> (Upstream, String) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/status/{segment}/{file}", get(serve_document))
        .route("/slow/status/{segment}/{file}", get(serve_document_slowly))
        .with_state(upstream.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (upstream, format!("http://{}", addr))
}

pub fn fetcher(base_url: &str, token: Option<&str>) -> SnapshotFetcher {
    SnapshotFetcher::new(
        base_url,
        Duration::from_secs(5),
        token.map(str::to_string),
    )
    .unwrap()
}

pub fn fetcher_with_timeout(base_url: &str, timeout: Duration) -> SnapshotFetcher {
    SnapshotFetcher::new(base_url, timeout, None).unwrap()
}
