// Remote fetcher against an in-process upstream

mod common;

use axum::http::StatusCode;
use cameras_mcp::error::FetchError;
use cameras_mcp::models::{Month, Scope};
use common::{
    example_camera, fetcher, fetcher_with_timeout, snapshot, spawn_upstream, week, week_json,
};
use std::time::Duration;

#[test]
fn test_week_url_layout() {
    let f = fetcher("https://host.example/repo/main/", None);
    assert_eq!(
        f.week_url(Month::Septiembre, week(3)),
        "https://host.example/repo/main/status/09-septiembre/semana3.json"
    );
    assert_eq!(
        f.week_url(Month::Diciembre, week(1)),
        "https://host.example/repo/main/status/12-diciembre/semana1.json"
    );
}

#[tokio::test]
async fn test_fetch_week_ok() {
    let (upstream, base) = spawn_upstream().await;
    let expected = snapshot(vec![(1, example_camera())]);
    upstream.serve_week(Month::Septiembre, 1, week_json(&expected));

    let got = fetcher(&base, None).fetch_week(Month::Septiembre, week(1)).await;
    assert_eq!(got, Some(expected));
}

#[tokio::test]
async fn test_upstream_document_shape_decodes() {
    let (upstream, base) = spawn_upstream().await;
    upstream.serve_week(
        Month::Octubre,
        2,
        r#"{
            "5": {
                "camera": "Ruta 8 km 50",
                "uptime": "12 days, 3:04:05",
                "used_storage": "71%",
                "total": 12,
                "infractions": {"2025-10-06": 7, "2025-10-07": 5},
                "frames": {"2025-10-06": 300}
            }
        }"#,
    );
    let snap = fetcher(&base, None)
        .try_fetch_week(Month::Octubre, week(2))
        .await
        .unwrap();
    let cam = snap.get(5).unwrap();
    assert_eq!(cam.name, "Ruta 8 km 50");
    assert_eq!(cam.total, 12);
    assert_eq!(cam.infractions_total(), 12);
    assert_eq!(cam.frames_total(), 300);
}

#[tokio::test]
async fn test_missing_malformed_and_empty_are_absent() {
    let (upstream, base) = spawn_upstream().await;
    upstream.serve_week(Month::Septiembre, 2, "{not json");
    upstream.serve_week(Month::Septiembre, 3, "{}");
    upstream.serve(Month::Septiembre, 4, StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let f = fetcher(&base, None);

    assert!(matches!(
        f.try_fetch_week(Month::Septiembre, week(1)).await,
        Err(FetchError::NotFound)
    ));
    assert!(matches!(
        f.try_fetch_week(Month::Septiembre, week(2)).await,
        Err(FetchError::Decode(_))
    ));
    assert!(matches!(
        f.try_fetch_week(Month::Septiembre, week(3)).await,
        Err(FetchError::Empty)
    ));
    assert!(matches!(
        f.try_fetch_week(Month::Septiembre, week(4)).await,
        Err(FetchError::Status(s)) if s == StatusCode::INTERNAL_SERVER_ERROR
    ));
    for w in 1..=4 {
        assert!(f.fetch_week(Month::Septiembre, week(w)).await.is_none());
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_absent() {
    let f = fetcher("http://127.0.0.1:1", None);
    assert!(f.fetch_week(Month::Enero, week(1)).await.is_none());
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let (upstream, base) = spawn_upstream().await;
    upstream.serve_week(
        Month::Septiembre,
        1,
        week_json(&snapshot(vec![(1, example_camera())])),
    );
    let f = fetcher_with_timeout(&format!("{}/slow", base), Duration::from_millis(200));

    assert!(matches!(
        f.try_fetch_week(Month::Septiembre, week(1)).await,
        Err(FetchError::Timeout)
    ));
    assert!(f.fetch_week(Month::Septiembre, week(1)).await.is_none());

    // the same document is served promptly without the delay
    let prompt = fetcher_with_timeout(&base, Duration::from_millis(200));
    assert!(prompt.fetch_week(Month::Septiembre, week(1)).await.is_some());
}

#[tokio::test]
async fn test_fetch_scope_keeps_only_present_weeks() {
    let (upstream, base) = spawn_upstream().await;
    let snap = snapshot(vec![(1, example_camera())]);
    for w in [1, 2, 4] {
        upstream.serve_week(Month::Septiembre, w, week_json(&snap));
    }
    let f = fetcher(&base, None);

    let corpus = f.fetch_scope(Month::Septiembre, Scope::Month).await;
    assert_eq!(corpus.available_weeks(Scope::Month), vec![week(1), week(2), week(4)]);
    assert!(corpus.week(week(3)).is_none());

    let single = f.fetch_scope(Month::Septiembre, Scope::Week(week(2))).await;
    assert_eq!(single.available_weeks(Scope::Month), vec![week(2)]);
}

#[tokio::test]
async fn test_token_sent_as_bearer() {
    let (upstream, base) = spawn_upstream().await;
    fetcher(&base, Some("secret-token"))
        .fetch_week(Month::Septiembre, week(1))
        .await;
    fetcher(&base, None).fetch_week(Month::Septiembre, week(1)).await;
    fetcher(&base, Some("   ")).fetch_week(Month::Septiembre, week(1)).await;
    assert_eq!(
        upstream.auth_headers(),
        vec![Some("Bearer secret-token".to_string()), None, None]
    );
}

#[test]
fn test_blank_token_is_not_configured() {
    assert!(fetcher("http://localhost", Some("abc")).has_token());
    assert!(!fetcher("http://localhost", Some("")).has_token());
    assert!(!fetcher("http://localhost", None).has_token());
}
