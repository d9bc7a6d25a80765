//! HTTP API tests against an in-process router.
//!
//! Network collaborators are replaced by FakeRedirectFollower and
//! FakeFetcher; the roster lives in a temporary directory.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use ow_common::{MetricRegistry, ProfileParser};
use owd::resolver::candidate_url;
use owd::{
    AppState, Collector, Exporter, FakeFetcher, FakeRedirectFollower, PlayerEntry, Resolver,
    Roster, RuntimeStore, YamlRoster,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const BASE: &str = "https://career.test/en-us/career/";
const PROFILE_PC: &str = include_str!("../../ow_common/tests/fixtures/profile_pc.html");

struct Harness {
    app: Router,
    state: Arc<AppState>,
    _dir: tempfile::TempDir,
}

fn profile_url(slug: &str) -> String {
    format!("{}{}/", BASE, slug)
}

fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Arc::new(MetricRegistry::standard().unwrap());

    let roster: Arc<dyn Roster> =
        Arc::new(YamlRoster::open(dir.path().join("players.yaml")).unwrap());
    let follower = FakeRedirectFollower::new()
        .with_route(&candidate_url(BASE, "Grinder#1234"), &profile_url("grinder"))
        .with_route(&candidate_url(BASE, "Other#77"), &profile_url("other"));
    let resolver = Arc::new(Resolver::new(Arc::new(follower), roster, BASE));

    let fetcher = FakeFetcher::new().with_page(&profile_url("grinder"), PROFILE_PC);
    let store = Arc::new(RuntimeStore::new());
    let exporter = Arc::new(Exporter::new(Arc::clone(&catalog)).unwrap());
    let collector = Arc::new(Collector::new(
        Arc::clone(&resolver),
        Arc::new(fetcher),
        ProfileParser::new(catalog),
        Arc::clone(&store),
        Duration::ZERO,
    ));

    let state = Arc::new(AppState::new(store, exporter, resolver, collector));
    Harness {
        app: owd::server::router(Arc::clone(&state)),
        state,
        _dir: dir,
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn wait_for_player(state: &AppState, handle: &str) {
    for _ in 0..100 {
        if state.store.get(handle).await.is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("{} never reached the store", handle);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_reports_ok() {
    let h = harness();
    let (status, body) = send_json(&h.app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "owd");
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_lifecycle() {
    let h = harness();

    let (status, created) = send_json(
        &h.app,
        "POST",
        "/api/users",
        Some(json!({ "battletag": "Grinder#1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["battletag"], "Grinder#1234");
    assert_eq!(created["resolved"], true);
    assert_eq!(created["resolvedUrl"], profile_url("grinder"));

    let (status, _) = send(
        &h.app,
        "POST",
        "/api/users",
        Some(json!({ "battletag": "Grinder#1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, list) = send_json(&h.app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);

    let (status, one) = send_json(&h.app, "GET", "/api/users/Grinder%231234", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["user"]["battletag"], "Grinder#1234");
    assert!(one["metrics"].is_null());

    let (status, _) = send(&h.app, "DELETE", "/api/users/Grinder%231234", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&h.app, "GET", "/api/users/Grinder%231234", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&h.app, "DELETE", "/api/users/Grinder%231234", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_user_validation_and_resolution_failure() {
    let h = harness();

    let (status, _) = send(&h.app, "POST", "/api/users", Some(json!({ "battletag": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &h.app,
        "POST",
        "/api/users",
        Some(json!({ "battletag": "Ghost#404" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(h.state.resolver.roster().find_by_handle("Ghost#404").await.is_none());
}

#[tokio::test]
async fn test_create_user_with_explicit_address() {
    let h = harness();
    let url = profile_url("manual");

    let (status, created) = send_json(
        &h.app,
        "POST",
        "/api/users",
        Some(json!({ "battletag": "Ghost#404", "resolvedUrl": url })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["resolvedUrl"], url);
}

#[tokio::test]
async fn test_update_user_re_resolves_without_body() {
    let h = harness();
    h.state
        .resolver
        .roster()
        .upsert(PlayerEntry::new("Other#77"))
        .await
        .unwrap();

    let (status, updated) = send_json(&h.app, "PUT", "/api/users/Other%2377", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["resolvedUrl"], profile_url("other"));

    let (status, updated) = send_json(
        &h.app,
        "PUT",
        "/api/users/Other%2377",
        Some(json!({ "resolvedUrl": profile_url("moved") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["resolvedUrl"], profile_url("moved"));

    let (status, _) = send(&h.app, "PUT", "/api/users/Nobody%231", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Parse triggers and metrics
// ============================================================================

#[tokio::test]
async fn test_parse_trigger_feeds_scrape() {
    let h = harness();

    let (status, body) = send_json(&h.app, "POST", "/api/parse/Grinder%231234", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "in_progress");

    wait_for_player(&h.state, "Grinder#1234").await;

    let resp = h
        .app
        .clone()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let soldier = text
        .lines()
        .find(|l| {
            l.starts_with("ow_hero_time_played_seconds{")
                && l.contains("hero=\"soldier-76\"")
                && l.contains("gamemode=\"quickplay\"")
        })
        .expect("soldier time played exported");
    assert!(soldier.contains("battletag=\"Grinder#1234\""));
    assert!(soldier.ends_with(" 45000"));
    assert!(text.contains("ow_exporter_players 1"));

    let (_, user) = send_json(&h.app, "GET", "/api/users/Grinder%231234", None).await;
    assert!(user["user"]["lastParsed"].is_string());
    assert_eq!(user["metrics"]["battletag"], "Grinder#1234");
}

#[tokio::test]
async fn test_parse_all_and_clear() {
    let h = harness();
    h.state
        .resolver
        .roster()
        .upsert(PlayerEntry::resolved("Grinder#1234", profile_url("grinder")))
        .await
        .unwrap();

    let (status, _) = send(&h.app, "POST", "/api/parse", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    wait_for_player(&h.state, "Grinder#1234").await;

    let (_, stats) = send_json(&h.app, "GET", "/api/metrics/stats", None).await;
    assert_eq!(stats["total_players"], 1);
    assert!(stats["last_updated"].is_string());

    let (status, cleared) = send_json(&h.app, "DELETE", "/api/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["cleared"], 1);

    let (_, stats) = send_json(&h.app, "GET", "/api/metrics/stats", None).await;
    assert_eq!(stats["total_players"], 0);

    let (_, body) = send(&h.app, "GET", "/metrics", None).await;
    let text = String::from_utf8(body).unwrap();
    assert!(!text.contains("battletag="));

    // the roster is untouched by a store clear
    assert!(h.state.resolver.roster().find_by_handle("Grinder#1234").await.is_some());
}
