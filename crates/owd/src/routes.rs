//! API routes for owd
//!
//! Roster management under `/api/users`, parse triggers under `/api/parse`,
//! the runtime store under `/api/metrics` and the Prometheus scrape at
//! `/metrics`.

use crate::resolver::ResolveError;
use crate::roster::{PlayerEntry, RosterError};
use crate::runtime::{PlayerMetrics, StoreStats};
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use ow_common::ErrorKind;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

type AppStateArc = Arc<AppState>;
type ApiError = (StatusCode, String);

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "owd",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": "owd",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics",
            "users": "/api/users",
            "parse": "/api/parse",
            "stats": "/api/metrics/stats",
        },
    }))
}

// ============================================================================
// User Routes
// ============================================================================

pub fn user_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:battletag",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserView {
    battletag: String,
    resolved_url: Option<String>,
    last_resolved: Option<DateTime<Utc>>,
    resolved: bool,
    last_parsed: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserRequest {
    battletag: String,
    #[serde(default)]
    resolved_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateUserRequest {
    #[serde(default)]
    resolved_url: Option<String>,
}

async fn user_view(state: &AppState, entry: PlayerEntry) -> UserView {
    let last_parsed = state
        .store
        .get(&entry.battletag)
        .await
        .map(|e| e.metrics.last_updated);
    UserView {
        resolved: entry.is_resolved(),
        battletag: entry.battletag,
        resolved_url: entry.resolved_url,
        last_resolved: entry.last_resolved,
        last_parsed,
    }
}

async fn list_users(State(state): State<AppStateArc>) -> Json<Value> {
    let players = state.resolver.roster().list_all().await;
    let total = players.len();
    let mut users = Vec::with_capacity(total);
    for p in players {
        users.push(user_view(&state, p).await);
    }
    Json(json!({ "users": users, "total": total }))
}

async fn create_user(
    State(state): State<AppStateArc>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let battletag = req.battletag.trim().to_string();
    if battletag.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "battletag is required".to_string()));
    }

    let roster = state.resolver.roster();
    if roster.find_by_handle(&battletag).await.is_some() {
        return Err((
            StatusCode::CONFLICT,
            format!("player {} already exists", battletag),
        ));
    }

    let entry = match req.resolved_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => {
            let entry = PlayerEntry::resolved(&battletag, url);
            roster.upsert(entry.clone()).await.map_err(roster_error)?;
            entry
        }
        None => state.resolver.refresh(&battletag).await.map_err(resolve_error)?,
    };

    info!(battletag = %battletag, "player added");
    Ok((StatusCode::CREATED, Json(user_view(&state, entry).await)))
}

async fn get_user(
    State(state): State<AppStateArc>,
    Path(battletag): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let entry = state
        .resolver
        .roster()
        .find_by_handle(&battletag)
        .await
        .ok_or_else(|| not_found(&battletag))?;

    let metrics: Option<PlayerMetrics> = state.store.get(&battletag).await.map(|e| e.metrics);
    Ok(Json(json!({
        "user": user_view(&state, entry).await,
        "metrics": metrics,
    })))
}

/// Store the given address, or resolve again when the body carries none.
async fn update_user(
    State(state): State<AppStateArc>,
    Path(battletag): Path<String>,
    body: Bytes,
) -> Result<Json<UserView>, ApiError> {
    let req: UpdateUserRequest = if body.iter().all(u8::is_ascii_whitespace) {
        UpdateUserRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid request body: {}", e)))?
    };

    let roster = state.resolver.roster();
    if roster.find_by_handle(&battletag).await.is_none() {
        return Err(not_found(&battletag));
    }

    let entry = match req.resolved_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => {
            let entry = PlayerEntry::resolved(&battletag, url);
            roster.upsert(entry.clone()).await.map_err(roster_error)?;
            entry
        }
        None => state.resolver.refresh(&battletag).await.map_err(resolve_error)?,
    };

    info!(battletag = %battletag, "player updated");
    Ok(Json(user_view(&state, entry).await))
}

async fn delete_user(
    State(state): State<AppStateArc>,
    Path(battletag): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .resolver
        .roster()
        .remove(&battletag)
        .await
        .map_err(roster_error)?;
    state.store.remove(&battletag).await;

    info!(battletag = %battletag, "player removed");
    Ok(Json(json!({ "battletag": battletag, "deleted": true })))
}

// ============================================================================
// Parse Routes
// ============================================================================

pub fn parse_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/parse", post(parse_all))
        .route("/api/parse/:battletag", post(parse_player))
}

async fn parse_all(State(state): State<AppStateArc>) -> (StatusCode, Json<Value>) {
    // detached: the outcome shows up in the store
    drop(state.collector.spawn_parse_all());
    (
        StatusCode::ACCEPTED,
        Json(json!({ "status": "in_progress", "target": "all" })),
    )
}

async fn parse_player(
    State(state): State<AppStateArc>,
    Path(battletag): Path<String>,
) -> (StatusCode, Json<Value>) {
    drop(state.collector.spawn_parse_player(battletag.clone()));
    (
        StatusCode::ACCEPTED,
        Json(json!({ "status": "in_progress", "battletag": battletag })),
    )
}

// ============================================================================
// Metrics Routes
// ============================================================================

pub fn metrics_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/api/metrics", delete(clear_metrics))
        .route("/api/metrics/stats", get(metrics_stats))
}

async fn metrics(State(state): State<AppStateArc>) -> Result<impl IntoResponse, ApiError> {
    let body = state.exporter.scrape(&state.store).await.map_err(|e| {
        error!("  Metrics exposition failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body))
}

async fn metrics_stats(State(state): State<AppStateArc>) -> Json<StoreStats> {
    Json(state.store.stats().await)
}

async fn clear_metrics(State(state): State<AppStateArc>) -> Json<Value> {
    let cleared = state.store.clear().await;
    info!(cleared, "runtime store cleared");
    Json(json!({ "cleared": cleared }))
}

// ============================================================================
// Error mapping
// ============================================================================

fn not_found(battletag: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        format!("player {} not found", battletag),
    )
}

fn roster_error(e: RosterError) -> ApiError {
    match e {
        RosterError::NotFound(tag) => not_found(&tag),
        RosterError::AlreadyExists(tag) => (
            StatusCode::CONFLICT,
            format!("player {} already exists", tag),
        ),
        other => {
            error!("  Roster update failed: {}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

fn resolve_error(e: ResolveError) -> ApiError {
    warn!("  Resolution failed: {}", e);
    let status = match e.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, e.to_string())
}
