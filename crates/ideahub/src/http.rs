//! Axum HTTP handlers for the IdeaHub gateway.
//!
//! Every data endpoint follows the same shape: build a subject from the
//! debug auth header, assemble an authorization request, ask the active
//! engine, and only then touch the store. A denial surfaces as 403 with
//! the decision's reason code in the body.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use ideahub_authz::{get_engine, Request};
use ideahub_core::action;
use ideahub_core::{Community, Idea, Resource, ResourceId, Subject, SubjectId, Workspace};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::store::Store;

/// Shared application state for Axum handlers.
pub struct AppState {
    pub config: GatewayConfig,
    pub store: Store,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            store: Store::seeded(),
        }
    }
}

/// Build the Axum router with all endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/workspaces/{id}", get(handle_get_workspace))
        .route("/communities/{id}", get(handle_get_community))
        .route("/ideas/{id}", get(handle_get_idea))
        .route("/search", get(handle_search))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Subject and request assembly
// ---------------------------------------------------------------------------

/// Build the subject from the debug auth header.
///
/// This mock stands in for a real identity provider: `anon` means
/// unauthenticated, `admin` means an admin, anything else (including a
/// missing header) means the mock user 1 with role "user".
fn subject_from_headers(config: &GatewayConfig, headers: &HeaderMap) -> Subject {
    let value = headers
        .get(config.debug_auth_header.as_str())
        .and_then(|v| v.to_str().ok());
    match value {
        Some("anon") => Subject::anonymous(),
        Some("admin") => Subject::admin(SubjectId(1)),
        _ => Subject::authenticated(SubjectId(1)).with_role("user"),
    }
}

/// Ask the active engine; a disallow becomes a 403 carrying the reason.
fn authorize(
    config: &GatewayConfig,
    headers: &HeaderMap,
    action: &str,
    resource: Resource,
) -> GatewayResult<()> {
    let subject = subject_from_headers(config, headers);
    let mut req = Request::new(subject, action, resource);
    if let Some(request_id) = headers
        .get(config.request_id_header.as_str())
        .and_then(|v| v.to_str().ok())
    {
        req = req.with_ctx("request_id", request_id);
    }
    let decision = get_engine().decide(&req);
    if decision.allow {
        Ok(())
    } else {
        Err(GatewayError::Authorization {
            reason: decision.reason,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /health -- service status
async fn handle_health(State(_state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "policy_count": get_engine().policies().len(),
    }))
}

/// GET /workspaces/{id} -- authorize then fetch
async fn handle_get_workspace(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> GatewayResult<Json<Workspace>> {
    authorize(
        &state.config,
        &headers,
        action::WORKSPACE_READ,
        Resource::with_id(ResourceId(id)),
    )?;
    let workspace = state
        .store
        .get_workspace(id)
        .ok_or_else(|| GatewayError::NotFound("workspace_not_found".into()))?;
    Ok(Json(workspace))
}

/// GET /communities/{id} -- fetch to learn publicity, then authorize
async fn handle_get_community(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> GatewayResult<Json<Community>> {
    let community = state
        .store
        .get_community(id)
        .ok_or_else(|| GatewayError::NotFound("community_not_found".into()))?;
    let resource = Resource::with_id(ResourceId(id)).with_public(community.public);
    authorize(&state.config, &headers, action::COMMUNITY_READ, resource)?;
    Ok(Json(community))
}

/// GET /ideas/{id} -- fetch to learn owner and publicity, then authorize
async fn handle_get_idea(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> GatewayResult<Json<Idea>> {
    let idea = state
        .store
        .get_idea(id)
        .ok_or_else(|| GatewayError::NotFound("idea_not_found".into()))?;
    let mut resource = Resource::with_id(ResourceId(id)).with_public(idea.public);
    if let Some(owner) = idea.owner_id {
        resource = resource.owned_by(owner);
    }
    authorize(&state.config, &headers, action::IDEA_READ, resource)?;
    Ok(Json(idea))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    results: Vec<Idea>,
}

/// GET /search?q= -- authorize, then match idea titles
async fn handle_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> GatewayResult<Json<SearchResponse>> {
    if params.q.trim().is_empty() {
        return Err(GatewayError::Validation("missing_query".into()));
    }
    authorize(
        &state.config,
        &headers,
        action::SEARCH,
        Resource::default(),
    )?;
    let results = state.store.search_ideas(params.q.trim());
    Ok(Json(SearchResponse {
        query: params.q.trim().to_string(),
        results,
    }))
}
