use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{ActiveView, BatchState, Movie, MovieId, Notice};
use crate::services::{posters, recommendations, search};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Movie>,
    pub view: ActiveView,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<Movie>,
    pub ai_recommendations: Vec<Movie>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub favorite: bool,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub view: ActiveView,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub active_view: ActiveView,
    pub search_results: Vec<Movie>,
    pub ai_recommendations: Vec<Movie>,
    pub favorites: Vec<Movie>,
    pub poster_batch: BatchState,
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
pub struct PosterRefreshResponse {
    pub started: bool,
    pub batch: BatchState,
}

#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub result: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the catalog in seed order, poster-enriched where the batch has run
pub async fn get_catalog(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let inner = state.inner.read().await;
    Json(inner.catalog.clone())
}

/// Submit a search.
///
/// The synchronous substring filter is applied and returned immediately, and
/// the view is forced to Search. Non-empty queries additionally spawn a
/// recommendation augmentation in the background; empty queries return the
/// full catalog and suppress it.
pub async fn submit_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let query = request.query.trim().to_string();

    let (results, augment_seq) = {
        let mut inner = state.inner.write().await;
        let results = search::filter_catalog(&query, &inner.catalog);
        inner.search_results = results.clone();
        inner.active_view = ActiveView::Search;
        inner.notice = None;
        // Every submission supersedes in-flight augmentations, including
        // empty-query submissions that spawn none themselves
        inner.search_seq += 1;

        if query.is_empty() {
            inner.ai_recommendations.clear();
            (results, None)
        } else {
            (results, Some(inner.search_seq))
        }
    };

    tracing::info!(
        query = %query,
        results = results.len(),
        "Search completed"
    );

    if let Some(seq) = augment_seq {
        tokio::spawn(recommendations::augment_results(state.clone(), query, seq));
    }

    Json(SearchResponse {
        results,
        view: ActiveView::Search,
    })
}

/// Get the current result set, including any augmentation that has landed
pub async fn get_results(State(state): State<AppState>) -> Json<ResultsResponse> {
    let inner = state.inner.read().await;
    Json(ResultsResponse {
        results: inner.search_results.clone(),
        ai_recommendations: inner.ai_recommendations.clone(),
        notice: inner.notice.clone(),
    })
}

/// Toggle a movie in the favorites set
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Json(movie): Json<Movie>,
) -> Json<ToggleFavoriteResponse> {
    let id = movie.id.clone();

    let mut inner = state.inner.write().await;
    inner.favorites.toggle(movie);

    Json(ToggleFavoriteResponse {
        favorite: inner.favorites.contains(&id),
        count: inner.favorites.len(),
    })
}

/// Get all favorites in insertion order
pub async fn get_favorites(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let inner = state.inner.read().await;
    Json(inner.favorites.as_slice().to_vec())
}

/// Presence test for a single favorite
pub async fn is_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<bool> {
    let id = match id.parse::<u32>() {
        Ok(n) => MovieId::Catalog(n),
        Err(_) => MovieId::Synthesized(id),
    };

    let inner = state.inner.read().await;
    Json(inner.favorites.contains(&id))
}

/// Navigate directly to a view
pub async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> StatusCode {
    let mut inner = state.inner.write().await;
    inner.active_view = request.view;
    StatusCode::OK
}

/// Snapshot of the whole session for rendering
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let inner = state.inner.read().await;
    Json(SessionResponse {
        active_view: inner.active_view,
        search_results: inner.search_results.clone(),
        ai_recommendations: inner.ai_recommendations.clone(),
        favorites: inner.favorites.as_slice().to_vec(),
        poster_batch: inner.poster_batch,
        notice: inner.notice.clone(),
    })
}

/// Trigger a poster enrichment batch; a no-op while one is running
pub async fn refresh_posters(State(state): State<AppState>) -> Json<PosterRefreshResponse> {
    let started = posters::try_begin_batch(&state).await;
    if started {
        tokio::spawn(posters::run_batch(state.clone()));
    }

    Json(PosterRefreshResponse {
        started,
        batch: BatchState::Running,
    })
}

/// Ask the conversational film agent
pub async fn agent_ask(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> AppResult<Json<AgentResponse>> {
    let result = state.agent.ask(&request.query).await?;
    Ok(Json(AgentResponse { result }))
}
