//! Best-effort poster enrichment.
//!
//! Runs as a single fan-out/fan-in batch over the catalog: one concurrent
//! request per entry lacking a poster, joined before the catalog is
//! republished in one write. Individual failures leave the entry without a
//! poster and are never surfaced.

use std::sync::Arc;

use crate::api::AppState;
use crate::models::{BatchState, Movie};
use crate::services::providers::PosterSource;

/// Attaches posters to every entry lacking one, in place of the input order.
///
/// Entries that already carry a poster are passed through untouched. A failed
/// generation leaves `poster_url` as `None`.
pub async fn enrich_with_posters(posters: Arc<dyn PosterSource>, movies: Vec<Movie>) -> Vec<Movie> {
    let mut tasks = Vec::with_capacity(movies.len());

    for mut movie in movies {
        let posters = Arc::clone(&posters);
        // Kept so a task that fails to join still yields the record, poster-less
        let fallback = movie.clone();
        let task = tokio::spawn(async move {
            if movie.poster_url.is_none() {
                match posters.generate_poster(&movie).await {
                    Ok(url) => movie.poster_url = Some(url),
                    Err(e) => {
                        tracing::debug!(title = %movie.title, error = %e, "Poster generation failed");
                    }
                }
            }
            movie
        });
        tasks.push((fallback, task));
    }

    let mut enriched = Vec::with_capacity(tasks.len());
    for (fallback, task) in tasks {
        match task.await {
            Ok(movie) => enriched.push(movie),
            Err(e) => {
                tracing::error!(title = %fallback.title, error = %e, "Poster task join error");
                enriched.push(fallback);
            }
        }
    }

    enriched
}

/// Marks the poster batch as running, unless one already is.
///
/// Returns false when a batch is in flight, in which case the caller must not
/// start another.
pub async fn try_begin_batch(state: &AppState) -> bool {
    let mut inner = state.inner.write().await;
    if inner.poster_batch == BatchState::Running {
        return false;
    }
    inner.poster_batch = BatchState::Running;
    true
}

/// Runs the poster batch to completion. Requires `try_begin_batch` to have
/// succeeded.
pub async fn run_batch(state: AppState) {
    let snapshot = state.inner.read().await.catalog.clone();
    let missing = snapshot.iter().filter(|m| m.poster_url.is_none()).count();

    tracing::info!(total = snapshot.len(), missing = missing, "Poster batch started");

    let enriched = enrich_with_posters(Arc::clone(&state.posters), snapshot).await;
    let attached = enriched.iter().filter(|m| m.poster_url.is_some()).count();

    // Single republish after every attempt has settled
    let mut inner = state.inner.write().await;
    inner.catalog = enriched;
    inner.poster_batch = BatchState::Idle;

    tracing::info!(with_posters = attached, "Poster batch completed");
}

/// Poster batch entry point: a no-op returning false if a batch is already
/// running, otherwise runs the batch to completion and returns true.
pub async fn refresh_posters(state: AppState) -> bool {
    if !try_begin_batch(&state).await {
        tracing::debug!("Poster batch already running, skipping");
        return false;
    }
    run_batch(state).await;
    true
}
