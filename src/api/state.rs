use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{seed_catalog, ActiveView, BatchState, Favorites, Movie, Notice};
use crate::services::agent::FilmAgent;
use crate::services::providers::{PosterSource, RecommendationSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub recommender: Arc<dyn RecommendationSource>,
    pub posters: Arc<dyn PosterSource>,
    pub agent: Arc<dyn FilmAgent>,
}

/// Inner state that can be modified.
///
/// All session data lives here; nothing is persisted. The lock guarantees at
/// most one state update applies at a time.
pub struct AppStateInner {
    /// Seed catalog, poster-enriched in place by the poster batch
    pub catalog: Vec<Movie>,
    /// Current search results; replaced wholesale on every search submission
    pub search_results: Vec<Movie>,
    /// Last successfully parsed recommendation list
    pub ai_recommendations: Vec<Movie>,
    pub favorites: Favorites,
    pub active_view: ActiveView,
    pub poster_batch: BatchState,
    /// Last user-facing notice from the recommendation path
    pub notice: Option<Notice>,
    /// Sequence number of the latest search submission. An augmentation task
    /// carries the number it was minted with and applies only if it still
    /// matches.
    pub search_seq: u64,
}

impl AppState {
    /// Creates application state with the seed catalog and the given
    /// collaborators
    pub fn new(
        recommender: Arc<dyn RecommendationSource>,
        posters: Arc<dyn PosterSource>,
        agent: Arc<dyn FilmAgent>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                catalog: seed_catalog(),
                search_results: Vec::new(),
                ai_recommendations: Vec::new(),
                favorites: Favorites::new(),
                active_view: ActiveView::Home,
                poster_batch: BatchState::Idle,
                notice: None,
                search_seq: 0,
            })),
            recommender,
            posters,
            agent,
        }
    }
}
