//! Recommendation augmentation of search results.
//!
//! Invoked only for non-empty queries, after the synchronous substring search
//! has already been displayed. The augmentation runs in the background, mints
//! synthesized ids for the recommended entries, enriches them with posters,
//! and then replaces the result set only if its search is still the latest.

use std::sync::Arc;

use chrono::Utc;

use crate::api::AppState;
use crate::models::{Movie, MovieId, Notice, RecommendedMovie};
use crate::services::posters::enrich_with_posters;
use crate::services::providers::RecommendationOutcome;

const UNPARSEABLE_NOTICE: &str = "Try a different search term for better recommendations";
const UNAVAILABLE_NOTICE: &str = "Unable to get recommendations. Please try again.";

/// Assigns each recommended entry a synthesized id unique within this batch.
///
/// Ids take the form `ai-{unix_millis}-{ordinal}` and never collide with
/// catalog ids.
pub fn mint_synthesized_ids(recommendations: Vec<RecommendedMovie>) -> Vec<Movie> {
    let minted_at = Utc::now().timestamp_millis();
    recommendations
        .into_iter()
        .enumerate()
        .map(|(ordinal, rec)| {
            rec.into_movie(MovieId::Synthesized(format!("ai-{}-{}", minted_at, ordinal)))
        })
        .collect()
}

/// Runs one augmentation round for the search identified by `seq`.
///
/// Outcomes for a stale `seq` (a newer search has been issued) are discarded
/// silently, including notices. The active view is never touched.
pub async fn augment_results(state: AppState, query: String, seq: u64) {
    let outcome = state.recommender.recommend(&query).await;

    match outcome {
        Ok(RecommendationOutcome::Parsed(recommendations)) => {
            let movies = mint_synthesized_ids(recommendations);
            let enriched = enrich_with_posters(Arc::clone(&state.posters), movies).await;

            let mut inner = state.inner.write().await;
            if inner.search_seq != seq {
                tracing::debug!(seq = seq, latest = inner.search_seq, "Discarding stale augmentation");
                return;
            }

            tracing::info!(
                query = %query,
                recommendations = enriched.len(),
                "Search results augmented"
            );
            inner.ai_recommendations = enriched.clone();
            inner.search_results = enriched;
        }
        Ok(RecommendationOutcome::Unparseable) => {
            let mut inner = state.inner.write().await;
            if inner.search_seq != seq {
                return;
            }
            // Synchronous results stay displayed
            inner.notice = Some(Notice::info(UNPARSEABLE_NOTICE));
        }
        Err(e) => {
            tracing::warn!(query = %query, error = %e, "Recommendation lookup failed");
            let mut inner = state.inner.write().await;
            if inner.search_seq != seq {
                return;
            }
            inner.notice = Some(Notice::error(UNAVAILABLE_NOTICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ActiveView, NoticeLevel};
    use crate::services::agent::MockFilmAgent;
    use crate::services::providers::{MockPosterSource, MockRecommendationSource};
    use crate::services::search::filter_catalog;

    fn sample_recommendation(title: &str) -> RecommendedMovie {
        RecommendedMovie {
            title: title.to_string(),
            genre: "Sci-Fi".to_string(),
            year: 2016,
            rating: 7.9,
            description: "A linguist deciphers an alien language".to_string(),
            director: "Denis Villeneuve".to_string(),
            reason: Some("Matches your request".to_string()),
        }
    }

    fn state_for_search(
        recommender: MockRecommendationSource,
        posters: MockPosterSource,
    ) -> AppState {
        AppState::new(
            Arc::new(recommender),
            Arc::new(posters),
            Arc::new(MockFilmAgent::new()),
        )
    }

    async fn prepare_search(state: &AppState, query: &str) -> u64 {
        let mut inner = state.inner.write().await;
        inner.search_results = filter_catalog(query, &inner.catalog);
        inner.active_view = ActiveView::Search;
        inner.search_seq += 1;
        inner.search_seq
    }

    #[test]
    fn test_synthesized_ids_are_unique_and_ordered() {
        let movies = mint_synthesized_ids(vec![
            sample_recommendation("A"),
            sample_recommendation("B"),
            sample_recommendation("C"),
        ]);

        assert_eq!(movies.len(), 3);
        for (ordinal, movie) in movies.iter().enumerate() {
            match &movie.id {
                MovieId::Synthesized(id) => {
                    assert!(id.starts_with("ai-"));
                    assert!(id.ends_with(&format!("-{}", ordinal)));
                }
                MovieId::Catalog(_) => panic!("recommended entry got a catalog id"),
            }
        }
        assert_ne!(movies[0].id, movies[1].id);
        assert_ne!(movies[1].id, movies[2].id);
    }

    #[tokio::test]
    async fn test_parsed_outcome_replaces_results() {
        let mut recommender = MockRecommendationSource::new();
        recommender.expect_recommend().returning(|_| {
            Ok(RecommendationOutcome::Parsed(vec![
                sample_recommendation("Arrival"),
                sample_recommendation("Annihilation"),
            ]))
        });
        let mut posters = MockPosterSource::new();
        posters
            .expect_generate_poster()
            .returning(|_| Ok("https://img.test/poster".to_string()));

        let state = state_for_search(recommender, posters);
        let seq = prepare_search(&state, "sci").await;

        augment_results(state.clone(), "sci".to_string(), seq).await;

        let inner = state.inner.read().await;
        let titles: Vec<&str> = inner.search_results.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Arrival", "Annihilation"]);
        assert_eq!(inner.ai_recommendations, inner.search_results);
        assert!(inner.search_results.iter().all(|m| m.poster_url.is_some()));
        assert_eq!(inner.notice, None);
    }

    #[tokio::test]
    async fn test_stale_sequence_is_discarded() {
        let mut recommender = MockRecommendationSource::new();
        recommender.expect_recommend().returning(|_| {
            Ok(RecommendationOutcome::Parsed(vec![sample_recommendation(
                "Arrival",
            )]))
        });
        let mut posters = MockPosterSource::new();
        posters
            .expect_generate_poster()
            .returning(|_| Ok("https://img.test/poster".to_string()));

        let state = state_for_search(recommender, posters);
        let stale_seq = prepare_search(&state, "sci").await;
        // A newer search supersedes the one being augmented
        let _latest_seq = prepare_search(&state, "drama").await;

        let before = state.inner.read().await.search_results.clone();
        augment_results(state.clone(), "sci".to_string(), stale_seq).await;

        let inner = state.inner.read().await;
        assert_eq!(inner.search_results, before);
        assert!(inner.ai_recommendations.is_empty());
        assert_eq!(inner.notice, None);
    }

    #[tokio::test]
    async fn test_unparseable_outcome_keeps_results_and_sets_info_notice() {
        let mut recommender = MockRecommendationSource::new();
        recommender
            .expect_recommend()
            .returning(|_| Ok(RecommendationOutcome::Unparseable));
        let mut posters = MockPosterSource::new();
        posters.expect_generate_poster().times(0);

        let state = state_for_search(recommender, posters);
        let seq = prepare_search(&state, "sci").await;

        let before = state.inner.read().await.search_results.clone();
        assert!(!before.is_empty());

        augment_results(state.clone(), "sci".to_string(), seq).await;

        let inner = state.inner.read().await;
        assert_eq!(inner.search_results, before);
        let notice = inner.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_results_and_sets_error_notice() {
        let mut recommender = MockRecommendationSource::new();
        recommender.expect_recommend().returning(|_| {
            Err(AppError::ExternalApi("LLM API returned status 503".to_string()))
        });
        let mut posters = MockPosterSource::new();
        posters.expect_generate_poster().times(0);

        let state = state_for_search(recommender, posters);
        let seq = prepare_search(&state, "sci").await;

        let before = state.inner.read().await.search_results.clone();
        augment_results(state.clone(), "sci".to_string(), seq).await;

        let inner = state.inner.read().await;
        assert_eq!(inner.search_results, before);
        let notice = inner.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_augmentation_never_changes_active_view() {
        let mut recommender = MockRecommendationSource::new();
        recommender.expect_recommend().returning(|_| {
            Ok(RecommendationOutcome::Parsed(vec![sample_recommendation(
                "Arrival",
            )]))
        });
        let mut posters = MockPosterSource::new();
        posters
            .expect_generate_poster()
            .returning(|_| Ok("https://img.test/poster".to_string()));

        let state = state_for_search(recommender, posters);
        let seq = prepare_search(&state, "sci").await;
        // User navigates away before the augmentation lands
        state.inner.write().await.active_view = ActiveView::Favorites;

        augment_results(state.clone(), "sci".to_string(), seq).await;

        let inner = state.inner.read().await;
        assert_eq!(inner.active_view, ActiveView::Favorites);
        // The result set was still updated, just not visible
        assert_eq!(inner.search_results.len(), 1);
    }

    #[tokio::test]
    async fn test_poster_failure_during_augmentation_is_tolerated() {
        let mut recommender = MockRecommendationSource::new();
        recommender.expect_recommend().returning(|_| {
            Ok(RecommendationOutcome::Parsed(vec![sample_recommendation(
                "Arrival",
            )]))
        });
        let mut posters = MockPosterSource::new();
        posters
            .expect_generate_poster()
            .returning(|_| Err(AppError::ExternalApi("Image API returned status 500".to_string())));

        let state = state_for_search(recommender, posters);
        let seq = prepare_search(&state, "sci").await;

        augment_results(state.clone(), "sci".to_string(), seq).await;

        let inner = state.inner.read().await;
        assert_eq!(inner.search_results.len(), 1);
        assert_eq!(inner.search_results[0].poster_url, None);
    }
}
