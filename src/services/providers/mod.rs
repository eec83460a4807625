/// External collaborator abstractions
///
/// The recommendation and poster collaborators are hosted services reached
/// over HTTP. Each is hidden behind a trait so the rest of the system depends
/// only on the calls it actually makes, and so tests can substitute doubles.
use crate::{
    error::AppResult,
    models::{Movie, RecommendedMovie},
};

pub mod image;
pub mod llm;

pub use image::PosterClient;
pub use llm::LlmRecommender;

/// Outcome of a recommendation lookup that reached the collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    /// The response carried a parseable recommendation array
    Parsed(Vec<RecommendedMovie>),
    /// The response arrived but no recommendation array could be extracted.
    /// Benign: callers keep whatever they were already showing.
    Unparseable,
}

/// Natural-language recommendation collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Sends the user's free-text query and extracts recommendations from the
    /// free-text reply.
    ///
    /// `Err` means the collaborator could not be reached or answered with a
    /// non-success status; `Ok(Unparseable)` means it answered but the reply
    /// carried no usable recommendation array.
    async fn recommend(&self, query: &str) -> AppResult<RecommendationOutcome>;
}

/// Image generation collaborator for movie posters
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterSource: Send + Sync {
    /// Requests a generated poster image URL for the given movie
    async fn generate_poster(&self, movie: &Movie) -> AppResult<String>;
}
