/// Image generation collaborator for movie posters
///
/// GETs the endpoint with a url-encoded natural-language prompt and a fixed
/// poster aspect ratio; the resolved response URL is the poster. Callers treat
/// any failure as "no poster available".
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::providers::PosterSource,
};

const POSTER_ASPECT: &str = "2:3";

/// Builds the descriptive prompt for a movie's poster
pub fn poster_prompt(movie: &Movie) -> String {
    format!(
        "Movie poster for {}, {} film from {}, directed by {}. {}. Cinematic, professional movie poster style, dark atmospheric lighting",
        movie.title, movie.genre, movie.release_year, movie.director, movie.description
    )
}

#[derive(Clone)]
pub struct PosterClient {
    http_client: HttpClient,
    api_url: String,
}

impl PosterClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl PosterSource for PosterClient {
    async fn generate_poster(&self, movie: &Movie) -> AppResult<String> {
        let prompt = poster_prompt(movie);

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("text", prompt.as_str()), ("aspect", POSTER_ASPECT)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Image API returned status {}",
                response.status()
            )));
        }

        // The API resolves to the generated image; the final URL is the poster
        Ok(response.url().to_string())
    }
}
