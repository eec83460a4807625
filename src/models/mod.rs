use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod favorites;
mod session;

pub use favorites::Favorites;
pub use session::{ActiveView, BatchState, Notice, NoticeLevel};

/// Identifier for a movie, either a seed catalog id or an id minted for an
/// externally-sourced recommendation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    /// Seed catalog id (e.g., 3)
    Catalog(u32),
    /// Synthesized id for a recommended entry (e.g., "ai-1700000000000-2")
    Synthesized(String),
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieId::Catalog(id) => write!(f, "{}", id),
            MovieId::Synthesized(id) => write!(f, "{}", id),
        }
    }
}

/// A movie record as held in the catalog, search results, and favorites
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: f64,
    pub description: String,
    pub director: String,
    /// Absent until poster enrichment completes for this entry
    #[serde(default)]
    pub poster_url: Option<String>,
    /// Present only on recommendation-augmented entries
    #[serde(default)]
    pub reason: Option<String>,
}

/// Wire shape of a single recommendation from the language-model collaborator.
///
/// Carries no id; one is synthesized when the entry is admitted into the
/// result set.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub rating: f64,
    pub description: String,
    pub director: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl RecommendedMovie {
    /// Converts to a full record under a synthesized id
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            release_year: self.year,
            rating: self.rating,
            description: self.description,
            director: self.director,
            poster_url: None,
            reason: self.reason,
        }
    }
}

/// The baseline in-memory catalog available before any search or augmentation
pub fn seed_catalog() -> Vec<Movie> {
    fn movie(
        id: u32,
        title: &str,
        genre: &str,
        release_year: i32,
        rating: f64,
        description: &str,
        director: &str,
    ) -> Movie {
        Movie {
            id: MovieId::Catalog(id),
            title: title.to_string(),
            genre: genre.to_string(),
            release_year,
            rating,
            description: description.to_string(),
            director: director.to_string(),
            poster_url: None,
            reason: None,
        }
    }

    vec![
        movie(
            1,
            "The Dark Knight",
            "Action",
            2008,
            9.0,
            "Batman faces the Joker in this epic superhero masterpiece",
            "Christopher Nolan",
        ),
        movie(
            2,
            "Inception",
            "Sci-Fi",
            2010,
            8.8,
            "A mind-bending thriller about dreams within dreams",
            "Christopher Nolan",
        ),
        movie(
            3,
            "Pulp Fiction",
            "Drama",
            1994,
            8.9,
            "Interconnected stories of crime and redemption",
            "Quentin Tarantino",
        ),
        movie(
            4,
            "The Godfather",
            "Drama",
            1972,
            9.2,
            "The epic saga of a powerful crime family",
            "Francis Ford Coppola",
        ),
        movie(
            5,
            "Interstellar",
            "Sci-Fi",
            2014,
            8.6,
            "A journey through space and time to save humanity",
            "Christopher Nolan",
        ),
        movie(
            6,
            "The Avengers",
            "Action",
            2012,
            8.0,
            "Superheroes unite to save the world",
            "Joss Whedon",
        ),
        movie(
            7,
            "Forrest Gump",
            "Drama",
            1994,
            8.8,
            "The extraordinary life of an ordinary man",
            "Robert Zemeckis",
        ),
        movie(
            8,
            "The Matrix",
            "Sci-Fi",
            1999,
            8.7,
            "Reality is not what it seems in this cyberpunk classic",
            "The Wachowskis",
        ),
    ]
}
