use serde::{Deserialize, Serialize};

use super::{Movie, MovieId};

/// User-selected movies, membership keyed by id.
///
/// Kept as an ordered list so the favorites screen shows entries in the order
/// they were added. Empty at startup and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorites {
    movies: Vec<Movie>,
}

impl Default for Favorites {
    fn default() -> Self {
        Self::new()
    }
}

impl Favorites {
    /// Creates an empty favorites set
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Removes the movie if an entry with the same id is present, otherwise
    /// appends it
    pub fn toggle(&mut self, movie: Movie) {
        if self.contains(&movie.id) {
            self.movies.retain(|m| m.id != movie.id);
        } else {
            self.movies.push(movie);
        }
    }

    /// Presence test by id
    pub fn contains(&self, id: &MovieId) -> bool {
        self.movies.iter().any(|m| &m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Favorites in insertion order
    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }
}
