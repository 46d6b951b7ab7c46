use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::CatalogMovie,
};

/// In-memory movie catalog backing the title selection list.
///
/// Loaded once at startup; never mutated afterwards. Titles are keyed
/// case-insensitively so user selections survive casing differences.
pub struct Catalog {
    movies: Vec<CatalogMovie>,
    by_title: HashMap<String, usize>,
    titles: Vec<String>,
}

impl Catalog {
    /// Loads the catalog from a JSON file containing an array of movies.
    ///
    /// Unlike `config.json`, a missing or malformed catalog is an error:
    /// there is nothing to present without it.
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let movies: Vec<CatalogMovie> = serde_json::from_str(&contents).map_err(|e| {
            AppError::Catalog(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Self::from_movies(movies))
    }

    /// Builds a catalog from in-memory rows, dropping rows with blank
    /// titles and deduplicating case-insensitively (first row wins)
    pub fn from_movies(movies: Vec<CatalogMovie>) -> Self {
        let mut kept = Vec::with_capacity(movies.len());
        let mut by_title = HashMap::new();

        for movie in movies {
            if movie.title.trim().is_empty() {
                continue;
            }
            let key = movie.title.trim().to_lowercase();
            if by_title.contains_key(&key) {
                continue;
            }
            by_title.insert(key, kept.len());
            kept.push(movie);
        }

        let mut titles: Vec<String> = kept.iter().map(|m| m.title.clone()).collect();
        titles.sort();

        Self {
            movies: kept,
            by_title,
            titles,
        }
    }

    /// The deduplicated, sorted title list shown to the user
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Case-insensitive lookup of a movie by title
    pub fn get(&self, title: &str) -> Option<&CatalogMovie> {
        self.by_title
            .get(&title.trim().to_lowercase())
            .map(|&idx| &self.movies[idx])
    }

    pub fn movies(&self) -> &[CatalogMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
