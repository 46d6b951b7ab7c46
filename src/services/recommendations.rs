use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::models::ScoredTitle;
use crate::services::catalog::Catalog;

/// Recommendation lookup seam.
///
/// The presentation layer only needs "similar titles for a selection";
/// keeping it behind a trait lets the scoring strategy be swapped without
/// touching the handlers.
#[cfg_attr(test, mockall::automock)]
pub trait Recommender: Send + Sync {
    /// Returns candidate rows for the selected title, best match first.
    /// Empty when the title is unknown or nothing clears the floor.
    fn recommend(&self, title: &str) -> Vec<ScoredTitle>;
}

/// Configuration for the similarity recommender
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Maximum number of recommendations to return
    pub limit: usize,
    /// Minimum combined score for a candidate to qualify
    pub min_score: f32,
    /// Weight for genre overlap
    pub genre_weight: f32,
    /// Weight for overview term similarity
    pub overview_weight: f32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            min_score: 0.05,
            genre_weight: 0.6,
            overview_weight: 0.4,
        }
    }
}

/// Content-based recommender over the local catalog.
///
/// Each movie gets a profile of its genre set and overview term
/// frequencies; candidates are scored by a weighted combination of genre
/// overlap (Jaccard) and overview cosine similarity.
pub struct SimilarityRecommender {
    config: RecommenderConfig,
    profiles: HashMap<String, MovieProfile>,
}

struct MovieProfile {
    title: String,
    genres: HashSet<String>,
    overview_terms: HashMap<String, f32>,
}

impl SimilarityRecommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, RecommenderConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: RecommenderConfig) -> Self {
        let mut profiles = HashMap::with_capacity(catalog.len());

        for movie in catalog.movies() {
            let genres = movie
                .genres
                .iter()
                .map(|g| g.trim().to_lowercase())
                .filter(|g| !g.is_empty())
                .collect();

            let overview_terms = movie
                .overview
                .as_deref()
                .map(term_frequencies)
                .unwrap_or_default();

            profiles.insert(
                movie.title.trim().to_lowercase(),
                MovieProfile {
                    title: movie.title.clone(),
                    genres,
                    overview_terms,
                },
            );
        }

        tracing::debug!(movies = profiles.len(), "Built similarity profiles");

        Self { config, profiles }
    }

    fn score(&self, a: &MovieProfile, b: &MovieProfile) -> f32 {
        let genre_sim = jaccard(&a.genres, &b.genres);
        let overview_sim = cosine(&a.overview_terms, &b.overview_terms);

        genre_sim * self.config.genre_weight + overview_sim * self.config.overview_weight
    }
}

impl Recommender for SimilarityRecommender {
    fn recommend(&self, title: &str) -> Vec<ScoredTitle> {
        let key = title.trim().to_lowercase();
        let Some(selected) = self.profiles.get(&key) else {
            tracing::debug!(title = %title, "Unknown title, no recommendations");
            return Vec::new();
        };

        let mut scored: Vec<ScoredTitle> = self
            .profiles
            .iter()
            .filter(|(candidate_key, _)| *candidate_key != &key)
            .map(|(_, candidate)| ScoredTitle {
                title: candidate.title.clone(),
                score: self.score(selected, candidate),
            })
            .filter(|candidate| candidate.score >= self.config.min_score)
            .collect();

        // Ties break lexicographically so output is deterministic
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.title.cmp(&b.title))
        });
        scored.truncate(self.config.limit);

        tracing::debug!(
            title = %title,
            results = scored.len(),
            "Recommendation lookup completed"
        );

        scored
    }
}

/// Lowercased term frequencies of an overview, short tokens dropped
fn term_frequencies(text: &str) -> HashMap<String, f32> {
    let mut terms: HashMap<String, f32> = HashMap::new();

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 2)
    {
        *terms.entry(token.to_lowercase()).or_insert(0.0) += 1.0;
    }

    terms
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count() as f32;
    let union = a.union(b).count() as f32;
    intersection / union
}

fn cosine(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f32 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    let norm_a: f32 = a.values().map(|w| w * w).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|w| w * w).sum::<f32>().sqrt();

    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}
