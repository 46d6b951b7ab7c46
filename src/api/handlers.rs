use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::MovieDetails;

use super::AppState;

/// Placeholder rendered when a recommendation has no poster
pub const NO_POSTER_MESSAGE: &str = "❌ No Poster Found";

/// Placeholder rendered when a recommendation has no plot text
pub const NO_PLOT_MESSAGE: &str = "_Plot not available_";

/// Notice rendered when the lookup yields no rows
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "Sorry, no recommendations found.";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub title: String,
}

/// One rendered result card: heading, poster slot, plot text.
///
/// `poster` carries either an image URL or [`NO_POSTER_MESSAGE`]; `plot`
/// carries either the plot text or [`NO_PLOT_MESSAGE`].
#[derive(Debug, Serialize, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub poster: String,
    pub plot: String,
}

impl RecommendationCard {
    fn render(title: String, details: &MovieDetails) -> Self {
        Self {
            title,
            poster: if details.has_poster() {
                details.poster.clone()
            } else {
                NO_POSTER_MESSAGE.to_string()
            },
            plot: if details.has_plot() {
                details.plot.clone()
            } else {
                NO_PLOT_MESSAGE.to_string()
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// The title the user selected
    pub selected: String,
    /// False when no credential was resolved and cards carry placeholders
    pub metadata_available: bool,
    /// User-visible notice, present when there are no cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cards: Vec<RecommendationCard>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The data behind the selection control: all catalog titles,
/// deduplicated and sorted
pub async fn get_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.titles().to_vec())
}

/// The action button: look up similar titles and render result cards.
///
/// Metadata fetches run sequentially, one per row, and only when a
/// credential was resolved; each failed fetch degrades that card to
/// placeholders instead of failing the request.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Selected title cannot be empty".to_string(),
        ));
    }

    let metadata_available = state.metadata.is_configured();
    let rows = state.recommender.recommend(&request.title);

    if rows.is_empty() {
        tracing::info!(title = %request.title, "No recommendations found");
        return Ok(Json(RecommendResponse {
            selected: request.title,
            metadata_available,
            message: Some(NO_RECOMMENDATIONS_MESSAGE.to_string()),
            cards: Vec::new(),
        }));
    }

    let mut cards = Vec::with_capacity(rows.len());
    for row in rows {
        let details = if metadata_available {
            state.metadata.fetch_details(&row.title).await
        } else {
            MovieDetails::unavailable()
        };
        cards.push(RecommendationCard::render(row.title, &details));
    }

    tracing::info!(
        title = %request.title,
        cards = cards.len(),
        metadata_available,
        "Recommendations rendered"
    );

    Ok(Json(RecommendResponse {
        selected: request.title,
        metadata_available,
        message: None,
        cards,
    }))
}
