use serde::{Deserialize, Serialize};

/// Sentinel used for a plot or poster that is not available.
///
/// OMDb itself uses the literal `"N/A"` for missing fields, so the same
/// value doubles as the uniform fallback for every failure cause.
pub const NOT_AVAILABLE: &str = "N/A";

/// A movie row in the local catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovie {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// A recommendation row: a candidate title with its similarity score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredTitle {
    pub title: String,
    pub score: f32,
}

/// Plot and poster for one title, as returned by the metadata client.
///
/// Absence is represented by the [`NOT_AVAILABLE`] sentinel rather than a
/// distinct type; both fields carry it after any lookup failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub plot: String,
    pub poster: String,
}

impl MovieDetails {
    /// The sentinel pair signalling "not available"
    pub fn unavailable() -> Self {
        Self {
            plot: NOT_AVAILABLE.to_string(),
            poster: NOT_AVAILABLE.to_string(),
        }
    }

    pub fn has_plot(&self) -> bool {
        self.plot != NOT_AVAILABLE
    }

    pub fn has_poster(&self) -> bool {
        self.poster != NOT_AVAILABLE
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw OMDb lookup response.
///
/// OMDb reports logical failure in-band: HTTP 200 with `"Response": "False"`
/// and an `Error` message instead of title fields.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbLookup {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbLookup {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

impl From<OmdbLookup> for MovieDetails {
    fn from(lookup: OmdbLookup) -> Self {
        if !lookup.is_success() {
            return MovieDetails::unavailable();
        }

        Self {
            plot: field_or_sentinel(lookup.plot),
            poster: field_or_sentinel(lookup.poster),
        }
    }
}

/// Substitutes the sentinel for a field that is missing, null, or empty
fn field_or_sentinel(field: Option<String>) -> String {
    match field {
        Some(value) if !value.trim().is_empty() => value,
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_sentinel_pair() {
        let details = MovieDetails::unavailable();
        assert_eq!(details.plot, "N/A");
        assert_eq!(details.poster, "N/A");
        assert!(!details.has_plot());
        assert!(!details.has_poster());
    }

    #[test]
    fn test_omdb_lookup_success_deserialization() {
        let json = r#"{
            "Response": "True",
            "Plot": "A story.",
            "Poster": "http://x/img.jpg"
        }"#;

        let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
        assert!(lookup.is_success());

        let details: MovieDetails = lookup.into();
        assert_eq!(details.plot, "A story.");
        assert_eq!(details.poster, "http://x/img.jpg");
    }

    #[test]
    fn test_omdb_lookup_failure_deserialization() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
        assert!(!lookup.is_success());
        assert_eq!(lookup.error, Some("Movie not found!".to_string()));

        let details: MovieDetails = lookup.into();
        assert_eq!(details, MovieDetails::unavailable());
    }

    #[test]
    fn test_empty_field_substituted_even_on_success() {
        let lookup = OmdbLookup {
            response: "True".to_string(),
            plot: Some("".to_string()),
            poster: Some("http://x/img.jpg".to_string()),
            error: None,
        };

        let details: MovieDetails = lookup.into();
        assert_eq!(details.plot, NOT_AVAILABLE);
        assert_eq!(details.poster, "http://x/img.jpg");
    }

    #[test]
    fn test_null_field_substituted_even_on_success() {
        let json = r#"{"Response": "True", "Plot": null, "Poster": "http://x/img.jpg"}"#;

        let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
        let details: MovieDetails = lookup.into();
        assert_eq!(details.plot, NOT_AVAILABLE);
        assert_eq!(details.poster, "http://x/img.jpg");
    }

    #[test]
    fn test_missing_fields_substituted() {
        let json = r#"{"Response": "True"}"#;

        let lookup: OmdbLookup = serde_json::from_str(json).unwrap();
        let details: MovieDetails = lookup.into();
        assert_eq!(details, MovieDetails::unavailable());
    }

    #[test]
    fn test_catalog_movie_deserialization_defaults() {
        let json = r#"{"title": "Alpha"}"#;

        let movie: CatalogMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Alpha");
        assert_eq!(movie.year, None);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.overview, None);
    }
}
