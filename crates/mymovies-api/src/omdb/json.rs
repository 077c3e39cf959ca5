//! JSON response wrapper types and custom deserializers.
//!
//! OMDb answers every request with HTTP 200-ish JSON carrying a `Response`
//! discriminator (`"True"` / `"False"`), so a body is decoded in two steps:
//! first the discriminator, then the payload if the provider found
//! something.

use anyhow::{Context, Result};
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};

/// Marker the provider uses for missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Message used when the provider reports failure without an `Error` field.
const UNKNOWN_PROVIDER_ERROR: &str = "Unknown error";

/// Deserializes empty strings and `"N/A"` as `None`.
pub fn deserialize_na_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let result = Option::deserialize(deserializer);
    let s: Option<String> = result.map_err(D::Error::custom)?;
    Ok(s.filter(|s| {
        let trimmed = s.trim();
        !trimmed.is_empty() && trimmed != NOT_AVAILABLE
    }))
}

/// Discriminator shared by every response.
#[derive(Debug, Deserialize)]
pub struct OmdbStatus {
    /// `"True"` when the provider found something.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human-readable failure text.
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbStatus {
    /// Returns `true` when the discriminator reports success.
    pub fn is_found(&self) -> bool {
        self.response.trim().eq_ignore_ascii_case("true")
    }
}

/// Decoded body, split on the discriminator.
#[derive(Debug)]
pub enum Envelope<T> {
    /// Provider reported success; payload decoded.
    Found(T),
    /// Provider reported failure with this message.
    NotFound(String),
}

/// Decodes a response body into an [`Envelope`].
///
/// # Errors
///
/// Returns an error if the body is not JSON, lacks the discriminator, or
/// the payload of a successful response does not match `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>> {
    let status: OmdbStatus =
        serde_json::from_str(body).context("failed to decode response discriminator")?;

    if !status.is_found() {
        let message = status
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| String::from(UNKNOWN_PROVIDER_ERROR));
        return Ok(Envelope::NotFound(message));
    }

    let payload: T = serde_json::from_str(body).context("failed to decode response payload")?;
    Ok(Envelope::Found(payload))
}

/// `?s=` search response.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    /// Matches for the current page.
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchHit>,
    /// Total match count reported by the provider.
    #[serde(
        rename = "totalResults",
        deserialize_with = "deserialize_na_as_none",
        default
    )]
    pub total_results: Option<String>,
}

/// A single search match.
///
/// Every field is optional on the wire so one malformed hit cannot fail
/// the whole page; incomplete hits are dropped during reshaping.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchHit {
    /// Title.
    #[serde(rename = "Title", deserialize_with = "deserialize_na_as_none", default)]
    pub title: Option<String>,
    /// Year or year range.
    #[serde(rename = "Year", deserialize_with = "deserialize_na_as_none", default)]
    pub year: Option<String>,
    /// IMDb identifier.
    #[serde(rename = "imdbID", deserialize_with = "deserialize_na_as_none", default)]
    pub imdb_id: Option<String>,
    /// `movie`, `series`, `episode`, ...
    #[serde(rename = "Type", deserialize_with = "deserialize_na_as_none", default)]
    pub media_type: Option<String>,
    /// Poster URL.
    #[serde(rename = "Poster", deserialize_with = "deserialize_na_as_none", default)]
    pub poster: Option<String>,
}

/// `?i=` title lookup response (fields used by the client only).
#[derive(Debug, Deserialize)]
pub struct OmdbTitleResponse {
    /// Title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Plot (full variant when requested with `plot=full`).
    #[serde(rename = "Plot", deserialize_with = "deserialize_na_as_none", default)]
    pub plot: Option<String>,
    /// Comma-separated genres.
    #[serde(rename = "Genre", deserialize_with = "deserialize_na_as_none", default)]
    pub genre: Option<String>,
    /// Comma-separated actors, optionally `Name as Role`.
    #[serde(rename = "Actors", deserialize_with = "deserialize_na_as_none", default)]
    pub actors: Option<String>,
    /// Ratings by source.
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<OmdbRating>,
    /// Poster URL.
    #[serde(rename = "Poster", deserialize_with = "deserialize_na_as_none", default)]
    pub poster: Option<String>,
    /// Release date.
    #[serde(
        rename = "Released",
        deserialize_with = "deserialize_na_as_none",
        default
    )]
    pub released: Option<String>,
    /// IMDb user rating.
    #[serde(
        rename = "imdbRating",
        deserialize_with = "deserialize_na_as_none",
        default
    )]
    pub imdb_rating: Option<String>,
}

/// One rating entry.
#[derive(Debug, Deserialize)]
pub struct OmdbRating {
    /// Source name.
    #[serde(rename = "Source")]
    pub source: String,
    /// Value text.
    #[serde(rename = "Value")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_search_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/search_matrix.json");

        // Act
        let envelope: Envelope<OmdbSearchResponse> = decode_envelope(json).unwrap();

        // Assert
        let Envelope::Found(response) = envelope else {
            panic!("expected Found");
        };
        assert_eq!(response.search.len(), 3);
        assert_eq!(response.total_results.as_deref(), Some("3"));
        assert_eq!(response.search[0].imdb_id.as_deref(), Some("tt0133093"));
        assert_eq!(response.search[0].media_type.as_deref(), Some("movie"));
        assert!(response.search[2].poster.is_none());
    }

    #[test]
    fn test_not_found_keeps_provider_message() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/search_not_found.json");

        // Act
        let envelope: Envelope<OmdbSearchResponse> = decode_envelope(json).unwrap();

        // Assert
        assert!(matches!(envelope, Envelope::NotFound(ref m) if m == "Movie not found!"));
    }

    #[test]
    fn test_not_found_without_error_field() {
        // Arrange
        let json = r#"{"Response":"False"}"#;

        // Act
        let envelope: Envelope<OmdbSearchResponse> = decode_envelope(json).unwrap();

        // Assert
        assert!(matches!(envelope, Envelope::NotFound(ref m) if m == "Unknown error"));
    }

    #[test]
    fn test_not_found_does_not_decode_payload() {
        // Arrange: a failure body never has a `Title`
        let json = include_str!("../../../../fixtures/omdb/invalid_api_key.json");

        // Act
        let envelope: Envelope<OmdbTitleResponse> = decode_envelope(json).unwrap();

        // Assert
        assert!(matches!(envelope, Envelope::NotFound(ref m) if m == "Invalid API key!"));
    }

    #[test]
    fn test_malformed_body_is_error() {
        // Arrange & Act
        let result = decode_envelope::<OmdbSearchResponse>("<html>502 Bad Gateway</html>");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_discriminator_is_error() {
        // Arrange & Act
        let result = decode_envelope::<OmdbSearchResponse>(r#"{"Search":[]}"#);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_sparse_title_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/title_sparse.json");

        // Act
        let envelope: Envelope<OmdbTitleResponse> = decode_envelope(json).unwrap();

        // Assert
        let Envelope::Found(title) = envelope else {
            panic!("expected Found");
        };
        assert_eq!(title.title, "Untitled Short");
        assert!(title.plot.is_none());
        assert!(title.genre.is_none());
        assert!(title.actors.is_none());
        assert!(title.poster.is_none());
        assert!(title.released.is_none());
        assert!(title.imdb_rating.is_none());
        assert!(title.ratings.is_empty());
    }

    #[test]
    fn test_parse_title_rating() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/title_tt0133093.json");

        // Act
        let envelope: Envelope<OmdbTitleResponse> = decode_envelope(json).unwrap();

        // Assert
        let Envelope::Found(title) = envelope else {
            panic!("expected Found");
        };
        assert_eq!(title.imdb_rating.as_deref(), Some("8.7"));
    }

    #[test]
    fn test_incomplete_hits_still_decode() {
        // Arrange
        let json = r#"{
            "Search": [
                {"Year": "1999", "imdbID": "tt0133093", "Type": "movie"},
                {"Title": "Ghost", "Type": "movie"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        // Act
        let envelope: Envelope<OmdbSearchResponse> = decode_envelope(json).unwrap();

        // Assert
        let Envelope::Found(response) = envelope else {
            panic!("expected Found");
        };
        assert_eq!(response.search.len(), 2);
        assert!(response.search[0].title.is_none());
        assert!(response.search[1].imdb_id.is_none());
    }
}
