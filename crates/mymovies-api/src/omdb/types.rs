//! Normalized movie types and request inputs.

use std::fmt;

/// Poster shown when the provider has none.
pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/150";

/// Role assigned to a cast member listed without one.
pub const DEFAULT_ROLE: &str = "Actor";

// --- Inputs ---

/// Trimmed, non-empty search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims `raw` and returns `None` if nothing is left.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(String::from(trimmed)))
        }
    }

    /// Wraps a fixed query known to be non-blank.
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(!text.trim().is_empty(), "static query must not be blank");
        Self(String::from(text.trim()))
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider-issued title identifier (e.g. `tt0133093`).
///
/// Opaque: only non-emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieId(String);

impl MovieId {
    /// Trims `raw` and returns `None` if nothing is left.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(String::from(trimmed)))
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Search ---

/// A single search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Provider identifier.
    pub id: MovieId,
    /// Display title.
    pub title: String,
    /// Release year as reported (may be a range such as `2008–2013`).
    pub year: Option<String>,
    /// Provider media type (`movie`, `series`, `episode`, ...).
    pub media_type: Option<String>,
    /// Poster URL, `None` when the provider has no poster.
    pub poster_url: Option<String>,
}

impl SearchResultItem {
    /// Poster URL or [`POSTER_PLACEHOLDER`].
    #[must_use]
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster_url.as_deref().unwrap_or(POSTER_PLACEHOLDER)
    }
}

// --- Detail ---

/// A reshaped title record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    /// Display title.
    pub title: String,
    /// Full-length synopsis.
    pub plot: Option<String>,
    /// Genres in provider order.
    pub genres: Vec<String>,
    /// Cast in provider order.
    pub cast: Vec<CastMember>,
    /// Ratings as reported.
    pub ratings: Vec<Rating>,
    /// Poster URL, `None` when the provider has no poster.
    pub poster_url: Option<String>,
    /// Release date as reported (e.g. `31 Mar 1999`).
    pub release_date: Option<String>,
    /// IMDb user rating (e.g. `8.7`).
    pub imdb_rating: Option<String>,
}

impl MovieDetail {
    /// Poster URL or [`POSTER_PLACEHOLDER`].
    #[must_use]
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster_url.as_deref().unwrap_or(POSTER_PLACEHOLDER)
    }
}

/// One cast entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMember {
    /// Performer name.
    pub name: String,
    /// Role, [`DEFAULT_ROLE`] when not listed.
    pub role: String,
}

/// One rating from a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    /// Rating source (e.g. `Rotten Tomatoes`).
    pub source: String,
    /// Rating value as reported (e.g. `83%`).
    pub value: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_search_query_trims() {
        // Arrange & Act
        let query = SearchQuery::new("  The Matrix \n").unwrap();

        // Assert
        assert_eq!(query.as_str(), "The Matrix");
    }

    #[test]
    fn test_search_query_rejects_blank() {
        // Arrange & Act & Assert
        assert!(SearchQuery::new("").is_none());
        assert!(SearchQuery::new("   \t").is_none());
    }

    #[test]
    fn test_search_query_from_static() {
        // Arrange & Act
        let query = SearchQuery::from_static("movie");

        // Assert
        assert_eq!(Some(query), SearchQuery::new("movie"));
    }

    #[test]
    fn test_movie_id_rejects_blank() {
        // Arrange & Act & Assert
        assert!(MovieId::new(" ").is_none());
        assert_eq!(MovieId::new("tt0133093").unwrap().to_string(), "tt0133093");
    }

    #[test]
    fn test_poster_placeholder() {
        // Arrange
        let item = SearchResultItem {
            id: MovieId::new("tt0295432").unwrap(),
            title: String::from("The Matrix Revisited"),
            year: Some(String::from("2001")),
            media_type: Some(String::from("movie")),
            poster_url: None,
        };

        // Act & Assert
        assert_eq!(item.poster_or_placeholder(), POSTER_PLACEHOLDER);
    }
}
