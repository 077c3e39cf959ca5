//! Result cards: search matches enriched with a per-title lookup.
//!
//! Each card costs one extra detail request. A failed lookup leaves the
//! card's rating and release date empty; the card itself is kept.

use crate::omdb::{LocalMovieApi, SearchResultItem};
use crate::result::ApiResult;

/// Shown when a card has no rating.
pub const NO_RATING: &str = "No rating";

/// Shown when a card has no release date.
pub const UNKNOWN_RELEASE: &str = "Unknown";

/// A search match plus rating and release date from its detail record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// The underlying search match.
    pub item: SearchResultItem,
    /// IMDb user rating.
    pub rating: Option<String>,
    /// Release date as reported.
    pub released: Option<String>,
}

impl MovieCard {
    /// Rating or [`NO_RATING`].
    #[must_use]
    pub fn rating_label(&self) -> &str {
        self.rating.as_deref().unwrap_or(NO_RATING)
    }

    /// Release date or [`UNKNOWN_RELEASE`].
    #[must_use]
    pub fn released_label(&self) -> &str {
        self.released.as_deref().unwrap_or(UNKNOWN_RELEASE)
    }
}

/// Looks up every item in order and builds its card.
#[allow(clippy::future_not_send)]
pub async fn enrich_cards<A: LocalMovieApi>(
    api: &A,
    items: Vec<SearchResultItem>,
) -> Vec<MovieCard> {
    let mut cards = Vec::with_capacity(items.len());
    for item in items {
        let (rating, released) = match api.fetch_movie_detail(&item.id).await {
            ApiResult::Success { data } => (data.imdb_rating, data.release_date),
            ApiResult::Failure { message, .. } => {
                tracing::debug!(id = %item.id, %message, "card lookup failed");
                (None, None)
            }
        };
        cards.push(MovieCard {
            item,
            rating,
            released,
        });
    }
    cards
}
