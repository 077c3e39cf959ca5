//! Decorative notification feed built from a search.
//!
//! Each match is tagged with a [`NotificationKind`] drawn from a seeded
//! `ChaCha8Rng`, so the same (title, seed) pair always yields the same
//! notification.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::omdb::{LocalMovieApi, SearchQuery, SearchResultItem};
use crate::result::ApiResult;

/// Search term used to populate the feed.
pub const FEED_QUERY: &str = "movie";

/// FNV-1a offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// "New Release".
    NewRelease,
    /// "Now in Cinema".
    NowInCinema,
    /// "Awards Won".
    AwardsWon,
}

impl NotificationKind {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewRelease => "New Release",
            Self::NowInCinema => "Now in Cinema",
            Self::AwardsWon => "Awards Won",
        }
    }

    /// Message for a title under this category.
    #[must_use]
    pub fn message(self, title: &str) -> String {
        match self {
            Self::NewRelease => format!("New movie released: \"{title}\"!"),
            Self::NowInCinema => format!("\"{title}\" is now showing in cinemas!"),
            Self::AwardsWon => format!("\"{title}\" has won awards!"),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Provider identifier of the title.
    pub id: String,
    /// Category.
    pub kind: NotificationKind,
    /// Display message.
    pub message: String,
    /// Poster URL or placeholder.
    pub image: String,
}

/// Stable 64-bit FNV-1a hash, independent of process and platform.
fn stable_hash(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Picks the category for `item` under `seed`.
#[must_use]
pub fn classify(item: &SearchResultItem, seed: u64) -> NotificationKind {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ stable_hash(item.id.as_str()));
    match rng.random_range(0..3_u8) {
        0 => NotificationKind::NewRelease,
        1 => NotificationKind::NowInCinema,
        _ => NotificationKind::AwardsWon,
    }
}

/// Builds one notification per item, in order.
#[must_use]
pub fn build_notifications(items: &[SearchResultItem], seed: u64) -> Vec<Notification> {
    items
        .iter()
        .map(|item| {
            let kind = classify(item, seed);
            Notification {
                id: String::from(item.id.as_str()),
                kind,
                message: kind.message(&item.title),
                image: String::from(item.poster_or_placeholder()),
            }
        })
        .collect()
}

/// Searches [`FEED_QUERY`] and turns the matches into notifications.
///
/// A failed search is returned unchanged.
#[allow(clippy::future_not_send)]
pub async fn fetch_notifications<A: LocalMovieApi>(
    api: &A,
    seed: u64,
) -> ApiResult<Vec<Notification>> {
    let query = SearchQuery::from_static(FEED_QUERY);
    let result = api.search_movies(&query).await;
    result.map(|items| build_notifications(&items, seed))
}
