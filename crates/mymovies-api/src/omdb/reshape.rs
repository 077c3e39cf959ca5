//! Field-level reshaping from wire records to normalized types.

use super::json::{OmdbRating, OmdbSearchHit, OmdbTitleResponse};
use super::types::{CastMember, DEFAULT_ROLE, MovieDetail, MovieId, Rating, SearchResultItem};

/// Separator between a performer and their role inside one actor segment.
const ROLE_SEPARATOR: &str = " as ";

/// Splits a comma-separated list, trimming entries and dropping empty ones.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a genre string such as `"Action, Drama"`.
///
/// An empty string yields an empty list.
#[must_use]
pub fn parse_genres(raw: &str) -> Vec<String> {
    split_list(raw).map(String::from).collect()
}

/// Parses an actor string such as `"Tom Hanks as Forrest, Robin Wright"`.
///
/// Entries without a role get [`DEFAULT_ROLE`]. An empty string yields an
/// empty list.
#[must_use]
pub fn parse_cast(raw: &str) -> Vec<CastMember> {
    split_list(raw)
        .map(|segment| match segment.split_once(ROLE_SEPARATOR) {
            Some((name, role)) if !role.trim().is_empty() => CastMember {
                name: String::from(name.trim()),
                role: String::from(role.trim()),
            },
            Some((name, _)) => CastMember {
                name: String::from(name.trim()),
                role: String::from(DEFAULT_ROLE),
            },
            None => CastMember {
                name: String::from(segment),
                role: String::from(DEFAULT_ROLE),
            },
        })
        .collect()
}

/// Converts a search hit.
///
/// A hit missing its identifier or title cannot be shown or looked up, so
/// it is dropped with a warning instead of failing the search.
pub(crate) fn to_search_item(hit: OmdbSearchHit) -> Option<SearchResultItem> {
    let id = hit.imdb_id.as_deref().and_then(MovieId::new);
    let (Some(id), Some(title)) = (id, hit.title) else {
        tracing::warn!(
            imdb_id = hit.imdb_id.as_deref().unwrap_or("-"),
            "OMDb search hit without imdbID or Title, skipping"
        );
        return None;
    };
    Some(SearchResultItem {
        id,
        title,
        year: hit.year,
        media_type: hit.media_type,
        poster_url: hit.poster,
    })
}

/// Converts a title lookup record.
pub(crate) fn to_movie_detail(record: OmdbTitleResponse) -> MovieDetail {
    MovieDetail {
        title: record.title,
        plot: record.plot,
        genres: record.genre.as_deref().map(parse_genres).unwrap_or_default(),
        cast: record.actors.as_deref().map(parse_cast).unwrap_or_default(),
        ratings: record.ratings.into_iter().map(to_rating).collect(),
        poster_url: record.poster,
        release_date: record.released,
        imdb_rating: record.imdb_rating,
    }
}

/// Passes a rating through unchanged.
fn to_rating(rating: OmdbRating) -> Rating {
    Rating {
        source: rating.source,
        value: rating.value,
    }
}
