//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::result::ApiResult;

use super::types::{MovieDetail, MovieId, SearchQuery, SearchResultItem};

/// Movie data API trait.
///
/// Abstracts provider access for mock substitution in consumers and tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Implementations never return an error past this boundary: every path,
/// including transport failure, ends in an [`ApiResult`].
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Searches titles by free text. Returns the provider's first page as is.
    async fn search_movies(&self, query: &SearchQuery) -> ApiResult<Vec<SearchResultItem>>;

    /// Fetches the full-plot record for one title and reshapes it.
    async fn fetch_movie_detail(&self, id: &MovieId) -> ApiResult<MovieDetail>;
}
