//! OMDb API client module.
//!
//! Handles HTTP requests to the OMDb query-string API and normalizes
//! search matches and title records.

mod api;
mod client;
mod json;
mod reshape;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DETAIL_FAILURE_MESSAGE, OmdbClient, OmdbClientBuilder, SEARCH_FAILURE_MESSAGE};
pub use reshape::{parse_cast, parse_genres};
pub use types::{
    CastMember, DEFAULT_ROLE, MovieDetail, MovieId, POSTER_PLACEHOLDER, Rating, SearchQuery,
    SearchResultItem,
};
