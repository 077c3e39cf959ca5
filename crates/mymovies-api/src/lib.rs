//! Movie data client library for mymovies.
//!
//! Provides the OMDb client together with the result envelope its
//! operations return, plus consumer-side helpers built on top of it.

/// Search matches enriched with rating and release date.
pub mod cards;

/// Latest-request guard for overlapping lookups.
pub mod latest;

/// Seeded notification feed.
pub mod notify;

/// OMDb API client.
pub mod omdb;

/// Uniform success/failure envelope.
pub mod result;

pub use result::{ApiFailure, ApiResult, FailureKind};
