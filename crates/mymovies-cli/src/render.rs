//! Text rendering of client results.
//!
//! Renderers are pure and return lines; [`emit`] writes them through
//! `tracing` under [`OUTPUT_TARGET`], which the subscriber routes to stdout
//! while diagnostics go to stderr.

use mymovies_api::cards::MovieCard;
use mymovies_api::notify::Notification;
use mymovies_api::omdb::{MovieDetail, SearchQuery, SearchResultItem};
use mymovies_api::{ApiResult, FailureKind};

/// Tracing target for user-facing output.
pub const OUTPUT_TARGET: &str = "mymovies::output";

/// Shown when a search yields nothing to list.
pub const NO_RESULTS: &str = "No results found.";

/// Shown when the notification feed is empty.
pub const NO_NOTIFICATIONS: &str = "No new notifications";

/// Returns `true` for provider messages that mean "no matches"
/// (`Movie not found!`, `Series not found!`).
fn is_no_match(message: &str) -> bool {
    message.to_ascii_lowercase().contains("not found")
}

/// Renders a failed search.
///
/// Only "no matches" answers get the [`NO_RESULTS`] prefix; anything else
/// (bad key, too many results, outage) is shown on its own.
fn render_search_failure(kind: FailureKind, message: &str) -> Vec<String> {
    match kind {
        FailureKind::Provider if is_no_match(message) => {
            vec![String::from(NO_RESULTS), format!("({message})")]
        }
        FailureKind::Provider | FailureKind::Transport => vec![String::from(message)],
    }
}

/// Renders a search outcome.
pub fn render_search(
    query: &SearchQuery,
    result: &ApiResult<Vec<SearchResultItem>>,
) -> Vec<String> {
    match result {
        ApiResult::Success { data } if data.is_empty() => vec![String::from(NO_RESULTS)],
        ApiResult::Success { data } => {
            let mut lines = Vec::with_capacity(data.len().saturating_add(3));
            lines.push(format!("Results for \"{query}\""));
            lines.push(String::from("ID\t\tTitle\t\t\tYear\tType\tPoster"));
            lines.extend(data.iter().map(|item| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    item.id,
                    item.title,
                    item.year.as_deref().unwrap_or("-"),
                    item.media_type.as_deref().unwrap_or("-"),
                    item.poster_or_placeholder(),
                )
            }));
            lines.push(format!("Total: {} results", data.len()));
            lines
        }
        ApiResult::Failure { kind, message } => render_search_failure(*kind, message),
    }
}

/// Renders enriched result cards.
pub fn render_cards(query: &SearchQuery, cards: &[MovieCard]) -> Vec<String> {
    if cards.is_empty() {
        return vec![String::from(NO_RESULTS)];
    }

    let mut lines = Vec::with_capacity(cards.len().saturating_add(2));
    lines.push(format!("Results for \"{query}\""));
    lines.extend(cards.iter().map(|card| {
        format!(
            "{}\t{}\tRating: {}\tReleased: {}",
            card.item.id,
            card.item.title,
            card.rating_label(),
            card.released_label(),
        )
    }));
    lines.push(format!("Total: {} results", cards.len()));
    lines
}

/// Renders a detail outcome.
pub fn render_detail(result: &ApiResult<MovieDetail>) -> Vec<String> {
    let movie = match result {
        ApiResult::Success { data } => data,
        ApiResult::Failure { message, .. } => return vec![message.clone()],
    };

    let mut lines = vec![
        movie.title.clone(),
        String::from("Plot Summary:"),
        format!("  {}", movie.plot.as_deref().unwrap_or("-")),
    ];

    if movie.genres.is_empty() {
        lines.push(String::from("Genres: -"));
    } else {
        lines.push(format!("Genres: {}", movie.genres.join(", ")));
    }

    lines.push(format!(
        "IMDb Rating: {}",
        movie.imdb_rating.as_deref().unwrap_or("No rating")
    ));

    lines.push(String::from("Cast:"));
    if movie.cast.is_empty() {
        lines.push(String::from("  -"));
    }
    lines.extend(
        movie
            .cast
            .iter()
            .map(|member| format!("  {} as {}", member.name, member.role)),
    );

    lines.push(String::from("Ratings:"));
    if movie.ratings.is_empty() {
        lines.push(String::from("  -"));
    }
    lines.extend(
        movie
            .ratings
            .iter()
            .map(|rating| format!("  {}: {}", rating.source, rating.value)),
    );

    lines.push(format!(
        "Release Date: {}",
        movie.release_date.as_deref().unwrap_or("-")
    ));
    lines.push(format!("Poster: {}", movie.poster_or_placeholder()));
    lines
}

/// Renders the notification feed.
pub fn render_notifications(result: &ApiResult<Vec<Notification>>) -> Vec<String> {
    match result {
        ApiResult::Success { data } if data.is_empty() => vec![String::from(NO_NOTIFICATIONS)],
        ApiResult::Success { data } => {
            let mut lines = Vec::with_capacity(data.len().saturating_add(1));
            lines.push(format!("Notifications ({}):", data.len()));
            lines.extend(
                data.iter()
                    .map(|n| format!("  [{}] {} ({})", n.kind, n.message, n.image)),
            );
            lines
        }
        ApiResult::Failure { message, .. } => vec![message.clone()],
    }
}

/// Writes rendered lines to the output target.
pub fn emit(lines: &[String]) {
    for line in lines {
        tracing::info!(target: OUTPUT_TARGET, "{}", line);
    }
}
