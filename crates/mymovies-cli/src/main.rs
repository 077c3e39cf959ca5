//! mymovies - movie search and detail CLI backed by OMDb.

/// Application configuration (TOML).
mod config;
/// Text rendering of client results.
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::{EnvFilter, FilterExt, filter_fn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::{API_KEY_ENV, AppConfig, resolve_config_path};
use crate::render::{
    OUTPUT_TARGET, emit, render_cards, render_detail, render_notifications, render_search,
};
use mymovies_api::ApiResult;
use mymovies_api::cards::enrich_cards;
use mymovies_api::notify::fetch_notifications;
use mymovies_api::omdb::{LocalMovieApi, MovieId, OmdbClient, SearchQuery};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search titles by free text.
    Search(SearchArgs),
    /// Show the full record of one title.
    Details(DetailsArgs),
    /// Show the notification feed.
    Notifications(NotificationsArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search text (e.g. "Matrix"). Surrounding whitespace is ignored.
    #[arg(long, short, required = true)]
    query: String,

    /// Also look up each match's rating and release date (one request per match).
    #[arg(long)]
    cards: bool,
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// IMDb identifier (e.g. "tt0133093").
    #[arg(long, required = true)]
    id: String,
}

/// Arguments for the `notifications` subcommand.
#[derive(clap::Args)]
struct NotificationsArgs {
    /// Seed for category assignment. Falls back to config, then 0.
    #[arg(long)]
    seed: Option<u64>,
}

/// Builds an `OmdbClient` from the loaded config.
///
/// The API key comes from `OMDB_API_KEY` if set, else from `[omdb] api_key`.
///
/// # Errors
///
/// Returns an error if no API key is available, the base URL override is
/// invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_client(config: &AppConfig) -> Result<OmdbClient> {
    let api_key = config.resolve_api_key(std::env::var(API_KEY_ENV).ok())?;

    let mut builder = OmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(url) = config.base_url()? {
        tracing::debug!(base_url = %url, "Using configured OMDb base URL");
        builder = builder.base_url(url);
    }

    builder.build().context("failed to build OMDb client")
}

/// Loads `config.toml` from the resolved config directory.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the query is blank or the client cannot be built.
/// Provider and transport failures are rendered, not returned.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let query = SearchQuery::new(&args.query).context("search query must not be empty")?;

    let config = load_config(dir)?;
    let client = build_client(&config)?;

    let lines = match client.search_movies(&query).await {
        ApiResult::Success { data } if args.cards => {
            render_cards(&query, &enrich_cards(&client, data).await)
        }
        other => render_search(&query, &other),
    };
    emit(&lines);

    Ok(())
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the id is blank or the client cannot be built.
/// Provider and transport failures are rendered, not returned.
#[instrument(skip_all)]
async fn run_details(args: &DetailsArgs, dir: Option<&PathBuf>) -> Result<()> {
    let id = MovieId::new(&args.id).context("movie id must not be empty")?;

    let config = load_config(dir)?;
    let client = build_client(&config)?;

    let result = client.fetch_movie_detail(&id).await;
    emit(&render_detail(&result));

    Ok(())
}

/// Runs the `notifications` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built.
#[instrument(skip_all)]
async fn run_notifications(args: &NotificationsArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_client(&config)?;

    let seed = args.seed.or(config.notifications.seed).unwrap_or_default();
    tracing::debug!(seed, "Building notification feed");

    let result = fetch_notifications(&client, seed).await;
    emit(&render_notifications(&result));

    Ok(())
}

/// Installs the global tracing subscriber.
///
/// Rendered output (target [`OUTPUT_TARGET`]) goes to stdout as plain
/// lines; diagnostics go to stderr, filtered by `RUST_LOG` (default
/// `info`). With the `otel` feature, spans are also exported over
/// OTLP/HTTP when `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let output_layer = fmt::layer()
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stdout)
        .with_filter(filter_fn(|meta| meta.target() == OUTPUT_TARGET));

    let diagnostics_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter.and(filter_fn(|meta| meta.target() != OUTPUT_TARGET)));

    #[cfg(feature = "otel")]
    let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .and_then(|_| {
            let exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_http()
                .build()
                .ok()?;

            let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                .with_simple_exporter(exporter)
                .build();

            let tracer =
                opentelemetry::trace::TracerProvider::tracer(&tracer_provider, env!("CARGO_PKG_NAME"));
            opentelemetry::global::set_tracer_provider(tracer_provider);

            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        });

    let registry = tracing_subscriber::registry()
        .with(output_layer)
        .with(diagnostics_layer);

    #[cfg(feature = "otel")]
    registry.with(otel_layer).init();

    #[cfg(not(feature = "otel"))]
    registry.init();
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(&args, cli.dir.as_ref()).await,
        Commands::Details(args) => run_details(&args, cli.dir.as_ref()).await,
        Commands::Notifications(args) => run_notifications(&args, cli.dir.as_ref()).await,
    }
}
