//! Autoposter binary entry point
//!
//! Wires real (or mock-mode) service implementations into the poster and
//! runs a single publish cycle. Exits zero only when the run reached
//! history persistence.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::signal;
use tracing::{info, warn};
use url::Url;

use autoposter::cancel::{self, CancelToken};
use autoposter::poster_impl::log_outcome;
use autoposter::services::{
    FileHistoryStore, HandlebarsRenderer, HttpPublisher, JsonCandidateSource, MemoryHistoryStore,
    NoopPublisher, SourceLocation,
};
use autoposter::traits::{CandidateSource, HistoryStore, Publisher, Renderer};
use autoposter::{Poster, PosterError, PosterResult, RunReport};

/// Posts one randomly selected, never-before-used entry from a JSON list
#[derive(Parser)]
#[command(name = "autoposter")]
#[command(about = "Sends a randomly selected post from a JSON array of candidates")]
struct Args {
    /// Mock mode: skip the network publish and use a deterministic RNG
    #[arg(long)]
    mock: bool,

    /// Candidate source: a file path, an http(s) URL, or `-` for stdin
    #[arg(long, default_value = "-")]
    src: String,

    /// Template for the post text, with {{field}} substitution
    #[arg(long)]
    template: String,

    /// Directory holding the persisted history (required unless --mock)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Store key identifying this publisher's history
    #[arg(long, default_value = "prior-posts")]
    history_key: String,

    /// Publish endpoint URL (required unless --mock)
    #[arg(long)]
    api_url: Option<Url>,

    /// Access token for the publish endpoint
    /// (falls back to AUTOPOSTER_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,

    /// Fixed RNG seed for reproducible selection
    #[arg(long)]
    seed: Option<u64>,

    /// Overall run deadline in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // A .env file is optional; real environments set variables directly.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    autoposter::logging::init_tracing(&args.log_level);

    let result = run(args).await;
    log_outcome(&result);
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> PosterResult<RunReport> {
    let location: SourceLocation = args.src.parse()?;
    let source = JsonCandidateSource::new(location);
    let renderer = HandlebarsRenderer::new(&args.template)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        // Mock runs are reproducible by default; live runs must not be.
        None if args.mock => StdRng::seed_from_u64(0),
        None => StdRng::from_entropy(),
    };

    let cancel = spawn_cancel_task(Duration::from_secs(args.timeout_secs));

    if args.mock {
        info!("mock mode: publishing is a no-op");
        let publisher = NoopPublisher::new();
        return match args.store_dir {
            Some(dir) => {
                exec(FileHistoryStore::new(dir), source, renderer, publisher, args.history_key, rng, cancel).await
            }
            None => {
                warn!("no --store-dir given; history will not survive this process");
                exec(MemoryHistoryStore::new(), source, renderer, publisher, args.history_key, rng, cancel).await
            }
        };
    }

    let store_dir = args.store_dir.ok_or_else(|| PosterError::ConfigError {
        message: "--store-dir is required unless --mock is set".to_string(),
    })?;
    let api_url = args.api_url.ok_or_else(|| PosterError::ConfigError {
        message: "--api-url is required unless --mock is set".to_string(),
    })?;
    let access_token = args
        .access_token
        .or_else(|| env::var("AUTOPOSTER_ACCESS_TOKEN").ok())
        .ok_or_else(|| PosterError::ConfigError {
            message: "an access token is required: pass --access-token or set AUTOPOSTER_ACCESS_TOKEN"
                .to_string(),
        })?;

    let store = FileHistoryStore::new(store_dir);
    let publisher = HttpPublisher::new(api_url, access_token);
    exec(store, source, renderer, publisher, args.history_key, rng, cancel).await
}

async fn exec<S, C, R, P>(
    store: S,
    source: C,
    renderer: R,
    publisher: P,
    history_key: String,
    rng: StdRng,
    cancel: CancelToken,
) -> PosterResult<RunReport>
where
    S: HistoryStore,
    C: CandidateSource,
    R: Renderer,
    P: Publisher,
{
    let mut poster = Poster::new(store, source, renderer, publisher, history_key, rng);
    poster.run(&cancel).await
}

/// Fan Ctrl-C and the run deadline into one cancellation token.
fn spawn_cancel_task(deadline: Duration) -> CancelToken {
    let (handle, token) = cancel::channel();
    tokio::spawn(async move {
        tokio::select! {
            _ = signal::ctrl_c() => info!("interrupt received, aborting run"),
            _ = tokio::time::sleep(deadline) => warn!("run deadline of {deadline:?} elapsed, aborting"),
        }
        handle.cancel();
    });
    token
}
