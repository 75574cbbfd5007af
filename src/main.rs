use anyhow::Context;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lab_match::{Rgb, SearchError, SearchQuery};
use swatchfinder::error::FinderError;
use swatchfinder::models::AppConfig;
use swatchfinder::services::{
    report, HttpCatalog, JsonFileStore, RefreshService, SwatchFinder, SwatchRepository,
};

#[derive(Parser)]
#[command(name = "swatchfinder")]
#[command(about = "Find the filament swatches perceptually closest to a color")]
struct Cli {
    /// More detailed logging to the console
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config.yaml (default: $SWATCHFINDER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download all swatches from the catalog, replacing the local copy
    Update,
    /// Find the swatches closest to a color
    Search {
        /// Color as six hex digits, with or without a leading '#'
        color: String,

        /// "hue" (lightness matters less) or "absolute" (hue and lightness)
        #[arg(short, long)]
        method: Option<String>,

        /// Swatch IDs to leave out of the results
        #[arg(short = 'x', long, num_args = 1..)]
        exclude: Vec<u32>,

        /// Number of matches to show
        #[arg(short, long)]
        top_n: Option<NonZeroUsize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .or_else(|| std::env::var("SWATCHFINDER_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());
    config.validate().context("Invalid configuration")?;

    let store = Arc::new(JsonFileStore::new(&config.store.path));

    match cli.command {
        Some(Commands::Update) => run_update(&config, store).await,
        Some(Commands::Search {
            color,
            method,
            exclude,
            top_n,
        }) => run_search(&config, store, &color, method.as_deref(), exclude, top_n).await,
        None => run_status(store).await,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "swatchfinder=debug"
    } else {
        "swatchfinder=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

async fn run_update(config: &AppConfig, store: Arc<JsonFileStore>) -> anyhow::Result<()> {
    let catalog = Arc::new(HttpCatalog::new(&config.catalog).context("Failed to build HTTP client")?);
    let service = RefreshService::new(catalog, store, config.catalog.clone());

    let summary = service
        .refresh()
        .await
        .context("Failed to refresh swatches")?;

    if summary.skipped > 0 {
        println!(
            "Skipped {} catalog records that were not valid swatches.",
            summary.skipped
        );
    }
    if summary.duplicates > 0 {
        println!(
            "Replaced {} catalog records that repeated an earlier swatch id.",
            summary.duplicates
        );
    }
    println!("There are now {} swatches available.", summary.stored);
    Ok(())
}

async fn run_search(
    config: &AppConfig,
    store: Arc<JsonFileStore>,
    color: &str,
    method: Option<&str>,
    exclude: Vec<u32>,
    top_n: Option<NonZeroUsize>,
) -> anyhow::Result<()> {
    let color = color
        .parse::<Rgb>()
        .map_err(SearchError::from)
        .with_context(|| format!("Cannot search for {color:?}"))?;
    let method = config.search.method(method).context("Cannot search")?;

    let query = SearchQuery::new(color)
        .with_method(method)
        .excluding(exclude)
        .with_count(top_n.unwrap_or_else(|| config.search.top_n()));

    let finder = SwatchFinder::new(store.clone());
    match finder.find(&query).await {
        Ok(outcome) => {
            println!(
                "There are currently {} swatches available.",
                outcome.available
            );
            println!("{}", report::render(&query, &outcome.result));
            Ok(())
        }
        Err(FinderError::Search(SearchError::EmptyRepository)) => {
            println!("{}", report::empty_store(store.refreshed_at().await?));
            Ok(())
        }
        Err(e) => Err(e).context("Search failed"),
    }
}

async fn run_status(store: Arc<JsonFileStore>) -> anyhow::Result<()> {
    let snapshot = store
        .all_swatches()
        .await
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    match store.refreshed_at().await? {
        Some(when) => {
            println!(
                "There are currently {} swatches available (refreshed {}).",
                snapshot.len(),
                when.format("%Y-%m-%d %H:%M UTC")
            );
        }
        None => println!("There is no local database yet."),
    }
    println!("Run `swatchfinder --help` for usage.");
    Ok(())
}
