//! CLI Adapter.

mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, CatalogView, LikeAction, ViewOptions};
use crate::app::controller::RequestOutcome;
use crate::app::logging;
use crate::domain::configuration::{load_config, parse_api_url};
use crate::domain::{AppError, CarId, ShowroomConfig, SortKey};

#[derive(Parser)]
#[command(name = "showroom")]
#[command(version)]
#[command(about = "Browse, filter, sort, and like cars from a showroom backend", long_about = None)]
struct Cli {
    /// Path to a showroom.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Backend base URL (overrides config and SHOWROOM_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cars matching the filters
    #[clap(visible_alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Like a car, then list
    Like {
        /// Car identifier
        id: CarId,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Unlike a car, then list
    Unlike {
        /// Car identifier
        id: CarId,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Like a car if it is not liked yet, unlike it otherwise, then list
    #[clap(visible_alias = "t")]
    Toggle {
        /// Car identifier
        id: CarId,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct ViewArgs {
    /// Only show cars with this engine (e.g. V6, V8, Electric)
    #[arg(short, long)]
    engine: Option<String>,
    /// Only show cars with this body type (e.g. Sedan, SUV, Sports)
    #[arg(short = 't', long = "type")]
    body_type: Option<String>,
    /// Lower price bound (inclusive)
    #[arg(long)]
    min_price: Option<f64>,
    /// Upper price bound (inclusive)
    #[arg(long)]
    max_price: Option<f64>,
    /// Sort by: none, engine, type, price
    #[arg(short, long, default_value = "none")]
    sort: SortKey,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl ViewArgs {
    fn options(&self) -> ViewOptions {
        ViewOptions {
            engine: self.engine.clone(),
            body_type: self.body_type.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            sort: self.sort,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(cli.config.as_deref(), cli.api_url.as_deref())?;

    let (view, args) = match cli.command {
        Commands::List { view } => (api::browse(&config, &view.options())?, view),
        Commands::Like { id, view } => (like(&config, &id, LikeAction::Like, &view)?, view),
        Commands::Unlike { id, view } => (like(&config, &id, LikeAction::Unlike, &view)?, view),
        Commands::Toggle { id, view } => (like(&config, &id, LikeAction::Toggle, &view)?, view),
    };

    print_view(&view, args.json)
}

fn like(
    config: &ShowroomConfig,
    id: &CarId,
    action: LikeAction,
    args: &ViewArgs,
) -> Result<CatalogView, AppError> {
    let view = api::update_like(config, id, action, &args.options())?;
    match view.request {
        Some(RequestOutcome::Ignored) => {
            eprintln!("⚠️  Car {} is not in the catalog; nothing was sent", id);
        }
        Some(RequestOutcome::Failed) => {
            eprintln!("⚠️  Could not update car {}; showing the last known catalog", id);
        }
        _ => {}
    }
    Ok(view)
}

fn resolve_config(
    path: Option<&std::path::Path>,
    api_url: Option<&str>,
) -> Result<ShowroomConfig, AppError> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(path, &cwd)?;
    if let Some(raw) = api_url {
        config.api.base_url = parse_api_url(raw)?;
        config.validate()?;
    }
    Ok(config)
}

fn print_view(view: &CatalogView, json: bool) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(view)
            .map_err(|e| AppError::Configuration(format!("Failed to serialize output: {}", e)))?;
        println!("{}", rendered);
    } else {
        print!("{}", render::render_text(view));
    }
    Ok(())
}
