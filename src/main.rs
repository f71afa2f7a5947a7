use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use trip_suggest::{CatalogCache, EngineConfig, RecommendError, Recommendation, Recommender, TravelerState};

#[derive(Debug, Parser)]
#[command(
    name = "trip-suggest",
    about = "Suggest cities in your planned countries, ranked by similarity to past trips",
    after_help = "Example:\n  trip-suggest --catalog country_cities.json --state state.json --pretty"
)]
struct Cli {
    /// Country -> city list JSON file
    #[arg(long)]
    catalog: PathBuf,

    /// Traveler state JSON file (visited, planned, trips)
    #[arg(long)]
    state: PathBuf,

    /// Engine configuration TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn run(cli: &Cli) -> Result<Recommendation, RecommendError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let recommender = Recommender::new(config)?;
    let state = TravelerState::load(&cli.state)?;
    let catalog = CatalogCache::new(&cli.catalog).get()?;
    recommender.recommend(&state.trips_newest_first(), &state.planned, &catalog)
}

fn main() -> ExitCode {
    // stderr keeps stdout machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (body, code) = match run(&cli) {
        Ok(rec) => {
            let mut body = json!({ "ok": true, "suggestions": rec.suggestions });
            if let Some(note) = rec.note {
                body["note"] = json!(note);
            }
            (body, ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, "recommendation failed");
            let code = if err.is_client_error() { 2 } else { 1 };
            (json!({ "ok": false, "error": err.user_message() }), ExitCode::from(code))
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    };
    match rendered {
        Ok(text) => {
            println!("{text}");
            code
        }
        Err(err) => {
            eprintln!("failed to render output: {err}");
            ExitCode::FAILURE
        }
    }
}
