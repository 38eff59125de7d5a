use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use recipecart::config::EngineConfig;
use recipecart::ingredient_model::{IngredientList, MeasurementSystem};
use recipecart::shopping::{cart_quantity, infer_measurement_system, search_term};
use recipecart::RecipeEngine;

#[derive(Parser)]
#[command(name = "recipecart")]
#[command(about = "Parse, scale and convert recipe ingredient lists.")]
struct CommandLine {
    /// Ingredient file, one ingredient per line (reads stdin when omitted)
    file: Option<PathBuf>,
    /// Convert amounts to this measurement system
    #[arg(long, value_enum)]
    system: Option<System>,
    /// Serving multiplier
    #[arg(long)]
    multiplier: Option<f64>,
    /// Print the parsed ingredients as JSON
    #[arg(long, conflicts_with = "search")]
    json: bool,
    /// Print a product search term and cart quantity per ingredient
    #[arg(long)]
    search: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum System {
    Us,
    Metric,
}

impl From<System> for MeasurementSystem {
    fn from(system: System) -> Self {
        match system {
            System::Us => MeasurementSystem::Us,
            System::Metric => MeasurementSystem::Metric,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if env::var("RECIPECART_LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();
    init_logging();

    let args = CommandLine::parse();

    let mut config = EngineConfig::from_env().context("Invalid RECIPECART_* environment")?;
    if let Some(system) = args.system {
        config.target_system = Some(system.into());
    }
    if let Some(multiplier) = args.multiplier {
        config.multiplier = multiplier;
    }
    let engine = RecipeEngine::with_config(config).context("Invalid engine configuration")?;

    let parsed = match &args.file {
        Some(path) => engine.read_ingredient_file(path)?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read ingredients from stdin")?;
            engine.parse_ingredient_list(&text)
        }
    };

    info!(
        "Recipe appears to use {} measurements",
        infer_measurement_system(&parsed.ingredients)
    );

    if args.search {
        print_search_terms(&parsed, engine.config().multiplier);
        return Ok(());
    }

    let adjusted = engine.apply_config(&parsed);
    if args.json {
        let json = serde_json::to_string_pretty(&adjusted).context("Failed to serialize ingredients")?;
        println!("{json}");
    } else {
        println!("{}", adjusted.to_clipboard_text());
    }

    Ok(())
}

fn print_search_terms(list: &IngredientList, multiplier: f64) {
    for ingredient in &list.ingredients {
        let term = search_term(&ingredient.name);
        if term.is_empty() {
            continue;
        }
        println!("{}\t{}", cart_quantity(ingredient, multiplier), term);
    }
}
