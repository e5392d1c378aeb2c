//! Command-line frontend for the molecular weight calculator.

use clap::{Parser, Subcommand};
use mw_app::{AppError, AppResult, compute_weight};
use mw_elements::{PeriodicTable, filter_periodic_table};
use mw_formula::Composition;

#[derive(Parser)]
#[command(name = "mw-cli")]
#[command(about = "Molecular weight calculator - chemical formula tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the molecular weight of a formula
    Weight {
        /// Chemical formula, e.g. "CuSO4.5H2O"
        formula: String,
    },
    /// Show the element counts of a formula
    Compose {
        /// Chemical formula, e.g. "Mg(OH)2"
        formula: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List elements of the periodic table
    Elements {
        /// Case-insensitive symbol or name filter
        query: Option<String>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Weight { formula } => cmd_weight(&formula),
        Commands::Compose { formula, json } => cmd_compose(&formula, json),
        Commands::Elements { query } => cmd_elements(query.as_deref().unwrap_or("")),
    }
}

fn cmd_weight(formula: &str) -> AppResult<()> {
    let table = PeriodicTable::new();
    let weight = compute_weight(formula, &table)?;
    println!("{}: {:.3} amu", formula, weight);
    Ok(())
}

fn cmd_compose(formula: &str, json: bool) -> AppResult<()> {
    let composition = Composition::parse(formula)?;

    if json {
        let body = serde_json::to_string_pretty(&composition).map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?;
        println!("{}", body);
    } else {
        for (symbol, count) in composition.iter() {
            println!("{:<3} {}", symbol, count);
        }
    }
    Ok(())
}

fn cmd_elements(query: &str) -> AppResult<()> {
    let entries = filter_periodic_table(query);

    if entries.is_empty() {
        println!("No elements match '{}'", query);
    } else {
        for record in entries {
            println!(
                "{:>3}  {:<3} {:<14} {:>10.4}",
                record.atomic_number, record.symbol, record.name, record.atomic_weight
            );
        }
    }
    Ok(())
}
