use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use vapeshop_core::ProductId;
use vapeshop_inventory::{StockLevels, StockStatus};
use vapeshop_products::{Product, catalog_report, parse_catalog};

#[derive(Debug, Parser)]
#[command(name = "vapeshop")]
#[command(about = "Inventory availability tools for the vapeshop catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single stock record.
    Status {
        #[arg(long)]
        inventory: u32,
        #[arg(long, default_value_t = 0)]
        reserved: u32,
        #[arg(long, default_value_t = vapeshop_products::DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: u32,
    },
    /// Stock report over a catalog export (JSON array of product records).
    Report {
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Flavor selector entries for one product of a catalog export.
    Flavors {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        product: ProductId,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusOutput {
    available_inventory: u32,
    over_reserved_units: u32,
    status: StockStatus,
}

fn main() -> anyhow::Result<()> {
    vapeshop_observability::init();

    let cli = Cli::parse();
    let output = run(cli.command)?;
    println!("{output}");

    Ok(())
}

fn run(command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Status {
            inventory,
            reserved,
            threshold,
        } => {
            let stock = StockLevels::new(inventory, reserved, threshold);
            let output = StatusOutput {
                available_inventory: stock.available(),
                over_reserved_units: vapeshop_inventory::over_reserved_units(&stock),
                status: stock.status(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        Commands::Report { catalog } => {
            let products = load_catalog(&catalog)?;
            let report = catalog_report(&products);
            tracing::info!(
                products = products.len(),
                reorder = report.reorder.len(),
                unavailable = report.unavailable.len(),
                "stock report generated"
            );
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Commands::Flavors { catalog, product } => {
            let products = load_catalog(&catalog)?;
            let product = products
                .iter()
                .find(|p| p.id_typed() == product)
                .with_context(|| format!("product {product} not found in {}", catalog.display()))?;
            Ok(serde_json::to_string_pretty(&product.flavor_options())?)
        }
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let products =
        parse_catalog(&raw).with_context(|| format!("invalid catalog {}", path.display()))?;
    Ok(products)
}
