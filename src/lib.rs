pub mod cli;
pub mod core;
pub mod store;

use crate::core::ExchangeRate;
use crate::core::config::AppConfig;
use crate::store::seed::Seed;
use crate::store::{DiskCollection, Inventory, Storage};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Stock { search: Option<String> },
    Pricing { search: Option<String> },
    Shipments,
    History { product_id: Option<String> },
    Rate { rate: f64 },
    AddProduct(cli::product::AddProductArgs),
    UpdateProduct(cli::product::UpdateProductArgs),
    AddShipment(cli::shipping::AddShipmentArgs),
    UpdateShipment(cli::shipping::UpdateShipmentArgs),
}

/// Opens the on-disk inventory for `config` and seeds it on first use.
pub fn open_inventory(config: &AppConfig) -> Result<Inventory> {
    let data_path = config.default_data_path()?;
    let collection = DiskCollection::open(&data_path.join("db"))
        .with_context(|| format!("Failed to open inventory at {}", data_path.display()))?;
    let inventory = Inventory::new(Storage::new(Arc::new(collection)));

    let seed_rate = ExchangeRate::new(config.default_rate, Utc::now())?;
    inventory.initialize(Seed::new(seed_rate));
    Ok(inventory)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("importrack starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let inventory = open_inventory(&config)?;
    let thresholds = &config.thresholds;

    match command {
        AppCommand::Stock { search } => cli::stock::run(&inventory, search.as_deref(), thresholds),
        AppCommand::Pricing { search } => {
            cli::pricing::run(&inventory, search.as_deref(), thresholds)
        }
        AppCommand::Shipments => cli::shipping::run(&inventory),
        AppCommand::History { product_id } => cli::history::run(&inventory, product_id.as_deref()),
        AppCommand::Rate { rate } => cli::pricing::update_rate(&inventory, rate),
        AppCommand::AddProduct(args) => cli::product::add(&inventory, args),
        AppCommand::UpdateProduct(args) => cli::product::update(&inventory, args),
        AppCommand::AddShipment(args) => cli::shipping::add(&inventory, args),
        AppCommand::UpdateShipment(args) => cli::shipping::update(&inventory, args),
    }
}
