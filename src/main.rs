use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use importrack::cli::product::{AddProductArgs, UpdateProductArgs};
use importrack::cli::shipping::{AddShipmentArgs, UpdateShipmentArgs};
use importrack::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display stock levels
    Stock {
        /// Only show products whose name or SKU contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Display cost, selling price and margin per product
    Pricing {
        /// Only show products whose name or SKU contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Display shipments and their status
    Shipments,
    /// Display the stock change log
    History {
        /// Limit to one product
        product_id: Option<String>,
    },
    /// Set the RMB to IDR exchange rate and reprice all products
    Rate {
        /// IDR per 1 RMB
        rate: f64,
    },
    /// Add or edit products
    #[command(subcommand)]
    Product(ProductCommands),
    /// Add or edit shipments
    #[command(subcommand)]
    Shipment(ShipmentCommands),
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Add a new product
    Add(AddProductArgs),
    /// Change fields of an existing product
    Update(UpdateProductArgs),
}

#[derive(Subcommand)]
enum ShipmentCommands {
    /// Add a new shipment
    Add(AddShipmentArgs),
    /// Change fields of an existing shipment
    Update(UpdateShipmentArgs),
}

impl From<Commands> for importrack::AppCommand {
    fn from(cmd: Commands) -> importrack::AppCommand {
        match cmd {
            Commands::Stock { search } => importrack::AppCommand::Stock { search },
            Commands::Pricing { search } => importrack::AppCommand::Pricing { search },
            Commands::Shipments => importrack::AppCommand::Shipments,
            Commands::History { product_id } => importrack::AppCommand::History { product_id },
            Commands::Rate { rate } => importrack::AppCommand::Rate { rate },
            Commands::Product(ProductCommands::Add(args)) => {
                importrack::AppCommand::AddProduct(args)
            }
            Commands::Product(ProductCommands::Update(args)) => {
                importrack::AppCommand::UpdateProduct(args)
            }
            Commands::Shipment(ShipmentCommands::Add(args)) => {
                importrack::AppCommand::AddShipment(args)
            }
            Commands::Shipment(ShipmentCommands::Update(args)) => {
                importrack::AppCommand::UpdateShipment(args)
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => importrack::cli::setup::setup(),
        Some(cmd) => importrack::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
