use super::ui;
use crate::core::error::InventoryError;
use crate::core::product::{NewProduct, ProductUpdate};
use crate::store::Inventory;
use anyhow::{Result, bail};
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct AddProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub sku: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value_t = 0)]
    pub initial_stock: u32,
    #[arg(long, default_value_t = 0)]
    pub stock_out: u32,
    #[arg(long, default_value_t = 0)]
    pub pending_stock: u32,
    /// Unit cost in RMB
    #[arg(long)]
    pub cost_rmb: f64,
    /// Unit selling price in IDR
    #[arg(long)]
    pub selling_price: i64,
    #[arg(long)]
    pub batch_number: Option<String>,
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateProductArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub initial_stock: Option<u32>,
    #[arg(long)]
    pub stock_out: Option<u32>,
    #[arg(long)]
    pub pending_stock: Option<u32>,
    #[arg(long)]
    pub cost_rmb: Option<f64>,
    #[arg(long)]
    pub selling_price: Option<i64>,
    #[arg(long)]
    pub batch_number: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddProductArgs> for NewProduct {
    fn from(args: AddProductArgs) -> Self {
        NewProduct {
            name: args.name,
            sku: args.sku,
            initial_stock: args.initial_stock,
            stock_out: args.stock_out,
            pending_stock: args.pending_stock,
            notes: args.notes,
            batch_number: args.batch_number,
            category: args.category,
            cost_price_rmb: args.cost_rmb,
            selling_price: args.selling_price,
        }
    }
}

impl From<UpdateProductArgs> for ProductUpdate {
    fn from(args: UpdateProductArgs) -> Self {
        ProductUpdate {
            name: args.name,
            sku: args.sku,
            initial_stock: args.initial_stock,
            stock_out: args.stock_out,
            pending_stock: args.pending_stock,
            notes: args.notes,
            batch_number: args.batch_number,
            category: args.category,
            cost_price_rmb: args.cost_rmb,
            selling_price: args.selling_price,
        }
    }
}

fn check_cost(cost_rmb: f64) -> Result<(), InventoryError> {
    if !cost_rmb.is_finite() || cost_rmb < 0.0 {
        return Err(InventoryError::InvalidInput(format!(
            "cost price must be a non-negative number, got {cost_rmb}"
        )));
    }
    Ok(())
}

fn check_selling_price(selling_price: i64) -> Result<(), InventoryError> {
    if selling_price < 0 {
        return Err(InventoryError::InvalidInput(format!(
            "selling price must not be negative, got {selling_price}"
        )));
    }
    Ok(())
}

pub fn add(inventory: &Inventory, args: AddProductArgs) -> Result<()> {
    check_cost(args.cost_rmb)?;
    check_selling_price(args.selling_price)?;
    let product = inventory.add_product(args.into());
    println!(
        "Added product {} ({}): real stock {}, cost {}, margin {}%",
        product.id,
        product.sku,
        product.real_stock,
        ui::format_idr(product.cost_price_idr),
        product.margin
    );
    Ok(())
}

pub fn update(inventory: &Inventory, args: UpdateProductArgs) -> Result<()> {
    if let Some(cost_rmb) = args.cost_rmb {
        check_cost(cost_rmb)?;
    }
    if let Some(selling_price) = args.selling_price {
        check_selling_price(selling_price)?;
    }
    let id = args.id.clone();
    let update = ProductUpdate::from(args);
    if update.is_empty() {
        bail!("Nothing to update for product {id}");
    }
    let product = inventory.update_product(&id, update)?;
    println!(
        "Updated product {} ({}): real stock {}, cost {}, margin {}%",
        product.id,
        product.sku,
        product.real_stock,
        ui::format_idr(product.cost_price_idr),
        product.margin
    );
    Ok(())
}
