use super::ui;
use crate::core::history::StockUpdate;
use crate::core::product::Product;
use crate::store::Inventory;
use anyhow::{Result, bail};
use comfy_table::{Cell, Color};
use std::collections::HashMap;

pub fn render(updates: &[StockUpdate], products: &[Product]) -> String {
    let names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("When"),
        ui::header_cell("Product"),
        ui::header_cell("Type"),
        ui::header_cell("Before"),
        ui::header_cell("After"),
        ui::header_cell("Change"),
        ui::header_cell("Notes"),
    ]);

    for update in updates {
        let product = names
            .get(update.product_id.as_str())
            .map_or_else(|| update.product_id.clone(), |name| name.to_string());
        let delta = update.delta();
        let change = ui::number_cell(format!("{delta:+}"));
        let change = if delta < 0 {
            change.fg(Color::Red)
        } else {
            change.fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(update.timestamp.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(product),
            Cell::new(update.update_type.to_string()),
            ui::number_cell(update.previous_stock),
            ui::number_cell(update.new_stock),
            change,
            Cell::new(update.notes.as_deref().unwrap_or_default()),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Stock History", ui::StyleType::Title),
        table
    )
}

pub fn run(inventory: &Inventory, product_id: Option<&str>) -> Result<()> {
    let updates = match product_id {
        Some(id) => {
            if inventory.product(id).is_none() {
                bail!("Unknown product: {id}");
            }
            inventory.stock_history(id)
        }
        None => inventory.stock_updates(),
    };
    if updates.is_empty() {
        println!(
            "{}",
            ui::style_text("No stock changes recorded yet", ui::StyleType::Subtle)
        );
        return Ok(());
    }
    println!("{}", render(&updates, &inventory.products()));
    Ok(())
}
