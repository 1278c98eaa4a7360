use super::ui;
use crate::core::analytics::{self, MarginBand};
use crate::core::config::Thresholds;
use crate::core::currency::ExchangeRate;
use crate::core::product::Product;
use crate::store::Inventory;
use anyhow::Result;
use comfy_table::Cell;

pub fn render(products: &[Product], rate: &ExchangeRate, thresholds: &Thresholds) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Product"),
        ui::header_cell("SKU"),
        ui::header_cell("Cost (RMB)"),
        ui::header_cell("Cost (IDR)"),
        ui::header_cell("Selling Price"),
        ui::header_cell("Margin"),
    ]);

    for product in products {
        table.add_row(vec![
            Cell::new(&product.name),
            Cell::new(&product.sku),
            ui::number_cell(ui::format_rmb(product.cost_price_rmb)),
            ui::number_cell(ui::format_idr(product.cost_price_idr)),
            ui::number_cell(ui::format_idr(product.selling_price)),
            ui::margin_cell(
                product.margin,
                MarginBand::classify(product.margin, thresholds),
            ),
        ]);
    }

    let summary = analytics::summarize_pricing(products, thresholds);
    let average = summary
        .average_margin
        .map_or("N/A".to_string(), |m| format!("{m}%"));

    let mut output = format!(
        "{}\n\nExchange rate: 1 RMB = {} IDR {}\n\n",
        ui::style_text("Pricing", ui::StyleType::Title),
        rate.rmb_to_idr,
        ui::style_text(
            &format!("(updated {})", ui::format_date(rate.last_updated)),
            ui::StyleType::Subtle
        )
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}\n{} {}\n{} {}\nLow margin (<{}%): {}  High margin (>={}%): {}",
        ui::style_text("Total products:", ui::StyleType::TotalLabel),
        ui::style_text(&summary.product_count.to_string(), ui::StyleType::TotalValue),
        ui::style_text("Total value:", ui::StyleType::TotalLabel),
        ui::style_text(&ui::format_idr(summary.total_value), ui::StyleType::TotalValue),
        ui::style_text("Average margin:", ui::StyleType::TotalLabel),
        ui::style_text(&average, ui::StyleType::TotalValue),
        thresholds.low_margin,
        summary.low_margin,
        thresholds.high_margin,
        summary.high_margin,
    ));
    output
}

pub fn run(inventory: &Inventory, search: Option<&str>, thresholds: &Thresholds) -> Result<()> {
    let rate = inventory.exchange_rate();
    let products = inventory.search_products(search.unwrap_or_default());
    println!("{}", render(&products, &rate, thresholds));
    Ok(())
}

/// Applies a new exchange rate and reports how many products were repriced.
pub fn update_rate(inventory: &Inventory, new_rate: f64) -> Result<()> {
    let summary = inventory.update_exchange_rate(new_rate)?;
    println!(
        "Exchange rate set to 1 RMB = {} IDR, repriced {} products",
        summary.rate.rmb_to_idr, summary.repriced
    );
    if !summary.persisted {
        println!(
            "{}",
            ui::style_text(
                "Warning: changes could not be saved to disk",
                ui::StyleType::Warning
            )
        );
    }
    Ok(())
}
