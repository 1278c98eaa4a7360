use super::ui;
use crate::core::analytics::{self, is_low_stock};
use crate::core::config::Thresholds;
use crate::core::product::Product;
use crate::store::Inventory;
use anyhow::Result;
use comfy_table::Cell;

pub fn render(products: &[Product], thresholds: &Thresholds) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Product"),
        ui::header_cell("SKU"),
        ui::header_cell("Initial"),
        ui::header_cell("Stock Out"),
        ui::header_cell("Pending"),
        ui::header_cell("Real Stock"),
        ui::header_cell("Notes"),
    ]);

    for product in products {
        let mut notes = product.notes.clone();
        if product.is_oversold() {
            // realStock is floored at zero, show the shortfall separately
            let shortfall = format!("oversold by {}", -product.net_stock());
            notes = if notes.is_empty() {
                shortfall
            } else {
                format!("{notes} ({shortfall})")
            };
        }
        table.add_row(vec![
            Cell::new(format!(
                "{}\n{}",
                product.name,
                ui::style_text(&product.category, ui::StyleType::Subtle)
            )),
            Cell::new(&product.sku),
            ui::number_cell(product.initial_stock),
            ui::number_cell(product.stock_out),
            ui::number_cell(product.pending_stock),
            ui::stock_cell(product.real_stock, is_low_stock(product, thresholds)),
            Cell::new(notes),
        ]);
    }

    let summary = analytics::summarize_stock(products, thresholds);
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Stock Management", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}\n{} {}\n{} {}",
        ui::style_text("Total products:", ui::StyleType::TotalLabel),
        ui::style_text(&summary.product_count.to_string(), ui::StyleType::TotalValue),
        ui::style_text("Total real stock:", ui::StyleType::TotalLabel),
        ui::style_text(&summary.total_real_stock.to_string(), ui::StyleType::TotalValue),
        ui::style_text("Total pending:", ui::StyleType::TotalLabel),
        ui::style_text(&summary.total_pending.to_string(), ui::StyleType::TotalValue)
    ));
    if summary.low_stock > 0 {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!(
                    "{} low stock items (below {})",
                    summary.low_stock, thresholds.low_stock
                ),
                ui::StyleType::Warning
            )
        ));
    }
    if summary.oversold > 0 {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!("{} oversold items", summary.oversold),
                ui::StyleType::Warning
            )
        ));
    }
    output
}

pub fn run(inventory: &Inventory, search: Option<&str>, thresholds: &Thresholds) -> Result<()> {
    let products = inventory.search_products(search.unwrap_or_default());
    println!("{}", render(&products, thresholds));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExchangeRate, NewProduct};
    use chrono::Utc;

    fn product(name: &str, initial_stock: u32, stock_out: u32) -> Product {
        NewProduct {
            name: name.to_string(),
            sku: format!("{}-SKU", &name[..3]),
            initial_stock,
            stock_out,
            category: "Interior".to_string(),
            ..Default::default()
        }
        .into_product(name.to_string(), &ExchangeRate::default(), Utc::now())
    }

    #[test]
    fn test_render_lists_products_and_low_stock() {
        console::set_colors_enabled(false);
        let products = vec![product("Car Mat", 80, 10), product("Wiper", 12, 5)];
        let output = render(&products, &Thresholds::default());

        assert!(output.contains("Car Mat"));
        assert!(output.contains("Wiper"));
        assert!(output.contains("Total products: 2"));
        assert!(output.contains("Total real stock: 77"));
        assert!(output.contains("Total pending: 0"));
        assert!(output.contains("1 low stock items (below 10)"));
    }

    #[test]
    fn test_render_marks_oversold() {
        console::set_colors_enabled(false);
        let products = vec![product("Mirror", 5, 8)];
        let output = render(&products, &Thresholds::default());
        assert!(output.contains("oversold by 3"));
        assert!(output.contains("1 oversold items"));
    }
}
