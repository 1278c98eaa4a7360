use crate::core::analytics::MarginBand;
use crate::core::shipment::ShipmentStatus;
use chrono::{DateTime, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Warning => style(text).red().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn number_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Real stock cell, red when below the low stock threshold.
pub fn stock_cell(real_stock: u32, low: bool) -> Cell {
    let cell = number_cell(real_stock);
    if low {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell.fg(Color::Green)
    }
}

pub fn margin_cell(margin: i64, band: MarginBand) -> Cell {
    let color = match band {
        MarginBand::Low => Color::Red,
        MarginBand::Healthy => Color::Yellow,
        MarginBand::High => Color::Green,
    };
    Cell::new(format!("{margin}%"))
        .fg(color)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

pub fn status_cell(status: ShipmentStatus) -> Cell {
    let color = match status {
        ShipmentStatus::Processing => Color::Yellow,
        ShipmentStatus::InTransit => Color::Blue,
        ShipmentStatus::Received => Color::Green,
    };
    Cell::new(status.to_string()).fg(color)
}

/// Days to arrival, red once overdue.
pub fn days_cell(days: i64, overdue: bool) -> Cell {
    let text = if overdue {
        format!("{} overdue", -days)
    } else {
        days.to_string()
    };
    let cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if overdue { cell.fg(Color::Red) } else { cell }
}

/// Creates a cell for "N/A" values.
pub fn na_cell() -> Cell {
    Cell::new("N/A").fg(Color::DarkGrey)
}

/// Formats whole rupiah with `.` thousands separators, e.g. `Rp 35.000`.
pub fn format_idr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}Rp {grouped}")
}

pub fn format_rmb(amount: f64) -> String {
    format!("¥{amount:.1}")
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
