use super::{parse_date, ui};
use crate::core::analytics::{days_until, is_overdue, status_counts};
use crate::core::shipment::{
    NewShipment, Shipment, ShipmentMethod, ShipmentStatus, ShipmentUpdate,
};
use crate::store::Inventory;
use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use comfy_table::Cell;

/// Days between shipping and arrival assumed when no ETA is given.
const DEFAULT_TRANSIT_DAYS: i64 = 30;

#[derive(Debug, Clone, Args)]
pub struct AddShipmentArgs {
    /// Shipping method: sea or air
    #[arg(long, default_value = "sea")]
    pub method: ShipmentMethod,
    /// Container number for sea freight, air waybill for air freight
    #[arg(long)]
    pub tracking: Option<String>,
    /// Ship date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,
    /// Estimated arrival (YYYY-MM-DD), defaults to 30 days after the ship date
    #[arg(long, value_parser = parse_date)]
    pub eta: Option<DateTime<Utc>>,
    #[arg(long, default_value_t = 0)]
    pub total_products: u32,
    #[arg(long, default_value = "processing")]
    pub status: ShipmentStatus,
    #[arg(long)]
    pub forwarder: String,
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Product id carried by this shipment, repeatable
    #[arg(long = "product")]
    pub products: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateShipmentArgs {
    pub id: String,
    #[arg(long)]
    pub method: Option<ShipmentMethod>,
    #[arg(long)]
    pub container_number: Option<String>,
    #[arg(long)]
    pub awb_number: Option<String>,
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,
    #[arg(long, value_parser = parse_date)]
    pub eta: Option<DateTime<Utc>>,
    #[arg(long)]
    pub total_products: Option<u32>,
    #[arg(long)]
    pub status: Option<ShipmentStatus>,
    #[arg(long)]
    pub forwarder: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Replaces the linked product ids, repeatable
    #[arg(long = "product")]
    pub products: Option<Vec<String>>,
}

impl AddShipmentArgs {
    pub fn into_new_shipment(self, today: DateTime<Utc>) -> NewShipment {
        let date = self.date.unwrap_or(today);
        let (container_number, awb_number) = match self.method {
            ShipmentMethod::Sea => (self.tracking, None),
            ShipmentMethod::Air => (None, self.tracking),
        };
        NewShipment {
            date,
            method: self.method,
            container_number,
            awb_number,
            estimated_arrival: self
                .eta
                .unwrap_or(date + Duration::days(DEFAULT_TRANSIT_DAYS)),
            total_products: self.total_products,
            status: self.status,
            notes: self.notes,
            forwarder_name: self.forwarder,
            products: Some(self.products),
        }
    }
}

impl From<UpdateShipmentArgs> for ShipmentUpdate {
    fn from(args: UpdateShipmentArgs) -> Self {
        ShipmentUpdate {
            date: args.date,
            method: args.method,
            container_number: args.container_number,
            awb_number: args.awb_number,
            estimated_arrival: args.eta,
            total_products: args.total_products,
            status: args.status,
            notes: args.notes,
            forwarder_name: args.forwarder,
            products: args.products,
        }
    }
}

pub fn render(shipments: &[Shipment], now: DateTime<Utc>) -> String {
    let counts = status_counts(shipments);
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Shipping Status", ui::StyleType::Title)
    );
    let summary: Vec<String> = ShipmentStatus::ALL
        .iter()
        .map(|status| format!("{}: {}", status, counts[status]))
        .collect();
    output.push_str(&summary.join("  "));
    output.push_str("\n\n");

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Method"),
        ui::header_cell("Tracking"),
        ui::header_cell("Forwarder"),
        ui::header_cell("Shipped"),
        ui::header_cell("ETA"),
        ui::header_cell("Days"),
        ui::header_cell("Items"),
        ui::header_cell("Status"),
        ui::header_cell("Notes"),
    ]);

    for shipment in shipments {
        let tracking = shipment
            .tracking_number()
            .map_or_else(ui::na_cell, Cell::new);
        let days = if shipment.status == ShipmentStatus::Received {
            Cell::new("-")
        } else {
            ui::days_cell(
                days_until(shipment.estimated_arrival, now),
                is_overdue(shipment, now),
            )
        };
        table.add_row(vec![
            Cell::new(&shipment.id),
            Cell::new(shipment.method.to_string()),
            tracking,
            Cell::new(&shipment.forwarder_name),
            Cell::new(ui::format_date(shipment.date)),
            Cell::new(ui::format_date(shipment.estimated_arrival)),
            days,
            ui::number_cell(shipment.total_products),
            ui::status_cell(shipment.status),
            Cell::new(&shipment.notes),
        ]);
    }
    output.push_str(&table.to_string());

    let overdue = shipments.iter().filter(|s| is_overdue(s, now)).count();
    if overdue > 0 {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!("{overdue} shipments past their ETA"),
                ui::StyleType::Warning
            )
        ));
    }
    output
}

pub fn run(inventory: &Inventory) -> Result<()> {
    println!("{}", render(&inventory.shipments(), Utc::now()));
    Ok(())
}

pub fn add(inventory: &Inventory, args: AddShipmentArgs) -> Result<()> {
    let shipment = inventory.add_shipment(args.into_new_shipment(Utc::now()));
    println!("Added shipment {}", shipment.id);
    Ok(())
}

pub fn update(inventory: &Inventory, args: UpdateShipmentArgs) -> Result<()> {
    let id = args.id.clone();
    let update = ShipmentUpdate::from(args);
    if update.is_empty() {
        bail!("Nothing to update for shipment {id}");
    }
    let shipment = inventory.update_shipment(&id, update)?;
    println!("Updated shipment {} ({})", shipment.id, shipment.status);
    Ok(())
}
