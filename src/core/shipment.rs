//! Inbound shipments from suppliers

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentMethod {
    #[default]
    Sea,
    Air,
}

impl Display for ShipmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ShipmentMethod::Sea => "sea",
                ShipmentMethod::Air => "air",
            }
        )
    }
}

impl FromStr for ShipmentMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sea" => Ok(ShipmentMethod::Sea),
            "air" => Ok(ShipmentMethod::Air),
            _ => Err(anyhow!("Invalid shipment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentStatus {
    #[default]
    Processing,
    InTransit,
    Received,
}

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 3] = [
        ShipmentStatus::Processing,
        ShipmentStatus::InTransit,
        ShipmentStatus::Received,
    ];
}

impl Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ShipmentStatus::Processing => "processing",
                ShipmentStatus::InTransit => "in-transit",
                ShipmentStatus::Received => "received",
            }
        )
    }
}

impl FromStr for ShipmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "processing" => Ok(ShipmentStatus::Processing),
            "in-transit" | "intransit" => Ok(ShipmentStatus::InTransit),
            "received" => Ok(ShipmentStatus::Received),
            _ => Err(anyhow!("Invalid shipment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub method: ShipmentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awb_number: Option<String>,
    pub estimated_arrival: DateTime<Utc>,
    pub total_products: u32,
    pub status: ShipmentStatus,
    pub notes: String,
    pub forwarder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShipment {
    pub date: DateTime<Utc>,
    pub method: ShipmentMethod,
    pub container_number: Option<String>,
    pub awb_number: Option<String>,
    pub estimated_arrival: DateTime<Utc>,
    pub total_products: u32,
    pub status: ShipmentStatus,
    pub notes: String,
    pub forwarder_name: String,
    pub products: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentUpdate {
    pub date: Option<DateTime<Utc>>,
    pub method: Option<ShipmentMethod>,
    pub container_number: Option<String>,
    pub awb_number: Option<String>,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub total_products: Option<u32>,
    pub status: Option<ShipmentStatus>,
    pub notes: Option<String>,
    pub forwarder_name: Option<String>,
    pub products: Option<Vec<String>>,
}

impl ShipmentUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ShipmentUpdate::default()
    }
}

impl NewShipment {
    pub fn into_shipment(self, id: String) -> Shipment {
        Shipment {
            id,
            date: self.date,
            method: self.method,
            container_number: self.container_number,
            awb_number: self.awb_number,
            estimated_arrival: self.estimated_arrival,
            total_products: self.total_products,
            status: self.status,
            notes: self.notes,
            forwarder_name: self.forwarder_name,
            products: self.products,
        }
    }
}

impl Shipment {
    /// The tracking number that applies to this shipment's method.
    pub fn tracking_number(&self) -> Option<&str> {
        match self.method {
            ShipmentMethod::Sea => self.container_number.as_deref(),
            ShipmentMethod::Air => self.awb_number.as_deref(),
        }
    }

    pub fn apply_update(&mut self, update: ShipmentUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(method) = update.method {
            self.method = method;
        }
        if let Some(container_number) = update.container_number {
            self.container_number = Some(container_number);
        }
        if let Some(awb_number) = update.awb_number {
            self.awb_number = Some(awb_number);
        }
        if let Some(estimated_arrival) = update.estimated_arrival {
            self.estimated_arrival = estimated_arrival;
        }
        if let Some(total_products) = update.total_products {
            self.total_products = total_products;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(forwarder_name) = update.forwarder_name {
            self.forwarder_name = forwarder_name;
        }
        if let Some(products) = update.products {
            self.products = Some(products);
        }
    }
}
