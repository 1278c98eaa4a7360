use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockUpdateType {
    #[default]
    Manual,
    Sale,
    Shipment,
}

impl Display for StockUpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StockUpdateType::Manual => "manual",
                StockUpdateType::Sale => "sale",
                StockUpdateType::Shipment => "shipment",
            }
        )
    }
}

/// One entry in a product's stock log: real stock before and after a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StockUpdate {
    pub product_id: String,
    pub previous_stock: u32,
    pub new_stock: u32,
    pub update_type: StockUpdateType,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StockUpdate {
    pub fn delta(&self) -> i64 {
        i64::from(self.new_stock) - i64::from(self.previous_stock)
    }
}
