//! Errors surfaced by inventory operations

use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Shipment,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EntityKind::Product => "product",
                EntityKind::Shipment => "shipment",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Exchange rates must be finite and strictly positive.
    #[error("invalid exchange rate: {0}")]
    InvalidRate(f64),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl InventoryError {
    pub fn product_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Product,
            id: id.to_string(),
        }
    }

    pub fn shipment_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Shipment,
            id: id.to_string(),
        }
    }
}
