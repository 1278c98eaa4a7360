//! Inventory domain: entities, derived-value rules and read-only views

pub mod analytics;
pub mod config;
pub mod currency;
pub mod error;
pub mod formulas;
pub mod history;
pub mod log;
pub mod product;
pub mod shipment;

// Re-export main types for cleaner imports
pub use currency::ExchangeRate;
pub use error::{EntityKind, InventoryError};
pub use history::{StockUpdate, StockUpdateType};
pub use product::{NewProduct, Product, ProductUpdate};
pub use shipment::{NewShipment, Shipment, ShipmentMethod, ShipmentStatus, ShipmentUpdate};
