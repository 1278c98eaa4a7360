//! Products and the rules that keep their derived fields consistent

use crate::core::currency::ExchangeRate;
use crate::core::formulas;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub initial_stock: u32,
    pub stock_out: u32,
    pub pending_stock: u32,
    pub real_stock: u32,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    pub category: String,
    #[serde(rename = "costPriceRMB")]
    pub cost_price_rmb: f64,
    #[serde(rename = "costPriceIDR")]
    pub cost_price_idr: i64,
    pub selling_price: i64,
    pub margin: i64,
    pub last_updated: DateTime<Utc>,
}

/// Fields supplied when creating a product. Identity and derived fields are
/// filled in by [`NewProduct::into_product`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub initial_stock: u32,
    pub stock_out: u32,
    pub pending_stock: u32,
    pub notes: String,
    pub batch_number: Option<String>,
    pub category: String,
    pub cost_price_rmb: f64,
    pub selling_price: i64,
}

/// Partial product edit. Only `Some` fields are merged.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub initial_stock: Option<u32>,
    pub stock_out: Option<u32>,
    pub pending_stock: Option<u32>,
    pub notes: Option<String>,
    pub batch_number: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "costPriceRMB")]
    pub cost_price_rmb: Option<f64>,
    pub selling_price: Option<i64>,
}

impl ProductUpdate {
    pub fn touches_stock(&self) -> bool {
        self.initial_stock.is_some() || self.stock_out.is_some() || self.pending_stock.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == ProductUpdate::default()
    }
}

/// What an applied update changed in the stock figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    pub previous: u32,
    pub current: u32,
}

impl NewProduct {
    pub fn into_product(self, id: String, rate: &ExchangeRate, now: DateTime<Utc>) -> Product {
        let mut product = Product {
            id,
            name: self.name,
            sku: self.sku,
            initial_stock: self.initial_stock,
            stock_out: self.stock_out,
            pending_stock: self.pending_stock,
            real_stock: 0,
            notes: self.notes,
            batch_number: self.batch_number,
            category: self.category,
            cost_price_rmb: self.cost_price_rmb,
            cost_price_idr: 0,
            selling_price: self.selling_price,
            margin: 0,
            last_updated: now,
        };
        product.recompute_stock();
        product.reprice(rate);
        product
    }
}

impl Product {
    pub fn net_stock(&self) -> i64 {
        formulas::net_stock(self.initial_stock, self.stock_out, self.pending_stock)
    }

    pub fn is_oversold(&self) -> bool {
        self.net_stock() < 0
    }

    fn recompute_stock(&mut self) {
        self.real_stock =
            formulas::real_stock(self.initial_stock, self.stock_out, self.pending_stock);
    }

    fn recompute_margin(&mut self) {
        self.margin = formulas::margin(self.selling_price, self.cost_price_idr);
    }

    /// Re-derives the IDR cost from the RMB cost at `rate`, then the margin.
    pub fn reprice(&mut self, rate: &ExchangeRate) {
        self.cost_price_idr = rate.to_idr(self.cost_price_rmb);
        self.recompute_margin();
    }

    /// Merges `update` into this product and recomputes only the derived
    /// fields whose inputs were supplied. A selling-price-only edit keeps the
    /// stored IDR cost; an RMB cost edit converts at `rate`.
    ///
    /// Returns the real stock before and after when any stock input was
    /// supplied.
    pub fn apply_update(
        &mut self,
        update: ProductUpdate,
        rate: &ExchangeRate,
        now: DateTime<Utc>,
    ) -> Option<StockChange> {
        let touches_stock = update.touches_stock();
        let previous_stock = self.real_stock;
        let cost_changed = update.cost_price_rmb.is_some();
        let price_changed = update.selling_price.is_some();

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(sku) = update.sku {
            self.sku = sku;
        }
        if let Some(initial_stock) = update.initial_stock {
            self.initial_stock = initial_stock;
        }
        if let Some(stock_out) = update.stock_out {
            self.stock_out = stock_out;
        }
        if let Some(pending_stock) = update.pending_stock {
            self.pending_stock = pending_stock;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(batch_number) = update.batch_number {
            self.batch_number = Some(batch_number);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(cost_price_rmb) = update.cost_price_rmb {
            self.cost_price_rmb = cost_price_rmb;
        }
        if let Some(selling_price) = update.selling_price {
            self.selling_price = selling_price;
        }
        self.last_updated = now;

        if cost_changed {
            debug!(id = %self.id, rate = rate.rmb_to_idr, "Repricing product from RMB cost");
            self.reprice(rate);
        } else if price_changed {
            self.recompute_margin();
        }

        if touches_stock {
            self.recompute_stock();
            return Some(StockChange {
                previous: previous_stock,
                current: self.real_stock,
            });
        }
        None
    }

    /// Case-insensitive substring match on name or SKU. An empty term matches.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.sku.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(value: f64) -> ExchangeRate {
        ExchangeRate::new(value, Utc::now()).unwrap()
    }

    fn steering_cover() -> Product {
        NewProduct {
            name: "Premium Leather Steering Cover".to_string(),
            sku: "CSK001".to_string(),
            initial_stock: 100,
            stock_out: 20,
            pending_stock: 5,
            notes: "Batch #A01".to_string(),
            batch_number: Some("A01".to_string()),
            category: "Interior".to_string(),
            cost_price_rmb: 10.0,
            selling_price: 35000,
        }
        .into_product("p1".to_string(), &rate(1850.0), Utc::now())
    }

    #[test]
    fn test_into_product_derives_fields() {
        let product = steering_cover();
        assert_eq!(product.id, "p1");
        assert_eq!(product.real_stock, 75);
        assert_eq!(product.cost_price_idr, 18500);
        assert_eq!(product.margin, 89);
    }

    #[test]
    fn test_selling_price_update_keeps_idr_cost() {
        let mut product = steering_cover();
        // Stored IDR cost deliberately out of step with the current rate
        product.cost_price_idr = 20000;

        let change = product.apply_update(
            ProductUpdate {
                selling_price: Some(40000),
                ..Default::default()
            },
            &rate(3000.0),
            Utc::now(),
        );

        assert!(change.is_none());
        assert_eq!(product.cost_price_idr, 20000);
        assert_eq!(product.margin, 100);
        assert_eq!(product.selling_price, 40000);
    }

    #[test]
    fn test_rmb_cost_update_uses_given_rate() {
        let mut product = steering_cover();
        product.apply_update(
            ProductUpdate {
                cost_price_rmb: Some(8.5),
                ..Default::default()
            },
            &rate(2000.0),
            Utc::now(),
        );

        assert_eq!(product.cost_price_rmb, 8.5);
        assert_eq!(product.cost_price_idr, 17000);
        assert_eq!(product.margin, formulas::margin(35000, 17000));
    }

    #[test]
    fn test_cost_and_price_update_computes_margin_from_fresh_cost() {
        let mut product = steering_cover();
        product.apply_update(
            ProductUpdate {
                cost_price_rmb: Some(20.0),
                selling_price: Some(74000),
                ..Default::default()
            },
            &rate(1850.0),
            Utc::now(),
        );

        assert_eq!(product.cost_price_idr, 37000);
        assert_eq!(product.margin, 100);
    }

    #[test]
    fn test_stock_update_recomputes_real_stock() {
        let mut product = steering_cover();
        let change = product.apply_update(
            ProductUpdate {
                stock_out: Some(100),
                ..Default::default()
            },
            &rate(1850.0),
            Utc::now(),
        );

        assert_eq!(
            change,
            Some(StockChange {
                previous: 75,
                current: 0
            })
        );
        assert_eq!(product.real_stock, 0);
        assert_eq!(product.net_stock(), -5);
        assert!(product.is_oversold());
    }

    #[test]
    fn test_notes_update_leaves_derived_fields() {
        let mut product = steering_cover();
        let before = product.clone();
        let stamp = before.last_updated + chrono::Duration::seconds(5);

        product.apply_update(
            ProductUpdate {
                notes: Some("Recounted".to_string()),
                ..Default::default()
            },
            &rate(9999.0),
            stamp,
        );

        assert_eq!(product.notes, "Recounted");
        assert_eq!(product.cost_price_idr, before.cost_price_idr);
        assert_eq!(product.margin, before.margin);
        assert_eq!(product.real_stock, before.real_stock);
        assert_eq!(product.last_updated, stamp);
    }

    #[test]
    fn test_matches_name_or_sku() {
        let product = steering_cover();
        assert!(product.matches("leather"));
        assert!(product.matches("csk"));
        assert!(product.matches("  "));
        assert!(!product.matches("wiper"));
    }

    #[test]
    fn test_serialized_field_names() {
        let product = steering_cover();
        let json = serde_json::to_value(&product).unwrap();
        for field in [
            "initialStock",
            "stockOut",
            "pendingStock",
            "realStock",
            "costPriceRMB",
            "costPriceIDR",
            "sellingPrice",
            "lastUpdated",
            "batchNumber",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": "7", "name": "Bare", "costPriceRMB": 3.5}"#).unwrap();
        assert_eq!(product.id, "7");
        assert_eq!(product.cost_price_rmb, 3.5);
        assert_eq!(product.sku, "");
        assert_eq!(product.batch_number, None);
    }
}
