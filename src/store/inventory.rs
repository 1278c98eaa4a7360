use crate::core::{
    ExchangeRate, InventoryError, NewProduct, NewShipment, Product, ProductUpdate, Shipment,
    ShipmentUpdate, StockUpdate, StockUpdateType, analytics,
};
use crate::store::seed::Seed;
use crate::store::{EXCHANGE_RATE_KEY, PRODUCTS_KEY, SHIPMENTS_KEY, STOCK_UPDATES_KEY, Storage};
use serde::Serialize;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of repricing the catalogue after an exchange rate change.
#[derive(Debug, Clone, PartialEq)]
pub struct RepriceSummary {
    pub rate: ExchangeRate,
    pub repriced: usize,
    /// False when any write failed; the returned values may then be newer
    /// than what is on disk.
    pub persisted: bool,
}

/// Products, shipments, exchange rate and stock history over a [`Storage`].
///
/// Every operation re-reads the whole collection, changes it and writes it
/// back, so concurrent writers would overwrite each other at collection
/// granularity. Intended for a single session.
pub struct Inventory {
    storage: Storage,
}

impl Inventory {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Writes `seed` for every key that has no value yet. Safe to call on
    /// every start. A key whose presence cannot be checked is left alone.
    pub fn initialize(&self, seed: Seed) {
        self.seed_key(PRODUCTS_KEY, &seed.products);
        self.seed_key(SHIPMENTS_KEY, &seed.shipments);
        self.seed_key(EXCHANGE_RATE_KEY, &seed.exchange_rate);
        self.seed_key(STOCK_UPDATES_KEY, &Vec::<StockUpdate>::new());
    }

    fn seed_key<T: Serialize>(&self, key: &str, value: &T) {
        match self.storage.contains(key) {
            Ok(true) => debug!(key, "Already seeded"),
            Ok(false) => {
                info!(key, "Seeding default data");
                self.storage.write(key, value);
            }
            Err(e) => warn!(key, error = %e, "Could not check storage key, skipping seed"),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.storage.read(PRODUCTS_KEY, Vec::new())
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.products().into_iter().find(|p| p.id == id)
    }

    pub fn search_products(&self, term: &str) -> Vec<Product> {
        let products = self.products();
        analytics::search_products(&products, term)
            .into_iter()
            .cloned()
            .collect()
    }

    fn save_products(&self, products: &[Product]) -> bool {
        let saved = self.storage.write(PRODUCTS_KEY, &products);
        if !saved {
            warn!("Products not persisted, stored data may be stale");
        }
        saved
    }

    /// Creates a product with a fresh id. Real stock, IDR cost and margin
    /// are derived using the current exchange rate.
    pub fn add_product(&self, new_product: NewProduct) -> Product {
        let rate = self.exchange_rate();
        let mut products = self.products();
        let product = new_product.into_product(Uuid::new_v4().to_string(), &rate, Utc::now());

        info!(id = %product.id, sku = %product.sku, "Adding product");
        products.push(product.clone());
        self.save_products(&products);
        product
    }

    /// Merges `update` into the product with `id` and recomputes the derived
    /// fields it touches. Stock edits are appended to the stock history.
    pub fn update_product(
        &self,
        id: &str,
        update: ProductUpdate,
    ) -> Result<Product, InventoryError> {
        let mut products = self.products();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InventoryError::product_not_found(id))?;

        let rate = self.exchange_rate();
        let now = Utc::now();
        let notes = update.notes.clone();
        let stock_change = product.apply_update(update, &rate, now);
        let updated = product.clone();
        debug!(?updated, "Product updated");

        self.save_products(&products);
        if let Some(change) = stock_change {
            self.record_stock_update(StockUpdate {
                product_id: updated.id.clone(),
                previous_stock: change.previous,
                new_stock: change.current,
                update_type: StockUpdateType::Manual,
                timestamp: now,
                notes,
            });
        }
        info!(id, "Updated product");
        Ok(updated)
    }

    pub fn shipments(&self) -> Vec<Shipment> {
        self.storage.read(SHIPMENTS_KEY, Vec::new())
    }

    pub fn shipment(&self, id: &str) -> Option<Shipment> {
        self.shipments().into_iter().find(|s| s.id == id)
    }

    pub fn add_shipment(&self, new_shipment: NewShipment) -> Shipment {
        let mut shipments = self.shipments();
        let shipment = new_shipment.into_shipment(Uuid::new_v4().to_string());

        info!(id = %shipment.id, method = %shipment.method, "Adding shipment");
        shipments.push(shipment.clone());
        if !self.storage.write(SHIPMENTS_KEY, &shipments) {
            warn!("Shipments not persisted, stored data may be stale");
        }
        shipment
    }

    pub fn update_shipment(
        &self,
        id: &str,
        update: ShipmentUpdate,
    ) -> Result<Shipment, InventoryError> {
        let mut shipments = self.shipments();
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| InventoryError::shipment_not_found(id))?;

        shipment.apply_update(update);
        let updated = shipment.clone();

        if !self.storage.write(SHIPMENTS_KEY, &shipments) {
            warn!("Shipments not persisted, stored data may be stale");
        }
        info!(id, status = %updated.status, "Updated shipment");
        Ok(updated)
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        self.storage.read(EXCHANGE_RATE_KEY, ExchangeRate::default())
    }

    /// Stores a new RMB to IDR rate and reprices every product from its RMB
    /// cost. Rejects non-positive rates without touching anything.
    pub fn update_exchange_rate(&self, new_rate: f64) -> Result<RepriceSummary, InventoryError> {
        let rate = ExchangeRate::new(new_rate, Utc::now())?;
        let rate_saved = self.storage.write(EXCHANGE_RATE_KEY, &rate);

        let mut products = self.products();
        for product in &mut products {
            product.reprice(&rate);
        }
        let products_saved = self.save_products(&products);

        info!(
            rate = rate.rmb_to_idr,
            repriced = products.len(),
            "Updated exchange rate"
        );
        Ok(RepriceSummary {
            rate,
            repriced: products.len(),
            persisted: rate_saved && products_saved,
        })
    }

    pub fn stock_updates(&self) -> Vec<StockUpdate> {
        self.storage.read(STOCK_UPDATES_KEY, Vec::new())
    }

    /// Stock history of one product, oldest first.
    pub fn stock_history(&self, product_id: &str) -> Vec<StockUpdate> {
        self.stock_updates()
            .into_iter()
            .filter(|u| u.product_id == product_id)
            .collect()
    }

    fn record_stock_update(&self, update: StockUpdate) {
        debug!(
            product_id = %update.product_id,
            previous = update.previous_stock,
            new = update.new_stock,
            "Recording stock update"
        );
        let mut updates = self.stock_updates();
        updates.push(update);
        if !self.storage.write(STOCK_UPDATES_KEY, &updates) {
            warn!("Stock history not persisted");
        }
    }
}
