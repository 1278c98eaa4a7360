//! Key-value persistence behind the inventory.
//!
//! Backends only move bytes. [`Storage`] layers JSON encoding on top with a
//! forgiving contract: reads fall back to a default on missing or corrupt
//! data, writes are best-effort and only logged on failure.

pub mod disk;
pub mod inventory;
pub mod memory;
pub mod seed;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, warn};

pub use disk::DiskCollection;
pub use inventory::Inventory;
pub use memory::MemoryCollection;

pub const PRODUCTS_KEY: &str = "products";
pub const SHIPMENTS_KEY: &str = "shipments";
pub const EXCHANGE_RATE_KEY: &str = "exchange-rate";
pub const STOCK_UPDATES_KEY: &str = "stock-updates";

/// Raw byte storage addressed by string keys.
pub trait KeyValueCollection: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Typed JSON access over a [`KeyValueCollection`].
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueCollection>,
}

impl Storage {
    pub fn new(backend: Arc<dyn KeyValueCollection>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCollection::new()))
    }

    /// Decodes the value at `key`, or returns `default` when it is missing,
    /// unreadable or fails to decode. Never fails.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let res: Result<Option<T>> = (|| {
            let Some(bytes) = self.backend.get(key)? else {
                return Ok(None);
            };
            Ok(Some(serde_json::from_slice(&bytes)?))
        })();

        match res {
            Ok(Some(value)) => {
                debug!(key, "Storage read");
                value
            }
            Ok(None) => {
                debug!(key, "Storage miss, using default");
                default
            }
            Err(e) => {
                warn!(key, error = %e, "Error reading from storage, using default");
                default
            }
        }
    }

    /// Encodes and stores `value`. Returns `false` if the write failed; the
    /// failure is logged and not propagated.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let res: Result<()> = (|| {
            let bytes = serde_json::to_vec(value)?;
            self.backend.put(key, bytes)
        })();

        match res {
            Ok(()) => {
                debug!(key, "Storage write");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "Error saving to storage");
                false
            }
        }
    }

    /// Whether `key` holds any value. Unlike reads, backend errors are
    /// returned so callers never mistake an unreadable key for a missing one.
    pub fn contains(&self, key: &str) -> Result<bool> {
        self.backend.contains(key)
    }
}
