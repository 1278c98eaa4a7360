use crate::store::KeyValueCollection;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory collection using HashMap and RwLock. Contents are lost when
/// dropped.
#[derive(Default)]
pub struct MemoryCollection {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueCollection for MemoryCollection {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let map = self
            .inner
            .read()
            .map_err(|_| anyhow!("memory collection lock poisoned"))?;
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Memory HIT for key: {}", key);
        } else {
            debug!("Memory MISS for key: {}", key);
        }
        Ok(value)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| anyhow!("memory collection lock poisoned"))?;
        debug!("Memory PUT for key: {}", key);
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_get_put() {
        let collection = MemoryCollection::new();

        // Initially, collection is empty
        assert!(collection.get("key1").unwrap().is_none());
        assert!(!collection.contains("key1").unwrap());

        collection.put("key1", b"123".to_vec()).unwrap();

        assert_eq!(collection.get("key1").unwrap(), Some(b"123".to_vec()));
        assert!(collection.contains("key1").unwrap());
        assert!(collection.get("key2").unwrap().is_none());
    }

    #[test]
    fn test_memory_put_overwrites() {
        let collection = MemoryCollection::new();
        collection.put("key1", b"old".to_vec()).unwrap();
        collection.put("key1", b"new".to_vec()).unwrap();
        assert_eq!(collection.get("key1").unwrap(), Some(b"new".to_vec()));
    }
}
