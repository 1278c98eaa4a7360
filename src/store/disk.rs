use crate::store::KeyValueCollection;
use anyhow::{Context, Result};
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION_NAME: &str = "inventory";

/// Collection backed by a fjall partition. Every write is synced to disk
/// before returning.
pub struct DiskCollection {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskCollection {
    pub fn open(db_path: &Path) -> Result<Self> {
        std::fs::create_dir_all(db_path)
            .with_context(|| format!("Failed to create data directory: {}", db_path.display()))?;

        let keyspace = Config::new(db_path)
            .open()
            .with_context(|| format!("Failed to open keyspace at {}", db_path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION_NAME, PartitionCreateOptions::default())
            .context("Failed to open inventory partition")?;
        debug!("Opened inventory store at {}", db_path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

impl KeyValueCollection for DiskCollection {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.partition.get(key)?.map(|slice| slice.to_vec());
        debug!(key, hit = value.is_some(), "Disk GET");
        Ok(value)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.partition.insert(key, value)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(key, "Disk PUT");
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.partition.contains_key(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_disk_get_put() {
        let dir = tempdir().unwrap();
        let collection = DiskCollection::open(dir.path()).unwrap();

        // Initially, collection is empty
        assert!(collection.get("key1").unwrap().is_none());
        assert!(!collection.contains("key1").unwrap());

        collection.put("key1", b"123".to_vec()).unwrap();

        assert_eq!(collection.get("key1").unwrap(), Some(b"123".to_vec()));
        assert!(collection.contains("key1").unwrap());
        assert!(collection.get("key2").unwrap().is_none());
    }

    #[test]
    fn test_disk_values_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let collection = DiskCollection::open(dir.path()).unwrap();
            collection.put("products", b"[]".to_vec()).unwrap();
        }

        let reopened = DiskCollection::open(dir.path()).unwrap();
        assert_eq!(reopened.get("products").unwrap(), Some(b"[]".to_vec()));
    }
}
