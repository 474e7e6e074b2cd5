use crate::domain::ports::KeyedStore;
use crate::error::{RecordError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Column Family holding business records.
pub const CF_BUSINESS: &str = "business";
/// Column Family holding loan records.
pub const CF_LOANS: &str = "loan";

/// A persistent store implementation using RocksDB.
///
/// Each manager owns one Column Family, so business and loan keys never
/// collide. A `RocksDBStore` value is bound to one namespace; use
/// [`RocksDBStore::namespace`] to get a handle on another one over the same
/// database.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
    cf: &'static str,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path, bound to the
    /// business namespace.
    ///
    /// Ensures that the required column families ("business" and "loan") exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_business = ColumnFamilyDescriptor::new(CF_BUSINESS, Options::default());
        let cf_loans = ColumnFamilyDescriptor::new(CF_LOANS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_business, cf_loans])?;

        Ok(Self {
            db: Arc::new(db),
            cf: CF_BUSINESS,
        })
    }

    /// Returns a handle on the same database bound to `cf`.
    pub fn namespace(&self, cf: &'static str) -> Self {
        Self {
            db: Arc::clone(&self.db),
            cf,
        }
    }

    fn handle(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(self.cf).ok_or_else(|| {
            RecordError::StoreError(Box::new(std::io::Error::other(format!(
                "Column family {} not found",
                self.cf
            ))))
        })
    }
}

#[async_trait]
impl KeyedStore for RocksDBStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let cf = self.handle()?;
        Ok(self.db.get_cf(cf, key.as_bytes())?)
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let cf = self.handle()?;
        debug!(cf = self.cf, key, "rocksdb put");
        self.db.put_cf(cf, key.as_bytes(), value)?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let cf = self.handle()?;
        // Check for the key without copying the value out
        let result = self.db.get_pinned_cf(cf, key.as_bytes())?;
        Ok(result.is_some())
    }
}
