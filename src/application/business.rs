use super::records::{CreationPolicy, RecordStore};
use crate::domain::business::{BusinessRecord, WalletKind};
use crate::domain::ports::KeyedStoreRef;
use crate::error::{RecordError, Result};
use tracing::{debug, info};

/// Creates and reads business records.
///
/// Businesses are written with [`CreationPolicy::Overwrite`]: creating a
/// business under an existing ID replaces the stored record.
pub struct BusinessManager {
    records: RecordStore<BusinessRecord>,
    strict_wallet_kind: bool,
}

impl BusinessManager {
    pub fn new(store: KeyedStoreRef) -> Self {
        Self {
            records: RecordStore::new(store),
            strict_wallet_kind: false,
        }
    }

    /// When enabled, `read_wallet_id` rejects an unknown wallet kind instead
    /// of answering with an empty ID.
    pub fn with_strict_wallet_kind(mut self, strict: bool) -> Self {
        self.strict_wallet_kind = strict;
        self
    }

    /// Validates the ten positional fields and writes the record at `business_id`.
    pub async fn create_business(&self, business_id: &str, fields: &[String]) -> Result<()> {
        let record = BusinessRecord::from_fields(fields)?;
        self.records
            .create(business_id, &record, CreationPolicy::Overwrite)
            .await?;
        info!(business_id, name = %record.name, "business record written");
        Ok(())
    }

    pub async fn read_business(&self, business_id: &str) -> Result<BusinessRecord> {
        debug!(business_id, "reading business record");
        self.records.load(business_id).await
    }

    /// Projects one wallet ID out of the stored record.
    ///
    /// `wallet_kind` is one of `main`, `loan`, `liability`.
    pub async fn read_wallet_id(&self, business_id: &str, wallet_kind: &str) -> Result<String> {
        let record = self.records.load(business_id).await?;
        match WalletKind::parse(wallet_kind) {
            Some(kind) => Ok(record.wallet_id(kind).to_string()),
            None if self.strict_wallet_kind => Err(RecordError::ValidationError(format!(
                "Unknown wallet kind '{wallet_kind}': expected main, loan or liability"
            ))),
            None => Ok(String::new()),
        }
    }
}
