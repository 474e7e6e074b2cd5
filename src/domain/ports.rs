use super::loan::LoanRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The ledger state API: one namespace of opaque values addressed by string keys.
///
/// `get` returns `None` only when the key is absent; a present-but-empty value
/// comes back as `Some(vec![])`.
#[async_trait]
pub trait KeyedStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

pub type KeyedStoreRef = Arc<dyn KeyedStore>;

/// Hook for checking a loan's references to records owned by other managers
/// (the borrowing business, the program) before the loan is written.
#[async_trait]
pub trait ReferenceValidator: Send + Sync {
    async fn validate(&self, loan: &LoanRecord) -> Result<()>;
}

/// Accepts every loan.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReferenceCheck;

#[async_trait]
impl ReferenceValidator for NoReferenceCheck {
    async fn validate(&self, _loan: &LoanRecord) -> Result<()> {
        Ok(())
    }
}
