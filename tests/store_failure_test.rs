use async_trait::async_trait;
use ledger_records::application::business::BusinessManager;
use ledger_records::application::loan::LoanManager;
use ledger_records::domain::ports::KeyedStore;
use ledger_records::error::{RecordError, Result};
use ledger_records::infrastructure::in_memory::InMemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod common;

/// Reads work, every write fails.
#[derive(Default)]
struct ReadOnlyStore {
    inner: InMemoryStore,
    rejected_puts: AtomicUsize,
}

#[async_trait]
impl KeyedStore for ReadOnlyStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.inner.get(key).await
    }

    async fn put(&self, _key: &str, _value: Vec<u8>) -> Result<()> {
        self.rejected_puts.fetch_add(1, Ordering::SeqCst);
        Err(RecordError::StoreError(Box::new(std::io::Error::other(
            "ledger is read-only",
        ))))
    }
}

/// Every call fails.
struct UnreachableStore;

#[async_trait]
impl KeyedStore for UnreachableStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(RecordError::StoreError(Box::new(std::io::Error::other(
            "peer unreachable",
        ))))
    }

    async fn put(&self, _key: &str, _value: Vec<u8>) -> Result<()> {
        Err(RecordError::StoreError(Box::new(std::io::Error::other(
            "peer unreachable",
        ))))
    }
}

#[tokio::test]
async fn test_put_failure_is_propagated() {
    let store = Arc::new(ReadOnlyStore::default());
    let manager = LoanManager::new(store.clone());

    let err = manager
        .create_loan("L1", &common::loan_fields("open", 1))
        .await
        .unwrap_err();
    assert!(matches!(&err, RecordError::StoreError(_)));
    assert!(err.to_string().contains("ledger is read-only"));
    assert_eq!(store.rejected_puts.load(Ordering::SeqCst), 1);
    assert!(store.inner.is_empty().await);
}

#[tokio::test]
async fn test_get_failure_is_propagated() {
    let business = BusinessManager::new(Arc::new(UnreachableStore));
    assert!(matches!(
        business.read_business("B1").await,
        Err(RecordError::StoreError(_))
    ));

    let loans = LoanManager::new(Arc::new(UnreachableStore));
    assert!(matches!(
        loans.create_loan("L1", &common::loan_fields("open", 1)).await,
        Err(RecordError::StoreError(_))
    ));
    assert!(matches!(
        loans.update_loan("L1", "open", "1").await,
        Err(RecordError::StoreError(_))
    ));
}

#[tokio::test]
async fn test_validation_failure_never_reaches_store() {
    let store = Arc::new(ReadOnlyStore::default());
    let manager = LoanManager::new(store.clone());

    let mut fields = common::loan_fields("open", 1);
    fields[6] = "nine".to_string();
    assert!(matches!(
        manager.create_loan("L1", &fields).await,
        Err(RecordError::ValidationError(_))
    ));
    assert_eq!(store.rejected_puts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_stored_bytes() {
    let store = Arc::new(InMemoryStore::new());
    store.put("L1", br#"{"LoanStatus":"open"}"#.to_vec()).await.unwrap();
    store.put("L2", b"".to_vec()).await.unwrap();
    let manager = LoanManager::new(store);

    assert!(matches!(
        manager.read_loan("L1").await,
        Err(RecordError::DecodeError { .. })
    ));
    assert!(matches!(
        manager.update_loan("L2", "open", "1").await,
        Err(RecordError::DecodeError { .. })
    ));
}
