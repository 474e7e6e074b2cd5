use crate::domain::ports::KeyedStoreRef;
use crate::error::{RecordError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// What a creation does when its key already holds a value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CreationPolicy {
    /// Last write wins.
    Overwrite,
    /// Fail with `ConflictError` if anything, even an empty value, is present.
    CreateOnce,
}

/// Typed access to one store namespace holding records of type `R`.
///
/// Records are stored as JSON.
pub struct RecordStore<R> {
    store: KeyedStoreRef,
    _record: PhantomData<fn() -> R>,
}

impl<R> RecordStore<R>
where
    R: Serialize + DeserializeOwned,
{
    pub fn new(store: KeyedStoreRef) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Fetches and decodes the record at `key`.
    pub async fn load(&self, key: &str) -> Result<R> {
        let bytes = self
            .store
            .get(key)
            .await?
            .ok_or_else(|| RecordError::NotFoundError(key.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|source| RecordError::DecodeError {
            key: key.to_string(),
            source,
        })
    }

    /// Fails with `ConflictError` if `policy` forbids writing at `key`.
    pub async fn check_policy(&self, key: &str, policy: CreationPolicy) -> Result<()> {
        if policy == CreationPolicy::CreateOnce && self.store.exists(key).await? {
            return Err(RecordError::ConflictError(key.to_string()));
        }
        Ok(())
    }

    /// Writes a new record at `key` under the given policy.
    pub async fn create(&self, key: &str, record: &R, policy: CreationPolicy) -> Result<()> {
        self.check_policy(key, policy).await?;
        self.save(key, record).await
    }

    /// Unconditionally writes `record` at `key`.
    pub async fn save(&self, key: &str, record: &R) -> Result<()> {
        let bytes = serde_json::to_vec(record).map_err(|source| RecordError::EncodeError {
            key: key.to_string(),
            source,
        })?;
        debug!(key, bytes = bytes.len(), "writing record");
        self.store.put(key, bytes).await
    }
}
