use super::records::{CreationPolicy, RecordStore};
use crate::domain::loan::LoanRecord;
use crate::domain::ports::{KeyedStoreRef, NoReferenceCheck, ReferenceValidator};
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Creates, reads and updates loan records.
///
/// Loans are written with [`CreationPolicy::CreateOnce`]; after creation only
/// status and balance may change.
pub struct LoanManager {
    records: RecordStore<LoanRecord>,
    references: Arc<dyn ReferenceValidator>,
}

impl LoanManager {
    pub fn new(store: KeyedStoreRef) -> Self {
        Self {
            records: RecordStore::new(store),
            references: Arc::new(NoReferenceCheck),
        }
    }

    pub fn with_reference_validator(mut self, references: Arc<dyn ReferenceValidator>) -> Self {
        self.references = references;
        self
    }

    /// Validates the eleven positional fields and writes a new loan at `loan_id`.
    ///
    /// An occupied key is a `ConflictError` whatever the fields hold; it is
    /// checked before any field is parsed. Returns the confirmation message
    /// for the caller.
    pub async fn create_loan(&self, loan_id: &str, fields: &[String]) -> Result<String> {
        self.records
            .check_policy(loan_id, CreationPolicy::CreateOnce)
            .await
            .inspect_err(|e| warn!(loan_id, error = %e, "loan creation rejected"))?;

        let record = LoanRecord::from_fields(fields)?;
        self.references.validate(&record).await?;
        self.records.save(loan_id, &record).await?;

        info!(loan_id, status = %record.status, "loan record written");
        Ok(format!("Added loan to the ledger with ID: {loan_id}"))
    }

    pub async fn read_loan(&self, loan_id: &str) -> Result<LoanRecord> {
        debug!(loan_id, "reading loan record");
        self.records.load(loan_id).await
    }

    /// Replaces the status and balance of an existing loan, leaving every
    /// other field as stored.
    pub async fn update_loan(
        &self,
        loan_id: &str,
        new_status: &str,
        new_balance: &str,
    ) -> Result<String> {
        let mut record = self.records.load(loan_id).await?;
        let previous = record.status;
        record.apply_update(new_status, new_balance)?;

        if previous.is_settled() && !record.status.is_settled() {
            warn!(loan_id, to = %record.status, "reopening a settled loan");
        }

        self.records.save(loan_id, &record).await?;
        info!(
            loan_id,
            from = %previous,
            to = %record.status,
            balance = record.balance,
            "loan record updated"
        );
        Ok(format!("Successfully updated loan {loan_id}"))
    }
}
