use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum RecordError {
    #[error("Validation error: {0}")]
    #[diagnostic(code(ledger_records::validation))]
    ValidationError(String),

    #[error("Record {0} already exists. Cannot create it again")]
    #[diagnostic(code(ledger_records::conflict))]
    ConflictError(String),

    #[error("No data exists for key {0}")]
    #[diagnostic(code(ledger_records::not_found))]
    NotFoundError(String),

    #[error("Unable to decode record stored at {key}: {source}")]
    #[diagnostic(code(ledger_records::decode))]
    DecodeError {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to encode record for {key}: {source}")]
    #[diagnostic(code(ledger_records::encode))]
    EncodeError {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    #[diagnostic(code(ledger_records::store))]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("No operation named {0}")]
    #[diagnostic(code(ledger_records::unknown_operation))]
    UnknownOperation(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for RecordError {
    fn from(err: rocksdb::Error) -> Self {
        RecordError::StoreError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
