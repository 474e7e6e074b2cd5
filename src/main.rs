use clap::Parser;
use ledger_records::application::business::BusinessManager;
use ledger_records::application::dispatch::Dispatcher;
use ledger_records::application::loan::LoanManager;
use ledger_records::domain::ports::KeyedStoreRef;
use ledger_records::infrastructure::in_memory::InMemoryStore;
use ledger_records::interfaces::csv::invocation_reader::InvocationReader;
use ledger_records::interfaces::csv::response_writer::ResponseWriter;
use ledger_records::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file of invocations, one `function,arg1,arg2,...` per row
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "LEDGER_RECORDS_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Reject unknown wallet kinds in readWalletID instead of returning an empty ID
    #[arg(long, env = "LEDGER_RECORDS_STRICT_WALLET_KIND")]
    strict_wallet_kind: bool,

    /// Log filter directive (e.g. "info", "ledger_records=debug")
    #[arg(long, env = telemetry::LOG_ENV_VAR, default_value = "info")]
    log: String,
}

/// Opens one store namespace per manager: (business, loan).
fn open_stores(db_path: Option<&Path>) -> Result<(KeyedStoreRef, KeyedStoreRef)> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            use ledger_records::infrastructure::rocksdb::{CF_BUSINESS, CF_LOANS, RocksDBStore};

            tracing::info!(path = %path.display(), "using RocksDB storage");
            let store = RocksDBStore::open(path)?;
            Ok((
                Arc::new(store.namespace(CF_BUSINESS)),
                Arc::new(store.namespace(CF_LOANS)),
            ))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(in_memory_stores())
        }
        None => Ok(in_memory_stores()),
    }
}

fn in_memory_stores() -> (KeyedStoreRef, KeyedStoreRef) {
    (Arc::new(InMemoryStore::new()), Arc::new(InMemoryStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(&cli.log);

    let (business_store, loan_store) = open_stores(cli.db_path.as_deref())?;
    let business = Arc::new(
        BusinessManager::new(business_store).with_strict_wallet_kind(cli.strict_wallet_kind),
    );
    let loans = Arc::new(LoanManager::new(loan_store));
    let dispatcher = Dispatcher::with_managers(business, loans);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = InvocationReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock())?;

    for invocation in reader.invocations() {
        match invocation {
            Ok(invocation) => {
                let outcome = dispatcher
                    .invoke(&invocation.function, &invocation.args)
                    .await;
                if let Err(e) = &outcome {
                    tracing::warn!("Error processing invocation {}: {}", invocation.function, e);
                }
                writer.write_outcome(&invocation.function, &outcome)?;
            }
            Err(e) => {
                tracing::error!("Error reading invocation: {}", e);
            }
        }
    }

    writer.flush()?;
    Ok(())
}
