use ledger_records::application::business::BusinessManager;
use ledger_records::application::dispatch::Dispatcher;
use ledger_records::application::loan::LoanManager;
use ledger_records::domain::ports::KeyedStoreRef;
use ledger_records::infrastructure::in_memory::InMemoryStore;
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_managers_shared_across_tasks() {
    let business_store: KeyedStoreRef = Arc::new(InMemoryStore::new());
    let loan_store: KeyedStoreRef = Arc::new(InMemoryStore::new());

    let business = Arc::new(BusinessManager::new(business_store));
    let loans = Arc::new(LoanManager::new(loan_store));
    let dispatcher = Arc::new(Dispatcher::with_managers(business, loans.clone()));

    // Verify Send + Sync by spawning tasks
    let mut handles = Vec::new();
    for i in 0..8 {
        let dispatcher = dispatcher.clone();
        handles.push(tokio::spawn(async move {
            let mut args = vec![format!("L{i}")];
            args.extend(common::loan_fields("sanctioned", i));
            dispatcher.invoke("createLoan", &args).await.unwrap();
            dispatcher
                .invoke("readLoan", &[format!("L{i}")])
                .await
                .unwrap()
                .payload_str()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), format!("{i},sanctioned"));
    }
    assert_eq!(loans.read_loan("L3").await.unwrap().sanction_amount, 3);
}

#[tokio::test]
async fn test_business_and_loan_namespaces_are_separate() {
    let dispatcher = Dispatcher::with_managers(
        Arc::new(BusinessManager::new(Arc::new(InMemoryStore::new()))),
        Arc::new(LoanManager::new(Arc::new(InMemoryStore::new()))),
    );

    let mut args = vec!["X1".to_string()];
    args.extend(common::loan_fields("open", 10));
    dispatcher.invoke("createLoan", &args).await.unwrap();

    // Same key, other manager: nothing there
    assert!(
        dispatcher
            .invoke("readBusiness", &["X1".to_string()])
            .await
            .is_err()
    );
}
