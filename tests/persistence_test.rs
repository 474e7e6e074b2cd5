#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: create a loan
    let mut csv1 = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        csv1,
        "createLoan,L1,INST-1,B1,P1,100,15/03/2024:10:30:00,RBI,9.5,15/03/2025,15/03/2024:10:30:00,open,100"
    )
    .unwrap();

    let mut cmd1 = Command::new(cargo_bin!("ledger-records"));
    cmd1.arg(csv1.path()).arg("--db-path").arg(&db_path);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("createLoan,success"));

    // 2. Second run against the same DB: the loan survived and is create-once
    let mut csv2 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv2, "updateLoan,L1,disbursed,40").unwrap();
    writeln!(csv2, "readLoan,L1").unwrap();
    writeln!(
        csv2,
        "createLoan,L1,INST-1,B1,P1,100,15/03/2024:10:30:00,RBI,9.5,15/03/2025,15/03/2024:10:30:00,open,100"
    )
    .unwrap();

    let mut cmd2 = Command::new(cargo_bin!("ledger-records"));
    cmd2.arg(csv2.path()).arg("--db-path").arg(&db_path);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);

    assert!(stdout2.contains("readLoan,success,\"100,disbursed\""));
    assert!(stdout2.contains("createLoan,failure,Record L1 already exists"));
}
