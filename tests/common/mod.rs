#![allow(dead_code)]

use rand::Rng;
use rand::distributions::Alphanumeric;
use std::fs::File;
use std::io::Error;
use std::path::Path;

fn token(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Ten valid positional business fields with random values.
pub fn random_business_fields(rng: &mut impl Rng) -> Vec<String> {
    vec![
        format!("Business {}", token(rng, 8)),
        format!("AC-{}", rng.gen_range(1..1_000_000)),
        rng.gen_range(i64::MIN..=i64::MAX).to_string(),
        token(rng, 32),
        token(rng, 32),
        token(rng, 32),
        format!("{:.2}", rng.gen_range(0.0..40.0)),
        format!("{:.2}", rng.gen_range(0.0..40.0)),
        rng.gen_range(0..50).to_string(),
        rng.gen_range(0..i64::MAX).to_string(),
    ]
}

/// Eleven valid positional loan fields with the given status.
pub fn loan_fields(status: &str, amount: i64) -> Vec<String> {
    let amount = amount.to_string();
    [
        "INST-1",
        "B1",
        "P1",
        amount.as_str(),
        "15/03/2024:10:30:00",
        "RBI",
        "9.5",
        "15/03/2025",
        "16/03/2024:09:00:00",
        status,
        amount.as_str(),
    ]
    .iter()
    .map(|v| v.to_string())
    .collect()
}

/// Writes `loans` createLoan rows followed by one readLoan per loan.
pub fn generate_invocations(path: &Path, loans: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(file);

    for i in 1..=loans {
        let mut row = vec!["createLoan".to_string(), format!("L{i}")];
        row.extend(loan_fields("open", i as i64));
        wtr.write_record(&row)?;
    }
    for i in 1..=loans {
        let id = format!("L{i}");
        wtr.write_record(["readLoan", id.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
