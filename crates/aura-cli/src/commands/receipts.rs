//! Receipt intake command

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use aura_core::advisor::format_money;
use aura_core::receipt::{simulate_receipt, AmountSource};

use super::Session;

/// Simulate extracting a receipt, then record it like any manual entry
pub async fn cmd_receipt(session: &mut Session, file: &str, delay_ms: u64) -> Result<()> {
    // Only the file name takes part in extraction
    let name = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string());

    println!("Analysing receipt {}...", name);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let extraction = simulate_receipt(&name, session.today)?;
    let amount_source = extraction.amount_source;
    let fingerprint = extraction.fingerprint.clone();
    let tx = session.ledger.add_transaction(extraction.transaction)?;

    println!("\n✓ Receipt parsed");
    println!("  Amount:      {}", format_money(tx.amount));
    println!("  Category:    {}", tx.category);
    println!("  Date:        {}", tx.date);
    println!("  Fingerprint: {}", &fingerprint[..12]);
    if amount_source == AmountSource::Digest {
        println!("  ℹ️  No amount in the file name, estimated from the receipt");
    }
    println!("  Note: changes are not persisted between runs");

    Ok(())
}
