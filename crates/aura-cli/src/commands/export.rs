//! Export command implementation

use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use aura_core::export::{goals_csv_path, write_export};
use aura_core::ExportFormat;

use super::Session;

pub fn cmd_export(session: &Session, format: &str, output: &Path) -> Result<()> {
    let format = ExportFormat::from_str(format).map_err(|e| anyhow!(e))?;

    // Never overwrite an existing file
    let mut targets = vec![output.to_path_buf()];
    if format == ExportFormat::Csv {
        targets.push(goals_csv_path(output));
    }
    if let Some(existing) = targets.iter().find(|p| p.exists()) {
        anyhow::bail!(
            "Output file already exists: {}\nUse a different filename or remove the existing file.",
            existing.display()
        );
    }

    println!("📦 Exporting {}...", format.as_str());

    let written = write_export(
        format,
        session.ledger.transactions(),
        session.ledger.goals(),
        output,
        session.today,
    )
    .with_context(|| format!("Failed to write export to {}", output.display()))?;

    println!(
        "✓ Exported {} transactions and {} goals",
        session.ledger.transactions().len(),
        session.ledger.goals().len()
    );
    for path in written {
        println!("  {}", path.display());
    }

    Ok(())
}
