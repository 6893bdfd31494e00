//! Aura CLI - Personal finance dashboard and advisor
//!
//! Usage:
//!   aura dashboard --period monthly     Summary, categories, goals, advice
//!   aura add 42.50 --category Food      Record a transaction
//!   aura receipt lunch_12.50.jpg        Simulate receipt intake
//!   aura export --format json -o out    Export transactions and goals

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let mut session = commands::open_session(
        cli.data.as_deref(),
        cli.config.as_deref(),
        cli.today.as_deref(),
    )?;

    match cli.command {
        Commands::Dashboard { period, json } => {
            commands::cmd_dashboard(&session, period.as_deref(), json)
        }
        Commands::Advise { json } => commands::cmd_advise(&session, json),
        Commands::Categories { period } => commands::cmd_categories(&session, period.as_deref()),
        Commands::Goals { action } => match action {
            None | Some(GoalsAction::List) => commands::cmd_goals_list(&session),
            Some(GoalsAction::Add {
                target,
                name,
                by,
                priority,
            }) => commands::cmd_goals_add(
                &mut session,
                &target,
                name.as_deref(),
                by.as_deref(),
                priority.as_deref(),
            ),
            Some(GoalsAction::Adjust { id, steps }) => {
                commands::cmd_goals_adjust(&mut session, &id, steps)
            }
        },
        Commands::Transactions { limit } => commands::cmd_transactions_list(&session, limit),
        Commands::Add {
            amount,
            kind,
            category,
            date,
            note,
        } => commands::cmd_add(
            &mut session,
            &amount,
            kind.as_deref(),
            category.as_deref(),
            date.as_deref(),
            note.as_deref(),
        ),
        Commands::Receipt { file, delay_ms } => {
            commands::cmd_receipt(&mut session, &file, delay_ms).await
        }
        Commands::Export { format, output } => commands::cmd_export(&session, &format, &output),
    }
}
