//! Custodia — tamper-evident audit ledger demo CLI
//!
//! Runs one or all of the three scenarios against the in-memory stores.
//! Each scenario uses real Custodia components (ledger recorder, chain
//! verifier, evidence intake, custody recorder) wired together the way a
//! case-management backend would wire them.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- case-lifecycle
//!   cargo run -p demo -- custody-chain
//!   cargo run -p demo -- tamper-detection

mod scenarios;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use custodia_contracts::error::CustodiaResult;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Custodia — hash-chained audit ledger for forensic case management.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Custodia audit ledger demo",
    long_about = "Runs Custodia demo scenarios showing hash-chained audit logging,\n\
                  chain-of-custody recording, and tamper detection."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: full case lifecycle (create, upload, edit, access, purge).
    CaseLifecycle,
    /// Scenario 2: chain-of-custody events, including a failed VERIFIED check.
    CustodyChain,
    /// Scenario 3: content and linkage tampering caught by the verifier.
    TamperDetection,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::CaseLifecycle => scenarios::case_lifecycle::run(),
        Command::CustodyChain => scenarios::custody_chain::run(),
        Command::TamperDetection => scenarios::tamper_detection::run(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_all() -> CustodiaResult<()> {
    scenarios::case_lifecycle::run()?;
    scenarios::custody_chain::run()?;
    scenarios::tamper_detection::run()
}

fn print_banner() {
    println!("==============================================================");
    println!("  CUSTODIA — tamper-evident audit ledger");
    println!("  every action chained, every link checked");
    println!("==============================================================");
    println!();
}
