use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use teller::builder;
use teller::error::Error;
use teller::ledger::Ledger;
use teller::reader::{AccountReader, OrderReader};
use teller::writer::StatementWriter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed accounts CSV file
    accounts: PathBuf,

    /// Transfer orders CSV file
    orders: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Seed the ledger; a broken seed file is fatal.
    let file = File::open(&cli.accounts).into_diagnostic()?;
    let mut seed = Vec::new();
    for row in AccountReader::new(file).accounts() {
        let row = row.into_diagnostic()?;
        seed.push(builder::build_record(row).into_diagnostic()?);
    }
    let ledger = Ledger::new(seed);

    // Process orders; a bad order is reported and skipped.
    let file = File::open(&cli.orders).into_diagnostic()?;
    for draft in OrderReader::new(file).orders() {
        match draft.and_then(|draft| builder::build_payment(draft).map_err(Error::from)) {
            Ok(payment) => {
                if let Err(e) = ledger.transfer_order(payment).await {
                    eprintln!("Transfer rejected: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading order: {e}");
            }
        }
    }

    // Output final state
    let stdout = io::stdout();
    let mut writer = StatementWriter::new(stdout.lock());
    writer
        .write_accounts(&ledger.statement().await)
        .into_diagnostic()?;

    Ok(())
}
