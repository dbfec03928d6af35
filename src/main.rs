use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use stripe_nocfo_sync::application::engine::ReconciliationEngine;
use stripe_nocfo_sync::application::mapper::EntryMapper;
use stripe_nocfo_sync::domain::ports::{
    AccountingService, AccountingServiceBox, PaymentProvider, PaymentProviderBox,
};
use stripe_nocfo_sync::infrastructure::in_memory::{
    InMemoryAccountingService, InMemoryPaymentProvider,
};
use stripe_nocfo_sync::interfaces::json::snapshot_reader::SnapshotReader;
use stripe_nocfo_sync::interfaces::json::summary_writer::SummaryWriter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stripe snapshot JSON: balance transactions (newest-first) plus the
    /// refund and charge objects refunds resolve through
    stripe_snapshot: PathBuf,

    /// NOCFO document list JSON
    entries: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive("stripe_nocfo_sync=info".parse().unwrap());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.stripe_snapshot).into_diagnostic()?;
    let snapshot = SnapshotReader::new(file).read_stripe().into_diagnostic()?;

    let file = File::open(&cli.entries).into_diagnostic()?;
    let entries = SnapshotReader::new(file).read_entries().into_diagnostic()?;

    let provider: PaymentProviderBox = Box::new(InMemoryPaymentProvider::new(
        snapshot.transactions,
        snapshot.refunds,
        snapshot.charges,
    ));
    let recorder = InMemoryAccountingService::new(entries);
    let accounting: AccountingServiceBox = Box::new(recorder.clone());

    let transactions = provider.list_transactions().await.into_diagnostic()?;
    let entries = recorder.load_entries().await.into_diagnostic()?;
    tracing::info!(
        transactions = transactions.len(),
        entries = entries.len(),
        "loaded Stripe transactions and NOCFO entries"
    );

    let engine = ReconciliationEngine::new(EntryMapper::new(provider), accounting);
    let summary = engine.run(&transactions, &entries).await;

    tracing::info!(
        created = summary.created,
        updated = summary.updated,
        unchanged = summary.unchanged,
        skipped = summary.skipped,
        errors = summary.errors,
        "processing complete"
    );

    let stdout = io::stdout();
    let mut writer = SummaryWriter::new(stdout.lock());
    writer.write_summary(&summary).into_diagnostic()?;

    Ok(())
}
