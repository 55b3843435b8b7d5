use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ups_invoice_engine::engine::{EngineReport, InvoiceEngine};
use ups_invoice_engine::storage::SummaryStorage;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: If I was making a much more sophisticated CLI application, I would have used the clap crate
    //      to handle the CLI parsing and execution.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: ups-invoice-engine [invoice].csv [log_level:optional] > [summaries].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let storage = Arc::new(SummaryStorage::new());
    let engine = InvoiceEngine::new(storage.clone());

    let timer = Instant::now();
    let report = engine.run(path).await?;
    let duration = timer.elapsed();

    info!(
        "Aggregated {} rows ({} skipped) into {} shipments in: {duration:?}",
        report.rows_read,
        report.rows_skipped,
        storage.len()
    );

    log_report(&report);
    write_summaries_to_stdout(storage)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn log_report(report: &EngineReport) {
    for total in &report.breakdown {
        info!(
            "Charge category [{}] ({}): {} net over {} lines / {} shipments",
            total.category.code(),
            total.category.name(),
            total.net_amount,
            total.charge_lines,
            total.shipments
        );
    }

    for mismatch in &report.reconciliation {
        warn!(
            "Invoice [{}] does not reconcile: stated total {}, summed {}, tolerance {}",
            mismatch.invoice_number,
            mismatch.expected,
            mismatch.observed,
            mismatch.tolerance
        );
    }
}

fn write_summaries_to_stdout(storage: Arc<SummaryStorage>) -> Result<()> {
    let mut summaries: Vec<_> = storage.iter().map(|entry| entry.value().clone()).collect();
    summaries.sort_by(|a, b| a.tracking_number.cmp(&b.tracking_number));

    let mut writer = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    for summary in summaries {
        writer.serialize(summary)?;
    }

    writer.flush()?;

    Ok(())
}
