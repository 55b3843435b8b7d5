use std::collections::HashMap;
use std::fs::File;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::io::BufReader;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use csv::ReaderBuilder;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error};

use crate::engine::breakdown::CategoryBreakdown;
use crate::engine::reconcile::Reconciler;
use crate::engine::{CategoryTotal, InvoiceMismatch};
use crate::models::{ChargeRow, ShipmentGroup};
use crate::parser::project;
use crate::storage::Storage;
use crate::types::GroupKey;

/// Aggregation pipeline for one billing export: a blocking CSV reader feeds
/// parsed rows over a bounded channel to a router, which fans them out to
/// partition workers by grouping-key hash. Groups are disjoint, so each
/// partition aggregates independently and writes its finished summaries to
/// the shared storage.
pub struct InvoiceEngine<S: Storage> {
    storage: Arc<S>,
    backpressure: usize,
    partitions: usize,
}

/// What a run observed besides the summaries themselves.
#[derive(Debug)]
pub struct EngineReport {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub reconciliation: Vec<InvoiceMismatch>,
    pub breakdown: Vec<CategoryTotal>,
}

impl<S: Storage> InvoiceEngine<S> {
    /// Creates a new engine instance writing into the provided storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            backpressure: 256,
            partitions: 4,
        }
    }

    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Orchestrates the end-to-end aggregation pipeline for one CSV file.
    pub async fn run(&self, path: &str) -> anyhow::Result<EngineReport> {
        let (sender, receiver) = mpsc::channel::<ChargeRow>(self.backpressure);
        let rows_skipped = Arc::new(AtomicUsize::new(0));
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender, rows_skipped.clone());
        let mut report = self.aggregate(receiver).await?;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        report.rows_skipped = rows_skipped.load(Ordering::Relaxed);
        Ok(report)
    }

    fn spawn_csv_reader(
        &self,
        path: String,
        sender: mpsc::Sender<ChargeRow>,
        rows_skipped: Arc<AtomicUsize>,
    ) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            //NOTE: Exports are headerless and positional; width varies between UPS account
            //      configurations, so the reader stays flexible and records are validated
            //      per row instead.
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for (ordinal, result) in reader.byte_records().enumerate() {
                let record = match result {
                    Ok(record) => record,
                    Err(error) => {
                        error!("CSV read error on row {ordinal}: {error}");
                        rows_skipped.fetch_add(1, Ordering::Relaxed);
                        continue;
                    }
                };

                match project(&record, ordinal) {
                    Ok(row) => {
                        if sender.blocking_send(row).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("Row projection error: {error}");
                        rows_skipped.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        })
    }

    async fn aggregate(&self, mut receiver: mpsc::Receiver<ChargeRow>) -> anyhow::Result<EngineReport> {
        let mut reconciler = Reconciler::new();
        let mut breakdown = CategoryBreakdown::new();

        let mut senders = Vec::with_capacity(self.partitions);
        let mut workers = Vec::with_capacity(self.partitions);

        for _ in 0..self.partitions {
            let (sender, receiver) = mpsc::unbounded_channel::<(GroupKey, ChargeRow)>();
            workers.push(tokio::spawn(run_partition(receiver, self.storage.clone())));
            senders.push(sender);
        }

        let mut rows_read = 0usize;

        while let Some(row) = receiver.recv().await {
            rows_read += 1;
            reconciler.observe(&row);
            breakdown.observe(&row);

            let key = group_key(&row);
            let slot = partition_for(&key, senders.len());

            if senders[slot].send((key, row)).is_err() {
                error!("Partition worker [{slot}] is gone; dropping row");
            }
        }

        //NOTE: Dropping the senders closes the partition channels so every worker can
        //      finish its remaining groups and flush them into storage.
        drop(senders);

        for worker in workers {
            if let Err(error) = worker.await {
                error!("A partition worker did not finish cleanly: {error:?}");
            }
        }

        Ok(EngineReport {
            rows_read,
            rows_skipped: 0,
            reconciliation: reconciler.finish(),
            breakdown: breakdown.finish(),
        })
    }
}

async fn run_partition<S: Storage>(
    mut receiver: mpsc::UnboundedReceiver<(GroupKey, ChargeRow)>,
    storage: Arc<S>,
) {
    let mut groups = HashMap::<GroupKey, ShipmentGroup>::new();

    while let Some((key, row)) = receiver.recv().await {
        groups
            .entry(key.clone())
            .or_insert_with(|| ShipmentGroup::new(key))
            .push(row);
    }

    debug!("Partition finishing {} groups", groups.len());

    for (key, group) in groups {
        storage.save(key, group.finish());
    }
}

/// Rows without a tracking number (untracked miscellaneous fees) become
/// singleton groups under a synthetic `invoice#ordinal` key.
fn group_key(row: &ChargeRow) -> GroupKey {
    if let Some(tracking) = row.tracking_number.as_deref() {
        return tracking.to_string();
    }

    let invoice = row.invoice_number.as_deref().unwrap_or("uninvoiced");
    format!("{}#{}", invoice, row.ordinal)
}

fn partition_for(key: &str, partitions: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % partitions as u64) as usize
}
