use common::model::outcome::{BatchOutcome, ImportSummary, LineOutcome};
use common::model::supplier::SupplierProfile;
use log::{error, info, warn};
use std::fs;
use uuid::Uuid;

use crate::import::{batcher, normalizer, tokenizer};
use crate::storage::DrugStore;

/// Runs one whole import: reads `file_path`, turns its data lines into
/// records stamped with `supplier`, and writes them to `store` in
/// consecutive batches of `batch_size`.
///
/// Batches are submitted strictly one after another. A batch the platform
/// rejects is tallied as failed and the run moves on to the next; there is
/// no retry. Only a missing owner id or an unreadable source file aborts
/// the run, and then nothing has been written.
pub async fn run_import(
    store: &dyn DrugStore,
    file_path: &str,
    supplier: &SupplierProfile,
    batch_size: usize,
) -> Result<ImportSummary, String> {
    if supplier.user_id.trim().is_empty() {
        return Err(
            "user_id must be set: rows without an owner are hidden from every supplier account"
                .to_string(),
        );
    }
    if Uuid::parse_str(&supplier.user_id).is_err() {
        warn!(
            "user_id '{}' is not a UUID; unless it matches a real account id, \
             the supplier will not see the imported rows",
            supplier.user_id
        );
    }

    info!("Starting import for {}...", supplier.wholesaler_name);

    let content =
        fs::read_to_string(file_path).map_err(|e| format!("Cannot read {}: {}", file_path, e))?;

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    let mut records = Vec::new();
    let mut skipped_lines = 0usize;
    // The first surviving line is the template header, whatever it says.
    for line in lines.iter().skip(1) {
        let fields = tokenizer::split_line(line);
        match normalizer::normalize_line(&fields, supplier) {
            LineOutcome::Parsed(record) => records.push(record),
            LineOutcome::SkippedMalformed => skipped_lines += 1,
        }
    }
    if skipped_lines > 0 {
        warn!("Skipped {} malformed line(s)", skipped_lines);
    }

    let mut summary = ImportSummary {
        wholesaler_name: supplier.wholesaler_name.clone(),
        succeeded: 0,
        failed: 0,
        skipped_lines,
        batches: Vec::new(),
    };

    for batch in batcher::batches(&records, batch_size) {
        match store.insert_batch(batch).await {
            Ok(()) => {
                summary.succeeded += batch.len();
                summary.batches.push(BatchOutcome::Committed(batch.len()));
            }
            Err(reason) => {
                error!("Batch insert error: {}", reason);
                summary.failed += batch.len();
                summary.batches.push(BatchOutcome::Failed {
                    records: batch.len(),
                    reason,
                });
            }
        }
    }

    Ok(summary)
}
