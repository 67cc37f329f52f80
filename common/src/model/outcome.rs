use crate::model::record::InventoryRecord;
use serde::Serialize;

/// What became of one source line.
#[derive(Clone, Debug, Serialize)]
pub enum LineOutcome {
    Parsed(InventoryRecord),
    SkippedMalformed,
}

/// What became of one submitted batch. A batch commits or fails as a unit;
/// the platform reports no per-record detail.
#[derive(Clone, Debug, Serialize)]
pub enum BatchOutcome {
    Committed(usize),
    Failed { records: usize, reason: String },
}

/// End-of-run tallies for one import.
#[derive(Clone, Debug, Serialize)]
pub struct ImportSummary {
    pub wholesaler_name: String,
    /// Records in batches the platform committed.
    pub succeeded: usize,
    /// Records in batches the platform rejected.
    pub failed: usize,
    /// Source lines dropped as malformed before batching.
    pub skipped_lines: usize,
    /// Per-batch outcomes, in submission order.
    pub batches: Vec<BatchOutcome>,
}
