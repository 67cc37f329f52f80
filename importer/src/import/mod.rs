//! Bulk CSV import pipeline for supplier inventory.
//!
//! Wholesalers hand over their stock lists as CSV files following the
//! PharmaSearch template. One run of this pipeline turns such a file into
//! rows of the platform's `Drugs` table, in four stages:
//!
//! 1. `tokenizer` splits each raw line into field values, honouring
//!    double-quoted fields so embedded commas survive.
//! 2. `normalizer` maps the fields onto an `InventoryRecord`, applying the
//!    template defaults and the price cleanup, or flags the line malformed.
//! 3. `batcher` groups the records into fixed-size batches.
//! 4. `orchestrator` submits the batches sequentially to the storage
//!    platform and tallies which committed and which were rejected. A
//!    rejected batch never stops the run; only an unreadable source file
//!    aborts it.

pub mod batcher;
pub mod normalizer;
pub mod orchestrator;
pub mod tokenizer;
