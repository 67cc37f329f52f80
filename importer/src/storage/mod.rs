//! Write access to the hosted storage platform.
//!
//! The importer owns exactly one storage operation: inserting a batch of
//! listings in a single round trip. The operation sits behind a trait;
//! `main` constructs the concrete platform client and hands it to the
//! orchestrator.

use async_trait::async_trait;
use common::model::record::InventoryRecord;

mod supabase;

pub use supabase::SupabaseStore;

/// Bulk write access to the `Drugs` table.
#[async_trait]
pub trait DrugStore: Send + Sync {
    /// Inserts every record in one call. The batch commits or fails as a
    /// unit; on failure the platform's error message comes back as the
    /// reason, with no per-record detail.
    async fn insert_batch(&self, records: &[InventoryRecord]) -> Result<(), String>;
}
