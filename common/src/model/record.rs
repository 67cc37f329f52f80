use serde::{Deserialize, Serialize};

/// One medicine listing in the shape the `Drugs` table expects.
///
/// This is the write-ready form of one CSV line: the first eight fields come
/// from the line itself (with template defaults applied), the rest is stamped
/// once per import run from the supplier's profile. `batch_number`, `price`
/// and `expiry_date` are genuinely optional columns and serialize as `null`
/// when absent — an absent price is not a zero price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub brand_name: String,
    pub generic_name: String,
    pub dosage_form: String,
    pub strength: String,
    pub manufacturer: String,
    pub batch_number: Option<String>,
    pub price: Option<f64>,
    /// Stored as opaque text, exactly as it appears in the source file.
    pub expiry_date: Option<String>,
    pub wholesaler_name: String,
    pub city: String,
    pub contact_method: String,
    /// Owner of the listing. Row-level visibility on the platform keys on
    /// this column: a wrong or missing owner hides the row from its supplier.
    pub user_id: String,
    pub availability: String,
}
