use serde::{Deserialize, Serialize};

/// Run-wide supplier details stamped onto every record of an import.
///
/// Mirrors the profile trio a supplier can later sync across all of their
/// listings, plus the account id that owns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub wholesaler_name: String,
    pub city: String,
    pub contact_method: String,
    pub user_id: String,
}
