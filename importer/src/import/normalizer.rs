use common::model::outcome::LineOutcome;
use common::model::record::InventoryRecord;
use common::model::supplier::SupplierProfile;

/// Availability stamped onto every imported listing.
const IMPORTED_AVAILABILITY: &str = "In stock";

/// Builds one write-ready record from the field values of one line.
///
/// Column order is the template contract: brand, generic, dosage form,
/// strength, manufacturer, batch number, price, expiry. Missing trailing
/// columns behave like empty ones. A line with fewer than two fields is
/// reported as malformed and produces no record.
pub fn normalize_line(fields: &[String], supplier: &SupplierProfile) -> LineOutcome {
    if fields.len() < 2 {
        return LineOutcome::SkippedMalformed;
    }

    LineOutcome::Parsed(InventoryRecord {
        brand_name: field(fields, 0).to_string(),
        generic_name: field(fields, 1).to_string(),
        dosage_form: text_or(fields, 2, "Tablet"),
        strength: text_or(fields, 3, "N/A"),
        manufacturer: text_or(fields, 4, "N/A"),
        batch_number: optional_text(fields, 5),
        price: clean_price(field(fields, 6)),
        expiry_date: optional_text(fields, 7),
        wholesaler_name: supplier.wholesaler_name.clone(),
        city: supplier.city.clone(),
        contact_method: supplier.contact_method.clone(),
        user_id: supplier.user_id.clone(),
        availability: IMPORTED_AVAILABILITY.to_string(),
    })
}

/// Strips currency symbols and thousands separators from a raw price cell
/// and parses what is left as a decimal number.
///
/// An empty cell carries no price, never a zero. A cell with nothing
/// parseable after stripping (no digits, stray extra dots) carries no price
/// either.
pub fn clean_price(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}

fn field<'a>(fields: &'a [String], idx: usize) -> &'a str {
    fields.get(idx).map(String::as_str).unwrap_or("")
}

fn text_or(fields: &[String], idx: usize, default: &str) -> String {
    let value = field(fields, idx);
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn optional_text(fields: &[String], idx: usize) -> Option<String> {
    let value = field(fields, idx);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
