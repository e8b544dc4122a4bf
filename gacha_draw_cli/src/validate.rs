use tracing::info;

use crate::record::CatalogRecord;

/// True when all six required columns are non-blank after trimming.
pub fn is_eligible(record: &CatalogRecord) -> bool {
    record
        .required_fields()
        .iter()
        .all(|field| !field.trim().is_empty())
}

/// Keeps eligible rows in their original order. Partially filled rows
/// are dropped, never repaired. An empty result is not an error.
pub fn filter_eligible(rows: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
    let total = rows.len();
    let eligible: Vec<CatalogRecord> = rows.into_iter().filter(is_eligible).collect();
    info!(
        total,
        eligible = eligible.len(),
        skipped = total - eligible.len(),
        "validated catalog rows"
    );
    eligible
}
