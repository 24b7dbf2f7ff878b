//! Raw rows → validated inventory records.

use stockview_core::Sku;

use super::error::LoadError;
use super::parser::{RawRow, RawSheet};
use crate::record::InventoryRecord;

pub const COL_SKU: &str = "SKU";
pub const COL_PSL: &str = "PSL";
pub const COL_ROP: &str = "ROP";
pub const COL_STOCK: &str = "Stock";
pub const COL_ON_ORDER: &str = "On Order";
pub const COL_DESC: &str = "Desc";
pub const COL_INITIALIZED: &str = "Initialized";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_SKU,
    COL_PSL,
    COL_ROP,
    COL_STOCK,
    COL_ON_ORDER,
    COL_DESC,
    COL_INITIALIZED,
];

const TRUTHY: &[&str] = &["true", "yes", "y", "1", "x", "initialized"];

/// Map every initialized row to a record. The first bad row aborts the load.
pub fn map_records(sheet: &RawSheet) -> Result<Vec<InventoryRecord>, LoadError> {
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !sheet.has_column(c)) {
        return Err(LoadError::MissingColumn(*missing));
    }

    let mut records = Vec::with_capacity(sheet.rows.len());
    let mut skipped = 0usize;

    for row in &sheet.rows {
        if !is_initialized(row.get(COL_INITIALIZED)) {
            skipped += 1;
            continue;
        }
        records.push(map_row(row)?);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped rows not flagged as initialized");
    }
    Ok(records)
}

fn map_row(row: &RawRow) -> Result<InventoryRecord, LoadError> {
    let sku = Sku::new(row.get(COL_SKU)).map_err(|_| LoadError::MissingSku { row: row.line })?;

    Ok(InventoryRecord {
        sku,
        description: row.get(COL_DESC).to_string(),
        stock: quantity(row, COL_STOCK)?,
        on_order: quantity(row, COL_ON_ORDER)?,
        psl: quantity(row, COL_PSL)?,
        rop: quantity(row, COL_ROP)?,
    })
}

/// Interpret an `Initialized` cell. Blank and unrecognized text are false.
pub fn is_initialized(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    if TRUTHY.contains(&value.as_str()) {
        return true;
    }
    value.parse::<f64>().map(|n| n != 0.0 && !n.is_nan()).unwrap_or(false)
}

/// Parse a quantity cell, rounding up to the next whole unit. Blank is zero.
pub fn round_up_quantity(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    let n: f64 = value.parse().ok()?;
    if !n.is_finite() || n < 0.0 || n > u64::MAX as f64 {
        return None;
    }
    Some(n.ceil() as u64)
}

fn quantity(row: &RawRow, column: &'static str) -> Result<u64, LoadError> {
    let raw = row.get(column);
    round_up_quantity(raw).ok_or_else(|| LoadError::InvalidQuantity {
        row: row.line,
        column,
        value: raw.to_string(),
    })
}
