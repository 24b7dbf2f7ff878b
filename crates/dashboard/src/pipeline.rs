//! Filter and sort stages of the view pipeline.

use std::cmp::Reverse;
use std::collections::HashSet;

use stockview_core::Sku;
use stockview_inventory::{InventoryRecord, InventoryTable};

use crate::selection::{SortMode, ViewSelection};

/// Keep records that pass both the SKU filter and the prefix filter.
///
/// A prefix selects exactly the SKUs whose family (`Sku::prefix`) equals it,
/// so `PUMP` does not pull in `PUMPKIN-*`. Each filter only applies when
/// non-empty. Source order is preserved.
pub fn filter_records<'a>(
    records: &'a [InventoryRecord],
    selection: &ViewSelection,
) -> Vec<&'a InventoryRecord> {
    let skus: HashSet<&Sku> = selection.skus.iter().collect();

    records
        .iter()
        .filter(|r| skus.is_empty() || skus.contains(&r.sku))
        .filter(|r| {
            selection.prefixes.is_empty()
                || selection.prefixes.iter().any(|p| r.sku.prefix() == p)
        })
        .collect()
}

/// Stable sort; PSL ties keep their incoming order.
pub fn sort_records(rows: &mut [&InventoryRecord], mode: SortMode) {
    match mode {
        SortMode::ItemAsc => rows.sort_by(|a, b| a.sku.cmp(&b.sku)),
        SortMode::PslDesc => rows.sort_by_key(|r| Reverse(r.psl)),
    }
}

/// Rows to chart for `selection`, in display order.
pub fn build_view<'a>(
    table: &'a InventoryTable,
    selection: &ViewSelection,
) -> Vec<&'a InventoryRecord> {
    let mut rows = filter_records(table.records(), selection);
    sort_records(&mut rows, selection.sort);
    rows
}
