use std::collections::BTreeSet;

use stockview_core::entity::first_duplicate_id;
use stockview_core::{DomainError, DomainResult, Sku};

use crate::record::InventoryRecord;

/// Immutable snapshot of every inventory record, in source order.
///
/// Built once at startup and shared read-only for the lifetime of the
/// process. SKUs are unique within a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
}

impl InventoryTable {
    pub fn new(records: Vec<InventoryRecord>) -> DomainResult<Self> {
        if let Some(sku) = first_duplicate_id(&records) {
            return Err(DomainError::duplicate_sku(sku.as_str()));
        }
        Ok(Self { records })
    }

    /// The five-item dataset served when no data file is configured.
    pub fn sample() -> DomainResult<Self> {
        let rows = [
            ("Item1", 100, 50, 80, 20, "Description1"),
            ("Item2", 150, 70, 120, 30, "Description2"),
            ("Item3", 200, 90, 180, 40, "Description3"),
            ("Item4", 130, 60, 100, 25, "Description4"),
            ("Item5", 170, 80, 150, 35, "Description5"),
        ];

        let records = rows
            .into_iter()
            .map(|(sku, psl, rop, stock, on_order, desc)| -> DomainResult<InventoryRecord> {
                let sku = Sku::new(sku)?;
                Ok(InventoryRecord::new(sku, desc, stock, on_order, psl, rop))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Self::new(records)
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, sku: &Sku) -> Option<&InventoryRecord> {
        self.records.iter().find(|r| &r.sku == sku)
    }

    pub fn skus(&self) -> impl Iterator<Item = &Sku> {
        self.records.iter().map(|r| &r.sku)
    }

    /// Distinct SKU prefixes, sorted.
    pub fn prefixes(&self) -> Vec<String> {
        self.skus()
            .map(|s| s.prefix().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
