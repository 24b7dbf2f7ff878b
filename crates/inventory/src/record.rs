use serde::{Deserialize, Serialize};

use stockview_core::{Entity, Sku};

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub sku: Sku,
    pub description: String,
    /// Available quantity.
    pub stock: u64,
    /// Quantity ordered but not yet received.
    pub on_order: u64,
    /// Preferred stock level.
    pub psl: u64,
    /// Reorder point.
    pub rop: u64,
}

impl InventoryRecord {
    pub fn new(
        sku: Sku,
        description: impl Into<String>,
        stock: u64,
        on_order: u64,
        psl: u64,
        rop: u64,
    ) -> Self {
        Self {
            sku,
            description: description.into(),
            stock,
            on_order,
            psl,
            rop,
        }
    }
}

impl Entity for InventoryRecord {
    type Id = Sku;

    fn id(&self) -> &Sku {
        &self.sku
    }
}
