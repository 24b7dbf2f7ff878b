use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockview_dashboard::ControlOptions;
use stockview_inventory::InventoryTable;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct DashboardState {
    table: Arc<InventoryTable>,
    controls: ControlOptions,
    loaded_at: DateTime<Utc>,
}

impl DashboardState {
    pub fn new(table: Arc<InventoryTable>) -> Self {
        let controls = ControlOptions::from_table(&table);
        Self {
            table,
            controls,
            loaded_at: Utc::now(),
        }
    }

    pub fn table(&self) -> &InventoryTable {
        &self.table
    }

    pub fn controls(&self) -> &ControlOptions {
        &self.controls
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
