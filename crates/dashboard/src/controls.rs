use serde::{Deserialize, Serialize};

use stockview_core::Sku;
use stockview_inventory::InventoryTable;

use crate::selection::{Series, SortMode, ViewSelection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> ControlOption<T> {
    fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Option lists and initial values for the four dashboard controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Legend checklist.
    pub series: Vec<ControlOption<Series>>,
    /// Sort radio.
    pub sort: Vec<ControlOption<SortMode>>,
    /// SKU multi-select, in table order.
    pub skus: Vec<ControlOption<Sku>>,
    /// SKU prefix checklist, sorted.
    pub prefixes: Vec<ControlOption<String>>,
    pub defaults: ViewSelection,
}

impl ControlOptions {
    pub fn from_table(table: &InventoryTable) -> Self {
        Self {
            series: Series::ALL
                .into_iter()
                .map(|s| ControlOption::new(s.label(), s))
                .collect(),
            sort: SortMode::ALL
                .into_iter()
                .map(|m| ControlOption::new(m.label(), m))
                .collect(),
            skus: table
                .skus()
                .map(|s| ControlOption::new(s.as_str(), s.clone()))
                .collect(),
            prefixes: table
                .prefixes()
                .into_iter()
                .map(|p| ControlOption::new(p.clone(), p))
                .collect(),
            defaults: ViewSelection::default(),
        }
    }
}
