//! Inventory data provider.
//!
//! Owns the immutable record table shown by the dashboard and the one-time
//! loading of that table from the built-in sample or a spreadsheet file.

pub mod loader;
pub mod record;
pub mod source;
pub mod table;

pub use loader::{LoadError, SpreadsheetLoader};
pub use record::InventoryRecord;
pub use source::DataSource;
pub use table::InventoryTable;
