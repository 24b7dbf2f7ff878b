//! One-time spreadsheet ingestion.
//!
//! Reading is split in two stages: `parser` turns a file into header-keyed
//! raw rows, `mapper` turns raw rows into validated records.

pub mod error;
pub mod mapper;
pub mod parser;

use std::path::Path;

use crate::table::InventoryTable;

pub use error::LoadError;
pub use mapper::{map_records, REQUIRED_COLUMNS};
pub use parser::{read_raw_sheet, RawRow, RawSheet};

/// Loads an [`InventoryTable`] from an Excel workbook or CSV file.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetLoader {
    sheet: Option<String>,
}

impl SpreadsheetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the named worksheet instead of the first one (Excel only).
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    pub fn load(&self, path: &Path) -> Result<InventoryTable, LoadError> {
        let raw = read_raw_sheet(path, self.sheet.as_deref())?;
        let total_rows = raw.rows.len();
        let records = map_records(&raw)?;
        let table = InventoryTable::new(records)?;

        tracing::info!(
            path = %path.display(),
            rows = total_rows,
            initialized = table.len(),
            "inventory data loaded"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_initialized_rows_with_rounded_quantities() {
        let file = csv_file(
            "SKU,PSL,ROP,Stock,On Order,Desc,Initialized\n\
             PUMP-1,100.2,50,80,20,Pump,Yes\n\
             PUMP-2,150,70,120,30,Spare pump,No\n\
             BOLT-1,9.5,4,3.01,0,Bolt,TRUE\n",
        );

        let table = SpreadsheetLoader::new().load(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let bolt = table.get(&"BOLT-1".parse().unwrap()).unwrap();
        assert_eq!(bolt.psl, 10);
        assert_eq!(bolt.rop, 4);
        assert_eq!(bolt.stock, 4);
        assert_eq!(bolt.on_order, 0);

        let pump = table.get(&"PUMP-1".parse().unwrap()).unwrap();
        assert_eq!(pump.psl, 101);
        assert_eq!(pump.description, "Pump");
        assert!(table.get(&"PUMP-2".parse().unwrap()).is_none());
    }

    #[test]
    fn duplicate_sku_fails_the_load() {
        let file = csv_file(
            "SKU,PSL,ROP,Stock,On Order,Desc,Initialized\n\
             A,1,1,1,1,a,1\n\
             A,2,2,2,2,b,1\n",
        );

        let err = SpreadsheetLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Domain(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_fails_fast() {
        let err = SpreadsheetLoader::new()
            .load(Path::new("does-not-exist.xlsx"))
            .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
