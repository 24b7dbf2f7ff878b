use std::path::PathBuf;

use crate::loader::{LoadError, SpreadsheetLoader};
use crate::table::InventoryTable;

/// Where the dashboard's table comes from. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Built-in five-item sample.
    #[default]
    Sample,
    /// Spreadsheet on disk (`.xlsx`, `.xls` or `.csv`).
    File {
        path: PathBuf,
        sheet: Option<String>,
    },
}

impl DataSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            sheet: None,
        }
    }

    pub fn load(&self) -> Result<InventoryTable, LoadError> {
        match self {
            DataSource::Sample => {
                let table = InventoryTable::sample()?;
                tracing::info!(records = table.len(), "using built-in sample inventory");
                Ok(table)
            }
            DataSource::File { path, sheet } => {
                let loader = match sheet {
                    Some(name) => SpreadsheetLoader::new().with_sheet(name.clone()),
                    None => SpreadsheetLoader::new(),
                };
                loader.load(path)
            }
        }
    }
}

impl core::fmt::Display for DataSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataSource::Sample => f.write_str("sample"),
            DataSource::File { path, sheet: None } => write!(f, "{}", path.display()),
            DataSource::File {
                path,
                sheet: Some(sheet),
            } => write!(f, "{}#{sheet}", path.display()),
        }
    }
}
