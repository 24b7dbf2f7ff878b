//! File → header-keyed raw rows (Excel workbooks and CSV).

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;

use super::error::LoadError;

/// One data row. Cells are keyed by normalized header (trimmed, lowercase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line in the source, counting the header as line 1.
    pub line: usize,
    pub cells: HashMap<String, String>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> &str {
        self.cells
            .get(&normalize_header(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Whole worksheet: normalized headers plus non-blank data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawSheet {
    pub fn has_column(&self, column: &str) -> bool {
        let wanted = normalize_header(column);
        self.headers.iter().any(|h| *h == wanted)
    }
}

pub fn normalize_header(header: &str) -> String {
    header.trim().to_ascii_lowercase()
}

/// Source of raw rows for one file format.
pub trait SheetReader {
    fn read(&self, path: &Path) -> Result<RawSheet, LoadError>;
}

pub struct CsvReader;

impl SheetReader for CsvReader {
    fn read(&self, path: &Path) -> Result<RawSheet, LoadError> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| LoadError::CsvParse(e.to_string()))?
            .iter()
            .map(normalize_header)
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| LoadError::CsvParse(e.to_string()))?;
            push_row(&mut rows, &headers, idx + 2, record.iter().map(str::to_string));
        }

        Ok(RawSheet { headers, rows })
    }
}

/// Reads `.xlsx` / `.xls` workbooks. Uses the first worksheet unless one is named.
pub struct ExcelReader<'a> {
    pub sheet: Option<&'a str>,
}

impl SheetReader for ExcelReader<'_> {
    fn read(&self, path: &Path) -> Result<RawSheet, LoadError> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| LoadError::ExcelParse(e.to_string()))?;

        let sheet_name = match self.sheet {
            Some(name) => {
                if !workbook.sheet_names().iter().any(|s| s == name) {
                    return Err(LoadError::SheetNotFound(name.to_string()));
                }
                name.to_string()
            }
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| LoadError::ExcelParse("workbook has no worksheets".to_string()))?,
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| LoadError::ExcelParse(e.to_string()))?;

        let mut cells = range.rows();
        let headers: Vec<String> = cells
            .next()
            .ok_or(LoadError::MissingHeader)?
            .iter()
            .map(|cell| normalize_header(&cell.to_string()))
            .collect();

        let mut rows = Vec::new();
        for (idx, data_row) in cells.enumerate() {
            push_row(&mut rows, &headers, idx + 2, data_row.iter().map(|c| c.to_string()));
        }

        Ok(RawSheet { headers, rows })
    }
}

fn push_row(
    rows: &mut Vec<RawRow>,
    headers: &[String],
    line: usize,
    values: impl Iterator<Item = String>,
) {
    let cells: HashMap<String, String> = headers
        .iter()
        .zip(values)
        .map(|(h, v)| (h.clone(), v.trim().to_string()))
        .collect();

    // Fully blank rows (trailing formatting, separators) carry no record.
    if cells.values().all(|v| v.is_empty()) {
        return;
    }
    rows.push(RawRow { line, cells });
}

/// Pick a reader by file extension and read the whole sheet.
pub fn read_raw_sheet(path: &Path, sheet: Option<&str>) -> Result<RawSheet, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => CsvReader.read(path),
        "xlsx" | "xlsm" | "xls" => ExcelReader { sheet }.read(path),
        _ => Err(LoadError::UnsupportedFormat(ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{SpreadsheetLoader, REQUIRED_COLUMNS as REQUIRED};
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_with_suffix(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn csv_headers_are_normalized() {
        let file = temp_with_suffix(".csv", " SKU ,On Order\nItem1, 20 \n");
        let sheet = read_raw_sheet(file.path(), None).unwrap();

        assert_eq!(sheet.headers, vec!["sku", "on order"]);
        assert!(sheet.has_column("On Order"));
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].get("SKU"), "Item1");
        assert_eq!(sheet.rows[0].get("on order"), "20");
        assert_eq!(sheet.rows[0].line, 2);
    }

    #[test]
    fn csv_blank_rows_are_skipped() {
        let file = temp_with_suffix(".csv", "SKU,Stock\nA,1\n,\nB,2\n");
        let sheet = read_raw_sheet(file.path(), None).unwrap();

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1].get("sku"), "B");
        assert_eq!(sheet.rows[1].line, 4);
    }

    #[test]
    fn missing_cell_reads_as_empty() {
        let file = temp_with_suffix(".csv", "SKU,Stock,Desc\nA,1\n");
        let sheet = read_raw_sheet(file.path(), None).unwrap();
        assert_eq!(sheet.rows[0].get("desc"), "");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let file = temp_with_suffix(".json", "{}");
        let err = read_raw_sheet(file.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "json"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_raw_sheet(Path::new("nope/inventory.csv"), None).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    enum Cell {
        Text(&'static str),
        Number(f64),
        Bool(bool),
    }

    const HEADER: [&str; 7] = ["SKU", "PSL", "ROP", "Stock", "On Order", "Desc", "Initialized"];

    fn write_sheet(workbook: &mut Workbook, name: &str, rows: &[&[Cell]]) {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name).unwrap();
        for (col, title) in HEADER.iter().enumerate() {
            sheet.write_string(0, col as u16, *title).unwrap();
        }
        for (row, cells) in rows.iter().enumerate() {
            let row = row as u32 + 1;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(v) => sheet.write_string(row, col, *v).unwrap(),
                    Cell::Number(v) => sheet.write_number(row, col, *v).unwrap(),
                    Cell::Bool(v) => sheet.write_boolean(row, col, *v).unwrap(),
                };
            }
        }
    }

    /// Two-sheet workbook: "Current" first, "Archive" second.
    fn inventory_workbook() -> tempfile::NamedTempFile {
        use Cell::*;

        let mut workbook = Workbook::new();
        write_sheet(
            &mut workbook,
            "Current",
            &[
                &[
                    Text("PUMP-1"), Number(12.1), Number(5.0), Number(80.0),
                    Number(20.0), Text("Pump"), Bool(true),
                ],
                &[
                    Text("PUMP-2"), Number(15.0), Number(5.0), Number(9.0),
                    Number(0.0), Text("Spare"), Bool(false),
                ],
                &[
                    Text("BOLT-1"), Number(40.0), Number(20.0), Number(3.5),
                    Number(10.0), Text("Bolt"), Number(1.0),
                ],
            ],
        );
        write_sheet(
            &mut workbook,
            "Archive",
            &[&[
                Text("OLD-1"), Number(1.0), Number(1.0), Number(1.0),
                Number(0.0), Text("Old"), Text("yes"),
            ]],
        );

        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        workbook.save(file.path()).unwrap();
        file
    }

    #[test]
    fn excel_reads_first_sheet_by_default() {
        let file = inventory_workbook();
        let sheet = read_raw_sheet(file.path(), None).unwrap();

        assert!(REQUIRED.iter().all(|c| sheet.has_column(c)));
        assert_eq!(sheet.rows.len(), 3);

        let first = &sheet.rows[0];
        assert_eq!(first.line, 2);
        assert_eq!(first.get("SKU"), "PUMP-1");
        assert_eq!(first.get("PSL"), "12.1");
        assert_eq!(first.get("Stock"), "80");
        assert_eq!(first.get("Initialized"), "true");
        assert_eq!(sheet.rows[1].get("Initialized"), "false");
    }

    #[test]
    fn excel_named_sheet_is_selected() {
        let file = inventory_workbook();
        let sheet = read_raw_sheet(file.path(), Some("Archive")).unwrap();

        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].get("sku"), "OLD-1");
        assert_eq!(sheet.rows[0].get("initialized"), "yes");
    }

    #[test]
    fn excel_unknown_sheet_is_reported() {
        let file = inventory_workbook();
        let err = read_raw_sheet(file.path(), Some("Missing")).unwrap_err();
        assert!(matches!(err, LoadError::SheetNotFound(name) if name == "Missing"));
    }

    #[test]
    fn excel_cells_become_rounded_quantities_and_flags() {
        let file = inventory_workbook();
        let table = SpreadsheetLoader::new().load(file.path()).unwrap();

        let skus: Vec<&str> = table.skus().map(|s| s.as_str()).collect();
        assert_eq!(skus, vec!["PUMP-1", "BOLT-1"]);

        let pump = table.get(&"PUMP-1".parse().unwrap()).unwrap();
        assert_eq!(pump.psl, 13);
        assert_eq!(pump.stock, 80);
        assert_eq!(pump.on_order, 20);
        assert_eq!(pump.description, "Pump");

        let bolt = table.get(&"BOLT-1".parse().unwrap()).unwrap();
        assert_eq!(bolt.stock, 4);
    }

    #[test]
    fn excel_named_sheet_loads_through_loader() {
        let file = inventory_workbook();
        let table = SpreadsheetLoader::new()
            .with_sheet("Archive")
            .load(file.path())
            .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get(&"OLD-1".parse().unwrap()).is_some());
    }

    #[test]
    fn corrupt_workbook_is_a_parse_error() {
        let file = temp_with_suffix(".xlsx", "not a zip archive");
        let err = read_raw_sheet(file.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::ExcelParse(_)), "got {err:?}");
    }
}
