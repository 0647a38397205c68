//! Dataset loading for delimited text and Excel workbooks.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::profile::DatasetProfile;

/// Maximum file size for dataset loading (500 MB).
pub const MAX_DATASET_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Supported dataset formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Tsv,
    Xlsx,
    Xls,
}

impl DatasetFormat {
    /// Resolves the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            _ => Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    /// Field delimiter for text formats; `None` for workbooks.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Xlsx | Self::Xls => None,
        }
    }
}

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn parse_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

/// Check file size against [`MAX_DATASET_FILE_SIZE`].
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_DATASET_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 input by its byte order mark. A UTF-8 BOM is accepted
/// and stripped from the first header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Header names, data row count and which columns hold any value.
struct TableScan {
    columns: Vec<String>,
    row_count: usize,
    has_values: Vec<bool>,
}

impl TableScan {
    fn new(columns: Vec<String>) -> Self {
        let has_values = vec![false; columns.len()];
        Self {
            columns,
            row_count: 0,
            has_values,
        }
    }

    fn record_row<'a>(&mut self, cells: impl IntoIterator<Item = &'a str>) {
        self.row_count += 1;
        for (idx, value) in cells.into_iter().enumerate().take(self.columns.len()) {
            if !value.trim().is_empty() {
                self.has_values[idx] = true;
            }
        }
    }
}

/// Loads a `.csv`, `.tsv`, `.xlsx` or `.xls` file and profiles its columns.
///
/// Only the header names and row count are kept; cell values are read to
/// detect columns that are empty in every row. Workbooks are read from
/// their first worksheet.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DatasetProfile> {
    let path = path.as_ref();
    let format = DatasetFormat::from_path(path)?;
    check_file_size(path)?;

    let scan = match format.delimiter() {
        Some(delimiter) => {
            validate_encoding(path)?;
            scan_delimited(path, delimiter)?
        }
        None => scan_workbook(path)?,
    };
    let TableScan {
        columns,
        row_count,
        has_values,
    } = scan;
    if columns.is_empty() || row_count == 0 {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let warnings = column_warnings(&columns, &has_values);
    for warning in &warnings {
        warn!(path = %path.display(), "{warning}");
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(
        file = %file_name,
        ?format,
        columns = columns.len(),
        rows = row_count,
        "loaded dataset"
    );
    Ok(DatasetProfile {
        file_name,
        column_count: columns.len(),
        columns,
        row_count,
        warnings,
    })
}

fn scan_delimited(path: &Path, delimiter: u8) -> Result<TableScan> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| parse_error(path, e))?;

    let columns = reader
        .headers()
        .map_err(|e| parse_error(path, e))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut scan = TableScan::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        scan.record_row(record.iter());
    }
    Ok(scan)
}

/// First worksheet: row one is the header, every later row is data.
fn scan_workbook(path: &Path) -> Result<TableScan> {
    let workbook_error = |source: calamine::Error| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    };
    let range = range.map_err(workbook_error)?;
    debug!(path = %path.display(), size = ?range.get_size(), "read first worksheet");

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(TableScan::new(Vec::new()));
    };
    let columns = header.iter().map(|cell| normalize_header(&cell_text(cell))).collect();
    let mut scan = TableScan::new(columns);
    for row in rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        scan.record_row(cells.iter().map(String::as_str));
    }
    Ok(scan)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Duplicate names first (in order of first appearance), then blank names,
/// then columns without any value.
fn column_warnings(columns: &[String], has_values: &[bool]) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in columns.iter().filter(|name| !name.is_empty()) {
        *counts.entry(name.as_str()).or_default() += 1;
    }
    let mut reported = Vec::new();
    for name in columns {
        let count = counts.get(name.as_str()).copied().unwrap_or(0);
        if count > 1 && !reported.contains(&name) {
            warnings.push(format!("Duplicate column name '{name}' appears {count} times"));
            reported.push(name);
        }
    }

    for (idx, name) in columns.iter().enumerate() {
        if name.is_empty() {
            warnings.push(format!("Column {} has a blank name", idx + 1));
        }
    }

    for (name, has_value) in columns.iter().zip(has_values) {
        if !has_value && !name.is_empty() {
            warnings.push(format!("Column '{name}' is empty in every row"));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("a/DATA.CSV")).unwrap(),
            DatasetFormat::Csv
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("data.tsv")).unwrap(),
            DatasetFormat::Tsv
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("Study.XLSX")).unwrap(),
            DatasetFormat::Xlsx
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("legacy.xls")).unwrap(),
            DatasetFormat::Xls
        );
        assert_eq!(DatasetFormat::Xlsx.delimiter(), None);
        assert_eq!(DatasetFormat::Tsv.delimiter(), Some(b'\t'));
        assert!(matches!(
            DatasetFormat::from_path(Path::new("data.sav")),
            Err(IngestError::UnsupportedExtension { extension, .. }) if extension == "sav"
        ));
        assert!(DatasetFormat::from_path(Path::new("data")).is_err());
    }

    #[test]
    fn header_normalization_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Edad "), "Edad");
        assert_eq!(normalize_header("  "), "");
    }

    #[test]
    fn warnings_are_ordered_by_kind() {
        let columns = names(&["edad", "", "edad", "peso"]);
        let warnings = column_warnings(&columns, &[true, true, true, false]);
        assert_eq!(
            warnings,
            vec![
                "Duplicate column name 'edad' appears 2 times".to_string(),
                "Column 2 has a blank name".to_string(),
                "Column 'peso' is empty in every row".to_string(),
            ]
        );
    }
}
