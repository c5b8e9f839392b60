use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::calculator::constants::{
    COL_CARBS, COL_FAT, COL_GROUP, COL_KCAL, COL_NAME, COL_PROTEIN, REQUIRED_COLUMNS,
};
use crate::dataset::FoodDataset;
use crate::error::{Result, SwapError};
use crate::models::{name_key, FoodRecord};

/// What to do with a row that lacks a required value or holds a bad number.
///
/// A header missing a required column fails the load under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// The first malformed row fails the whole load.
    #[default]
    Strict,
    /// Malformed rows are logged and left out.
    SkipMalformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetFormat {
    Csv,
    Json,
    Spreadsheet,
}

impl DatasetFormat {
    fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => DatasetFormat::Json,
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => DatasetFormat::Spreadsheet,
            _ => DatasetFormat::Csv,
        }
    }
}

/// Load a dataset with the strict policy.
///
/// `.json` files are read as an array of objects, `.xlsx`/`.xls`/`.ods` from
/// their first sheet, anything else as CSV.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<FoodDataset> {
    load_dataset_with(path, LoadPolicy::Strict)
}

/// Load a dataset with an explicit malformed-row policy.
pub fn load_dataset_with<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<FoodDataset> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SwapError::DatasetNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    }

    let format = DatasetFormat::from_path(path);
    debug!(path = %path.display(), ?format, ?policy, "reading dataset");

    let dataset = match format {
        DatasetFormat::Csv => read_csv_dataset(&read_text(path)?, policy)?,
        DatasetFormat::Json => read_json_dataset(&read_text(path)?, policy)?,
        DatasetFormat::Spreadsheet => read_spreadsheet_dataset(path, policy)?,
    };

    info!(path = %path.display(), foods = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Read a text dataset. Bytes that are not UTF-8 make the file malformed.
fn read_text(path: &Path) -> Result<String> {
    String::from_utf8(fs::read(path)?).map_err(|e| {
        let valid = e.utf8_error().valid_up_to();
        let line = e.as_bytes()[..valid].iter().filter(|b| **b == b'\n').count() as u64 + 1;
        SwapError::DatasetMalformed {
            line,
            reason: "file is not valid UTF-8; re-export it as UTF-8 CSV".to_string(),
        }
    })
}

/// Parse CSV text. The delimiter (`,` or `;`) is taken from the header line.
pub fn read_csv_dataset(content: &str, policy: LoadPolicy) -> Result<FoodDataset> {
    let content = content.trim_start_matches('\u{feff}');
    let delimiter = detect_delimiter(content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(csv_malformed)?.clone();
    let columns = ColumnMap::from_headers(headers.iter())?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_malformed)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(columns.extract(line, |i| record.get(i).map(str::to_string)));
    }

    build_dataset(rows, policy)
}

/// Parse a JSON array of row objects keyed by column name.
///
/// Row numbers in errors are 1-based positions in the array; syntax errors
/// report the text line instead.
pub fn read_json_dataset(content: &str, policy: LoadPolicy) -> Result<FoodDataset> {
    let entries: Vec<Map<String, Value>> =
        serde_json::from_str(content).map_err(|e| SwapError::DatasetMalformed {
            line: e.line().max(1) as u64,
            reason: format!("expected an array of row objects: {}", e),
        })?;

    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| RawRow {
            line: i as u64 + 1,
            name: json_cell(entry, COL_NAME),
            group: json_cell(entry, COL_GROUP),
            kcal: json_cell(entry, COL_KCAL),
            carbs: json_cell(entry, COL_CARBS),
            protein: json_cell(entry, COL_PROTEIN),
            fat: json_cell(entry, COL_FAT),
        })
        .collect();

    build_dataset(rows, policy)
}

/// Read the first sheet of a workbook. Its first row is the header.
///
/// Row numbers in errors are the sheet's row numbers.
pub fn read_spreadsheet_dataset<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<FoodDataset> {
    let mut workbook = open_workbook_auto(path.as_ref()).map_err(spreadsheet_malformed)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SwapError::DatasetMalformed {
            line: 1,
            reason: "workbook has no sheets".to_string(),
        })?
        .map_err(spreadsheet_malformed)?;

    let first_row = range.start().map_or(0, |(row, _)| u64::from(row));
    let mut sheet_rows = range.rows();

    let headers: Vec<String> = sheet_rows
        .next()
        .map(|cells| cells.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let columns = ColumnMap::from_headers(headers.iter().map(String::as_str))?;

    let rows = sheet_rows
        .enumerate()
        .map(|(i, cells)| {
            let line = first_row + i as u64 + 2;
            columns.extract(line, |idx| cells.get(idx).map(|c| c.to_string()))
        })
        .collect();

    build_dataset(rows, policy)
}

fn csv_malformed(e: csv::Error) -> SwapError {
    SwapError::DatasetMalformed {
        line: e.position().map_or(1, |p| p.line()),
        reason: e.to_string(),
    }
}

fn spreadsheet_malformed(e: calamine::Error) -> SwapError {
    SwapError::DatasetMalformed {
        line: 1,
        reason: format!("unreadable workbook: {}", e),
    }
}

fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or_default();
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

/// Cell text for one row before validation. Empty cells are `None`.
#[derive(Debug, Default)]
struct RawRow {
    line: u64,
    name: Option<String>,
    group: Option<String>,
    kcal: Option<String>,
    carbs: Option<String>,
    protein: Option<String>,
    fat: Option<String>,
}

impl RawRow {
    fn into_record(self) -> std::result::Result<FoodRecord, String> {
        let name = self.name.ok_or_else(|| missing(COL_NAME))?;
        let group = self.group.ok_or_else(|| missing(COL_GROUP))?;
        let kcal = self.kcal.ok_or_else(|| missing(COL_KCAL))?;

        let record = FoodRecord {
            name,
            group,
            kcal_per_100g: parse_amount(&kcal, COL_KCAL)?,
            carbs_per_100g: parse_optional_amount(self.carbs, COL_CARBS)?,
            protein_per_100g: parse_optional_amount(self.protein, COL_PROTEIN)?,
            fat_per_100g: parse_optional_amount(self.fat, COL_FAT)?,
        };

        if !record.is_valid() {
            return Err(format!(
                "'{}' has a negative or non-finite nutrient value",
                record.name
            ));
        }

        Ok(record)
    }
}

fn missing(column: &str) -> String {
    format!("missing value for '{}'", column)
}

/// Parse a number. A decimal comma is accepted when no dot is present.
fn parse_amount(text: &str, column: &str) -> std::result::Result<f64, String> {
    let normalized = if text.contains('.') {
        text.to_string()
    } else {
        text.replace(',', ".")
    };

    normalized
        .parse()
        .map_err(|_| format!("invalid number '{}' in '{}'", text, column))
}

fn parse_optional_amount(text: Option<String>, column: &str) -> std::result::Result<f64, String> {
    text.map_or(Ok(0.0), |t| parse_amount(&t, column))
}

/// Positions of the known columns in a header row.
struct ColumnMap {
    name: usize,
    group: usize,
    kcal: usize,
    carbs: Option<usize>,
    protein: Option<usize>,
    fat: Option<usize>,
}

impl ColumnMap {
    fn from_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Result<Self> {
        let headers: Vec<String> = headers.map(name_key).collect();
        let position = |column: &str| headers.iter().position(|h| *h == name_key(column));

        let absent: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| position(*c).is_none())
            .collect();

        match (position(COL_NAME), position(COL_GROUP), position(COL_KCAL)) {
            (Some(name), Some(group), Some(kcal)) => Ok(Self {
                name,
                group,
                kcal,
                carbs: position(COL_CARBS),
                protein: position(COL_PROTEIN),
                fat: position(COL_FAT),
            }),
            _ => Err(SwapError::DatasetMalformed {
                line: 1,
                reason: format!("missing required column(s): {}", absent.join(", ")),
            }),
        }
    }

    /// Pick the known columns out of a row. `cell` returns the raw text at an index.
    fn extract(&self, line: u64, cell: impl Fn(usize) -> Option<String>) -> RawRow {
        let get = |idx: Option<usize>| {
            idx.and_then(&cell)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        RawRow {
            line,
            name: get(Some(self.name)),
            group: get(Some(self.group)),
            kcal: get(Some(self.kcal)),
            carbs: get(self.carbs),
            protein: get(self.protein),
            fat: get(self.fat),
        }
    }
}

fn json_cell(entry: &Map<String, Value>, column: &str) -> Option<String> {
    let key = name_key(column);
    let value = entry
        .iter()
        .find(|(k, _)| name_key(k) == key)
        .map(|(_, v)| v)?;

    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    };

    if text.is_empty() { None } else { Some(text) }
}

fn build_dataset(rows: Vec<RawRow>, policy: LoadPolicy) -> Result<FoodDataset> {
    let mut records = Vec::with_capacity(rows.len());
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut skipped = 0usize;

    for row in rows {
        let line = row.line;
        let parsed = row.into_record().and_then(|record| {
            if seen.insert((record.group.clone(), record.key())) {
                Ok(record)
            } else {
                Err(format!(
                    "duplicate food '{}' in group '{}'",
                    record.name, record.group
                ))
            }
        });

        match (parsed, policy) {
            (Ok(record), _) => records.push(record),
            (Err(reason), LoadPolicy::Strict) => {
                return Err(SwapError::DatasetMalformed { line, reason });
            }
            (Err(reason), LoadPolicy::SkipMalformed) => {
                warn!(line, %reason, "skipping malformed row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = records.len(), "some dataset rows were rejected");
    }

    Ok(FoodDataset::new(records))
}
