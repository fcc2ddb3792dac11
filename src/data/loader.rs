use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error::{DatasetError, Result};
use super::model::{
    LaunchRecord, LaunchTable, Outcome, COL_BOOSTER_CATEGORY, COL_CLASS, COL_FLIGHT_NUMBER,
    COL_LAUNCH_SITE, COL_PAYLOAD_MASS, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, the required columns located by name
/// * `.json`    – `[{ "Launch Site": ..., "class": 1, ... }, ...]`
/// * `.parquet` – Parquet file with one column per field
///
/// Columns beyond the required ones are ignored.
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DatasetError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "Loaded {} launches from {} ({} sites, payload bounds {:?})",
        table.len(),
        path.display(),
        table.sites().len(),
        table.payload_bounds()
    );
    Ok(table)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fail with every required column absent from `present`.
fn check_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let present: BTreeSet<&str> = present.into_iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(*col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

// ---------------------------------------------------------------------------
// Row validation shared by the text formats
// ---------------------------------------------------------------------------

/// A row as it appears in CSV / JSON, before validation.
#[derive(Debug, Deserialize)]
struct RawLaunch {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "Flight Number")]
    flight_number: f64,
}

impl RawLaunch {
    fn into_record(self, row: usize) -> Result<LaunchRecord> {
        build_record(
            row,
            self.launch_site,
            self.payload_mass_kg,
            self.class,
            self.booster_version_category,
            self.flight_number,
        )
    }
}

fn build_record(
    row: usize,
    launch_site: String,
    payload_mass_kg: f64,
    class: f64,
    booster_version_category: String,
    flight_number: f64,
) -> Result<LaunchRecord> {
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        return Err(DatasetError::InvalidValue {
            row,
            column: COL_PAYLOAD_MASS,
            value: payload_mass_kg.to_string(),
        });
    }

    let outcome = Outcome::from_class(class).ok_or_else(|| DatasetError::InvalidValue {
        row,
        column: COL_CLASS,
        value: class.to_string(),
    })?;

    if !flight_number.is_finite() || flight_number.fract() != 0.0 {
        return Err(DatasetError::InvalidValue {
            row,
            column: COL_FLIGHT_NUMBER,
            value: flight_number.to_string(),
        });
    }

    Ok(LaunchRecord {
        launch_site,
        payload_mass_kg,
        outcome,
        booster_version_category,
        flight_number: flight_number as i64,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per line.
fn load_csv(path: &Path) -> Result<LaunchTable> {
    let file = open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    check_columns(reader.headers()?.iter())?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawLaunch>().enumerate() {
        records.push(result?.into_record(row)?);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Flight Number": 1,
///     "Launch Site": "CCAFS LC-40",
///     "class": 0,
///     "Payload Mass (kg)": 0.0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchTable> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root
        .as_array()
        .ok_or_else(|| DatasetError::Malformed("expected a top-level JSON array".into()))?;

    // A column counts as present only if every row carries it.
    let mut present: Option<BTreeSet<&str>> = None;
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| DatasetError::Malformed(format!("row {i} is not a JSON object")))?;
        let keys: BTreeSet<&str> = obj.keys().map(String::as_str).collect();
        present = Some(match present {
            None => keys,
            Some(acc) => acc.intersection(&keys).copied().collect(),
        });
    }
    // An empty array carries no columns at all.
    check_columns(present.unwrap_or_default())?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.iter().enumerate() {
        let raw: RawLaunch = serde_json::from_value(value.clone())?;
        records.push(raw.into_record(row)?);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per launch field.
///
/// String columns may be Utf8 or LargeUtf8; numeric columns may be any of
/// Int32, Int64, Float32, Float64. Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchTable> {
    let file = open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    check_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let offset = records.len();

        let sites = column(&batch, COL_LAUNCH_SITE)?;
        let payloads = numeric_column(&batch, COL_PAYLOAD_MASS)?;
        let classes = numeric_column(&batch, COL_CLASS)?;
        let boosters = column(&batch, COL_BOOSTER_CATEGORY)?;
        let flights = numeric_column(&batch, COL_FLIGHT_NUMBER)?;

        for i in 0..batch.num_rows() {
            let row = offset + i;
            records.push(build_record(
                row,
                string_cell(sites, i, row, COL_LAUNCH_SITE)?,
                numeric_cell(&payloads, i, row, COL_PAYLOAD_MASS)?,
                numeric_cell(&classes, i, row, COL_CLASS)?,
                string_cell(boosters, i, row, COL_BOOSTER_CATEGORY)?,
                numeric_cell(&flights, i, row, COL_FLIGHT_NUMBER)?,
            )?);
        }
    }

    Ok(LaunchTable::from_records(records))
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| DatasetError::MissingColumns(vec![name.to_string()]))
}

/// Fetch a numeric column widened to Float64.
fn numeric_column(batch: &RecordBatch, name: &'static str) -> Result<ArrayRef> {
    let col = column(batch, name)?;
    match col.data_type() {
        DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64 => {
            Ok(arrow::compute::cast(col, &DataType::Float64)?)
        }
        other => Err(DatasetError::UnsupportedColumnType {
            column: name,
            data_type: format!("{other:?}"),
        }),
    }
}

fn numeric_cell(col: &ArrayRef, i: usize, row: usize, name: &'static str) -> Result<f64> {
    if col.is_null(i) {
        return Err(null_value(row, name));
    }
    Ok(col.as_primitive::<Float64Type>().value(i))
}

fn string_cell(col: &ArrayRef, i: usize, row: usize, name: &'static str) -> Result<String> {
    if col.is_null(i) {
        return Err(null_value(row, name));
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(i).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(i).to_string()),
        other => Err(DatasetError::UnsupportedColumnType {
            column: name,
            data_type: format!("{other:?}"),
        }),
    }
}

fn null_value(row: usize, column: &'static str) -> DatasetError {
    DatasetError::InvalidValue {
        row,
        column,
        value: "null".to_string(),
    }
}
