use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Row, StockCatalog};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a stock catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – the consolidation pipeline's primary output
/// * `.json`    – records-oriented export (`df.to_json(orient='records')`)
/// * `.parquet` – `df.to_parquet()` export with flat scalar columns
pub fn load_file(path: &Path) -> Result<StockCatalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse the consolidated CSV layout: first line is the comma-separated
/// header, every following non-blank line is one record.
///
/// The format is deliberately naive, matching how the pipeline writes it:
/// cells are comma-split and whitespace-trimmed, quoting is not
/// interpreted, and nothing is coerced out of text.  A record shorter
/// than the header fills the remaining columns with empty text; extra
/// trailing cells have no column to land in and are dropped.
/// Whitespace-only lines are skipped entirely.
pub fn parse_csv(input: impl Read) -> Result<StockCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        // A whitespace-only line survives as a single empty field.
        if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
            continue;
        }

        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            let cell = record.get(idx).unwrap_or("");
            row.insert(header.clone(), cell.to_string());
        }
        rows.push(row);
    }

    Ok(StockCatalog::from_rows(headers, rows))
}

fn load_csv(path: &Path) -> Result<StockCatalog> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Write `headers` plus the given rows back out as CSV, in column order.
pub fn write_csv(path: &Path, headers: &[String], rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record(headers).context("writing CSV header")?;
    for row in rows {
        writer
            .write_record(headers.iter().map(|h| row.get(h)))
            .context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Super Familia": "Invierno",
///     "Familia": "Lanas",
///     "Codigo Producto": "L-01",
///     "Stock Total": 120
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<StockCatalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
            row.insert(key.clone(), json_to_text(val));
        }
        rows.push(row);
    }

    Ok(StockCatalog::from_rows(headers, rows))
}

/// Render a JSON scalar as the cell text the rest of the app works with.
fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet export of the catalog.
///
/// Every column is expected to hold scalars (strings, ints, floats,
/// bools); each is rendered to text.  Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<StockCatalog> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, header) in headers.iter().enumerate() {
                row.insert(header.clone(), cell_text(batch.column(col_idx), row_idx));
            }
            rows.push(row);
        }
    }

    Ok(StockCatalog::from_rows(headers, rows))
}

/// Render a single Arrow cell as text; nulls become empty text.
fn cell_text(col: &ArrayRef, row: usize) -> String {
    if col.is_null(row) {
        return String::new();
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                s.value(row).trim().to_string()
            } else {
                // LargeStringArray
                col.as_string::<i64>().value(row).trim().to_string()
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            arr.value(row).to_string()
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            arr.value(row).to_string()
        }
        other => format!("{other:?}"),
    }
}
