use crate::common::{DatasourceError, MetricResponse};
use serde_json::Value;
use std::path::Path;

/// Appends the rows of a response to a CSV file.
///
/// Columns are the keys of the first row, in key order; the header is written
/// only when the file is new or empty, so repeated appends keep a single
/// header. Responses with no rows leave the file untouched.
pub fn append_csv(
    path: impl AsRef<Path>,
    response: &MetricResponse,
) -> Result<(), DatasourceError> {
    let Some(first) = response.data.first() else {
        return Ok(());
    };
    let columns: Vec<String> = first.keys().cloned().collect();

    let path = path.as_ref();
    let write_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if write_header {
        writer.write_record(&columns)?;
    }
    for row in &response.data {
        let record: Vec<String> = columns
            .iter()
            .map(|column| field_to_string(row.get(column)))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes a JSON document to disk, pretty-printed.
pub fn write_json(path: impl AsRef<Path>, value: &Value) -> Result<(), DatasourceError> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text)?;
    Ok(())
}

fn field_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
