use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::error::{DataError, Result};
use super::model::{IrisDataset, Observation, PETAL_LENGTH, PETAL_WIDTH, SPECIES};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an Iris dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, one observation per row (the usual `iris.csv`)
/// * `.json` – `[{ "PetalLength": 1.4, "PetalWidth": 0.2, "Species": "setosa" }, ...]`
///
/// The whole load fails on the first bad field; no partial dataset is returned.
pub fn load_file(path: &Path) -> Result<IrisDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || {
        std::fs::File::open(path).map_err(|source| DataError::Load {
            path: path.to_path_buf(),
            source,
        })
    };

    match ext.as_str() {
        "csv" => load_csv_reader(open()?),
        "json" => load_json_reader(open()?),
        other => Err(DataError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse one numeric field. Whitespace around the literal is ignored;
/// empty, non-numeric and non-finite text is rejected.
pub fn parse_numeric(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::Parse {
            text: text.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names.
/// `PetalLength`, `PetalWidth` and `Species` are required. Other columns
/// (the sepal measurements in the usual file) are ignored.
pub fn load_csv_reader<R: Read>(source: R) -> Result<IrisDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let find = |name: &str| headers.iter().position(|h| h == name);
    let require = |name: &str| find(name).ok_or_else(|| DataError::MissingColumn(name.into()));

    let petal_length_idx = require(PETAL_LENGTH)?;
    let petal_width_idx = require(PETAL_WIDTH)?;
    let species_idx = require(SPECIES)?;

    let mut observations = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let numeric = |idx: usize, column: &str| {
            parse_numeric(record.get(idx).unwrap_or("")).map_err(|e| e.at(row, column))
        };

        observations.push(Observation {
            petal_length: numeric(petal_length_idx, PETAL_LENGTH)?,
            petal_width: numeric(petal_width_idx, PETAL_WIDTH)?,
            species: record.get(species_idx).unwrap_or("").trim().to_string(),
        });
    }

    log::debug!("parsed {} CSV rows", observations.len());
    Ok(IrisDataset::from_observations(observations))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "SepalLength": 5.1, "PetalLength": 1.4, "PetalWidth": 0.2, "Species": "setosa" },
///   ...
/// ]
/// ```
///
/// Numeric fields may also be given as strings, they go through
/// [`parse_numeric`] like CSV cells.
pub fn load_json_reader<R: Read>(source: R) -> Result<IrisDataset> {
    let root: JsonValue = serde_json::from_reader(source)?;
    let records = root
        .as_array()
        .ok_or_else(|| DataError::Malformed("expected top-level JSON array".into()))?;

    let mut observations = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        let obj = rec
            .as_object()
            .ok_or_else(|| DataError::Malformed(format!("row {row} is not a JSON object")))?;

        let numeric = |column: &str| -> Result<Option<f64>> {
            let value = match obj.get(column) {
                None | Some(JsonValue::Null) => return Ok(None),
                Some(v) => v,
            };
            let parsed = match value {
                JsonValue::Number(n) => n.as_f64().ok_or_else(|| DataError::Parse {
                    text: n.to_string(),
                }),
                JsonValue::String(s) => parse_numeric(s),
                other => Err(DataError::Parse {
                    text: other.to_string(),
                }),
            };
            parsed.map(Some).map_err(|e| e.at(row, column))
        };
        let required = |column: &str| -> Result<f64> {
            numeric(column)?.ok_or_else(|| DataError::MissingColumn(column.into()).at(row, column))
        };

        let species = obj
            .get(SPECIES)
            .and_then(|v| v.as_str())
            .ok_or_else(|| DataError::MissingColumn(SPECIES.into()).at(row, SPECIES))?;

        observations.push(Observation {
            petal_length: required(PETAL_LENGTH)?,
            petal_width: required(PETAL_WIDTH)?,
            species: species.trim().to_string(),
        });
    }

    Ok(IrisDataset::from_observations(observations))
}
