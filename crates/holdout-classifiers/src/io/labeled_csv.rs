//! Reader for labeled CSV tables: numeric feature columns plus one class column.
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use ndarray::{Array1, Array2};

use crate::datasets::Dataset;
use crate::error::{ClassifierError, Result};

/// Read a CSV file with a header row into a `Dataset`.
///
/// Every column except `target_column` must be numeric. Class names are
/// assigned indices in order of first appearance.
pub fn read_labeled_csv<P: AsRef<Path>>(path: P, target_column: &str) -> Result<Dataset> {
    let file = std::fs::File::open(&path).map_err(|e| {
        ClassifierError::Dataset(format!(
            "Failed to open {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    read_labeled_csv_from_reader(file, target_column)
}

/// Same as [`read_labeled_csv`] but reads from any `Read` source.
pub fn read_labeled_csv_from_reader<R: Read>(source: R, target_column: &str) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ClassifierError::EmptyData("CSV has no header row"));
    }
    let target_idx = find_column(&headers, target_column).ok_or_else(|| {
        ClassifierError::Dataset(format!("Missing target column '{}'", target_column))
    })?;

    let feature_indices: Vec<usize> = (0..headers.len()).filter(|&i| i != target_idx).collect();
    if feature_indices.is_empty() {
        return Err(ClassifierError::Dataset(
            "No feature columns besides the target".to_string(),
        ));
    }
    let feature_names: Vec<String> = feature_indices
        .iter()
        .map(|&i| headers[i].to_string())
        .collect();

    let mut features = Vec::new();
    let mut labels = Vec::new();
    let mut class_names: Vec<String> = Vec::new();
    let mut class_lookup: HashMap<String, usize> = HashMap::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1, so data rows start at line 2.
        let line = row_idx + 2;

        let class = record.get(target_idx).ok_or_else(|| {
            ClassifierError::Dataset(format!("Missing target value on line {}", line))
        })?;
        let label = match class_lookup.get(class) {
            Some(&idx) => idx,
            None => {
                let idx = class_names.len();
                class_names.push(class.to_string());
                class_lookup.insert(class.to_string(), idx);
                idx
            }
        };
        labels.push(label);

        for &col in &feature_indices {
            let raw = record.get(col).unwrap_or("");
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    ClassifierError::Dataset(format!(
                        "Invalid numeric value '{}' in column '{}' on line {}",
                        raw, &headers[col], line
                    ))
                })?;
            features.push(value);
        }
    }

    if labels.is_empty() {
        return Err(ClassifierError::EmptyData("dataset has no rows"));
    }
    if class_names.len() < 2 {
        return Err(ClassifierError::TooFewClasses(class_names.len()));
    }

    let nrows = labels.len();
    let x = Array2::from_shape_vec((nrows, feature_names.len()), features).map_err(|e| {
        ClassifierError::ShapeMismatch {
            expected: format!("{} x {} matrix", nrows, feature_names.len()),
            got: e.to_string(),
        }
    })?;

    Dataset::new(x, Array1::from_vec(labels), class_names, feature_names)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}
