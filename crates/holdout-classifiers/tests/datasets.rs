//! Integration tests for dataset loading from CSV files.

use std::io::Write;

use holdout_classifiers::datasets::load_iris;
use holdout_classifiers::io::read_labeled_csv;

#[test]
fn csv_file_round_trips_iris_rows() {
    let ds = load_iris().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subset.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "species,a,b,c,d").unwrap();
    for row in [0usize, 60, 120] {
        let name = &ds.class_names[ds.y[row]];
        let values: Vec<String> = ds.x.row(row).iter().map(|v| v.to_string()).collect();
        writeln!(f, "{},{}", name, values.join(",")).unwrap();
    }
    drop(f);

    let loaded = read_labeled_csv(&path, "species").unwrap();
    assert_eq!(loaded.nrows(), 3);
    assert_eq!(loaded.ncols(), 4);
    assert_eq!(loaded.class_names, vec!["setosa", "versicolor", "virginica"]);
    assert_eq!(loaded.x.row(1), ds.x.row(60));
}

#[test]
fn missing_file_is_a_dataset_error() {
    let err = read_labeled_csv("/nonexistent/path/data.csv", "species").unwrap_err();
    assert!(err.to_string().contains("Failed to open"));
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "x,label\n").unwrap();
    let err = read_labeled_csv(&path, "label").unwrap_err();
    assert!(err.to_string().contains("Empty input"));
}

#[test]
fn zero_byte_file_is_empty_not_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.csv");
    std::fs::write(&path, "").unwrap();
    let msg = read_labeled_csv(&path, "label").unwrap_err().to_string();
    assert!(msg.contains("Empty input"), "{}", msg);
    assert!(!msg.contains("Missing target column"), "{}", msg);
}

#[test]
fn nan_cell_is_rejected_at_load_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nan.csv");
    std::fs::write(&path, "x,label\nNaN,a\n2.0,b\n").unwrap();
    let msg = read_labeled_csv(&path, "label").unwrap_err().to_string();
    assert!(msg.contains("'NaN'"), "{}", msg);
    assert!(msg.contains("column 'x'"), "{}", msg);
    assert!(msg.contains("line 2"), "{}", msg);
}
