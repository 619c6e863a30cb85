//! Integration tests for train/test splitting.

use std::collections::HashSet;

use holdout_classifiers::config::SplitConfig;
use holdout_classifiers::data_handling::{
    split_dataset, stratified_train_test_split, train_test_split,
};
use holdout_classifiers::datasets::load_iris;

// ---------------------------------------------------------------------------
// Random split
// ---------------------------------------------------------------------------

#[test]
fn same_seed_gives_identical_partitions() {
    let ds = load_iris().unwrap();
    let a = train_test_split(&ds.x, &ds.y, 0.2, 42).unwrap();
    let b = train_test_split(&ds.x, &ds.y, 0.2, 42).unwrap();
    assert_eq!(a.train_indices, b.train_indices);
    assert_eq!(a.test_indices, b.test_indices);
    assert_eq!(a.x_test, b.x_test);
    assert_eq!(a.y_train, b.y_train);
}

#[test]
fn different_seeds_give_different_partitions() {
    let ds = load_iris().unwrap();
    let a = train_test_split(&ds.x, &ds.y, 0.2, 42).unwrap();
    let b = train_test_split(&ds.x, &ds.y, 0.2, 7).unwrap();
    assert_ne!(a.test_indices, b.test_indices);
}

#[test]
fn train_and_test_are_disjoint_and_cover_all_rows() {
    let ds = load_iris().unwrap();
    let split = train_test_split(&ds.x, &ds.y, 0.2, 42).unwrap();

    assert_eq!(split.n_test(), 30);
    assert_eq!(split.n_train(), 120);

    let train: HashSet<usize> = split.train_indices.iter().copied().collect();
    let test: HashSet<usize> = split.test_indices.iter().copied().collect();
    assert_eq!(train.len(), 120, "train indices must be unique");
    assert_eq!(test.len(), 30, "test indices must be unique");
    assert!(train.is_disjoint(&test));

    let all: HashSet<usize> = train.union(&test).copied().collect();
    assert_eq!(all, (0..150).collect::<HashSet<usize>>());
}

#[test]
fn split_preserves_feature_label_pairing() {
    let ds = load_iris().unwrap();
    let split = train_test_split(&ds.x, &ds.y, 0.3, 11).unwrap();
    for (pos, &row) in split.train_indices.iter().enumerate() {
        assert_eq!(split.y_train[pos], ds.y[row]);
        assert_eq!(split.x_train.row(pos), ds.x.row(row));
    }
}

// ---------------------------------------------------------------------------
// Stratified split
// ---------------------------------------------------------------------------

#[test]
fn stratified_split_keeps_class_proportions() {
    let ds = load_iris().unwrap();
    let split = stratified_train_test_split(&ds.x, &ds.y, 0.2, 42).unwrap();

    let mut test_counts = [0usize; 3];
    for &label in split.y_test.iter() {
        test_counts[label] += 1;
    }
    assert_eq!(test_counts, [10, 10, 10]);
    assert_eq!(split.n_train(), 120);

    let again = stratified_train_test_split(&ds.x, &ds.y, 0.2, 42).unwrap();
    assert_eq!(split.test_indices, again.test_indices);
}

#[test]
fn split_dataset_honours_config() {
    let ds = load_iris().unwrap();
    let config = SplitConfig {
        test_fraction: 0.5,
        seed: 3,
        stratify: true,
    };
    let split = split_dataset(&ds, &config).unwrap();
    assert_eq!(split.n_test(), 75);
}

#[test]
fn invalid_fraction_is_rejected() {
    let ds = load_iris().unwrap();
    let config = SplitConfig {
        test_fraction: 1.0,
        ..SplitConfig::default()
    };
    let err = split_dataset(&ds, &config).unwrap_err();
    assert!(err.to_string().contains("Test fraction"));
}
