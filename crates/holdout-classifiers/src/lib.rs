//! holdout-classifiers: hold-out evaluation of tabular classifiers.
//!
//! The crate loads a labeled dataset (the bundled iris data or a CSV),
//! partitions it with a seeded shuffle, standardizes features using
//! training statistics only, fits a multinomial logistic regression and
//! scores the test predictions with accuracy and a confusion matrix.
//! `pipeline::run_pipeline` sequences the stages; `report` renders the
//! result as text.
pub mod config;
pub mod data_handling;
pub mod datasets;
pub mod error;
pub mod io;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod report;
