#![doc(test(attr(deny(warnings))))]

//! Fintrack Core shapes finance API responses into the canonical series and
//! bucketed transaction lists that dashboard charts and lists render.
//!
//! The two central transforms, [`series::normalize`] and
//! [`transactions::bucket`], are pure and never fail; everything that can
//! fail around them reports through [`errors::DashboardError`].

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod envelope;
pub mod errors;
pub mod series;
pub mod time;
pub mod transactions;
pub mod utils;

pub use errors::{DashboardError, Result};
pub use series::{normalize, normalize_value, CanonicalSeries, TimeSeriesInput};
pub use transactions::{bucket, bucket_value, BucketedRecord, DateRange, Period, TransactionRecord};

/// Initializes global tracing with the crate's default filter.
pub fn init() {
    utils::init_tracing(None);
    tracing::debug!("Fintrack Core tracing initialized.");
}
