//! Time-series payload normalization.
//!
//! The finance API has emitted three incompatible shapes for "amount over
//! time" across endpoints and versions. [`TimeSeriesInput`] decodes whichever
//! one arrived and [`normalize`] turns it into the single [`CanonicalSeries`]
//! shape renderers consume.

mod canonical;
mod input;

pub use canonical::CanonicalSeries;
pub use input::{SeriesPoint, TimeSeriesInput, MISSING_LABEL};

use serde_json::Value;

/// Converts a decoded payload into its canonical `(labels, values)` form.
///
/// Never fails: an unrecognised payload yields an empty series.
pub fn normalize(input: &TimeSeriesInput) -> CanonicalSeries {
    match input {
        TimeSeriesInput::Labeled { labels, data } => {
            if labels.len() != data.len() {
                tracing::debug!(
                    labels = labels.len(),
                    values = data.len(),
                    "labeled series lengths differ; consumers pair by index"
                );
            }
            CanonicalSeries::from_parts(labels.clone(), data.clone())
        }
        TimeSeriesInput::Points(points) => points
            .iter()
            .map(|point| (point.resolved_label().to_string(), point.resolved_value()))
            .collect(),
        TimeSeriesInput::CategoryMap(entries) => entries.iter().cloned().collect(),
        TimeSeriesInput::Empty => CanonicalSeries::default(),
    }
}

/// Decodes a raw JSON body and normalizes it in one step.
pub fn normalize_value(value: &Value) -> CanonicalSeries {
    let input = TimeSeriesInput::from_value(value);
    tracing::debug!(shape = input.shape_name(), "normalizing time series");
    normalize(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labeled_shape_takes_priority_over_category_map() {
        let series = normalize_value(&json!({"labels": ["a", "b"], "data": [1, 2], "extra": 9}));
        assert_eq!(series.labels, vec!["a", "b"]);
        assert_eq!(series.values, vec![1.0, 2.0]);
    }

    #[test]
    fn point_list_applies_fallback_chain() {
        let series = normalize_value(&json!([
            {"month": "Jan", "amount": 100},
            {"label": "Feb", "value": 200},
            {}
        ]));
        assert_eq!(series.labels, vec!["Jan", "Feb", "N/A"]);
        assert_eq!(series.values, vec![100.0, 200.0, 0.0]);
    }

    #[test]
    fn primitives_normalize_to_empty() {
        assert!(normalize_value(&json!(42)).is_empty());
        assert!(normalize_value(&json!("trend")).is_empty());
        assert!(normalize_value(&Value::Null).is_empty());
    }
}
