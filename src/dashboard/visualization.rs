use serde::Serialize;
use serde_json::Value;

use crate::envelope;
use crate::errors::Result;
use crate::series::{normalize_value, CanonicalSeries};

/// Expense breakdown and spending trend from a `/visualize/<period>` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Visualization {
    pub pie: CanonicalSeries,
    pub trend: CanonicalSeries,
}

impl Visualization {
    /// Rejects error envelopes; a missing `pie` or `trend` gives an empty series.
    pub fn from_value(value: &Value) -> Result<Self> {
        let body = envelope::check_named("visualization", value)?;
        let section = |key: &str| {
            body.get(key)
                .map(normalize_value)
                .unwrap_or_default()
        };
        let visualization = Self {
            pie: section("pie"),
            trend: section("trend"),
        };
        if !visualization.has_trend() {
            tracing::warn!("no renderable trend data in visualization payload");
        }
        Ok(visualization)
    }

    pub fn has_pie(&self) -> bool {
        self.pie.is_renderable()
    }

    pub fn has_trend(&self) -> bool {
        self.trend.is_renderable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DashboardError;
    use serde_json::json;

    #[test]
    fn reads_pie_and_trend_sections() {
        let body = json!({
            "pie": {"Food": 120.0, "Rent": 900.0},
            "trend": {"2024-03-31 00:00:00": 1020.0}
        });
        let viz = Visualization::from_value(&body).unwrap();
        assert_eq!(viz.pie.labels, vec!["Food", "Rent"]);
        assert_eq!(viz.trend.values, vec![1020.0]);
        assert!(viz.has_pie() && viz.has_trend());
    }

    #[test]
    fn missing_sections_are_empty() {
        let viz = Visualization::from_value(&json!({})).unwrap();
        assert!(!viz.has_pie());
        assert!(!viz.has_trend());
    }

    #[test]
    fn error_envelope_is_rejected() {
        let body = json!({"status": "error", "message": "Invalid period"});
        assert!(matches!(
            Visualization::from_value(&body),
            Err(DashboardError::Api { .. })
        ));
    }
}
