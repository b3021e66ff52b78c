use serde::{Deserialize, Serialize};

/// The single `(labels, values)` shape chart renderers accept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl CanonicalSeries {
    /// Builds a series from already-separated columns without reconciling lengths.
    pub fn from_parts(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    /// `true` when there is nothing to label, the "no data to render" state.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `true` when both columns hold at least one entry.
    pub fn is_renderable(&self) -> bool {
        !self.labels.is_empty() && !self.values.is_empty()
    }

    /// Number of points a renderer will draw after pairing by index.
    pub fn point_count(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    /// Label/value pairs by index, truncated to the shorter column.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.pairs().map(|(_, value)| value).sum()
    }
}

impl FromIterator<(String, f64)> for CanonicalSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}
