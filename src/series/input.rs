use serde::{de::Deserializer, Deserialize};
use serde_json::{Map, Value};

/// Label used for list entries that carry neither `month` nor `label`.
pub const MISSING_LABEL: &str = "N/A";

/// One accepted wire shape for a time series.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSeriesInput {
    /// `{"labels": [...], "data": [...]}`; lengths may differ.
    Labeled { labels: Vec<String>, data: Vec<f64> },
    /// `[{"month": "Jan", "amount": 100}, {"label": "Feb", "value": 200}]`
    Points(Vec<SeriesPoint>),
    /// `{"Jan": 100, "Feb": 200}` in wire order.
    CategoryMap(Vec<(String, f64)>),
    Empty,
}

/// A list entry; each field is `None` unless the payload held the right JSON type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesPoint {
    pub month: Option<String>,
    pub label: Option<String>,
    pub amount: Option<f64>,
    pub value: Option<f64>,
}

impl SeriesPoint {
    fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            month: string_field(map, "month"),
            label: string_field(map, "label"),
            amount: map.get("amount").and_then(Value::as_f64),
            value: map.get("value").and_then(Value::as_f64),
        }
    }

    /// `month`, then `label`, then [`MISSING_LABEL`].
    pub fn resolved_label(&self) -> &str {
        self.month
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or(MISSING_LABEL)
    }

    /// `amount`, then `value`, then zero.
    pub fn resolved_value(&self) -> f64 {
        self.amount.or(self.value).unwrap_or(0.0)
    }
}

impl TimeSeriesInput {
    /// Picks the variant by inspecting the JSON structure; first match wins.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => match (map.get("labels"), map.get("data")) {
                (Some(Value::Array(labels)), Some(Value::Array(data))) => Self::Labeled {
                    labels: labels.iter().map(label_text).collect(),
                    data: data.iter().map(number_or_zero).collect(),
                },
                _ => Self::CategoryMap(
                    map.iter()
                        .map(|(key, value)| (key.clone(), number_or_zero(value)))
                        .collect(),
                ),
            },
            Value::Array(items) => {
                Self::Points(items.iter().map(SeriesPoint::from_value).collect())
            }
            _ => Self::Empty,
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Labeled { .. } => "labeled",
            Self::Points(_) => "points",
            Self::CategoryMap(_) => "category_map",
            Self::Empty => "empty",
        }
    }
}

impl<'de> Deserialize<'de> for TimeSeriesInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn number_or_zero(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_without_data_decode_as_category_map() {
        let input = TimeSeriesInput::from_value(&json!({"labels": ["a"]}));
        assert!(matches!(input, TimeSeriesInput::CategoryMap(ref entries) if entries.len() == 1));
    }

    #[test]
    fn wrong_typed_fields_fall_through() {
        let point = SeriesPoint::from_value(&json!({
            "month": null,
            "label": "Mar",
            "amount": "7",
            "value": 7
        }));
        assert_eq!(point.resolved_label(), "Mar");
        assert_eq!(point.resolved_value(), 7.0);
    }

    #[test]
    fn non_object_entries_become_placeholders() {
        let input = TimeSeriesInput::from_value(&json!([5, "x"]));
        let TimeSeriesInput::Points(points) = input else {
            panic!("expected points");
        };
        assert!(points.iter().all(|p| p.resolved_label() == MISSING_LABEL));
    }

    #[test]
    fn deserializes_through_serde() {
        let input: TimeSeriesInput = serde_json::from_str(r#"{"Jan": 1, "Feb": 2}"#).unwrap();
        assert_eq!(
            input,
            TimeSeriesInput::CategoryMap(vec![("Jan".into(), 1.0), ("Feb".into(), 2.0)])
        );
    }

    #[test]
    fn null_is_empty() {
        assert_eq!(TimeSeriesInput::from_value(&Value::Null), TimeSeriesInput::Empty);
    }
}
