use serde::{Deserialize, Serialize};

use crate::transactions::Period;

/// User-tunable defaults for the dashboard views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "DashboardConfig::default_period_value")]
    pub default_period: String,
    /// When no range is supplied, restrict views to the current calendar month.
    #[serde(default = "DashboardConfig::default_true")]
    pub default_to_current_month: bool,
    #[serde(default = "DashboardConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "DashboardConfig::default_preview_limit")]
    pub preview_limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_period: Self::default_period_value(),
            default_to_current_month: true,
            currency_symbol: Self::default_currency_symbol(),
            preview_limit: Self::default_preview_limit(),
            log_filter: None,
        }
    }
}

impl DashboardConfig {
    pub fn default_period_value() -> String {
        "monthly".into()
    }

    fn default_true() -> bool {
        true
    }

    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_preview_limit() -> usize {
        5
    }

    /// The configured period, falling back to monthly when the stored value is unknown.
    pub fn period(&self) -> Period {
        Period::parse(&self.default_period).unwrap_or(Period::Monthly)
    }

    /// Formats an amount the way the dashboard cards display money.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}
