use serde::{Deserialize, Serialize};

/// Shown in place of a metadata field the provider did not supply.
pub const UNAVAILABLE: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    HongKong,
    MainlandChina,
    UnitedStates,
}

impl Market {
    pub fn currency_label(&self) -> &'static str {
        match self {
            Market::HongKong => "HKD $",
            Market::MainlandChina => "CNY ¥",
            Market::UnitedStates => "USD $",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Market::HongKong => "Hong Kong",
            Market::MainlandChina => "China A-share",
            Market::UnitedStates => "US",
        }
    }
}

/// Optional company fields as reported by the metadata provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMetadata {
    #[serde(rename = "shortName", default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(rename = "longName", default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(rename = "trailingPE", default, skip_serializing_if = "Option::is_none")]
    pub trailing_pe: Option<f64>,
    #[serde(
        rename = "priceToSalesTrailing12Months",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_to_sales: Option<f64>,
}

impl MarketMetadata {
    /// Short name, then long name, then the symbol itself.
    pub fn display_name(&self, symbol: &str) -> String {
        [&self.short_name, &self.long_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or(symbol)
            .to_string()
    }
}

pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => UNAVAILABLE.to_string(),
    }
}
