use serde::{Deserialize, Serialize};

use super::indicators::{DegradedIndicator, IndicatorSnapshot};
use super::market::{format_ratio, Market};
use super::signal::{ConditionSet, DiagnosticScores, SignalResult};
use super::zones::{AddOnLevels, PriceZones};

/// Complete output of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub last_price: f64,
    pub signal: SignalResult,
    pub zones: PriceZones,
    pub adds: AddOnLevels,
    pub indicators: IndicatorSnapshot,
    pub conditions: ConditionSet,
    pub diagnostics: DiagnosticScores,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<DegradedIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_pe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_sales: Option<f64>,
}

impl AnalysisResult {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    pub fn trailing_pe_display(&self) -> String {
        format_ratio(self.trailing_pe)
    }

    pub fn price_to_sales_display(&self) -> String {
        format_ratio(self.price_to_sales)
    }
}

/// Analysis result together with the symbol context it was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub market: Market,
    pub currency: String,
    pub display_name: String,
    pub result: AnalysisResult,
}
