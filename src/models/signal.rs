use serde::{Deserialize, Serialize};

/// The three bottom-feature conditions the classifier works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    /// A: 3-year percentile rank below the value threshold.
    pub below_value_percentile: bool,
    /// B: RSI below the oversold threshold.
    pub oversold: bool,
    /// C: RSI rose on the latest bar.
    pub turning_up: bool,
}

impl ConditionSet {
    pub fn new(below_value_percentile: bool, oversold: bool, turning_up: bool) -> Self {
        Self {
            below_value_percentile,
            oversold,
            turning_up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Add,
    Build,
    Probe,
    Watch,
}

impl Signal {
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Add => "Add",
            Signal::Build => "Build",
            Signal::Probe => "Probe",
            Signal::Watch => "Watch",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Signal::Add => "🔵",
            Signal::Build => "🟢",
            Signal::Probe => "🟡",
            Signal::Watch => "⚪",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            Signal::Add => "Reversal confirmed, value is very attractive",
            Signal::Build => "Inside the value zone, waiting for momentum to turn",
            Signal::Probe => "A single bottom feature is present",
            Signal::Watch => "No clear bottom signal yet",
        }
    }

    pub fn all() -> [Signal; 4] {
        [Signal::Add, Signal::Build, Signal::Probe, Signal::Watch]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub label: String,
    pub marker: String,
    pub rationale: String,
}

impl From<Signal> for SignalResult {
    fn from(signal: Signal) -> Self {
        Self {
            signal,
            label: signal.label().to_string(),
            marker: signal.marker().to_string(),
            rationale: signal.rationale().to_string(),
        }
    }
}

/// Four-axis diagnostic, each axis capped at 25.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticScores {
    pub position: f64,
    pub sentiment: f64,
    pub momentum: f64,
    pub volatility: f64,
}
