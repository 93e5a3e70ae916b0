use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One daily OHLC bar. Missing prices from the provider deserialize to NaN and
/// are dropped during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    #[serde(deserialize_with = "nullable_price")]
    pub open: f64,
    #[serde(deserialize_with = "nullable_price")]
    pub high: f64,
    #[serde(deserialize_with = "nullable_price")]
    pub low: f64,
    #[serde(deserialize_with = "nullable_price")]
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn has_valid_close(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }

    /// High of the bar, falling back to the close when the provider left it blank.
    pub fn effective_high(&self) -> f64 {
        if self.high.is_finite() {
            self.high
        } else {
            self.close
        }
    }

    pub fn effective_low(&self) -> f64 {
        if self.low.is_finite() {
            self.low
        } else {
            self.close
        }
    }
}

fn nullable_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Cleaned, chronologically ascending bars with a valid close on every entry.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Drops bars without a usable close and sorts by date, keeping the last
    /// bar seen for a duplicated date.
    pub fn from_bars(bars: &[PriceBar]) -> Self {
        let mut cleaned: Vec<PriceBar> = bars.iter().filter(|b| b.has_valid_close()).cloned().collect();
        cleaned.sort_by_key(|b| b.date);

        let mut deduped: Vec<PriceBar> = Vec::with_capacity(cleaned.len());
        for bar in cleaned {
            match deduped.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => deduped.push(bar),
            }
        }

        Self { bars: deduped }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
