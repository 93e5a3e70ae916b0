//! Ticker normalization across US, Hong Kong and mainland China conventions.
//!
//! Purely syntactic: nothing here checks that a symbol exists. Whether it is
//! valid is decided by the price provider returning data for it.

use crate::config::DEFAULT_SYMBOL;
use crate::models::market::Market;

const HK_SUFFIX: &str = ".HK";
const SHANGHAI_SUFFIX: &str = ".SS";
const SHENZHEN_SUFFIX: &str = ".SZ";
const HK_CODE_WIDTH: usize = 5;

/// Map a user-entered ticker to the form the price provider expects.
///
/// - blank input falls back to the default symbol
/// - `700.HK` becomes `00700.HK`
/// - share classes such as `BRK.B` become `BRK-B`
/// - bare six-digit A-share codes get `.SS` (leading 6 or 9) or `.SZ`
pub fn normalize(raw: &str) -> String {
    let s = raw.trim().to_uppercase();
    if s.is_empty() {
        return DEFAULT_SYMBOL.to_string();
    }

    if let Some(code) = s.strip_suffix(HK_SUFFIX) {
        return format!("{}{}", pad_hk_code(code), HK_SUFFIX);
    }

    if s.contains('.') && !is_mainland_suffixed(&s) {
        return s.replace('.', "-");
    }

    if s.len() == 6 && s.chars().all(|c| c.is_ascii_digit()) {
        let suffix = if s.starts_with(|c: char| c == '6' || c == '9') {
            SHANGHAI_SUFFIX
        } else {
            SHENZHEN_SUFFIX
        };
        return format!("{}{}", s, suffix);
    }

    s
}

/// Market a canonical symbol trades on. Display metadata only.
pub fn classify_market(symbol: &str) -> Market {
    let s = symbol.trim().to_uppercase();
    if s.ends_with(HK_SUFFIX) {
        Market::HongKong
    } else if is_mainland_suffixed(&s) {
        Market::MainlandChina
    } else {
        Market::UnitedStates
    }
}

/// `(currency label, market label)` for a canonical symbol.
pub fn market_labels(symbol: &str) -> (&'static str, &'static str) {
    let market = classify_market(symbol);
    (market.currency_label(), market.label())
}

fn is_mainland_suffixed(symbol: &str) -> bool {
    symbol.ends_with(SHANGHAI_SUFFIX) || symbol.ends_with(SHENZHEN_SUFFIX)
}

// Codes already at or beyond the width are kept as-is, never truncated.
fn pad_hk_code(code: &str) -> String {
    if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
        format!("{:0>width$}", code, width = HK_CODE_WIDTH)
    } else {
        code.to_string()
    }
}
