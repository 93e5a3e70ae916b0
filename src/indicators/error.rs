use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("{indicator} needs at least one observation")]
    EmptyInput { indicator: &'static str },

    #[error("{indicator} period must be positive")]
    InvalidPeriod { indicator: &'static str },
}
