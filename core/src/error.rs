use thiserror::Error;

/// Rejected user input. The message is shown verbatim before re-prompting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("weekly waste cannot be negative (got {0})")]
    NegativeWaste(f64),

    #[error("rate must be between 0 and 100 (got {0})")]
    RateOutOfRange(f64),

    #[error("target rate {target}% must not be lower than current rate {current}%")]
    TargetBelowCurrent { target: f64, current: f64 },
}
