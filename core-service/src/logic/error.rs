//! Error handling
//!
//! Every rejection in the simulation core is synchronous and carries a reason
//! string the view layer can show as-is.

use thiserror::Error;

use crate::logic::screens::Route;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Strategy id not present in the mitigation catalog
    #[error("Unknown mitigation strategy '{0}'")]
    UnknownEntity(String),

    #[error("Unknown agent '{0}'")]
    UnknownAgent(String),

    /// Field or setting name that is not part of the config model
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Command addressed to a screen that is not mounted
    #[error("The {expected} screen is not mounted (active: {active})")]
    ScreenNotMounted { expected: Route, active: Route },
}

impl DashboardError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DashboardError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        let err = DashboardError::invalid_value("alertThreshold", "must be between 0 and 100");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'alertThreshold': must be between 0 and 100"
        );

        let err = DashboardError::ScreenNotMounted {
            expected: Route::Mitigation,
            active: Route::Home,
        };
        assert_eq!(err.to_string(), "The mitigation screen is not mounted (active: home)");
    }
}
