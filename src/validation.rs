//! Caller-side checks for trip requests.
//!
//! The estimator accepts anything finite; the bounds declared on
//! [`TripRequest`] with `#[validate(...)]` are the ones the trip form enforces
//! before a request is ever built. The helpers here are the custom and schema
//! rules those attributes point at.

use std::borrow::Cow;

use validator::Validate;

use crate::estimator::TripRequest;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid trip request: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl ValidationError {
    /// Names of the rejected fields, sorted. Rules spanning the whole request
    /// report under `__all__`.
    pub fn fields(&self) -> Vec<&'static str> {
        let ValidationError::Invalid(errors) = self;
        let mut fields: Vec<&'static str> = errors.errors().keys().copied().collect();
        fields.sort_unstable();
        fields
    }
}

/// Check a request against the form's bounds, reporting every failing field.
pub fn validate(request: &TripRequest) -> Result<(), ValidationError> {
    request.validate()?;
    Ok(())
}

pub(crate) fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}

/// `range` lets NaN through, so finiteness is checked over the whole request.
pub(crate) fn finite_inputs(request: &TripRequest) -> Result<(), validator::ValidationError> {
    if request.battery_range.is_finite() && request.current_charge.is_finite() {
        return Ok(());
    }
    let mut error = validator::ValidationError::new("non_finite");
    error.message = Some(Cow::Borrowed("battery range and charge must be finite"));
    Err(error)
}
