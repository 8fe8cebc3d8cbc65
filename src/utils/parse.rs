use std::str::FromStr;

use log::{debug, warn};

use crate::expression::Number;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the text is empty, is neither an integer nor a real literal,
/// or denotes an infinite or NaN real.
pub fn parse_number(text: &str) -> Result<Number, UtilsError> {
    let text = text.trim();
    debug!("Parsing number '{}'", text);

    if text.is_empty() {
        warn!("Number is empty");
        return Err(UtilsError::EmptyNumber);
    }

    if let Ok(n) = text.parse::<i128>() {
        return Ok(Number::Int(n));
    }

    let value = text
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidNumber(text.to_string()))?;
    if !value.is_finite() {
        warn!("Rejecting non-finite number '{}'", text);
        return Err(UtilsError::NonFiniteNumber(text.to_string()));
    }
    Ok(Number::Real(value))
}

impl FromStr for Number {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s)
    }
}
