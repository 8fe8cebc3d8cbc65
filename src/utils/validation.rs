use log::{debug, warn};

use crate::expression::Number;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if any number is infinite or NaN.
pub fn validate_numbers(numbers: &[Number]) -> Result<(), UtilsError> {
    debug!("Validating {} numbers", numbers.len());

    if let Some(bad) = numbers.iter().find(|n| !n.is_finite()) {
        warn!("Input contains a non-finite number: {}", bad);
        return Err(UtilsError::NonFiniteNumber(bad.to_string()));
    }

    debug!("Number validation successful");
    Ok(())
}
