//! Result type alias for Vitalwatch

use super::errors::VitalwatchError;

/// Result type alias for Vitalwatch operations
///
/// # Examples
///
/// ```
/// use vitalwatch::domain::result::Result;
/// use vitalwatch::domain::errors::VitalwatchError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VitalwatchError::InvalidConfiguration("interval must be positive".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VitalwatchError>;
