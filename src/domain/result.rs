//! Crate-wide result alias

use super::errors::LabsumError;

/// Shorthand for fallible operations returning a [`LabsumError`]
///
/// ```
/// use labsum::domain::result::Result;
/// use labsum::domain::errors::LabsumError;
///
/// fn check_age(age: u32) -> Result<u32> {
///     if age > 130 {
///         return Err(LabsumError::Validation(format!(
///             "implausible age: {age}"
///         )));
///     }
///     Ok(age)
/// }
///
/// assert!(check_age(45).is_ok());
/// assert!(check_age(240).is_err());
/// ```
pub type Result<T> = std::result::Result<T, LabsumError>;
