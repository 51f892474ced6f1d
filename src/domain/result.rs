// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Result type alias for Kinboard
//!
//! This module provides a convenient Result type alias that uses
//! [`KinboardError`] as the error type.

use super::errors::KinboardError;

/// Result type alias for Kinboard operations
///
/// # Examples
///
/// ```
/// use kinboard::domain::result::Result;
/// use kinboard::domain::errors::KinboardError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(KinboardError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, KinboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::KinboardError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(KinboardError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
