//! Structural validation applied before tokenization.

use crate::PointerError;

/// Maximum allowed pointer string length.
const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

/// Validate decoded pointer text before tokenization.
///
/// # Errors
///
/// Returns an error if:
/// - The text is non-empty but doesn't start with `/`
/// - The text exceeds the maximum length (1024 characters)
pub fn validate_pointer_text(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::PointerInvalid);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PointerError::PointerTooLong);
    }
    Ok(())
}

/// Validate the segment count before classification.
pub fn validate_depth(segments: usize) -> Result<(), PointerError> {
    if segments > MAX_PATH_LENGTH {
        return Err(PointerError::PathTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_pointer() {
        assert!(validate_pointer_text("").is_ok());
    }

    #[test]
    fn test_validate_absolute_pointer() {
        assert!(validate_pointer_text("/").is_ok());
        assert!(validate_pointer_text("/foo").is_ok());
        assert!(validate_pointer_text("/foo/bar").is_ok());
    }

    #[test]
    fn test_validate_relative_pointer() {
        assert!(matches!(
            validate_pointer_text("foo/bar"),
            Err(PointerError::PointerInvalid)
        ));
    }

    #[test]
    fn test_validate_long_pointer() {
        let long_pointer = "/".to_string() + &"a".repeat(2000);
        assert!(matches!(
            validate_pointer_text(&long_pointer),
            Err(PointerError::PointerTooLong)
        ));
    }

    #[test]
    fn test_validate_depth() {
        assert!(validate_depth(256).is_ok());
        assert!(matches!(
            validate_depth(257),
            Err(PointerError::PathTooLong)
        ));
    }
}
