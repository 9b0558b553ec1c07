//! Short code generation and custom alias validation.
//!
//! Generated codes are lowercase hexadecimal strings drawn from the operating
//! system's random source. No collision check happens here; uniqueness is
//! enforced by the store on insert.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of codes generated when no custom alias is requested.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Longest custom alias accepted.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Characters allowed in a custom alias. Aliases become a path segment of
/// `/r/{code}`, so separators and reserved URL characters are excluded.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is a valid regex")
});

/// Generates a random short code of `length` hexadecimal characters.
///
/// Draws `length / 2` bytes (rounded up) from `getrandom` and hex-encodes them.
///
/// # Errors
///
/// Returns [`AppError::Entropy`] if the system random source is unavailable.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8)?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code(length: usize) -> Result<String, AppError> {
    let mut buffer = vec![0u8; length.div_ceil(2)];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::entropy(
            "Random source unavailable",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let mut code = hex::encode(buffer);
    code.truncate(length);

    Ok(code)
}

/// Validates a user-supplied custom alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_default_length() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_generate_code_is_lowercase_hex() {
        let pattern = Regex::new(r"^[0-9a-f]{8}$").unwrap();
        for _ in 0..100 {
            let code = generate_code(8).unwrap();
            assert!(pattern.is_match(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_generate_code_odd_length() {
        let code = generate_code(5).unwrap();
        assert_eq!(code.len(), 5);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_code_zero_length() {
        assert_eq!(generate_code(0).unwrap(), "");
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(16).unwrap());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_simple_alias() {
        assert!(validate_alias("promo").is_ok());
    }

    #[test]
    fn test_validate_alias_with_separators() {
        assert!(validate_alias("Spring_Sale-2025").is_ok());
    }

    #[test]
    fn test_validate_alias_single_char() {
        assert!(validate_alias("a").is_ok());
    }

    #[test]
    fn test_validate_alias_max_length() {
        assert!(validate_alias(&"a".repeat(MAX_ALIAS_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_alias_too_long() {
        let result = validate_alias(&"a".repeat(MAX_ALIAS_LENGTH + 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("1-64"));
    }

    #[test]
    fn test_validate_alias_empty() {
        assert!(validate_alias("").is_err());
    }

    #[test]
    fn test_validate_alias_slash() {
        let result = validate_alias("a/b");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_validate_alias_spaces_not_allowed() {
        assert!(validate_alias("my alias").is_err());
    }

    #[test]
    fn test_validate_alias_non_ascii() {
        assert!(validate_alias("promoé").is_err());
    }
}
