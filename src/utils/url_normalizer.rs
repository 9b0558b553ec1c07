//! URL normalization applied before a URL is stored or matched.
//!
//! Normalization only ensures a protocol prefix: a URL without `http://` or
//! `https://` gets `http://` prepended (this covers `www.`-prefixed input as
//! well). The stored string is otherwise kept exactly as submitted, so the
//! same input always produces the same key.

use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must contain a host")]
    MissingHost,
}

/// Returns true if `input` starts with `prefix`, ignoring ASCII case.
fn has_prefix_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Prepends `http://` unless the input already carries an HTTP(S) scheme.
///
/// Infallible; used on lookup and delete paths where the input only needs to
/// match what [`normalize_url`] stored.
pub fn ensure_scheme(input: &str) -> String {
    let input = input.trim();

    if has_prefix_ignore_case(input, HTTP_PREFIX) || has_prefix_ignore_case(input, HTTPS_PREFIX) {
        input.to_string()
    } else {
        format!("{HTTP_PREFIX}{input}")
    }
}

/// Normalizes a long URL for storage.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed; an empty URL is rejected
/// 2. Control characters (tabs, newlines, ...) are rejected; the URL parser
///    would silently drop them, leaving a stored string that cannot be sent
///    back in a `Location` header
/// 3. `http://` is prepended if no `http://`/`https://` prefix is present
/// 4. The result must parse as an absolute URL with a host
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] if the URL contains a control
/// character or the prefixed URL does not parse, and
/// [`UrlNormalizationError::MissingHost`] if it has no host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
/// assert_eq!(normalize_url("www.example.com").unwrap(), "http://www.example.com");
/// assert_eq!(normalize_url("https://example.com/a").unwrap(), "https://example.com/a");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.trim().is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let normalized = ensure_scheme(input);

    if normalized.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL must not contain control characters".to_string(),
        ));
    }

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(normalized)
}
