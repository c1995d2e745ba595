use std::fmt;

use reqwest::header::HeaderValue;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::DataApiError;

/// Secure wrapper for the API key that automatically zeroes memory on drop.
///
/// The Bubble Data API authenticates every request with a bearer token; this
/// wrapper keeps that token out of logs (`Debug` redacts, `Display` masks)
/// and clears it from memory when the client is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    ///
    /// The returned reference should not be stored for extended periods
    /// to minimize exposure time of sensitive data.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the `Authorization: Bearer {key}` header value for a request.
    ///
    /// The header is marked sensitive so HTTP-layer debug output redacts it.
    ///
    /// # Errors
    ///
    /// Returns [`DataApiError::InvalidApiKey`] if the key contains characters
    /// that cannot appear in an HTTP header value.
    pub(crate) fn to_bearer_header(&self) -> Result<HeaderValue, DataApiError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0)).map_err(|err| {
            DataApiError::InvalidApiKey {
                message: err.to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Masks sensitive data for display/logging purposes.
    ///
    /// Counts characters, not bytes, so multi-byte keys never split a
    /// character.
    fn mask_sensitive(value: &str) -> String {
        let chars = value.chars().count();
        if chars <= 8 {
            "***".to_string()
        } else {
            let head: String = value.chars().take(4).collect();
            let tail: String = value.chars().skip(chars - 4).collect();
            format!("{head}...{tail}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_from_api_key() {
        let key = SecureString::from("my-secret-token");
        let header = key.to_bearer_header().expect("valid header value");

        assert_eq!(header.to_str().ok(), Some("Bearer my-secret-token"));
        assert!(header.is_sensitive());
    }

    #[test]
    fn bearer_header_rejects_invalid_characters() {
        let key = SecureString::from("\0invalid");
        let result = key.to_bearer_header();

        assert!(matches!(
            result,
            Err(DataApiError::InvalidApiKey { .. })
        ));
    }

    #[test]
    fn secure_string_debug_is_redacted() {
        let secure = SecureString::from("secret-api-key");
        let debug_str = format!("{secure:?}");
        assert_eq!(debug_str, "SecureString { value: \"[REDACTED]\" }");
        assert!(!debug_str.contains("secret-api-key"));
    }

    #[test]
    fn secure_string_display_is_masked() {
        let secure = SecureString::from("secret-api-key-12345");
        assert_eq!(secure.to_string(), "secr...2345");

        let short = SecureString::from("short");
        assert_eq!(short.to_string(), "***");
    }

    #[test]
    fn secure_string_mask_boundaries() {
        assert_eq!(SecureString::mask_sensitive("12345678"), "***");
        assert_eq!(SecureString::mask_sensitive("123456789"), "1234...6789");
    }

    #[test]
    fn secure_string_display_handles_multibyte_keys() {
        // Masking must cut on character boundaries, not byte offsets.
        let secure = SecureString::from("clé-secrète-très-longue");
        assert_eq!(secure.to_string(), "clé-...ngue");

        let secure = SecureString::from("ééééééééé");
        assert_eq!(secure.to_string(), "éééé...éééé");
    }

    #[test]
    fn secure_string_conversions() {
        let secure: SecureString = "from-string".to_string().into();
        assert_eq!(secure.as_str(), "from-string");

        let secure: SecureString = "from-str".into();
        assert_eq!(secure.as_str(), "from-str");
    }
}
