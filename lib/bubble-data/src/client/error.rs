/// Errors that can occur when using the [`DataApiClient`](super::DataApiClient).
///
/// Transport, URL, and serialization failures are wrapped from the underlying
/// libraries without translation; the remaining variants are domain failures
/// detected by the client itself. All variants implement `std::error::Error`.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum DataApiError {
    /// HTTP transport error from the underlying reqwest library.
    ///
    /// Covers network failures, timeouts, and non-success HTTP statuses,
    /// which propagate unmodified from the transport.
    Transport(reqwest::Error),

    /// URL parsing error when deriving request URLs.
    Url(url::ParseError),

    /// JSON serialization/deserialization error.
    Json(serde_json::Error),

    /// Query string construction error.
    Query(serde_urlencoded::ser::Error),

    /// No tenant app name was configured and no base URL override was given.
    #[display("An app name is required to derive the API base URL")]
    MissingAppName,

    /// No API key was configured.
    #[display("An API key is required")]
    MissingApiKey,

    /// The configured base URL cannot carry path segments.
    #[display("Invalid base URL: {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// Description of why the base URL is unusable.
        error: String,
    },

    /// The API key cannot be represented as an HTTP header value.
    #[display("API key contains invalid characters: {message}")]
    #[from(skip)]
    InvalidApiKey {
        /// Description of the invalid characters.
        message: String,
    },

    /// A read or create call returned no usable response body.
    #[display("Empty response body from {operation} request")]
    #[from(skip)]
    EmptyBody {
        /// The operation whose response was empty.
        operation: &'static str,
    },

    /// A create call did not report success or returned no identifier.
    ///
    /// The message embeds the status value the server returned.
    #[display("Create failed with status: {status}")]
    #[from(skip)]
    CreateFailed {
        /// The status value returned by the server.
        status: String,
    },

    /// A search call was missing the expected response payload.
    #[display("Search response is missing the expected payload")]
    SearchFailed,

    /// `save` was invoked on a record without an identifier.
    ///
    /// Detected locally before any network call: a programming error, not a
    /// transient fault.
    #[display("Cannot save a record without an identifier")]
    MissingRecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_api_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<DataApiError>();
        assert_sync::<DataApiError>();
    }

    #[test]
    fn domain_error_messages() {
        let error = DataApiError::CreateFailed {
            status: "MISSING_DATA".to_string(),
        };
        assert_eq!(error.to_string(), "Create failed with status: MISSING_DATA");

        let error = DataApiError::EmptyBody { operation: "fetch" };
        assert_eq!(error.to_string(), "Empty response body from fetch request");

        let error = DataApiError::MissingRecordId;
        assert_eq!(
            error.to_string(),
            "Cannot save a record without an identifier"
        );
    }
}
