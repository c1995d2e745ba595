use url::Url;

use super::auth::SecureString;
use super::{DataApiClient, DataApiError};

/// Builder for [`DataApiClient`] instances.
///
/// The client needs the tenant app name (to derive the
/// `https://{app}.bubbleapps.io` base URL), an optional app
/// version/environment label (`version-test`, ...), and the API bearer key.
/// Configuration is injected here once; there is no process-wide mutable
/// state read at request time.
///
/// # Example
///
/// ```rust
/// use bubble_data::DataApiClient;
///
/// # fn example() -> Result<(), bubble_data::DataApiError> {
/// let client = DataApiClient::builder()
///     .with_app_name("myapp")
///     .with_app_version("version-test")
///     .with_api_key("my-api-key")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataApiClientBuilder {
    client: Option<reqwest::Client>,
    app_name: String,
    app_version: Option<String>,
    api_key: Option<SecureString>,
    base_url: Option<Url>,
}

impl DataApiClientBuilder {
    /// Sets the tenant application name.
    ///
    /// The name becomes the subdomain of the derived base URL:
    /// `https://{app}.bubbleapps.io`. Required unless a base URL override is
    /// provided with [`with_base_url`](Self::with_base_url).
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Sets the optional application version/environment label.
    ///
    /// When present it is inserted as the first path segment, e.g.
    /// `https://myapp.bubbleapps.io/version-test/api/1.1/obj/...` to target
    /// the development database instead of live.
    #[must_use]
    pub fn with_app_version(mut self, app_version: impl Into<String>) -> Self {
        self.app_version = Some(app_version.into());
        self
    }

    /// Sets the API bearer key sent with every request. Required.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<SecureString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the derived base URL.
    ///
    /// Use this for apps served from a custom domain, or to point the client
    /// at a local test server. The `/api/1.1/obj` suffix (and the app
    /// version, when set) is still appended.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Uses a pre-configured `reqwest::Client` instead of the default one.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the final [`DataApiClient`].
    ///
    /// # Errors
    ///
    /// - [`DataApiError::MissingAppName`] when neither an app name nor a base
    ///   URL override was provided
    /// - [`DataApiError::MissingApiKey`] when no API key was provided
    /// - [`DataApiError::Url`] when the derived base URL does not parse
    /// - [`DataApiError::InvalidBaseUrl`] when the base URL cannot carry path
    ///   segments (e.g. a `mailto:` URL)
    pub fn build(self) -> Result<DataApiClient, DataApiError> {
        let Self {
            client,
            app_name,
            app_version,
            api_key,
            base_url,
        } = self;

        let api_key = api_key.ok_or(DataApiError::MissingApiKey)?;

        let mut api_root = match base_url {
            Some(url) => url,
            None => {
                if app_name.is_empty() {
                    return Err(DataApiError::MissingAppName);
                }
                Url::parse(&format!("https://{app_name}.bubbleapps.io"))?
            }
        };

        {
            let mut segments =
                api_root
                    .path_segments_mut()
                    .map_err(|()| DataApiError::InvalidBaseUrl {
                        error: "URL cannot carry path segments".to_string(),
                    })?;
            segments.pop_if_empty();
            if let Some(version) = &app_version {
                segments.push(version);
            }
            segments.extend(["api", "1.1", "obj"]);
        }

        Ok(DataApiClient {
            client: client.unwrap_or_default(),
            api_root,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_derives_base_url_from_app_name() {
        let client = DataApiClientBuilder::default()
            .with_app_name("myapp")
            .with_api_key("key")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(
            client.api_root.as_str(),
            @"https://myapp.bubbleapps.io/api/1.1/obj"
        );
    }

    #[test]
    fn builder_inserts_app_version_segment() {
        let client = DataApiClientBuilder::default()
            .with_app_name("myapp")
            .with_app_version("version-test")
            .with_api_key("key")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(
            client.api_root.as_str(),
            @"https://myapp.bubbleapps.io/version-test/api/1.1/obj"
        );
    }

    #[test]
    fn builder_accepts_base_url_override() {
        let base = Url::parse("http://127.0.0.1:3000").expect("valid url");
        let client = DataApiClientBuilder::default()
            .with_base_url(base)
            .with_api_key("key")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(
            client.api_root.as_str(),
            @"http://127.0.0.1:3000/api/1.1/obj"
        );
    }

    #[test]
    fn builder_requires_an_app_name_or_base_url() {
        let result = DataApiClientBuilder::default().with_api_key("key").build();
        assert!(matches!(result, Err(DataApiError::MissingAppName)));
    }

    #[test]
    fn builder_requires_an_api_key() {
        let result = DataApiClientBuilder::default().with_app_name("myapp").build();
        assert!(matches!(result, Err(DataApiError::MissingApiKey)));
    }

    #[test]
    fn builder_rejects_base_url_without_path_segments() {
        let base = Url::parse("mailto:user@example.com").expect("valid url");
        let result = DataApiClientBuilder::default()
            .with_base_url(base)
            .with_api_key("key")
            .build();

        assert!(matches!(result, Err(DataApiError::InvalidBaseUrl { .. })));
    }
}
