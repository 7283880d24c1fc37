use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::credentials::TokenProvider;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no token provider was given to the builder.
    #[error("no credentials provided")]
    MissingCredentials,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// The http client used to reach the API, either to be built or given as is.
enum Transport {
    Builder(reqwest::ClientBuilder),
    Client(reqwest::Client),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the endpoints, the temporary folder used for downloads,
/// the credentials, and optionally customizing the inner `reqwest::ClientBuilder`
/// or giving an already built `reqwest::Client`.
///
/// ```no_run
/// use dropbox_files::{AccessToken, Client};
/// use std::time::Duration;
///
/// let _client = Client::builder()
///     .with_credentials(AccessToken::new("my-token"))
///     .with_timeout(Duration::from_secs(30))
///     .with_temp_folder("/tmp/dropbox")
///     .build()
///     .expect("unable to build client");
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    config: crate::Config,
    transport: Option<Transport>,
    credentials: Option<Arc<dyn TokenProvider>>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("credentials", &self.credentials.is_some())
            .finish()
    }
}

impl ClientBuilder {
    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: crate::Config) {
        self.config = config;
    }

    /// Replaces the whole configuration and returns the modified builder.
    pub fn with_config(mut self, config: crate::Config) -> Self {
        self.set_config(config);
        self
    }

    /// Sets the base url of the metadata endpoint.
    pub fn set_api_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.config.api_url = value.into();
    }

    /// Sets the base url of the metadata endpoint and returns the modified builder.
    pub fn with_api_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_api_url(value);
        self
    }

    /// Sets the base url of the content endpoint.
    pub fn set_content_url(&mut self, value: impl Into<Cow<'static, str>>) {
        self.config.content_url = value.into();
    }

    /// Sets the base url of the content endpoint and returns the modified builder.
    pub fn with_content_url(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.set_content_url(value);
        self
    }

    /// Sets the folder receiving downloads when no destination is given.
    pub fn set_temp_folder(&mut self, value: impl Into<PathBuf>) {
        self.config.temp_folder = value.into();
    }

    /// Sets the folder receiving downloads and returns the modified builder.
    pub fn with_temp_folder(mut self, value: impl Into<PathBuf>) -> Self {
        self.set_temp_folder(value);
        self
    }

    /// Sets the timeout of the built http client.
    ///
    /// Has no effect when a ready `reqwest::Client` is given.
    pub fn set_timeout(&mut self, value: Duration) {
        self.config.timeout = Some(value);
    }

    /// Sets the timeout and returns the modified builder.
    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.set_timeout(value);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.transport = Some(Transport::Builder(client_builder));
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Uses an already built `reqwest::Client`, for sharing its connection pool.
    pub fn set_http_client(&mut self, client: reqwest::Client) {
        self.transport = Some(Transport::Client(client));
    }

    /// Uses an already built `reqwest::Client` and returns the modified builder.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.set_http_client(client);
        self
    }

    /// Sets the source of the access tokens.
    pub fn set_credentials(&mut self, credentials: impl TokenProvider + 'static) {
        self.credentials = Some(Arc::new(credentials));
    }

    /// Sets the source of the access tokens and returns the modified builder.
    pub fn with_credentials(mut self, credentials: impl TokenProvider + 'static) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let inner = match self.transport {
            Some(Transport::Client(client)) => client,
            other => {
                let builder = match other {
                    Some(Transport::Builder(builder)) => builder,
                    _ => reqwest::ClientBuilder::default(),
                };
                let builder = builder.user_agent(crate::USER_AGENT);
                let builder = if let Some(timeout) = self.config.timeout {
                    builder.timeout(timeout)
                } else {
                    builder
                };
                builder.build()?
            }
        };
        tracing::debug!(
            api_url = %self.config.api_url,
            content_url = %self.config.content_url,
            "client built"
        );
        Ok(crate::Client {
            config: self.config,
            credentials,
            inner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientBuilder, Error};
    use crate::AccessToken;
    use std::time::Duration;

    #[test]
    fn missing_credentials() {
        let err = ClientBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn custom_configuration() {
        let client = ClientBuilder::default()
            .with_api_url("http://localhost:1234")
            .with_content_url(String::from("http://localhost:5678"))
            .with_temp_folder("/tmp/somewhere")
            .with_timeout(Duration::from_secs(5))
            .with_credentials(AccessToken::new("token"))
            .build()
            .unwrap();
        let config = client.config();
        assert_eq!(config.api_url, "http://localhost:1234");
        assert_eq!(config.content_url, "http://localhost:5678");
        assert_eq!(config.temp_folder.to_str(), Some("/tmp/somewhere"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn injected_http_client() {
        let http = reqwest::Client::new();
        let client = ClientBuilder::default()
            .with_http_client(http)
            .with_credentials(AccessToken::new("token"))
            .build()
            .unwrap();
        assert_eq!(client.config().api_url, crate::API_URL);
    }
}
