//! Client for the [Dropbox files API](https://www.dropbox.com/developers/documentation/http/documentation).
//!
//! The [`Client`] talks to two endpoints: the metadata endpoint, where every
//! call is a JSON body posted to `files/<operation>`, and the content endpoint,
//! where the call parameters travel as JSON in the `Dropbox-API-Arg` header and
//! the body carries the raw file bytes.
//!
//! ```no_run
//! use dropbox_files::credentials::AccessToken;
//! use dropbox_files::Client;
//!
//! # tokio_test::block_on(async {
//! let client = Client::new(AccessToken::new("my-token")).unwrap();
//! let listing = client.list_folder("/documents").await.unwrap();
//! for entry in listing.entries {
//!     println!("{}", entry.name());
//! }
//! # })
//! ```

use std::sync::Arc;

pub mod builder;
pub mod config;
pub mod credentials;
pub mod entry;
pub mod error;
pub mod files;
pub mod path;
mod request;

pub use builder::ClientBuilder;
pub use config::Config;
pub use credentials::{AccessToken, TokenProvider};
pub use error::{Error, Result};

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Base url of the metadata endpoint
pub const API_URL: &str = "https://api.dropboxapi.com/2";
/// Base url of the content endpoint
pub const CONTENT_URL: &str = "https://content.dropboxapi.com/2";

/// Client for the Dropbox files API
///
/// The client holds no mutable state: it can be cloned and shared between tasks.
/// The access token is asked to the [`TokenProvider`] on every call.
#[derive(Clone)]
pub struct Client {
    config: Config,
    credentials: Arc<dyn TokenProvider>,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`builder::Error::Reqwest`] if the HTTP client could not be built.
    pub fn new(credentials: impl TokenProvider + 'static) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default().with_credentials(credentials).build()
    }

    /// Creates a [`ClientBuilder`]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    pub fn init() {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    pub fn client(url: String) -> crate::Client {
        crate::Client::builder()
            .with_api_url(url.clone())
            .with_content_url(url)
            .with_credentials(crate::AccessToken::new("access-token"))
            .build()
            .unwrap()
    }

    #[test]
    fn debug_hides_the_credentials() {
        let client = crate::Client::builder()
            .with_api_url("http://localhost:1234")
            .with_credentials(crate::AccessToken::new("very-secret-token"))
            .build()
            .unwrap();
        let output = format!("{:?}", client);
        assert!(output.starts_with("Client"), "{}", output);
        assert!(output.contains("http://localhost:1234"), "{}", output);
        assert!(!output.contains("very-secret-token"), "{}", output);
    }
}
