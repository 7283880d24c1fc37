//! Sources of the bearer token sent with every request.
//!
//! Getting and refreshing a token (the OAuth2 flow) is not handled by this crate.
//! Anything able to hand out a valid token can implement [`TokenProvider`].

use std::sync::Arc;

/// Boxed error returned by a [`TokenProvider`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Gives the access token to use for the next request.
///
/// The client calls it once per request and never keeps the value,
/// refreshing the token is the responsibility of the implementation.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, BoxError>;
}

/// A fixed access token
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Creates a token from the `DROPBOX_ACCESS_TOKEN` environment variable
    ///
    /// Returns `None` when the variable is not set or empty.
    ///
    /// ```rust
    /// use dropbox_files::credentials::AccessToken;
    ///
    /// match AccessToken::from_env() {
    ///     Some(_) => println!("token found"),
    ///     None => eprintln!("no token provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("DROPBOX_ACCESS_TOKEN")
            .ok()
            .filter(|value| !value.is_empty())
            .map(Self)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"********").finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for AccessToken {
    async fn access_token(&self) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    async fn access_token(&self) -> Result<String, BoxError> {
        self.as_ref().access_token().await
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Box<T> {
    async fn access_token(&self) -> Result<String, BoxError> {
        self.as_ref().access_token().await
    }
}
