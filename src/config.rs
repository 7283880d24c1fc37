//! Configuration of the [`Client`](crate::Client)

use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

/// Folder receiving the downloaded files when no destination is given
pub const DEFAULT_TEMP_FOLDER: &str = "dropbox-temp";

/// Everything the client needs to know about where it sends its requests.
///
/// The client never reads the process environment, everything goes through this value.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base url of the metadata endpoint
    pub api_url: Cow<'static, str>,
    /// Base url of the content endpoint
    pub content_url: Cow<'static, str>,
    /// Folder used by [`Client::download`](crate::Client::download) when no destination is given
    pub temp_folder: PathBuf,
    /// Timeout applied to the http client built by the [`ClientBuilder`](crate::ClientBuilder)
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Cow::Borrowed(crate::API_URL),
            content_url: Cow::Borrowed(crate::CONTENT_URL),
            temp_folder: PathBuf::from(DEFAULT_TEMP_FOLDER),
            timeout: None,
        }
    }
}

impl Config {
    pub(crate) fn api_url(&self, operation: &str) -> String {
        build_url(&self.api_url, operation)
    }

    pub(crate) fn content_url(&self, operation: &str) -> String {
        build_url(&self.content_url, operation)
    }
}

fn build_url(base: &str, operation: &str) -> String {
    format!("{}/files/{}", base.trim_end_matches('/'), operation)
}
