//! The errors returned by the client operations

use std::path::PathBuf;

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The local file to upload was not provided
    #[error("a source file is required")]
    MissingInput,
    /// The local file to upload does not exist
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    /// No response was received from the server
    #[error("unable to reach the server")]
    Transport(#[source] reqwest::Error),
    /// The server responded with a non success status, the raw body is kept for inspection
    #[error("server responded with status {status}: {body}")]
    RemoteApi {
        status: reqwest::StatusCode,
        body: String,
    },
    /// The token provider was not able to give an access token
    #[error("unable to get an access token")]
    Credentials(#[source] crate::credentials::BoxError),
    /// The server responded with a success status but an unexpected payload
    #[error("unable to decode the response")]
    Decode(#[from] serde_json::Error),
    /// A download response came without the `Dropbox-Api-Result` header
    #[error("missing or invalid Dropbox-Api-Result header")]
    MissingResultHeader,
    /// A listing page announced more entries without the cursor to fetch them
    #[error("listing has more entries but no cursor")]
    MissingCursor,
    /// Reading or writing a local file failed
    #[error("local file system error")]
    Io(#[from] std::io::Error),
}

/// Shorthand for results returned by the client
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error_summary: String,
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteApi { .. })
    }

    /// Status and raw body of a [`Error::RemoteApi`]
    pub fn as_remote(&self) -> Option<(reqwest::StatusCode, &str)> {
        match self {
            Self::RemoteApi { status, body } => Some((*status, body.as_str())),
            _ => None,
        }
    }

    /// The `error_summary` of a [`Error::RemoteApi`], when its body is the usual JSON error
    ///
    /// ```rust
    /// use dropbox_files::Error;
    ///
    /// let error = Error::RemoteApi {
    ///     status: reqwest::StatusCode::CONFLICT,
    ///     body: r#"{"error_summary": "path/not_found/"}"#.into(),
    /// };
    /// assert_eq!(error.remote_summary().as_deref(), Some("path/not_found/"));
    /// ```
    pub fn remote_summary(&self) -> Option<String> {
        let (_, body) = self.as_remote()?;
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|item| item.error_summary)
    }
}
