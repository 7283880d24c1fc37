//! Resources needed to download a file

use std::path::{Path, PathBuf};

use bytes::Bytes;

use super::PathArg;
use crate::entry::FileMetadata;
use crate::request::API_RESULT_HEADER;
use crate::{Error, Result};

/// A file downloaded to the local file system
///
/// The local copy is meant to be sent somewhere else and then removed, as stated by
/// `delete_after_send`. Removing it is the responsibility of the caller, see [`Download::cleanup`].
#[derive(Debug)]
pub struct Download {
    /// Name of the remote file
    pub name: String,
    /// Where the file has been written
    pub local_path: PathBuf,
    pub content: Bytes,
    /// Metadata found in the `Dropbox-Api-Result` header
    pub metadata: FileMetadata,
    pub delete_after_send: bool,
}

impl Download {
    /// Removes the local copy of the file
    pub async fn cleanup(self) -> Result<()> {
        tokio::fs::remove_file(&self.local_path).await?;
        Ok(())
    }
}

fn result_header(res: &reqwest::Response) -> Result<FileMetadata> {
    let value = res
        .headers()
        .get(API_RESULT_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::MissingResultHeader)?;
    serde_json::from_str(value).map_err(Error::from)
}

impl crate::Client {
    async fn fetch(&self, path: &str) -> Result<reqwest::Response> {
        let path = crate::path::normalize(path);
        self.content_request("download", &PathArg { path: &path }, None)
            .await
    }

    /// Downloads a file into `dest_folder`, or the configured temporary folder when none is given.
    ///
    /// The folder is created when missing and the local file takes the name of the remote file.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-download).
    ///
    /// ```no_run
    /// use dropbox_files::{AccessToken, Client};
    ///
    /// # tokio_test::block_on(async {
    /// let client = Client::new(AccessToken::new("my-token")).unwrap();
    /// let file = client.download("/report.pdf", None).await.unwrap();
    /// println!("{} bytes in {}", file.content.len(), file.local_path.display());
    /// file.cleanup().await.unwrap();
    /// # })
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn download(&self, path: &str, dest_folder: Option<&Path>) -> Result<Download> {
        let res = self.fetch(path).await?;
        let metadata = result_header(&res)?;
        let content = res.bytes().await.map_err(Error::Transport)?;

        let folder = match dest_folder {
            Some(folder) if !folder.as_os_str().is_empty() => folder,
            _ => self.config.temp_folder.as_path(),
        };
        tokio::fs::create_dir_all(folder).await?;
        // the remote name comes from the server, only its last component is kept
        let name = crate::path::file_name(Path::new(&metadata.name))
            .ok_or(Error::MissingResultHeader)?
            .to_string();
        let local_path = folder.join(&name);
        tokio::fs::write(&local_path, &content).await?;
        tracing::debug!("wrote {} bytes to {}", content.len(), local_path.display());

        Ok(Download {
            name,
            local_path,
            content,
            metadata,
            delete_after_send: true,
        })
    }

    /// Fetches the content of a file, without writing anything locally.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-download).
    #[tracing::instrument(skip(self))]
    pub async fn get_contents(&self, path: &str) -> Result<Bytes> {
        let res = self.fetch(path).await?;
        res.bytes().await.map_err(Error::Transport)
    }
}
