//! Resources needed to upload a file

use std::path::Path;

use serde::ser::SerializeStruct;

use crate::entry::FileMetadata;
use crate::{Error, Result};

/// What to do when a file already exists at the target path
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WriteMode {
    /// Never overwrite, the file gets renamed on conflict
    Add,
    /// Always overwrite the existing file
    Overwrite,
    /// Overwrite only when the existing file is at the given revision
    Update(String),
}

impl Default for WriteMode {
    fn default() -> Self {
        Self::Add
    }
}

impl serde::Serialize for WriteMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Add => serializer.serialize_str("add"),
            Self::Overwrite => serializer.serialize_str("overwrite"),
            Self::Update(rev) => {
                let mut builder = serializer.serialize_struct(stringify!(WriteMode), 2)?;
                builder.serialize_field(".tag", "update")?;
                builder.serialize_field("update", rev)?;
                builder.end()
            }
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: &'a WriteMode,
    autorename: bool,
    mute: bool,
}

/// Checks the local file before anything is sent and loads it in memory.
async fn read_source(source: &Path) -> Result<Vec<u8>> {
    if source.as_os_str().is_empty() {
        return Err(Error::MissingInput);
    }
    match tokio::fs::metadata(source).await {
        Ok(_) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound(source.to_path_buf()));
        }
        Err(err) => return Err(Error::Io(err)),
    }
    Ok(tokio::fs::read(source).await?)
}

impl crate::Client {
    /// Uploads a local file in the folder `path`, the empty path being the root folder.
    ///
    /// The remote file is named `target_file_name` when given, otherwise it takes the name
    /// of the local file. The whole file is loaded in memory before being sent and the
    /// server renames it when the name is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] when `source` is empty and [`Error::FileNotFound`]
    /// when it doesn't exist, in both cases before any request is made.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-upload).
    ///
    /// ```no_run
    /// use dropbox_files::files::WriteMode;
    /// use dropbox_files::{AccessToken, Client};
    ///
    /// # tokio_test::block_on(async {
    /// let client = Client::new(AccessToken::new("my-token")).unwrap();
    /// let file = client
    ///     .upload_as("backups", Some("Cargo.toml.bak"), "Cargo.toml", WriteMode::Overwrite)
    ///     .await
    ///     .unwrap();
    /// println!("uploaded {:?}", file.path_display);
    /// # })
    /// ```
    #[tracing::instrument(skip(self, source))]
    pub async fn upload_as(
        &self,
        path: &str,
        target_file_name: Option<&str>,
        source: impl AsRef<Path>,
        mode: WriteMode,
    ) -> Result<FileMetadata> {
        let source = source.as_ref();
        let contents = read_source(source).await?;
        let name = match target_file_name {
            Some(name) => name,
            None => crate::path::file_name(source).ok_or(Error::MissingInput)?,
        };
        let target = crate::path::join(path, name);
        tracing::debug!(
            "uploading {} ({} bytes) to {target}",
            source.display(),
            contents.len()
        );
        let arg = UploadArg {
            path: &target,
            mode: &mode,
            autorename: true,
            mute: false,
        };
        let res = self.content_request("upload", &arg, Some(contents)).await?;
        let body = res.bytes().await.map_err(Error::Transport)?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Uploads a local file in the folder `path`, keeping its name.
    pub async fn upload(
        &self,
        path: &str,
        source: impl AsRef<Path>,
        mode: WriteMode,
    ) -> Result<FileMetadata> {
        self.upload_as(path, None, source, mode).await
    }
}
