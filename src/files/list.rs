//! Resources needed to list the content of a folder

use super::PathArg;
use crate::entry::Metadata;

/// One page of the content of a folder
///
/// When `has_more` is set, the next page is fetched with
/// [`Client::list_folder_continue`](crate::Client::list_folder_continue) and the `cursor`.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ListFolderResult {
    pub entries: Vec<Metadata>,
    /// Opaque token, only meant to be given back to the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, serde::Serialize)]
struct CursorArg<'a> {
    cursor: &'a str,
}

impl crate::Client {
    /// Lists the content of a folder, the empty path being the root folder.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-list_folder).
    ///
    /// ```no_run
    /// use dropbox_files::{AccessToken, Client};
    ///
    /// # tokio_test::block_on(async {
    /// let client = Client::new(AccessToken::new("my-token")).unwrap();
    /// let page = client.list_folder("").await.unwrap();
    /// println!("{} entries in the root folder", page.entries.len());
    /// # })
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn list_folder(&self, path: &str) -> crate::Result<ListFolderResult> {
        let path = crate::path::normalize(path);
        self.rpc_request("list_folder", &PathArg { path: &path })
            .await
    }

    /// Fetches the next page of a listing, the cursor is sent as is.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-list_folder-continue).
    #[tracing::instrument(skip(self, cursor))]
    pub async fn list_folder_continue(&self, cursor: &str) -> crate::Result<ListFolderResult> {
        self.rpc_request("list_folder/continue", &CursorArg { cursor })
            .await
    }

    /// Lists the whole content of a folder, following the cursor until the last page.
    ///
    /// The returned cursor is the one of the last page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCursor`](crate::Error::MissingCursor) when a page has more
    /// entries to come but no cursor, instead of a truncated listing.
    #[tracing::instrument(skip(self))]
    pub async fn list_folder_all(&self, path: &str) -> crate::Result<ListFolderResult> {
        let mut result = self.list_folder(path).await?;
        while result.has_more {
            let cursor = match result.cursor.as_deref() {
                Some(cursor) => cursor,
                None => {
                    tracing::warn!("page has more entries but no cursor");
                    return Err(crate::Error::MissingCursor);
                }
            };
            let next = self.list_folder_continue(cursor).await?;
            tracing::debug!("fetched {} more entries", next.entries.len());
            result.entries.extend(next.entries);
            result.cursor = next.cursor;
            result.has_more = next.has_more;
        }
        Ok(result)
    }
}
