//! Operations on files and folders, each one implemented as a method of the [`Client`](crate::Client).

pub mod create_folder;
pub mod delete;
pub mod download;
pub mod list;
pub mod relocate;
pub mod search;
pub mod upload;

pub use delete::DeleteResult;
pub use download::Download;
pub use list::ListFolderResult;
pub use search::{MatchType, SearchMatch, SearchResult};
pub use upload::WriteMode;

/// Parameters of the operations only targeting a path
#[derive(Debug, serde::Serialize)]
pub(crate) struct PathArg<'a> {
    pub path: &'a str,
}
