//! Resources needed to search files and folders by name

use crate::entry::Metadata;

/// Every search starts from the first result
pub const SEARCH_START: u64 = 0;
/// Maximum number of results of a search
pub const SEARCH_MAX_RESULTS: u64 = 1000;

#[derive(Debug, serde::Serialize)]
struct SearchArg<'a> {
    path: &'a str,
    query: &'a str,
    start: u64,
    max_results: u64,
    mode: &'static str,
}

impl<'a> SearchArg<'a> {
    fn filename(query: &'a str) -> Self {
        Self {
            path: "",
            query,
            start: SEARCH_START,
            max_results: SEARCH_MAX_RESULTS,
            mode: "filename",
        }
    }
}

/// Where the query has been found
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub enum MatchType {
    Filename,
    Content,
    Both,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SearchMatch {
    pub match_type: MatchType,
    pub metadata: Metadata,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SearchResult {
    pub matches: Vec<SearchMatch>,
    /// Set when more results are available after `start`
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub start: u64,
}

impl crate::Client {
    /// Searches the whole account for files and folders whose name matches the query.
    ///
    /// The search always starts at the root, from the first result, and returns at most
    /// [`SEARCH_MAX_RESULTS`] matches.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-search).
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> crate::Result<SearchResult> {
        self.rpc_request("search", &SearchArg::filename(query))
            .await
    }
}
