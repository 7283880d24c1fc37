use super::PathArg;
use crate::entry::FolderMetadata;

impl crate::Client {
    /// Creates a folder
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-create_folder).
    ///
    /// ```no_run
    /// use dropbox_files::{AccessToken, Client};
    ///
    /// # tokio_test::block_on(async {
    /// let client = Client::new(AccessToken::new("my-token")).unwrap();
    /// match client.create_folder("projects/2024").await {
    ///     Ok(folder) => println!("created {:?}", folder.path_display),
    ///     Err(err) => eprintln!("error: {:?}", err),
    /// }
    /// # })
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, path: &str) -> crate::Result<FolderMetadata> {
        let path = crate::path::normalize(path);
        self.rpc_request("create_folder", &PathArg { path: &path })
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/create_folder")
            .match_header("authorization", "Bearer access-token")
            .match_body(Matcher::Json(json!({ "path": "/projects/2024" })))
            .with_status(200)
            .with_body(
                r#"{
    "name": "2024",
    "id": "id:a4ayc_80_OEAAAAAAAAAXz",
    "path_lower": "/projects/2024",
    "path_display": "/projects/2024"
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let result = client.create_folder("projects/2024").await.unwrap();
        assert_eq!(result.name, "2024");
        assert_eq!(result.path_display.as_deref(), Some("/projects/2024"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn already_exists() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/create_folder")
            .match_body(Matcher::Json(json!({ "path": "/projects" })))
            .with_status(409)
            .with_body(r#"{"error_summary": "path/conflict/folder/.."}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client.create_folder("/projects").await.unwrap_err();
        assert_eq!(err.remote_summary().as_deref(), Some("path/conflict/folder/.."));
        m.assert_async().await;
    }
}
