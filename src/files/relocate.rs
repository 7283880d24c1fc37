//! Resources needed to move a file or a folder

#[derive(Debug, serde::Serialize)]
struct RelocationArg<'a> {
    from_path: &'a str,
    to_path: &'a str,
    autorename: bool,
    allow_ownership_transfer: bool,
}

impl crate::Client {
    /// Moves a file or a folder to a different location.
    ///
    /// Unlike the other operations, both paths are sent exactly as given.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-move).
    #[tracing::instrument(skip(self))]
    pub async fn move_entry(
        &self,
        from_path: &str,
        to_path: &str,
        autorename: bool,
        allow_ownership_transfer: bool,
    ) -> crate::Result<()> {
        let arg = RelocationArg {
            from_path,
            to_path,
            autorename,
            allow_ownership_transfer,
        };
        self.rpc_send("move_v2", &arg).await.map(|_| ())
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
            .mock("POST", "/files/move_v2")
            .match_header("authorization", "Bearer access-token")
            .match_body(Matcher::Json(json!({
                "from_path": "docs/draft.txt",
                "to_path": "/archive/draft.txt",
                "autorename": true,
                "allow_ownership_transfer": false,
            })))
            .with_status(200)
            .with_body(
                r#"{
    "metadata": {
        ".tag": "file",
        "name": "draft.txt",
        "id": "id:a4ayc_80_OEAAAAAAAAAXw",
        "path_lower": "/archive/draft.txt"
    }
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        client
            .move_entry("docs/draft.txt", "/archive/draft.txt", true, false)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn conflict() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/move_v2")
            .with_status(409)
            .with_body(r#"{"error_summary": "to/conflict/file/..", "error": {".tag": "to"}}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client
            .move_entry("/a.txt", "/b.txt", false, false)
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert_eq!(err.remote_summary().as_deref(), Some("to/conflict/file/.."));
        m.assert_async().await;
    }
}
