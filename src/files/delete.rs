use super::PathArg;
use crate::entry::Metadata;

/// Structure returned when deleting a file or a folder
#[derive(Clone, Debug, serde::Deserialize)]
pub struct DeleteResult {
    /// Metadata of the entry before it was deleted
    pub metadata: Metadata,
}

impl crate::Client {
    /// Deletes a file or a folder, with all its content.
    ///
    /// [More about it on the documentation](https://www.dropbox.com/developers/documentation/http/documentation#files-delete).
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> crate::Result<DeleteResult> {
        let path = crate::path::normalize(path);
        self.rpc_request("delete_v2", &PathArg { path: &path })
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
            .mock("POST", "/files/delete_v2")
            .match_header("authorization", "Bearer access-token")
            .match_body(Matcher::Json(json!({ "path": "/Homework/math" })))
            .with_status(200)
            .with_body(
                r#"{
    "metadata": {
        ".tag": "folder",
        "name": "math",
        "id": "id:a4ayc_80_OEAAAAAAAAAXz",
        "path_lower": "/homework/math",
        "path_display": "/Homework/math"
    }
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let result = client.delete("Homework/math").await.unwrap();
        assert!(result.metadata.is_folder());
        assert_eq!(result.metadata.name(), "math");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn not_found() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/files/delete_v2")
            .with_status(409)
            .with_body(r#"{"error_summary": "path_lookup/not_found/"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client.delete("/nope").await.unwrap_err();
        assert_eq!(
            err.as_remote().map(|(_, body)| body),
            Some(r#"{"error_summary": "path_lookup/not_found/"}"#)
        );
        m.assert_async().await;
    }
}
