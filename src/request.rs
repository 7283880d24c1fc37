//! Plumbing shared by all the operations: authentication, endpoints and error translation.

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::{Error, Result};

/// Header carrying the JSON parameters of a content call
pub(crate) const API_ARG_HEADER: &str = "Dropbox-API-Arg";
/// Header carrying the JSON metadata of a downloaded file
pub(crate) const API_RESULT_HEADER: &str = "Dropbox-Api-Result";

const OCTET_STREAM: &str = "application/octet-stream";

/// Lets the success responses through, turns the others into [`Error::RemoteApi`].
async fn ensure_success(res: reqwest::Response) -> Result<reqwest::Response> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        Ok(res)
    } else {
        let body = res.text().await.map_err(Error::Transport)?;
        Err(Error::RemoteApi { status, body })
    }
}

/// Serializes the parameters of a content call so that they fit in a header.
///
/// Header values must be ASCII, so everything else is written as a JSON `\uXXXX` escape.
/// Those characters can only live inside JSON strings, which keeps the document valid.
pub(crate) fn header_safe_json<A: serde::Serialize + ?Sized>(arg: &A) -> Result<String> {
    let json = serde_json::to_string(arg)?;
    if json.bytes().all(|c| c.is_ascii() && c != 0x7f) {
        return Ok(json);
    }
    let mut output = String::with_capacity(json.len() + 16);
    let mut buffer = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() && c != '\x7f' {
            output.push(c);
        } else {
            for unit in c.encode_utf16(&mut buffer) {
                output.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    Ok(output)
}

impl crate::Client {
    async fn bearer(&self) -> Result<String> {
        let token = self
            .credentials
            .access_token()
            .await
            .map_err(Error::Credentials)?;
        Ok(format!("Bearer {token}"))
    }

    /// Posts the parameters to the metadata endpoint and returns the raw response body.
    #[tracing::instrument(name = "rpc", skip(self, params))]
    pub(crate) async fn rpc_send<P: serde::Serialize + ?Sized>(
        &self,
        operation: &str,
        params: &P,
    ) -> Result<Bytes> {
        let uri = self.config.api_url(operation);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .header(AUTHORIZATION, self.bearer().await?)
            .json(params)
            .send()
            .await
            .map_err(Error::Transport)?;
        ensure_success(res)
            .await?
            .bytes()
            .await
            .map_err(Error::Transport)
    }

    /// Posts the parameters to the metadata endpoint and decodes the JSON response.
    pub(crate) async fn rpc_request<T, P>(&self, operation: &str, params: &P) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let body = self.rpc_send(operation, params).await?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Calls the content endpoint, with the parameters in the `Dropbox-API-Arg` header.
    ///
    /// When a payload is given, it's sent as an octet stream.
    #[tracing::instrument(name = "content", skip(self, arg, payload))]
    pub(crate) async fn content_request<A: serde::Serialize + ?Sized>(
        &self,
        operation: &str,
        arg: &A,
        payload: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        let uri = self.config.content_url(operation);
        tracing::debug!("calling {uri}");
        let mut req = self
            .inner
            .post(uri)
            .header(AUTHORIZATION, self.bearer().await?)
            .header(API_ARG_HEADER, header_safe_json(arg)?);
        if let Some(payload) = payload {
            tracing::debug!("sending {} bytes", payload.len());
            req = req.header(CONTENT_TYPE, OCTET_STREAM).body(payload);
        }
        let res = req.send().await.map_err(Error::Transport)?;
        ensure_success(res).await
    }
}
