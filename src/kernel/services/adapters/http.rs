//! HTTP client for the remote package file API.

use crate::kernel::services::ports::{RemoteError, RemoteFileApi, RemoteResult};
use crate::models::FileTreeNode;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct HttpRemoteFileApi {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct FileBody<'a> {
    path: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct FileContent {
    content: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TreeListing {
    Bare(Vec<FileTreeNode>),
    Wrapped { tree: Vec<FileTreeNode> },
}

impl HttpRemoteFileApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, suffix: &str) -> String {
        endpoint(&self.base_url, suffix)
    }
}

#[async_trait]
impl RemoteFileApi for HttpRemoteFileApi {
    async fn list_tree(&self) -> RemoteResult<Vec<FileTreeNode>> {
        let resp = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(transport)?;
        let body = check(resp, "")
            .await?
            .text()
            .await
            .map_err(transport)?;
        parse_tree_listing(&body)
    }

    async fn read_file(&self, path: &str) -> RemoteResult<String> {
        let resp = self
            .http
            .get(self.url("file"))
            .query(&[("path", path)])
            .send()
            .await
            .map_err(transport)?;
        let body: FileContent = check(resp, path)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(body.content)
    }

    async fn write_file(&self, path: &str, content: &str) -> RemoteResult<()> {
        let resp = self
            .http
            .put(self.url("file"))
            .json(&FileBody { path, content })
            .send()
            .await
            .map_err(transport)?;
        check(resp, path).await.map(drop)
    }

    async fn create_file(&self, path: &str, content: &str) -> RemoteResult<()> {
        let resp = self
            .http
            .post(self.url("file"))
            .json(&FileBody { path, content })
            .send()
            .await
            .map_err(transport)?;
        check(resp, path).await.map(drop)
    }

    async fn delete_path(&self, path: &str, is_directory: bool) -> RemoteResult<()> {
        let is_directory = if is_directory { "true" } else { "false" };
        let resp = self
            .http
            .delete(self.url("file"))
            .query(&[("path", path), ("isDirectory", is_directory)])
            .send()
            .await
            .map_err(transport)?;
        check(resp, path).await.map(drop)
    }

    async fn pack(&self) -> RemoteResult<()> {
        let resp = self
            .http
            .post(self.url("pack"))
            .send()
            .await
            .map_err(transport)?;
        check(resp, "").await.map(drop)
    }
}

async fn check(resp: Response, path: &str) -> RemoteResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), path, "Remote request rejected");
    Err(status_error(status.as_u16(), path, message))
}

fn transport(e: reqwest::Error) -> RemoteError {
    RemoteError::Transport(e.to_string())
}

/// Maps a non-success HTTP status onto the remote error taxonomy.
pub fn status_error(status: u16, path: &str, message: String) -> RemoteError {
    match status {
        404 => RemoteError::NotFound(path.to_string()),
        409 => RemoteError::Conflict(path.to_string()),
        401 | 403 => RemoteError::Forbidden(path.to_string()),
        _ => RemoteError::Status { status, message },
    }
}

pub fn endpoint(base: &str, suffix: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        suffix.trim_start_matches('/')
    )
}

/// Accepts either a bare node array or an object with a `tree` field.
pub fn parse_tree_listing(body: &str) -> RemoteResult<Vec<FileTreeNode>> {
    match serde_json::from_str::<TreeListing>(body) {
        Ok(TreeListing::Bare(nodes)) | Ok(TreeListing::Wrapped { tree: nodes }) => Ok(nodes),
        Err(e) => Err(RemoteError::Decode(e.to_string())),
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/http.rs"]
mod tests;
