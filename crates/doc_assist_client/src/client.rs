//! REST client: list documents, upload a document, ask a question.

use std::path::{Path, PathBuf};

use crate::api::{self, Answer, AskRequest, Document};

/// Request failure: transport error, non-2xx status, or undecodable body.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Typed client for the document backend. No retries, no auth, no timeouts.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Build a client for the backend at `base_url`
    /// (e.g. `http://localhost:8000`). A trailing slash is normalized away.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /documents`. A non-array body decodes to an empty list.
    pub async fn list_documents(&self) -> Result<Vec<Document>, RequestError> {
        tracing::debug!(base_url = %self.base_url, "listing documents");
        let value: serde_json::Value = self
            .http
            .get(self.url("/documents"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(api::documents_from_value(value))
    }

    /// `POST /upload` with the raw file bytes as multipart field `file`.
    /// The success body is opaque and discarded.
    pub async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), RequestError> {
        tracing::debug!(filename, size = bytes.len(), "uploading document");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.http
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Read `path` from disk and upload it under its file name.
    pub async fn upload_file(&self, path: &Path) -> Result<(), RequestError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| RequestError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());
        self.upload_document(&filename, bytes).await
    }

    /// `POST /ask` with `{question}`. Absent `sources` decodes to empty.
    pub async fn ask(&self, question: &str) -> Result<Answer, RequestError> {
        tracing::debug!("asking question");
        let answer = self
            .http
            .post(self.url("/ask"))
            .json(&AskRequest::new(question))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(answer)
    }
}
