//! Wire types for the backend REST contract. Client ↔ server JSON.

use serde::{Deserialize, Serialize};

/// One uploaded document, as listed by `GET /documents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
}

/// Client → server: question payload for `POST /ask`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(question: &'a str) -> Self {
        Self { question }
    }
}

/// One citation supporting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub source: String,
}

/// Server → client: answer for `POST /ask`. `sources` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Decode a `GET /documents` body. The backend is expected to return a JSON
/// array of `{filename}` objects; anything else decodes to an empty list,
/// and array entries of the wrong shape are skipped, preserving order.
pub fn documents_from_value(value: serde_json::Value) -> Vec<Document> {
    match value {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    }
}
