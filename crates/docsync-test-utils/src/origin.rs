//! [`FakeDocs`] in-memory documentation origin.
//!
//! Implements [`Fetch`] over a URL-to-response map, so engine tests can use
//! production-shaped `https://` URLs without a network or TLS stack.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use docsync_core::{Error, Fetch, Result};

/// Base URL the fake origin serves under.
pub const ORIGIN: &str = "https://docs.example.com";

/// Production-shaped URL for the document `name`.
pub fn doc_url(name: &str) -> String {
    format!("{ORIGIN}/en/docs/{name}")
}

/// A markdown index line linking `name` under the fake origin.
pub fn index_line(label: &str, name: &str) -> String {
    format!("- [{label}]({})\n", doc_url(name))
}

/// In-memory documentation origin.
///
/// Registers an index body plus per-URL document bodies or failure statuses,
/// and records every URL fetched, in order, for sequencing assertions.
pub struct FakeDocs {
    index_url: String,
    responses: HashMap<String, std::result::Result<String, u16>>,
    fetched: Mutex<Vec<String>>,
}

impl FakeDocs {
    /// An origin whose index document is `index_body`.
    pub fn new(index_body: impl Into<String>) -> Self {
        let index_url = format!("{ORIGIN}/llms.txt");
        let mut responses = HashMap::new();
        responses.insert(index_url.clone(), Ok(index_body.into()));
        Self {
            index_url,
            responses,
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// An origin whose index request fails with `status`.
    pub fn with_broken_index(status: u16) -> Self {
        let mut origin = Self::new("");
        origin
            .responses
            .insert(origin.index_url.clone(), Err(status));
        origin
    }

    /// URL the index is served from; feed this into `SyncConfig`.
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Serve `body` for the document `name`.
    pub fn doc(mut self, name: &str, body: &str) -> Self {
        self.responses.insert(doc_url(name), Ok(body.to_string()));
        self
    }

    /// Fail requests for the document `name` with `status`.
    pub fn failing_doc(mut self, name: &str, status: u16) -> Self {
        self.responses.insert(doc_url(name), Err(status));
        self
    }

    /// Every URL fetched so far, in request order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for FakeDocs {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.fetched.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(Error::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(Error::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
