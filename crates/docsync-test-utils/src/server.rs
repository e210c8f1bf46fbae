//! [`MockDocs`] wiremock origin for tests that need real HTTP.
//!
//! Index links extracted by the engine must be `https://`, which wiremock
//! cannot serve; use [`super::FakeDocs`] for reconciliation scenarios and
//! this origin for transport-level behavior (status codes, timeouts, the
//! index fetch itself).

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock documentation origin serving an index document at `/llms.txt`.
pub struct MockDocs {
    server: MockServer,
}

impl MockDocs {
    /// Start the mock origin.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URI of the origin.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// URL the index is served from; feed this into `SyncConfig`.
    pub fn index_url(&self) -> String {
        format!("{}/llms.txt", self.server.uri())
    }

    /// Serve `body` as the index document.
    pub async fn serve_index(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path("/llms.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail index requests with `status`.
    pub async fn fail_index(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/llms.txt"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` at `route` after `delay`.
    pub async fn serve_slow(&self, route: &str, body: &str, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve `body` at `route` with status 200.
    pub async fn serve(&self, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail requests for `route` with `status`.
    pub async fn fail(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
