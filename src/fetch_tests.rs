use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use super::{Fetcher, HttpClient, is_remote_url};
use crate::error::{PolylintError, Result};

/// Canned-response client for tests.
pub(crate) struct StaticClient {
    responses: HashMap<String, Vec<u8>>,
}

impl StaticClient {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub(crate) fn with_response(mut self, url: &str, body: &[u8]) -> Self {
        self.responses.insert(url.to_string(), body.to_vec());
        self
    }
}

impl HttpClient for StaticClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| PolylintError::Fetch {
                uri: url.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            })
    }
}

#[test]
fn remote_url_detection() {
    assert!(is_remote_url("http://example.com/rules.yaml"));
    assert!(is_remote_url("https://example.com/rules.yaml"));
    assert!(!is_remote_url("file:///etc/rules.yaml"));
    assert!(!is_remote_url("./rules.yaml"));
    assert!(!is_remote_url("/etc/rules.yaml"));
}

#[test]
fn fetch_reads_local_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.yaml");
    fs::write(&path, b"version: v1.0.0").unwrap();

    let fetcher = Fetcher::with_client(StaticClient::new());
    let bytes = fetcher.fetch(path.to_str().unwrap()).unwrap();
    assert_eq!(bytes, b"version: v1.0.0");
}

#[test]
fn fetch_strips_file_scheme() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.yaml");
    fs::write(&path, b"version: v1.0.0").unwrap();

    let fetcher = Fetcher::with_client(StaticClient::new());
    let uri = format!("file://{}", path.display());
    let bytes = fetcher.fetch(&uri).unwrap();
    assert_eq!(bytes, b"version: v1.0.0");
}

#[test]
fn fetch_missing_local_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    let fetcher = Fetcher::with_client(StaticClient::new());
    let result = fetcher.fetch(path.to_str().unwrap());
    assert!(matches!(result, Err(PolylintError::FileAccess { .. })));
}

#[test]
fn fetch_routes_remote_urls_through_client() {
    let client = StaticClient::new().with_response("https://example.com/rules.yaml", b"rules");
    let fetcher = Fetcher::with_client(client);

    let bytes = fetcher.fetch("https://example.com/rules.yaml").unwrap();
    assert_eq!(bytes, b"rules");
}

#[test]
fn fetch_propagates_http_errors() {
    let fetcher = Fetcher::with_client(StaticClient::new());
    let result = fetcher.fetch("https://example.com/gone.yaml");
    assert!(matches!(result, Err(PolylintError::Fetch { .. })));
}
