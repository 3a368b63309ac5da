//! URI resolution for includes and plugin modules.
//!
//! URIs with an empty scheme or a `file://` prefix resolve as local paths
//! (relative paths against the process working directory); `http://` and
//! `https://` issue a blocking GET. Any failure is fatal to the enclosing
//! load operation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PolylintError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestClient;

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PolylintError::Fetch {
                uri: url.to_string(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        let response = client.get(url).send().map_err(|e| {
            let reason = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            PolylintError::Fetch {
                uri: url.to_string(),
                reason,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolylintError::Fetch {
                uri: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| PolylintError::Fetch {
                uri: url.to_string(),
                reason: format!("failed to read response body: {e}"),
            })
    }
}

/// Check if a string is a remote URL (http:// or https://).
#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Resolves URIs to byte buffers, locally or over HTTP.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fetcher<C: HttpClient = ReqwestClient> {
    client: C,
}

impl Fetcher<ReqwestClient> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            client: ReqwestClient,
        }
    }
}

impl<C: HttpClient> Fetcher<C> {
    #[must_use]
    pub const fn with_client(client: C) -> Self {
        Self { client }
    }

    /// Resolve `uri` to its contents.
    ///
    /// # Errors
    /// Returns an error if the local file cannot be read or the HTTP
    /// request fails.
    pub fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        if is_remote_url(uri) {
            return self.client.get(uri);
        }

        let path = uri.strip_prefix("file://").unwrap_or(uri);
        let abs = absolute(Path::new(path))?;
        fs::read(&abs).map_err(|source| PolylintError::FileAccess { path: abs, source })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
pub(crate) mod tests;
