//! HTTP client for the bindery registry.
//!
//! Implements the check engine's [`Registry`] boundary over the registry's
//! REST surface: latest-version lookups and artifact content fetches. The
//! client is blocking; the check run is sequential by contract and nothing
//! here needs to overlap requests.

use bindery_check::{ArtifactKind, Registry, RegistryError};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::time::Duration;

/// Default production registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.bindery.dev";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from building the client itself; request errors surface as
/// [`RegistryError`] through the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build registry client: {0}")]
    Build(String),
}

/// Blocking client over the registry's REST surface.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Deserialize)]
struct LatestVersion {
    version: String,
}

impl RegistryClient {
    /// Builds a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&format!("bindery/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|e| ClientError::Build(e.to_string()))?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: format!("{}/v1", base_url.trim_end_matches('/')),
        })
    }

    fn get(&self, url: &str) -> Result<Response, RegistryError> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| RegistryError(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        match response.json::<ApiError>() {
            Ok(body) => Err(RegistryError(body.error.message)),
            Err(_) => Err(RegistryError(format!(
                "registry responded with status {status}"
            ))),
        }
    }
}

impl Registry for RegistryClient {
    fn resolve_latest_version(
        &self,
        kind: ArtifactKind,
        id: &str,
    ) -> Result<String, RegistryError> {
        let url = format!("{}/{}/{id}/latest", self.base_url, kind.segment());
        let latest: LatestVersion = self
            .get(&url)?
            .json()
            .map_err(|e| RegistryError(format!("failed to decode latest-version response: {e}")))?;
        Ok(latest.version)
    }

    fn fetch_content(
        &self,
        kind: ArtifactKind,
        id: &str,
        version: Option<&str>,
    ) -> Result<String, RegistryError> {
        let url = match version {
            Some(version) => format!("{}/{}/{id}/{version}", self.base_url, kind.segment()),
            None => format!("{}/{}/{id}", self.base_url, kind.segment()),
        };
        self.get(&url)?
            .text()
            .map_err(|e| RegistryError(format!("failed to read registry response: {e}")))
    }
}
