use std::time::Duration;

use appcat::{ArtifactFetcher, FetchError, TrackedFile};

use crate::commits;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "appcat";

/// Media type that makes the contents endpoint return the artifact bytes
/// directly instead of a base64-wrapped JSON envelope.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for the GitHub commits and contents APIs.
///
/// Every request carries a `User-Agent`, an `Accept` header, an optional
/// bearer token, and explicit connect and total timeouts. Only a 200
/// response counts as success; any other status surfaces as
/// `FetchError::Status` with the numeric code embedded.
pub struct GitHubArtifactClient {
    client: reqwest::Client,
    token: Option<String>,
    api_base_url: Option<String>,
}

impl GitHubArtifactClient {
    pub fn new(token: Option<String>, api_base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            token,
            api_base_url,
        }
    }

    fn api_base(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    fn commits_url(&self, file: &TrackedFile) -> String {
        format!(
            "{}/repos/{}/{}/commits?path={}",
            self.api_base(),
            file.owner,
            file.repo,
            file.path,
        )
    }

    fn contents_url(&self, file: &TrackedFile) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base(),
            file.owner,
            file.repo,
            file.path,
        )
    }

    fn build_request(&self, url: &str, accept: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", accept);

        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }

    async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response, FetchError> {
        tracing::debug!(%url, "requesting");

        let response = self
            .build_request(url, accept)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status { status });
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl ArtifactFetcher for GitHubArtifactClient {
    fn label(&self) -> &str {
        "github"
    }

    async fn latest_revision(&self, file: &TrackedFile) -> Result<String, FetchError> {
        let url = self.commits_url(file);
        let response = self.get(&url, JSON_MEDIA_TYPE).await?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(commits::extract_revision(&body)?)
    }

    async fn payload(&self, file: &TrackedFile) -> Result<Vec<u8>, FetchError> {
        let url = self.contents_url(file);
        let response = self.get(&url, RAW_MEDIA_TYPE).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
