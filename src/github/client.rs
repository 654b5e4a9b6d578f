use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{HeraldError, Result};
use crate::github::{Comparison, Release, ReleaseSource};

/// Error body GitHub returns alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
}

/// Blocking GitHub REST client scoped to one repository.
pub struct GitHubClient {
    client: Client,
    repo_url: Url,
}

impl GitHubClient {
    /// Create a client for `slug` (`owner/name`).
    pub fn new(slug: &str, config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base = Url::parse(&config.base_url).map_err(|e| {
            HeraldError::config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;
        let mut segments = vec!["repos"];
        segments.extend(slug.split('/').filter(|s| !s.is_empty()));

        Ok(GitHubClient {
            client,
            repo_url: join_segments(&base, &segments)?,
        })
    }

    /// Base URL all requests for this repository are made against.
    pub fn repo_url(&self) -> &str {
        self.repo_url.as_str()
    }

    /// URL of a repository endpoint; each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        join_segments(&self.repo_url, segments)
    }

    fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Append path segments to `base`, encoding `/` and other reserved characters.
fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| HeraldError::config(format!("API base URL '{}' cannot hold a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Build an API error from a failed response body.
fn api_error(status: u16, body: &str) -> HeraldError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message,
            documentation_url: Some(docs),
        }) => HeraldError::api(status, format!("{} {}", message, docs)),
        Ok(ApiErrorBody { message, .. }) => HeraldError::api(status, message),
        Err(_) => HeraldError::api(status, body.trim()),
    }
}

impl ReleaseSource for GitHubClient {
    fn latest_release(&self) -> Result<Release> {
        self.get(&["releases", "latest"])
    }

    fn release_by_tag(&self, tag: &str) -> Result<Release> {
        self.get(&["releases", "tags", tag])
    }

    fn compare(&self, base: &str, head: &str) -> Result<Comparison> {
        let range = format!("{}...{}", base, head);
        let comparison: Comparison = self.get(&["compare", range.as_str()])?;
        info!(
            base,
            head,
            commits = comparison.commits.len(),
            "fetched comparison"
        );
        Ok(comparison)
    }
}
