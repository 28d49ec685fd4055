//! HTTP resource resolver
//!
//! Fetches a URL with a capped, time-limited GET and runs metadata
//! extraction on the body. Implements the panic-free resolver contract:
//! every failure mode maps to a `ResolutionOutcome::Failed` with a reason
//! that distinguishes fetch, parse, and classification problems.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, trace};
use url::Url;

use kindling_core::{FailureReason, ResolutionOutcome, ResourceResolver};

use crate::config::FetchConfig;
use crate::error::FetchResult;
use crate::extract::extract_document;

/// Resolver backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpResolver {
    /// Create a resolver with default configuration.
    pub fn new() -> FetchResult<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a resolver with custom configuration.
    pub fn with_config(config: FetchConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// GET the URL and return the body, truncated at the configured cap.
    async fn fetch(&self, url: &Url) -> Result<String, FailureReason> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FailureReason::Fetch("request timed out".to_string())
                } else {
                    FailureReason::Fetch(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureReason::Fetch(format!("HTTP {status}")));
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_markup(content_type) {
                return Err(FailureReason::Parse(format!(
                    "unsupported content type: {content_type}"
                )));
            }
        }

        let mut response = response;
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FailureReason::Fetch(format!("reading body: {e}")))?
        {
            body.extend_from_slice(&chunk);
            if body.len() >= self.config.max_body_bytes {
                trace!(url = %url, "body reached size cap, truncating");
                body.truncate(self.config.max_body_bytes);
                break;
            }
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait]
impl ResourceResolver for HttpResolver {
    async fn resolve(&self, url: &str) -> ResolutionOutcome {
        let parsed = match Url::parse(url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => u,
            _ => {
                return ResolutionOutcome::Failed(FailureReason::Fetch(format!(
                    "not an http(s) URL: {url}"
                )))
            }
        };

        debug!(url, "resolving reference");
        let body = match self.fetch(&parsed).await {
            Ok(body) => body,
            Err(reason) => return ResolutionOutcome::Failed(reason),
        };

        if body.trim().is_empty() {
            return ResolutionOutcome::Failed(FailureReason::Parse(
                "empty response body".to_string(),
            ));
        }

        match extract_document(&body, &parsed) {
            Ok(doc) => {
                debug!(url, doc_type = ?doc.doc_type(), "resolved reference");
                ResolutionOutcome::Resolved(doc)
            }
            Err(reason) => ResolutionOutcome::Failed(reason),
        }
    }
}

/// True for content types the metadata extractor can interpret.
fn is_markup(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    essence.starts_with("text/") || essence.ends_with("html") || essence.ends_with("xml")
}
