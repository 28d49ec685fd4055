//! Resolution work items, outcomes, and the resolver trait
//!
//! One [`ResolutionTask`] is generated per candidate URL found in a property
//! bag. The [`ResourceResolver`] collaborator turns each task's URL into a
//! [`ResolutionOutcome`]. It never raises for network or parse problems; all
//! failures surface as data so one bad URL cannot abort a pipeline run.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::document::Jf2Document;

/// Validate that a string is a syntactically well-formed http(s) URL.
///
/// Non-URL values in reference properties are not errors; they are simply
/// excluded from the work list.
pub fn is_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// One unit of reference-resolution work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTask {
    /// The reference property the URL was found under
    pub property: String,
    /// Element position when the property value is a sequence
    pub index: Option<usize>,
    /// The candidate URL, already syntax-validated
    pub url: String,
}

impl ResolutionTask {
    /// Task for a single-valued property.
    pub fn single(property: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            index: None,
            url: url.into(),
        }
    }

    /// Task for one element of a sequence-valued property.
    pub fn indexed(property: impl Into<String>, index: usize, url: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            index: Some(index),
            url: url.into(),
        }
    }

    /// Diagnostic label, e.g. `like-of[0]` or `bookmark-of`.
    pub fn position(&self) -> String {
        match self.index {
            Some(i) => format!("{}[{}]", self.property, i),
            None => self.property.clone(),
        }
    }
}

/// Why a URL could not be resolved into a classified document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Network or HTTP-level failure fetching the resource
    Fetch(String),
    /// The fetched content could not be interpreted
    Parse(String),
    /// The resource had no discoverable type
    Unclassified,
    /// A resolved document could not be re-encoded into the bag's native
    /// encoding (recorded by the pipeline, never produced by a resolver)
    Encode(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "fetch failed: {msg}"),
            Self::Parse(msg) => write!(f, "parse failed: {msg}"),
            Self::Unclassified => write!(f, "resource had no discoverable type"),
            Self::Encode(msg) => write!(f, "re-encoding failed: {msg}"),
        }
    }
}

/// Result of resolving one URL.
///
/// Created by the resolver, consumed immediately by the merger; never
/// persisted or retried across pipeline runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// The resource was fetched and classified
    Resolved(Jf2Document),
    /// The resource could not be resolved; the original value stays untouched
    Failed(FailureReason),
}

impl ResolutionOutcome {
    /// True for the `Resolved` variant.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Diagnostic record for one failed resolution.
///
/// Returned to the caller in the failure list; the pipeline itself treats
/// failures as logging-only and never lets them block the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionFailure {
    /// Property the URL belonged to
    pub property: String,
    /// Element position within a sequence-valued property
    pub index: Option<usize>,
    /// The URL that failed to resolve
    pub url: String,
    /// What went wrong
    pub reason: FailureReason,
}

impl ResolutionFailure {
    /// Build a failure record from the task it belongs to.
    pub fn for_task(task: &ResolutionTask, reason: FailureReason) -> Self {
        Self {
            property: task.property.clone(),
            index: task.index,
            url: task.url.clone(),
            reason,
        }
    }
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}] ({}): {}", self.property, i, self.url, self.reason),
            None => write!(f, "{} ({}): {}", self.property, self.url, self.reason),
        }
    }
}

/// Collaborator that turns a URL into a classified document.
///
/// Implementations must not raise for network or parse errors; all failures
/// surface as [`ResolutionOutcome::Failed`] with a reason suitable for
/// logging. Safe to call repeatedly for the same URL; caching, if any, lives
/// inside the implementation.
#[async_trait]
pub trait ResourceResolver: Send + Sync {
    /// Fetch and classify the resource at `url`.
    async fn resolve(&self, url: &str) -> ResolutionOutcome;
}
