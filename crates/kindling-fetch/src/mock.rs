//! Scripted resolver for testing
//!
//! Returns canned outcomes keyed by URL and records every URL it is asked to
//! resolve, so pipeline tests can assert both results and resolver traffic
//! without any network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use kindling_core::{FailureReason, Jf2Document, ResolutionOutcome, ResourceResolver};

/// In-memory resolver double.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    outcomes: Mutex<HashMap<String, ResolutionOutcome>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an outcome for a URL.
    pub fn script(&self, url: impl Into<String>, outcome: ResolutionOutcome) {
        self.outcomes
            .lock()
            .expect("scripted outcomes mutex poisoned")
            .insert(url.into(), outcome);
    }

    /// Script a successful resolution.
    pub fn script_resolved(&self, url: impl Into<String>, doc: Jf2Document) {
        self.script(url, ResolutionOutcome::Resolved(doc));
    }

    /// Script a failure.
    pub fn script_failure(&self, url: impl Into<String>, reason: FailureReason) {
        self.script(url, ResolutionOutcome::Failed(reason));
    }

    /// URLs resolved so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("scripted calls mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl ResourceResolver for ScriptedResolver {
    async fn resolve(&self, url: &str) -> ResolutionOutcome {
        self.calls
            .lock()
            .expect("scripted calls mutex poisoned")
            .push(url.to_string());

        self.outcomes
            .lock()
            .expect("scripted outcomes mutex poisoned")
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                ResolutionOutcome::Failed(FailureReason::Fetch(format!(
                    "no scripted response for {url}"
                )))
            })
    }
}
