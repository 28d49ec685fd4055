//! Pipeline orchestrator
//!
//! Drives detect → resolve → downgrade → re-encode/merge over one item.
//! Resolution is I/O-bound and the tasks are independent, so they run
//! concurrently under a small in-flight cap; merging mutates the shared bag
//! and happens serially once every outcome is in. Completions are re-sorted
//! into original task order first, so both the output bag and the failure
//! list are deterministic regardless of completion order.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use kindling_core::{
    FailureReason, PropertyBag, ResolutionFailure, ResolutionOutcome, ResolutionTask,
    ResourceResolver,
};

use crate::detector::detect_tasks;
use crate::downgrade::downgrade_to_cite;
use crate::merge::apply_resolved;

/// Configuration for pipeline behavior
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Cap on concurrently in-flight resolution tasks per item. Reference
    /// counts per item are small, so a small fixed bound is enough to avoid
    /// overwhelming the resolver.
    pub max_in_flight: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { max_in_flight: 4 }
    }
}

/// The reference resolution pipeline.
///
/// Owns its injected resolver for the lifetime of the pipeline; owns each
/// property bag exclusively for the duration of one [`Pipeline::process`]
/// call.
pub struct Pipeline {
    resolver: Arc<dyn ResourceResolver>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new(resolver: Arc<dyn ResourceResolver>) -> Self {
        Self::with_config(resolver, PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(resolver: Arc<dyn ResourceResolver>, config: PipelineConfig) -> Self {
        Self { resolver, config }
    }

    /// Resolve every reference in the bag and embed the results as
    /// citations.
    ///
    /// Returns the (possibly partially modified) bag plus one diagnostic per
    /// failed URL. Never fails at the item level: an unresolvable reference
    /// keeps its original value and the item proceeds. Query bags pass
    /// through untouched.
    pub async fn process(&self, mut bag: PropertyBag) -> (PropertyBag, Vec<ResolutionFailure>) {
        if bag.is_query() {
            debug!("query request, passing bag through untouched");
            return (bag, Vec::new());
        }

        let tasks = detect_tasks(&bag);
        if tasks.is_empty() {
            return (bag, Vec::new());
        }
        debug!(task_count = tasks.len(), "resolving references");

        let completed = self.resolve_all(tasks).await;

        let mut failures = Vec::new();
        for (task, outcome) in completed {
            match outcome {
                ResolutionOutcome::Resolved(doc) => {
                    let cite = downgrade_to_cite(doc);
                    match apply_resolved(&mut bag, &task, &cite) {
                        Ok(()) => debug!(position = %task.position(), "embedded citation"),
                        Err(e) => {
                            warn!(
                                position = %task.position(),
                                url = %task.url,
                                error = %e,
                                "resolved document could not be re-encoded"
                            );
                            failures.push(ResolutionFailure::for_task(
                                &task,
                                FailureReason::Encode(e.to_string()),
                            ));
                        }
                    }
                }
                ResolutionOutcome::Failed(reason) => {
                    warn!(
                        position = %task.position(),
                        url = %task.url,
                        %reason,
                        "reference resolution failed"
                    );
                    failures.push(ResolutionFailure::for_task(&task, reason));
                }
            }
        }

        info!(
            failure_count = failures.len(),
            "reference resolution complete"
        );
        (bag, failures)
    }

    /// Run every task under the in-flight cap, returning outcomes in
    /// original task order.
    async fn resolve_all(
        &self,
        tasks: Vec<ResolutionTask>,
    ) -> Vec<(ResolutionTask, ResolutionOutcome)> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_in_flight.max(1)));
        let mut join_set = JoinSet::new();

        for (seq, task) in tasks.into_iter().enumerate() {
            let resolver = Arc::clone(&self.resolver);
            let semaphore = Arc::clone(&semaphore);
            join_set.spawn(async move {
                // The semaphore lives as long as every spawned task, so
                // acquisition only fails if it is closed; in that case the
                // resolve proceeds unthrottled rather than being dropped.
                let _permit = semaphore.acquire_owned().await;
                let outcome = resolver.resolve(&task.url).await;
                (seq, task, outcome)
            });
        }

        let mut completed = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => completed.push(result),
                // Resolvers are contractually panic-free; if one panics
                // anyway the task's slot keeps its original value.
                Err(e) => warn!(error = %e, "resolution task aborted"),
            }
        }
        completed.sort_by_key(|(seq, _, _)| *seq);
        completed
            .into_iter()
            .map(|(_, task, outcome)| (task, outcome))
            .collect()
    }
}
