//! # Kindling Pipeline
//!
//! The reference resolution and re-encoding pipeline.
//!
//! Given an incoming property bag, the pipeline detects which properties are
//! reference-bearing, resolves each referenced URL through an injected
//! [`kindling_core::ResourceResolver`], downgrades resolved full entries to
//! citations, re-encodes each result into the bag's native mf2 encoding, and
//! merges it back without discarding sibling data. Per-URL failures never
//! abort the item; they come back as diagnostics alongside the bag.
//!
//! ## Pipeline Architecture
//!
//! 1. **Detect**: scan the bag for resolvable reference URLs
//! 2. **Resolve**: fetch and classify each URL (concurrent, bounded)
//! 3. **Downgrade**: resolved full entries become citations
//! 4. **Re-encode & merge**: write each citation back into its original slot
//! 5. **Classify** (glue): infer the item's kind from the enriched bag
//!
//! ## Design Principles
//!
//! - **Orchestration only**: this crate coordinates; fetching lives in
//!   `kindling-fetch`, classification in `kindling-kinds`
//! - **Dependency injection**: collaborators arrive as trait objects,
//!   substitutable with test doubles
//! - **Failure isolation**: one bad URL leaves every other slot intact
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kindling_core::PropertyBag;
//! use kindling_fetch::HttpResolver;
//! use kindling_pipeline::Pipeline;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = Arc::new(HttpResolver::new()?);
//!     let pipeline = Pipeline::new(resolver);
//!
//!     let bag = PropertyBag::from_value(json!({
//!         "bookmark-of": ["https://example.com/a-great-read"]
//!     }))?;
//!
//!     let (bag, failures) = pipeline.process(bag).await;
//!     println!("resolved with {} failures: {}", failures.len(), bag.into_value());
//!     Ok(())
//! }
//! ```

pub mod detector;
pub mod downgrade;
pub mod glue;
pub mod merge;
pub mod orchestrator;

pub use detector::detect_tasks;
pub use downgrade::downgrade_to_cite;
pub use glue::{classify_item, KindApplication};
pub use merge::apply_resolved;
pub use orchestrator::{Pipeline, PipelineConfig};
