//! # Kindling Core
//!
//! Core types and collaborator traits for the kindling reference-resolution
//! pipeline.
//!
//! This crate defines the domain model shared by the rest of the workspace:
//!
//! - [`PropertyBag`]: the decoded `properties` map of an incoming content item
//! - [`Jf2Document`]: the canonical flat representation of a fetched resource
//! - [`ResolutionTask`] / [`ResolutionOutcome`]: one unit of reference
//!   resolution work and its result
//! - Collaborator traits ([`ResourceResolver`], [`KindClassifier`],
//!   [`KindTaxonomy`]) implemented by sibling crates and injected into the
//!   pipeline orchestrator
//!
//! Following dependency inversion, this crate contains no I/O and no
//! implementations: `kindling-fetch` provides the HTTP resolver,
//! `kindling-kinds` the taxonomy and classifier, and `kindling-pipeline` the
//! orchestration that ties them together.

pub mod document;
pub mod error;
pub mod properties;
pub mod resolve;
pub mod traits;

pub use document::{Jf2Document, TYPE_CARD, TYPE_CITE, TYPE_ENTRY};
pub use error::{ModelError, ModelResult};
pub use properties::{is_reference_property, PropertyBag, QUERY_KEY, REFERENCE_PROPERTIES};
pub use resolve::{
    is_http_url, FailureReason, ResolutionFailure, ResolutionOutcome, ResolutionTask,
    ResourceResolver,
};
pub use traits::{KindClassifier, KindInfo, KindTaxonomy, PostFormat};
