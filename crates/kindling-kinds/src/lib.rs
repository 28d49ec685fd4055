//! # Kindling Kinds
//!
//! The closed kind vocabulary, per-kind display metadata, and the post type
//! discovery classifier.
//!
//! This crate provides the production implementations of the
//! `kindling-core` classification traits:
//!
//! - [`StandardTaxonomy`] implements `KindTaxonomy` with the standard
//!   display string / verb prefix / post format / short-link prefix table
//! - [`PostTypeDiscovery`] implements `KindClassifier` using the Post Type
//!   Discovery algorithm (<https://www.w3.org/TR/post-type-discovery/>),
//!   extended with the read/listen/watch/favorite reference properties

pub mod discovery;
pub mod kind;
pub mod taxonomy;

pub use discovery::PostTypeDiscovery;
pub use kind::Kind;
pub use taxonomy::StandardTaxonomy;
