//! # Kindling Fetch
//!
//! The HTTP `ResourceResolver` implementation: fetches a referenced URL,
//! extracts page metadata (OpenGraph, Twitter cards, standard meta tags) into
//! a flat [`kindling_core::Jf2Document`], and discovers the resource's type.
//!
//! All failures (transport errors, non-2xx statuses, unparseable content, or
//! pages with no discoverable type) surface as
//! [`kindling_core::ResolutionOutcome::Failed`] with a distinct reason;
//! nothing in this crate raises across the resolver boundary.
//!
//! [`ScriptedResolver`] provides a canned-response double for pipeline tests.

pub mod config;
pub mod error;
pub mod extract;
pub mod mock;
pub mod resolver;

pub use config::FetchConfig;
pub use error::{FetchError, FetchResult};
pub use mock::ScriptedResolver;
pub use resolver::HttpResolver;
