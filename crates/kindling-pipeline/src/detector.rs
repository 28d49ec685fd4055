//! Reference detector
//!
//! Scans a property bag for candidate URLs and produces the ordered work
//! list of resolution tasks. Order is first-seen property order, then element
//! order within a property; it carries no semantic weight but keeps output
//! deterministic.

use serde_json::Value;

use kindling_core::{is_http_url, is_reference_property, PropertyBag, ResolutionTask};

/// Produce the resolution work list for a bag.
///
/// Query bags (carrying the `q` indicator key) represent read requests and
/// yield no tasks. Within reference properties:
///
/// - sequence values emit one task per string element that validates as an
///   http(s) URL; non-URL strings and already-embedded objects are skipped
/// - a single string value emits one task when it validates
/// - a single structured value contributes its top-level `url` field, or
///   nothing when that field is absent
///
/// Validation skips are silent: a non-URL value is not an error, it simply
/// stays out of the work list and passes through untouched.
pub fn detect_tasks(bag: &PropertyBag) -> Vec<ResolutionTask> {
    if bag.is_query() {
        return Vec::new();
    }

    let mut tasks = Vec::new();
    for (property, value) in bag.iter() {
        if !is_reference_property(property) {
            continue;
        }
        match value {
            Value::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if let Value::String(candidate) = element {
                        if is_http_url(candidate) {
                            tasks.push(ResolutionTask::indexed(property, index, candidate));
                        }
                    }
                }
            }
            Value::String(candidate) => {
                if is_http_url(candidate) {
                    tasks.push(ResolutionTask::single(property, candidate));
                }
            }
            Value::Object(map) => {
                if let Some(candidate) = map.get("url").and_then(Value::as_str) {
                    if is_http_url(candidate) {
                        tasks.push(ResolutionTask::single(property, candidate));
                    }
                }
            }
            _ => {}
        }
    }
    tasks
}
