//! Link-marker detection and lifecycle over the editable buffer.

use std::collections::BTreeMap;

use super::entity::{EntityKind, TextLinkMarker};
use super::insert::{insert_at_cursor, Insertion};

/// Link registry, keyed by the marker's visible text.
pub type LinkMap = BTreeMap<String, TextLinkMarker>;

/// Distinct marker labels in first-occurrence order.
///
/// Runs a fresh non-overlapping match pass per call; no matcher state is
/// carried between invocations.
///
/// # Returns
/// Deduplicated labels, ordered by first appearance in the buffer.
pub fn scan(buffer: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for caps in EntityKind::TextLink.token_pattern().captures_iter(buffer) {
        let label = &caps[1];
        if !labels.iter().any(|seen| seen == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

/// Reconcile the link map with the markers currently in the buffer.
///
/// New markers get a default entry. Entries whose marker disappeared are
/// retained, so retyping identical text restores its configuration.
pub fn reconcile(map: &mut LinkMap, markers: &[String]) {
    for label in markers {
        map.entry(label.clone()).or_default();
    }
}

/// Wrap the current selection in marker delimiters.
///
/// An empty selection wraps `fallback` instead, so the action always
/// produces a visible marker to configure.
///
/// # Returns
/// The updated buffer and a collapsed cursor placed after the marker.
pub fn wrap_selection(buffer: &str, start: usize, end: usize, fallback: &str) -> Insertion {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let selected = buffer
        .get(lo..hi.min(buffer.len()))
        .unwrap_or_default()
        .to_string();
    let label = if selected.is_empty() {
        fallback
    } else {
        selected.as_str()
    };
    insert_at_cursor(buffer, lo, hi, &EntityKind::TextLink.token(label))
}
