//! Seed sets from text queries.

use super::types::{GraphSource, NodeId};

/// Nodes whose raw label or id contains `query`, ignoring case and
/// surrounding whitespace. Results follow load order. A blank query matches
/// nothing.
pub fn search(source: &GraphSource, query: &str) -> Vec<NodeId> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return Vec::new();
	}
	source
		.nodes()
		.iter()
		.filter(|id| {
			source.label_of(id).to_lowercase().contains(&needle)
				|| id.as_str().to_lowercase().contains(&needle)
		})
		.cloned()
		.collect()
}
