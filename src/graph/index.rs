//! Incident-edge lists and degree counts.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::types::{Edge, EdgeId, GraphSource, NodeId};

/// Per-node edge counts. Nodes never seen read as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeMap(HashMap<NodeId, usize>);

impl DegreeMap {
	/// Degree of `id`, zero when the node has no counted edges.
	pub fn get(&self, id: &NodeId) -> usize {
		self.0.get(id).copied().unwrap_or(0)
	}

	fn bump(&mut self, id: &NodeId) {
		*self.0.entry(id.clone()).or_insert(0) += 1;
	}
}

/// Incident-edge lists and degree counts for one edge sequence.
#[derive(Clone, Debug, Default)]
pub struct EdgeIndex {
	edges: Vec<Edge>,
	incident: HashMap<NodeId, Vec<usize>>,
	incoming: DegreeMap,
	outgoing: DegreeMap,
}

impl EdgeIndex {
	/// Index every edge given. An edge whose id was already indexed is
	/// skipped.
	pub fn build<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
		let mut index = Self::default();
		let mut seen: HashSet<&EdgeId> = HashSet::new();
		for edge in edges {
			if !seen.insert(&edge.id) {
				warn!("duplicate edge id {}, skipping", edge.id);
				continue;
			}
			index.push(edge.clone());
		}
		index
	}

	/// Index the edges of a loaded graph, skipping those with an endpoint
	/// that is not one of its nodes.
	pub fn for_source(source: &GraphSource) -> Self {
		let edges = source.edges().iter().filter(|edge| {
			let known = source.has_node(&edge.source) && source.has_node(&edge.target);
			if !known {
				debug!(
					"edge {} has a dangling endpoint ({} -> {}), skipping",
					edge.id, edge.source, edge.target
				);
			}
			known
		});
		Self::build(edges)
	}

	fn push(&mut self, edge: Edge) {
		let pos = self.edges.len();
		self.incident
			.entry(edge.source.clone())
			.or_default()
			.push(pos);
		if edge.target != edge.source {
			self.incident
				.entry(edge.target.clone())
				.or_default()
				.push(pos);
		}
		self.outgoing.bump(&edge.source);
		self.incoming.bump(&edge.target);
		self.edges.push(edge);
	}

	/// Indexed edges in input order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Positions (into [`EdgeIndex::edges`]) of every edge touching `id`,
	/// in input order.
	pub fn incident(&self, id: &NodeId) -> &[usize] {
		self.incident.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Whether any indexed edge touches `id`.
	pub fn contains(&self, id: &NodeId) -> bool {
		self.incident.contains_key(id)
	}

	/// Incoming degree counts.
	pub fn incoming(&self) -> &DegreeMap {
		&self.incoming
	}

	/// Outgoing degree counts.
	pub fn outgoing(&self) -> &DegreeMap {
		&self.outgoing
	}

	/// Number of edges ending at `id`.
	pub fn in_degree(&self, id: &NodeId) -> usize {
		self.incoming.get(id)
	}

	/// Number of edges starting at `id`.
	pub fn out_degree(&self, id: &NodeId) -> usize {
		self.outgoing.get(id)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn id(s: &str) -> NodeId {
		NodeId::new(s)
	}

	#[test]
	fn counts_degrees_per_direction() {
		let edges = vec![
			Edge::new("e1", "a", "b"),
			Edge::new("e2", "a", "c"),
			Edge::new("e3", "c", "b"),
		];
		let index = EdgeIndex::build(&edges);

		assert_eq!(index.out_degree(&id("a")), 2);
		assert_eq!(index.in_degree(&id("a")), 0);
		assert_eq!(index.in_degree(&id("b")), 2);
		assert_eq!(index.out_degree(&id("b")), 0);
		assert_eq!(index.in_degree(&id("c")), 1);
		assert_eq!(index.out_degree(&id("c")), 1);
	}

	#[test]
	fn absent_nodes_read_as_zero() {
		let index = EdgeIndex::build(&[Edge::new("e1", "a", "b")]);
		assert_eq!(index.in_degree(&id("zzz")), 0);
		assert_eq!(index.outgoing().get(&id("zzz")), 0);
		assert!(index.incident(&id("zzz")).is_empty());
		assert!(!index.contains(&id("zzz")));
	}

	#[test]
	fn incident_lists_cover_both_directions_in_order() {
		let edges = vec![
			Edge::new("e1", "a", "b"),
			Edge::new("e2", "c", "a"),
			Edge::new("e3", "b", "c"),
		];
		let index = EdgeIndex::build(&edges);
		assert_eq!(index.incident(&id("a")), &[0, 1]);
		assert_eq!(index.incident(&id("b")), &[0, 2]);
		assert_eq!(index.incident(&id("c")), &[1, 2]);
	}

	#[test]
	fn self_loop_is_listed_once_but_counts_both_ways() {
		let index = EdgeIndex::build(&[Edge::new("loop", "a", "a")]);
		assert_eq!(index.incident(&id("a")), &[0]);
		assert_eq!(index.in_degree(&id("a")), 1);
		assert_eq!(index.out_degree(&id("a")), 1);
	}

	#[test]
	fn duplicate_edge_ids_are_skipped() {
		let edges = vec![Edge::new("e1", "a", "b"), Edge::new("e1", "b", "c")];
		let index = EdgeIndex::build(&edges);
		assert_eq!(index.edges().len(), 1);
		assert!(!index.contains(&id("c")));
	}

	#[test]
	fn dangling_edges_are_dropped_for_a_source() {
		let source = GraphSource::new(
			vec![id("a"), id("b")],
			HashMap::new(),
			vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "ghost")],
		);
		let index = EdgeIndex::for_source(&source);
		assert_eq!(index.edges().len(), 1);
		assert_eq!(index.out_degree(&id("b")), 0);
		assert!(!index.contains(&id("ghost")));
	}
}
