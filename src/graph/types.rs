use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node key, unique within a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
	/// Wrap a raw key.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw key.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for NodeId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Edge key, unique within a view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
	/// Wrap a raw key.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw key.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EdgeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for EdgeId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// A directed edge. Direction only matters for degrees; traversal ignores it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
	/// Edge key.
	pub id: EdgeId,
	/// Node the edge starts at.
	pub source: NodeId,
	/// Node the edge ends at.
	pub target: NodeId,
}

impl Edge {
	/// Build an edge from raw keys.
	pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			id: EdgeId::new(id),
			source: NodeId::new(source),
			target: NodeId::new(target),
		}
	}
}

/// A fully loaded graph: the input every view is derived from.
///
/// Immutable once built. Edges may still reference unknown nodes; the
/// index builder is responsible for skipping those.
#[derive(Clone, Debug, Default)]
pub struct GraphSource {
	nodes: Vec<NodeId>,
	members: HashSet<NodeId>,
	labels: HashMap<NodeId, String>,
	edges: Vec<Edge>,
}

impl GraphSource {
	/// Assemble a graph from its parts. Nodes without an entry in `labels`
	/// are displayed by their id.
	pub fn new(nodes: Vec<NodeId>, labels: HashMap<NodeId, String>, edges: Vec<Edge>) -> Self {
		let members = nodes.iter().cloned().collect();
		Self {
			nodes,
			members,
			labels,
			edges,
		}
	}

	/// Node ids in load order.
	pub fn nodes(&self) -> &[NodeId] {
		&self.nodes
	}

	/// Edges in load order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Raw display label of a node.
	pub fn label_of<'a>(&'a self, id: &'a NodeId) -> &'a str {
		self.labels.get(id).map(String::as_str).unwrap_or(id.as_str())
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Whether `id` names a node of this graph.
	pub fn has_node(&self, id: &NodeId) -> bool {
		self.members.contains(id)
	}
}
