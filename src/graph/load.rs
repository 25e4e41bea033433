//! Graph file loading.
//!
//! Accepts the JSON shape graphology serializes to, plus a flatter variant:
//!
//! ```json
//! {
//!   "nodes": [{ "key": "a", "attributes": { "label": "Alpha" } }, { "id": "b", "label": "Beta" }],
//!   "edges": [{ "key": "ab", "source": "a", "target": "b" }, { "source": "b", "target": "a" }]
//! }
//! ```
//!
//! Edges without a key are named `e<position>`. Edges missing an endpoint
//! are skipped; dangling endpoints are left for the index builder.

use std::collections::{HashMap, HashSet};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::types::{Edge, EdgeId, GraphSource, NodeId};

/// Why a graph file could not be turned into a [`GraphSource`].
#[derive(Debug, Error)]
pub enum GraphLoadError {
	/// Not valid JSON, or not the expected shape.
	#[error("malformed graph file: {0}")]
	Parse(#[from] serde_json::Error),
	/// A node has an empty key.
	#[error("node #{0} has an empty id")]
	EmptyNodeId(usize),
	/// Two nodes share a key.
	#[error("duplicate node id `{0}`")]
	DuplicateNode(String),
}

#[derive(Deserialize)]
struct RawGraph {
	#[serde(default)]
	nodes: Vec<RawNode>,
	#[serde(default)]
	edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
	#[serde(alias = "key")]
	id: String,
	#[serde(default)]
	label: Option<String>,
	#[serde(default)]
	attributes: RawAttributes,
}

#[derive(Default, Deserialize)]
struct RawAttributes {
	#[serde(default)]
	label: Option<String>,
}

#[derive(Deserialize)]
struct RawEdge {
	#[serde(default, alias = "key")]
	id: Option<String>,
	#[serde(default)]
	source: Option<String>,
	#[serde(default)]
	target: Option<String>,
}

impl GraphSource {
	/// Parse a graph file.
	pub fn from_json(text: &str) -> Result<Self, GraphLoadError> {
		let raw: RawGraph = serde_json::from_str(text)?;

		let mut seen = HashSet::new();
		let mut nodes = Vec::with_capacity(raw.nodes.len());
		let mut labels = HashMap::new();
		for (pos, node) in raw.nodes.into_iter().enumerate() {
			if node.id.is_empty() {
				return Err(GraphLoadError::EmptyNodeId(pos));
			}
			if !seen.insert(node.id.clone()) {
				return Err(GraphLoadError::DuplicateNode(node.id));
			}
			let id = NodeId::new(node.id);
			if let Some(label) = node.label.or(node.attributes.label) {
				labels.insert(id.clone(), label);
			}
			nodes.push(id);
		}

		let mut edges = Vec::with_capacity(raw.edges.len());
		for (pos, edge) in raw.edges.into_iter().enumerate() {
			let (Some(source), Some(target)) = (edge.source, edge.target) else {
				warn!("edge #{pos} is missing an endpoint, skipping");
				continue;
			};
			edges.push(Edge {
				id: EdgeId::new(edge.id.unwrap_or_else(|| format!("e{pos}"))),
				source: NodeId::new(source),
				target: NodeId::new(target),
			});
		}

		info!("loaded graph: {} nodes, {} edges", nodes.len(), edges.len());
		Ok(GraphSource::new(nodes, labels, edges))
	}
}
