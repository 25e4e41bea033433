//! Reachability from a seed set.

use std::collections::{BTreeSet, HashSet, VecDeque};

use super::index::EdgeIndex;
use super::types::{Edge, NodeId};

/// Nodes and edges reachable from a seed set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subgraph {
	/// Reached nodes, in visiting order.
	pub nodes: Vec<NodeId>,
	/// Reached edges, each once, in index order.
	pub edges: Vec<Edge>,
}

impl Subgraph {
	/// True when nothing was reached, i.e. the seed set was empty.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Breadth-first walk from `seeds` over `index`, following edges in both
/// directions with no depth limit.
///
/// Each node is expanded at most once, so cycles terminate. A seed that no
/// edge touches comes back on its own.
pub fn collect<'a>(seeds: impl IntoIterator<Item = &'a NodeId>, index: &EdgeIndex) -> Subgraph {
	let mut visited: HashSet<&NodeId> = HashSet::new();
	let mut queue: VecDeque<&NodeId> = VecDeque::new();
	let mut nodes = Vec::new();
	let mut reached: BTreeSet<usize> = BTreeSet::new();

	for seed in seeds {
		if visited.insert(seed) {
			queue.push_back(seed);
		}
	}

	while let Some(current) = queue.pop_front() {
		nodes.push(current.clone());
		for &pos in index.incident(current) {
			if !reached.insert(pos) {
				continue;
			}
			let edge = &index.edges()[pos];
			for next in [&edge.source, &edge.target] {
				if visited.insert(next) {
					queue.push_back(next);
				}
			}
		}
	}

	Subgraph {
		nodes,
		edges: reached
			.into_iter()
			.map(|pos| index.edges()[pos].clone())
			.collect(),
	}
}
