//! Degree-based labels and colors.

use log::debug;

use super::index::DegreeMap;
use super::types::NodeId;

/// Above this many nodes the initial view drops every node nothing points at.
pub const DECLUTTER_THRESHOLD: usize = 1000;

/// Color class of a rendered node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeColor {
	/// Nothing points at the node.
	Isolated,
	/// Several edges end here and none leave.
	Sink,
	/// Everything else.
	Default,
}

impl NodeColor {
	/// CSS color the canvas paints this class with.
	pub fn css(self) -> &'static str {
		match self {
			NodeColor::Isolated => "#9e9e9e",
			NodeColor::Sink => "#e53935",
			NodeColor::Default => "#1f77b4",
		}
	}
}

/// A node decorated for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledNode {
	/// Node key.
	pub id: NodeId,
	/// `"<label> <in> <out>"`.
	pub label: String,
	/// Color class.
	pub color: NodeColor,
}

/// Classify a node by its degrees. In-degree zero wins over the sink rule,
/// and a sink needs more than one parent.
pub fn node_color(in_degree: usize, out_degree: usize) -> NodeColor {
	if in_degree == 0 {
		NodeColor::Isolated
	} else if out_degree == 0 && in_degree > 1 {
		NodeColor::Sink
	} else {
		NodeColor::Default
	}
}

/// Decorate one node.
pub fn style_node(id: &NodeId, in_degree: usize, out_degree: usize, label: &str) -> StyledNode {
	StyledNode {
		id: id.clone(),
		label: format!("{label} {in_degree} {out_degree}"),
		color: node_color(in_degree, out_degree),
	}
}

/// Drop nodes with no incoming edges, but only when there are strictly more
/// than `threshold` of them in total.
pub fn declutter<'a>(nodes: &'a [NodeId], incoming: &DegreeMap, threshold: usize) -> Vec<&'a NodeId> {
	if nodes.len() <= threshold {
		return nodes.iter().collect();
	}
	let kept: Vec<&NodeId> = nodes.iter().filter(|id| incoming.get(id) > 0).collect();
	debug!(
		"decluttered {} of {} nodes (threshold {threshold})",
		nodes.len() - kept.len(),
		nodes.len()
	);
	kept
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::index::EdgeIndex;
	use crate::graph::types::Edge;

	#[test]
	fn label_carries_both_degrees() {
		let node = style_node(&NodeId::new("x"), 2, 5, "Paris");
		assert_eq!(node.label, "Paris 2 5");
	}

	#[test]
	fn multi_parent_sink_is_highlighted() {
		assert_eq!(node_color(3, 0), NodeColor::Sink);
		assert_eq!(node_color(2, 0), NodeColor::Sink);
	}

	#[test]
	fn single_parent_sink_stays_default() {
		assert_eq!(node_color(1, 0), NodeColor::Default);
	}

	#[test]
	fn no_parents_is_isolated_whatever_the_fan_out() {
		assert_eq!(node_color(0, 0), NodeColor::Isolated);
		assert_eq!(node_color(0, 7), NodeColor::Isolated);
	}

	#[test]
	fn inner_nodes_are_default() {
		assert_eq!(node_color(1, 1), NodeColor::Default);
		assert_eq!(node_color(4, 2), NodeColor::Default);
	}

	/// `n` nodes where the first `roots` have no parents and every other node
	/// has exactly one.
	fn chain_with_roots(n: usize, roots: usize) -> (Vec<NodeId>, EdgeIndex) {
		let nodes: Vec<NodeId> = (0..n).map(|i| NodeId::new(format!("n{i}"))).collect();
		let edges: Vec<Edge> = (roots..n)
			.map(|i| Edge::new(format!("e{i}"), format!("n{}", i % roots), format!("n{i}")))
			.collect();
		(nodes, EdgeIndex::build(&edges))
	}

	#[test]
	fn declutter_removes_roots_above_threshold() {
		let (nodes, index) = chain_with_roots(1001, 5);
		let kept = declutter(&nodes, index.incoming(), DECLUTTER_THRESHOLD);
		assert_eq!(kept.len(), 996);
		assert!(kept.iter().all(|id| index.in_degree(id) > 0));
	}

	#[test]
	fn declutter_keeps_everything_below_threshold() {
		let (nodes, index) = chain_with_roots(999, 5);
		let kept = declutter(&nodes, index.incoming(), DECLUTTER_THRESHOLD);
		assert_eq!(kept.len(), 999);
	}

	#[test]
	fn declutter_threshold_is_exclusive() {
		let (nodes, index) = chain_with_roots(1000, 5);
		assert_eq!(declutter(&nodes, index.incoming(), DECLUTTER_THRESHOLD).len(), 1000);
	}
}
