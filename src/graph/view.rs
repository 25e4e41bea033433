//! Renderable views and how they are rebuilt.

use std::collections::HashSet;

use log::info;

use super::collect::Subgraph;
use super::index::EdgeIndex;
use super::style::{StyledNode, declutter, style_node};
use super::types::{Edge, GraphSource, NodeId};
use crate::config::ExplorerConfig;

/// What the canvas draws: styled nodes plus the edges between them.
///
/// Every edge endpoint is one of `nodes`. A view is never patched; each
/// load, search or selection produces a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct View {
	/// Styled nodes.
	pub nodes: Vec<StyledNode>,
	/// Edges, all of whose endpoints are in `nodes`.
	pub edges: Vec<Edge>,
}

impl View {
	/// The view shown right after a graph is loaded: every node and edge,
	/// minus the parentless nodes of a graph larger than the declutter
	/// threshold. `index` must be the index of `source`.
	pub fn initial(source: &GraphSource, index: &EdgeIndex, config: &ExplorerConfig) -> Self {
		let kept = declutter(source.nodes(), index.incoming(), config.declutter_threshold);
		let kept_ids: HashSet<&NodeId> = kept.iter().copied().collect();

		let nodes = kept
			.into_iter()
			.map(|id| {
				style_node(
					id,
					index.in_degree(id),
					index.out_degree(id),
					source.label_of(id),
				)
			})
			.collect();
		let edges = index
			.edges()
			.iter()
			.filter(|edge| kept_ids.contains(&edge.source) && kept_ids.contains(&edge.target))
			.cloned()
			.collect();

		let view = Self { nodes, edges };
		info!(
			"initial view: {} nodes, {} edges",
			view.nodes.len(),
			view.edges.len()
		);
		view
	}

	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Look up a rendered node.
	pub fn node(&self, id: &NodeId) -> Option<&StyledNode> {
		self.nodes.iter().find(|node| &node.id == id)
	}

	/// True when `id` is drawn.
	pub fn contains(&self, id: &NodeId) -> bool {
		self.node(id).is_some()
	}

	/// Index over the drawn edges only.
	pub fn edge_index(&self) -> EdgeIndex {
		EdgeIndex::build(&self.edges)
	}
}

/// Restyle a reduced node/edge set from scratch. Degrees, and with them
/// labels and colors, are counted over `sub.edges` only. Edges leaving
/// `sub.nodes` are dropped.
pub fn rebuild<'a>(sub: &'a Subgraph, label_of: impl Fn(&'a NodeId) -> &'a str) -> View {
	let members: HashSet<&NodeId> = sub.nodes.iter().collect();
	let index = EdgeIndex::build(
		sub.edges
			.iter()
			.filter(|edge| members.contains(&edge.source) && members.contains(&edge.target)),
	);
	View {
		nodes: sub
			.nodes
			.iter()
			.map(|id| style_node(id, index.in_degree(id), index.out_degree(id), label_of(id)))
			.collect(),
		edges: index.edges().to_vec(),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::graph::collect::collect;
	use crate::graph::style::NodeColor;

	fn source(nodes: &[&str], edges: &[(&str, &str, &str)]) -> GraphSource {
		GraphSource::new(
			nodes.iter().map(|n| NodeId::new(*n)).collect(),
			nodes
				.iter()
				.map(|n| (NodeId::new(*n), format!("L{n}")))
				.collect::<HashMap<_, _>>(),
			edges.iter().map(|(id, s, t)| Edge::new(*id, *s, *t)).collect(),
		)
	}

	#[test]
	fn rebuild_recounts_degrees_over_the_pruned_edges() {
		// C is a two-parent sink in the full graph but keeps only A's edge
		// once the walk starts from A's component.
		let src = source(
			&["A", "B", "C", "D"],
			&[("ac", "A", "C"), ("bc", "B", "C"), ("ad", "A", "D")],
		);
		let full = View::initial(&src, &EdgeIndex::for_source(&src), &ExplorerConfig::default());
		assert_eq!(full.node(&NodeId::new("C")).map(|n| n.color), Some(NodeColor::Sink));

		let pruned = Subgraph {
			nodes: vec![NodeId::new("A"), NodeId::new("C")],
			edges: vec![Edge::new("ac", "A", "C")],
		};
		let view = rebuild(&pruned, |id| src.label_of(id));
		let c = view.node(&NodeId::new("C")).cloned();
		assert_eq!(c.as_ref().map(|n| n.label.as_str()), Some("LC 1 0"));
		assert_eq!(c.map(|n| n.color), Some(NodeColor::Default));
	}

	#[test]
	fn rebuilt_edges_close_over_rebuilt_nodes() {
		let src = source(
			&["A", "B", "C", "X", "Y"],
			&[("ab", "A", "B"), ("bc", "B", "C"), ("xy", "X", "Y")],
		);
		let index = EdgeIndex::for_source(&src);
		let sub = collect(&[NodeId::new("B")], &index);
		let view = rebuild(&sub, |id| src.label_of(id));

		let ids: HashSet<&NodeId> = view.nodes.iter().map(|n| &n.id).collect();
		assert_eq!(ids.len(), 3);
		assert!(
			view.edges
				.iter()
				.all(|e| ids.contains(&e.source) && ids.contains(&e.target))
		);
	}

	#[test]
	fn rebuild_drops_edges_leaving_the_node_set() {
		let sub = Subgraph {
			nodes: vec![NodeId::new("A"), NodeId::new("B")],
			edges: vec![Edge::new("ab", "A", "B"), Edge::new("bz", "B", "Z")],
		};
		let view = rebuild(&sub, NodeId::as_str);
		assert_eq!(view.edges, vec![Edge::new("ab", "A", "B")]);
		assert_eq!(view.nodes[1].label, "B 1 0");
	}

	#[test]
	fn initial_view_skips_dangling_edges() {
		let src = source(&["A", "B"], &[("ab", "A", "B"), ("ag", "A", "ghost")]);
		let view = View::initial(&src, &EdgeIndex::for_source(&src), &ExplorerConfig::default());
		assert_eq!(view.edges.len(), 1);
		assert_eq!(
			view.node(&NodeId::new("A")).map(|n| n.label.as_str()),
			Some("LA 0 1")
		);
	}

	#[test]
	fn initial_view_declutters_large_graphs_and_their_edges() {
		let config = ExplorerConfig {
			declutter_threshold: 3,
			..ExplorerConfig::default()
		};
		let src = source(
			&["R", "A", "B", "C"],
			&[("ra", "R", "A"), ("ab", "A", "B"), ("bc", "B", "C")],
		);
		let view = View::initial(&src, &EdgeIndex::for_source(&src), &config);
		assert!(view.node(&NodeId::new("R")).is_none());
		assert_eq!(view.nodes.len(), 3);
		let edge_ids: Vec<&str> = view.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(edge_ids, vec!["ab", "bc"]);
		// degrees still reflect the full graph
		assert_eq!(
			view.node(&NodeId::new("A")).map(|n| n.label.as_str()),
			Some("LA 1 1")
		);
	}

	#[test]
	fn unlabelled_nodes_show_their_id() {
		let src = GraphSource::new(
			vec![NodeId::new("n1"), NodeId::new("n2")],
			HashMap::new(),
			vec![Edge::new("e", "n1", "n2")],
		);
		let view = View::initial(&src, &EdgeIndex::for_source(&src), &ExplorerConfig::default());
		assert_eq!(view.nodes[0].label, "n1 0 1");
		assert_eq!(view.nodes[1].label, "n2 1 0");
	}

	#[test]
	fn labels_borrowed_from_the_source_outlive_the_closure() {
		let src = source(&["A", "B"], &[("ab", "A", "B")]);
		let sub = Subgraph {
			nodes: vec![NodeId::new("B"), NodeId::new("A")],
			edges: vec![Edge::new("ab", "A", "B")],
		};
		let view = rebuild(&sub, |id| src.label_of(id));
		let labels: Vec<&str> = view.nodes.iter().map(|n| n.label.as_str()).collect();
		assert_eq!(labels, vec!["LB 1 0", "LA 0 1"]);
	}

	#[test]
	fn initial_view_reads_the_index_it_is_given() {
		// The index decides degrees, so one built from a narrower edge list
		// shows up in the labels.
		let src = source(&["A", "B", "C"], &[("ab", "A", "B"), ("bc", "B", "C")]);
		let partial = EdgeIndex::build(&src.edges()[..1]);
		let view = View::initial(&src, &partial, &ExplorerConfig::default());
		assert_eq!(view.edges, vec![Edge::new("ab", "A", "B")]);
		assert_eq!(
			view.node(&NodeId::new("B")).map(|n| n.label.as_str()),
			Some("LB 1 0")
		);
	}

	#[test]
	fn edge_index_covers_only_drawn_edges() {
		let src = source(&["A", "B", "C"], &[("ab", "A", "B"), ("bc", "B", "C")]);
		let view = View::initial(&src, &EdgeIndex::for_source(&src), &ExplorerConfig::default());
		let index = view.edge_index();
		assert_eq!(index.edges().len(), 2);
		assert!(view.contains(&NodeId::new("C")));
		assert!(!view.contains(&NodeId::new("Z")));
	}
}
