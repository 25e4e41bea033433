use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{NodeId, View};

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: NodeId,
	pub label: String,
	pub color: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// What a held mouse button is doing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	/// Moving a node. Offsets are in graph units from the press point.
	Dragging {
		node: DefaultNodeIdx,
		press: (f64, f64),
		origin: (f32, f32),
	},
	/// Moving the whole canvas. `origin` is the transform at press time.
	Panning { press: (f64, f64), origin: (f64, f64) },
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

/// Simulation and interaction state for one rendered [`View`].
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub gesture: Gesture,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	ids: HashMap<DefaultNodeIdx, NodeId>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	/// Lay out `view` from scratch. Nodes that were already on screen in
	/// `previous` keep their position, and the pan/zoom carries over.
	pub fn new(view: &View, width: f64, height: f64, previous: Option<&ForceGraphState>) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let mut placed: HashMap<NodeId, (f32, f32)> = HashMap::new();
		if let Some(prev) = previous {
			prev.graph.visit_nodes(|node| {
				placed.insert(node.data.user_data.id.clone(), (node.x(), node.y()));
			});
		}

		// spread the ring out as the view grows
		let ring = 100.0 * (view.nodes.len().max(1) as f64 / 10.0).sqrt().max(1.0);
		let mut id_to_idx = HashMap::new();
		let mut ids = HashMap::new();
		for (i, node) in view.nodes.iter().enumerate() {
			let (x, y) = placed.get(&node.id).copied().unwrap_or_else(|| {
				let angle = (i as f64) * 2.0 * PI / view.nodes.len() as f64;
				(
					(width / 2.0 + ring * angle.cos()) as f32,
					(height / 2.0 + ring * angle.sin()) as f32,
				)
			});
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color.css(),
				},
			});
			id_to_idx.insert(&node.id, idx);
			ids.insert(idx, node.id.clone());
		}

		let mut edges = Vec::with_capacity(view.edges.len());
		for edge in &view.edges {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		let transform = previous.map(|p| p.transform.clone()).unwrap_or(ViewTransform {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		});

		Self {
			graph,
			transform,
			gesture: Gesture::Idle,
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: previous.map(|p| p.flow_time).unwrap_or(0.0),
			ids,
			edges,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Key of the node under a screen position.
	pub fn node_id_at(&self, sx: f64, sy: f64) -> Option<NodeId> {
		self.node_at_position(sx, sy)
			.and_then(|idx| self.ids.get(&idx).cloned())
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		let Some(idx) = node else {
			return;
		};
		for &(src, tgt) in &self.edges {
			if src == idx {
				self.hover.neighbors.insert(tgt);
			} else if tgt == idx {
				self.hover.neighbors.insert(src);
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	/// Mouse button down at a screen position: grab the node under it, or
	/// the canvas when there is none.
	pub fn press(&mut self, sx: f64, sy: f64) {
		self.gesture = match self.node_at_position(sx, sy) {
			Some(node) => Gesture::Dragging {
				node,
				press: (sx, sy),
				origin: self.position(node).unwrap_or_default(),
			},
			None => Gesture::Panning {
				press: (sx, sy),
				origin: (self.transform.x, self.transform.y),
			},
		};
	}

	/// Pointer moved to a screen position. Hover follows the pointer unless
	/// a node is being dragged.
	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		match self.gesture {
			Gesture::Idle => {
				let hovered = self.node_at_position(sx, sy);
				self.set_hover(hovered);
			}
			Gesture::Panning { press, origin } => {
				let hovered = self.node_at_position(sx, sy);
				self.set_hover(hovered);
				self.transform.x = origin.0 + (sx - press.0);
				self.transform.y = origin.1 + (sy - press.1);
			}
			Gesture::Dragging { node, press, origin } => {
				let k = self.transform.k;
				let x = origin.0 + ((sx - press.0) / k) as f32;
				let y = origin.1 + ((sy - press.1) / k) as f32;
				// a dropped node stays where it was left
				self.graph.visit_nodes_mut(|n| {
					if n.index() == node {
						n.data.x = x;
						n.data.y = y;
						n.data.is_anchor = true;
					}
				});
			}
		}
	}

	/// Mouse button up.
	pub fn release(&mut self) {
		self.gesture = Gesture::Idle;
	}

	/// Pointer left the canvas.
	pub fn leave(&mut self) {
		self.release();
		self.set_hover(None);
	}

	/// Zoom one wheel step around a screen position, which stays put.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = k;
	}

	fn position(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x(), node.y()));
			}
		});
		pos
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
