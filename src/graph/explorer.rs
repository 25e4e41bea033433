//! Command interface the page drives: selections and searches in, views out.

use log::{debug, info, warn};

use super::collect::collect;
use super::index::EdgeIndex;
use super::search::search;
use super::types::{GraphSource, NodeId};
use super::view::{View, rebuild};
use crate::config::ExplorerConfig;

/// Result of running a search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
	/// Query shorter than the configured minimum; nothing was searched.
	TooShort,
	/// Nothing matched; keep the current view.
	NoResults,
	/// Matches and the subgraph reachable from them.
	Found {
		/// Matching node ids.
		hits: Vec<NodeId>,
		/// View to render.
		view: View,
	},
}

/// Turns user actions into new views of one loaded graph.
///
/// Holds no view itself: the caller keeps whatever is on screen, passes it
/// in, and swaps it for the returned value. Walks only follow edges of the
/// view passed in, so nodes the current view hides stay hidden until the
/// caller resets to [`GraphExplorer::initial_view`].
#[derive(Clone, Debug)]
pub struct GraphExplorer {
	source: GraphSource,
	index: EdgeIndex,
	config: ExplorerConfig,
}

impl GraphExplorer {
	/// Index a loaded graph.
	pub fn new(source: GraphSource, config: ExplorerConfig) -> Self {
		let index = EdgeIndex::for_source(&source);
		Self {
			source,
			index,
			config,
		}
	}

	/// Parse and index a graph file.
	pub fn from_json(text: &str, config: ExplorerConfig) -> Result<Self, super::GraphLoadError> {
		Ok(Self::new(GraphSource::from_json(text)?, config))
	}

	/// The loaded graph.
	pub fn source(&self) -> &GraphSource {
		&self.source
	}

	/// Active configuration.
	pub fn config(&self) -> &ExplorerConfig {
		&self.config
	}

	/// The view to show right after loading, or after a reset.
	pub fn initial_view(&self) -> View {
		View::initial(&self.source, &self.index, &self.config)
	}

	/// Subgraph of `current` reachable from `seeds`. Seeds `current` does
	/// not draw are dropped. `None` means there is nothing to show and the
	/// current view should stay as it is.
	pub fn on_seed_selected<I>(&self, current: &View, seeds: I) -> Option<View>
	where
		I: IntoIterator<Item = NodeId>,
	{
		let seeds: Vec<NodeId> = seeds
			.into_iter()
			.filter(|id| {
				let shown = current.contains(id);
				if !shown {
					warn!("ignoring seed {id}: not in the current view");
				}
				shown
			})
			.collect();
		if seeds.is_empty() {
			debug!("empty seed set, keeping current view");
			return None;
		}

		let sub = collect(&seeds, &current.edge_index());
		let view = rebuild(&sub, |id| self.source.label_of(id));
		info!(
			"{} seed(s) reached {} nodes, {} edges",
			seeds.len(),
			view.nodes.len(),
			view.edges.len()
		);
		Some(view)
	}

	/// Search labels and ids of the nodes `current` draws, then show
	/// everything reachable from the hits.
	pub fn on_search(&self, current: &View, query: &str) -> SearchOutcome {
		if query.trim().chars().count() < self.config.min_search_len {
			return SearchOutcome::TooShort;
		}
		let hits: Vec<NodeId> = search(&self.source, query)
			.into_iter()
			.filter(|id| current.contains(id))
			.collect();
		match self.on_seed_selected(current, hits.iter().cloned()) {
			Some(view) => SearchOutcome::Found { hits, view },
			None => SearchOutcome::NoResults,
		}
	}
}
