use leptos::prelude::*;
use log::error;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::search_box::SearchBox;
use crate::config::ExplorerConfig;
use crate::graph::{GraphExplorer, NodeId, SearchOutcome};

const GRAPH_FILE: &str = include_str!("../../assets/graph.json");

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	match GraphExplorer::from_json(GRAPH_FILE, ExplorerConfig::default()) {
		Ok(explorer) => view! { <Explorer explorer=explorer /> }.into_any(),
		Err(err) => {
			error!("could not load graph: {err}");
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>
				<p>"Errors: "</p>
				<ul>
					<li>{err.to_string()}</li>
				</ul>
			}
			.into_any()
		}
	}
}

/// The page owns the one mutable slot, `current`; the explorer only ever
/// hands back fresh views to put in it.
#[component]
fn Explorer(explorer: GraphExplorer) -> impl IntoView {
	let current = RwSignal::new(explorer.initial_view());
	let explorer = StoredValue::new(explorer);

	let on_node_dblclick = move |id: NodeId| {
		let next = current.with_untracked(|view| explorer.with_value(|e| e.on_seed_selected(view, [id])));
		if let Some(view) = next {
			current.set(view);
		}
	};
	let on_search = move |query: String| {
		let outcome = current.with_untracked(|view| explorer.with_value(|e| e.on_search(view, &query)));
		if let SearchOutcome::Found { view, .. } = &outcome {
			current.set(view.clone());
		}
		outcome
	};
	let on_reset = move |_: ()| current.set(explorer.with_value(GraphExplorer::initial_view));

	view! {
		<div class="fullscreen-graph">
			<ForceGraphCanvas graph=current fullscreen=true on_node_dblclick=on_node_dblclick />
			<div class="graph-overlay">
				<h1>"Knowledge Graph"</h1>
				<p class="subtitle">
					"Double-click a node to show only what it connects to. Search matches the labels on screen; Show all brings everything back."
				</p>
				<SearchBox on_search=on_search on_reset=on_reset />
				<p class="graph-stats">
					{move || current.with(|v| format!("{} nodes, {} edges", v.nodes.len(), v.edges.len()))}
				</p>
			</div>
		</div>
	}
}
