use leptos::ev;
use leptos::prelude::*;

use crate::graph::SearchOutcome;

fn status_text(outcome: &SearchOutcome) -> String {
	match outcome {
		SearchOutcome::TooShort => String::new(),
		SearchOutcome::NoResults => "No results".to_string(),
		SearchOutcome::Found { hits, view } => format!(
			"{} match{}, {} nodes shown",
			hits.len(),
			if hits.len() == 1 { "" } else { "es" },
			view.nodes.len()
		),
	}
}

/// Search input. Every keystroke is handed to `on_search`; the outcome
/// decides the status line underneath.
#[component]
pub fn SearchBox(
	#[prop(into)] on_search: Callback<String, SearchOutcome>,
	#[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
	let (query, set_query) = signal(String::new());
	let (status, set_status) = signal(String::new());

	let on_input = move |ev: ev::Event| {
		let text = event_target_value(&ev);
		set_query.set(text.clone());
		set_status.set(status_text(&on_search.run(text)));
	};
	let on_clear = move |_: ev::MouseEvent| {
		set_query.set(String::new());
		set_status.set(String::new());
		on_reset.run(());
	};

	view! {
		<div class="graph-search">
			<input
				type="search"
				placeholder="Search nodes"
				prop:value=query
				on:input=on_input
			/>
			<button on:click=on_clear>"Show all"</button>
			<p class="graph-search-status">{status}</p>
		</div>
	}
}
