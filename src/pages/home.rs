use leptos::prelude::*;

use crate::activity::{ActivityData, DefaultGraph};
use crate::components::graph_traversal::{
	GraphEdge, GraphNode, GraphTraversalSimulator, Strategy, TraversalMethod,
};

fn node(id: &str) -> GraphNode {
	GraphNode {
		id: id.into(),
		label: id.into(),
	}
}

fn edge(from: &str, to: &str) -> GraphEdge {
	GraphEdge {
		from: from.into(),
		to: to.into(),
	}
}

/// Sample authored payload, shaped like the backend's `meta.activity_data`.
fn sample_activity() -> ActivityData {
	ActivityData::GraphTraversal {
		instructions_detail: "Pick a traversal method and a start node, then press play to \
			watch the visit order unfold."
			.into(),
		default_graph: DefaultGraph {
			nodes: vec![node("A"), node("B"), node("C"), node("D"), node("E")],
			edges: vec![edge("A", "B"), edge("A", "C"), edge("B", "D")],
			is_directed: true,
		},
		traversal_methods: vec![
			TraversalMethod {
				id: Strategy::Dfs,
				name: "Depth-First Search".into(),
			},
			TraversalMethod {
				id: Strategy::Bfs,
				name: "Breadth-First Search".into(),
			},
		],
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let activity = sample_activity();
	let instructions = activity.instructions();
	let graph = activity.graph_activity().unwrap_or_default();
	let graph_activity = Signal::derive(move || graph.clone());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page">
				<h1>"Graph Traversal"</h1>
				<p class="subtitle">{instructions}</p>
				<GraphTraversalSimulator activity=graph_activity />
			</div>
		</ErrorBoundary>
	}
}
