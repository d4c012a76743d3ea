use log::warn;
use petgraph::graphmap::DiGraphMap;
use serde::Deserialize;

/// A vertex in an authored graph, identified by a string id unique within
/// the activity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
}

/// An edge between two node ids, stored as authored. Whether the pair is
/// rendered with an arrowhead is a graph-level flag, not a per-edge one.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphEdge {
	pub from: String,
	pub to: String,
}

/// Traversal strategy selectable by the learner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
	Dfs,
	Bfs,
}

impl Strategy {
	/// The id the backend catalog and the `<select>` options use.
	pub fn as_str(self) -> &'static str {
		match self {
			Strategy::Dfs => "dfs",
			Strategy::Bfs => "bfs",
		}
	}

	/// Parse a catalog id; anything but `dfs`/`bfs` is `None`.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"dfs" => Some(Strategy::Dfs),
			"bfs" => Some(Strategy::Bfs),
			_ => None,
		}
	}
}

/// Catalog entry for the strategy dropdown. Display only; it never changes
/// algorithm semantics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TraversalMethod {
	pub id: Strategy,
	pub name: String,
}

/// Everything the simulator consumes: the authored graph plus the strategy
/// catalog shown in the controls.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GraphActivity {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub directed: bool,
	pub traversal_methods: Vec<TraversalMethod>,
}

/// Build the adjacency map over the validated edge set.
///
/// Edges whose endpoints are not in the node set are dropped here, which is
/// the recovery path for malformed authoring data. With `both_ways` the
/// reverse of every edge is inserted too, so level-assignment BFS can walk
/// undirected graphs in either direction.
pub(crate) fn adjacency<'a>(
	nodes: &'a [GraphNode],
	edges: &'a [GraphEdge],
	both_ways: bool,
) -> DiGraphMap<&'a str, ()> {
	let mut graph = DiGraphMap::new();
	for node in nodes {
		graph.add_node(node.id.as_str());
	}
	for edge in edges {
		let (from, to) = (edge.from.as_str(), edge.to.as_str());
		if !graph.contains_node(from) || !graph.contains_node(to) {
			warn!("dropping edge {from} -> {to}: unknown endpoint");
			continue;
		}
		graph.add_edge(from, to, ());
		if both_ways {
			graph.add_edge(to, from, ());
		}
	}
	graph
}

#[cfg(test)]
mod tests {
	use super::*;

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

	#[test]
	fn strategy_ids_round_trip() {
		assert_eq!(Strategy::parse("dfs"), Some(Strategy::Dfs));
		assert_eq!(Strategy::parse("bfs"), Some(Strategy::Bfs));
		assert_eq!(Strategy::parse(""), None);
		assert_eq!(Strategy::parse("dijkstra"), None);
		assert_eq!(Strategy::Dfs.as_str(), "dfs");
		assert_eq!(Strategy::Bfs.as_str(), "bfs");
	}

	#[test]
	fn adjacency_drops_edges_with_unknown_endpoints() {
		let nodes = vec![node("a"), node("b")];
		let edges = vec![edge("a", "b"), edge("a", "ghost"), edge("ghost", "b")];
		let graph = adjacency(&nodes, &edges, false);
		assert_eq!(graph.edge_count(), 1);
		assert!(graph.contains_edge("a", "b"));
		assert!(!graph.contains_node("ghost"));
	}

	#[test]
	fn adjacency_augments_reverse_edges_when_asked() {
		let nodes = vec![node("a"), node("b")];
		let edges = vec![edge("a", "b")];
		let graph = adjacency(&nodes, &edges, true);
		assert!(graph.contains_edge("a", "b"));
		assert!(graph.contains_edge("b", "a"));
	}
}
