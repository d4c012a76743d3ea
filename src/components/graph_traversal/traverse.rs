use std::collections::{HashSet, VecDeque};

use log::debug;
use petgraph::graphmap::DiGraphMap;
use thiserror::Error;

use super::types::{GraphEdge, GraphNode, Strategy, adjacency};

/// Why a traversal request was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TraversalError {
	/// The requested start node is not part of the node set.
	#[error("start node `{0}` is not in the graph")]
	UnknownStartNode(String),
}

/// Compute the full visit order for `strategy` starting at `start`.
///
/// Traversal always follows edges from `from` to `to` as authored, for both
/// directed and undirected graphs; only nodes reachable that way appear, so
/// a start node with no outgoing edges yields just `[start]`. Edges with
/// unknown endpoints are skipped. The result is fully determined by the
/// arguments.
pub fn traverse(
	strategy: Strategy,
	start: &str,
	nodes: &[GraphNode],
	edges: &[GraphEdge],
) -> Result<Vec<String>, TraversalError> {
	let Some(start) = nodes.iter().find(|n| n.id == start).map(|n| n.id.as_str()) else {
		return Err(TraversalError::UnknownStartNode(start.to_string()));
	};

	let graph = adjacency(nodes, edges, false);
	let order = match strategy {
		Strategy::Dfs => depth_first(&graph, start),
		Strategy::Bfs => breadth_first(&graph, start),
	};
	debug!(
		"{} from {start} visits {} of {} nodes",
		strategy.as_str(),
		order.len(),
		nodes.len()
	);
	Ok(order)
}

fn depth_first<'a>(graph: &DiGraphMap<&'a str, ()>, start: &'a str) -> Vec<String> {
	let mut order = Vec::new();
	let mut visited: HashSet<&str> = HashSet::new();
	let mut stack = vec![start];

	while let Some(current) = stack.pop() {
		if !visited.insert(current) {
			continue;
		}
		order.push(current.to_string());

		// Neighbors go on the stack reversed so they pop in authored order.
		let neighbors: Vec<&str> = graph.neighbors(current).collect();
		for neighbor in neighbors.into_iter().rev() {
			if !visited.contains(neighbor) {
				stack.push(neighbor);
			}
		}
	}
	order
}

fn breadth_first<'a>(graph: &DiGraphMap<&'a str, ()>, start: &'a str) -> Vec<String> {
	let mut order = Vec::new();
	// Marking at enqueue time keeps a node from being queued twice.
	let mut visited: HashSet<&str> = HashSet::from([start]);
	let mut queue: VecDeque<&str> = VecDeque::from([start]);

	while let Some(current) = queue.pop_front() {
		order.push(current.to_string());
		for neighbor in graph.neighbors(current) {
			if visited.insert(neighbor) {
				queue.push_back(neighbor);
			}
		}
	}
	order
}
