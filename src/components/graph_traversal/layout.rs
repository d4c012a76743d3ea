use std::collections::{HashMap, HashSet};

use petgraph::graphmap::DiGraphMap;

use super::types::{GraphEdge, GraphNode, adjacency};

/// Vertical distance between layout levels, in canvas pixels.
pub const LEVEL_SPACING: f64 = 100.0;

/// A node position on the drawing canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Assign a canvas position to every node.
///
/// Nodes are layered by BFS distance from the root set (the in-degree-0
/// nodes, or the first input node when the graph has no source), spread
/// evenly across the canvas width within each level. Nodes unreachable from
/// any root end up together in one trailing level, in input order. For
/// undirected graphs the leveling walks edges in both directions; the edge
/// list itself is left to the caller for rendering direction.
///
/// Pure function of its arguments: identical inputs and canvas dimensions
/// give identical positions.
pub fn compute_layout(
	nodes: &[GraphNode],
	edges: &[GraphEdge],
	directed: bool,
	canvas_width: f64,
	canvas_height: f64,
) -> HashMap<String, Point> {
	if nodes.is_empty() {
		return HashMap::new();
	}

	let graph = adjacency(nodes, edges, !directed);

	// In-degree over the original edges only; the reverse augmentation for
	// undirected graphs must not disqualify roots.
	let mut in_degree: HashMap<&str, usize> =
		nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
	for edge in edges {
		if in_degree.contains_key(edge.from.as_str()) {
			if let Some(count) = in_degree.get_mut(edge.to.as_str()) {
				*count += 1;
			}
		}
	}

	let mut roots: Vec<&str> = nodes
		.iter()
		.map(|n| n.id.as_str())
		.filter(|id| in_degree[id] == 0)
		.collect();
	if roots.is_empty() {
		// Cyclic graph with no source; anchor the layout on the first node.
		roots.push(nodes[0].id.as_str());
	}

	let levels = assign_levels(&graph, nodes, &roots);

	let mut positions = HashMap::new();
	for (level_index, level) in levels.iter().enumerate() {
		let y = (level_index as f64 + 0.5) * LEVEL_SPACING;
		for (slot, id) in level.iter().enumerate() {
			let x = canvas_width / (level.len() as f64 + 1.0) * (slot as f64 + 1.0);
			positions.insert((*id).to_string(), Point { x, y });
		}
	}

	// The trailing level absorbs every unleveled node, so this should never
	// fire; kept so a positionless node can never escape the canvas.
	for (index, node) in nodes.iter().enumerate() {
		if !positions.contains_key(&node.id) {
			positions.insert(node.id.clone(), scatter(index, canvas_width, canvas_height));
		}
	}

	positions
}

/// Multi-source BFS layering with first-discovery semantics: each node lands
/// in exactly the first level at which it is seen.
fn assign_levels<'a>(
	graph: &DiGraphMap<&'a str, ()>,
	nodes: &'a [GraphNode],
	roots: &[&'a str],
) -> Vec<Vec<&'a str>> {
	let mut levels: Vec<Vec<&str>> = Vec::new();
	let mut seen: HashSet<&str> = roots.iter().copied().collect();
	let mut current: Vec<&str> = roots.to_vec();

	while !current.is_empty() {
		let mut next = Vec::new();
		for &u in &current {
			for v in graph.neighbors(u) {
				if seen.insert(v) {
					next.push(v);
				}
			}
		}
		levels.push(std::mem::replace(&mut current, next));
	}

	let stranded: Vec<&str> = nodes
		.iter()
		.map(|n| n.id.as_str())
		.filter(|id| !seen.contains(id))
		.collect();
	if !stranded.is_empty() {
		levels.push(stranded);
	}

	levels
}

/// Deterministic stand-in for `Math.random` so layout stays idempotent.
fn scatter(seed: usize, width: f64, height: f64) -> Point {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	let y = (x * 9301 + 49297) % 233280;
	Point {
		x: width * (x as f64 / 233280.0),
		y: height * (y as f64 / 233280.0),
	}
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

	fn diamond() -> (Vec<GraphNode>, Vec<GraphEdge>) {
		(
			vec![node("A"), node("B"), node("C"), node("D")],
			vec![edge("A", "B"), edge("A", "C"), edge("B", "D")],
		)
	}

	#[test]
	fn every_node_positioned_without_edges() {
		let nodes = vec![node("A"), node("B"), node("C")];
		let positions = compute_layout(&nodes, &[], true, 600.0, 400.0);
		assert_eq!(positions.len(), 3);
		// All in-degree zero, so a single root level spread across the width.
		assert_eq!(positions["A"], Point { x: 150.0, y: 50.0 });
		assert_eq!(positions["B"], Point { x: 300.0, y: 50.0 });
		assert_eq!(positions["C"], Point { x: 450.0, y: 50.0 });
	}

	#[test]
	fn empty_node_set_yields_empty_map() {
		let positions = compute_layout(&[], &[edge("A", "B")], true, 600.0, 400.0);
		assert!(positions.is_empty());
	}

	#[test]
	fn levels_follow_bfs_distance_from_root() {
		let (nodes, edges) = diamond();
		let positions = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		assert_eq!(positions["A"], Point { x: 300.0, y: 50.0 });
		assert_eq!(positions["B"], Point { x: 200.0, y: 150.0 });
		assert_eq!(positions["C"], Point { x: 400.0, y: 150.0 });
		assert_eq!(positions["D"], Point { x: 300.0, y: 250.0 });
	}

	#[test]
	fn forward_edges_descend_levels_in_acyclic_graphs() {
		let (nodes, edges) = diamond();
		let positions = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		for e in &edges {
			assert!(
				positions[&e.to].y > positions[&e.from].y,
				"edge {} -> {} does not descend",
				e.from,
				e.to
			);
		}
	}

	#[test]
	fn isolated_node_joins_the_root_level() {
		let (mut nodes, edges) = diamond();
		nodes.push(node("E"));
		let positions = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		// E has no incoming edges, so it levels alongside A.
		assert_eq!(positions["E"].y, positions["A"].y);
		assert_eq!(positions.len(), 5);
	}

	#[test]
	fn rootless_component_lands_in_trailing_level() {
		// A -> B is rooted at A; C and D form a cycle only reachable against
		// the C -> A edge, so with a directed layout they are stranded.
		let nodes = vec![node("A"), node("B"), node("C"), node("D")];
		let edges = vec![
			edge("A", "B"),
			edge("C", "A"),
			edge("C", "D"),
			edge("D", "C"),
		];
		let positions = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		assert_eq!(positions["A"].y, 50.0);
		assert_eq!(positions["B"].y, 150.0);
		assert_eq!(positions["C"].y, 250.0);
		assert_eq!(positions["D"].y, 250.0);
	}

	#[test]
	fn undirected_layout_reaches_nodes_against_edge_direction() {
		// Same graph as above, but undirected: C is one reverse hop from A.
		let nodes = vec![node("A"), node("B"), node("C"), node("D")];
		let edges = vec![
			edge("A", "B"),
			edge("C", "A"),
			edge("C", "D"),
			edge("D", "C"),
		];
		let positions = compute_layout(&nodes, &edges, false, 600.0, 400.0);
		assert_eq!(positions["A"].y, 50.0);
		assert_eq!(positions["B"].y, 150.0);
		assert_eq!(positions["C"].y, 150.0);
		assert_eq!(positions["D"].y, 250.0);
	}

	#[test]
	fn cyclic_graph_falls_back_to_first_node_as_root() {
		let nodes = vec![node("A"), node("B"), node("C")];
		let edges = vec![edge("A", "B"), edge("B", "C"), edge("C", "A")];
		let positions = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		assert_eq!(positions["A"].y, 50.0);
		assert_eq!(positions["B"].y, 150.0);
		assert_eq!(positions["C"].y, 250.0);
	}

	#[test]
	fn malformed_edges_do_not_affect_positions() {
		let (nodes, mut edges) = diamond();
		let clean = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		edges.push(edge("A", "ghost"));
		edges.push(edge("ghost", "D"));
		let noisy = compute_layout(&nodes, &edges, true, 600.0, 400.0);
		assert_eq!(clean, noisy);
	}

	#[test]
	fn layout_is_idempotent() {
		let (nodes, edges) = diamond();
		let first = compute_layout(&nodes, &edges, false, 640.0, 480.0);
		let second = compute_layout(&nodes, &edges, false, 640.0, 480.0);
		assert_eq!(first, second);
	}
}
