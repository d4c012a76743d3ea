//! Backend activity payloads.
//!
//! Learning materials carry a `meta.activity_data` object whose shape
//! depends on a `type` string. It is modeled here as a tagged enum with one
//! variant per kinesthetic widget, each carrying only the fields that
//! widget consumes.

use std::collections::HashMap;

use serde::Deserialize;

use crate::components::graph_traversal::{GraphActivity, GraphEdge, GraphNode, TraversalMethod};

/// An item the learner drags into a category bucket.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClassificationItem {
	pub id: String,
	pub name: String,
}

/// A drop target for classification activities.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClassificationCategory {
	pub id: String,
	pub name: String,
}

/// Per-mode instructions for the stack/queue simulator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ModeInstructions {
	pub stack: String,
	pub queue: String,
}

/// The graph authored for a traversal activity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DefaultGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub is_directed: bool,
}

/// One kinesthetic activity payload, dispatched on the backend `type` tag.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityData {
	#[serde(rename = "classification_drag_and_drop")]
	Classification {
		instructions_detail: String,
		items_to_classify: Vec<ClassificationItem>,
		categories: Vec<ClassificationCategory>,
		/// Item id to category id.
		correct_mappings: HashMap<String, String>,
	},
	#[serde(rename = "array_insertion_deletion_simulation")]
	ArraySimulation {
		instructions_detail: String,
		initial_array_elements: Vec<i64>,
		array_capacity: usize,
	},
	#[serde(rename = "stack_queue_operations_simulation")]
	StackQueue {
		instructions_detail: ModeInstructions,
		max_elements: usize,
	},
	#[serde(rename = "linked_list_construction_simulation")]
	LinkedList {
		instructions_detail: String,
		max_nodes: usize,
		available_operations: Vec<String>,
	},
	#[serde(rename = "graph_traversal_simulation")]
	GraphTraversal {
		instructions_detail: String,
		default_graph: DefaultGraph,
		traversal_methods: Vec<TraversalMethod>,
	},
}

impl ActivityData {
	/// The simulator input, when this payload is a graph activity.
	pub fn graph_activity(&self) -> Option<GraphActivity> {
		match self {
			ActivityData::GraphTraversal {
				default_graph,
				traversal_methods,
				..
			} => Some(GraphActivity {
				nodes: default_graph.nodes.clone(),
				edges: default_graph.edges.clone(),
				directed: default_graph.is_directed,
				traversal_methods: traversal_methods.clone(),
			}),
			_ => None,
		}
	}

	/// Free-form instructions shown above the widget.
	pub fn instructions(&self) -> String {
		match self {
			ActivityData::Classification {
				instructions_detail, ..
			}
			| ActivityData::ArraySimulation {
				instructions_detail, ..
			}
			| ActivityData::LinkedList {
				instructions_detail, ..
			}
			| ActivityData::GraphTraversal {
				instructions_detail, ..
			} => instructions_detail.clone(),
			ActivityData::StackQueue {
				instructions_detail, ..
			} => format!(
				"{} {}",
				instructions_detail.stack, instructions_detail.queue
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_traversal::Strategy;

	#[test]
	fn decodes_graph_traversal_payload() {
		let payload: ActivityData = serde_json::from_str(
			r#"{
				"type": "graph_traversal_simulation",
				"instructions_detail": "Pick a method and a start node.",
				"default_graph": {
					"nodes": [
						{"id": "A", "label": "A"},
						{"id": "B", "label": "B"}
					],
					"edges": [{"from": "A", "to": "B"}],
					"is_directed": true
				},
				"traversal_methods": [
					{"id": "dfs", "name": "Depth-First Search"},
					{"id": "bfs", "name": "Breadth-First Search"}
				]
			}"#,
		)
		.unwrap();

		let activity = payload.graph_activity().unwrap();
		assert!(activity.directed);
		assert_eq!(activity.nodes.len(), 2);
		assert_eq!(activity.edges.len(), 1);
		assert_eq!(activity.traversal_methods[0].id, Strategy::Dfs);
		assert_eq!(payload.instructions(), "Pick a method and a start node.");
	}

	#[test]
	fn decodes_stack_queue_payload_with_per_mode_instructions() {
		let payload: ActivityData = serde_json::from_str(
			r#"{
				"type": "stack_queue_operations_simulation",
				"instructions_detail": {
					"stack": "Push and pop.",
					"queue": "Enqueue and dequeue."
				},
				"max_elements": 5
			}"#,
		)
		.unwrap();

		assert_eq!(payload.graph_activity(), None);
		assert_eq!(payload.instructions(), "Push and pop. Enqueue and dequeue.");
	}

	#[test]
	fn unknown_activity_type_is_rejected() {
		let result: Result<ActivityData, _> = serde_json::from_str(
			r#"{"type": "binary_tree_rotation", "instructions_detail": ""}"#,
		);
		assert!(result.is_err());
	}
}
