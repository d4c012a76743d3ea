pub mod graph_traversal;
