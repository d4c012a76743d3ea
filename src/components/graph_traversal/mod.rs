mod component;
mod layout;
mod playback;
mod render;
mod traverse;
mod types;

pub use component::GraphTraversalSimulator;
pub use layout::{LEVEL_SPACING, Point, compute_layout};
pub use playback::{Phase, Playback};
pub use traverse::{TraversalError, traverse};
pub use types::{GraphActivity, GraphEdge, GraphNode, Strategy, TraversalMethod};
