use std::collections::HashMap;
use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::Point;
use super::types::GraphActivity;

/// Matches the node chip size of the other kinesthetic widgets.
pub const NODE_RADIUS: f64 = 24.0;
const ARROW_SIZE: f64 = 10.0;

const BACKGROUND: &str = "#eef1f6";
const VISITED: &str = "#007bff";
const EDGE_IDLE: &str = "#d1d9e6";
const LABEL_IDLE: &str = "#3a4256";

/// Draw the whole scene: edges below, nodes and labels on top.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	canvas: &HtmlCanvasElement,
	activity: &GraphActivity,
	positions: &HashMap<String, Point>,
	visited: &[String],
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
	draw_edges(ctx, activity, positions, visited);
	draw_nodes(ctx, activity, positions, visited);
}

fn draw_edges(
	ctx: &CanvasRenderingContext2d,
	activity: &GraphActivity,
	positions: &HashMap<String, Point>,
	visited: &[String],
) {
	for edge in &activity.edges {
		let (Some(from), Some(to)) = (positions.get(&edge.from), positions.get(&edge.to))
		else {
			continue;
		};
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		let is_visited = visited.contains(&edge.from) && visited.contains(&edge.to);
		let color = if is_visited { VISITED } else { EDGE_IDLE };

		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		if !is_visited {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(4.0),
			));
		}

		// Trim the line back to the node border (and arrowhead, if any).
		let trim = if activity.directed {
			NODE_RADIUS + ARROW_SIZE
		} else {
			NODE_RADIUS
		};
		ctx.begin_path();
		ctx.move_to(from.x + ux * NODE_RADIUS, from.y + uy * NODE_RADIUS);
		ctx.line_to(to.x - ux * trim, to.y - uy * trim);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		if activity.directed {
			let (tip_x, tip_y) = (to.x - ux * NODE_RADIUS, to.y - uy * NODE_RADIUS);
			let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
			let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
			ctx.set_fill_style_str(color);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}
	}
}

fn draw_nodes(
	ctx: &CanvasRenderingContext2d,
	activity: &GraphActivity,
	positions: &HashMap<String, Point>,
	visited: &[String],
) {
	ctx.set_font("14px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for node in &activity.nodes {
		let Some(pos) = positions.get(&node.id) else {
			continue;
		};
		let is_visited = visited.contains(&node.id);

		ctx.begin_path();
		let _ = ctx.arc(pos.x, pos.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if is_visited { VISITED } else { "#ffffff" });
		ctx.fill();
		ctx.set_stroke_style_str(EDGE_IDLE);
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(if is_visited { "#ffffff" } else { LABEL_IDLE });
		let _ = ctx.fill_text(&node.label, pos.x, pos.y);
	}
}
