use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::{Point, compute_layout};
use super::playback::{Phase, Playback};
use super::render;
use super::traverse::traverse;
use super::types::{GraphActivity, Strategy};

/// Stop the interval, if one is running. Every path that leaves the
/// `Playing` phase goes through here so no stale callback can outlive it.
fn clear_timer(interval: StoredValue<Option<i32>>) {
	if let Some(handle) = interval.get_value() {
		interval.set_value(None);
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(handle);
		}
	}
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let parent = canvas.parent_element();
	let width = parent
		.as_ref()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0);
	let height = parent
		.map(|p| p.client_height() as f64)
		.filter(|h| *h >= 300.0)
		.unwrap_or(420.0);
	(width, height)
}

/// Animated DFS/BFS playback over an authored graph activity.
///
/// The learner picks a traversal method and a start node, then steps through
/// the visit order; visited nodes and fully-visited edges light up on the
/// canvas and the visit order accumulates as label chips below it.
#[component]
pub fn GraphTraversalSimulator(
	#[prop(into)] activity: Signal<GraphActivity>,
	/// Milliseconds between playback steps.
	#[prop(default = 1000)]
	step_ms: i32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let strategy = RwSignal::new(None::<Strategy>);
	let start = RwSignal::new(None::<String>);
	let playback = RwSignal::new(Playback::idle());
	let positions = RwSignal::new(HashMap::<String, Point>::new());

	// Single interval per component instance; the closure is retained here
	// so it stays alive for as long as the timer can fire.
	let interval = StoredValue::new(None::<i32>);
	let tick_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	// Recompute the layout whenever the graph changes.
	Effect::new(move |_| {
		let data = activity.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (width, height) = canvas_size(&canvas);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		positions.set(compute_layout(
			&data.nodes,
			&data.edges,
			data.directed,
			width,
			height,
		));
	});

	// Re-arm playback whenever the selection or the graph changes; any
	// running timer dies with the old traversal.
	Effect::new(move |_| {
		let data = activity.get();
		let chosen = (strategy.get(), start.get());
		clear_timer(interval);
		let next = match chosen {
			(Some(strategy), Some(start)) => {
				match traverse(strategy, &start, &data.nodes, &data.edges) {
					Ok(sequence) => Playback::ready(sequence),
					Err(err) => {
						warn!("traversal rejected: {err}");
						Playback::idle()
					}
				}
			}
			_ => Playback::idle(),
		};
		playback.set(next);
	});

	// Redraw on every layout or playback change.
	Effect::new(move |_| {
		let data = activity.get();
		let map = positions.get();
		let state = playback.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		render::render(&ctx, &canvas, &data, &map, state.visited());
	});

	let on_strategy = move |ev| {
		strategy.set(Strategy::parse(&event_target_value(&ev)));
	};

	let on_start = move |ev| {
		let value = event_target_value(&ev);
		start.set((!value.is_empty()).then_some(value));
	};

	let on_play_pause = {
		let tick_cb = tick_cb.clone();
		move |_| {
			if playback.with(|p| p.is_playing()) {
				playback.update(|p| p.pause());
				clear_timer(interval);
				return;
			}

			let mut running = false;
			playback.update(|p| running = p.play());
			if !running || interval.get_value().is_some() {
				return;
			}

			*tick_cb.borrow_mut() = Some(Closure::new(move || {
				let mut keep_going = false;
				playback.update(|p| keep_going = p.tick());
				if !keep_going {
					clear_timer(interval);
				}
			}));

			let Some(window) = web_sys::window() else {
				return;
			};
			let cb = tick_cb.borrow();
			let Some(cb) = cb.as_ref() else {
				return;
			};
			match window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				step_ms,
			) {
				Ok(handle) => interval.set_value(Some(handle)),
				Err(err) => warn!("failed to start playback timer: {err:?}"),
			}
		}
	};

	let on_reset = move |_| {
		clear_timer(interval);
		playback.update(|p| p.reset());
	};

	on_cleanup(move || clear_timer(interval));

	view! {
		<div class="graph-traversal">
			<div class="graph-controls">
				<select
					on:change=on_strategy
					disabled=move || activity.get().nodes.is_empty()
				>
					<option value="">"Select traversal method"</option>
					{move || {
						activity
							.get()
							.traversal_methods
							.into_iter()
							.map(|method| {
								view! { <option value=method.id.as_str()>{method.name}</option> }
							})
							.collect_view()
					}}
				</select>

				<select
					on:change=on_start
					disabled=move || strategy.get().is_none()
				>
					<option value="">"Select start node"</option>
					{move || {
						activity
							.get()
							.nodes
							.into_iter()
							.map(|node| {
								view! {
									<option value=node.id>{format!("Node {}", node.label)}</option>
								}
							})
							.collect_view()
					}}
				</select>
			</div>

			<div class="graph-canvas-frame">
				<canvas node_ref=canvas_ref class="graph-canvas" />
			</div>

			<div class="graph-playback">
				<button
					on:click=on_play_pause
					disabled=move || playback.with(|p| p.phase() == Phase::Idle)
				>
					{move || if playback.with(|p| p.is_playing()) { "Pause" } else { "Play" }}
				</button>
				<button on:click=on_reset>"Reset"</button>
			</div>

			{move || {
				let data = activity.get();
				let visited = playback.with(|p| p.visited().to_vec());
				(!visited.is_empty())
					.then(|| {
						view! {
							<div class="visit-order">
								<p>"Visit order:"</p>
								<div class="visit-chips">
									{visited
										.into_iter()
										.map(|id| {
											let label = data
												.nodes
												.iter()
												.find(|n| n.id == id)
												.map(|n| n.label.clone())
												.unwrap_or(id);
											view! { <span class="visit-chip">{label}</span> }
										})
										.collect_view()}
								</div>
							</div>
						}
					})
			}}
		</div>
	}
}
