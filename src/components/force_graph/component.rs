use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::ForceGraphState;
use crate::graph::{NodeId, View};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(600.0),
	)
}

fn canvas_point(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Force-directed canvas drawing whatever [`View`] `graph` holds.
///
/// A new view replaces the simulation wholesale; nodes present in both keep
/// their position. Double-clicking a node reports its key through
/// `on_node_dblclick`.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] graph: Signal<View>,
	#[prop(optional, into)] on_node_dblclick: Option<Callback<NodeId>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let shown = graph.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("no window, graph canvas disabled");
			return;
		};

		let previous = state_init.borrow_mut().take();
		let (w, h) = match &previous {
			Some(prev) => (prev.width, prev.height),
			None if fullscreen => window_size(&window),
			None => (
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			),
		};
		debug!(
			"laying out {} nodes, {} edges",
			shown.nodes.len(),
			shown.edges.len()
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(&shown, w, h, previous.as_ref()));

		// canvas, resize hook and frame loop are set up once
		if previous.is_some() || animate_init.borrow().is_some() {
			return;
		}
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("canvas has no 2d context");
			return;
		};

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// every pointer handler maps the event to canvas space and hands it to
	// the state, if a graph has been laid out yet
	let pointer = |act: fn(&mut ForceGraphState, f64, f64)| {
		let state = state.clone();
		move |ev: MouseEvent| {
			if let (Some((x, y)), Some(s)) = (canvas_point(canvas_ref, &ev), state.borrow_mut().as_mut()) {
				act(s, x, y);
			}
		}
	};
	let on_mousedown = pointer(ForceGraphState::press);
	let on_mousemove = pointer(ForceGraphState::pointer_moved);
	let on_mouseup = pointer(|s, _, _| s.release());
	let on_mouseleave = pointer(|s, _, _| s.leave());

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let (Some((x, y)), Some(s)) = (canvas_point(canvas_ref, &ev), state_wh.borrow_mut().as_mut()) {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	let state_dc = state.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let hit = canvas_point(canvas_ref, &ev)
			.and_then(|(x, y)| state_dc.borrow().as_ref()?.node_id_at(x, y));
		if let (Some(id), Some(cb)) = (hit, on_node_dblclick.as_ref()) {
			debug!("double-clicked {id}");
			cb.run(id);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:dblclick=on_dblclick
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
