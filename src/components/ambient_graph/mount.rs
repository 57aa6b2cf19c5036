//! Wires a canvas, the engine, the resize listener and the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::error::SurfaceError;
use super::raf::{AnimationHandle, RafError, start_animation_loop};
use super::render::render;
use super::sizing::apply_to_canvas;
use super::state::AmbientState;
use super::types::{AmbientConfig, Viewport};

/// A mounted background. Dropping it stops the frame loop and detaches the
/// resize listener, the same as [`BackgroundHandle::stop`].
pub struct BackgroundHandle {
	window: Window,
	frames: AnimationHandle,
	resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl BackgroundHandle {
	/// Stops the frame loop and detaches the resize listener. Idempotent.
	///
	/// # Errors
	///
	/// Returns an error if the pending frame could not be cancelled.
	pub fn stop(&self) -> Result<(), RafError> {
		if let Some(cb) = self.resize.borrow_mut().take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.frames.stop()
	}

	pub fn frames(&self) -> &AnimationHandle {
		&self.frames
	}
}

// The resize closure is freed with the handle, so it must leave the window first.
impl Drop for BackgroundHandle {
	fn drop(&mut self) {
		if let Err(e) = self.stop() {
			debug!("ambient background: stop on drop: {e}");
		}
	}
}

/// Starts the background on `canvas`.
///
/// Returns `None` without scheduling anything when there is no canvas or it
/// has no 2d context.
pub fn mount(canvas: Option<HtmlCanvasElement>, config: AmbientConfig) -> Option<BackgroundHandle> {
	let Some(canvas) = canvas else {
		debug!("ambient background: no canvas, skipping");
		return None;
	};
	match try_mount(canvas, config) {
		Ok(handle) => Some(handle),
		Err(e) => {
			debug!("ambient background: {e}");
			None
		}
	}
}

fn try_mount(canvas: HtmlCanvasElement, config: AmbientConfig) -> Result<BackgroundHandle, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::WindowUnavailable)?;
	let ctx = context_2d(&canvas)?;

	let seed = config.seed.unwrap_or_else(random_seed);
	let state = AmbientState::new(config, read_viewport(&window)?, SmallRng::seed_from_u64(seed));
	apply_to_canvas(&canvas, &state.surface())?;
	debug!(
		"ambient background: {} nodes on {:?}",
		state.nodes().len(),
		state.surface()
	);
	let state = Rc::new(RefCell::new(state));

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	let resize: Closure<dyn FnMut()> = Closure::new(move || {
		let Some(viewport) = web_sys::window().and_then(|w| read_viewport(&w).ok()) else {
			return;
		};
		let mut s = state_resize.borrow_mut();
		s.resize(viewport);
		if let Err(e) = apply_to_canvas(&canvas_resize, &s.surface()) {
			warn!("ambient background resize: {e}");
		}
		debug!("ambient background resized: {} nodes", s.nodes().len());
	});
	window
		.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
		.map_err(|e| SurfaceError::Listener(format!("{e:?}")))?;

	let frames = start_animation_loop(move |timestamp| {
		let commands = state.borrow_mut().tick(timestamp / 1000.0);
		render(&ctx, &commands);
	});
	let frames = match frames {
		Ok(frames) => frames,
		Err(e) => {
			let _ = window
				.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
			return Err(e.into());
		}
	};

	Ok(BackgroundHandle {
		window,
		frames,
		resize: RefCell::new(Some(resize)),
	})
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::ContextUnavailable(format!("{e:?}")))?
		.ok_or_else(|| SurfaceError::ContextUnavailable("null".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::ContextUnavailable("not a 2d context".into()))
}

fn read_viewport(window: &Window) -> Result<Viewport, SurfaceError> {
	let width = window.inner_width().ok().and_then(|v| v.as_f64());
	let height = window.inner_height().ok().and_then(|v| v.as_f64());
	match (width, height) {
		(Some(width), Some(height)) => Ok(Viewport::new(width, height, window.device_pixel_ratio())),
		_ => Err(SurfaceError::Viewport),
	}
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}
