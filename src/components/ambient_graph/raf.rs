//! `requestAnimationFrame` loop with an explicit stop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
	Running,
	Stopped,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RafError {
	#[error("failed to get window: window is not available")]
	WindowNotAvailable,

	#[error("failed to request animation frame: {0}")]
	RequestFailed(String),

	#[error("failed to cancel animation frame: {0}")]
	CancelFailed(String),

	#[error("frame callback is no longer registered")]
	ClosureMissing,
}

/// Cancellation token for a running frame loop.
#[derive(Clone)]
pub struct AnimationHandle {
	window: Window,
	request_id: Rc<Cell<Option<i32>>>,
	state: Rc<Cell<LoopState>>,
	closure: RafClosure,
}

impl AnimationHandle {
	/// Stops the loop and releases the frame callback along with everything
	/// it captured. Calling it again is a no-op.
	///
	/// # Errors
	///
	/// Returns [`RafError::CancelFailed`] if the pending frame cannot be
	/// cancelled; the loop is marked stopped regardless and will not
	/// reschedule.
	pub fn stop(&self) -> Result<(), RafError> {
		self.state.set(LoopState::Stopped);
		let cancelled = match self.request_id.take() {
			Some(id) => self
				.window
				.cancel_animation_frame(id)
				.map_err(|e| RafError::CancelFailed(format!("{e:?}"))),
			None => Ok(()),
		};
		// Breaks the callback's reference to its own slot. If this runs from
		// inside the callback, wasm-bindgen defers the free until it returns.
		drop(self.closure.borrow_mut().take());
		cancelled
	}

	pub fn state(&self) -> LoopState {
		self.state.get()
	}
}

/// Calls `render_fn` with the frame timestamp (ms) on every display refresh
/// until the returned handle is stopped.
///
/// # Errors
///
/// Returns an error if there is no window or the first frame cannot be
/// requested.
pub fn start_animation_loop<F>(mut render_fn: F) -> Result<AnimationHandle, RafError>
where
	F: FnMut(f64) + 'static,
{
	let window = web_sys::window().ok_or(RafError::WindowNotAvailable)?;
	let state = Rc::new(Cell::new(LoopState::Running));
	let request_id = Rc::new(Cell::new(None::<i32>));

	let closure: RafClosure = Rc::new(RefCell::new(None));
	let (closure_inner, state_inner, request_inner, window_inner) = (
		closure.clone(),
		state.clone(),
		request_id.clone(),
		window.clone(),
	);

	*closure.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		request_inner.set(None);
		if state_inner.get() != LoopState::Running {
			return;
		}

		render_fn(timestamp);

		if state_inner.get() == LoopState::Running {
			match schedule_next_frame(&window_inner, &closure_inner) {
				Ok(id) => request_inner.set(Some(id)),
				Err(e) => {
					log::warn!("frame loop halted: {e}");
					state_inner.set(LoopState::Stopped);
					drop(closure_inner.borrow_mut().take());
				}
			}
		}
	}));

	let first = schedule_next_frame(&window, &closure).inspect_err(|_| {
		drop(closure.borrow_mut().take());
	})?;
	request_id.set(Some(first));

	Ok(AnimationHandle {
		window,
		request_id,
		state,
		closure,
	})
}

fn schedule_next_frame(window: &Window, closure: &RafClosure) -> Result<i32, RafError> {
	closure
		.borrow()
		.as_ref()
		.ok_or(RafError::ClosureMissing)
		.and_then(|cb| {
			window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.map_err(|e| RafError::RequestFailed(format!("{e:?}")))
		})
}
