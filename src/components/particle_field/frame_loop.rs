//! Cancellable `requestAnimationFrame` loop.
//!
//! Every frame is a one-shot callback that schedules its successor only while
//! the loop's [`StopHandle`] is live. Once stopped, the chain ends and the
//! frame closure (with everything it captured) is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Shared stop flag for a frame loop. Clones control the same loop.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
	stopped: Arc<AtomicBool>,
	pending_frame: Arc<AtomicI32>,
}

impl StopHandle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stops scheduling further frames. Safe to call more than once.
	pub fn stop(&self) {
		self.stopped.store(true, Ordering::Release);
	}

	pub fn is_stopped(&self) -> bool {
		self.stopped.load(Ordering::Acquire)
	}

	/// Stops the loop and cancels the frame already queued with the browser.
	pub fn stop_and_cancel(&self) {
		self.stop();
		let id = self.pending_frame.swap(0, Ordering::AcqRel);
		if id != 0 {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

/// Starts calling `frame` once per display refresh until `handle` is stopped.
pub fn run<F>(handle: StopHandle, frame: F)
where
	F: FnMut() + 'static,
{
	schedule(handle, Box::new(frame));
}

fn schedule(handle: StopHandle, mut frame: Box<dyn FnMut()>) {
	let next = handle.clone();
	let callback = Closure::once_into_js(move || {
		if next.is_stopped() {
			debug!("portfolio: frame loop stopped");
			return;
		}
		frame();
		schedule(next, frame);
	});

	match web_sys::window().map(|w| w.request_animation_frame(callback.unchecked_ref())) {
		Some(Ok(id)) => handle.pending_frame.store(id, Ordering::Release),
		Some(Err(e)) => warn!("portfolio: requestAnimationFrame failed: {:?}", e),
		None => warn!("portfolio: no window, frame loop halted"),
	}
}
