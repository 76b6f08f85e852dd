//! Display-frame scheduling.
//!
//! The frame loop asks a [`FrameScheduler`] for its next tick instead of
//! calling the browser directly, so it can be driven by hand in tests.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Something that can invoke the frame callback on the next display frame.
pub trait FrameScheduler {
	/// Request one more call of the frame callback.
	fn schedule_next_frame(&mut self);

	/// Drop a pending request, if any.
	fn cancel(&mut self);
}

/// Frame callback shared between the scheduler and the closure it re-arms.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` backed scheduler.
pub struct AnimationFrameScheduler {
	callback: FrameCallback,
	handle: Option<i32>,
}

impl AnimationFrameScheduler {
	pub fn new(callback: FrameCallback) -> Self {
		Self {
			callback,
			handle: None,
		}
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn schedule_next_frame(&mut self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			let function: &js_sys::Function = cb.as_ref().unchecked_ref();
			self.handle = window.request_animation_frame(function).ok();
		}
	}

	fn cancel(&mut self) {
		if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}
