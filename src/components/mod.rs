//! UI components and their state machines.

use wasm_bindgen::prelude::*;

pub mod chrome;
pub mod loading;
pub mod star_field;

/// Schedule a one-shot callback. Fire-once timers in this crate are never
/// canceled, so the closure hands its memory to the JS side.
pub(crate) fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once(f);
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.as_ref().unchecked_ref(),
		ms,
	);
	callback.forget();
}
