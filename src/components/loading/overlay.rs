//! Fullscreen loading overlay.
//!
//! Drives the [`LoadingSequencer`] from real timers: a 10ms progress tick,
//! the window `load` event, and the minimum-duration timeout. Once both
//! gates fire the overlay fades and finally leaves layout. The overlay can
//! be brought back through [`OverlayHandle`] when the page is about to
//! navigate away.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::sequencer::{COMPLETE_HOLD_MS, FADE_OUT_MS, LoadingSequencer, MIN_DURATION_MS, TICK_MS};
use crate::components::set_timeout;

/// Visual lifecycle of the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
	/// Fully shown, bar filling (or re-shown before navigation).
	Visible,
	/// Opacity transition running; still occupies layout.
	Fading,
	/// Removed from layout entirely.
	Removed,
}

/// Shared handle to the overlay, provided through Leptos context so the
/// navigation interceptor can re-show it before leaving the page.
#[derive(Clone, Copy)]
pub struct OverlayHandle {
	phase: RwSignal<OverlayPhase>,
	progress: RwSignal<u32>,
}

impl OverlayHandle {
	/// New handle in the visible phase at 0% progress.
	pub fn new() -> Self {
		Self {
			phase: RwSignal::new(OverlayPhase::Visible),
			progress: RwSignal::new(0),
		}
	}

	/// Bring the overlay back, e.g. right before an external navigation.
	pub fn show(&self) {
		self.phase.set(OverlayPhase::Visible);
	}

	/// Current phase.
	pub fn phase(&self) -> OverlayPhase {
		self.phase.get()
	}

	fn set_progress(&self, progress: u32) {
		self.progress.set(progress);
	}

	fn fade_out(&self) {
		self.phase.set(OverlayPhase::Fading);
	}

	fn remove(&self) {
		self.phase.set(OverlayPhase::Removed);
	}
}

impl Default for OverlayHandle {
	fn default() -> Self {
		Self::new()
	}
}

/// Loading screen with a simulated progress bar.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
	let overlay = expect_context::<OverlayHandle>();
	let seq = Rc::new(RefCell::new(LoadingSequencer::new()));

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let interval_id = Rc::new(Cell::new(None::<i32>));

		// Shared tail of both gate callbacks; the sequencer guarantees it
		// runs at most once.
		let begin_hide: Rc<dyn Fn()> = {
			let seq = seq.clone();
			let interval_id = interval_id.clone();
			Rc::new(move || {
				if !seq.borrow_mut().begin_hide() {
					return;
				}
				if let Some(id) = interval_id.take() {
					if let Some(win) = web_sys::window() {
						win.clear_interval_with_handle(id);
					}
				}
				overlay.set_progress(100);
				set_timeout(COMPLETE_HOLD_MS, move || {
					overlay.fade_out();
					set_timeout(FADE_OUT_MS, move || overlay.remove());
				});
			})
		};

		let tick = Closure::<dyn FnMut()>::new({
			let seq = seq.clone();
			let interval_id = interval_id.clone();
			move || {
				let p = seq.borrow_mut().tick();
				overlay.set_progress(p);
				if p >= 100 {
					if let Some(id) = interval_id.take() {
						if let Some(win) = web_sys::window() {
							win.clear_interval_with_handle(id);
						}
					}
				}
			}
		});
		if let Ok(id) = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				tick.as_ref().unchecked_ref(),
				TICK_MS,
			) {
			interval_id.set(Some(id));
		}
		tick.forget();

		// Load gate. The WASM module can start after `load` has already
		// fired on a fast page; the event would then never arrive.
		let already_loaded = window
			.document()
			.map(|d| d.ready_state() == "complete")
			.unwrap_or(false);
		if already_loaded {
			seq.borrow_mut().page_loaded();
			(*begin_hide)();
		} else {
			let on_load = Closure::<dyn FnMut()>::new({
				let seq = seq.clone();
				let begin_hide = begin_hide.clone();
				move || {
					seq.borrow_mut().page_loaded();
					(*begin_hide)();
				}
			});
			let _ = window
				.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
			on_load.forget();
		}

		// Minimum display duration gate.
		let seq_min = seq.clone();
		let begin_hide_min = begin_hide.clone();
		set_timeout(MIN_DURATION_MS, move || {
			seq_min.borrow_mut().min_elapsed();
			(*begin_hide_min)();
		});
	});

	view! {
		<div
			id="loading-screen"
			class="loading-screen"
			class=("hidden", move || overlay.phase.get() != OverlayPhase::Visible)
			style:display=move || {
				if overlay.phase.get() == OverlayPhase::Removed { "none" } else { "flex" }
			}
		>
			<div class="loading-bar" style:width=move || format!("{}%", overlay.progress.get())></div>
		</div>
	}
}
