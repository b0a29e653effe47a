//! Scrolling marquee strip that pauses while offscreen.
//!
//! The CSS keyframe animation does the actual movement; this component only
//! decides whether it runs. Play state is an explicit boolean mirrored into
//! `animation-play-state`, driven by viewport intersection with the default
//! (any-overlap) threshold.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

/// Whether the marquee animation is currently running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarqueeState {
	/// Running while the strip intersects the viewport at all.
	pub running: bool,
}

impl MarqueeState {
	/// Feed an intersection sample. Returns true when the play state changed.
	pub fn set_intersecting(&mut self, intersecting: bool) -> bool {
		let changed = self.running != intersecting;
		self.running = intersecting;
		changed
	}

	/// Value for the strip's `animation-play-state` style property.
	pub fn play_state(self) -> &'static str {
		if self.running { "running" } else { "paused" }
	}
}

/// Horizontally scrolling strip of short phrases.
#[component]
pub fn Marquee(
	/// Phrases to repeat across the strip.
	items: Vec<String>,
) -> impl IntoView {
	let running = RwSignal::new(false);
	let content_ref = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |_| {
		let Some(content) = content_ref.get() else {
			return;
		};
		let state = Rc::new(RefCell::new(MarqueeState::default()));
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, _observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if state.borrow_mut().set_intersecting(entry.is_intersecting()) {
						running.set(state.borrow().running);
					}
				}
			},
		);
		if let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
			observer.observe(&content);
			callback.forget();
		}
	});

	let rendered: Vec<_> = items
		.iter()
		.map(|item| view! { <span class="marquee-item">{item.clone()}</span> })
		.collect();

	view! {
		<div class="marquee" aria-hidden="true">
			<div
				class="marquee-content"
				node_ref=content_ref
				style=(
					"animation-play-state",
					move || MarqueeState { running: running.get() }.play_state(),
				)
			>
				{rendered}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn runs_only_while_intersecting() {
		let mut state = MarqueeState::default();
		assert_eq!(state.play_state(), "paused");

		assert!(state.set_intersecting(true));
		assert_eq!(state.play_state(), "running");

		assert!(state.set_intersecting(false));
		assert_eq!(state.play_state(), "paused");
	}

	#[test]
	fn repeated_samples_are_not_changes() {
		let mut state = MarqueeState::default();
		assert!(!state.set_intersecting(false));
		state.set_intersecting(true);
		assert!(!state.set_intersecting(true));
		assert!(state.running);
	}
}
