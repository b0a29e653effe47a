//! One-shot reveal animations for elements scrolled into view.
//!
//! Every element carrying the `reveal` class gets its own [`RevealState`].
//! The first time at least [`REVEAL_THRESHOLD`] of the element intersects the
//! viewport it transitions to `Visible`, receives the `is-visible` class, and
//! is unobserved; later intersection changes can never reach it again.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible to trigger the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// CSS class added when an element reveals.
pub const REVEALED_CLASS: &str = "is-visible";

/// Lifecycle of a single reveal element. `Visible` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
	/// Not yet shown; waiting for the element to intersect the viewport.
	Pending,
	/// Revealed. Never reverts, even if the element scrolls back out.
	Visible,
}

impl RevealState {
	/// Feed an intersection sample. Returns the next state and whether the
	/// element newly revealed on this sample.
	pub fn on_intersection(self, intersecting: bool) -> (Self, bool) {
		match self {
			Self::Pending if intersecting => (Self::Visible, true),
			other => (other, false),
		}
	}
}

/// Observe every `.reveal` element in the document.
///
/// Returns `None` when the document has no reveal elements or the observer
/// cannot be constructed; the page simply renders without entrance
/// animations in that case.
pub fn observe_reveals(document: &Document) -> Option<IntersectionObserver> {
	let list = document.query_selector_all(".reveal").ok()?;
	let mut elements = Vec::with_capacity(list.length() as usize);
	for i in 0..list.length() {
		if let Some(node) = list.item(i) {
			if let Ok(el) = node.dyn_into::<Element>() {
				elements.push(el);
			}
		}
	}
	if elements.is_empty() {
		return None;
	}

	let states = Rc::new(RefCell::new(vec![RevealState::Pending; elements.len()]));
	let tracked = elements.clone();
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				let target = entry.target();
				let Some(idx) = tracked.iter().position(|el| *el == target) else {
					continue;
				};
				let current = states.borrow()[idx];
				let (next, newly_revealed) = current.on_intersection(entry.is_intersecting());
				states.borrow_mut()[idx] = next;
				if newly_revealed {
					let _ = target.class_list().add_1(REVEALED_CLASS);
					observer.unobserve(&target);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	for el in &elements {
		observer.observe(el);
	}
	callback.forget();
	Some(observer)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveals_exactly_once() {
		let (state, newly) = RevealState::Pending.on_intersection(true);
		assert_eq!(state, RevealState::Visible);
		assert!(newly);

		let (state, newly) = state.on_intersection(true);
		assert_eq!(state, RevealState::Visible);
		assert!(!newly, "a revealed element must not re-fire");
	}

	#[test]
	fn pending_stays_pending_while_offscreen() {
		let (state, newly) = RevealState::Pending.on_intersection(false);
		assert_eq!(state, RevealState::Pending);
		assert!(!newly);
	}

	#[test]
	fn visible_is_terminal() {
		let (state, newly) = RevealState::Visible.on_intersection(false);
		assert_eq!(state, RevealState::Visible);
		assert!(!newly);
	}
}
