//! Navigation interception and page transitions.
//!
//! Link clicks are classified into three shapes: in-page section jumps (body
//! fade-out, instant scroll under the fixed header, fade-in), external
//! navigations (loading overlay shown, location change deferred so the
//! overlay becomes visible first), and links left to the browser. Rapid
//! repeated clicks may schedule redundant timers; they re-apply the same
//! class and href, so none are deduplicated.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::super::set_timeout;
use super::header::HEADER_ID;
use crate::components::loading::OverlayHandle;
use crate::page::NavItem;

/// Delay before following an external link, letting the overlay fade in.
pub const NAV_DELAY_MS: i32 = 500;
/// Duration of the body fade-out/fade-in transitions around a section jump.
pub const SECTION_FADE_MS: i32 = 400;

/// Body class applied while fading out before a section jump.
pub const FADE_OUT_CLASS: &str = "page-transition-out";
/// Body class applied while fading back in after the jump.
pub const FADE_IN_CLASS: &str = "page-transition-in";

/// What a link click should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
	/// Fade out, scroll to the named section, fade back in.
	Section(String),
	/// Show the loading overlay, then navigate to the href.
	External(String),
	/// Leave the click to the browser.
	None,
}

/// Classify a link by its href, optional section target, and whether it
/// opens a new browsing context. Fragment links and bare `#` hrefs keep
/// their default behavior.
pub fn classify_nav(href: &str, section: Option<&str>, opens_new_context: bool) -> NavAction {
	if let Some(id) = section {
		return NavAction::Section(id.to_string());
	}
	if href.is_empty() || href == "#" || href.starts_with('#') || opens_new_context {
		return NavAction::None;
	}
	NavAction::External(href.to_string())
}

/// Click handler shared by every nav link in the chrome.
pub fn on_nav_click(ev: &MouseEvent, item: &NavItem, overlay: OverlayHandle) {
	match classify_nav(&item.href, item.section.as_deref(), item.new_tab) {
		NavAction::Section(id) => {
			ev.prevent_default();
			fade_to_section(&id);
		}
		NavAction::External(href) => {
			ev.prevent_default();
			leave_with_overlay(overlay, href);
		}
		NavAction::None => {}
	}
}

/// Bring the loading overlay back, then follow the href once it is visible.
pub fn leave_with_overlay(overlay: OverlayHandle, href: String) {
	overlay.show();
	set_timeout(NAV_DELAY_MS, move || {
		if let Some(window) = web_sys::window() {
			let _ = window.location().set_href(&href);
		}
	});
}

/// Scroll target for a section: its document offset minus the fixed
/// header's height, so the heading lands just below the header.
pub fn section_scroll_top(section_top: f64, header_height: f64) -> f64 {
	section_top - header_height
}

/// Fade the page out, jump to the section, and fade back in.
///
/// The fade classes live on `<body>` so the whole page participates; the
/// scroll itself is instant, hidden by the fade. A missing target aborts
/// quietly before any class is applied.
pub fn fade_to_section(id: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	if document.get_element_by_id(id).is_none() {
		return;
	}
	let Some(body) = document.body() else {
		return;
	};
	let _ = body.class_list().add_1(FADE_OUT_CLASS);

	let id = id.to_string();
	set_timeout(SECTION_FADE_MS, move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		let header_height = document
			.get_element_by_id(HEADER_ID)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
			.map(|el| el.offset_height() as f64)
			.unwrap_or(0.0);

		if let Some(target) = document
			.get_element_by_id(&id)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		{
			let options = ScrollToOptions::new();
			options.set_top(section_scroll_top(target.offset_top() as f64, header_height));
			options.set_behavior(ScrollBehavior::Instant);
			window.scroll_to_with_scroll_to_options(&options);
		}

		if let Some(body) = document.body() {
			let _ = body.class_list().remove_1(FADE_OUT_CLASS);
			let _ = body.class_list().add_1(FADE_IN_CLASS);
		}

		set_timeout(SECTION_FADE_MS, move || {
			if let Some(body) = web_sys::window()
				.and_then(|w| w.document())
				.and_then(|d| d.body())
			{
				let _ = body.class_list().remove_1(FADE_IN_CLASS);
			}
		});
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fragment_and_empty_links_keep_default_behavior() {
		assert_eq!(classify_nav("#", None, false), NavAction::None);
		assert_eq!(classify_nav("#about", None, false), NavAction::None);
		assert_eq!(classify_nav("", None, false), NavAction::None);
	}

	#[test]
	fn new_context_links_are_untouched() {
		assert_eq!(classify_nav("https://example.com", None, true), NavAction::None);
	}

	#[test]
	fn section_target_wins_over_href() {
		assert_eq!(
			classify_nav("work.html", Some("work"), false),
			NavAction::Section("work".into())
		);
	}

	#[test]
	fn real_urls_are_intercepted() {
		assert_eq!(
			classify_nav("work.html", None, false),
			NavAction::External("work.html".into())
		);
		assert_eq!(
			classify_nav("https://example.com", None, false),
			NavAction::External("https://example.com".into())
		);
	}

	#[test]
	fn scroll_top_sits_below_fixed_header() {
		assert_eq!(section_scroll_top(800.0, 64.0), 736.0);
		assert_eq!(section_scroll_top(0.0, 64.0), -64.0);
	}
}
