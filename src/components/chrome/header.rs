//! Fixed site header: brand, navigation, scroll styling, mobile menu.
//!
//! The header swaps between its plain and scrolled treatments at a fixed
//! scroll offset, re-evaluated on every scroll event. The mobile menu is a
//! [`MenuState`](super::menu::MenuState) in a signal; the trigger button's
//! ARIA attribute, the icon swap, and the panel visibility all derive from
//! that one flag.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::menu::MenuState;
use super::transitions;
use crate::components::loading::OverlayHandle;
use crate::page::NavItem;

/// Element id of the fixed header; section scrolls offset by its height.
pub const HEADER_ID: &str = "site-header";

/// Scroll offset (CSS pixels) past which the header takes its scrolled
/// treatment. Exactly 10 stays plain; 11 is scrolled.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Whether the header should carry the `header-scrolled` class.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_THRESHOLD
}

fn nav_link(item: &NavItem, menu: RwSignal<MenuState>, overlay: OverlayHandle) -> impl IntoView + use<> {
	let handler = item.clone();
	view! {
		<a
			href=item.href.clone()
			class="nav-link"
			target=item.new_tab.then_some("_blank")
			on:click=move |ev: MouseEvent| {
				menu.update(|m| *m = m.closed());
				transitions::on_nav_click(&ev, &handler, overlay);
			}
		>
			{item.label.clone()}
		</a>
	}
}

/// Fixed page header with desktop navigation and a collapsible mobile menu.
#[component]
pub fn SiteHeader(
	/// Brand text shown at the left edge.
	brand: String,
	/// Navigation links, rendered in both the desktop bar and mobile panel.
	nav: Vec<NavItem>,
) -> impl IntoView {
	let overlay = expect_context::<OverlayHandle>();
	let scrolled = RwSignal::new(false);
	let menu = RwSignal::new(MenuState::default());

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let on_scroll = Closure::<dyn FnMut()>::new(move || {
			let y = web_sys::window()
				.and_then(|w| w.scroll_y().ok())
				.unwrap_or(0.0);
			scrolled.set(is_scrolled(y));
		});
		let _ = window
			.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
		on_scroll.forget();
	});

	let desktop_links: Vec<_> = nav
		.iter()
		.map(|item| nav_link(item, menu, overlay))
		.collect();
	let mobile_links: Vec<_> = nav
		.iter()
		.map(|item| nav_link(item, menu, overlay))
		.collect();

	view! {
		<header id=HEADER_ID class="site-header" class=("header-scrolled", move || scrolled.get())>
			<div class="site-header-inner">
				<span class="brand">{brand}</span>
				<nav class="site-nav">{desktop_links}</nav>
				<button
					class="menu-btn"
					aria-expanded=move || menu.get().aria_expanded()
					aria-label="Toggle navigation"
					on:click=move |_| menu.update(|m| *m = m.toggled())
				>
					<span
						class="menu-icon"
						class=("hidden", move || menu.get().open)
						class=("block", move || !menu.get().open)
					>
						"\u{2630}"
					</span>
					<span
						class="menu-icon"
						class=("hidden", move || !menu.get().open)
						class=("block", move || menu.get().open)
					>
						"\u{2715}"
					</span>
				</button>
			</div>
			<nav
				class="mobile-menu"
				class=("open", move || menu.get().open)
				class=("hidden", move || !menu.get().open)
			>
				{mobile_links}
			</nav>
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scroll_class_flips_just_past_the_threshold() {
		assert!(!is_scrolled(9.0));
		assert!(!is_scrolled(10.0));
		assert!(is_scrolled(11.0));
	}

	#[test]
	fn top_of_page_is_plain() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(-1.0));
	}
}
