//! starlit-page: animated chrome and star-field background for a portfolio page.
//!
//! This crate provides the client-side enhancement layer for a marketing/
//! portfolio page: a loading overlay with simulated progress, intercepted
//! page transitions, a mobile navigation toggle, scroll-driven header
//! styling, one-shot reveal animations, a viewport-paused marquee, and a
//! pointer-reactive star field rendered behind the content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod page;

pub use components::chrome::{Marquee, SiteHeader};
pub use components::loading::{LoadingOverlay, OverlayHandle};
pub use components::star_field::StarFieldCanvas;
pub use page::{NavItem, PageData, Section};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starlit-page: logging initialized");
}

/// Load page content from a script element with id="page-data".
/// Expected format: JSON matching [`PageData`].
fn load_page_data() -> Option<PageData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("page-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PageData>(&json_text) {
		Ok(data) => {
			info!(
				"starlit-page: loaded {} nav links, {} sections",
				data.nav.len(),
				data.sections.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("starlit-page: failed to parse page data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the loading overlay, star field, header, and page sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let page = load_page_data().unwrap_or_else(PageData::sample);
	provide_context(OverlayHandle::new());

	// Initial fade-in and reveal observation, once the tree is in the DOM.
	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		if let Some(body) = document.body() {
			let _ = body.class_list().add_1("is-loaded");
		}
		let _ = components::chrome::reveal::observe_reveals(&document);
	});

	let sections = page
		.sections
		.iter()
		.map(|s| {
			view! {
				<section id=s.id.clone() class="page-section reveal">
					<h2>{s.title.clone()}</h2>
					<p>{s.body.clone()}</p>
				</section>
			}
		})
		.collect_view();

	let marquee = (!page.marquee.is_empty())
		.then(|| view! { <Marquee items=page.marquee.clone() /> });

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=page.brand.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<LoadingOverlay />
		<StarFieldCanvas />
		<SiteHeader brand=page.brand.clone() nav=page.nav.clone() />
		<main class="page-main">
			<section id="home" class="hero">
				<h1 class="reveal">{page.brand.clone()}</h1>
				<p class="hero-tagline reveal">{page.tagline.clone()}</p>
			</section>
			{sections}
			{marquee}
		</main>
	}
}
