// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen_test::*;

use starlit_page::App;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_the_page_chrome() {
	mount_to_body(|| view! { <App /> });

	let document = web_sys::window().unwrap().document().unwrap();
	assert!(document.get_element_by_id("loading-screen").is_some());
	assert!(document.get_element_by_id("site-header").is_some());
	assert!(document.get_element_by_id("home").is_some());
	assert!(
		document
			.query_selector(".star-scene-canvas")
			.unwrap()
			.is_some()
	);
	assert!(document.query_selector_all(".reveal").unwrap().length() > 0);
}
