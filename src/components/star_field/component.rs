//! Leptos component wrapping the star-field canvas.
//!
//! The component creates a fullscreen canvas and wires up pointer handlers
//! on the hero region plus a window resize handler. An animation loop runs
//! via `requestAnimationFrame`, sampling scroll state, stepping the field,
//! and drawing each frame. The loop is never canceled; it runs for the
//! lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::camera::{Camera, POINTER_OUT};
use super::field::{self, FieldConfig, StarField};
use super::render;

/// Bundles the star simulation with its camera, canvas handles, and the
/// shared pointer coordinate the event handlers write and the frame reads.
struct StarContext {
	field: StarField,
	camera: Camera,
	pointer_ndc: Vec2,
	ctx: CanvasRenderingContext2d,
	sprite: HtmlCanvasElement,
	width: f64,
	height: f64,
}

/// Size the canvas backing store to the viewport, capping the device pixel
/// ratio at 2, and re-apply the pixel-ratio transform (resetting the width
/// clears it). Returns the CSS-pixel dimensions.
fn size_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	window: &Window,
) -> (f64, f64) {
	let w = window.inner_width().unwrap().as_f64().unwrap();
	let h = window.inner_height().unwrap().as_f64().unwrap();
	let dpr = window.device_pixel_ratio().min(2.0);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let _ = ctx.scale(dpr, dpr);
	(w, h)
}

/// Renders the decorative star field behind the page.
///
/// The bulge effect tracks the pointer only over the element whose id is
/// `hover_region`; if that element is missing the field still twinkles but
/// never bulges.
#[component]
pub fn StarFieldCanvas(
	/// Id of the element whose pointer movement drives the bulge.
	#[prop(into, default = String::from("home"))]
	hover_region: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<StarContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let document = window.document().unwrap();

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let sprite = render::make_star_sprite(&document).unwrap();
		let (w, h) = size_canvas(&canvas, &ctx, &window);

		*context_init.borrow_mut() = Some(StarContext {
			field: StarField::new(FieldConfig::default()),
			camera: Camera::new((w / h) as f32),
			pointer_ndc: POINTER_OUT,
			ctx,
			sprite,
			width: w,
			height: h,
		});

		// Pointer tracking over the hero region. NDC is derived from the
		// viewport, not the region's rect, so the ray matches the camera.
		if let Some(region) = document.get_element_by_id(&hover_region) {
			let context_mm = context_init.clone();
			let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
				let Some(win) = web_sys::window() else {
					return;
				};
				let vw = win.inner_width().unwrap().as_f64().unwrap();
				let vh = win.inner_height().unwrap().as_f64().unwrap();
				if let Some(ref mut c) = *context_mm.borrow_mut() {
					c.pointer_ndc = Camera::ndc_from_client(
						ev.client_x() as f64,
						ev.client_y() as f64,
						vw,
						vh,
					);
				}
			});
			let _ = region
				.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
			on_mousemove.forget();

			let context_ml = context_init.clone();
			let on_mouseleave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
				if let Some(ref mut c) = *context_ml.borrow_mut() {
					c.pointer_ndc = POINTER_OUT;
				}
			});
			let _ = region
				.add_event_listener_with_callback("mouseleave", on_mouseleave.as_ref().unchecked_ref());
			on_mouseleave.forget();
		} else {
			warn!("star-field: hover region #{hover_region} not found, bulge disabled");
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				let (nw, nh) = size_canvas(&canvas_resize, &c.ctx, &win);
				c.width = nw;
				c.height = nh;
				c.camera.set_aspect((nw / nh) as f32);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let win = web_sys::window().unwrap();
				let scroll_y = win.scroll_y().unwrap_or(0.0);
				let viewport_h = win.inner_height().unwrap().as_f64().unwrap();
				let pointer = c.camera.pointer_on_plane(c.pointer_ndc);
				c.field.step(pointer, field::hero_active(scroll_y, viewport_h));
				render::draw(&c.ctx, &c.field, &c.camera, &c.sprite, c.width, c.height);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<div class="star-scene" aria-hidden="true">
			<canvas node_ref=canvas_ref class="star-scene-canvas" />
		</div>
	}
}
