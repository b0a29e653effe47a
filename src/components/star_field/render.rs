//! Canvas drawing for the star field.
//!
//! Stars are drawn as a pre-rendered radial-gradient sprite composited
//! additively, sized by view-space depth so nearer stars read larger. The
//! canvas itself is transparent; the page background shows through.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::camera::Camera;
use super::field::StarField;

/// Star size in world units; on-canvas size falls off with depth.
pub const STAR_SIZE: f32 = 0.1;

const SPRITE_SIZE: u32 = 64;

/// Pre-render the soft radial star sprite onto an offscreen canvas.
pub fn make_star_sprite(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
	let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
	canvas.set_width(SPRITE_SIZE);
	canvas.set_height(SPRITE_SIZE);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or("no 2d context for star sprite")?
		.dyn_into()?;

	let half = SPRITE_SIZE as f64 / 2.0;
	let gradient = ctx.create_radial_gradient(half, half, 0.0, half, half, half)?;
	gradient.add_color_stop(0.0, "rgba(255,255,255,1)")?;
	gradient.add_color_stop(0.2, "rgba(255,255,255,0.8)")?;
	gradient.add_color_stop(0.4, "rgba(255,255,255,0.3)")?;
	gradient.add_color_stop(1.0, "rgba(255,255,255,0)")?;

	ctx.set_fill_style_canvas_gradient(&gradient);
	ctx.fill_rect(0.0, 0.0, SPRITE_SIZE as f64, SPRITE_SIZE as f64);

	Ok(canvas)
}

/// Draw every star for the current frame.
///
/// `width`/`height` are CSS pixels; the device-pixel-ratio transform is
/// already applied to the context by the component.
pub fn draw(
	ctx: &CanvasRenderingContext2d,
	field: &StarField,
	camera: &Camera,
	sprite: &HtmlCanvasElement,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let _ = ctx.set_global_composite_operation("lighter");

	let positions = field.positions();
	let colors = field.colors();

	for i in 0..field.len() {
		let i3 = i * 3;
		let world = glam::Vec3::new(positions[i3], positions[i3 + 1], positions[i3 + 2]);
		let Some(p) = camera.project(world, width, height) else {
			continue;
		};

		// Perspective point sizing: world size scaled by focal length over depth.
		let size = (STAR_SIZE * height as f32 * 0.5 / p.depth) as f64;
		let half = size / 2.0;

		ctx.set_global_alpha(colors[i3] as f64);
		let _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
			sprite,
			p.x as f64 - half,
			p.y as f64 - half,
			size,
			size,
		);
	}

	ctx.set_global_alpha(1.0);
	let _ = ctx.set_global_composite_operation("source-over");
}
