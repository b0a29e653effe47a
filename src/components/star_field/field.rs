//! Star particle buffers and the per-frame update.
//!
//! Positions, base positions, and colors live in parallel flat `f32`
//! buffers, three components per star, created once and rewritten every
//! frame. Initialization is deterministic (index-seeded pseudo-random) so
//! the same field is reproducible in tests.

use glam::Vec3;

/// How many stars the field holds for its whole lifetime.
pub const STAR_COUNT: usize = 2000;

/// How far a star's alpha may drift from its base before it bounces.
const TWINKLE_BAND: f32 = 0.3;
/// Alpha clamp applied at the bounce.
const ALPHA_MIN: f32 = 0.1;
const ALPHA_MAX: f32 = 1.0;

/// Tunable parameters for the field.
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
	/// Number of stars.
	pub count: usize,
	/// Dimensions of the box stars are scattered in, centered at the origin.
	pub spread: Vec3,
	/// Planar radius around the pointer within which stars bulge forward.
	pub bulge_radius: f32,
	/// Depth offset of a star directly under the pointer.
	pub bulge_strength: f32,
	/// Fraction of the remaining depth gap closed per frame.
	pub smoothing: f32,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: STAR_COUNT,
			spread: Vec3::new(30.0, 30.0, 20.0),
			bulge_radius: 3.5,
			bulge_strength: 2.0,
			smoothing: 0.05,
		}
	}
}

/// Per-star opacity oscillation around a random base value.
#[derive(Clone, Copy, Debug)]
pub struct Twinkle {
	/// Center of the oscillation, in [0.2, 0.7] at creation.
	pub base_alpha: f32,
	/// Alpha written to the color buffer this frame.
	pub current_alpha: f32,
	/// Per-frame alpha delta; sign flips at the band edges.
	pub speed: f32,
}

impl Twinkle {
	/// Advance one frame and return the alpha to draw with.
	///
	/// Drifting more than the band above or below the base clamps the alpha
	/// into [0.1, 1.0] and reverses direction.
	pub fn advance(&mut self) -> f32 {
		self.current_alpha += self.speed;
		if self.current_alpha > self.base_alpha + TWINKLE_BAND
			|| self.current_alpha < self.base_alpha - TWINKLE_BAND
		{
			self.current_alpha = self.current_alpha.clamp(ALPHA_MIN, ALPHA_MAX);
			self.speed = -self.speed;
		}
		self.current_alpha
	}
}

/// Forward bulge applied to a star whose base (x, y) is `dist_sq` away from
/// the pointer's plane intersection: parabolic falloff, maximal under the
/// pointer, zero at the radius.
pub fn bulge_offset(config: &FieldConfig, dist_sq: f32) -> f32 {
	let radius_sq = config.bulge_radius * config.bulge_radius;
	if dist_sq < radius_sq {
		config.bulge_strength * (1.0 - dist_sq / radius_sq)
	} else {
		0.0
	}
}

/// Whether the viewport is still within the hero region, where the pointer
/// bulge is active.
pub fn hero_active(scroll_y: f64, viewport_height: f64) -> bool {
	scroll_y < viewport_height
}

/// The star field: parallel position/base/color buffers plus twinkle state.
pub struct StarField {
	config: FieldConfig,
	positions: Vec<f32>,
	base_positions: Vec<f32>,
	colors: Vec<f32>,
	twinkles: Vec<Twinkle>,
}

impl StarField {
	/// Scatter `config.count` stars uniformly through the spread box.
	///
	/// Base position equals current position at creation; colors start at
	/// full white and are overwritten by the twinkle on the first frame.
	pub fn new(config: FieldConfig) -> Self {
		let mut positions = Vec::with_capacity(config.count * 3);
		let mut twinkles = Vec::with_capacity(config.count);

		for i in 0..config.count {
			// Deterministic pseudo-random from the index for a reproducible field
			let seed = i as f64;
			let x = (Self::pseudo_random(seed * 1.1) - 0.5) as f32 * config.spread.x;
			let y = (Self::pseudo_random(seed * 2.3) - 0.5) as f32 * config.spread.y;
			let z = (Self::pseudo_random(seed * 3.7) - 0.5) as f32 * config.spread.z;
			positions.extend_from_slice(&[x, y, z]);

			let base_alpha = 0.2 + Self::pseudo_random(seed * 4.1) as f32 * 0.5;
			twinkles.push(Twinkle {
				base_alpha,
				current_alpha: base_alpha,
				speed: (Self::pseudo_random(seed * 5.3) as f32 - 0.5) * 0.01,
			});
		}

		Self {
			base_positions: positions.clone(),
			colors: vec![1.0; config.count * 3],
			positions,
			config,
			twinkles,
		}
	}

	/// Simple pseudo-random function (deterministic)
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Number of stars.
	pub fn len(&self) -> usize {
		self.config.count
	}

	/// Whether the field holds no stars.
	pub fn is_empty(&self) -> bool {
		self.config.count == 0
	}

	/// Current positions, three components per star.
	pub fn positions(&self) -> &[f32] {
		&self.positions
	}

	/// Monochrome colors, three equal components per star.
	pub fn colors(&self) -> &[f32] {
		&self.colors
	}

	/// Advance one frame.
	///
	/// Twinkle always runs. The bulge only pulls while the hero region is
	/// active and the pointer intersects the star plane; otherwise every
	/// star's target depth is exactly its base depth, and the current depth
	/// eases toward it by the smoothing factor.
	pub fn step(&mut self, pointer_world: Option<Vec3>, hero_active: bool) {
		let pointer = if hero_active { pointer_world } else { None };

		for i in 0..self.config.count {
			let i3 = i * 3;

			let alpha = self.twinkles[i].advance();
			self.colors[i3] = alpha;
			self.colors[i3 + 1] = alpha;
			self.colors[i3 + 2] = alpha;

			let base_x = self.base_positions[i3];
			let base_y = self.base_positions[i3 + 1];
			let base_z = self.base_positions[i3 + 2];

			let mut target_z = base_z;
			if let Some(p) = pointer {
				let dx = p.x - base_x;
				let dy = p.y - base_y;
				target_z += bulge_offset(&self.config, dx * dx + dy * dy);
			}

			self.positions[i3 + 2] += (target_z - self.positions[i3 + 2]) * self.config.smoothing;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn small_config() -> FieldConfig {
		FieldConfig {
			count: 16,
			..FieldConfig::default()
		}
	}

	#[test]
	fn stars_start_inside_the_box_with_base_equal_to_current() {
		let field = StarField::new(FieldConfig::default());
		assert_eq!(field.len(), STAR_COUNT);
		assert_eq!(field.positions().len(), STAR_COUNT * 3);

		for i in 0..field.len() {
			let i3 = i * 3;
			assert!(field.positions[i3].abs() <= 15.0);
			assert!(field.positions[i3 + 1].abs() <= 15.0);
			assert!(field.positions[i3 + 2].abs() <= 10.0);
			assert_eq!(field.positions[i3..i3 + 3], field.base_positions[i3..i3 + 3]);
		}

		for t in &field.twinkles {
			assert!((0.2..=0.7).contains(&t.base_alpha));
			assert_eq!(t.current_alpha, t.base_alpha);
			assert!(t.speed.abs() <= 0.005);
		}
	}

	#[test]
	fn initialization_is_deterministic() {
		let a = StarField::new(small_config());
		let b = StarField::new(small_config());
		assert_eq!(a.positions, b.positions);
		assert_eq!(a.colors, b.colors);
	}

	#[test]
	fn twinkle_alpha_stays_clamped_after_the_first_bounce() {
		let mut field = StarField::new(small_config());
		let mut prev_speeds: Vec<f32> = field.twinkles.iter().map(|t| t.speed).collect();
		let mut bounced = vec![false; field.len()];

		for _ in 0..5000 {
			field.step(None, false);
			for (i, t) in field.twinkles.iter().enumerate() {
				if t.speed != prev_speeds[i] {
					bounced[i] = true;
					prev_speeds[i] = t.speed;
				}
				if bounced[i] {
					assert!(
						(ALPHA_MIN..=ALPHA_MAX).contains(&t.current_alpha),
						"alpha {} escaped the clamp",
						t.current_alpha
					);
				}
			}
		}
		assert!(bounced.iter().any(|&b| b), "twinkle speeds never reversed");
	}

	#[test]
	fn colors_are_monochrome_alpha() {
		let mut field = StarField::new(small_config());
		field.step(None, true);
		for i in 0..field.len() {
			let i3 = i * 3;
			let c = &field.colors[i3..i3 + 3];
			assert_eq!(c[0], c[1]);
			assert_eq!(c[1], c[2]);
			assert_eq!(c[0], field.twinkles[i].current_alpha);
		}
	}

	#[test]
	fn without_pointer_target_depth_is_exactly_base() {
		let mut field = StarField::new(small_config());
		field.step(None, true);
		for i in 0..field.len() {
			let i3 = i * 3;
			assert_eq!(field.positions[i3 + 2], field.base_positions[i3 + 2]);
		}
	}

	#[test]
	fn hero_inactive_ignores_the_pointer() {
		let mut field = StarField::new(small_config());
		let over_star = Vec3::new(field.positions[0], field.positions[1], 0.0);
		field.step(Some(over_star), false);
		assert_eq!(field.positions[2], field.base_positions[2]);
	}

	#[test]
	fn bulge_is_parabolic_with_zero_at_the_radius() {
		let config = FieldConfig::default();
		assert_eq!(bulge_offset(&config, 0.0), 2.0);
		assert_eq!(bulge_offset(&config, 3.5 * 3.5), 0.0);
		assert_eq!(bulge_offset(&config, 4.0 * 4.0), 0.0);

		let d = 2.0_f32;
		let expected = 2.0 * (1.0 - (d * d) / (3.5 * 3.5));
		assert_eq!(bulge_offset(&config, d * d), expected);
	}

	#[test]
	fn depth_eases_by_five_percent_of_the_gap() {
		let mut field = StarField::new(small_config());
		let pointer = Vec3::new(field.positions[0], field.positions[1], 0.0);
		let base_z = field.base_positions[2];
		let target = base_z + bulge_offset(&field.config, 0.0);

		let before = field.positions[2];
		field.step(Some(pointer), true);
		let after = field.positions[2];
		assert_eq!(after, before + (target - before) * 0.05);

		// The remaining gap must shrink strictly every frame.
		let mut gap = (target - after).abs();
		for _ in 0..50 {
			field.step(Some(pointer), true);
			let next_gap = (target - field.positions[2]).abs();
			assert!(next_gap < gap);
			gap = next_gap;
		}
	}

	#[test]
	fn released_stars_ease_back_toward_base() {
		let mut field = StarField::new(small_config());
		let pointer = Vec3::new(field.positions[0], field.positions[1], 0.0);
		for _ in 0..30 {
			field.step(Some(pointer), true);
		}
		let displaced = (field.positions[2] - field.base_positions[2]).abs();
		assert!(displaced > 0.0);

		let mut gap = displaced;
		for _ in 0..60 {
			field.step(None, true);
			let next_gap = (field.positions[2] - field.base_positions[2]).abs();
			assert!(next_gap < gap);
			gap = next_gap;
		}
	}

	#[test]
	fn hero_region_is_one_viewport_tall() {
		assert!(hero_active(0.0, 800.0));
		assert!(hero_active(799.0, 800.0));
		assert!(!hero_active(800.0, 800.0));
		assert!(!hero_active(2000.0, 800.0));
	}
}
