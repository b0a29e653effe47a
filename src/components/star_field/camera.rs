//! Perspective camera for the star field.
//!
//! The camera sits on the +z axis looking down -z with no rotation, so view
//! space is just a translation; rays and projections reduce to a couple of
//! tangent terms. Pointer coordinates arrive as normalized device
//! coordinates and leave as intersections with the z=0 plane the stars are
//! centered on.

use glam::{Vec2, Vec3};

/// Sentinel NDC value meaning "pointer is not over the hover region."
pub const POINTER_OUT: Vec2 = Vec2::new(-99.0, -99.0);

/// Distance from the camera to the star plane.
pub const CAMERA_Z: f32 = 10.0;

const FOV_Y_DEGREES: f32 = 75.0;

/// Perspective camera with a fixed pose and a resize-driven aspect ratio.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
	/// Camera position; looks down -z from here.
	pub position: Vec3,
	/// Vertical field of view, radians.
	pub fov_y: f32,
	/// Viewport width / height.
	pub aspect: f32,
	/// Near clip distance; points closer than this are culled.
	pub near: f32,
	/// Far clip distance.
	pub far: f32,
}

/// A star mapped onto the canvas.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedStar {
	/// Horizontal canvas position, CSS pixels.
	pub x: f32,
	/// Vertical canvas position, CSS pixels.
	pub y: f32,
	/// View-space distance in front of the camera; drives point sizing.
	pub depth: f32,
}

impl Camera {
	/// Camera at (0, 0, 10) with a 75-degree vertical field of view.
	pub fn new(aspect: f32) -> Self {
		Self {
			position: Vec3::new(0.0, 0.0, CAMERA_Z),
			fov_y: FOV_Y_DEGREES.to_radians(),
			aspect,
			near: 0.1,
			far: 1000.0,
		}
	}

	/// Update the aspect ratio after a viewport resize.
	pub fn set_aspect(&mut self, aspect: f32) {
		self.aspect = aspect;
	}

	/// Map client-area pixel coordinates to normalized device coordinates,
	/// x and y in [-1, 1] with +y up.
	pub fn ndc_from_client(x: f64, y: f64, width: f64, height: f64) -> Vec2 {
		Vec2::new(
			((x / width) * 2.0 - 1.0) as f32,
			(-(y / height) * 2.0 + 1.0) as f32,
		)
	}

	fn half_tan(&self) -> f32 {
		(self.fov_y * 0.5).tan()
	}

	/// Direction of the ray from the camera through an NDC coordinate.
	pub fn ray_direction(&self, ndc: Vec2) -> Vec3 {
		let half = self.half_tan();
		Vec3::new(ndc.x * half * self.aspect, ndc.y * half, -1.0).normalize()
	}

	/// Intersect the pointer ray with the z=0 star plane.
	///
	/// Returns `None` at the [`POINTER_OUT`] sentinel and for rays that
	/// never reach the plane.
	pub fn pointer_on_plane(&self, ndc: Vec2) -> Option<Vec3> {
		if ndc == POINTER_OUT {
			return None;
		}
		let dir = self.ray_direction(ndc);
		if dir.z.abs() < f32::EPSILON {
			return None;
		}
		let t = -self.position.z / dir.z;
		(t > 0.0).then(|| self.position + dir * t)
	}

	/// Project a world-space point onto the canvas.
	///
	/// Returns `None` for points at or behind the near plane.
	pub fn project(&self, world: Vec3, width: f64, height: f64) -> Option<ProjectedStar> {
		let view = world - self.position;
		let depth = -view.z;
		if depth <= self.near {
			return None;
		}
		let half = self.half_tan();
		let ndc_x = view.x / (depth * half * self.aspect);
		let ndc_y = view.y / (depth * half);
		Some(ProjectedStar {
			x: (ndc_x + 1.0) * 0.5 * width as f32,
			y: (1.0 - ndc_y) * 0.5 * height as f32,
			depth,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f32 = 1e-4;

	#[test]
	fn center_ray_hits_the_plane_at_the_origin() {
		let camera = Camera::new(16.0 / 9.0);
		let hit = camera.pointer_on_plane(Vec2::ZERO).unwrap();
		assert!(hit.abs().max_element() < EPS, "expected origin, got {hit}");
	}

	#[test]
	fn sentinel_means_no_pointer() {
		let camera = Camera::new(1.5);
		assert!(camera.pointer_on_plane(POINTER_OUT).is_none());
	}

	#[test]
	fn off_center_rays_land_on_the_plane() {
		let camera = Camera::new(2.0);
		let hit = camera.pointer_on_plane(Vec2::new(1.0, 0.5)).unwrap();
		assert!(hit.z.abs() < EPS);
		assert!(hit.x > 0.0 && hit.y > 0.0);
	}

	#[test]
	fn world_origin_projects_to_canvas_center() {
		let camera = Camera::new(1280.0 / 720.0);
		let p = camera.project(Vec3::ZERO, 1280.0, 720.0).unwrap();
		assert!((p.x - 640.0).abs() < 1e-2);
		assert!((p.y - 360.0).abs() < 1e-2);
		assert!((p.depth - CAMERA_Z).abs() < EPS);
	}

	#[test]
	fn points_behind_the_near_plane_are_culled() {
		let camera = Camera::new(1.0);
		assert!(camera.project(Vec3::new(0.0, 0.0, 10.5), 800.0, 600.0).is_none());
		assert!(camera.project(Vec3::new(0.0, 0.0, 9.95), 800.0, 600.0).is_none());
	}

	#[test]
	fn ndc_mapping_matches_the_client_rect() {
		let ndc = Camera::ndc_from_client(640.0, 360.0, 1280.0, 720.0);
		assert!(ndc.abs().max_element() < EPS);

		let corner = Camera::ndc_from_client(0.0, 0.0, 1280.0, 720.0);
		assert!((corner.x + 1.0).abs() < EPS);
		assert!((corner.y - 1.0).abs() < EPS);
	}

	#[test]
	fn plane_hits_project_back_to_their_screen_position() {
		let (width, height) = (1280.0, 720.0);
		let camera = Camera::new((width / height) as f32);
		let ndc = Vec2::new(0.3, -0.2);
		let world = camera.pointer_on_plane(ndc).unwrap();
		let p = camera.project(world, width, height).unwrap();
		assert!((p.x - (ndc.x + 1.0) * 0.5 * width as f32).abs() < 0.05);
		assert!((p.y - (1.0 - ndc.y) * 0.5 * height as f32).abs() < 0.05);
	}
}
