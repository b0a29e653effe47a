//! Decorative star-field background.
//!
//! Renders a fixed population of stars on a fullscreen canvas with:
//! - Per-star twinkle, an alpha oscillation bounded around a random base
//! - A pointer-driven bulge while the viewport is in the hero region
//! - Perspective projection from a fixed camera, additively composited
//!
//! The simulation ([`field`]) and projection ([`camera`]) are pure and
//! stepped explicitly, so every frame of the animation is reproducible in
//! tests; only [`component`] touches the DOM.

pub mod camera;
pub mod field;
mod render;

mod component;

pub use camera::{Camera, POINTER_OUT};
pub use component::StarFieldCanvas;
pub use field::{FieldConfig, StarField, STAR_COUNT};
