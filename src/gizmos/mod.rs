//! Editor debug gizmos
//!
//! Vision-cone visualization split in two layers: [`geometry`] computes the
//! shapes (pure, headless-testable), [`draw`] renders them through macroquad
//! when the `editor` feature is enabled. Without the feature the draw calls
//! are no-ops, which is the expected shape for a shipped game - gizmos are
//! an editing-time aid, not runtime behavior.

pub mod draw;
pub mod geometry;

pub use draw::{draw_ray, draw_vision_cone, draw_wire_arc, draw_wire_disc, GizmoColor};
pub use geometry::{
    arc_between, vision_cone, Arc, Disc, Ray, VisionCone, DEFAULT_FOV, DEFAULT_RANGE,
};
