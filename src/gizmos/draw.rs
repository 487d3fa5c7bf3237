//! Gizmo drawing
//!
//! Immediate-mode wire rendering of the geometry shapes through macroquad's
//! `draw_line_3d`. Compiled only with the `editor` feature; without it every
//! function keeps its signature and silently does nothing, so game code can
//! call gizmos unconditionally and ship headless builds unchanged.

use super::geometry::{Arc, Disc, Ray, VisionCone};
use crate::math::Vec3;

/// Wire color for gizmo drawing (rgba, 0..1).
#[derive(Debug, Clone, Copy)]
pub struct GizmoColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl GizmoColor {
    pub const WHITE: GizmoColor = GizmoColor { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const RED: GizmoColor = GizmoColor { r: 1.0, g: 0.2, b: 0.2, a: 1.0 };
    pub const GREEN: GizmoColor = GizmoColor { r: 0.2, g: 1.0, b: 0.2, a: 1.0 };
    pub const YELLOW: GizmoColor = GizmoColor { r: 1.0, g: 0.9, b: 0.2, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Segments used to tessellate a full-FOV arc.
const ARC_SEGMENTS: usize = 24;
/// Segments used to tessellate a disc outline.
const DISC_SEGMENTS: usize = 32;

#[cfg(feature = "editor")]
fn line(a: Vec3, b: Vec3, color: GizmoColor) {
    use macroquad::prelude as mq;
    mq::draw_line_3d(
        mq::vec3(a.x, a.y, a.z),
        mq::vec3(b.x, b.y, b.z),
        mq::Color::new(color.r, color.g, color.b, color.a),
    );
}

#[cfg(not(feature = "editor"))]
fn line(_a: Vec3, _b: Vec3, _color: GizmoColor) {}

/// Draw a single ray from its origin.
pub fn draw_ray(ray: &Ray, color: GizmoColor) {
    line(ray.origin, ray.end(), color);
}

/// Draw a wire arc as a polyline. Degenerate arcs (zero sweep, zero radius,
/// zero-length `from`) draw nothing.
pub fn draw_wire_arc(arc: &Arc, color: GizmoColor) {
    if arc.angle_deg.abs() < 1e-3 || arc.radius <= 0.0 || arc.from.len() < 1e-6 {
        return;
    }
    let from = arc.from.normalize();

    let mut prev = arc.center + from.scale(arc.radius);
    for i in 1..=ARC_SEGMENTS {
        let angle = arc.angle_deg * i as f32 / ARC_SEGMENTS as f32;
        let curr = arc.center + from.rotate_about(arc.normal, angle).scale(arc.radius);
        line(prev, curr, color);
        prev = curr;
    }
}

/// Draw a wire disc outline in the plane perpendicular to its normal.
pub fn draw_wire_disc(disc: &Disc, color: GizmoColor) {
    if disc.radius <= 0.0 {
        return;
    }
    let from = disc.normal.perpendicular();

    let mut prev = disc.center + from.scale(disc.radius);
    for i in 1..=DISC_SEGMENTS {
        let angle = 360.0 * i as f32 / DISC_SEGMENTS as f32;
        let curr = disc.center + from.rotate_about(disc.normal, angle).scale(disc.radius);
        line(prev, curr, color);
        prev = curr;
    }
}

/// Draw a full vision cone: five rays, two sweep arcs, two cross-section
/// discs.
pub fn draw_vision_cone(cone: &VisionCone, color: GizmoColor) {
    for ray in &cone.rays {
        draw_ray(ray, color);
    }
    for arc in &cone.arcs {
        draw_wire_arc(arc, color);
    }
    for disc in &cone.discs {
        draw_wire_disc(disc, color);
    }
}
