//! Vision-cone geometry
//!
//! Pure math for the debug cone: boundary rays, the two sweep arcs, and the
//! two cross-section discs. Nothing here draws - [`draw`](super::draw)
//! consumes these shapes when the `editor` feature is on, and tests exercise
//! them headless.

use crate::math::{Basis, Vec3};

/// Default cone field of view, degrees.
pub const DEFAULT_FOV: f32 = 70.0;
/// Default cone ray length.
pub const DEFAULT_RANGE: f32 = 10.0;

/// A debug ray: unit direction and length from an origin.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
    pub length: f32,
}

impl Ray {
    pub fn end(&self) -> Vec3 {
        self.origin + self.dir.scale(self.length)
    }
}

/// A wire arc: `from` swept around `normal` by `angle_deg` at `radius`.
/// `from` is a direction; it is normalized when drawn.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub center: Vec3,
    pub normal: Vec3,
    pub from: Vec3,
    pub angle_deg: f32,
    pub radius: f32,
}

/// A wire disc (full circle) in the plane perpendicular to `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
}

/// Everything needed to draw a vision cone.
#[derive(Debug, Clone, Copy)]
pub struct VisionCone {
    /// Four boundary rays (left, right, up, down) plus the forward ray
    pub rays: [Ray; 5],
    /// Horizontal and vertical sweeps of the full field of view
    pub arcs: [Arc; 2],
    /// Cross-sections: one at the cone cap, one at half that distance
    pub discs: [Disc; 2],
}

/// Compute the gizmo shapes for a vision cone.
///
/// The cone opens around `forward` with a total field of view of
/// `total_fov_deg`: boundary rays are `forward` rotated by half the field
/// of view about the up and right axes of the frame looking along
/// `forward`. The cap disc sits at `ray_range * cos(fov/2)` along `forward`
/// with radius `ray_range * sin(fov/2)`; the second disc at half that
/// distance with half that radius.
pub fn vision_cone(position: Vec3, forward: Vec3, total_fov_deg: f32, ray_range: f32) -> VisionCone {
    let basis = Basis::looking(forward);
    let half = total_fov_deg / 2.0;

    let ray_left = basis.forward.rotate_about(basis.up, -half);
    let ray_right = basis.forward.rotate_about(basis.up, half);
    let ray_up = basis.forward.rotate_about(basis.right, -half);
    let ray_down = basis.forward.rotate_about(basis.right, half);

    let ray = |dir: Vec3| Ray { origin: position, dir, length: ray_range };

    let (sin_half, cos_half) = half.to_radians().sin_cos();
    let cap = position + basis.forward.scale(ray_range * cos_half);
    let mid = position + basis.forward.scale(ray_range * cos_half / 2.0);

    VisionCone {
        rays: [
            ray(ray_left),
            ray(ray_right),
            ray(ray_up),
            ray(ray_down),
            ray(basis.forward),
        ],
        arcs: [
            // Horizontal: left boundary swept to the right boundary
            Arc {
                center: position,
                normal: basis.up,
                from: ray_left,
                angle_deg: total_fov_deg,
                radius: ray_range,
            },
            // Vertical: top boundary swept to the bottom boundary
            Arc {
                center: position,
                normal: basis.right,
                from: ray_up,
                angle_deg: total_fov_deg,
                radius: ray_range,
            },
        ],
        discs: [
            Disc { center: cap, normal: basis.forward, radius: ray_range * sin_half },
            Disc { center: mid, normal: basis.forward, radius: ray_range * sin_half / 2.0 },
        ],
    }
}

/// Arc spanning the angle between two rays, around their mutual
/// perpendicular.
///
/// Sweep angle is the unsigned angle between the rays; the sweep axis is
/// their cross product, so rotating `ray_a` by the angle around it lands on
/// `ray_b`. Parallel rays give a zero-angle arc, which draws nothing.
pub fn arc_between(position: Vec3, radius: f32, ray_a: Vec3, ray_b: Vec3) -> Arc {
    let a = ray_a.normalize();
    let b = ray_b.normalize();
    let angle_deg = a.dot(b).clamp(-1.0, 1.0).acos().to_degrees();
    Arc {
        center: position,
        normal: a.cross(b).normalize(),
        from: ray_a,
        angle_deg,
        radius,
    }
}
