//! Vector math for scene queries and gizmo geometry
//!
//! Self-contained f32 math: a 3D vector, an orthonormal look frame, and an
//! integer rectangle. No matrices - the cone gizmo only needs axis-angle
//! rotation, which Rodrigues' formula covers directly.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return Vec3::ZERO;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Rotate around `axis` by `degrees` (Rodrigues' formula).
    /// `axis` must be unit length.
    pub fn rotate_about(self, axis: Vec3, degrees: f32) -> Vec3 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.scale(cos) + axis.cross(self).scale(sin) + axis.scale(axis.dot(self) * (1.0 - cos))
    }

    /// Unsigned angle to `other`, in degrees.
    pub fn angle_to(self, other: Vec3) -> f32 {
        let dot = self.normalize().dot(other.normalize());
        dot.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Some unit vector perpendicular to `self` (seeds disc outlines).
    /// `self` must be non-zero.
    pub fn perpendicular(self) -> Vec3 {
        // Cross against whichever world axis self is least aligned with
        let pick = if self.x.abs() < 0.9 {
            Vec3::new(1.0, 0.0, 0.0)
        } else {
            Vec3::UP
        };
        self.cross(pick).normalize()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

/// Orthonormal frame derived from a forward direction and world up.
///
/// This is the orientation the vision cone is built in: boundary rays are
/// `forward` pitched/yawed about `right` and `up`.
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Basis {
    /// Frame looking along `forward` with world-up as the reference.
    /// A vertical `forward` falls back to the world X axis for `right`.
    pub fn looking(forward: Vec3) -> Basis {
        let forward = forward.normalize();
        let mut right = Vec3::UP.cross(forward);
        if right.len() < 1e-6 {
            right = Vec3::new(1.0, 0.0, 0.0);
        } else {
            right = right.normalize();
        }
        let up = forward.cross(right);
        Basis { right, up, forward }
    }
}

/// Integer rectangle (grid regions, framebuffer areas).
///
/// Equality is field-wise: two rects are equal exactly when origin and size
/// both match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectInt {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RectInt {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert!((c.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        // +Z rotated 90 degrees around +Y lands on +X
        let v = Vec3::FORWARD.rotate_about(Vec3::UP, 90.0);
        assert!((v.x - 1.0).abs() < 0.001);
        assert!(v.y.abs() < 0.001);
        assert!(v.z.abs() < 0.001);
    }

    #[test]
    fn test_rotate_about_preserves_length() {
        let v = Vec3::new(3.0, -1.0, 2.0);
        let r = v.rotate_about(Vec3::UP, 37.5);
        assert!((v.len() - r.len()).abs() < 0.001);
    }

    #[test]
    fn test_angle_to() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 5.0, 0.0);
        assert!((a.angle_to(b) - 90.0).abs() < 0.01);
        assert!(a.angle_to(a).abs() < 0.01);
    }

    #[test]
    fn test_perpendicular_is_unit_and_orthogonal() {
        for v in [Vec3::FORWARD, Vec3::UP, Vec3::new(0.3, -2.0, 1.4)] {
            let p = v.perpendicular();
            assert!((p.len() - 1.0).abs() < 0.001);
            assert!(v.dot(p).abs() < 0.001);
        }
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let basis = Basis::looking(Vec3::new(0.5, 0.2, 1.0));
        assert!((basis.right.len() - 1.0).abs() < 0.001);
        assert!((basis.up.len() - 1.0).abs() < 0.001);
        assert!((basis.forward.len() - 1.0).abs() < 0.001);
        assert!(basis.right.dot(basis.up).abs() < 0.001);
        assert!(basis.right.dot(basis.forward).abs() < 0.001);
        assert!(basis.up.dot(basis.forward).abs() < 0.001);
    }

    #[test]
    fn test_basis_identity_frame() {
        // Looking down +Z gives the world axes back
        let basis = Basis::looking(Vec3::FORWARD);
        assert!((basis.right.x - 1.0).abs() < 0.001);
        assert!((basis.up.y - 1.0).abs() < 0.001);
        assert!((basis.forward.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_equality() {
        let a = RectInt::new(1, 2, 30, 40);
        let b = RectInt::new(1, 2, 30, 40);
        let c = RectInt::new(1, 2, 30, 41);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.right(), 31);
        assert_eq!(a.bottom(), 42);
    }
}
