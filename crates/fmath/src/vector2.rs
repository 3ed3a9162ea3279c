//! Two-component float vector.

use std::fmt;

use crate::{Coord2, Matrix, Vector3, Vector4};

/// A 2D vector of `f32` components.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl_float_tuple!(Vector2, 2, { x, y });
impl_vector_ops!(Vector2, { x, y });

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::splat(0.0);
    pub const ONE: Vector2 = Vector2::splat(1.0);
    pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);
    pub const UNIT_Y: Vector2 = Vector2::new(0.0, 1.0);
    pub const MIN_VALUE: Vector2 = Vector2::splat(f32::MIN);
    pub const MAX_VALUE: Vector2 = Vector2::splat(f32::MAX);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Z component of the 3D cross product of the two vectors.
    #[inline]
    pub fn cross(self, other: Vector2) -> f32 {
        self.x * other.y - other.x * self.y
    }

    /// Transforms a point as the row vector `[x y 0 1]`, dividing by `w`.
    pub fn transform(self, m: &Matrix) -> Vector2 {
        let inv_w = 1.0 / (m.m14 * self.x + m.m24 * self.y + m.m44);
        Vector2::new(
            (m.m11 * self.x + m.m21 * self.y + m.m41) * inv_w,
            (m.m12 * self.x + m.m22 * self.y + m.m42) * inv_w,
        )
    }

    /// Transforms a direction by the upper-left 2x2 block.
    pub fn transform_normal(self, m: &Matrix) -> Vector2 {
        Vector2::new(
            m.m11 * self.x + m.m21 * self.y,
            m.m12 * self.x + m.m22 * self.y,
        )
    }

    #[inline]
    pub fn to_vector3(self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    #[inline]
    pub fn to_vector4(self, z: f32, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, z, w)
    }

    /// Truncates each component toward zero.
    #[inline]
    pub fn to_coord2(self) -> Coord2 {
        Coord2::new(self.x as i32, self.y as i32)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{}", self.x, self.y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}
