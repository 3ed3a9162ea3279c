//! Four-component float vector.

use std::fmt;

use crate::color::{channel_to_unit, unit_to_channel};
use crate::{Color, Matrix, Vector2, Vector3};

/// A 4D vector of `f32` components.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_float_tuple!(Vector4, 4, { x, y, z, w });
impl_vector_ops!(Vector4, { x, y, z, w });

impl Vector4 {
    pub const ZERO: Vector4 = Vector4::splat(0.0);
    pub const ONE: Vector4 = Vector4::splat(1.0);
    pub const UNIT_X: Vector4 = Vector4::new(1.0, 0.0, 0.0, 0.0);
    pub const UNIT_Y: Vector4 = Vector4::new(0.0, 1.0, 0.0, 0.0);
    pub const UNIT_Z: Vector4 = Vector4::new(0.0, 0.0, 1.0, 0.0);
    pub const UNIT_W: Vector4 = Vector4::new(0.0, 0.0, 0.0, 1.0);
    pub const MIN_VALUE: Vector4 = Vector4::splat(f32::MIN);
    pub const MAX_VALUE: Vector4 = Vector4::splat(f32::MAX);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Full row-vector product `v * M`. No perspective divide.
    pub fn transform(self, m: &Matrix) -> Vector4 {
        Vector4::new(
            m.m11 * self.x + m.m21 * self.y + m.m31 * self.z + m.m41 * self.w,
            m.m12 * self.x + m.m22 * self.y + m.m32 * self.z + m.m42 * self.w,
            m.m13 * self.x + m.m23 * self.y + m.m33 * self.z + m.m43 * self.w,
            m.m14 * self.x + m.m24 * self.y + m.m34 * self.z + m.m44 * self.w,
        )
    }

    #[inline]
    pub fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Drops `w`.
    #[inline]
    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// RGBA channels scaled to `[0, 1]`.
    pub fn from_color(color: Color) -> Vector4 {
        Vector4::new(
            channel_to_unit(color.r),
            channel_to_unit(color.g),
            channel_to_unit(color.b),
            channel_to_unit(color.a),
        )
    }

    /// `x, y, z, w` map to `r, g, b, a`, each truncated from `component * 255`.
    pub fn to_color(self) -> Color {
        Color::rgba(
            unit_to_channel(self.x),
            unit_to_channel(self.y),
            unit_to_channel(self.z),
            unit_to_channel(self.w),
        )
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{} Z:{} W:{}", self.x, self.y, self.z, self.w)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}
