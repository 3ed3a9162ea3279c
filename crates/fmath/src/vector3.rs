//! Three-component float vector.

use std::fmt;

use crate::color::{channel_to_unit, unit_to_channel};
use crate::scalar::{DEG_TO_RAD, RAD_TO_DEG};
use crate::{Color, Coord3, Matrix, Vector2, Vector4};

/// A 3D vector of `f32` components.
///
/// Equality compares each component within [`EPSILON`](crate::EPSILON).
/// Indexing with `v[i]` panics past the third component; [`Vector3::get`]
/// returns an error instead.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_float_tuple!(Vector3, 3, { x, y, z });
impl_vector_ops!(Vector3, { x, y, z });

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::splat(0.0);
    pub const ONE: Vector3 = Vector3::splat(1.0);
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);
    pub const MIN_VALUE: Vector3 = Vector3::splat(f32::MIN);
    pub const MAX_VALUE: Vector3 = Vector3::splat(f32::MAX);

    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const FORWARD: Vector3 = Vector3::new(0.0, 0.0, -1.0);
    pub const RIGHT: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All components set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Removes the component of `self` along `normal`.
    ///
    /// Computes `v - n * dot(v, n)`, which projects onto the plane through
    /// the origin rather than mirroring across it.
    #[inline]
    pub fn reflect(self, normal: Vector3) -> Vector3 {
        self - normal * self.dot(normal)
    }

    /// Transforms a point as a row vector `[x y z 1]`, dividing by the
    /// resulting `w`.
    pub fn transform(self, m: &Matrix) -> Vector3 {
        let inv_w = 1.0 / (m.m14 * self.x + m.m24 * self.y + m.m34 * self.z + m.m44);
        Vector3::new(
            (m.m11 * self.x + m.m21 * self.y + m.m31 * self.z + m.m41) * inv_w,
            (m.m12 * self.x + m.m22 * self.y + m.m32 * self.z + m.m42) * inv_w,
            (m.m13 * self.x + m.m23 * self.y + m.m33 * self.z + m.m43) * inv_w,
        )
    }

    /// Transforms a direction by the 3x3 block only.
    pub fn transform_normal(self, m: &Matrix) -> Vector3 {
        Vector3::new(
            m.m11 * self.x + m.m21 * self.y + m.m31 * self.z,
            m.m12 * self.x + m.m22 * self.y + m.m32 * self.z,
            m.m13 * self.x + m.m23 * self.y + m.m33 * self.z,
        )
    }

    pub fn deg_to_rad(self) -> Vector3 {
        self * DEG_TO_RAD
    }

    pub fn rad_to_deg(self) -> Vector3 {
        self * RAD_TO_DEG
    }

    #[inline]
    pub fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn to_vector4(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Truncates each component toward zero.
    #[inline]
    pub fn to_coord3(self) -> Coord3 {
        Coord3::new(self.x as i32, self.y as i32, self.z as i32)
    }

    /// RGB channels scaled to `[0, 1]`; alpha is dropped.
    pub fn from_color(color: Color) -> Vector3 {
        Vector3::new(
            channel_to_unit(color.r),
            channel_to_unit(color.g),
            channel_to_unit(color.b),
        )
    }

    /// Opaque color with each channel truncated from `component * 255`.
    pub fn to_color(self) -> Color {
        Color::rgb(
            unit_to_channel(self.x),
            unit_to_channel(self.y),
            unit_to_channel(self.z),
        )
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{} Z:{}", self.x, self.y, self.z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vector3_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vector3::splat(2.0), Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_vector3_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::splat(3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(10.0 - a, Vector3::new(9.0, 8.0, 7.0));
        assert_eq!(6.0 / a, Vector3::new(6.0, 3.0, 2.0));
        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c *= 2.0;
        assert_eq!(c, Vector3::new(10.0, 14.0, 18.0));
    }

    #[test]
    fn test_vector3_epsilon_equality() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0 + EPSILON * 0.5, 2.0, 3.0);
        let c = Vector3::new(1.001, 2.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_vector3_indexing() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
        assert_eq!(v.get(2), Ok(3.0));
        assert!(v.get(3).unwrap_err().is_index_out_of_range());
        assert!(v.set(3, 1.0).is_err());
        v.set(0, 9.0).unwrap();
        assert_eq!(v.x, 9.0);
    }

    #[test]
    #[should_panic]
    fn test_vector3_index_out_of_range_panics() {
        let v = Vector3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_vector3_cross() {
        assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_X), -Vector3::UNIT_Z);
    }

    #[test]
    fn test_vector3_length_and_distance() {
        let a = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.length_sq(), 25.0);
        let b = Vector3::new(1.0, -2.0, 7.0);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance_sq(Vector3::ZERO), 25.0);
    }

    #[test]
    fn test_vector3_normalize() {
        let n = Vector3::new(0.0, 3.0, 4.0).normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_eq!(n.normalize(), n);

        // Unit to within rounding: returned bit for bit
        let unit = Vector3::new(-0.7636407, -0.62444156, 0.16409111);
        assert_eq!(unit.normalize().to_array(), unit.to_array());
        let once = Vector3::new(-76.36407, -62.444156, 16.409111).normalize();
        assert_eq!(once.normalize().to_array(), once.to_array());

        // Degenerate input collapses to zero
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_eq!(Vector3::splat(1e-5).normalize(), Vector3::ZERO);
    }

    #[test]
    fn test_vector3_min_max() {
        let a = Vector3::new(1.0, 5.0, -2.0);
        let b = Vector3::new(3.0, 0.0, -1.0);
        assert_eq!(a.maximize(b), Vector3::new(3.0, 5.0, -1.0));
        assert_eq!(a.minimize(b), Vector3::new(1.0, 0.0, -2.0));
        assert_eq!(a.max_component(), 5.0);
        assert_eq!(a.min_component(), -2.0);
        assert_eq!(
            Vector3::new(-4.0, 0.5, 9.0).clamp(Vector3::ZERO, Vector3::ONE),
            Vector3::new(0.0, 0.5, 1.0)
        );
        assert_eq!(Vector3::new(-1.0, 2.0, -3.0).abs(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vector3_interpolation() {
        let a = Vector3::ZERO;
        let b = Vector3::new(10.0, 20.0, 30.0);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(5.0, 10.0, 15.0));
        assert_eq!(a.lerp(b, 2.0), Vector3::new(20.0, 40.0, 60.0));

        let c = Vector3::new(0.0, 10.0, 0.0);
        assert_eq!(Vector3::barycentric(a, b, c, 0.5, 0.0), a.lerp(b, 0.5));
        assert_eq!(Vector3::barycentric(a, b, c, 0.0, 1.0), c);
    }

    #[test]
    fn test_vector3_splines_hit_endpoints() {
        let v1 = Vector3::new(-1.0, 0.0, 0.0);
        let v2 = Vector3::ZERO;
        let v3 = Vector3::new(1.0, 1.0, 0.0);
        let v4 = Vector3::new(2.0, 1.0, 0.0);
        assert_eq!(Vector3::catmull_rom(v1, v2, v3, v4, 0.0), v2);
        assert_eq!(Vector3::catmull_rom(v1, v2, v3, v4, 1.0), v3);

        let t1 = Vector3::UNIT_X;
        let t2 = Vector3::UNIT_Y;
        assert_eq!(Vector3::hermite(v2, t1, v3, t2, 0.0), v2);
        assert_eq!(Vector3::hermite(v2, t1, v3, t2, 1.0), v3);
        // Midpoint of a cubic Hermite: (v1 + v2) / 2 + (t1 - t2) / 8
        assert_eq!(
            Vector3::hermite(v2, t1, v3, t2, 0.5),
            Vector3::new(0.625, 0.375, 0.0)
        );
    }

    #[test]
    fn test_vector3_reflect_removes_normal_component() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflect(Vector3::UNIT_Y), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_vector3_wrap() {
        let v = Vector3::new(-1.0, 5.0, 12.0);
        let wrapped = v.wrap(Vector3::ZERO, Vector3::splat(10.0));
        assert_eq!(wrapped, Vector3::new(9.0, 5.0, 2.0));
    }

    #[test]
    fn test_vector3_transform() {
        let m = Matrix::translation(1.0, 2.0, 3.0);
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(p.transform(&m), Vector3::new(2.0, 3.0, 4.0));
        // Directions ignore translation
        assert_eq!(p.transform_normal(&m), p);

        let r = Matrix::rotation_z(std::f32::consts::FRAC_PI_2);
        let rotated = Vector3::UNIT_X.transform(&r);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vector3_transform_matches_glam() {
        let m = Matrix::rotation_y(0.7) * Matrix::translation(4.0, -1.0, 2.0);
        let p = Vector3::new(0.5, 2.0, -3.0);
        let ours = p.transform(&m);
        let theirs: Vector3 = glam::Mat4::from(m)
            .transform_point3(glam::Vec3::from(p))
            .into();
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-5);
    }

    #[test]
    fn test_vector3_to_coord3_truncates() {
        let c = Vector3::new(1.9, -1.9, 0.2).to_coord3();
        assert_eq!(c, Coord3::new(1, -1, 0));
        assert_eq!(c.to_vector3(), Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_vector3_color_conversion() {
        let v = Vector3::from_color(Color::rgb(255, 0, 51));
        assert_eq!(v, Vector3::new(1.0, 0.0, 0.2));
        assert_eq!(Vector3::new(1.0, 0.5, 0.0).to_color(), Color::rgb(255, 127, 0));
    }

    #[test]
    fn test_vector3_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_vector2(), Vector2::new(1.0, 2.0));
        assert_eq!(v.to_vector4(1.0), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vector3::from(g), v);
    }

    #[test]
    fn test_vector3_display() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "X:1 Y:2.5 Z:-3");
    }

    #[test]
    fn test_vector3_angle_conversion() {
        let r = Vector3::new(180.0, 90.0, 0.0).deg_to_rad();
        assert_abs_diff_eq!(r.x, std::f32::consts::PI, epsilon = 1e-6);
        let back = r.rad_to_deg();
        assert_abs_diff_eq!(back.x, 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(back.y, 90.0, epsilon = 1e-4);
    }
}
