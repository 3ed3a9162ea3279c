//! Planes in implicit form `dot(normal, p) + d = 0`.

use std::fmt;

use crate::scalar::EPSILON;
use crate::{BoundingBox, BoundingSphere, Matrix, PlaneIntersectionType, Ray, Vector3, Vector4};

/// A plane with normal `normal` and signed offset `d`.
///
/// Most queries assume a unit normal. Only [`Plane::from_points`] and
/// [`Plane::normalize`] produce one; the other constructors store what they
/// are given.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Plane {
    pub normal: Vector3,
    pub d: f32,
}

impl Plane {
    pub const SIZE_IN_BYTES: usize = std::mem::size_of::<Plane>();

    #[inline]
    pub const fn new(normal: Vector3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane `a*x + b*y + c*z + d = 0`.
    #[inline]
    pub const fn from_components(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::new(Vector3::new(a, b, c), d)
    }

    /// `xyz` is the normal and `w` the offset.
    pub fn from_vector4(v: Vector4) -> Self {
        Self::new(v.to_vector3(), v.w)
    }

    /// Plane through `point` with the given normal.
    pub fn from_point_normal(point: Vector3, normal: Vector3) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// Plane through three points, wound so the normal is
    /// `(p2 - p1) x (p3 - p1)` normalized.
    ///
    /// Collinear or repeated points give a zero cross product, and the
    /// resulting plane is NaN in every component.
    pub fn from_points(p1: Vector3, p2: Vector3, p3: Vector3) -> Self {
        let cross = (p2 - p1).cross(p3 - p1);
        let normal = cross * (1.0 / cross.length());
        Self::new(normal, -normal.dot(p1))
    }

    /// `dot(normal, xyz) + d * w`.
    #[inline]
    pub fn dot(&self, v: Vector4) -> f32 {
        self.normal.x * v.x + self.normal.y * v.y + self.normal.z * v.z + self.d * v.w
    }

    /// Signed distance of `point` from the plane, scaled by the normal length.
    #[inline]
    pub fn dot_coordinate(&self, point: Vector3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Dot product with the normal only, ignoring `d`.
    #[inline]
    pub fn dot_normal(&self, v: Vector3) -> f32 {
        self.normal.dot(v)
    }

    /// Scales the normal to unit length and `d` with it. A zero normal
    /// produces a NaN plane.
    pub fn normalize(&self) -> Plane {
        let inv_length = 1.0 / self.normal.length();
        Plane::new(self.normal * inv_length, self.d * inv_length)
    }

    pub fn scale(&self, factor: f32) -> Plane {
        Plane::new(self.normal * factor, self.d * factor)
    }

    /// Moves the plane by `m`.
    ///
    /// Planes transform as row covectors, which needs the inverse of `m`.
    /// It is computed here, so the caller's matrix is left untouched. A
    /// singular `m` yields the zero plane.
    pub fn transform(&self, m: &Matrix) -> Plane {
        let inv = m.invert();
        let Vector3 { x, y, z } = self.normal;
        let d = self.d;

        Plane::new(
            Vector3::new(
                x * inv.m11 + y * inv.m12 + z * inv.m13 + d * inv.m14,
                x * inv.m21 + y * inv.m22 + z * inv.m23 + d * inv.m24,
                x * inv.m31 + y * inv.m32 + z * inv.m33 + d * inv.m34,
            ),
            x * inv.m41 + y * inv.m42 + z * inv.m43 + d * inv.m44,
        )
    }

    /// Which side of the plane `point` lies on. Points within
    /// [`EPSILON`] of the plane are `Intersecting`.
    pub fn intersects_point(&self, point: Vector3) -> PlaneIntersectionType {
        let distance = self.dot_coordinate(point);
        if distance > EPSILON {
            PlaneIntersectionType::Front
        } else if distance < -EPSILON {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> PlaneIntersectionType {
        let distance = self.dot_coordinate(sphere.center);
        if distance > sphere.radius {
            PlaneIntersectionType::Front
        } else if distance < -sphere.radius {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    /// Classifies a box by its two corners furthest along and against the
    /// normal.
    pub fn intersects_box(&self, bbox: &BoundingBox) -> PlaneIntersectionType {
        let (min, max) = (bbox.minimum, bbox.maximum);
        let n = self.normal;

        // Corner furthest along the normal, and the one furthest against it.
        let p_vertex = Vector3::new(
            if n.x < 0.0 { min.x } else { max.x },
            if n.y < 0.0 { min.y } else { max.y },
            if n.z < 0.0 { min.z } else { max.z },
        );
        let n_vertex = Vector3::new(
            if n.x < 0.0 { max.x } else { min.x },
            if n.y < 0.0 { max.y } else { min.y },
            if n.z < 0.0 { max.z } else { min.z },
        );

        if self.dot_coordinate(n_vertex) > 0.0 {
            PlaneIntersectionType::Front
        } else if self.dot_coordinate(p_vertex) < 0.0 {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    /// Distance along `ray` to the plane; see [`Ray::intersects_plane`].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<f32> {
        ray.intersects_plane(self)
    }

    /// Mirror transform across this plane; see [`Matrix::reflection`].
    pub fn reflection_matrix(&self) -> Matrix {
        Matrix::reflection(self)
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && (self.d - other.d).abs() < EPSILON
    }
}

impl From<Vector4> for Plane {
    fn from(v: Vector4) -> Self {
        Self::from_vector4(v)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal:{} D:{}", self.normal, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, 2.0, 1.0),
            Vector3::new(1.0, 2.0, 0.0),
        );
        assert_eq!(plane.normal, Vector3::UNIT_Y);
        assert_eq!(plane.d, -2.0);
        assert_eq!(plane.dot_coordinate(Vector3::new(5.0, 2.0, -3.0)), 0.0);
    }

    #[test]
    fn test_plane_from_collinear_points_is_nan() {
        let plane = Plane::from_points(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_X * 2.0);
        assert!(plane.normal.x.is_nan());
        assert!(plane.d.is_nan());
    }

    #[test]
    fn test_plane_constructors() {
        let a = Plane::from_point_normal(Vector3::new(0.0, 0.0, 3.0), Vector3::UNIT_Z);
        let b = Plane::from_components(0.0, 0.0, 1.0, -3.0);
        let c = Plane::from_vector4(Vector4::new(0.0, 0.0, 1.0, -3.0));
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(Plane::from(Vector4::new(0.0, 0.0, 1.0, -3.0)), a);
    }

    #[test]
    fn test_plane_dots() {
        let plane = Plane::new(Vector3::UNIT_X, -1.0);
        assert_eq!(plane.dot(Vector4::new(3.0, 9.0, 9.0, 1.0)), 2.0);
        assert_eq!(plane.dot(Vector4::new(3.0, 9.0, 9.0, 0.0)), 3.0);
        assert_eq!(plane.dot_coordinate(Vector3::new(3.0, 0.0, 0.0)), 2.0);
        assert_eq!(plane.dot_normal(Vector3::new(3.0, 0.0, 0.0)), 3.0);
    }

    #[test]
    fn test_plane_normalize_and_scale() {
        let plane = Plane::new(Vector3::new(0.0, 3.0, 4.0), 10.0).normalize();
        assert_eq!(plane.normal, Vector3::new(0.0, 0.6, 0.8));
        assert_eq!(plane.d, 2.0);
        assert_eq!(plane.scale(2.0).d, 4.0);
    }

    #[test]
    fn test_plane_transform_translation() {
        let plane = Plane::new(Vector3::UNIT_Y, 0.0);
        let m = Matrix::translation(0.0, 3.0, 0.0);
        let moved = plane.transform(&m);
        assert_eq!(moved.normal, Vector3::UNIT_Y);
        assert_eq!(moved.d, -3.0);
        assert_eq!(moved.dot_coordinate(Vector3::new(7.0, 3.0, 1.0)), 0.0);
        // The argument is not inverted in place.
        assert_eq!(m, Matrix::translation(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_plane_transform_keeps_points_on_plane() {
        let plane = Plane::from_points(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let m = Matrix::rotation_euler_angles(0.4, -0.2, 0.9) * Matrix::translation(2.0, -1.0, 0.5);
        let moved = plane.transform(&m);
        let p = Vector3::new(0.2, 0.3, 0.5).transform(&m);
        assert_abs_diff_eq!(moved.dot_coordinate(p), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::new(Vector3::UNIT_Y, 0.0);
        assert_eq!(plane.intersects_point(Vector3::UNIT_Y), PlaneIntersectionType::Front);
        assert_eq!(plane.intersects_point(-Vector3::UNIT_Y), PlaneIntersectionType::Back);
        assert_eq!(plane.intersects_point(Vector3::UNIT_X), PlaneIntersectionType::Intersecting);
    }

    #[test]
    fn test_plane_classify_sphere() {
        let plane = Plane::new(Vector3::UNIT_Y, 0.0);
        let sphere = |y| BoundingSphere::new(Vector3::new(0.0, y, 0.0), 1.0);
        assert_eq!(plane.intersects_sphere(&sphere(2.0)), PlaneIntersectionType::Front);
        assert_eq!(plane.intersects_sphere(&sphere(-2.0)), PlaneIntersectionType::Back);
        assert_eq!(plane.intersects_sphere(&sphere(0.5)), PlaneIntersectionType::Intersecting);
        assert_eq!(plane.intersects_sphere(&sphere(1.0)), PlaneIntersectionType::Intersecting);
    }

    #[test]
    fn test_plane_classify_box() {
        let plane = Plane::new(Vector3::new(1.0, 1.0, 0.0).normalize(), 0.0);
        let ahead = BoundingBox::new(Vector3::new(1.0, 1.0, 0.0), Vector3::new(2.0, 2.0, 1.0));
        let behind = BoundingBox::new(Vector3::new(-2.0, -2.0, 0.0), Vector3::new(-1.0, -1.0, 1.0));
        let across = BoundingBox::new(Vector3::splat(-1.0), Vector3::splat(1.0));
        assert_eq!(plane.intersects_box(&ahead), PlaneIntersectionType::Front);
        assert_eq!(plane.intersects_box(&behind), PlaneIntersectionType::Back);
        assert_eq!(plane.intersects_box(&across), PlaneIntersectionType::Intersecting);
    }

    #[test]
    fn test_plane_intersects_ray() {
        let plane = Plane::new(Vector3::UNIT_Z, 0.0);
        let ray = Ray::new(Vector3::new(0.0, 0.0, -4.0), Vector3::UNIT_Z);
        assert_eq!(plane.intersects_ray(&ray), Some(4.0));
    }

    #[test]
    fn test_plane_reflection_matrix() {
        let plane = Plane::new(Vector3::UNIT_X, 0.0);
        let p = Vector3::new(2.0, 1.0, 1.0).transform(&plane.reflection_matrix());
        assert_eq!(p, Vector3::new(-2.0, 1.0, 1.0));
    }

    #[test]
    fn test_plane_display() {
        let plane = Plane::new(Vector3::UNIT_Y, -2.5);
        assert_eq!(plane.to_string(), "Normal:X:0 Y:1 Z:0 D:-2.5");
    }
}
