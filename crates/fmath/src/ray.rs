//! Rays and line segments, and their intersection tests.
//!
//! Every test honours [`Ray::length`]: a hit further than `length` (plus
//! [`EPSILON`]) along the ray is a miss. An infinite ray has
//! `length == f32::INFINITY`.

use std::fmt;

use crate::scalar::EPSILON;
use crate::{BoundingBox, BoundingSphere, Face, Interval, Plane, Vector3};

/// A ray from `origin` along `direction`, clipped at `length`.
///
/// The direction is not normalized by the constructors. Distances returned by
/// the intersection tests are in units of `direction`, so they are world-space
/// distances only for a unit direction.
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
    pub length: f32,
}

/// Determinant of the 3x3 matrix with rows `a`, `b` and `c`.
#[inline]
fn det3(a: Vector3, b: Vector3, c: Vector3) -> f32 {
    a.x * b.y * c.z + a.y * b.z * c.x + a.z * b.x * c.y
        - a.x * b.z * c.y
        - a.y * b.x * c.z
        - a.z * b.y * c.x
}

impl Ray {
    pub const SIZE_IN_BYTES: usize = std::mem::size_of::<Ray>();

    /// An infinite ray.
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self::with_length(origin, direction, f32::INFINITY)
    }

    /// A segment of `length` units of `direction`.
    pub const fn with_length(origin: Vector3, direction: Vector3, length: f32) -> Self {
        Self {
            origin,
            direction,
            length,
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.length == f32::INFINITY
    }

    /// `origin + direction * length`. Not finite for an infinite ray.
    pub fn end(&self) -> Vector3 {
        self.origin + self.direction * self.length
    }

    /// Re-aims the ray at `point`, making it a unit-direction segment that
    /// ends there.
    pub fn set_end(&mut self, point: Vector3) {
        let line = point - self.origin;
        self.length = line.length();
        self.direction = line.normalize();
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Whether `point` lies on the ray within [`EPSILON`].
    ///
    /// Assumes a unit direction.
    pub fn intersects_point(&self, point: Vector3) -> bool {
        let m = self.origin - point;
        let b = m.dot(self.direction);
        let c = m.dot(m) - EPSILON;

        // Point is behind the origin.
        if c > 0.0 && b > 0.0 {
            return false;
        }
        if b * b - c < 0.0 {
            return false;
        }
        self.length >= m.length() - EPSILON
    }

    /// The point where two rays meet.
    ///
    /// Solves for the closest points of the two carrier lines and accepts
    /// them only when they coincide within [`EPSILON`] and lie within both
    /// lengths. Parallel rays meet only when their origins coincide, in which
    /// case the shared origin is returned.
    pub fn intersects_ray(&self, other: &Ray) -> Option<Vector3> {
        let cross = self.direction.cross(other.direction);
        let denominator = cross.length_sq();

        if denominator.sqrt() < EPSILON {
            let offset = other.origin - self.origin;
            if offset.x.abs() < EPSILON && offset.y.abs() < EPSILON && offset.z.abs() < EPSILON {
                return Some(self.origin);
            }
            log::trace!("parallel rays with distinct origins do not meet");
            return None;
        }

        let offset = other.origin - self.origin;
        let s = det3(offset, other.direction, cross) / denominator;
        let t = det3(offset, self.direction, cross) / denominator;

        if self.length < s - EPSILON || other.length < t - EPSILON {
            return None;
        }

        let p1 = self.at(s);
        let p2 = other.at(t);
        let gap = p2 - p1;
        if gap.x.abs() > EPSILON || gap.y.abs() > EPSILON || gap.z.abs() > EPSILON {
            return None;
        }
        Some(p1)
    }

    /// Distance along the ray to `plane`.
    ///
    /// A ray parallel to the plane misses. A hit up to [`EPSILON`] behind the
    /// origin is reported at distance zero.
    pub fn intersects_plane(&self, plane: &Plane) -> Option<f32> {
        let direction = plane.normal.dot(self.direction);
        if direction.abs() < EPSILON {
            return None;
        }

        let position = plane.normal.dot(self.origin);
        let distance = (-plane.d - position) / direction;

        if distance < 0.0 {
            if distance < -EPSILON {
                return None;
            }
            return Some(0.0);
        }
        if self.length < distance - EPSILON {
            return None;
        }
        Some(distance)
    }

    pub fn intersects_plane_point(&self, plane: &Plane) -> Option<Vector3> {
        self.intersects_plane(plane).map(|distance| self.at(distance))
    }

    /// Distance along the ray to the first point on `sphere`.
    ///
    /// An origin inside the sphere reports distance zero. Assumes a unit
    /// direction.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> Option<f32> {
        let v = self.origin - sphere.center;
        let b = v.dot(self.direction);
        let c = v.dot(v) - sphere.radius * sphere.radius;

        // Outside and pointing away.
        if c > 0.0 && b > 0.0 {
            return None;
        }

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let distance = -b - discriminant.sqrt();
        if distance < 0.0 {
            return Some(0.0);
        }
        if self.length < distance - EPSILON {
            return None;
        }
        Some(distance)
    }

    pub fn intersects_sphere_point(&self, sphere: &BoundingSphere) -> Option<Vector3> {
        self.intersects_sphere(sphere).map(|distance| self.at(distance))
    }

    /// Entry distance into `bbox` by the slab method. An origin inside the box
    /// reports distance zero.
    pub fn intersects_box(&self, bbox: &BoundingBox) -> Option<f32> {
        let (o, d) = (self.origin, self.direction);
        let (min, max) = (bbox.minimum, bbox.maximum);

        let mut t = Interval::FORWARD;
        if !t.intersect_slab(o.x, d.x, min.x, max.x)
            || !t.intersect_slab(o.y, d.y, min.y, max.y)
            || !t.intersect_slab(o.z, d.z, min.z, max.z)
        {
            return None;
        }

        if self.length < t.min - EPSILON {
            return None;
        }
        Some(t.min)
    }

    pub fn intersects_box_point(&self, bbox: &BoundingBox) -> Option<Vector3> {
        self.intersects_box(bbox).map(|distance| self.at(distance))
    }

    /// Nearest face of `bbox` the ray strikes, and the hit point; see
    /// [`BoundingBox::intersects_ray_face`].
    pub fn intersects_box_face(&self, bbox: &BoundingBox) -> Option<(Face, Vector3)> {
        bbox.intersects_ray_face(self)
    }
}

impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.direction == other.direction
            && (self.length == other.length || (self.length - other.length).abs() < EPSILON)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "Origin:{} Direction:{}", self.origin, self.direction)
        } else {
            write!(
                f,
                "Origin:{} Length:{} End:{}",
                self.origin,
                self.length,
                self.end()
            )
        }
    }
}
