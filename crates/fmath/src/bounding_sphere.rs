//! Bounding spheres.

use std::fmt;

use crate::scalar::EPSILON;
use crate::{
    BoundingBox, ContainmentType, MathError, MathResult, Plane, PlaneIntersectionType, Ray,
    Vector3,
};

/// A sphere of `radius` around `center`.
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct BoundingSphere {
    pub center: Vector3,
    pub radius: f32,
}

impl BoundingSphere {
    pub const SIZE_IN_BYTES: usize = std::mem::size_of::<BoundingSphere>();

    /// Origin-centred sphere with the most negative radius.
    pub const MIN_VALUE: BoundingSphere = BoundingSphere::new(Vector3::ZERO, f32::MIN);

    /// Origin-centred sphere with the largest radius.
    pub const MAX_VALUE: BoundingSphere = BoundingSphere::new(Vector3::ZERO, f32::MAX);

    #[inline]
    pub const fn new(center: Vector3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere around the bounding box of `points`: centred on the box with
    /// half its diagonal as radius. Not the minimal enclosing sphere.
    ///
    /// Fails with [`MathError::EmptyPointSet`] when `points` is empty.
    pub fn from_points(points: &[Vector3]) -> MathResult<Self> {
        if points.is_empty() {
            log::debug!("bounding sphere requested for an empty point set");
            return Err(MathError::EmptyPointSet);
        }

        let (min, max) = points.iter().fold(
            (Vector3::MAX_VALUE, Vector3::MIN_VALUE),
            |(min, max), &p| (min.minimize(p), max.maximize(p)),
        );
        Ok(BoundingSphere::new(min.lerp(max, 0.5), min.distance(max) * 0.5))
    }

    /// Combines two spheres.
    ///
    /// The radius is `(r1 + r2 + |c2 - c1|) / 2` and the centre is
    /// `lerp(c1, c2, radius - r1)`. The lerp factor is not divided by the
    /// centre distance, so the centre is only exact for unit-distance
    /// centres or coincident ones.
    pub fn merge(&self, other: &BoundingSphere) -> BoundingSphere {
        let center_distance = self.center.distance(other.center);
        let radius = (self.radius + other.radius + center_distance) * 0.5;
        BoundingSphere::new(self.center.lerp(other.center, radius - self.radius), radius)
    }

    /// Cube of side `2 * radius` around the centre.
    pub fn to_bounding_box(&self) -> BoundingBox {
        let extent = Vector3::splat(self.radius);
        BoundingBox::new(self.center - extent, self.center + extent)
    }

    /// Whether `point` is strictly inside; the surface does not count.
    pub fn intersects_point(&self, point: Vector3) -> bool {
        point.distance_sq(self.center) < self.radius * self.radius
    }

    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        plane.intersects_sphere(self)
    }

    /// Entry distance of `ray`; see [`Ray::intersects_sphere`].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<f32> {
        ray.intersects_sphere(self)
    }

    /// Overlap test. Spheres that only touch do not intersect.
    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    pub fn contains_sphere(&self, other: &BoundingSphere) -> ContainmentType {
        let distance = self.center.distance(other.center);
        if self.radius >= distance + other.radius {
            ContainmentType::Contains
        } else if distance < self.radius + other.radius {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        bbox.intersects_sphere(self)
    }

    /// `Contains` only when all eight corners of `bbox` lie within the radius.
    pub fn contains_box(&self, bbox: &BoundingBox) -> ContainmentType {
        if !bbox.intersects_sphere(self) {
            return ContainmentType::Disjoint;
        }

        let radius_sq = self.radius * self.radius;
        if bbox
            .corners()
            .iter()
            .any(|&corner| self.center.distance_sq(corner) > radius_sq)
        {
            return ContainmentType::Intersects;
        }
        ContainmentType::Contains
    }
}

impl PartialEq for BoundingSphere {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && (self.radius - other.radius).abs() < EPSILON
    }
}

impl fmt::Display for BoundingSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Center:{} Radius:{}", self.center, self.radius)
    }
}
