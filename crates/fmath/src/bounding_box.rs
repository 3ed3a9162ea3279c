//! Axis-aligned bounding boxes.

use std::fmt;

use crate::{
    BoundingSphere, ContainmentType, Face, MathError, MathResult, Matrix, Plane,
    PlaneIntersectionType, Ray, Vector3,
};

/// An axis-aligned box spanning `minimum..=maximum`.
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct BoundingBox {
    pub minimum: Vector3,
    pub maximum: Vector3,
}

impl BoundingBox {
    pub const SIZE_IN_BYTES: usize = std::mem::size_of::<BoundingBox>();

    /// An inverted box that any [`add_point`](Self::add_point) or
    /// [`merge`](Self::merge) replaces.
    pub const MIN_VALUE: BoundingBox = BoundingBox::new(Vector3::MAX_VALUE, Vector3::MIN_VALUE);

    /// The largest representable box.
    pub const MAX_VALUE: BoundingBox = BoundingBox::new(Vector3::MIN_VALUE, Vector3::MAX_VALUE);

    #[inline]
    pub const fn new(minimum: Vector3, maximum: Vector3) -> Self {
        Self { minimum, maximum }
    }

    /// Smallest box holding every point.
    ///
    /// Fails with [`MathError::EmptyPointSet`] when `points` is empty.
    pub fn from_points(points: &[Vector3]) -> MathResult<Self> {
        if points.is_empty() {
            log::debug!("bounding box requested for an empty point set");
            return Err(MathError::EmptyPointSet);
        }

        let mut result = BoundingBox::MIN_VALUE;
        for &point in points {
            result.add_point(point);
        }
        Ok(result)
    }

    pub fn width(&self) -> f32 {
        self.maximum.x - self.minimum.x
    }

    pub fn height(&self) -> f32 {
        self.maximum.y - self.minimum.y
    }

    pub fn depth(&self) -> f32 {
        self.maximum.z - self.minimum.z
    }

    pub fn center(&self) -> Vector3 {
        (self.minimum + self.maximum) * 0.5
    }

    /// The eight corners: the `+Z` face first, then the `-Z` face, each wound
    /// top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vector3; 8] {
        let (min, max) = (self.minimum, self.maximum);
        [
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, min.y, min.z),
        ]
    }

    /// Grows the box to include `point`.
    pub fn add_point(&mut self, point: Vector3) {
        self.minimum = self.minimum.minimize(point);
        self.maximum = self.maximum.maximize(point);
    }

    /// Smallest box holding both boxes.
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.minimum.minimize(other.minimum),
            self.maximum.maximize(other.maximum),
        )
    }

    /// Sphere through the corners, centred on the box.
    pub fn to_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.minimum.distance(self.maximum) * 0.5)
    }

    /// Box bounding the eight transformed corners.
    pub fn transform(&self, m: &Matrix) -> BoundingBox {
        let mut result = BoundingBox::MIN_VALUE;
        for corner in self.corners() {
            result.add_point(corner.transform(m));
        }
        result
    }

    /// Whether `point` is inside or on the surface.
    pub fn intersects_point(&self, point: Vector3) -> bool {
        self.minimum.x <= point.x
            && point.x <= self.maximum.x
            && self.minimum.y <= point.y
            && point.y <= self.maximum.y
            && self.minimum.z <= point.z
            && point.z <= self.maximum.z
    }

    /// `Contains` for points inside or on the surface, `Disjoint` otherwise.
    pub fn contains_point(&self, point: Vector3) -> ContainmentType {
        if self.intersects_point(point) {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }

    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        plane.intersects_box(self)
    }

    /// Entry distance of `ray`; see [`Ray::intersects_box`].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<f32> {
        ray.intersects_box(self)
    }

    /// Tests `ray` against the six face planes and keeps the nearest hit that
    /// lands inside its face.
    ///
    /// The planes are visited Front (`+Z`), Back (`-Z`), Right (`+X`),
    /// Left (`-X`), Top (`+Y`), Bottom (`-Y`). On a tie the earlier face wins.
    pub fn intersects_ray_face(&self, ray: &Ray) -> Option<(Face, Vector3)> {
        let (min, max) = (self.minimum, self.maximum);
        let within = |lo: f32, v: f32, hi: f32| v >= lo && v <= hi;

        let faces = [
            (Face::Front, Plane::from_point_normal(max, Vector3::UNIT_Z)),
            (Face::Back, Plane::from_point_normal(min, -Vector3::UNIT_Z)),
            (Face::Right, Plane::from_point_normal(max, Vector3::UNIT_X)),
            (Face::Left, Plane::from_point_normal(min, -Vector3::UNIT_X)),
            (Face::Top, Plane::from_point_normal(max, Vector3::UNIT_Y)),
            (Face::Bottom, Plane::from_point_normal(min, -Vector3::UNIT_Y)),
        ];

        let mut best: Option<(Face, Vector3)> = None;
        let mut best_distance = f32::INFINITY;

        for (face, plane) in faces {
            let Some(point) = ray.intersects_plane_point(&plane) else {
                continue;
            };

            let on_face = match face {
                Face::Front | Face::Back => {
                    within(min.x, point.x, max.x) && within(min.y, point.y, max.y)
                }
                Face::Right | Face::Left => {
                    within(min.y, point.y, max.y) && within(min.z, point.z, max.z)
                }
                _ => within(min.x, point.x, max.x) && within(min.z, point.z, max.z),
            };
            if !on_face {
                continue;
            }

            let distance = ray.origin.distance(point);
            if distance < best_distance {
                best_distance = distance;
                best = Some((face, point));
            }
        }

        best
    }

    /// Whether the sphere touches the box: the point of the box nearest the
    /// centre lies within the radius.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let nearest = sphere.center.clamp(self.minimum, self.maximum);
        sphere.center.distance_sq(nearest) <= sphere.radius * sphere.radius
    }

    /// `Contains` only when the sphere clears every face by its radius.
    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> ContainmentType {
        if !self.intersects_sphere(sphere) {
            return ContainmentType::Disjoint;
        }

        let (c, r) = (sphere.center, sphere.radius);
        let (min, max) = (self.minimum, self.maximum);
        let fits = self.width() > r
            && self.height() > r
            && self.depth() > r
            && min.x + r <= c.x
            && c.x <= max.x - r
            && min.y + r <= c.y
            && c.y <= max.y - r
            && min.z + r <= c.z
            && c.z <= max.z - r;

        if fits {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Overlap test, inclusive of touching faces.
    pub fn intersects_box(&self, other: &BoundingBox) -> bool {
        !(self.maximum.x < other.minimum.x
            || self.minimum.x > other.maximum.x
            || self.maximum.y < other.minimum.y
            || self.minimum.y > other.maximum.y
            || self.maximum.z < other.minimum.z
            || self.minimum.z > other.maximum.z)
    }

    pub fn contains_box(&self, other: &BoundingBox) -> ContainmentType {
        if !self.intersects_box(other) {
            return ContainmentType::Disjoint;
        }

        let inside = self.minimum.x <= other.minimum.x
            && other.maximum.x <= self.maximum.x
            && self.minimum.y <= other.minimum.y
            && other.maximum.y <= self.maximum.y
            && self.minimum.z <= other.minimum.z
            && other.maximum.z <= self.maximum.z;

        if inside {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minimum:{} Maximum:{}", self.minimum, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vector3::ZERO, Vector3::ONE)
    }

    #[test]
    fn test_box_dimensions() {
        let b = BoundingBox::new(Vector3::new(-1.0, 0.0, 2.0), Vector3::new(3.0, 2.0, 3.0));
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 2.0);
        assert_eq!(b.depth(), 1.0);
        assert_eq!(b.center(), Vector3::new(1.0, 1.0, 2.5));
    }

    #[test]
    fn test_box_corners_order() {
        let corners = unit_box().corners();
        assert_eq!(corners[0], Vector3::new(0.0, 1.0, 1.0));
        assert_eq!(corners[1], Vector3::ONE);
        assert_eq!(corners[3], Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(corners[6], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(corners[7], Vector3::ZERO);
    }

    #[test]
    fn test_box_from_points() {
        let points = [
            Vector3::new(1.0, -2.0, 0.5),
            Vector3::new(-3.0, 4.0, 0.0),
            Vector3::new(0.0, 0.0, 9.0),
        ];
        let b = BoundingBox::from_points(&points).unwrap();
        assert_eq!(b.minimum, Vector3::new(-3.0, -2.0, 0.0));
        assert_eq!(b.maximum, Vector3::new(1.0, 4.0, 9.0));
        for p in points {
            assert!(b.intersects_point(p));
        }
    }

    #[test]
    fn test_box_from_empty_points() {
        assert_eq!(BoundingBox::from_points(&[]), Err(MathError::EmptyPointSet));
    }

    #[test]
    fn test_box_add_point_and_merge() {
        let mut b = BoundingBox::MIN_VALUE;
        b.add_point(Vector3::ONE);
        assert_eq!(b, BoundingBox::new(Vector3::ONE, Vector3::ONE));
        b.add_point(Vector3::ZERO);
        assert_eq!(b, unit_box());

        let other = BoundingBox::new(Vector3::splat(-1.0), Vector3::splat(0.5));
        let merged = b.merge(&other);
        assert_eq!(merged, BoundingBox::new(Vector3::splat(-1.0), Vector3::ONE));
        assert_eq!(BoundingBox::MIN_VALUE.merge(&other), other);
    }

    #[test]
    fn test_box_to_sphere() {
        let sphere = BoundingBox::new(Vector3::splat(-1.0), Vector3::ONE).to_bounding_sphere();
        assert_eq!(sphere.center, Vector3::ZERO);
        assert_abs_diff_eq!(sphere.radius, 3.0f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_box_transform() {
        let moved = unit_box().transform(&Matrix::translation(1.0, 2.0, 3.0));
        assert_eq!(moved, BoundingBox::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(2.0, 3.0, 4.0)));

        let rotated = unit_box().transform(&Matrix::rotation_z(std::f32::consts::FRAC_PI_4));
        let half_diag = std::f32::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(rotated.minimum.x, -half_diag, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.maximum.x, half_diag, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.maximum.y, 2.0 * half_diag, epsilon = 1e-6);
    }

    #[test]
    fn test_box_point_is_inclusive() {
        let b = unit_box();
        assert!(b.intersects_point(Vector3::ONE));
        assert!(b.intersects_point(Vector3::splat(0.5)));
        assert!(!b.intersects_point(Vector3::new(1.1, 0.5, 0.5)));
        assert_eq!(b.contains_point(Vector3::ZERO), ContainmentType::Contains);
        assert_eq!(b.contains_point(Vector3::splat(2.0)), ContainmentType::Disjoint);
    }

    #[test]
    fn test_box_plane_and_ray_delegate() {
        let b = unit_box();
        let plane = Plane::new(Vector3::UNIT_X, -0.5);
        assert_eq!(b.intersects_plane(&plane), PlaneIntersectionType::Intersecting);

        let ray = Ray::new(Vector3::new(0.5, 3.0, 0.5), -Vector3::UNIT_Y);
        assert_eq!(b.intersects_ray(&ray), Some(2.0));
    }

    #[test]
    fn test_box_ray_face_from_each_side() {
        let b = unit_box();
        let cases = [
            (Vector3::new(0.5, 0.5, -5.0), Vector3::UNIT_Z, Face::Back, Vector3::new(0.5, 0.5, 0.0)),
            (Vector3::new(0.5, 0.5, 5.0), -Vector3::UNIT_Z, Face::Front, Vector3::new(0.5, 0.5, 1.0)),
            (Vector3::new(5.0, 0.5, 0.5), -Vector3::UNIT_X, Face::Right, Vector3::new(1.0, 0.5, 0.5)),
            (Vector3::new(-5.0, 0.5, 0.5), Vector3::UNIT_X, Face::Left, Vector3::new(0.0, 0.5, 0.5)),
            (Vector3::new(0.5, 5.0, 0.5), -Vector3::UNIT_Y, Face::Top, Vector3::new(0.5, 1.0, 0.5)),
            (Vector3::new(0.5, -5.0, 0.5), Vector3::UNIT_Y, Face::Bottom, Vector3::new(0.5, 0.0, 0.5)),
        ];

        for (origin, direction, face, point) in cases {
            let ray = Ray::new(origin, direction);
            assert_eq!(b.intersects_ray_face(&ray), Some((face, point)), "{face:?}");
        }
    }

    #[test]
    fn test_box_ray_face_miss() {
        let b = unit_box();
        let ray = Ray::new(Vector3::new(3.0, 3.0, -5.0), Vector3::UNIT_Z);
        assert_eq!(b.intersects_ray_face(&ray), None);

        let short = Ray::with_length(Vector3::new(0.5, 0.5, -5.0), Vector3::UNIT_Z, 4.0);
        assert_eq!(b.intersects_ray_face(&short), None);
    }

    #[test]
    fn test_box_sphere() {
        let b = unit_box();
        let inside = BoundingSphere::new(Vector3::splat(0.5), 0.25);
        let poking = BoundingSphere::new(Vector3::new(0.9, 0.5, 0.5), 0.25);
        let touching = BoundingSphere::new(Vector3::new(1.5, 0.5, 0.5), 0.5);
        let apart = BoundingSphere::new(Vector3::splat(5.0), 1.0);

        assert!(b.intersects_sphere(&inside));
        assert!(b.intersects_sphere(&touching));
        assert!(!b.intersects_sphere(&apart));

        assert_eq!(b.contains_sphere(&inside), ContainmentType::Contains);
        assert_eq!(b.contains_sphere(&poking), ContainmentType::Intersects);
        assert_eq!(b.contains_sphere(&apart), ContainmentType::Disjoint);

        // Larger than the box, so it cannot be contained.
        let big = BoundingSphere::new(Vector3::splat(0.5), 2.0);
        assert_eq!(b.contains_sphere(&big), ContainmentType::Intersects);
    }

    #[test]
    fn test_box_box() {
        let b = unit_box();
        let inner = BoundingBox::new(Vector3::splat(0.25), Vector3::splat(0.75));
        let overlapping = BoundingBox::new(Vector3::splat(0.5), Vector3::splat(1.5));
        let touching = BoundingBox::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        let apart = BoundingBox::new(Vector3::splat(2.0), Vector3::splat(3.0));

        assert!(b.intersects_box(&inner));
        assert!(b.intersects_box(&touching));
        assert!(!b.intersects_box(&apart));

        assert_eq!(b.contains_box(&inner), ContainmentType::Contains);
        assert_eq!(b.contains_box(&b), ContainmentType::Contains);
        assert_eq!(b.contains_box(&overlapping), ContainmentType::Intersects);
        assert_eq!(b.contains_box(&apart), ContainmentType::Disjoint);
    }

    #[test]
    fn test_box_display() {
        assert_eq!(
            unit_box().to_string(),
            "Minimum:X:0 Y:0 Z:0 Maximum:X:1 Y:1 Z:1"
        );
    }
}
