//! View frustum culling.
//!
//! Extracts the six clip planes from a view-projection matrix and classifies
//! points, boxes and spheres against them.

use crate::{
    BoundingBox, BoundingSphere, ContainmentType, Matrix, Plane, PlaneIntersectionType, Vector3,
    Vector4,
};

/// A view frustum bounded by six inward-facing planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

/// Plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

impl Frustum {
    /// Extracts the planes of a row-vector view-projection matrix
    /// (`view * projection`) whose clip depth runs from 0 to 1.
    ///
    /// Gribb/Hartmann plane extraction, reading columns because points are
    /// row vectors here. The normals point into the frustum.
    pub fn from_matrix(view_projection: &Matrix) -> Self {
        let x = view_projection.column1();
        let y = view_projection.column2();
        let z = view_projection.column3();
        let w = view_projection.column4();

        let mut planes = [Plane::default(); 6];
        planes[PLANE_LEFT] = plane_from(w + x);
        planes[PLANE_RIGHT] = plane_from(w - x);
        planes[PLANE_BOTTOM] = plane_from(w + y);
        planes[PLANE_TOP] = plane_from(w - y);
        planes[PLANE_NEAR] = plane_from(z);
        planes[PLANE_FAR] = plane_from(w - z);

        Self { planes }
    }

    /// The six planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> Option<&Plane> {
        self.planes.get(index)
    }

    /// True when `point` is on the inner side of every plane.
    pub fn contains_point(&self, point: Vector3) -> bool {
        self.planes.iter().all(|plane| plane.dot_coordinate(point) >= 0.0)
    }

    /// True when the box is at least partially inside.
    ///
    /// Conservative: a box near a frustum corner can pass every plane
    /// without actually overlapping the frustum.
    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        self.contains_box(bbox) != ContainmentType::Disjoint
    }

    pub fn contains_box(&self, bbox: &BoundingBox) -> ContainmentType {
        classify(self.planes.iter().map(|plane| plane.intersects_box(bbox)))
    }

    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> ContainmentType {
        classify(self.planes.iter().map(|plane| plane.intersects_sphere(sphere)))
    }
}

fn plane_from(v: Vector4) -> Plane {
    let plane = Plane::from_vector4(v);
    if plane.normal.length_sq() > 0.0 {
        plane.normalize()
    } else {
        log::trace!("degenerate frustum plane {plane}");
        plane
    }
}

/// `Disjoint` if any plane has the volume behind it, `Contains` if every
/// plane has it in front.
fn classify(sides: impl Iterator<Item = PlaneIntersectionType>) -> ContainmentType {
    let mut result = ContainmentType::Contains;
    for side in sides {
        match side {
            PlaneIntersectionType::Back => return ContainmentType::Disjoint,
            PlaneIntersectionType::Intersecting => result = ContainmentType::Intersects,
            PlaneIntersectionType::Front => {}
        }
    }
    result
}

impl Default for Frustum {
    /// A frustum that accepts everything.
    fn default() -> Self {
        Self {
            planes: [
                Plane::new(Vector3::UNIT_X, f32::MAX),
                Plane::new(-Vector3::UNIT_X, f32::MAX),
                Plane::new(Vector3::UNIT_Y, f32::MAX),
                Plane::new(-Vector3::UNIT_Y, f32::MAX),
                Plane::new(Vector3::UNIT_Z, f32::MAX),
                Plane::new(-Vector3::UNIT_Z, f32::MAX),
            ],
        }
    }
}
