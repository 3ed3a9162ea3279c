//! Value types for 3D math and the intersection algebra between them.
//!
//! Vectors, integer coordinates, quaternions and row-major 4x4 matrices form
//! the data model. Planes, rays and the two bounding volumes build on them and
//! provide intersection and containment tests.
//!
//! Floating types compare with an absolute tolerance of [`EPSILON`] per
//! component. Degenerate input (zero-length vectors, singular matrices,
//! parallel rays) never fails: each operation falls back to a documented
//! value instead.

#[macro_use]
mod macros;

pub mod random;
pub mod scalar;

mod bounding_box;
mod bounding_sphere;
mod color;
mod coord;
mod error;
mod frustum;
mod intersection;
mod interval;
mod matrix;
mod plane;
mod quaternion;
mod ray;
mod vector2;
mod vector3;
mod vector4;

pub use bounding_box::BoundingBox;
pub use bounding_sphere::BoundingSphere;
pub use color::Color;
pub use coord::{Coord2, Coord3};
pub use error::{MathError, MathResult};
pub use frustum::{
    Frustum, PLANE_BOTTOM, PLANE_FAR, PLANE_LEFT, PLANE_NEAR, PLANE_RIGHT, PLANE_TOP,
};
pub use intersection::{ContainmentType, Face, PlaneIntersectionType};
pub use interval::Interval;
pub use matrix::Matrix;
pub use plane::Plane;
pub use quaternion::Quaternion;
pub use ray::Ray;
pub use scalar::EPSILON;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_constants() {
        assert_eq!(Vector2::SIZE_IN_BYTES, 8);
        assert_eq!(Vector3::SIZE_IN_BYTES, 12);
        assert_eq!(Vector4::SIZE_IN_BYTES, 16);
        assert_eq!(Coord2::SIZE_IN_BYTES, 8);
        assert_eq!(Coord3::SIZE_IN_BYTES, 12);
        assert_eq!(Quaternion::SIZE_IN_BYTES, 16);
        assert_eq!(Matrix::SIZE_IN_BYTES, 64);
        assert_eq!(Plane::SIZE_IN_BYTES, 16);
        assert_eq!(Ray::SIZE_IN_BYTES, 28);
        assert_eq!(BoundingBox::SIZE_IN_BYTES, 24);
        assert_eq!(BoundingSphere::SIZE_IN_BYTES, 16);
    }

    #[test]
    fn test_pod_byte_view() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), Vector3::SIZE_IN_BYTES);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &3.0f32.to_ne_bytes());
    }
}
