//! Integer grid coordinates.
//!
//! Arithmetic wraps on overflow. Equality is exact. The ordering helpers
//! (`any_lt`, `any_gt`, ...) succeed when at least one component satisfies the
//! comparison, so they do not form a total order and `PartialOrd` is not
//! implemented.

use std::fmt;

use crate::{Vector2, Vector3};

/// A 2D integer coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Coord2 {
    pub x: i32,
    pub y: i32,
}

/// A 3D integer coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Coord3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl_coord_ops!(Coord2, 2, { x, y });
impl_coord_ops!(Coord3, 3, { x, y, z });

impl Coord2 {
    pub const ZERO: Coord2 = Coord2::splat(0);
    pub const ONE: Coord2 = Coord2::splat(1);
    pub const UNIT_X: Coord2 = Coord2::new(1, 0);
    pub const UNIT_Y: Coord2 = Coord2::new(0, 1);
    pub const MIN_VALUE: Coord2 = Coord2::splat(i32::MIN);
    pub const MAX_VALUE: Coord2 = Coord2::splat(i32::MAX);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value)
    }

    /// Truncates each component toward zero.
    pub fn from_vector(v: Vector2) -> Self {
        v.to_coord2()
    }

    pub fn to_coord3(self, z: i32) -> Coord3 {
        Coord3::new(self.x, self.y, z)
    }

    pub fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x as f32, self.y as f32)
    }
}

impl Coord3 {
    pub const ZERO: Coord3 = Coord3::splat(0);
    pub const ONE: Coord3 = Coord3::splat(1);
    pub const UNIT_X: Coord3 = Coord3::new(1, 0, 0);
    pub const UNIT_Y: Coord3 = Coord3::new(0, 1, 0);
    pub const UNIT_Z: Coord3 = Coord3::new(0, 0, 1);
    pub const MIN_VALUE: Coord3 = Coord3::splat(i32::MIN);
    pub const MAX_VALUE: Coord3 = Coord3::splat(i32::MAX);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Truncates each component toward zero.
    pub fn from_vector(v: Vector3) -> Self {
        v.to_coord3()
    }

    pub fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x as f32, self.y as f32)
    }

    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl fmt::Display for Coord2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}", self.x, self.y)
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

impl From<glam::IVec2> for Coord2 {
    fn from(v: glam::IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Coord2> for glam::IVec2 {
    fn from(c: Coord2) -> Self {
        glam::IVec2::new(c.x, c.y)
    }
}

impl From<glam::IVec3> for Coord3 {
    fn from(v: glam::IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Coord3> for glam::IVec3 {
    fn from(c: Coord3) -> Self {
        glam::IVec3::new(c.x, c.y, c.z)
    }
}
