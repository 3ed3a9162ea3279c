//! Classification results shared by the intersection tests.

/// How one volume relates to another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainmentType {
    /// No overlap.
    Disjoint,
    /// Fully enclosed.
    Contains,
    /// Partial overlap.
    Intersects,
}

/// Which side of a plane a point or volume lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneIntersectionType {
    /// Entirely on the side opposite the normal.
    Back,
    /// Entirely on the side the normal points to.
    Front,
    /// Straddles the plane.
    Intersecting,
}

/// Face of an axis-aligned box.
///
/// Front is the +Z face, Back the -Z face, Right +X, Left -X, Top +Y and
/// Bottom -Y.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Face {
    #[default]
    None = 0,
    Front = 1,
    Left = 2,
    Back = 3,
    Right = 4,
    Top = 5,
    Bottom = 6,
}
