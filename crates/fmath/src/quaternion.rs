//! Quaternion rotations.
//!
//! Products compose left to right: `a * b` applies `a` first and then `b`,
//! the same order as the row-vector matrix product
//! `Matrix::rotation_quaternion(a) * Matrix::rotation_quaternion(b)`.

use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::scalar::{sign, EPSILON};
use crate::{Matrix, Vector3};

/// A quaternion `(x, y, z, w)` with vector part `xyz` and scalar part `w`.
///
/// Rotations expect unit length, which the type does not enforce.
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_float_tuple!(Quaternion, 4, { x, y, z, w });

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The vector part.
    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse. Returned unchanged when the squared length is
    /// not above [`EPSILON`].
    pub fn invert(self) -> Quaternion {
        let length_sq = self.length_sq();
        if length_sq > EPSILON {
            return self.conjugate() * (1.0 / length_sq);
        }
        self
    }

    /// Unit-length copy. Returned unchanged when the length is not above
    /// [`EPSILON`].
    pub fn normalize(self) -> Quaternion {
        let length = self.length();
        if length > EPSILON {
            return self * (1.0 / length);
        }
        self
    }

    /// Exponential of a pure quaternion (the `w` input is ignored).
    ///
    /// When `sin(|xyz|)` is below [`EPSILON`] the vector part is kept as is.
    pub fn exp(self) -> Quaternion {
        let angle = self.xyz().length();
        let sin = angle.sin();

        let mut result = self;
        if sin.abs() >= EPSILON {
            let coeff = sin / angle;
            result.x = coeff * self.x;
            result.y = coeff * self.y;
            result.z = coeff * self.z;
        }
        result.w = angle.cos();
        result
    }

    /// Logarithm of a unit quaternion. The result has `w = 0`.
    ///
    /// The vector part is kept as is when `|w| >= 1` or when the sine of the
    /// half-angle is below [`EPSILON`].
    pub fn ln(self) -> Quaternion {
        let mut result = self;
        if self.w.abs() < 1.0 {
            let angle = self.w.acos();
            let sin = angle.sin();
            if sin.abs() >= EPSILON {
                let coeff = angle / sin;
                result.x = self.x * coeff;
                result.y = self.y * coeff;
                result.z = self.z * coeff;
            }
        }
        result.w = 0.0;
        result
    }

    /// Normalized linear blend that follows the shorter arc.
    pub fn lerp(start: Quaternion, end: Quaternion, factor: f32) -> Quaternion {
        let inverse = 1.0 - factor;
        let blended = if start.dot(end) >= 0.0 {
            start * inverse + end * factor
        } else {
            start * inverse - end * factor
        };
        blended.normalize()
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Nearly parallel inputs (`|dot| > 1 - EPSILON`) fall back to a
    /// sign-corrected linear blend.
    pub fn slerp(start: Quaternion, end: Quaternion, factor: f32) -> Quaternion {
        let dot = start.dot(end);

        let (inverse, opposite) = if dot.abs() > 1.0 - EPSILON {
            (1.0 - factor, factor * sign(dot))
        } else {
            let acos = dot.abs().acos();
            let inv_sin = 1.0 / acos.sin();
            (
                ((1.0 - factor) * acos).sin() * inv_sin,
                (factor * acos).sin() * inv_sin * sign(dot),
            )
        };

        start * inverse + end * opposite
    }

    /// Spherical barycentric blend of three rotations.
    pub fn barycentric(
        q1: Quaternion,
        q2: Quaternion,
        q3: Quaternion,
        factor1: f32,
        factor2: f32,
    ) -> Quaternion {
        let start = Quaternion::slerp(q1, q2, factor1 + factor2);
        let end = Quaternion::slerp(q1, q3, factor1 + factor2);
        Quaternion::slerp(start, end, factor2 / (factor1 + factor2))
    }

    /// Spherical cubic interpolation between `q2` and `q3`, with `q1` and `q4`
    /// as the inner control points produced by [`Quaternion::squad_setup`].
    pub fn squad(
        q1: Quaternion,
        q2: Quaternion,
        q3: Quaternion,
        q4: Quaternion,
        factor: f32,
    ) -> Quaternion {
        let start = Quaternion::slerp(q1, q4, factor);
        let end = Quaternion::slerp(q2, q3, factor);
        Quaternion::slerp(start, end, 2.0 * factor * (1.0 - factor))
    }

    /// Control points for [`Quaternion::squad`] through four key rotations.
    ///
    /// Neighbouring keys are negated when that brings them closer, so the
    /// curve never takes the long way around.
    pub fn squad_setup(
        q1: Quaternion,
        q2: Quaternion,
        q3: Quaternion,
        q4: Quaternion,
    ) -> [Quaternion; 3] {
        let flip = |a: Quaternion, b: Quaternion| {
            if (a + b).length_sq() < (a - b).length_sq() {
                -b
            } else {
                b
            }
        };

        let p0 = if (q1 + q2).length_sq() < (q1 - q2).length_sq() { -q1 } else { q1 };
        let p1 = q2;
        let p2 = flip(q2, q3);
        let p3 = flip(q3, q4);

        let p1_exp = p1.exp();
        let p2_exp = p2.exp();

        [
            p1 * (((p1_exp * p2).ln() + (p1_exp * p0).ln()) * -0.25).exp(),
            p2 * (((p2_exp * p3).ln() + (p2_exp * p1).ln()) * -0.25).exp(),
            p2,
        ]
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized first.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Quaternion {
        let axis = axis.normalize();
        let half = angle * 0.5;
        let sin = half.sin();
        Quaternion::new(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }

    /// Rotation axis and angle in radians.
    ///
    /// A vector part with squared length below [`EPSILON`] has no defined
    /// axis and yields `(UNIT_X, 0)`.
    pub fn to_axis_angle(self) -> (Vector3, f32) {
        let length_sq = self.xyz().length_sq();
        if length_sq < EPSILON {
            return (Vector3::UNIT_X, 0.0);
        }

        let angle = 2.0 * self.w.acos();
        (self.xyz() * (1.0 / length_sq.sqrt()), angle)
    }

    /// Extracts the rotation of the upper 3x3 block.
    ///
    /// Picks the largest of the trace and the three diagonal terms so the
    /// square root never sees a value near zero.
    pub fn from_matrix(m: &Matrix) -> Quaternion {
        let scale = m.m11 + m.m22 + m.m33;

        if scale > 0.0 {
            let sqrt = (scale + 1.0).sqrt();
            let half = 0.5 / sqrt;
            Quaternion::new(
                (m.m23 - m.m32) * half,
                (m.m31 - m.m13) * half,
                (m.m12 - m.m21) * half,
                sqrt * 0.5,
            )
        } else if m.m11 >= m.m22 && m.m11 >= m.m33 {
            let sqrt = (1.0 + m.m11 - m.m22 - m.m33).sqrt();
            let half = 0.5 / sqrt;
            Quaternion::new(
                0.5 * sqrt,
                (m.m12 + m.m21) * half,
                (m.m13 + m.m31) * half,
                (m.m23 - m.m32) * half,
            )
        } else if m.m22 > m.m33 {
            let sqrt = (1.0 + m.m22 - m.m11 - m.m33).sqrt();
            let half = 0.5 / sqrt;
            Quaternion::new(
                (m.m21 + m.m12) * half,
                0.5 * sqrt,
                (m.m32 + m.m23) * half,
                (m.m31 - m.m13) * half,
            )
        } else {
            let sqrt = (1.0 + m.m33 - m.m11 - m.m22).sqrt();
            let half = 0.5 / sqrt;
            Quaternion::new(
                (m.m31 + m.m13) * half,
                (m.m32 + m.m23) * half,
                0.5 * sqrt,
                (m.m12 - m.m21) * half,
            )
        }
    }

    /// Rotation from pitch (about X), yaw (about Y) and roll (about Z), in
    /// radians. Applies roll, then pitch, then yaw.
    pub fn from_euler_angles(pitch: f32, yaw: f32, roll: f32) -> Quaternion {
        let (sin_roll, cos_roll) = (roll * 0.5).sin_cos();
        let (sin_pitch, cos_pitch) = (pitch * 0.5).sin_cos();
        let (sin_yaw, cos_yaw) = (yaw * 0.5).sin_cos();

        Quaternion::new(
            cos_yaw * sin_pitch * cos_roll + sin_yaw * cos_pitch * sin_roll,
            sin_yaw * cos_pitch * cos_roll - cos_yaw * sin_pitch * sin_roll,
            cos_yaw * cos_pitch * sin_roll - sin_yaw * sin_pitch * cos_roll,
            cos_yaw * cos_pitch * cos_roll + sin_yaw * sin_pitch * sin_roll,
        )
    }

    /// [`Quaternion::from_euler_angles`] with `(pitch, yaw, roll)` packed as
    /// `(x, y, z)`.
    pub fn from_euler_vector(angles: Vector3) -> Quaternion {
        Quaternion::from_euler_angles(angles.x, angles.y, angles.z)
    }

    /// Pitch, yaw and roll packed as `(x, y, z)`, the inverse of
    /// [`Quaternion::from_euler_angles`] away from gimbal lock.
    ///
    /// Pitch goes through `asin`; its argument is clamped to `[-1, 1]` so
    /// round-off at the poles yields `±π/2` instead of NaN.
    pub fn to_euler_angles(self) -> Vector3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let pitch = (-2.0 * (y * z - w * x)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (x * z + w * y)).atan2(w * w - x * x - y * y + z * z);
        let roll = (2.0 * (x * y + w * z)).atan2(w * w - x * x + y * y - z * z);
        Vector3::new(pitch, yaw, roll)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, right: Quaternion) -> Quaternion {
        let (lx, ly, lz, lw) = (self.x, self.y, self.z, self.w);
        let (rx, ry, rz, rw) = (right.x, right.y, right.z, right.w);

        Quaternion::new(
            (rx * lw + lx * rw + ry * lz) - rz * ly,
            (ry * lw + ly * rw + rz * lx) - rx * lz,
            (rz * lw + lz * rw + rx * ly) - ry * lx,
            rw * lw - (rx * lx + ry * ly + rz * lz),
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{} Z:{} W:{}", self.x, self.y, self.z, self.w)
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
