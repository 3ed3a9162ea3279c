//! 4x4 transformation matrices.
//!
//! Storage is row-major (`m11`, `m12`, ... `m44`) and points are row vectors,
//! so `v * A * B` applies `A` first and translation lives in `m41..m43`. That
//! layout is bit-identical to a column-major `glam::Mat4` built for column
//! vectors, which is why the glam conversions are plain array copies.

use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::scalar::EPSILON;
use crate::{MathError, MathResult, Plane, Quaternion, Vector2, Vector3, Vector4};

/// A 4x4 row-major matrix of `f32`.
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix {
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m14: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m24: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
    pub m34: f32,
    pub m41: f32,
    pub m42: f32,
    pub m43: f32,
    pub m44: f32,
}

impl_float_tuple!(Matrix, 16, {
    m11, m12, m13, m14,
    m21, m22, m23, m24,
    m31, m32, m33, m34,
    m41, m42, m43, m44
});

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const ZERO: Matrix = Matrix::splat(0.0);

    pub const IDENTITY: Matrix = Matrix::from_rows(
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    );

    /// Every element set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::from_rows([value; 4], [value; 4], [value; 4], [value; 4])
    }

    pub const fn from_rows(r1: [f32; 4], r2: [f32; 4], r3: [f32; 4], r4: [f32; 4]) -> Self {
        Self {
            m11: r1[0],
            m12: r1[1],
            m13: r1[2],
            m14: r1[3],
            m21: r2[0],
            m22: r2[1],
            m23: r2[2],
            m24: r2[3],
            m31: r3[0],
            m32: r3[1],
            m33: r3[2],
            m34: r3[3],
            m41: r4[0],
            m42: r4[1],
            m43: r4[2],
            m44: r4[3],
        }
    }

    /// Builds a matrix from 16 values in row-major order.
    pub fn from_slice(values: &[f32]) -> MathResult<Self> {
        let array: [f32; 16] = values.try_into().map_err(|_| MathError::InvalidLength {
            expected: 16,
            got: values.len(),
        })?;
        Ok(Self::from(array))
    }

    /// Element at `row` and `column`, both zero-based.
    pub fn get_rc(&self, row: usize, column: usize) -> MathResult<f32> {
        check_rc(row, column)?;
        self.get(row * 4 + column)
    }

    pub fn set_rc(&mut self, row: usize, column: usize, value: f32) -> MathResult<()> {
        check_rc(row, column)?;
        self.set(row * 4 + column, value)
    }

    pub fn row1(&self) -> Vector4 {
        Vector4::new(self.m11, self.m12, self.m13, self.m14)
    }

    pub fn row2(&self) -> Vector4 {
        Vector4::new(self.m21, self.m22, self.m23, self.m24)
    }

    pub fn row3(&self) -> Vector4 {
        Vector4::new(self.m31, self.m32, self.m33, self.m34)
    }

    pub fn row4(&self) -> Vector4 {
        Vector4::new(self.m41, self.m42, self.m43, self.m44)
    }

    pub fn set_row1(&mut self, v: Vector4) {
        (self.m11, self.m12, self.m13, self.m14) = (v.x, v.y, v.z, v.w);
    }

    pub fn set_row2(&mut self, v: Vector4) {
        (self.m21, self.m22, self.m23, self.m24) = (v.x, v.y, v.z, v.w);
    }

    pub fn set_row3(&mut self, v: Vector4) {
        (self.m31, self.m32, self.m33, self.m34) = (v.x, v.y, v.z, v.w);
    }

    pub fn set_row4(&mut self, v: Vector4) {
        (self.m41, self.m42, self.m43, self.m44) = (v.x, v.y, v.z, v.w);
    }

    pub fn column1(&self) -> Vector4 {
        Vector4::new(self.m11, self.m21, self.m31, self.m41)
    }

    pub fn column2(&self) -> Vector4 {
        Vector4::new(self.m12, self.m22, self.m32, self.m42)
    }

    pub fn column3(&self) -> Vector4 {
        Vector4::new(self.m13, self.m23, self.m33, self.m43)
    }

    pub fn column4(&self) -> Vector4 {
        Vector4::new(self.m14, self.m24, self.m34, self.m44)
    }

    pub fn set_column1(&mut self, v: Vector4) {
        (self.m11, self.m21, self.m31, self.m41) = (v.x, v.y, v.z, v.w);
    }

    pub fn set_column2(&mut self, v: Vector4) {
        (self.m12, self.m22, self.m32, self.m42) = (v.x, v.y, v.z, v.w);
    }

    pub fn set_column3(&mut self, v: Vector4) {
        (self.m13, self.m23, self.m33, self.m43) = (v.x, v.y, v.z, v.w);
    }

    pub fn set_column4(&mut self, v: Vector4) {
        (self.m14, self.m24, self.m34, self.m44) = (v.x, v.y, v.z, v.w);
    }

    /// First row, the local X axis.
    pub fn right(&self) -> Vector3 {
        Vector3::new(self.m11, self.m12, self.m13)
    }

    /// Second row, the local Y axis.
    pub fn up(&self) -> Vector3 {
        Vector3::new(self.m21, self.m22, self.m23)
    }

    /// Third row, the local Z axis.
    pub fn forward(&self) -> Vector3 {
        Vector3::new(self.m31, self.m32, self.m33)
    }

    /// Translation part.
    pub fn position(&self) -> Vector3 {
        Vector3::new(self.m41, self.m42, self.m43)
    }

    pub fn set_right(&mut self, v: Vector3) {
        (self.m11, self.m12, self.m13) = (v.x, v.y, v.z);
    }

    pub fn set_up(&mut self, v: Vector3) {
        (self.m21, self.m22, self.m23) = (v.x, v.y, v.z);
    }

    pub fn set_forward(&mut self, v: Vector3) {
        (self.m31, self.m32, self.m33) = (v.x, v.y, v.z);
    }

    pub fn set_position(&mut self, v: Vector3) {
        (self.m41, self.m42, self.m43) = (v.x, v.y, v.z);
    }

    /// Element-wise absolute value.
    pub fn abs(&self) -> Matrix {
        Matrix::from(self.to_array().map(f32::abs))
    }

    pub fn determinant(&self) -> f32 {
        let t1 = self.m33 * self.m44 - self.m34 * self.m43;
        let t2 = self.m32 * self.m44 - self.m34 * self.m42;
        let t3 = self.m32 * self.m43 - self.m33 * self.m42;
        let t4 = self.m31 * self.m44 - self.m34 * self.m41;
        let t5 = self.m31 * self.m43 - self.m33 * self.m41;
        let t6 = self.m31 * self.m42 - self.m32 * self.m41;

        self.m11 * (self.m22 * t1 - self.m23 * t2 + self.m24 * t3)
            - self.m12 * (self.m21 * t1 - self.m23 * t4 + self.m24 * t5)
            + self.m13 * (self.m21 * t2 - self.m22 * t4 + self.m24 * t6)
            - self.m14 * (self.m21 * t3 - self.m22 * t5 + self.m23 * t6)
    }

    /// Inverse by cofactor expansion.
    ///
    /// Returns [`Matrix::ZERO`] when `|det| <= EPSILON`.
    pub fn invert(&self) -> Matrix {
        let m = self;

        let b0 = m.m31 * m.m42 - m.m32 * m.m41;
        let b1 = m.m31 * m.m43 - m.m33 * m.m41;
        let b2 = m.m34 * m.m41 - m.m31 * m.m44;
        let b3 = m.m32 * m.m43 - m.m33 * m.m42;
        let b4 = m.m34 * m.m42 - m.m32 * m.m44;
        let b5 = m.m33 * m.m44 - m.m34 * m.m43;

        let d11 = m.m22 * b5 + m.m23 * b4 + m.m24 * b3;
        let d12 = m.m21 * b5 + m.m23 * b2 + m.m24 * b1;
        let d13 = m.m21 * -b4 + m.m22 * b2 + m.m24 * b0;
        let d14 = m.m21 * b3 + m.m22 * -b1 + m.m23 * b0;

        let det = m.m11 * d11 - m.m12 * d12 + m.m13 * d13 - m.m14 * d14;
        if det.abs() <= EPSILON {
            log::trace!("matrix is singular (det = {det}), inverse is zero");
            return Matrix::ZERO;
        }
        let inv_det = 1.0 / det;

        let a0 = m.m11 * m.m22 - m.m12 * m.m21;
        let a1 = m.m11 * m.m23 - m.m13 * m.m21;
        let a2 = m.m14 * m.m21 - m.m11 * m.m24;
        let a3 = m.m12 * m.m23 - m.m13 * m.m22;
        let a4 = m.m14 * m.m22 - m.m12 * m.m24;
        let a5 = m.m13 * m.m24 - m.m14 * m.m23;

        let d21 = m.m12 * b5 + m.m13 * b4 + m.m14 * b3;
        let d22 = m.m11 * b5 + m.m13 * b2 + m.m14 * b1;
        let d23 = m.m11 * -b4 + m.m12 * b2 + m.m14 * b0;
        let d24 = m.m11 * b3 + m.m12 * -b1 + m.m13 * b0;

        let d31 = m.m42 * a5 + m.m43 * a4 + m.m44 * a3;
        let d32 = m.m41 * a5 + m.m43 * a2 + m.m44 * a1;
        let d33 = m.m41 * -a4 + m.m42 * a2 + m.m44 * a0;
        let d34 = m.m41 * a3 + m.m42 * -a1 + m.m43 * a0;

        let d41 = m.m32 * a5 + m.m33 * a4 + m.m34 * a3;
        let d42 = m.m31 * a5 + m.m33 * a2 + m.m34 * a1;
        let d43 = m.m31 * -a4 + m.m32 * a2 + m.m34 * a0;
        let d44 = m.m31 * a3 + m.m32 * -a1 + m.m33 * a0;

        Matrix::from_rows(
            [d11 * inv_det, -d21 * inv_det, d31 * inv_det, -d41 * inv_det],
            [-d12 * inv_det, d22 * inv_det, -d32 * inv_det, d42 * inv_det],
            [d13 * inv_det, -d23 * inv_det, d33 * inv_det, -d43 * inv_det],
            [-d14 * inv_det, d24 * inv_det, -d34 * inv_det, d44 * inv_det],
        )
    }

    pub fn trace(&self) -> f32 {
        self.m11 + self.m22 + self.m33 + self.m44
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_rows(
            self.column1().to_array(),
            self.column2().to_array(),
            self.column3().to_array(),
            self.column4().to_array(),
        )
    }

    /// Splits an affine matrix into `(scale, rotation, translation)`.
    ///
    /// Scale is the length of each of the first three rows. When any of them
    /// is below `EPSILON` the rotation is reported as identity.
    pub fn to_srt(&self) -> (Vector3, Quaternion, Vector3) {
        let translation = self.position();
        let scale = Vector3::new(
            self.right().length(),
            self.up().length(),
            self.forward().length(),
        );

        if scale.x.abs() < EPSILON || scale.y.abs() < EPSILON || scale.z.abs() < EPSILON {
            log::trace!("degenerate scale {scale} in to_srt, rotation set to identity");
            return (scale, Quaternion::IDENTITY, translation);
        }

        let mut rotation = Matrix::ZERO;
        rotation.set_right(self.right() / scale.x);
        rotation.set_up(self.up() / scale.y);
        rotation.set_forward(self.forward() / scale.z);
        rotation.m44 = 1.0;

        (scale, Quaternion::from_matrix(&rotation), translation)
    }

    pub fn rotation_x(angle: f32) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let mut result = Matrix::IDENTITY;
        result.m22 = cos;
        result.m23 = sin;
        result.m32 = -sin;
        result.m33 = cos;
        result
    }

    pub fn rotation_y(angle: f32) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let mut result = Matrix::IDENTITY;
        result.m11 = cos;
        result.m13 = -sin;
        result.m31 = sin;
        result.m33 = cos;
        result
    }

    pub fn rotation_z(angle: f32) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let mut result = Matrix::IDENTITY;
        result.m11 = cos;
        result.m12 = sin;
        result.m21 = -sin;
        result.m22 = cos;
        result
    }

    /// Rotation of `angle` radians about `axis`, which must be unit length.
    pub fn rotation_axis_angle(axis: Vector3, angle: f32) -> Matrix {
        let Vector3 { x, y, z } = axis;
        let (sin, cos) = angle.sin_cos();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);

        let mut result = Matrix::IDENTITY;
        result.m11 = xx + cos * (1.0 - xx);
        result.m12 = (xy - cos * xy) + sin * z;
        result.m13 = (xz - cos * xz) - sin * y;
        result.m21 = (xy - cos * xy) - sin * z;
        result.m22 = yy + cos * (1.0 - yy);
        result.m23 = (yz - cos * yz) + sin * x;
        result.m31 = (xz - cos * xz) + sin * y;
        result.m32 = (yz - cos * yz) - sin * x;
        result.m33 = zz + cos * (1.0 - zz);
        result
    }

    pub fn rotation_quaternion(rotation: Quaternion) -> Matrix {
        let Quaternion { x, y, z, w } = rotation;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, zw, zx) = (x * y, z * w, z * x);
        let (yw, yz, xw) = (y * w, y * z, x * w);

        let mut result = Matrix::IDENTITY;
        result.m11 = 1.0 - 2.0 * (yy + zz);
        result.m12 = 2.0 * (xy + zw);
        result.m13 = 2.0 * (zx - yw);
        result.m21 = 2.0 * (xy - zw);
        result.m22 = 1.0 - 2.0 * (zz + xx);
        result.m23 = 2.0 * (yz + xw);
        result.m31 = 2.0 * (zx + yw);
        result.m32 = 2.0 * (yz - xw);
        result.m33 = 1.0 - 2.0 * (yy + xx);
        result
    }

    /// Same rotation as [`Quaternion::from_euler_angles`].
    pub fn rotation_euler_angles(pitch: f32, yaw: f32, roll: f32) -> Matrix {
        Matrix::rotation_quaternion(Quaternion::from_euler_angles(pitch, yaw, roll))
    }

    /// Post-multiplies by [`Matrix::rotation_euler_angles`].
    pub fn rotate_euler_angles(&mut self, pitch: f32, yaw: f32, roll: f32) {
        *self *= Matrix::rotation_euler_angles(pitch, yaw, roll);
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Matrix {
        let mut result = Matrix::IDENTITY;
        result.m11 = x;
        result.m22 = y;
        result.m33 = z;
        result
    }

    pub fn scaling_vector(scale: Vector3) -> Matrix {
        Matrix::scaling(scale.x, scale.y, scale.z)
    }

    pub fn scaling_uniform(scale: f32) -> Matrix {
        Matrix::scaling(scale, scale, scale)
    }

    /// Post-multiplies by [`Matrix::scaling`].
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        *self *= Matrix::scaling(x, y, z);
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Matrix {
        let mut result = Matrix::IDENTITY;
        result.m41 = x;
        result.m42 = y;
        result.m43 = z;
        result
    }

    pub fn translation_vector(offset: Vector3) -> Matrix {
        Matrix::translation(offset.x, offset.y, offset.z)
    }

    /// Post-multiplies by [`Matrix::translation`].
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        *self *= Matrix::translation(x, y, z);
    }

    /// Mirror across `plane`, which must be normalized.
    pub fn reflection(plane: &Plane) -> Matrix {
        let Vector3 { x, y, z } = plane.normal;
        let (x2, y2, z2) = (-2.0 * x, -2.0 * y, -2.0 * z);

        Matrix::from_rows(
            [x2 * x + 1.0, y2 * x, z2 * x, 0.0],
            [x2 * y, y2 * y + 1.0, z2 * y, 0.0],
            [x2 * z, y2 * z, z2 * z + 1.0, 0.0],
            [x2 * plane.d, y2 * plane.d, z2 * plane.d, 1.0],
        )
    }

    /// Flattens geometry onto `plane` as seen from `light`.
    ///
    /// A `light.w` of zero is a directional light, one a point light.
    pub fn shadow(light: Vector4, plane: &Plane) -> Matrix {
        let dot = plane.normal.x * light.x
            + plane.normal.y * light.y
            + plane.normal.z * light.z
            + plane.d * light.w;
        let (x, y, z, d) = (-plane.normal.x, -plane.normal.y, -plane.normal.z, -plane.d);

        Matrix::from_rows(
            [x * light.x + dot, x * light.y, x * light.z, x * light.w],
            [y * light.x, y * light.y + dot, y * light.z, y * light.w],
            [z * light.x, z * light.y, z * light.z + dot, z * light.w],
            [d * light.x, d * light.y, d * light.z, d * light.w + dot],
        )
    }

    /// A world matrix at `position` whose Z axis points away from the camera.
    ///
    /// Falls back to `-camera_forward` when the object sits on the camera.
    pub fn billboard(
        position: Vector3,
        camera_position: Vector3,
        camera_up: Vector3,
        camera_forward: Vector3,
    ) -> Matrix {
        let mut difference = position - camera_position;
        let length_sq = difference.length_sq();
        if length_sq < EPSILON {
            difference = -camera_forward;
        } else {
            difference *= 1.0 / length_sq.sqrt();
        }

        let crossed = camera_up.cross(difference).normalize();
        let last = difference.cross(crossed);

        Matrix::from_rows(
            [crossed.x, crossed.y, crossed.z, 0.0],
            [last.x, last.y, last.z, 0.0],
            [difference.x, difference.y, difference.z, 0.0],
            [position.x, position.y, position.z, 1.0],
        )
    }

    /// Uniform scale, then rotation about `rotation_center`, then translation.
    pub fn affine_transformation(
        scaling: f32,
        rotation_center: Vector3,
        rotation: Quaternion,
        translation: Vector3,
    ) -> Matrix {
        Matrix::scaling_uniform(scaling)
            * Matrix::translation_vector(-rotation_center)
            * Matrix::rotation_quaternion(rotation)
            * Matrix::translation_vector(rotation_center)
            * Matrix::translation_vector(translation)
    }

    /// The XY-plane form of [`Matrix::affine_transformation`], rotating about Z.
    pub fn affine_transformation_2d(
        scaling: f32,
        rotation_center: Vector2,
        rotation: f32,
        translation: Vector2,
    ) -> Matrix {
        Matrix::scaling(scaling, scaling, 1.0)
            * Matrix::translation_vector((-rotation_center).to_vector3(0.0))
            * Matrix::rotation_z(rotation)
            * Matrix::translation_vector(rotation_center.to_vector3(0.0))
            * Matrix::translation_vector(translation.to_vector3(0.0))
    }

    /// Scale about `scaling_center` along the axes given by `scaling_rotation`,
    /// then rotate about `rotation_center`, then translate.
    pub fn transformation(
        scaling_center: Vector3,
        scaling_rotation: Quaternion,
        scaling: Vector3,
        rotation_center: Vector3,
        rotation: Quaternion,
        translation: Vector3,
    ) -> Matrix {
        let sr = Matrix::rotation_quaternion(scaling_rotation);

        Matrix::translation_vector(-scaling_center)
            * sr.transpose()
            * Matrix::scaling_vector(scaling)
            * sr
            * Matrix::translation_vector(scaling_center)
            * Matrix::translation_vector(-rotation_center)
            * Matrix::rotation_quaternion(rotation)
            * Matrix::translation_vector(rotation_center)
            * Matrix::translation_vector(translation)
    }

    /// The XY-plane form of [`Matrix::transformation`]. `m33` and `m44` are
    /// forced to one.
    pub fn transformation_2d(
        scaling_center: Vector2,
        scaling_rotation: f32,
        scaling: Vector2,
        rotation_center: Vector2,
        rotation: f32,
        translation: Vector2,
    ) -> Matrix {
        let mut result = Matrix::translation_vector((-scaling_center).to_vector3(0.0))
            * Matrix::rotation_z(-scaling_rotation)
            * Matrix::scaling_vector(scaling.to_vector3(0.0))
            * Matrix::rotation_z(scaling_rotation)
            * Matrix::translation_vector(scaling_center.to_vector3(0.0))
            * Matrix::translation_vector((-rotation_center).to_vector3(0.0))
            * Matrix::rotation_z(rotation)
            * Matrix::translation_vector(rotation_center.to_vector3(0.0))
            * Matrix::translation_vector(translation.to_vector3(0.0));

        result.m33 = 1.0;
        result.m44 = 1.0;
        result
    }

    /// Left-handed view matrix looking from `eye` toward `target`.
    pub fn look_at_lh(eye: Vector3, target: Vector3, up: Vector3) -> Matrix {
        Self::view_from_axes(eye, (target - eye).normalize(), up)
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    pub fn look_at_rh(eye: Vector3, target: Vector3, up: Vector3) -> Matrix {
        Self::view_from_axes(eye, (eye - target).normalize(), up)
    }

    fn view_from_axes(eye: Vector3, z_axis: Vector3, up: Vector3) -> Matrix {
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Matrix::from_rows(
            [x_axis.x, y_axis.x, z_axis.x, 0.0],
            [x_axis.y, y_axis.y, z_axis.y, 0.0],
            [x_axis.z, y_axis.z, z_axis.z, 0.0],
            [-x_axis.dot(eye), -y_axis.dot(eye), -z_axis.dot(eye), 1.0],
        )
    }

    /// Left-handed perspective projection mapping depth to `[0, 1]`.
    ///
    /// `fov_y` is the vertical field of view in radians.
    pub fn perspective_fov_lh(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix {
        let y_scale = 1.0 / (fov_y * 0.5).tan();
        let x_scale = y_scale / aspect;
        let range = z_far / (z_far - z_near);

        Matrix::from_rows(
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, range, 1.0],
            [0.0, 0.0, -range * z_near, 0.0],
        )
    }

    /// Right-handed perspective projection mapping depth to `[0, 1]`.
    pub fn perspective_fov_rh(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix {
        let y_scale = 1.0 / (fov_y * 0.5).tan();
        let x_scale = y_scale / aspect;
        let range = z_far / (z_near - z_far);

        Matrix::from_rows(
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, range, -1.0],
            [0.0, 0.0, range * z_near, 0.0],
        )
    }
}

fn check_rc(row: usize, column: usize) -> MathResult<()> {
    if row >= 4 {
        return Err(MathError::index(row, 4));
    }
    if column >= 4 {
        return Err(MathError::index(column, 4));
    }
    Ok(())
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let a = self.to_array();
        let b = rhs.to_array();
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = a[row * 4] * b[col]
                    + a[row * 4 + 1] * b[4 + col]
                    + a[row * 4 + 2] * b[8 + col]
                    + a[row * 4 + 3] * b[12 + col];
            }
        }
        Matrix::from(out)
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        *self = *self * rhs;
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f32;

    /// Panics when `row` or `column` is not in `0..4`.
    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        assert!(row < 4 && column < 4, "matrix element ({row}, {column}) is out of range");
        &self[row * 4 + column]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && column < 4, "matrix element ({row}, {column}) is out of range");
        &mut self[row * 4 + column]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[M11:{} M12:{} M13:{} M14:{}] [M21:{} M22:{} M23:{} M24:{}] \
             [M31:{} M32:{} M33:{} M34:{}] [M41:{} M42:{} M43:{} M44:{}]",
            self.m11, self.m12, self.m13, self.m14,
            self.m21, self.m22, self.m23, self.m24,
            self.m31, self.m32, self.m33, self.m34,
            self.m41, self.m42, self.m43, self.m44,
        )
    }
}

impl From<glam::Mat4> for Matrix {
    fn from(m: glam::Mat4) -> Self {
        Self::from(m.to_cols_array())
    }
}

impl From<Matrix> for glam::Mat4 {
    fn from(m: Matrix) -> Self {
        glam::Mat4::from_cols_array(&m.to_array())
    }
}
