//! Operator boilerplate shared by the vector, coordinate and quaternion types.

/// Component-wise arithmetic, epsilon equality and indexing for a float tuple.
macro_rules! impl_float_tuple {
    ($t:ident, $n:literal, { $($f:ident),+ }) => {
        impl $t {
            /// Size of the value in bytes.
            pub const SIZE_IN_BYTES: usize = std::mem::size_of::<$t>();

            /// Components as a fixed-size array.
            #[inline]
            pub fn to_array(&self) -> [f32; $n] {
                *self.as_array()
            }

            #[inline]
            fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            /// Component at `index`, or an error when it is out of range.
            pub fn get(&self, index: usize) -> $crate::MathResult<f32> {
                self.as_array()
                    .get(index)
                    .copied()
                    .ok_or($crate::MathError::index(index, $n))
            }

            /// Overwrites the component at `index`.
            pub fn set(&mut self, index: usize, value: f32) -> $crate::MathResult<()> {
                match self.as_array_mut().get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err($crate::MathError::index(index, $n)),
                }
            }
        }

        impl PartialEq for $t {
            /// Component-wise comparison within [`EPSILON`](crate::EPSILON).
            fn eq(&self, other: &Self) -> bool {
                true $(&& (self.$f - other.$f).abs() < $crate::EPSILON)+
            }
        }

        impl std::ops::Index<usize> for $t {
            type Output = f32;

            /// Panics when `index` is out of range.
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl std::ops::IndexMut<usize> for $t {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_array_mut()[index]
            }
        }

        impl From<[f32; $n]> for $t {
            fn from(arr: [f32; $n]) -> Self {
                bytemuck::cast(arr)
            }
        }

        impl From<$t> for [f32; $n] {
            fn from(v: $t) -> Self {
                bytemuck::cast(v)
            }
        }

        impl std::ops::Add for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl std::ops::Sub for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl std::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t { $($f: -self.$f),+ }
            }
        }

        impl std::ops::Mul<f32> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: f32) -> $t {
                $t { $($f: self.$f * rhs),+ }
            }
        }

        impl std::ops::Mul<$t> for f32 {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t { $($f: self * rhs.$f),+ }
            }
        }

        impl std::ops::Div<f32> for $t {
            type Output = $t;
            #[inline]
            fn div(self, rhs: f32) -> $t {
                $t { $($f: self.$f / rhs),+ }
            }
        }

        impl std::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl std::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl std::ops::MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$f *= rhs;)+
            }
        }

        impl std::ops::DivAssign<f32> for $t {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                $(self.$f /= rhs;)+
            }
        }
    };
}

/// Vector-only operators on top of [`impl_float_tuple`]: component-wise
/// products and quotients, and scalar offsets on either side.
macro_rules! impl_vector_ops {
    ($t:ident, { $($f:ident),+ }) => {
        impl std::ops::Mul for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl std::ops::Div for $t {
            type Output = $t;
            #[inline]
            fn div(self, rhs: $t) -> $t {
                $t { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl std::ops::Div<$t> for f32 {
            type Output = $t;
            #[inline]
            fn div(self, rhs: $t) -> $t {
                $t { $($f: self / rhs.$f),+ }
            }
        }

        impl std::ops::Add<f32> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: f32) -> $t {
                $t { $($f: self.$f + rhs),+ }
            }
        }

        impl std::ops::Add<$t> for f32 {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t { $($f: self + rhs.$f),+ }
            }
        }

        impl std::ops::Sub<f32> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: f32) -> $t {
                $t { $($f: self.$f - rhs),+ }
            }
        }

        impl std::ops::Sub<$t> for f32 {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t { $($f: self - rhs.$f),+ }
            }
        }

        impl std::ops::MulAssign for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                $(self.$f *= rhs.$f;)+
            }
        }

        impl std::ops::DivAssign for $t {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                $(self.$f /= rhs.$f;)+
            }
        }

        impl $t {
            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> $t {
                $t { $($f: self.$f.abs()),+ }
            }

            /// Clamps each component independently.
            #[inline]
            pub fn clamp(self, min: $t, max: $t) -> $t {
                $t { $($f: $crate::scalar::clamp(self.$f, min.$f, max.$f)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn maximize(self, other: $t) -> $t {
                $t { $($f: if self.$f > other.$f { self.$f } else { other.$f }),+ }
            }

            /// Component-wise minimum.
            #[inline]
            pub fn minimize(self, other: $t) -> $t {
                $t { $($f: if self.$f < other.$f { self.$f } else { other.$f }),+ }
            }

            /// Largest component.
            pub fn max_component(self) -> f32 {
                self.to_array().into_iter().fold(f32::MIN, $crate::scalar::max)
            }

            /// Smallest component.
            pub fn min_component(self) -> f32 {
                self.to_array().into_iter().fold(f32::MAX, $crate::scalar::min)
            }

            /// Wraps each component once into `[min, max)`.
            #[inline]
            pub fn wrap(self, min: $t, max: $t) -> $t {
                $t { $($f: $crate::scalar::wrap(self.$f, min.$f, max.$f)),+ }
            }

            /// Unclamped linear interpolation.
            #[inline]
            pub fn lerp(self, end: $t, factor: f32) -> $t {
                $t { $($f: $crate::scalar::lerp(self.$f, end.$f, factor)),+ }
            }

            #[inline]
            pub fn dot(self, other: $t) -> f32 {
                0.0 $(+ self.$f * other.$f)+
            }

            #[inline]
            pub fn length_sq(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_sq().sqrt()
            }

            #[inline]
            pub fn distance_sq(self, other: $t) -> f32 {
                (self - other).length_sq()
            }

            #[inline]
            pub fn distance(self, other: $t) -> f32 {
                self.distance_sq(other).sqrt()
            }

            /// Unit-length copy, or the zero vector when the squared length is
            /// below [`EPSILON`](crate::EPSILON).
            ///
            /// A vector already unit length to within rounding is returned
            /// unchanged, so normalizing twice gives the same result as once.
            pub fn normalize(self) -> $t {
                let length_sq = self.length_sq();
                if length_sq < $crate::EPSILON {
                    return $t::ZERO;
                }
                // Rescaling leaves length_sq within 3 ulps of one.
                if (length_sq - 1.0).abs() <= 8.0 * $crate::EPSILON {
                    return self;
                }
                self * (1.0 / length_sq.sqrt())
            }

            /// `v1 + f1 (v2 - v1) + f2 (v3 - v1)`.
            pub fn barycentric(v1: $t, v2: $t, v3: $t, f1: f32, f2: f32) -> $t {
                v1 + (v2 - v1) * f1 + (v3 - v1) * f2
            }

            /// Catmull-Rom spline through `v2` and `v3`, with `v1` and `v4` as the
            /// outer control points.
            pub fn catmull_rom(v1: $t, v2: $t, v3: $t, v4: $t, t: f32) -> $t {
                let t2 = t * t;
                let t3 = t2 * t;
                0.5 * ((2.0 * v2 + (-v1 + v3) * t)
                    + (2.0 * v1 - 5.0 * v2 + 4.0 * v3 - v4) * t2
                    + (-v1 + 3.0 * v2 - 3.0 * v3 + v4) * t3)
            }

            /// Hermite spline from `v1` to `v2` with tangents `t1` and `t2`.
            pub fn hermite(v1: $t, t1: $t, v2: $t, t2: $t, factor: f32) -> $t {
                let s2 = factor * factor;
                let s3 = s2 * factor;
                let h1 = 2.0 * s3 - 3.0 * s2 + 1.0;
                let h2 = -2.0 * s3 + 3.0 * s2;
                let h3 = s3 - 2.0 * s2 + factor;
                let h4 = s3 - s2;
                v1 * h1 + v2 * h2 + t1 * h3 + t2 * h4
            }
        }
    };
}

/// Wrapping integer arithmetic, exact equality and indexing for a coordinate.
macro_rules! impl_coord_ops {
    ($t:ident, $n:literal, { $($f:ident),+ }) => {
        impl $t {
            /// Size of the value in bytes.
            pub const SIZE_IN_BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            pub fn to_array(&self) -> [i32; $n] {
                bytemuck::cast(*self)
            }

            /// Component at `index`, or an error when it is out of range.
            pub fn get(&self, index: usize) -> $crate::MathResult<i32> {
                self.to_array()
                    .get(index)
                    .copied()
                    .ok_or($crate::MathError::index(index, $n))
            }

            /// Overwrites the component at `index`.
            pub fn set(&mut self, index: usize, value: i32) -> $crate::MathResult<()> {
                let arr: &mut [i32; $n] = bytemuck::cast_mut(self);
                match arr.get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err($crate::MathError::index(index, $n)),
                }
            }

            #[inline]
            pub fn abs(self) -> $t {
                $t { $($f: self.$f.wrapping_abs()),+ }
            }

            #[inline]
            pub fn maximize(self, other: $t) -> $t {
                $t { $($f: self.$f.max(other.$f)),+ }
            }

            #[inline]
            pub fn minimize(self, other: $t) -> $t {
                $t { $($f: self.$f.min(other.$f)),+ }
            }

            pub fn max_component(self) -> i32 {
                self.to_array().into_iter().fold(i32::MIN, i32::max)
            }

            pub fn min_component(self) -> i32 {
                self.to_array().into_iter().fold(i32::MAX, i32::min)
            }

            /// True if any component is less than the matching one in `other`.
            #[inline]
            pub fn any_lt(self, other: $t) -> bool {
                false $(|| self.$f < other.$f)+
            }

            /// True if any component is greater than the matching one in `other`.
            #[inline]
            pub fn any_gt(self, other: $t) -> bool {
                false $(|| self.$f > other.$f)+
            }

            #[inline]
            pub fn any_le(self, other: $t) -> bool {
                false $(|| self.$f <= other.$f)+
            }

            #[inline]
            pub fn any_ge(self, other: $t) -> bool {
                false $(|| self.$f >= other.$f)+
            }
        }

        impl std::ops::Index<usize> for $t {
            type Output = i32;

            /// Panics when `index` is out of range.
            fn index(&self, index: usize) -> &i32 {
                let arr: &[i32; $n] = bytemuck::cast_ref(self);
                &arr[index]
            }
        }

        impl std::ops::IndexMut<usize> for $t {
            fn index_mut(&mut self, index: usize) -> &mut i32 {
                let arr: &mut [i32; $n] = bytemuck::cast_mut(self);
                &mut arr[index]
            }
        }

        impl From<[i32; $n]> for $t {
            fn from(arr: [i32; $n]) -> Self {
                bytemuck::cast(arr)
            }
        }

        impl std::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t { $($f: self.$f.wrapping_neg()),+ }
            }
        }

        impl_coord_ops!(@binary $t, Add, add, AddAssign, add_assign, wrapping_add, { $($f),+ });
        impl_coord_ops!(@binary $t, Sub, sub, SubAssign, sub_assign, wrapping_sub, { $($f),+ });
        impl_coord_ops!(@binary $t, Mul, mul, MulAssign, mul_assign, wrapping_mul, { $($f),+ });
        impl_coord_ops!(@binary $t, Div, div, DivAssign, div_assign, wrapping_div, { $($f),+ });
    };

    (@binary $t:ident, $tr:ident, $m:ident, $tra:ident, $ma:ident, $op:ident, { $($f:ident),+ }) => {
        impl std::ops::$tr for $t {
            type Output = $t;
            #[inline]
            fn $m(self, rhs: $t) -> $t {
                $t { $($f: self.$f.$op(rhs.$f)),+ }
            }
        }

        impl std::ops::$tr<i32> for $t {
            type Output = $t;
            #[inline]
            fn $m(self, rhs: i32) -> $t {
                $t { $($f: self.$f.$op(rhs)),+ }
            }
        }

        impl std::ops::$tr<$t> for i32 {
            type Output = $t;
            #[inline]
            fn $m(self, rhs: $t) -> $t {
                $t { $($f: self.$op(rhs.$f)),+ }
            }
        }

        impl std::ops::$tra for $t {
            #[inline]
            fn $ma(&mut self, rhs: $t) {
                *self = std::ops::$tr::$m(*self, rhs);
            }
        }

        impl std::ops::$tra<i32> for $t {
            #[inline]
            fn $ma(&mut self, rhs: i32) {
                *self = std::ops::$tr::$m(*self, rhs);
            }
        }
    };
}
