//! Little-endian binary encoding for the `fmath` value types.
//!
//! Every type is written as its fields in declaration order with no padding
//! or header: floats as IEEE-754 `f32`, coordinates as `i32`. A matrix is
//! therefore sixteen floats in row-major order, a plane is its normal
//! followed by `d`, and so on.
//!
//! ```
//! use fmath::Vector3;
//! use fmath_io::{from_bytes, to_bytes};
//!
//! let bytes = to_bytes(&Vector3::new(1.0, 2.0, 3.0)).unwrap();
//! assert_eq!(bytes.len(), 12);
//! let v: Vector3 = from_bytes(&bytes).unwrap();
//! assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
//! ```

pub mod error;

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use fmath::{
    BoundingBox, BoundingSphere, Coord2, Coord3, Matrix, Plane, Quaternion, Ray, Vector2, Vector3,
    Vector4,
};

pub use error::{EncodeError, EncodeResult};

/// Types that can be written in the little-endian layout.
pub trait WriteBinary {
    /// Writes `self` to `w`.
    fn write_binary<W: Write>(&self, w: &mut W) -> EncodeResult<()>;
}

/// Types that can be read back from the little-endian layout.
pub trait ReadBinary: Sized {
    /// Number of bytes one value occupies.
    const ENCODED_SIZE: usize;

    /// Reads one value from `r`.
    fn read_binary<R: Read>(r: &mut R) -> EncodeResult<Self>;
}

impl WriteBinary for f32 {
    fn write_binary<W: Write>(&self, w: &mut W) -> EncodeResult<()> {
        w.write_f32::<LittleEndian>(*self)?;
        Ok(())
    }
}

impl ReadBinary for f32 {
    const ENCODED_SIZE: usize = 4;

    fn read_binary<R: Read>(r: &mut R) -> EncodeResult<Self> {
        Ok(r.read_f32::<LittleEndian>()?)
    }
}

impl WriteBinary for i32 {
    fn write_binary<W: Write>(&self, w: &mut W) -> EncodeResult<()> {
        w.write_i32::<LittleEndian>(*self)?;
        Ok(())
    }
}

impl ReadBinary for i32 {
    const ENCODED_SIZE: usize = 4;

    fn read_binary<R: Read>(r: &mut R) -> EncodeResult<Self> {
        Ok(r.read_i32::<LittleEndian>()?)
    }
}

/// Implements both traits for a struct by encoding its fields in order.
macro_rules! impl_binary {
    ($t:ty { $($field:ident: $ft:ty),+ $(,)? }) => {
        impl WriteBinary for $t {
            fn write_binary<W: Write>(&self, w: &mut W) -> EncodeResult<()> {
                $( self.$field.write_binary(w)?; )+
                Ok(())
            }
        }

        impl ReadBinary for $t {
            const ENCODED_SIZE: usize = 0 $( + <$ft as ReadBinary>::ENCODED_SIZE )+;

            fn read_binary<R: Read>(r: &mut R) -> EncodeResult<Self> {
                Ok(Self { $( $field: <$ft>::read_binary(r)?, )+ })
            }
        }
    };
}

impl_binary!(Vector2 { x: f32, y: f32 });
impl_binary!(Vector3 { x: f32, y: f32, z: f32 });
impl_binary!(Vector4 { x: f32, y: f32, z: f32, w: f32 });
impl_binary!(Coord2 { x: i32, y: i32 });
impl_binary!(Coord3 { x: i32, y: i32, z: i32 });
impl_binary!(Quaternion { x: f32, y: f32, z: f32, w: f32 });
impl_binary!(Matrix {
    m11: f32, m12: f32, m13: f32, m14: f32,
    m21: f32, m22: f32, m23: f32, m24: f32,
    m31: f32, m32: f32, m33: f32, m34: f32,
    m41: f32, m42: f32, m43: f32, m44: f32,
});
impl_binary!(Plane { normal: Vector3, d: f32 });
impl_binary!(Ray { origin: Vector3, direction: Vector3, length: f32 });
impl_binary!(BoundingBox { minimum: Vector3, maximum: Vector3 });
impl_binary!(BoundingSphere { center: Vector3, radius: f32 });

/// Encodes one value into a fresh buffer.
pub fn to_bytes<T: WriteBinary + ReadBinary>(value: &T) -> EncodeResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(T::ENCODED_SIZE);
    value.write_binary(&mut bytes)?;
    Ok(bytes)
}

/// Decodes one value from the front of `bytes`. Trailing bytes are ignored.
pub fn from_bytes<T: ReadBinary>(bytes: &[u8]) -> EncodeResult<T> {
    if bytes.len() < T::ENCODED_SIZE {
        log::debug!(
            "cannot decode {} from {} bytes",
            std::any::type_name::<T>(),
            bytes.len()
        );
        return Err(EncodeError::BufferTooSmall {
            needed: T::ENCODED_SIZE,
            got: bytes.len(),
        });
    }
    let mut cursor = bytes;
    T::read_binary(&mut cursor)
}

/// Writes a `u32` count followed by every item.
pub fn write_slice<T: WriteBinary, W: Write>(items: &[T], w: &mut W) -> EncodeResult<()> {
    let count = u32::try_from(items.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} items do not fit a u32 count", items.len()),
        )
    })?;
    w.write_u32::<LittleEndian>(count)?;
    for item in items {
        item.write_binary(w)?;
    }
    Ok(())
}

/// Reads a sequence written by [`write_slice`].
pub fn read_vec<T: ReadBinary, R: Read>(r: &mut R) -> EncodeResult<Vec<T>> {
    let count = r.read_u32::<LittleEndian>()? as usize;
    // The count is untrusted; let the vector grow past this if the data is really there.
    let mut items = Vec::with_capacity(count.min(4096));
    for index in 0..count {
        let item = T::read_binary(r).map_err(|err| {
            log::debug!("sequence truncated at item {index} of {count}: {err}");
            err
        })?;
        items.push(item);
    }
    Ok(items)
}
