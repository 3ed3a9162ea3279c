//! 8-bit RGBA color used for vector color conversion.

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Channel value to `[0, 1]`.
#[inline]
pub(crate) fn channel_to_unit(channel: u8) -> f32 {
    channel as f32 / 255.0
}

/// `[0, 1]` to channel value, truncating. Out-of-range input saturates.
#[inline]
pub(crate) fn unit_to_channel(value: f32) -> u8 {
    (value * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::rgba(1, 2, 3, 4).a, 4);
        assert_eq!(Color::default(), Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_channel_conversion_truncates() {
        assert_eq!(unit_to_channel(1.0), 255);
        assert_eq!(unit_to_channel(0.5), 127);
        assert_eq!(unit_to_channel(2.0), 255);
        assert_eq!(unit_to_channel(-1.0), 0);
        assert_eq!(channel_to_unit(255), 1.0);
        assert_eq!(channel_to_unit(0), 0.0);
    }
}
