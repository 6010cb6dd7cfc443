use std::str::FromStr;

use crate::error::ColorFormatError;
use crate::Color;

/// A 24-bit device color.
///
/// Seed colors enter monet as 24-bit RGB and every generated shade leaves it
/// as 24-bit RGB. The conversion to [`Color`] scales each coordinate by 1/255;
/// the conversion back converts to sRGB, clips to gamut, and rounds.
///
/// ```
/// # use monet::{Color, Rgb};
/// let sand = Rgb::new(0xee, 0xdc, 0xad);
/// assert_eq!(Color::from(sand), Color::from_24bit(0xee, 0xdc, 0xad));
/// assert_eq!(format!("{}", sand), "#eedcad");
/// assert_eq!(sand.to_argb(), 0xffeedcad);
/// assert_eq!("#eedcad".parse::<Rgb>(), Ok(sand));
/// ```
///
/// With the `serde` feature enabled, colors serialize as `#rrggbb` strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new device color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new device color from its packed `0xRRGGBB` representation.
    ///
    /// Bits beyond the lower 24 bits, e.g., an alpha channel, are ignored.
    pub const fn from_24bit(value: u32) -> Self {
        Self([(value >> 16) as u8, (value >> 8) as u8, value as u8])
    }

    /// Pack this color as `0xRRGGBB`.
    pub const fn to_24bit(&self) -> u32 {
        let [r, g, b] = self.0;
        ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }

    /// Pack this color as fully opaque `0xAARRGGBB`.
    pub const fn to_argb(&self) -> u32 {
        0xff00_0000 | self.to_24bit()
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<&Color> for Rgb {
    /// Convert the given color to a device color.
    ///
    /// This method converts the color to sRGB, clips it to gamut, and then
    /// converts each coordinate to `u8`.
    fn from(value: &Color) -> Self {
        Rgb(value.to_24bit())
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        Rgb::from(&value)
    }
}

impl From<&Rgb> for Color {
    fn from(value: &Rgb) -> Self {
        Self::from_24bit(value.0[0], value.0[1], value.0[2])
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_24bit(value.0[0], value.0[1], value.0[2])
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorFormatError::UnexpectedCharacters);
        }

        fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
            let t = s
                .get(2 * index..2 * (index + 1))
                .ok_or(ColorFormatError::UnexpectedCharacters)?;
            if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorFormatError::MalformedHex);
            }
            u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
        }

        let r = parse_coordinate(digits, 0)?;
        let g = parse_coordinate(digits, 1)?;
        let b = parse_coordinate(digits, 2)?;
        Ok(Self::new(r, g, b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_str(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = *self.as_ref();
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}
