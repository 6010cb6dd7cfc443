use crate::core::{
    clip, convert, from_24bit, in_gamut, is_achromatic_chroma_hue, normalize, to_24bit,
    to_eq_coordinates, ColorSpace,
};
use crate::Float;

/// A color with floating point coordinates.
///
/// Monet computes with these colors and only quantizes to [`Rgb`](crate::Rgb)
/// at the very end.
///
/// # Color Coordinates
///
/// For RGB color spaces, the coordinates of in-gamut colors have unit range.
/// For the other color spaces, there are no gamut bounds. However, CIELAB
/// lightness must be `0.0..=100.0` and CIELCh chroma must be `0.0..`.
///
/// A CIELCh hue may be not-a-number, which marks the hue as powerless. That
/// happens for gray tones and is preserved by conversions but eliminated by
/// [`Color::normalize`].
///
/// # Equality Testing and Hashing
///
/// Equality testing and hashing first normalize coordinates, then scale hues
/// to unit range, and finally reduce resolution by rounding. As a result,
/// colors that differ by floating point noise only still compare as equal.
///
/// # Coordinate Access
///
/// Colors can be indexed with integers `0..=2` and also dereference to a
/// coordinate array through [`AsRef`].
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Create a color from its space and coordinates.
    ///
    /// ```
    /// # use monet::{Color, ColorSpace};
    /// let sand = Color::new(ColorSpace::CieLch, [88.0, 20.0, 85.0]);
    /// assert_eq!(sand.as_ref(), &[88.0, 20.0, 85.0]);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Create a gamma-encoded sRGB color.
    #[inline]
    pub const fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Create an sRGB color from 8-bit coordinates.
    ///
    /// ```
    /// # use monet::{Color, ColorSpace};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Create a color from *absolute* XYZ coordinates.
    ///
    /// This method divides the coordinates by the luminance of the reference
    /// white in cd/m² to produce a color in relative XYZ.
    pub fn from_absolute_xyz(coordinates: &[Float; 3], white_luminance: Float) -> Self {
        Self::new(ColorSpace::Xyz, coordinates.map(|c| c / white_luminance))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero and clamps
    /// CIELAB lightness as well as CIELCh chroma to meaningful ranges.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    /// Convert this color to the target color space.
    ///
    /// ```
    /// # use monet::{Color, ColorSpace};
    /// let white = Color::srgb(1.0, 1.0, 1.0).to(ColorSpace::CieLab);
    /// assert!((white[0] - 100.0).abs() < 1e-9);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Convert this color to *absolute* XYZ coordinates for a reference white
    /// with the given luminance in cd/m².
    pub fn to_absolute_xyz(&self, white_luminance: Float) -> [Float; 3] {
        convert(self.space, ColorSpace::Xyz, &self.coordinates).map(|c| c * white_luminance)
    }

    /// Determine this color's CIELAB lightness L*.
    pub fn lightness(&self) -> Float {
        convert(self.space, ColorSpace::CieLab, &self.coordinates)[0]
    }

    /// Determine whether this color is a gray tone.
    ///
    /// This method considers a color as gray if its CIELCh hue is powerless or
    /// its chroma is below the given threshold.
    pub fn is_gray(&self, threshold: Float) -> bool {
        let [_, chroma, hue] = convert(self.space, ColorSpace::CieLch, &self.coordinates);
        is_achromatic_chroma_hue(chroma, hue, threshold)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in gamut for its color space.
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space.
    ///
    /// For RGB color spaces, this method clamps each coordinate to the unit
    /// range. Other color spaces are unbounded and hence unaffected.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self::new(self.space, clip(self.space, &self.coordinates))
    }

    /// Convert this color to 24-bit sRGB coordinates.
    ///
    /// This method converts to sRGB, clips the result to the sRGB gamut, and
    /// rounds each coordinate to the nearest integer.
    pub fn to_24bit(&self) -> [u8; 3] {
        let srgb = convert(self.space, ColorSpace::Srgb, &self.coordinates);
        to_24bit(ColorSpace::Srgb, &srgb)
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// # Panics
    ///
    /// This method panics if the index is not `0..=2`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);
        to_eq_coordinates(self.space, &self.coordinates).hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
            && to_eq_coordinates(self.space, &self.coordinates)
                == to_eq_coordinates(other.space, &other.coordinates)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        write!(f, "Color({}, [{}, {}, {}])", self.space, c1, c2, c3)
    }
}
