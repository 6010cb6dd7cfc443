/// The enumeration of supported color spaces.
///
/// # RGB
///
/// Monet targets [sRGB](https://en.wikipedia.org/wiki/SRGB) displays and
/// hence supports sRGB in its gamma-corrected and its linear form. For both,
/// in-gamut coordinates range from 0 to 1, inclusive.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space. All conversions between unrelated color spaces go
/// through XYZ. Since sRGB uses the [D65 standard
/// illuminant](https://en.wikipedia.org/wiki/Standard_illuminant), so does
/// this crate. XYZ coordinates are *relative*, i.e., the luminance Y of the
/// reference white is 1. Conversions to and from *absolute* XYZ, with
/// luminance in cd/m², require the white luminance as an explicit scale
/// factor, see [`Color::to_absolute_xyz`](crate::Color::to_absolute_xyz).
///
/// # CIELAB
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) and its polar
/// form CIELCh are perceptually uniform with respect to lightness. Monet uses
/// them relative to the D65 reference white, with lightness L* ranging
/// `0..=100`. CIELCh's hue may be not-a-number, which indicates a powerless
/// component, i.e., a gray tone. In that case, chroma must be zero.
///
/// The color appearance model used for palette generation is not part of this
/// enumeration, since its coordinates only make sense together with the
/// viewing conditions. See [`Zcam`](crate::zcam::Zcam) instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Xyz,
    CieLab,
    CieLch,
}

impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// CIELCh currently is the only polar color space.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::CieLch)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is one of the CIELAB variations.
    pub const fn is_lab(&self) -> bool {
        matches!(*self, Self::CieLab | Self::CieLch)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Xyz => "XYZ D65",
            CieLab => "CIELAB",
            CieLch => "CIELCh",
        };

        f.write_str(s)
    }
}
