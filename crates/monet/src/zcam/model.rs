use super::ViewingConditions;
use crate::core::{
    clip, convert, iz_to_m_cone, izazbz_to_xyz, reduce_chroma, xyz_to_izazbz, ColorSpace,
    GamutMapping,
};
use crate::{Color, Float, Rgb};

/// Below this lightness, gamut mapping produces black.
const BLACK_LIGHTNESS: Float = 1e-3;

/// Above this lightness, gamut mapping produces white.
const WHITE_LIGHTNESS: Float = 100.0 - 1e-3;

/// The width of the chroma interval at which gamut mapping stops searching.
///
/// One 8-bit step in sRGB corresponds to a ZCAM chroma of at least 0.05 or so,
/// which leaves plenty of headroom.
const CHROMA_TOLERANCE: Float = 1e-3;

/// A color in the ZCAM color appearance model.
///
/// A ZCAM color has lightness Jz, chroma Cz, and hue hz in degrees. Lightness
/// is 0 for black and 100 for the reference white. These coordinates are only
/// meaningful for the [`ViewingConditions`] used to compute them, so every
/// conversion takes the viewing conditions as argument.
///
/// ```
/// # use monet::Rgb;
/// # use monet::zcam::{ViewingConditions, Zcam};
/// let conditions = ViewingConditions::default();
/// let blue = Zcam::from_rgb(Rgb::new(0x42, 0x85, 0xf4), &conditions);
/// assert!((blue.lightness() - 61.56).abs() < 0.01);
/// assert!((blue.hue() - 254.21).abs() < 0.01);
/// assert_eq!(blue.to_rgb(&conditions, Default::default()), Rgb::new(0x42, 0x85, 0xf4));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Zcam {
    lightness: Float,
    chroma: Float,
    hue: Float,
}

impl Zcam {
    /// Create a new ZCAM color.
    ///
    /// This function normalizes its arguments: Not-a-number coordinates become
    /// zero, lightness and chroma are clamped to be non-negative, and the hue
    /// is wrapped into `0..360`.
    pub fn new(lightness: Float, chroma: Float, hue: Float) -> Self {
        fn nan_to_zero(value: Float) -> Float {
            if value.is_nan() {
                0.0
            } else {
                value
            }
        }

        Self {
            lightness: nan_to_zero(lightness).max(0.0),
            chroma: nan_to_zero(chroma).max(0.0),
            hue: nan_to_zero(hue).rem_euclid(360.0),
        }
    }

    /// Convert absolute XYZ coordinates to ZCAM.
    #[allow(non_snake_case)]
    pub fn from_absolute_xyz(coordinates: &[Float; 3], conditions: &ViewingConditions) -> Self {
        let [iz, az, bz] = xyz_to_izazbz(coordinates);

        let hue = bz.atan2(az).to_degrees().rem_euclid(360.0);
        let ez = eccentricity(hue);

        let Qz = conditions.brightness(iz);
        let Jz = 100.0 * Qz / conditions.white_brightness();

        let Mz = az.hypot(bz).powf(0.74) * ez.powf(0.068) * conditions.colorfulness_factor();
        let Cz = 100.0 * Mz / conditions.white_brightness();

        Self::new(Jz, Cz, hue)
    }

    /// Convert the color to ZCAM.
    ///
    /// This method scales the color's relative XYZ coordinates by the white
    /// luminance of the viewing conditions before converting.
    pub fn from_color(color: &Color, conditions: &ViewingConditions) -> Self {
        let xyz = color.to_absolute_xyz(conditions.white_luminance());
        Self::from_absolute_xyz(&xyz, conditions)
    }

    /// Convert the device color to ZCAM.
    pub fn from_rgb(color: Rgb, conditions: &ViewingConditions) -> Self {
        Self::from_color(&Color::from(color), conditions)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the lightness Jz.
    pub fn lightness(&self) -> Float {
        self.lightness
    }

    /// Get the chroma Cz.
    pub fn chroma(&self) -> Float {
        self.chroma
    }

    /// Get the hue hz in degrees.
    pub fn hue(&self) -> Float {
        self.hue
    }

    /// Replace the lightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lightness(&self, lightness: Float) -> Self {
        Self::new(lightness, self.chroma, self.hue)
    }

    /// Replace the chroma.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_chroma(&self, chroma: Float) -> Self {
        Self::new(self.lightness, chroma, self.hue)
    }

    /// Replace the hue, which wraps into `0..360`.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_hue(&self, hue: Float) -> Self {
        Self::new(self.lightness, self.chroma, hue)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to absolute XYZ.
    ///
    /// A color without chroma converts to a scaled version of the reference
    /// white, i.e., it lands exactly on the neutral axis.
    #[allow(non_snake_case)]
    pub fn to_absolute_xyz(&self, conditions: &ViewingConditions) -> [Float; 3] {
        let Qz = self.lightness * conditions.white_brightness() / 100.0;
        let iz = conditions.iz_from_brightness(Qz);

        if self.chroma <= 0.0 {
            let scale = iz_to_m_cone(iz) / conditions.white_m_cone();
            let [x, y, z] = conditions.reference_white();
            return [x * scale, y * scale, z * scale];
        }

        let Mz = self.chroma * conditions.white_brightness() / 100.0;
        let ez = eccentricity(self.hue);
        let radius = (Mz / (ez.powf(0.068) * conditions.colorfulness_factor())).powf(1.0 / 0.74);
        let hue_radian = self.hue.to_radians();

        izazbz_to_xyz(&[iz, radius * hue_radian.cos(), radius * hue_radian.sin()])
    }

    /// Convert this color to a high-resolution color in relative XYZ.
    pub fn to_color(&self, conditions: &ViewingConditions) -> Color {
        Color::from_absolute_xyz(&self.to_absolute_xyz(conditions), conditions.white_luminance())
    }

    /// Convert this color to linear sRGB coordinates, which may be out of
    /// gamut.
    pub fn to_linear_srgb(&self, conditions: &ViewingConditions) -> [Float; 3] {
        let color = self.to_color(conditions);
        convert(ColorSpace::Xyz, ColorSpace::LinearSrgb, color.as_ref())
    }

    /// Map this color into the sRGB gamut and return linear sRGB coordinates.
    ///
    /// In-gamut colors are returned as is, no matter the strategy. Otherwise,
    /// lightness at the very ends of the range maps to black and white,
    /// respectively. In between, [`GamutMapping::Clip`] clamps each channel
    /// and [`GamutMapping::ReduceChroma`] searches for the largest chroma with
    /// the same lightness and hue that is in gamut.
    pub fn to_gamut(&self, conditions: &ViewingConditions, mapping: GamutMapping) -> [Float; 3] {
        let linear = self.to_linear_srgb(conditions);
        if Color::new(ColorSpace::LinearSrgb, linear).in_gamut() {
            return linear;
        } else if self.lightness <= BLACK_LIGHTNESS {
            return [0.0, 0.0, 0.0];
        } else if WHITE_LIGHTNESS <= self.lightness {
            return [1.0, 1.0, 1.0];
        }

        match mapping {
            GamutMapping::Clip => clip(ColorSpace::LinearSrgb, &linear),
            GamutMapping::ReduceChroma => reduce_chroma(self.chroma, CHROMA_TOLERANCE, |chroma| {
                self.with_chroma(chroma).to_linear_srgb(conditions)
            }),
        }
    }

    /// Map this color into the sRGB gamut and quantize it to 24 bits.
    pub fn to_rgb(&self, conditions: &ViewingConditions, mapping: GamutMapping) -> Rgb {
        Rgb::from(Color::new(
            ColorSpace::LinearSrgb,
            self.to_gamut(conditions, mapping),
        ))
    }
}

/// Compute the eccentricity factor ez for the given hue in degrees.
#[inline]
fn eccentricity(hue: Float) -> Float {
    1.015 + (89.038 + hue).to_radians().cos()
}
