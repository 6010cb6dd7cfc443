use super::{ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Assert that two floating point quantities are equal after quantization
/// with [`to_eq_bits`].
#[cfg(test)]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert_eq!(
            $crate::core::to_eq_bits(f1),
            $crate::core::to_eq_bits(f2),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Assert that two coordinate arrays denote the same color in the given
/// space, comparing them with [`to_eq_coordinates`].
///
/// The failure message lists both arrays on lines of their own, so that
/// differing digits line up.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr, $cs1:expr, $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        assert_eq!(
            $crate::core::to_eq_coordinates(space, cs1),
            $crate::core::to_eq_coordinates(space, cs2),
            "color coordinates differ:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize color coordinates.
///
/// Not-a-number coordinates become zero. A missing hue in a polar space also
/// zeroes chroma, since a color without hue has no chroma either. CIELAB and
/// CIELCh lightness is clamped to `0..=100` and CIELCh chroma to `0..`.
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let zero_nan = |c: Float| if c.is_nan() { 0.0 } else { c };

    let [lightness, c2, c3] = *coordinates;
    let mut result = [zero_nan(lightness), zero_nan(c2), zero_nan(c3)];

    if c3.is_nan() && space.is_polar() {
        result[1] = 0.0;
    }
    if space.is_lab() {
        result[0] = result[0].clamp(0.0, 100.0);
        if space.is_polar() {
            result[1] = result[1].max(0.0);
        }
    }

    result
}

/// Quantize normalized coordinates for equality and hashing.
///
/// Hues are wrapped and scaled to the unit interval first, so that 30° and
/// 390° compare equal.
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, c3] = normalize(space, coordinates);
    let c3 = if space.is_polar() {
        c3.rem_euclid(360.0) / 360.0
    } else {
        c3
    };

    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Quantize a floating point number to a bit pattern.
///
/// Not-a-number maps to zero's bits, the value is rounded to
/// [`FloatExt::ROUNDING_FACTOR`] resolution, and negative zero loses its sign.
pub(crate) fn to_eq_bits(f: Float) -> Bits {
    if f.is_nan() {
        return (0.0 as Float).to_bits();
    }

    let rounded = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();
    // -0.0 + 0.0 is +0.0
    (rounded + 0.0).to_bits()
}

/// Determine whether chroma and hue describe a gray, i.e., the hue is
/// missing or the chroma does not exceed the threshold.
pub(crate) fn is_achromatic_chroma_hue(chroma: Float, hue: Float, threshold: Float) -> bool {
    hue.is_nan() || chroma <= threshold
}
