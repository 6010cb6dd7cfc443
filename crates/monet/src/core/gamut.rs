use crate::{ColorSpace, Float};

/// Determine whether the coordinates are in gamut. Only RGB spaces have a
/// gamut, the unit cube.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    !space.is_rgb() || coordinates.iter().all(|c| (0.0..=1.0).contains(c))
}

/// Clamp RGB coordinates into the unit cube. Other spaces are unbounded.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    if space.is_rgb() {
        coordinates.map(|c| c.clamp(0.0, 1.0))
    } else {
        *coordinates
    }
}

/// The strategy for bringing out-of-gamut colors into the sRGB gamut.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamutMapping {
    /// Keep lightness and hue while reducing chroma.
    ///
    /// This strategy performs a binary search over chroma in the color
    /// appearance model until the search interval is narrower than the
    /// tolerance. It returns the most colorful in-gamut color found along the
    /// way. It is considerably slower than clipping but preserves the
    /// perceived lightness of shades, which keeps the contrast between stops
    /// stable.
    #[default]
    ReduceChroma,
    /// Clamp each linear sRGB channel to the unit range.
    Clip,
}

/// Search for the largest chroma whose color is in gamut.
///
/// The `to_linear_rgb` closure maps a chroma in `0..=chroma` to linear sRGB
/// coordinates with the same lightness and hue. The search starts with the
/// chroma-zero color, which is assumed to be in gamut, and narrows the interval
/// `[0, chroma]` until it is no wider than `tolerance`. It returns the last
/// in-gamut coordinates.
pub(crate) fn reduce_chroma<F>(chroma: Float, tolerance: Float, to_linear_rgb: F) -> [Float; 3]
where
    F: Fn(Float) -> [Float; 3],
{
    let mut best = clip(ColorSpace::LinearSrgb, &to_linear_rgb(0.0));
    let mut min = 0.0;
    let mut max = chroma;

    while tolerance < max - min {
        let current = (min + max) / 2.0;
        let candidate = to_linear_rgb(current);

        if in_gamut(ColorSpace::LinearSrgb, &candidate) {
            best = candidate;
            min = current;
        } else {
            max = current;
        }
    }

    best
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_in_gamut_and_clip() {
        assert!(in_gamut(ColorSpace::Srgb, &[0.0, 0.5, 1.0]));
        assert!(!in_gamut(ColorSpace::LinearSrgb, &[-0.01, 0.5, 1.0]));
        assert!(in_gamut(ColorSpace::Xyz, &[3.0, -1.0, 2.0]));

        assert_eq!(
            clip(ColorSpace::LinearSrgb, &[-0.2, 0.5, 1.7]),
            [0.0, 0.5, 1.0]
        );
        assert_eq!(clip(ColorSpace::CieLab, &[50.0, -80.0, 90.0]), [50.0, -80.0, 90.0]);
    }

    #[test]
    fn test_reduce_chroma() {
        // A toy model where red grows with chroma and leaves gamut past 0.6.
        let result = reduce_chroma(1.0, 0.001, |c| [0.4 + c, 0.4, 0.4 - c / 10.0]);
        assert!(in_gamut(ColorSpace::LinearSrgb, &result));
        assert!(result[0] > 0.998 && result[0] <= 1.0, "{:?}", result);

        // Zero chroma never starts a search.
        let gray = reduce_chroma(0.0, 0.001, |c| [0.5 + c, 0.5, 0.5]);
        assert_eq!(gray, [0.5, 0.5, 0.5]);
    }
}
