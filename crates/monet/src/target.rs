//! Target lightness and chroma for every color group and stop.

use crate::core::mean;
use crate::scheme::{ColorGroup, Stop, STOPS};
use crate::zcam::{ViewingConditions, Zcam};
use crate::{Color, ColorSpace, Float, Rgb};

/// The shape of the lightness curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightnessCurve {
    /// ZCAM lightness of the gray with CIELAB lightness L* = stop / 10.
    ///
    /// CIELAB's lightness closely tracks the lightness steps of the target
    /// color system, which compresses shadows and highlights relative to
    /// ZCAM's lightness.
    #[default]
    Perceptual,
    /// ZCAM lightness Jz = stop / 10.
    Linear,
}

/// Reference shades of the target color system's primary blue, from light to
/// dark. Their average chroma determines the chroma of accent1.
const ACCENT1_REFERENCE: [Rgb; 9] = [
    Rgb::from_24bit(0xd3e3fd),
    Rgb::from_24bit(0xa8c7fa),
    Rgb::from_24bit(0x7cacf8),
    Rgb::from_24bit(0x4c8df6),
    Rgb::from_24bit(0x1b6ef3),
    Rgb::from_24bit(0x0b57d0),
    Rgb::from_24bit(0x0842a0),
    Rgb::from_24bit(0x062e6f),
    Rgb::from_24bit(0x041e49),
];

/// The index of the primary shade in [`ACCENT1_REFERENCE`].
const PRIMARY_REFERENCE: usize = 4;

/// Seeds with less than this fraction of the reference chroma count as gray.
const GRAY_SEED_CHROMA: Float = 0.05;

/// The boost applied to the reference chroma for accent1.
const ACCENT1_CHROMA_BOOST: Float = 1.2;

/// The CIELAB lightness for stop 500, which is slightly darker than 50.
const MIDTONE_LAB_LIGHTNESS: Float = 49.6;

/// Get the divisor applied to accent1's chroma.
const fn chroma_divisor(group: ColorGroup) -> Float {
    match group {
        ColorGroup::Accent1 => 1.0,
        ColorGroup::Accent2 => 2.0,
        ColorGroup::Accent3 => 3.0,
        ColorGroup::Neutral1 => 8.0,
        ColorGroup::Neutral2 => 5.0,
    }
}

/// A target lightness and chroma in ZCAM.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    lightness: Float,
    chroma: Float,
}

impl Target {
    /// Get the target lightness Jz.
    pub fn lightness(&self) -> Float {
        self.lightness
    }

    /// Get the target chroma Cz.
    pub fn chroma(&self) -> Float {
        self.chroma
    }
}

/// The target curves for all color groups.
///
/// Lightness depends on the stop only and increases monotonically with it.
/// Chroma depends on the color group only and already includes the chroma
/// factor.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetCurves {
    chroma_factor: Float,
    curve: LightnessCurve,
    lightness: [Float; STOPS.len()],
    chroma: [Float; 5],
    reference_chroma: Float,
    fallback_hue: Float,
}

impl TargetCurves {
    /// Create new target curves.
    ///
    /// The chroma factor scales the chroma of every group. Negative and
    /// not-a-number factors are treated as zero, which turns every group
    /// into grays.
    pub fn new(chroma_factor: Float, curve: LightnessCurve, conditions: &ViewingConditions) -> Self {
        let chroma_factor = if chroma_factor.is_nan() {
            0.0
        } else {
            chroma_factor.max(0.0)
        };

        let lightness = STOPS.map(|stop| match curve {
            LightnessCurve::Linear => stop.value() as Float / 10.0,
            LightnessCurve::Perceptual => {
                let lab_lightness = if stop == Stop::new(500) {
                    MIDTONE_LAB_LIGHTNESS
                } else {
                    stop.value() as Float / 10.0
                };
                let gray = Color::new(ColorSpace::CieLab, [lab_lightness, 0.0, 0.0]);
                Zcam::from_color(&gray, conditions).lightness()
            }
        });

        let reference_chroma = mean(
            ACCENT1_REFERENCE
                .iter()
                .map(|color| Zcam::from_rgb(*color, conditions).chroma()),
        );
        let accent1 = ACCENT1_CHROMA_BOOST * reference_chroma;
        let chroma = ColorGroup::all().map(|group| chroma_factor * accent1 / chroma_divisor(group));
        let fallback_hue = Zcam::from_rgb(ACCENT1_REFERENCE[PRIMARY_REFERENCE], conditions).hue();

        Self {
            chroma_factor,
            curve,
            lightness,
            chroma,
            reference_chroma,
            fallback_hue,
        }
    }

    /// Get the chroma factor.
    pub fn chroma_factor(&self) -> Float {
        self.chroma_factor
    }

    /// Get the lightness curve.
    pub fn curve(&self) -> LightnessCurve {
        self.curve
    }

    /// Get the hue for a seed color.
    ///
    /// The hue of a seed with next to no chroma is little more than rounding
    /// noise, so that nearly identical grays would yield wildly different
    /// schemes. Such seeds use the hue of the primary reference blue instead.
    /// The threshold is relative to the reference chroma and independent of
    /// the chroma factor.
    pub fn seed_hue(&self, seed: &Zcam) -> Float {
        if seed.chroma() < GRAY_SEED_CHROMA * self.reference_chroma {
            self.fallback_hue
        } else {
            seed.hue()
        }
    }

    /// Get the target for the color group and stop.
    ///
    /// # Panics
    ///
    /// This method panics if the stop is not one of the emitted
    /// [`STOPS`].
    pub fn target(&self, group: ColorGroup, stop: Stop) -> Target {
        let Some(index) = stop.position() else {
            panic!("stop {} is not an emitted stop", stop);
        };

        Target {
            lightness: self.lightness[index],
            chroma: self.chroma[group as usize],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_perceptual_lightness() {
        let conditions = ViewingConditions::default();
        let targets = TargetCurves::new(1.0, LightnessCurve::Perceptual, &conditions);

        let expected = [
            0.0, 1.8880745, 3.2754060, 6.4220146, 10.3742870, 18.9273057, 28.5329641, 38.6823938,
            49.0696124, 59.5071312, 64.7064328, 69.8785399, 80.1113154, 90.1607256, 95.1077876,
            100.0,
        ];
        for (stop, lightness) in STOPS.into_iter().zip(expected) {
            let target = targets.target(ColorGroup::Neutral2, stop);
            assert!(
                (target.lightness() - lightness).abs() < 1e-6,
                "{} has lightness {}",
                stop,
                target.lightness()
            );
        }
    }

    #[test]
    fn test_linear_lightness() {
        let conditions = ViewingConditions::default();
        let targets = TargetCurves::new(1.0, LightnessCurve::Linear, &conditions);
        assert_eq!(targets.curve(), LightnessCurve::Linear);
        assert_eq!(targets.target(ColorGroup::Accent1, Stop::new(650)).lightness(), 65.0);
        assert_eq!(targets.target(ColorGroup::Accent1, Stop::new(1000)).lightness(), 100.0);
    }

    #[test]
    fn test_chroma() {
        let conditions = ViewingConditions::default();
        let targets = TargetCurves::new(1.0, LightnessCurve::Perceptual, &conditions);
        let stop = Stop::new(400);

        let accent1 = targets.target(ColorGroup::Accent1, stop).chroma();
        assert!((accent1 - 18.625186493040804).abs() < 1e-6, "{}", accent1);
        assert!(accent1 > targets.target(ColorGroup::Accent2, stop).chroma());
        assert!(
            targets.target(ColorGroup::Accent2, stop).chroma()
                > targets.target(ColorGroup::Accent3, stop).chroma()
        );
        assert!(
            targets.target(ColorGroup::Neutral2, stop).chroma()
                > targets.target(ColorGroup::Neutral1, stop).chroma()
        );

        let doubled = TargetCurves::new(2.0, LightnessCurve::Perceptual, &conditions);
        assert!((doubled.target(ColorGroup::Accent1, stop).chroma() - 2.0 * accent1).abs() < 1e-9);

        let gray = TargetCurves::new(Float::NAN, LightnessCurve::Perceptual, &conditions);
        assert_eq!(gray.chroma_factor(), 0.0);
        assert_eq!(gray.target(ColorGroup::Accent1, stop).chroma(), 0.0);
    }

    #[test]
    fn test_seed_hue() {
        let conditions = ViewingConditions::default();
        let targets = TargetCurves::new(0.0, LightnessCurve::Perceptual, &conditions);
        let hue = |color: Rgb| targets.seed_hue(&Zcam::from_rgb(color, &conditions));

        let fallback = hue(Rgb::new(0x80, 0x80, 0x80));
        assert!((fallback - 254.2).abs() < 0.1, "{}", fallback);
        assert_eq!(hue(Rgb::new(0x80, 0x7f, 0x80)), fallback);
        assert_eq!(hue(Rgb::new(0x82, 0x80, 0x80)), fallback);
        assert_eq!(hue(Rgb::new(0, 0, 0)), fallback);
        assert_eq!(hue(Rgb::new(0xff, 0xff, 0xff)), fallback);

        let blue = Rgb::new(0x42, 0x85, 0xf4);
        assert_eq!(hue(blue), Zcam::from_rgb(blue, &conditions).hue());
        let tint = Rgb::new(0x78, 0x80, 0x88);
        assert_eq!(hue(tint), Zcam::from_rgb(tint, &conditions).hue());
    }

    #[test]
    #[should_panic(expected = "not an emitted stop")]
    fn test_target_precondition() {
        let conditions = ViewingConditions::default();
        let targets = TargetCurves::new(1.0, LightnessCurve::Perceptual, &conditions);
        let _ = targets.target(ColorGroup::Accent1, Stop::new(30));
    }
}
