//! Color schemes and their generation.
//!
//! A [`Scheme`] holds one [`Swatch`] per [`ColorGroup`], and each swatch maps
//! the emitted tonal [`Stop`]s to 24-bit colors. [`SchemeGenerator`] bundles
//! the viewing conditions and target curves derived from [`Tunables`] and
//! turns seed colors into schemes.

use std::collections::BTreeMap;

use crate::error::OutOfBoundsError;
use crate::target::TargetCurves;
use crate::zcam::{ViewingConditions, Zcam};
use crate::{Color, ColorSpace, Float, GamutMapping, Rgb, Tunables};

/// A tonal stop.
///
/// Stops range from 0 for black over 500 for a mid-tone to 1000 for white, in
/// increments of 10. Only the stops in [`STOPS`] are actually generated, so
/// looking up any other stop in a [`Swatch`] finds nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct Stop(u16);

impl Stop {
    /// The largest stop.
    pub const MAX: u16 = 1000;

    /// Create a new stop.
    ///
    /// # Panics
    ///
    /// This function panics if the value is larger than 1000 or not a
    /// multiple of 10. Use [`Stop::try_from`] for untrusted values.
    pub const fn new(value: u16) -> Self {
        assert!(
            value <= Self::MAX && value % 10 == 0,
            "stop must be a multiple of 10 between 0 and 1000"
        );
        Self(value)
    }

    /// Get an iterator over all stops, from 0 to 1000.
    pub fn all() -> impl Iterator<Item = Stop> {
        (0..=Self::MAX).step_by(10).map(Stop)
    }

    /// Get the stop's numeric value.
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Get this stop's index into [`STOPS`], if it is emitted.
    pub fn position(&self) -> Option<usize> {
        STOPS.iter().position(|stop| stop == self)
    }
}

impl TryFrom<u16> for Stop {
    type Error = OutOfBoundsError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value <= Self::MAX && value % 10 == 0 {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=Self::MAX as usize))
        }
    }
}

impl From<Stop> for u16 {
    fn from(value: Stop) -> Self {
        value.0
    }
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stops emitted for every color group, in increasing lightness.
pub const STOPS: [Stop; 16] = [
    Stop::new(0),
    Stop::new(10),
    Stop::new(20),
    Stop::new(50),
    Stop::new(100),
    Stop::new(200),
    Stop::new(300),
    Stop::new(400),
    Stop::new(500),
    Stop::new(600),
    Stop::new(650),
    Stop::new(700),
    Stop::new(800),
    Stop::new(900),
    Stop::new(950),
    Stop::new(1000),
];

// ====================================================================================================================

/// The closed set of color groups.
///
/// Accent groups carry the seed color's hue with decreasing emphasis, with
/// accent3 rotated by 60° for a tertiary color. Neutral groups share the
/// seed's hue but have little chroma.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorGroup {
    Accent1,
    Accent2,
    Accent3,
    Neutral1,
    Neutral2,
}

impl ColorGroup {
    /// Get all color groups.
    pub const fn all() -> [ColorGroup; 5] {
        use ColorGroup::*;
        [Accent1, Accent2, Accent3, Neutral1, Neutral2]
    }

    /// Get the lower-case name, e.g., `accent1`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Neutral1 => "neutral1",
            Self::Neutral2 => "neutral2",
        }
    }

    /// Determine whether this is an accent group.
    pub const fn is_accent(&self) -> bool {
        matches!(self, Self::Accent1 | Self::Accent2 | Self::Accent3)
    }

    /// Get the rotation in degrees applied to the seed's hue.
    pub const fn hue_offset(&self) -> Float {
        match self {
            Self::Accent3 => 60.0,
            _ => 0.0,
        }
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// The colors of one color group, keyed by stop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    colors: BTreeMap<Stop, Rgb>,
}

impl Swatch {
    /// Look up the color for the stop.
    pub fn get(&self, stop: Stop) -> Option<Rgb> {
        self.colors.get(&stop).copied()
    }

    /// Get the number of stops with colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether this swatch has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get an iterator over stops and colors, ordered by stop.
    pub fn iter(&self) -> impl Iterator<Item = (Stop, Rgb)> + '_ {
        self.colors.iter().map(|(stop, color)| (*stop, *color))
    }
}

impl FromIterator<(Stop, Rgb)> for Swatch {
    fn from_iter<T: IntoIterator<Item = (Stop, Rgb)>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<Stop> for Swatch {
    type Output = Rgb;

    /// Access the color for the stop.
    ///
    /// # Panics
    ///
    /// This method panics if the swatch has no color for the stop. Use
    /// [`Swatch::get`] for stops that may be missing.
    fn index(&self, index: Stop) -> &Self::Output {
        &self.colors[&index]
    }
}

// ====================================================================================================================

/// A complete color scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheme {
    seed: Rgb,
    groups: [Swatch; 5],
}

impl Scheme {
    /// Get the seed color this scheme was generated from.
    pub fn seed(&self) -> Rgb {
        self.seed
    }

    /// Get the swatch for the color group.
    pub fn group(&self, group: ColorGroup) -> &Swatch {
        &self.groups[group.index()]
    }

    /// Look up the color for the group and stop.
    pub fn get(&self, group: ColorGroup, stop: Stop) -> Option<Rgb> {
        self.group(group).get(stop)
    }

    /// Get an iterator over color groups and their swatches.
    pub fn iter(&self) -> impl Iterator<Item = (ColorGroup, &Swatch)> {
        ColorGroup::all()
            .into_iter()
            .map(|group| (group, self.group(group)))
    }
}

impl std::ops::Index<ColorGroup> for Scheme {
    type Output = Swatch;

    fn index(&self, index: ColorGroup) -> &Self::Output {
        self.group(index)
    }
}

// ====================================================================================================================

/// Generate a color scheme.
///
/// For every color group and emitted stop, this function takes lightness and
/// chroma from the target curves and hue from the seed, rotated by the
/// group's hue offset. Seeds with next to no chroma use the target curves'
/// fallback hue instead. The resulting colors are mapped into the sRGB gamut
/// by reducing chroma if `accurate_shades` is set and by clipping otherwise.
/// Either way, lightness never decreases from one stop to the next.
pub fn generate(
    seed: Rgb,
    conditions: &ViewingConditions,
    targets: &TargetCurves,
    accurate_shades: bool,
) -> Scheme {
    let hue = targets.seed_hue(&Zcam::from_rgb(seed, conditions));

    let groups = ColorGroup::all().map(|group| {
        let colors = STOPS.map(|stop| {
            let target = targets.target(group, stop);
            Zcam::new(target.lightness(), target.chroma(), hue + group.hue_offset())
        });

        let shades = if accurate_shades {
            colors.map(|color| color.to_rgb(conditions, GamutMapping::ReduceChroma))
        } else {
            clip_in_order(&colors, conditions)
        };

        STOPS.into_iter().zip(shades).collect::<Swatch>()
    });

    Scheme { seed, groups }
}

/// Map one group's colors into gamut by clipping, without reordering them.
///
/// Clipping shifts the lightness of out-of-gamut colors, sometimes past a
/// neighbouring stop. Each clipped shade that ends up out of order falls back
/// to chroma reduction, which preserves lightness, until all neighbours are
/// ordered by both CIELAB and ZCAM lightness. In-gamut shades never change.
fn clip_in_order(colors: &[Zcam; STOPS.len()], conditions: &ViewingConditions) -> [Rgb; STOPS.len()] {
    let mut shades = colors.map(|color| color.to_rgb(conditions, GamutMapping::Clip));
    let mut fixed = colors.map(|color| {
        Color::new(ColorSpace::LinearSrgb, color.to_linear_srgb(conditions)).in_gamut()
    });
    let lightness = |rgb: Rgb| {
        (
            Color::from(rgb).lightness(),
            Zcam::from_rgb(rgb, conditions).lightness(),
        )
    };

    loop {
        let mut changed = false;

        for index in 1..shades.len() {
            let (lab1, zcam1) = lightness(shades[index - 1]);
            let (lab2, zcam2) = lightness(shades[index]);
            if lab1 <= lab2 && zcam1 <= zcam2 {
                continue;
            }

            for position in [index - 1, index] {
                if !fixed[position] {
                    shades[position] = colors[position].to_rgb(conditions, GamutMapping::ReduceChroma);
                    fixed[position] = true;
                    changed = true;
                }
            }
        }

        if !changed {
            return shades;
        }
    }
}

/// A scheme generator.
///
/// The generator derives viewing conditions and target curves from tunables
/// once and then generates any number of schemes.
#[derive(Clone, Debug)]
pub struct SchemeGenerator {
    conditions: ViewingConditions,
    targets: TargetCurves,
    accurate_shades: bool,
}

impl SchemeGenerator {
    /// Create a new scheme generator for the tunables.
    pub fn new(tunables: &Tunables) -> Self {
        let conditions = ViewingConditions::from_user_white_luminance(tunables.white_luminance_user());
        let targets = TargetCurves::new(
            tunables.chroma_factor(),
            tunables.lightness_curve(),
            &conditions,
        );

        Self {
            conditions,
            targets,
            accurate_shades: tunables.accurate_shades(),
        }
    }

    /// Get the viewing conditions.
    pub fn conditions(&self) -> &ViewingConditions {
        &self.conditions
    }

    /// Get the target curves.
    pub fn targets(&self) -> &TargetCurves {
        &self.targets
    }

    /// Generate the scheme for the seed color.
    pub fn generate(&self, seed: Rgb) -> Scheme {
        generate(seed, &self.conditions, &self.targets, self.accurate_shades)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::target::LightnessCurve;

    #[test]
    fn test_stop() {
        assert_eq!(Stop::try_from(650_u16), Ok(Stop::new(650)));
        assert_eq!(Stop::try_from(30_u16).map(u16::from), Ok(30));
        assert_eq!(
            Stop::try_from(655_u16),
            Err(OutOfBoundsError::new(655_u16, 0..=1000))
        );
        assert!(Stop::try_from(1010_u16).is_err());
        assert_eq!(Stop::all().count(), 101);
        assert_eq!(Stop::new(30).position(), None);
        assert_eq!(Stop::new(650).position(), Some(10));
        assert!(STOPS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    #[should_panic(expected = "stop must be a multiple of 10")]
    fn test_stop_precondition() {
        let _ = Stop::new(15);
    }

    #[test]
    fn test_color_group() {
        assert_eq!(ColorGroup::Accent1.to_string(), "accent1");
        assert!(ColorGroup::Accent3.is_accent());
        assert!(!ColorGroup::Neutral2.is_accent());
        assert_eq!(ColorGroup::Accent3.hue_offset(), 60.0);
        assert_eq!(ColorGroup::Neutral1.hue_offset(), 0.0);
    }

    #[test]
    fn test_blue_scheme() {
        let scheme = SchemeGenerator::new(&Tunables::default()).generate(Rgb::new(0x42, 0x85, 0xf4));

        assert_eq!(scheme.seed(), Rgb::new(0x42, 0x85, 0xf4));
        for (_, swatch) in scheme.iter() {
            assert_eq!(swatch.len(), STOPS.len());
            assert_eq!(swatch[Stop::new(0)], Rgb::new(0, 0, 0));
            assert_eq!(swatch[Stop::new(1000)], Rgb::new(0xff, 0xff, 0xff));
        }

        assert_eq!(scheme[ColorGroup::Accent1][Stop::new(500)], Rgb::new(0x2a, 0x67, 0xc7));
        assert_eq!(scheme[ColorGroup::Neutral1][Stop::new(500)], Rgb::new(0x72, 0x76, 0x7b));
        assert_eq!(scheme.get(ColorGroup::Accent2, Stop::new(30)), None);
    }

    #[test]
    fn test_degenerate_seeds() {
        let generator = SchemeGenerator::new(&Tunables::default());
        let conditions = generator.conditions();

        for seed in [Rgb::new(0, 0, 0), Rgb::new(128, 128, 128), Rgb::new(0xff, 0xff, 0xff)] {
            let scheme = generator.generate(seed);
            let accent = Zcam::from_rgb(scheme[ColorGroup::Accent1][Stop::new(500)], conditions);
            let neutral = Zcam::from_rgb(scheme[ColorGroup::Neutral1][Stop::new(500)], conditions);

            assert_eq!(scheme[ColorGroup::Accent1][Stop::new(0)], Rgb::new(0, 0, 0));
            assert!(accent.chroma() > 5.0, "{} yields {:?}", seed, accent);
            assert!(neutral.chroma() < accent.chroma(), "{} yields {:?}", seed, neutral);
        }
    }

    #[test]
    fn test_near_gray_seeds_agree() {
        let generator = SchemeGenerator::new(&Tunables::default());
        let gray = generator.generate(Rgb::new(0x80, 0x80, 0x80));
        let almost_gray = generator.generate(Rgb::new(0x80, 0x7f, 0x80));

        for group in ColorGroup::all() {
            assert_eq!(gray.group(group), almost_gray.group(group), "{} differs", group);
        }
    }

    #[test]
    fn test_clipped_shades_stay_ordered() {
        let seeds = [
            Rgb::new(0x00, 0x33, 0x99),
            Rgb::new(0x42, 0x85, 0xf4),
            Rgb::new(0xff, 0x00, 0xcc),
        ];

        for (white_luminance_user, chroma_factor) in [(425, 1.0), (1000, 1.0), (425, 10.0)] {
            let tunables = Tunables::default()
                .with_accurate_shades(false)
                .with_white_luminance_user(white_luminance_user)
                .with_chroma_factor(chroma_factor);
            let generator = SchemeGenerator::new(&tunables);

            for seed in seeds {
                let scheme = generator.generate(seed);
                for (group, swatch) in scheme.iter() {
                    assert_eq!(swatch[Stop::new(0)], Rgb::new(0, 0, 0), "{} {}", seed, group);
                    assert_eq!(swatch[Stop::new(1000)], Rgb::new(0xff, 0xff, 0xff), "{} {}", seed, group);

                    let shades: Vec<_> = swatch.iter().map(|(_, color)| color).collect();
                    for pair in shades.windows(2) {
                        let (darker, lighter) = (pair[0], pair[1]);
                        assert!(
                            Color::from(darker).lightness() <= Color::from(lighter).lightness(),
                            "{} {}: {} is lighter than {}",
                            seed,
                            group,
                            darker,
                            lighter
                        );
                        assert!(
                            Zcam::from_rgb(darker, generator.conditions()).lightness()
                                <= Zcam::from_rgb(lighter, generator.conditions()).lightness(),
                            "{} {}: {} has more Jz than {}",
                            seed,
                            group,
                            darker,
                            lighter
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_clip_differs_only_out_of_gamut() {
        let conditions = ViewingConditions::default();
        let targets = TargetCurves::new(1.0, LightnessCurve::Perceptual, &conditions);
        let seed = Rgb::new(0x42, 0x85, 0xf4);
        let accurate = generate(seed, &conditions, &targets, true);
        let clipped = generate(seed, &conditions, &targets, false);

        let mut differences = 0;
        for group in ColorGroup::all() {
            for stop in STOPS {
                if accurate.get(group, stop) != clipped.get(group, stop) {
                    differences += 1;
                }
            }
        }
        assert_eq!(differences, 18);
    }
}
