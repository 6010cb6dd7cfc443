//! Property-based tests for scheme generation.
//!
//! 1. **Determinism**: identical inputs produce identical schemes.
//! 2. **Monotonic lightness**: within a group, lighter stops never produce
//!    darker colors, after gamut mapping with either strategy and
//!    quantization.
//! 3. **No chroma**: a chroma factor of zero produces grays only.
//! 4. **Round trip**: device colors survive the trip through ZCAM.
//! 5. **White luminance**: the user value maps to 10,000 down to 1 cd/m².
//! 6. **Boot colors**: there are always four 24-bit colors.
//! 7. **Gamut mapping**: clipping and chroma reduction only disagree on
//!    colors that are out of gamut before mapping.

use monet::export::BootColors;
use monet::scheme::{generate, ColorGroup, SchemeGenerator, STOPS};
use monet::zcam::{white_luminance_from_user, ViewingConditions, Zcam};
use monet::{Color, ColorSpace, Rgb, Tunables};
use proptest::prelude::*;

// Strategies

fn rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

fn tunables() -> impl Strategy<Value = Tunables> {
    (0.0..3.0_f64, 0_u16..=1000, any::<bool>(), any::<bool>()).prop_map(
        |(chroma_factor, white_luminance_user, accurate_shades, linear_lightness)| {
            Tunables::default()
                .with_chroma_factor(chroma_factor)
                .with_white_luminance_user(white_luminance_user)
                .with_accurate_shades(accurate_shades)
                .with_linear_lightness(linear_lightness)
        },
    )
}

fn lab_lightness(color: Rgb) -> f64 {
    Color::from(color).lightness()
}

// Properties

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generation_is_deterministic(seed in rgb(), tunables in tunables()) {
        let first = SchemeGenerator::new(&tunables).generate(seed);
        let second = SchemeGenerator::new(&tunables).generate(seed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lightness_increases_with_stop(seed in rgb(), tunables in tunables()) {
        let scheme = SchemeGenerator::new(&tunables).generate(seed);
        let conditions = tunables.viewing_conditions();

        for group in ColorGroup::all() {
            let swatch = scheme.group(group);
            for pair in STOPS.windows(2) {
                let (darker, lighter) = (swatch[pair[0]], swatch[pair[1]]);
                prop_assert!(
                    lab_lightness(darker) <= lab_lightness(lighter) + 1e-9,
                    "{} {}={} is lighter than {}={}", group, pair[0], darker, pair[1], lighter
                );

                let j1 = Zcam::from_rgb(darker, &conditions).lightness();
                let j2 = Zcam::from_rgb(lighter, &conditions).lightness();
                prop_assert!(j1 <= j2 + 1e-9, "{} {} vs {}", group, j1, j2);
            }
        }
    }

    #[test]
    fn zero_chroma_factor_yields_grays(seed in rgb(), tunables in tunables()) {
        let scheme = SchemeGenerator::new(&tunables.with_chroma_factor(0.0)).generate(seed);
        for (group, swatch) in scheme.iter() {
            for (stop, color) in swatch.iter() {
                let [r, g, b] = *color.as_ref();
                prop_assert!(r == g && g == b, "{} {} is {}", group, stop, color);
            }
        }
    }

    #[test]
    fn device_colors_round_trip(color in rgb(), white_luminance_user in 0_u16..=1000) {
        let conditions = ViewingConditions::from_user_white_luminance(white_luminance_user);
        let zcam = Zcam::from_rgb(color, &conditions);
        let back = zcam.to_rgb(&conditions, Default::default());

        for index in 0..3 {
            prop_assert!(
                color[index].abs_diff(back[index]) <= 1,
                "{} became {}", color, back
            );
        }
    }

    #[test]
    fn boot_colors_are_24bit(seed in rgb(), tunables in tunables()) {
        let scheme = SchemeGenerator::new(&tunables).generate(seed);
        let colors = BootColors::from_scheme(&scheme).to_24bit();
        prop_assert_eq!(colors.len(), 4);
        prop_assert!(colors.iter().all(|color| *color <= 0xff_ffff));
    }

    #[test]
    fn clipping_only_changes_out_of_gamut_colors(seed in rgb(), tunables in tunables()) {
        let generator = SchemeGenerator::new(&tunables);
        let conditions = generator.conditions();
        let targets = generator.targets();
        let accurate = generate(seed, conditions, targets, true);
        let clipped = generate(seed, conditions, targets, false);

        let hue = targets.seed_hue(&Zcam::from_rgb(seed, conditions));

        for group in ColorGroup::all() {
            for stop in STOPS {
                let target = targets.target(group, stop);
                let color = Zcam::new(target.lightness(), target.chroma(), hue + group.hue_offset());
                let in_gamut = Color::new(ColorSpace::LinearSrgb, color.to_linear_srgb(conditions)).in_gamut();

                if in_gamut {
                    prop_assert_eq!(accurate.get(group, stop), clipped.get(group, stop));
                }
            }
        }
    }
}

// Fixed scenarios

#[test]
fn white_luminance_mapping() {
    assert_eq!(white_luminance_from_user(1000), 1.0);
    assert_eq!(white_luminance_from_user(0), 10_000.0);

    let values: Vec<_> = (0..=1000).map(white_luminance_from_user).collect();
    assert!(values.windows(2).all(|pair| pair[0] > pair[1]), "not decreasing");
}

#[test]
fn blue_seed_scenario() {
    let tunables = Tunables::default();
    let conditions = tunables.viewing_conditions();
    let seed = Rgb::from_24bit(0x4285f4);
    let scheme = SchemeGenerator::new(&tunables).generate(seed);
    let seed_hue = Zcam::from_rgb(seed, &conditions).hue();

    let accent = scheme[ColorGroup::Accent1][STOPS[8]];
    let lightness = lab_lightness(accent);
    assert!((35.0..65.0).contains(&lightness), "{} has L* {}", accent, lightness);
    let accent = Zcam::from_rgb(accent, &conditions);
    assert!((accent.hue() - seed_hue).abs() < 5.0, "{:?}", accent);
    assert!(accent.chroma() > 15.0, "{:?}", accent);
    let [r, g, b] = *scheme[ColorGroup::Accent1][STOPS[8]].as_ref();
    assert!(b > r && b > g, "accent1 500 is not blue");

    let neutral = Zcam::from_rgb(scheme[ColorGroup::Neutral1][STOPS[8]], &conditions);
    assert!(neutral.chroma() < 3.0, "{:?}", neutral);
    assert!((neutral.hue() - seed_hue).abs() < 10.0, "{:?}", neutral);
}

#[test]
fn accurate_shades_scenario() {
    let seed = Rgb::from_24bit(0x4285f4);
    let accurate = SchemeGenerator::new(&Tunables::default()).generate(seed);
    let clipped =
        SchemeGenerator::new(&Tunables::default().with_accurate_shades(false)).generate(seed);

    assert_ne!(accurate, clipped);
    // Neutrals have little chroma and stay in gamut.
    assert_eq!(
        accurate.group(ColorGroup::Neutral1),
        clipped.group(ColorGroup::Neutral1)
    );
}

#[cfg(feature = "serde")]
#[test]
fn tunables_serialize() {
    let tunables = Tunables::default()
        .with_chroma_factor(1.5)
        .with_custom_color(Some(Rgb::new(0x42, 0x85, 0xf4)));
    let json = serde_json::to_string(&tunables).expect("tunables serialize");
    assert!(json.contains("\"#4285f4\""), "{}", json);
    let back: Tunables = serde_json::from_str(&json).expect("tunables deserialize");
    assert_eq!(back, tunables);

    let partial: Tunables =
        serde_json::from_str("{\"linear_lightness\": true}").expect("defaults fill in");
    assert!(partial.linear_lightness());
    assert_eq!(partial.white_luminance_user(), 425);
}
