use crate::target::LightnessCurve;
use crate::util::Settings;
use crate::zcam::ViewingConditions;
use crate::{Float, GamutMapping, Rgb};

/// The keys for reading [`Tunables`] from [`Settings`].
pub mod keys {
    /// The chroma multiplier, a non-negative number.
    pub const CHROMA_FACTOR: &str = "monet_engine_chroma_factor";
    /// The user-facing white luminance, an integer `0..=1000`.
    pub const WHITE_LUMINANCE_USER: &str = "monet_engine_white_luminance_user";
    /// Whether to reduce chroma when gamut mapping, a flag.
    pub const ACCURATE_SHADES: &str = "monet_engine_accurate_shades";
    /// Whether lightness is linear in the stop, a flag.
    pub const LINEAR_LIGHTNESS: &str = "monet_engine_linear_lightness";
    /// Whether to use the override color as seed, a flag.
    pub const CUSTOM_COLOR: &str = "monet_engine_custom_color";
    /// The override color, either an RGB integer or `#rrggbb`.
    pub const COLOR_OVERRIDE: &str = "monet_engine_color_override";
}

/// The tunable parameters of scheme generation.
///
/// All setters clamp invalid values to the nearest valid one, and so do the
/// accessors for values that were deserialized. Tunables never fail.
///
/// ```
/// # use monet::Tunables;
/// let tunables = Tunables::default()
///     .with_chroma_factor(-1.0)
///     .with_white_luminance_user(2000);
/// assert_eq!(tunables.chroma_factor(), 0.0);
/// assert_eq!(tunables.white_luminance_user(), 1000);
/// assert!(tunables.accurate_shades());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Tunables {
    chroma_factor: Float,
    white_luminance_user: u16,
    accurate_shades: bool,
    linear_lightness: bool,
    custom_color: Option<Rgb>,
}

impl Tunables {
    /// The default chroma factor.
    pub const DEFAULT_CHROMA_FACTOR: Float = 1.0;

    /// The default user-facing white luminance, which maps to roughly 200
    /// cd/m².
    pub const DEFAULT_WHITE_LUMINANCE_USER: u16 = 425;

    /// Read the tunables from settings.
    ///
    /// Missing settings take their default values. Malformed settings are
    /// logged as warnings and also take their default values. Out-of-range
    /// values are clamped.
    pub fn from_settings<S: Settings + ?Sized>(settings: &S) -> Self {
        let defaults = Self::default();

        let chroma_factor = read_or(
            keys::CHROMA_FACTOR,
            settings.read_parsed::<Float>(keys::CHROMA_FACTOR),
            defaults.chroma_factor,
        );
        let white_luminance_user = read_or(
            keys::WHITE_LUMINANCE_USER,
            settings
                .read_parsed::<i64>(keys::WHITE_LUMINANCE_USER)
                .map(|result| result.map(|value| value.clamp(0, 1000) as u16)),
            defaults.white_luminance_user,
        );
        let accurate_shades = read_or(
            keys::ACCURATE_SHADES,
            settings.read_flag(keys::ACCURATE_SHADES),
            defaults.accurate_shades,
        );
        let linear_lightness = read_or(
            keys::LINEAR_LIGHTNESS,
            settings.read_flag(keys::LINEAR_LIGHTNESS),
            defaults.linear_lightness,
        );

        let use_custom_color = read_or(
            keys::CUSTOM_COLOR,
            settings.read_flag(keys::CUSTOM_COLOR),
            false,
        );
        let custom_color = if use_custom_color {
            read_or(
                keys::COLOR_OVERRIDE,
                settings
                    .read(keys::COLOR_OVERRIDE)
                    .map(|value| parse_color(&value).map(Some).ok_or(value)),
                None,
            )
        } else {
            None
        };

        Self::default()
            .with_chroma_factor(chroma_factor)
            .with_white_luminance_user(white_luminance_user)
            .with_accurate_shades(accurate_shades)
            .with_linear_lightness(linear_lightness)
            .with_custom_color(custom_color)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Replace the chroma factor. Negative and not-a-number factors become 0.
    #[must_use = "method returns new tunables and does not mutate original value"]
    pub fn with_chroma_factor(self, chroma_factor: Float) -> Self {
        Self {
            chroma_factor: clamp_chroma_factor(chroma_factor),
            ..self
        }
    }

    /// Replace the user-facing white luminance, clamping it to `0..=1000`.
    #[must_use = "method returns new tunables and does not mutate original value"]
    pub fn with_white_luminance_user(self, value: u16) -> Self {
        Self {
            white_luminance_user: value.min(1000),
            ..self
        }
    }

    /// Replace the accurate shades flag.
    #[must_use = "method returns new tunables and does not mutate original value"]
    pub fn with_accurate_shades(self, accurate_shades: bool) -> Self {
        Self {
            accurate_shades,
            ..self
        }
    }

    /// Replace the linear lightness flag.
    #[must_use = "method returns new tunables and does not mutate original value"]
    pub fn with_linear_lightness(self, linear_lightness: bool) -> Self {
        Self {
            linear_lightness,
            ..self
        }
    }

    /// Replace the custom seed color.
    #[must_use = "method returns new tunables and does not mutate original value"]
    pub fn with_custom_color(self, custom_color: Option<Rgb>) -> Self {
        Self {
            custom_color,
            ..self
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the chroma factor.
    pub fn chroma_factor(&self) -> Float {
        clamp_chroma_factor(self.chroma_factor)
    }

    /// Get the user-facing white luminance.
    pub fn white_luminance_user(&self) -> u16 {
        self.white_luminance_user.min(1000)
    }

    /// Determine whether gamut mapping reduces chroma.
    pub fn accurate_shades(&self) -> bool {
        self.accurate_shades
    }

    /// Determine whether lightness is linear in the stop.
    pub fn linear_lightness(&self) -> bool {
        self.linear_lightness
    }

    /// Get the custom seed color.
    pub fn custom_color(&self) -> Option<Rgb> {
        self.custom_color
    }

    /// Get the gamut mapping strategy.
    pub fn gamut_mapping(&self) -> GamutMapping {
        if self.accurate_shades {
            GamutMapping::ReduceChroma
        } else {
            GamutMapping::Clip
        }
    }

    /// Get the lightness curve.
    pub fn lightness_curve(&self) -> LightnessCurve {
        if self.linear_lightness {
            LightnessCurve::Linear
        } else {
            LightnessCurve::Perceptual
        }
    }

    /// Get the viewing conditions.
    pub fn viewing_conditions(&self) -> ViewingConditions {
        ViewingConditions::from_user_white_luminance(self.white_luminance_user())
    }

    /// Determine the seed color.
    ///
    /// The custom color, if any, overrides the wallpaper color.
    pub fn seed(&self, wallpaper: Rgb) -> Rgb {
        self.custom_color.unwrap_or(wallpaper)
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            chroma_factor: Self::DEFAULT_CHROMA_FACTOR,
            white_luminance_user: Self::DEFAULT_WHITE_LUMINANCE_USER,
            accurate_shades: true,
            linear_lightness: false,
            custom_color: None,
        }
    }
}

fn clamp_chroma_factor(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Unwrap the result of reading a setting, falling back on the default for
/// missing as well as malformed settings.
fn read_or<T, E: std::fmt::Debug>(key: &str, value: Option<Result<T, E>>, default: T) -> T {
    match value {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(error)) => {
            tracing::warn!(key, ?error, "malformed setting, using default");
            default
        }
    }
}

/// Parse a color override, which is either `#rrggbb`, a signed or unsigned
/// decimal integer with the color in the lower 24 bits, or `rrggbb`.
fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if value.starts_with('#') {
        return value.parse::<Rgb>().ok();
    }

    value.parse::<i64>().map_or_else(
        |_| value.parse::<Rgb>().ok(),
        |number| Some(Rgb::from_24bit((number & 0xff_ffff) as u32)),
    )
}
