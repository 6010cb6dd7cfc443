use crate::core::{xyz_to_izazbz, xyz_to_lms, D65, LAB_MID_GRAY_Y};
use crate::Float;

/// The surround of the viewing field.
///
/// Monet always assumes an average surround, i.e., a display viewed in a
/// reasonably lit room. The other variants exist for custom viewing
/// conditions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Surround {
    Dark,
    Dim,
    #[default]
    Average,
}

impl Surround {
    /// Get the surround factor F_s.
    pub const fn factor(&self) -> Float {
        match self {
            Self::Dark => 0.525,
            Self::Dim => 0.59,
            Self::Average => 0.69,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The largest supported white luminance in cd/m².
const MAX_WHITE_LUMINANCE: Float = 10_000.0;

/// The smallest supported white luminance in cd/m².
const MIN_WHITE_LUMINANCE: Float = 1.0;

/// The largest user-facing white luminance value.
pub(crate) const MAX_WHITE_LUMINANCE_USER: u16 = 1000;

/// Map the user-facing white luminance to cd/m².
///
/// The user value ranges `0..=1000` and larger values are clamped. The mapping
/// is logarithmic and decreasing: 0 yields 10,000 cd/m², 1000 yields 1 cd/m²,
/// and the default of 425 yields roughly 200 cd/m².
///
/// ```
/// # use monet::zcam::white_luminance_from_user;
/// assert_eq!(white_luminance_from_user(0), 10_000.0);
/// assert_eq!(white_luminance_from_user(1000), 1.0);
/// assert!((white_luminance_from_user(425) - 199.526).abs() < 0.001);
/// ```
pub fn white_luminance_from_user(value: u16) -> Float {
    let value = value.min(MAX_WHITE_LUMINANCE_USER);
    let t = 1.0 - value as Float / MAX_WHITE_LUMINANCE_USER as Float;
    let luminance = (10.0 as Float).powf(t * MAX_WHITE_LUMINANCE.log10());
    luminance.clamp(MIN_WHITE_LUMINANCE, MAX_WHITE_LUMINANCE)
}

// --------------------------------------------------------------------------------------------------------------------

/// The viewing conditions for the ZCAM color appearance model.
///
/// Besides the four defining quantities, a viewing conditions value caches
/// the derived factors used by every conversion: the background factor F_b,
/// the luminance level adaptation factor F_L, and the reference white's Iz,
/// brightness Qz, and absolute M cone response. Instances are immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewingConditions {
    surround: Surround,
    adapting_luminance: Float,
    background_luminance: Float,
    reference_white: [Float; 3],

    background_factor: Float,
    luminance_factor: Float,
    white_iz: Float,
    white_brightness: Float,
    white_m_cone: Float,
}

impl ViewingConditions {
    /// Create new viewing conditions.
    ///
    /// The adapting luminance L_a and background luminance Y_b are in cd/m²,
    /// and the reference white is in absolute XYZ. The reference white should
    /// have the D65 chromaticity, since monet performs no chromatic
    /// adaptation.
    pub fn new(
        surround: Surround,
        adapting_luminance: Float,
        background_luminance: Float,
        reference_white: [Float; 3],
    ) -> Self {
        let background_factor = (background_luminance / reference_white[1]).sqrt();
        let luminance_factor = 0.171
            * adapting_luminance.cbrt()
            * (1.0 - (-48.0 / 9.0 * adapting_luminance).exp());
        let white_iz = xyz_to_izazbz(&reference_white)[0];
        let white_m_cone = xyz_to_lms(&reference_white)[1];

        let mut conditions = Self {
            surround,
            adapting_luminance,
            background_luminance,
            reference_white,
            background_factor,
            luminance_factor,
            white_iz,
            white_brightness: 0.0,
            white_m_cone,
        };
        conditions.white_brightness = conditions.brightness(white_iz);
        conditions
    }

    /// Create the viewing conditions for a display with the given white
    /// luminance in cd/m².
    ///
    /// The adapting luminance is 40% of the white luminance, the background is
    /// a CIELAB mid-gray, the reference white is D65, and the surround is
    /// average.
    pub fn from_white_luminance(white_luminance: Float) -> Self {
        let [x, y, z] = D65;
        Self::new(
            Surround::Average,
            0.4 * white_luminance,
            LAB_MID_GRAY_Y * white_luminance,
            [x * white_luminance, y * white_luminance, z * white_luminance],
        )
    }

    /// Create the viewing conditions for the user-facing white luminance
    /// value, which is clamped into `0..=1000`.
    pub fn from_user_white_luminance(value: u16) -> Self {
        Self::from_white_luminance(white_luminance_from_user(value))
    }

    /// Get the surround.
    pub fn surround(&self) -> Surround {
        self.surround
    }

    /// Get the adapting luminance L_a in cd/m².
    pub fn adapting_luminance(&self) -> Float {
        self.adapting_luminance
    }

    /// Get the background luminance Y_b in cd/m².
    pub fn background_luminance(&self) -> Float {
        self.background_luminance
    }

    /// Get the reference white in absolute XYZ.
    pub fn reference_white(&self) -> [Float; 3] {
        self.reference_white
    }

    /// Get the luminance of the reference white in cd/m².
    pub fn white_luminance(&self) -> Float {
        self.reference_white[1]
    }

    /// Get the background factor F_b.
    pub fn background_factor(&self) -> Float {
        self.background_factor
    }

    /// Get the luminance level adaptation factor F_L.
    pub fn luminance_factor(&self) -> Float {
        self.luminance_factor
    }

    /// Get the reference white's Iz.
    pub fn white_iz(&self) -> Float {
        self.white_iz
    }

    /// Get the reference white's brightness Qz.
    pub fn white_brightness(&self) -> Float {
        self.white_brightness
    }

    pub(crate) fn white_m_cone(&self) -> Float {
        self.white_m_cone
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// The factor scaling Iz to brightness.
    fn brightness_factor(&self) -> Float {
        2700.0
            * self.surround.factor().powf(2.2)
            * self.background_factor.sqrt()
            * self.luminance_factor.powf(0.2)
    }

    /// The exponent applied to Iz when computing brightness.
    fn brightness_exponent(&self) -> Float {
        1.6 * self.surround.factor() / self.background_factor.powf(0.12)
    }

    /// Compute the brightness Qz for the given Iz.
    pub(crate) fn brightness(&self, iz: Float) -> Float {
        iz.max(0.0).powf(self.brightness_exponent()) * self.brightness_factor()
    }

    /// Compute Iz for the given brightness Qz.
    pub(crate) fn iz_from_brightness(&self, brightness: Float) -> Float {
        (brightness.max(0.0) / self.brightness_factor()).powf(self.brightness_exponent().recip())
    }

    /// The factor scaling the colorfulness term (az² + bz²)^0.37 · ez^0.068.
    pub(crate) fn colorfulness_factor(&self) -> Float {
        100.0 * self.luminance_factor.powf(0.2)
            / (self.background_factor.powf(0.1) * self.white_iz.powf(0.78))
    }
}

impl Default for ViewingConditions {
    /// Create the viewing conditions for the default user-facing white
    /// luminance of 425.
    fn default() -> Self {
        Self::from_user_white_luminance(crate::Tunables::DEFAULT_WHITE_LUMINANCE_USER)
    }
}
