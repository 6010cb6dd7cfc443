use super::{clip, normalize, ColorSpace};
use crate::Float;

/// Scale 8-bit coordinates to the unit range.
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r, g, b].map(|c| Float::from(c) / 255.0)
}

/// Quantize RGB coordinates to 8 bits each.
///
/// Coordinates are normalized and clipped first, so out-of-gamut and
/// not-a-number coordinates still produce valid bytes.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    clip(space, &normalize(space, coordinates)).map(|c| (c * 255.0).round() as u8)
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the product of a 3×3 matrix and a column vector.
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *vector;
    matrix.map(|[m1, m2, m3]| m1.mul_add(x, m2.mul_add(y, m3 * z)))
}

// --------------------------------------------------------------------------------------------------------------------

/// The sRGB transfer function.
///
/// Both directions mirror negative inputs, so that out-of-gamut linear
/// coordinates survive a round trip through gamma-encoded sRGB.
mod transfer {
    use crate::Float;

    /// Decode one gamma-encoded coordinate.
    pub(super) fn decode(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    /// Encode one linear coordinate.
    pub(super) fn encode(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude.powf(1.0 / 2.4).mul_add(1.055, -0.055).copysign(value)
        }
    }
}

fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(transfer::decode)
}

fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(transfer::encode)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// The relative XYZ coordinates of the D65 standard illuminant.
///
/// These are the coordinates of sRGB white under the above matrix, which keeps
/// sRGB grays exactly achromatic in CIELAB.
#[allow(clippy::excessive_precision)]
pub(crate) const D65: [Float; 3] = [0.9504559270516717, 1.0, 1.0890577507598784];

/// The relative luminance Y of a CIELAB mid-gray, i.e., with L* = 50.
#[allow(clippy::excessive_precision)]
pub(crate) const LAB_MID_GRAY_Y: Float = 0.18418651851244416;

/// CIELAB and its polar form CIELCh, both relative to [`D65`].
#[allow(non_snake_case)]
mod cielab {
    use super::D65;
    use crate::Float;

    const EPSILON: Float = 216.0 / 24389.0;
    const KAPPA: Float = 24389.0 / 27.0;

    /// Below this magnitude for both a* and b*, the hue is powerless.
    const ACHROMATIC_EPSILON: Float = 0.02;

    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    fn f_inverse(t: Float) -> Float {
        let cube = t.powi(3);
        if cube > EPSILON {
            cube
        } else {
            t.mul_add(116.0, -16.0) / KAPPA
        }
    }

    pub(super) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let [fx, fy, fz] = [0, 1, 2].map(|index| f(value[index] / D65[index]));
        [fy.mul_add(116.0, -16.0), 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    pub(super) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;
        let fy = (L + 16.0) / 116.0;

        let y = if L > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            L / KAPPA
        };
        let x = f_inverse(a / 500.0 + fy);
        let z = f_inverse(fy - b / 200.0);

        [x * D65[0], y * D65[1], z * D65[2]]
    }

    /// Grays get a not-a-number hue.
    pub(super) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;
        if a.abs() < ACHROMATIC_EPSILON && b.abs() < ACHROMATIC_EPSILON {
            [L, 0.0, Float::NAN]
        } else {
            [L, a.hypot(b), b.atan2(a).to_degrees().rem_euclid(360.0)]
        }
    }

    pub(super) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;
        if h.is_nan() {
            return [L, 0.0, 0.0];
        }

        let (sin, cos) = h.to_radians().sin_cos();
        [L, C * cos, C * sin]
    }
}

use cielab::{lab_to_lch, lab_to_xyz, lch_to_lab, xyz_to_lab};

// --------------------------------------------------------------------------------------------------------------------
// Izazbz, the opponent color space underlying ZCAM. Its input is *absolute* XYZ
// in cd/m². See Safdar et al. (2021), "ZCAM, a colour appearance model based on
// a high dynamic range uniform colour space", Optics Express 29(4).

mod izazbz {
    use super::multiply;
    use crate::Float;

    const B: Float = 1.15;
    const G: Float = 0.66;

    const C1: Float = 3424.0 / 4096.0;
    const C2: Float = 2413.0 / 128.0;
    const C3: Float = 2392.0 / 128.0;
    const ETA: Float = 2610.0 / 16384.0;
    const RHO: Float = 1.7 * 2523.0 / 32.0;

    /// The offset that makes absolute black have zero Iz.
    #[allow(clippy::excessive_precision)]
    const EPSILON: Float = 3.7035226210190005e-11;

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const XYZ_TO_LMS: [[Float; 3]; 3] = [
        [  0.41478972, 0.579999, 0.0146480 ],
        [ -0.2015100,  1.120649, 0.0531008 ],
        [ -0.0166008,  0.264800, 0.6684799 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_XYZ: [[Float; 3]; 3] = [
        [  1.9242264357876067,  -1.0047923125953655,  0.03765140403061801 ],
        [  0.35031676209499907,  0.7264811939316552, -0.06538442294808502 ],
        [ -0.09098281098284758, -0.312728290523074,   1.5227665613052606  ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_IZAZBZ: [[Float; 3]; 3] = [
        [ 0.0,       1.0,       0.0      ],
        [ 3.524000, -4.066708,  0.542708 ],
        [ 0.199076,  1.096799, -1.295875 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const IZAZBZ_TO_LMS: [[Float; 3]; 3] = [
        [ 1.0, 0.2772100865430786,   0.11609463231223775 ],
        [ 1.0, 0.0,                  0.0                 ],
        [ 1.0, 0.042585801245220344, -0.7538445798999202 ],
    ];

    /// Apply the perceptual quantizer to absolute cone responses.
    #[inline]
    fn pq(value: Float) -> Float {
        let scaled = (value.abs() / 10_000.0).powf(ETA).copysign(value);
        let ratio = C2.mul_add(scaled, C1) / C3.mul_add(scaled, 1.0);
        ratio.abs().powf(RHO).copysign(ratio)
    }

    /// Invert the perceptual quantizer.
    #[inline]
    fn pq_inverse(value: Float) -> Float {
        let root = value.abs().powf(RHO.recip()).copysign(value);
        let ratio = (C1 - root) / C3.mul_add(root, -C2);
        10_000.0 * ratio.abs().powf(ETA.recip()).copysign(ratio)
    }

    /// Determine the absolute cone responses for absolute XYZ.
    #[inline]
    pub(crate) fn xyz_to_lms(value: &[Float; 3]) -> [Float; 3] {
        let [x, y, z] = *value;
        let x_prime = B.mul_add(x, -(B - 1.0) * z);
        let y_prime = G.mul_add(y, -(G - 1.0) * x);
        multiply(&XYZ_TO_LMS, &[x_prime, y_prime, z])
    }

    /// Absolute XYZ to Izazbz.
    pub(crate) fn xyz_to_izazbz(value: &[Float; 3]) -> [Float; 3] {
        let [l, m, s] = xyz_to_lms(value);
        let [iz, az, bz] = multiply(&LMS_TO_IZAZBZ, &[pq(l), pq(m), pq(s)]);
        [iz - EPSILON, az, bz]
    }

    /// Izazbz to absolute XYZ.
    pub(crate) fn izazbz_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        let [iz, az, bz] = *value;
        let [l, m, s] = multiply(&IZAZBZ_TO_LMS, &[iz + EPSILON, az, bz]);
        let [x_prime, y_prime, z] =
            multiply(&LMS_TO_XYZ, &[pq_inverse(l), pq_inverse(m), pq_inverse(s)]);

        let x = (B - 1.0).mul_add(z, x_prime) / B;
        let y = (G - 1.0).mul_add(x, y_prime) / G;
        [x, y, z]
    }

    /// Determine the absolute M cone response for the given Iz.
    ///
    /// Since Iz depends on the M cone only, this function is the exact
    /// inverse for colors along any neutral axis.
    pub(crate) fn iz_to_m_cone(iz: Float) -> Float {
        pq_inverse(iz + EPSILON)
    }
}

pub(crate) use izazbz::{iz_to_m_cone, izazbz_to_xyz, xyz_to_izazbz, xyz_to_lms};

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates between color spaces.
///
/// Coordinates are normalized first. Conversions within the RGB family and
/// within the CIELAB family take a single hop, all others go through XYZ.
/// The result may be out of gamut.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(from: ColorSpace, to: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    let coordinates = normalize(from, coordinates);
    match (from, to) {
        _ if from == to => return coordinates,
        (Srgb, LinearSrgb) => return rgb_to_linear_rgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_rgb_to_rgb(&coordinates),
        (CieLch, CieLab) => return lch_to_lab(&coordinates),
        (CieLab, CieLch) => return lab_to_lch(&coordinates),
        _ => {}
    }

    let xyz = match from {
        Srgb => linear_srgb_to_xyz(&rgb_to_linear_rgb(&coordinates)),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Xyz => coordinates,
        CieLab => lab_to_xyz(&coordinates),
        CieLch => lab_to_xyz(&lch_to_lab(&coordinates)),
    };

    match to {
        Srgb => linear_rgb_to_rgb(&xyz_to_linear_srgb(&xyz)),
        LinearSrgb => xyz_to_linear_srgb(&xyz),
        Xyz => xyz,
        CieLab => xyz_to_lab(&xyz),
        CieLch => lab_to_lch(&xyz_to_lab(&xyz)),
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, ColorSpace::*};
    use crate::Float;

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        xyz: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        srgb: [0.0, 0.0, 0.0],
        linear_srgb: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
    };

    const YELLOW: Representations = Representations {
        // #ffca00
        srgb: [1.0, 0.792156862745098, 0.0],
        linear_srgb: [1.0, 0.5906188409193369, 0.0],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        srgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        linear_srgb: [
            0.030713443732993635,
            0.18782077230067787,
            0.8227857543962835,
        ],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        srgb: [1.0, 1.0, 1.0],
        linear_srgb: [1.0, 1.0, 1.0],
        xyz: [0.9504559270516717, 1.0, 1.0890577507598784],
    };

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &YELLOW, &BLUE, &WHITE].iter() {
            let linear_srgb = rgb_to_linear_rgb(&color.srgb);
            assert_same_coordinates!(LinearSrgb, &linear_srgb, &color.linear_srgb);

            let srgb = linear_rgb_to_rgb(&linear_srgb);
            assert_same_coordinates!(Srgb, &srgb, &color.srgb);

            let xyz = linear_srgb_to_xyz(&linear_srgb);
            assert_same_coordinates!(Xyz, &xyz, &color.xyz);

            let also_linear_srgb = xyz_to_linear_srgb(&xyz);
            assert_same_coordinates!(LinearSrgb, &also_linear_srgb, &linear_srgb);

            let lab = xyz_to_lab(&xyz);
            let also_xyz = lab_to_xyz(&lab);
            assert_same_coordinates!(Xyz, &also_xyz, &xyz);

            let lch = lab_to_lch(&lab);
            let also_lab = lch_to_lab(&lch);
            assert_same_coordinates!(CieLab, &also_lab, &lab);
        }
    }

    #[test]
    fn test_cielab() {
        let white = convert(Srgb, CieLab, &[1.0, 1.0, 1.0]);
        assert!((white[0] - 100.0).abs() < 1e-9);
        assert!(white[1].abs() < 1e-9 && white[2].abs() < 1e-9);

        let gray = convert(CieLab, Xyz, &[50.0, 0.0, 0.0]);
        assert!((gray[1] - LAB_MID_GRAY_Y).abs() < 1e-15);

        let dark = convert(CieLab, Xyz, &[5.0, 0.0, 0.0]);
        assert!((convert(Xyz, CieLab, &dark)[0] - 5.0).abs() < 1e-9);

        let gray = convert(Srgb, CieLch, &[0.5, 0.5, 0.5]);
        assert_eq!(gray[1], 0.0);
        assert!(gray[2].is_nan());

        let red = convert(Srgb, CieLch, &[1.0, 0.0, 0.0]);
        assert!((red[0] - 53.24).abs() < 0.01, "{:?}", red);
        assert!((red[1] - 104.55).abs() < 0.01, "{:?}", red);
        assert!((red[2] - 40.0).abs() < 0.1, "{:?}", red);
    }

    #[test]
    fn test_izazbz() {
        // Izazbz needs absolute coordinates; use a 200 cd/m² white.
        let white = [D65[0] * 200.0, D65[1] * 200.0, D65[2] * 200.0];
        for xyz in [white, [0.0, 0.0, 0.0], [45.6, 40.0, 161.0], [124.7, 127.0, 17.9]] {
            let izazbz = xyz_to_izazbz(&xyz);
            let also_xyz = izazbz_to_xyz(&izazbz);
            for index in 0..3 {
                assert!(
                    (xyz[index] - also_xyz[index]).abs() < 1e-6,
                    "{:?} vs {:?}",
                    xyz,
                    also_xyz
                );
            }
        }

        assert!(xyz_to_izazbz(&[0.0, 0.0, 0.0])[0].abs() < 1e-15);
        let brighter = xyz_to_izazbz(&[D65[0] * 400.0, D65[1] * 400.0, D65[2] * 400.0]);
        assert!(xyz_to_izazbz(&white)[0] < brighter[0]);
    }

    #[test]
    fn test_neutral_axis() {
        let white = [D65[0] * 150.0, D65[1] * 150.0, D65[2] * 150.0];
        let m_cone = xyz_to_lms(&white)[1];
        let iz = xyz_to_izazbz(&white)[0];
        assert!((iz_to_m_cone(iz) - m_cone).abs() < 1e-9);
    }
}
