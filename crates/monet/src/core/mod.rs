mod conversion;
mod equality;
mod gamut;
mod math;
mod space;

// conversion
pub(crate) use conversion::{
    convert, from_24bit, iz_to_m_cone, izazbz_to_xyz, to_24bit, xyz_to_izazbz, xyz_to_lms, D65,
    LAB_MID_GRAY_Y,
};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, to_eq_bits};
pub(crate) use equality::{is_achromatic_chroma_hue, normalize, to_eq_coordinates};

// gamut
pub use gamut::GamutMapping;
pub(crate) use gamut::{clip, in_gamut, reduce_chroma};

// math
pub(crate) use math::{mean, FloatExt};

// space
pub use space::ColorSpace;
