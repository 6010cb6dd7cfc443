//! The ZCAM color appearance model and the viewing conditions it depends on.
//!
//! ZCAM's lightness, chroma, and hue only make sense relative to
//! [`ViewingConditions`], which capture the luminance of the reference white,
//! the adapting and background luminance, and the surround. Since monet
//! derives all viewing conditions from the reference white's luminance, every
//! conversion between [`Color`](crate::Color) and [`Zcam`] goes through
//! *absolute* XYZ scaled by that luminance.

mod conditions;
mod model;

pub use conditions::{white_luminance_from_user, Surround, ViewingConditions};
pub use model::Zcam;
