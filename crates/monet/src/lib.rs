//! # Monet
//!
//! Monet derives complete, tonally ordered color schemes from a single seed
//! color. It samples five color groups at a fixed set of tonal stops in the
//! [ZCAM](https://doi.org/10.1364/OE.413659) color appearance model and maps
//! the results back into the sRGB gamut, so that the same seed and tunables
//! always produce the very same palette.
//!
//!
//! ## 1. Overview
//!
//! Monet's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. It converts between
//!     sRGB, linear sRGB, XYZ, CIELAB, and CIELCh. [`Rgb`] is the 24-bit
//!     device color both consumed as seed and produced as output.
//!   * [`ViewingConditions`](zcam::ViewingConditions) capture the assumed
//!     observation environment, and [`Zcam`](zcam::Zcam) is a color in the
//!     appearance model under those conditions.
//!   * [`TargetCurves`](target::TargetCurves) determine the lightness and
//!     chroma for every [`ColorGroup`](scheme::ColorGroup) and
//!     [`Stop`](scheme::Stop).
//!   * [`SchemeGenerator`](scheme::SchemeGenerator) turns a seed color into a
//!     [`Scheme`](scheme::Scheme), which holds one [`Swatch`](scheme::Swatch)
//!     per color group.
//!   * The [`export`] module flattens a scheme into overlay entries and boot
//!     animation colors, and [`ThemeEngine`](engine::ThemeEngine) keeps the
//!     current scheme up to date as seed color and [`Tunables`] change.
//!
//!
//! ## 2. One-Two-Three: Palettes!
//!
//! ```
//! # use monet::{Rgb, Tunables};
//! # use monet::scheme::{ColorGroup, SchemeGenerator, Stop};
//! // 1. Pick tunables, possibly read from settings
//! let tunables = Tunables::default();
//!
//! // 2. Generate the scheme for the seed color
//! let generator = SchemeGenerator::new(&tunables);
//! let scheme = generator.generate(Rgb::new(0x42, 0x85, 0xf4));
//!
//! // 3. Look up colors
//! let primary = scheme.group(ColorGroup::Accent1)[Stop::new(500)];
//! assert_eq!(scheme.get(ColorGroup::Neutral1, Stop::new(30)), None);
//! # let _ = primary;
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Monet supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives serialization for [`Tunables`], [`Rgb`], and the
//!     scheme types. This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod engine;
pub mod error;
pub mod export;
mod object;
mod rgb;
pub mod scheme;
pub mod target;
mod tunables;
mod util;
pub mod zcam;

pub use core::{ColorSpace, GamutMapping};
pub use object::Color;
pub use rgb::Rgb;
pub use tunables::{keys, Tunables};
pub use util::{Env, Settings};
