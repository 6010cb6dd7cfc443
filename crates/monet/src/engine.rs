//! Keeping the current scheme up to date.
//!
//! [`ThemeEngine`] reacts to the two events that invalidate a scheme, a new
//! wallpaper color and new tunables, by regenerating the scheme from scratch.
//! Inputs and scheme are published as immutable snapshots through
//! [`arc_swap`], so readers never block and never observe a scheme that is
//! still being built. A scheme is only kept if the inputs it was generated
//! from are still current once it has been published. Otherwise, it is
//! generated again, so that racing events always settle on the scheme for
//! the latest inputs.

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};

use crate::error::ExportError;
use crate::export::{export_boot_colors, Overlay, OverlaySink, PropertySink};
use crate::scheme::{Scheme, SchemeGenerator};
use crate::{Rgb, Settings, Tunables};

/// The inputs to scheme generation.
#[derive(Clone, Debug)]
struct Inputs {
    tunables: Tunables,
    wallpaper: Option<Rgb>,
}

impl Inputs {
    fn seed(&self) -> Option<Rgb> {
        self.tunables.custom_color().or(self.wallpaper)
    }
}

/// A theme engine.
///
/// The engine is `Send + Sync` and all its methods take `&self`, so it can be
/// shared between threads, e.g., with an [`Arc`].
///
/// ```
/// # use monet::{Rgb, Tunables};
/// # use monet::engine::ThemeEngine;
/// # use monet::export::MemorySink;
/// let engine = ThemeEngine::new(Tunables::default());
/// assert!(engine.scheme().is_none());
///
/// let scheme = engine.on_wallpaper_changed(Rgb::new(0x42, 0x85, 0xf4));
/// assert_eq!(engine.scheme(), Some(scheme));
///
/// let mut sink = MemorySink::new();
/// assert!(engine.apply(&mut sink, &mut MemorySink::new()).is_ok());
/// assert_eq!(sink.overlay_count(), 1);
/// ```
#[derive(Debug)]
pub struct ThemeEngine {
    inputs: ArcSwap<Inputs>,
    scheme: ArcSwapOption<Scheme>,
}

impl ThemeEngine {
    /// Create a new theme engine with the tunables and without wallpaper
    /// color.
    pub fn new(tunables: Tunables) -> Self {
        Self {
            inputs: ArcSwap::from_pointee(Inputs {
                tunables,
                wallpaper: None,
            }),
            scheme: ArcSwapOption::empty(),
        }
    }

    /// Create a new theme engine with tunables read from settings.
    pub fn from_settings<S: Settings + ?Sized>(settings: &S) -> Self {
        Self::new(Tunables::from_settings(settings))
    }

    /// Get the current tunables.
    pub fn tunables(&self) -> Tunables {
        self.inputs.load().tunables.clone()
    }

    /// Get the current wallpaper color.
    pub fn wallpaper(&self) -> Option<Rgb> {
        self.inputs.load().wallpaper
    }

    /// Get the current scheme.
    ///
    /// This method returns `None` until the engine has a seed color, either
    /// because the wallpaper color is known or the tunables include a custom
    /// color.
    pub fn scheme(&self) -> Option<Arc<Scheme>> {
        self.scheme.load_full()
    }

    /// Handle a new wallpaper color.
    ///
    /// This method regenerates the scheme and returns it. If the tunables
    /// include a custom color, the scheme is generated from that color
    /// instead.
    pub fn on_wallpaper_changed(&self, wallpaper: Rgb) -> Arc<Scheme> {
        self.inputs.rcu(|inputs| Inputs {
            wallpaper: Some(wallpaper),
            ..Inputs::clone(inputs)
        });

        // The wallpaper is never reset, so it remains a seed for all later inputs.
        self.settle(|inputs| build(&inputs.tunables, inputs.seed().unwrap_or(wallpaper)))
    }

    /// Handle new tunables.
    ///
    /// This method regenerates the scheme and returns it, unless there is no
    /// seed color yet.
    pub fn on_tunables_changed(&self, tunables: Tunables) -> Option<Arc<Scheme>> {
        self.inputs.rcu(|inputs| Inputs {
            tunables: tunables.clone(),
            ..Inputs::clone(inputs)
        });

        self.regenerate()
    }

    /// Regenerate the scheme from the current inputs.
    ///
    /// Without seed color, the engine has no scheme.
    pub fn regenerate(&self) -> Option<Arc<Scheme>> {
        self.settle(|inputs| {
            let seed = inputs.seed();
            if seed.is_none() {
                tracing::debug!("no seed color, not generating scheme");
            }
            seed.map(|seed| build(&inputs.tunables, seed))
        })
    }

    /// Publish schemes built from the current inputs until the inputs stay
    /// the same while building and publishing.
    ///
    /// Every event updates the inputs before calling this method. Hence the
    /// last store to the scheme always uses the latest inputs, even if a
    /// slower regeneration for older inputs completes later.
    fn settle<S, F>(&self, generate: F) -> S
    where
        S: Clone + Into<Option<Arc<Scheme>>>,
        F: Fn(&Inputs) -> S,
    {
        loop {
            let inputs = self.inputs.load_full();
            let scheme = generate(&inputs);
            self.scheme.store(scheme.clone().into());

            if Arc::ptr_eq(&inputs, &*self.inputs.load()) {
                return scheme;
            }
            tracing::debug!("inputs changed during regeneration, regenerating again");
        }
    }

    /// Export the current scheme.
    ///
    /// This method installs the overlay and writes the boot animation colors.
    /// It returns `Ok(false)` if there is no scheme yet. Failures to install
    /// the overlay are returned, whereas failures to write boot colors are
    /// only logged.
    pub fn apply<O, P>(&self, overlays: &mut O, properties: &mut P) -> Result<bool, ExportError>
    where
        O: OverlaySink + ?Sized,
        P: PropertySink + ?Sized,
    {
        let Some(scheme) = self.scheme() else {
            return Ok(false);
        };

        overlays.install(Overlay::from_scheme(&scheme))?;
        export_boot_colors(&scheme, properties);
        Ok(true)
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(Tunables::default())
    }
}

/// Generate the scheme for the tunables and seed color.
fn build(tunables: &Tunables, seed: Rgb) -> Arc<Scheme> {
    let scheme = Arc::new(SchemeGenerator::new(tunables).generate(seed));

    tracing::debug!(
        %seed,
        chroma_factor = tunables.chroma_factor(),
        white_luminance_user = tunables.white_luminance_user(),
        accurate_shades = tunables.accurate_shades(),
        linear_lightness = tunables.linear_lightness(),
        "regenerated scheme"
    );

    scheme
}
