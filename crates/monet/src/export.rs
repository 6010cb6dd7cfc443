//! Exporting generated schemes.
//!
//! This module flattens a finished [`Scheme`] into the two outputs consumed by
//! the embedding system: an [`Overlay`] with one ARGB entry per group and stop
//! plus a few aliases, and the four [`BootColors`] for the boot animation.
//! Installing the overlay and persisting the boot colors happen behind the
//! narrow [`OverlaySink`] and [`PropertySink`] traits, so that nothing here
//! knows how a scheme was computed or where its colors end up.

use std::collections::BTreeMap;

use crate::error::ExportError;
use crate::scheme::{ColorGroup, Scheme, Stop};
use crate::Rgb;

/// The aliases added to every overlay, with their source stop in neutral1.
const ALIASES: [(&str, Stop); 3] = [
    ("surface_light", Stop::new(20)),
    ("surface_highlight_dark", Stop::new(650)),
    ("surface_header_dark_sysui", Stop::new(950)),
];

/// Determine the overlay key for the group and stop, e.g.,
/// `system_accent1_400`.
pub fn overlay_key(group: ColorGroup, stop: Stop) -> String {
    format!("system_{}_{}", group.name(), stop)
}

/// A flattened scheme, mapping resource names to ARGB colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    entries: BTreeMap<String, u32>,
}

impl Overlay {
    /// Flatten the scheme.
    pub fn from_scheme(scheme: &Scheme) -> Self {
        let mut entries = BTreeMap::new();

        for (group, swatch) in scheme.iter() {
            for (stop, color) in swatch.iter() {
                entries.insert(overlay_key(group, stop), color.to_argb());
            }
        }

        let neutral1 = scheme.group(ColorGroup::Neutral1);
        for (name, stop) in ALIASES {
            if let Some(color) = neutral1.get(stop) {
                entries.insert(name.to_string(), color.to_argb());
            }
        }

        Self { entries }
    }

    /// Look up the ARGB color for the key.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over keys and ARGB colors, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(key, color)| (key.as_str(), *color))
    }
}

// ====================================================================================================================

/// The prefix of the properties holding the boot animation colors.
pub const BOOT_COLOR_PREFIX: &str = "persist.bootanim.color";

/// The group and stop of each boot animation color, in order.
const BOOT_COLOR_SOURCES: [(ColorGroup, Stop); 4] = [
    (ColorGroup::Accent1, Stop::new(400)),
    (ColorGroup::Accent1, Stop::new(200)),
    (ColorGroup::Accent1, Stop::new(700)),
    (ColorGroup::Accent2, Stop::new(900)),
];

/// The four colors of the boot animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BootColors([Rgb; 4]);

impl BootColors {
    /// Pick the boot colors from the scheme.
    ///
    /// Stops missing from the scheme, which cannot happen for generated
    /// schemes, fall back to black.
    pub fn from_scheme(scheme: &Scheme) -> Self {
        const BLACK: Rgb = Rgb::new(0, 0, 0);

        Self(BOOT_COLOR_SOURCES.map(|(group, stop)| scheme.get(group, stop).unwrap_or(BLACK)))
    }

    /// Get the colors.
    pub fn colors(&self) -> [Rgb; 4] {
        self.0
    }

    /// Get the colors as packed `0xRRGGBB` integers.
    pub fn to_24bit(&self) -> [u32; 4] {
        self.0.map(|color| color.to_24bit())
    }
}

// ====================================================================================================================

/// A destination for named string properties.
pub trait PropertySink {
    /// Set the property.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ExportError>;
}

/// A destination for overlays.
pub trait OverlaySink {
    /// Install the overlay.
    fn install(&mut self, overlay: Overlay) -> Result<(), ExportError>;
}

/// Export the boot animation colors.
///
/// This function writes `persist.bootanim.color1` through
/// `persist.bootanim.color4` as `#rrggbb`. Failures are logged and otherwise
/// ignored, since the boot animation falls back on its own colors. This
/// function returns the number of properties successfully written.
pub fn export_boot_colors<S: PropertySink + ?Sized>(scheme: &Scheme, sink: &mut S) -> usize {
    let mut written = 0;

    for (index, color) in BootColors::from_scheme(scheme).colors().iter().enumerate() {
        let key = format!("{}{}", BOOT_COLOR_PREFIX, index + 1);
        match sink.set(&key, &color.to_string()) {
            Ok(()) => written += 1,
            Err(error) => {
                tracing::warn!(%key, %error, "failed to export boot color");
            }
        }
    }

    written
}

/// An in-memory sink that records all properties and overlays.
#[derive(Debug, Default)]
pub struct MemorySink {
    properties: BTreeMap<String, String>,
    overlays: Vec<Overlay>,
}

impl MemorySink {
    /// Create a new memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded properties.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Get the most recently installed overlay.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlays.last()
    }

    /// Get the number of installed overlays.
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}

impl PropertySink for MemorySink {
    fn set(&mut self, key: &str, value: &str) -> Result<(), ExportError> {
        self.properties.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl OverlaySink for MemorySink {
    fn install(&mut self, overlay: Overlay) -> Result<(), ExportError> {
        self.overlays.push(overlay);
        Ok(())
    }
}
