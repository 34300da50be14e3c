//! Single-line path editor backing the link geometry field.
//!
//! Mirrors the interactive draw surface: the host seeds it with any stored
//! geometry, feeds it draw events, and receives the encoded WKT text
//! through a change callback. The map access token is explicit
//! construction-time configuration; without one the editor stays a
//! placeholder and reports nothing.

use shared::wkt;
use tracing::debug;

/// Default view centered on Brasília.
pub const DEFAULT_CENTER: (f64, f64) = (-47.9292, -15.7801);
pub const DEFAULT_ZOOM: f64 = 5.0;

const FIT_PADDING_PX: f64 = 50.0;
const FIT_MAX_ZOOM: f64 = 15.0;
const VIEWPORT_PX: f64 = 512.0;

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub access_token: String,
    pub center: (f64, f64),
    pub zoom: f64,
}

impl MapConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// Hosts load the token through the shared config layer; the view defaults
/// stay with the editor.
impl From<shared::MapTokenConfig> for MapConfig {
    fn from(config: shared::MapTokenConfig) -> Self {
        Self::new(config.access_token)
    }
}

/// A draw-tool interaction on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    Create(Vec<(f64, f64)>),
    Update(Vec<(f64, f64)>),
    Delete,
}

/// Axis-aligned bounding box over drawn coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl Bounds {
    pub fn from_coords(coords: &[(f64, f64)]) -> Option<Self> {
        let (first, rest) = coords.split_first()?;
        let mut bounds = Bounds {
            min: *first,
            max: *first,
        };
        for coord in rest {
            bounds.extend(*coord);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, (x, y): (f64, f64)) {
        self.min.0 = self.min.0.min(x);
        self.min.1 = self.min.1.min(y);
        self.max.0 = self.max.0.max(x);
        self.max.1 = self.max.1.max(y);
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min.0 + self.max.0) / 2.0,
            (self.min.1 + self.max.1) / 2.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: f64,
}

pub struct PathEditor<F: FnMut(&str)> {
    config: MapConfig,
    feature: Option<Vec<(f64, f64)>>,
    viewport: Viewport,
    on_change: F,
}

impl<F: FnMut(&str)> PathEditor<F> {
    /// Creates the editor, seeding it from `initial_wkt` whenever that text
    /// decodes to a line, and fitting the viewport to the seeded bounds.
    pub fn new(config: MapConfig, initial_wkt: Option<&str>, on_change: F) -> Self {
        let mut editor = Self {
            viewport: Viewport {
                center: config.center,
                zoom: config.zoom,
            },
            config,
            feature: None,
            on_change,
        };

        if editor.is_ready() {
            if let Some(coords) = initial_wkt.filter(|t| !t.is_empty()).and_then(wkt::decode_linestring) {
                if !coords.is_empty() {
                    editor.fit_to(&coords);
                    editor.feature = Some(coords);
                }
            }
        }

        editor
    }

    /// Whether the map can render. Without an access token the surface is a
    /// placeholder and all interaction is ignored.
    pub fn is_ready(&self) -> bool {
        !self.config.access_token.is_empty()
    }

    pub fn current_wkt(&self) -> Option<String> {
        self.feature
            .as_ref()
            .map(|coords| wkt::encode_linestring(coords))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Applies a draw event and reports the resulting geometry to the host.
    /// Create and update replace the single tracked feature; delete clears
    /// it and reports the empty string.
    pub fn apply(&mut self, event: DrawEvent) {
        if !self.is_ready() {
            debug!("draw event ignored, no map access token configured");
            return;
        }

        match event {
            DrawEvent::Create(coords) | DrawEvent::Update(coords) => {
                let encoded = wkt::encode_linestring(&coords);
                self.feature = Some(coords);
                (self.on_change)(&encoded);
            }
            DrawEvent::Delete => {
                self.feature = None;
                (self.on_change)("");
            }
        }
    }

    fn fit_to(&mut self, coords: &[(f64, f64)]) {
        if let Some(bounds) = Bounds::from_coords(coords) {
            self.viewport = Viewport {
                center: bounds.center(),
                zoom: fit_zoom(&bounds),
            };
        }
    }
}

// Rough web-mercator fit for the default viewport, padded on each side.
fn fit_zoom(bounds: &Bounds) -> f64 {
    let span = (bounds.max.0 - bounds.min.0)
        .abs()
        .max((bounds.max.1 - bounds.min.1).abs());
    if span <= f64::EPSILON {
        return FIT_MAX_ZOOM;
    }
    let usable = (VIEWPORT_PX - 2.0 * FIT_PADDING_PX) / VIEWPORT_PX;
    ((360.0 * usable) / span).log2().clamp(0.0, FIT_MAX_ZOOM)
}
